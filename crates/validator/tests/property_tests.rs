//! Property-based tests for conform-validator.

use conform_validator::prelude::*;
use proptest::prelude::*;

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1e12f64..1e12).prop_map(Value::Float),
        ".{0,8}".prop_map(Value::Str),
    ]
}

// ============================================================================
// BOUNDARY SYMMETRY: [a, b] accepts exactly a..=b
// ============================================================================

proptest! {
    #[test]
    fn inclusive_pair_fits_exactly_closed_range(
        a in -1_000i64..1_000,
        span in 1i64..1_000,
        candidate in -3_000i64..3_000,
    ) {
        let b = a + span;
        let pair = resolve_boundaries(&Edges::between(a, b)).unwrap();
        prop_assert_eq!(pair.fits(&candidate), (a..=b).contains(&candidate));
    }

    #[test]
    fn inclusive_pair_resolves_at_extremes(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a < b);
        let pair = resolve_boundaries(&Edges::between(a, b)).unwrap();
        prop_assert!(pair.fits(&a));
        prop_assert!(pair.fits(&b));
    }
}

// ============================================================================
// SINGLE MATCH DETECTION
// ============================================================================

proptest! {
    #[test]
    fn equal_inclusive_edges_are_single_match(x in any::<i64>()) {
        let err = resolve_boundaries(&Edges::between(x, x)).unwrap_err();
        prop_assert_eq!(err.code(), "single_match_boundaries");
    }

    #[test]
    fn equal_inclusive_float_edges_are_single_match(x in -1e9f64..1e9) {
        let err = resolve_boundaries(&Edges::between(x, x)).unwrap_err();
        prop_assert_eq!(err.code(), "single_match_boundaries");
    }

    #[test]
    fn reversed_edges_overlap(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a > b);
        let err = resolve_boundaries(&Edges::between(a, b)).unwrap_err();
        prop_assert_eq!(err.code(), "overlapping_boundaries");
    }
}

// ============================================================================
// EXCLUSIVE / INCLUSIVE EQUIVALENCE AT THE EDGE
// ============================================================================

proptest! {
    #[test]
    fn exclusive_minimum_rejects_edge(a in -1_000_000i64..1_000_000) {
        let exclusive = IntegerValidator::builder().exclusive_minimum(a).build().unwrap();
        prop_assert!(exclusive.validate(&Value::Int(a + 1)).is_ok());
        prop_assert!(exclusive.validate(&Value::Int(a)).is_err());

        let inclusive = IntegerValidator::builder().inclusive_minimum(a).build().unwrap();
        prop_assert!(inclusive.validate(&Value::Int(a)).is_ok());
        prop_assert!(inclusive.validate(&Value::Int(a + 1)).is_ok());
    }
}

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn integer_validation_is_deterministic(value in leaf_value()) {
        let validator = IntegerValidator::builder()
            .inclusive_minimum(0)
            .exclusive_maximum(100)
            .build()
            .unwrap();
        prop_assert_eq!(validator.validate(&value), validator.validate(&value));
    }

    #[test]
    fn sequence_validation_is_deterministic(items in prop::collection::vec(leaf_value(), 0..8)) {
        let validator = SequenceValidator::builder()
            .items(StringValidator::builder().pattern("[a-z]*").build().unwrap())
            .unique_items(true)
            .build()
            .unwrap();
        let data = Value::List(items);
        prop_assert_eq!(validator.validate(&data), validator.validate(&data));
    }
}

// ============================================================================
// UNIQUENESS ROUND TRIP
// ============================================================================

proptest! {
    #[test]
    fn appending_a_present_item_breaks_uniqueness(
        items in prop::collection::hash_set(any::<i64>(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let validator = SequenceValidator::builder().unique_items(true).build().unwrap();
        let mut items: Vec<Value> = items.into_iter().map(Value::Int).collect();
        prop_assert!(validator.validate(&Value::List(items.clone())).is_ok());

        let duplicate = items[pick.index(items.len())].clone();
        items.push(duplicate.clone());
        let data = Value::List(items);
        prop_assert_eq!(
            validator.validate(&data).unwrap_err(),
            ValidationError::Uniqueness { data: data.clone(), duplicate }
        );
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = StringValidator::builder().inclusive_min_length(3).build().unwrap();
        let b = StringValidator::builder().inclusive_max_length(10).build().unwrap();
        let data = Value::from(s);

        let a_ok = a.validate(&data).is_ok();
        let b_ok = b.validate(&data).is_ok();
        let combined_ok = a.and(b).validate(&data).is_ok();

        prop_assert_eq!(combined_ok, a_ok && b_ok);
    }
}
