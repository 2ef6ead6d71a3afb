//! End-to-end validation scenarios through the public API.

use std::sync::Arc;
use std::thread;

use conform_validator::prelude::*;
use pretty_assertions::assert_eq;

// ============================================================================
// INTEGER RANGE
// ============================================================================

fn percent(allow_bool: bool) -> IntegerValidator {
    IntegerValidator::builder()
        .inclusive_minimum(0)
        .exclusive_maximum(100)
        .allow_bool(allow_bool)
        .build()
        .unwrap()
}

#[test]
fn integer_range_scenario() {
    let validator = percent(false);

    assert_eq!(validate(&validator, &Value::Int(0)), Ok(()));
    assert_eq!(
        validate(&validator, &Value::Int(100)),
        Err(ValidationError::InvalidMaximumValue {
            data: Value::Int(100),
            maximum: Boundary::exclusive(Value::Int(100)),
        })
    );
    assert_eq!(
        validate(&validator, &Value::Bool(true)),
        Err(ValidationError::ProhibitedBoolValue {
            data: Value::Bool(true),
        })
    );
    assert_eq!(validate(&percent(true), &Value::Bool(true)), Ok(()));
}

// ============================================================================
// MAPPING
// ============================================================================

#[test]
fn mapping_scenario() {
    let person = MappingValidator::builder()
        .field("name", StringValidator::builder().build().unwrap())
        .field(
            "age",
            IntegerValidator::builder().inclusive_minimum(0).build().unwrap(),
        )
        .build();

    let err = validate(
        &person,
        &Value::map([("name", Value::from("Al")), ("age", Value::Int(-1))]),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::FieldValidation {
            key: "age".to_owned(),
            error: Box::new(ValidationError::InvalidMinimumValue {
                data: Value::Int(-1),
                minimum: Boundary::inclusive(Value::Int(0)),
            }),
        }
    );
}

// ============================================================================
// NESTED PATHS
// ============================================================================

#[test]
fn nested_failure_keeps_path() {
    let item = MappingValidator::builder()
        .field("sku", StringValidator::builder().pattern("[A-Z]{3}-[0-9]+").build().unwrap())
        .field(
            "quantity",
            IntegerValidator::builder().exclusive_minimum(0).build().unwrap(),
        )
        .build();
    let order = MappingValidator::builder()
        .field(
            "items",
            SequenceValidator::builder()
                .items(item)
                .exclusive_min_length(0)
                .build()
                .unwrap(),
        )
        .build();

    let data = Value::from(serde_json::json!({
        "items": [
            {"sku": "ABC-1", "quantity": 2},
            {"sku": "ABC-2", "quantity": 0}
        ]
    }));

    let err = validate(&order, &data).unwrap_err();
    assert_eq!(err.path(), "items[1].quantity");
    assert_eq!(err.innermost().code(), "invalid_minimum_value");

    let empty = Value::from(serde_json::json!({"items": []}));
    assert_eq!(
        validate(&order, &empty).unwrap_err().innermost().code(),
        "invalid_minimum_size"
    );
}

// ============================================================================
// TAGGED UNION OF ENUM AND TEXT
// ============================================================================

#[test]
fn union_of_enum_and_text() {
    let color = EnumType::new("Color", [("Red", "#f00"), ("Blue", "#00f")]);
    let hex = StringValidator::builder()
        .pattern("#[0-9a-f]{3}")
        .build()
        .unwrap();
    let named = EnumValidator::new(color.clone(), &hex).unwrap();

    let paint = UnionValidator::builder()
        .choice("named", named)
        .choice("custom", hex)
        .build();

    assert!(validate(&paint, &Value::tagged("named", color.member("Red").unwrap())).is_ok());
    assert!(validate(&paint, &Value::tagged("custom", "#abc")).is_ok());
    assert_eq!(
        validate(&paint, &Value::tagged("custom", "red")).unwrap_err().path(),
        "custom"
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn resolver_config_from_json_changes_single_match_policy() {
    let config = ResolverConfig::from_json_str(r#"{"allow_single_match": true}"#).unwrap();
    let exactly_one = SequenceValidator::builder()
        .inclusive_min_length(1)
        .inclusive_max_length(1)
        .config(config)
        .build()
        .unwrap();

    assert!(validate(&exactly_one, &Value::list([1])).is_ok());
    assert!(validate(&exactly_one, &Value::list([1, 2])).is_err());

    let strict = SequenceValidator::builder()
        .inclusive_min_length(1)
        .inclusive_max_length(1)
        .build();
    assert_eq!(strict.unwrap_err().code(), "single_match_boundaries");
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn validators_are_shared_across_threads() {
    let validator: DynValidator = percent(false).and(from_fn(|v: &Value| match v {
        Value::Int(i) if i % 2 == 0 => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            data: v.clone(),
            pattern: "even".to_owned(),
        }),
    }))
    .boxed();

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                (0..100)
                    .map(|i| Value::Int(i + offset))
                    .filter(|value| validator.validate(value).is_ok())
                    .count()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [50, 49, 49, 48]);
}
