//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`ValueKind`], the dynamic data model
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationResult`]
//!
//! # Architecture
//!
//! ## 1. Results, not panics
//!
//! Every validator returns `Result<(), ValidationError>`. The first failure in
//! a chain is returned unchanged; container validators wrap child failures to
//! keep the path to the offending datum.
//!
//! ## 2. Composition
//!
//! Container validators hold [`DynValidator`] children, so any validator can be
//! nested inside a sequence, mapping or union validator.
//!
//! ## 3. Immutability
//!
//! Validators are configured once at construction. Validation never mutates
//! them, so a validator can be shared behind an `Arc` and used from many
//! threads without locking.

pub mod error;
pub mod traits;
pub mod value;

pub use error::{KindSet, ValidationError, ValidationResult};
pub use traits::{DynValidator, FromFn, Validate, ValidateExt, from_fn};
pub use value::{EnumMember, HashableValue, Measurable, Value, ValueKind};

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates a validator against a datum.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Value, validate};
/// use conform_validator::validators::IntegerValidator;
///
/// let age = IntegerValidator::builder().inclusive_minimum(0).build().unwrap();
/// assert!(validate(&age, &Value::Int(30)).is_ok());
/// assert!(validate(&age, &Value::Int(-1)).is_err());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate<V>(validator: &V, datum: &V::Input) -> ValidationResult<()>
where
    V: Validate + ?Sized,
{
    validator.validate(datum)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod core_tests {
    use super::*;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = Value;

        fn validate(&self, input: &Value) -> ValidationResult<()> {
            Err(ValidationError::UnexpectedValue {
                key: input.to_string(),
            })
        }
    }

    #[test]
    fn validate_forwards_to_validator() {
        let err = validate(&AlwaysFails, &Value::Int(7)).unwrap_err();
        assert_eq!(err, ValidationError::UnexpectedValue { key: "7".into() });
    }

    #[test]
    fn validate_accepts_trait_objects() {
        let validator: DynValidator = std::sync::Arc::new(AlwaysFails);
        assert!(validate(validator.as_ref(), &Value::Null).is_err());
    }
}
