//! Type-only validators

use crate::foundation::{KindSet, Validate, ValidationResult, Value, ValueKind};
use crate::validators::invalid_type;

// ============================================================================
// TYPE VALIDATOR
// ============================================================================

/// Accepts any datum that is an instance of one of the allowed kinds.
///
/// Instance checks follow [`Value::is_instance`]: `ValueKind::Int` admits
/// booleans and `ValueKind::Sequence` admits lists and tuples.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value, ValueKind};
/// use conform_validator::validators::TypeValidator;
///
/// let text_or_bytes = TypeValidator::new([ValueKind::Str, ValueKind::Bytes]);
/// assert!(text_or_bytes.validate(&Value::from("x")).is_ok());
/// assert!(text_or_bytes.validate(&Value::Int(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeValidator {
    allowed: KindSet,
}

impl TypeValidator {
    pub fn new(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            allowed: kinds.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &[ValueKind] {
        &self.allowed
    }
}

impl Validate for TypeValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        if self.allowed.iter().any(|kind| input.is_instance(*kind)) {
            Ok(())
        } else {
            Err(invalid_type(input, &self.allowed))
        }
    }
}

// ============================================================================
// BOOL VALIDATOR
// ============================================================================

/// Accepts booleans only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolValidator;

impl Validate for BoolValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        match input {
            Value::Bool(_) => Ok(()),
            _ => Err(invalid_type(input, &[ValueKind::Bool])),
        }
    }
}

#[must_use]
pub const fn bool_validator() -> BoolValidator {
    BoolValidator
}

// ============================================================================
// ANY VALIDATOR
// ============================================================================

/// Accepts every datum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyValidator;

impl Validate for AnyValidator {
    type Input = Value;

    fn validate(&self, _input: &Value) -> ValidationResult<()> {
        Ok(())
    }
}

#[must_use]
pub const fn any_value() -> AnyValidator {
    AnyValidator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    #[test]
    fn type_validator_uses_instance_checks() {
        let ints = TypeValidator::new([ValueKind::Int]);
        assert!(ints.validate(&Value::Int(1)).is_ok());
        assert!(ints.validate(&Value::Bool(true)).is_ok());

        let sequences = TypeValidator::new([ValueKind::Sequence]);
        assert!(sequences.validate(&Value::list([1])).is_ok());
        assert!(sequences.validate(&Value::tagged("a", 1)).is_ok());
    }

    #[test]
    fn type_validator_reports_allowed_kinds() {
        let validator = TypeValidator::new([ValueKind::Str, ValueKind::Bytes]);
        let err = validator.validate(&Value::Float(1.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidType {
                data: Value::Float(1.0),
                expected: [ValueKind::Str, ValueKind::Bytes].into_iter().collect(),
            }
        );
        assert_eq!(err.to_string(), "1.0 has type float, expected str | bytes");
    }

    #[test]
    fn bool_validator_rejects_ints() {
        assert!(bool_validator().validate(&Value::Bool(false)).is_ok());
        assert_eq!(
            bool_validator().validate(&Value::Int(0)).unwrap_err().code(),
            "invalid_type"
        );
    }

    #[test]
    fn any_accepts_everything() {
        for value in [Value::Null, Value::Int(1), Value::map([("a", 1)])] {
            assert!(any_value().validate(&value).is_ok());
        }
    }
}
