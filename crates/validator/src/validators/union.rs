//! Tagged union validators

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::foundation::{DynValidator, Validate, ValidationError, ValidationResult, Value, ValueKind};
use crate::validators::invalid_type;

/// Validates `(tag, value)` pairs against a `tag -> validator` table.
///
/// The datum must be a two-item tuple or list whose first item is a string
/// tag. An unknown tag fails with [`ValidationError::InvalidKey`]; a failing
/// branch is wrapped in [`ValidationError::ChoiceValidation`].
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::{IntegerValidator, StringValidator, UnionValidator};
///
/// let id = UnionValidator::builder()
///     .choice("number", IntegerValidator::builder().build().unwrap())
///     .choice("name", StringValidator::builder().build().unwrap())
///     .build();
///
/// assert!(id.validate(&Value::tagged("number", 7)).is_ok());
/// assert_eq!(id.validate(&Value::tagged("uuid", "x")).unwrap_err().code(), "invalid_key");
/// ```
#[derive(Clone, Default)]
pub struct UnionValidator {
    choices: IndexMap<String, DynValidator>,
}

impl fmt::Debug for UnionValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionValidator")
            .field("choices", &self.choices.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl UnionValidator {
    #[must_use]
    pub fn builder() -> UnionValidatorBuilder {
        UnionValidatorBuilder::default()
    }

    /// Declared tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }
}

impl Validate for UnionValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let Some([tag, value]) = input.as_items() else {
            return Err(invalid_type(input, &[ValueKind::Tuple, ValueKind::List]));
        };
        let Value::Str(tag) = tag else {
            return Err(invalid_type(tag, &[ValueKind::Str]));
        };

        let Some(validator) = self.choices.get(tag) else {
            return Err(ValidationError::InvalidKey {
                data: input.clone(),
                key: tag.clone(),
                allowed: self.choices.keys().cloned().collect(),
            });
        };

        validator
            .validate(value)
            .map_err(|error| ValidationError::ChoiceValidation {
                key: tag.clone(),
                error: Box::new(error),
            })
    }
}

/// Builder for [`UnionValidator`].
#[derive(Clone, Default)]
pub struct UnionValidatorBuilder {
    choices: IndexMap<String, DynValidator>,
}

impl UnionValidatorBuilder {
    /// Declares a branch. A repeated tag replaces the earlier validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn choice<V>(mut self, tag: impl Into<String>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.choices.insert(tag.into(), Arc::new(validator));
        self
    }

    #[must_use]
    pub fn build(self) -> UnionValidator {
        UnionValidator {
            choices: self.choices,
        }
    }
}
