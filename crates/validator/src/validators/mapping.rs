//! Structural mapping validators
//!
//! A [`MappingValidator`] checks a string-keyed mapping against an ordered
//! field list. Required keys are checked before any field validator runs.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{DynValidator, Validate, ValidationError, ValidationResult, Value, ValueKind};
use crate::validators::invalid_type;

// ============================================================================
// FIELD
// ============================================================================

/// One declared key of a mapping.
#[derive(Clone)]
pub struct MappingField {
    name: String,
    validator: DynValidator,
    optional: bool,
}

impl MappingField {
    pub fn new(name: impl Into<String>, validator: DynValidator, optional: bool) -> Self {
        Self {
            name: name.into(),
            validator,
            optional,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn validator(&self) -> &DynValidator {
        &self.validator
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Debug for MappingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingField")
            .field("name", &self.name)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MAPPING VALIDATOR
// ============================================================================

/// Validates a mapping against an ordered field list.
///
/// Keys not in the field list are ignored unless `deny_unknown_keys` is set,
/// in which case the first one fails with [`ValidationError::UnexpectedValue`].
#[derive(Debug, Clone, Default)]
pub struct MappingValidator {
    fields: Vec<MappingField>,
    deny_unknown_keys: bool,
}

impl MappingValidator {
    /// Creates a validator from an ordered field list.
    #[must_use]
    pub const fn new(fields: Vec<MappingField>) -> Self {
        Self {
            fields,
            deny_unknown_keys: false,
        }
    }

    #[must_use]
    pub fn builder() -> MappingValidatorBuilder {
        MappingValidatorBuilder::default()
    }

    #[must_use]
    pub fn fields(&self) -> &[MappingField] {
        &self.fields
    }

    fn field(&self, key: &str) -> Option<&MappingField> {
        self.fields.iter().find(|field| field.name == key)
    }
}

impl Validate for MappingValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let Some(map) = input.as_map() else {
            return Err(invalid_type(input, &[ValueKind::Map]));
        };

        if let Some(missing) = self
            .fields
            .iter()
            .find(|field| !field.optional && !map.contains_key(&field.name))
        {
            return Err(ValidationError::RequiredKeyMissing {
                data: input.clone(),
                key: missing.name.clone(),
            });
        }

        if self.deny_unknown_keys
            && let Some(key) = map.keys().find(|key| self.field(key).is_none())
        {
            return Err(ValidationError::UnexpectedValue { key: key.clone() });
        }

        for field in &self.fields {
            if let Some(value) = map.get(&field.name) {
                field
                    .validator
                    .validate(value)
                    .map_err(|error| ValidationError::FieldValidation {
                        key: field.name.clone(),
                        error: Box::new(error),
                    })?;
            }
        }
        Ok(())
    }
}

/// Builder for [`MappingValidator`].
#[derive(Debug, Clone, Default)]
pub struct MappingValidatorBuilder {
    fields: Vec<MappingField>,
    deny_unknown_keys: bool,
}

impl MappingValidatorBuilder {
    /// Declares a required key.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.fields.push(MappingField::new(name, Arc::new(validator), false));
        self
    }

    /// Declares a key that may be absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.fields.push(MappingField::new(name, Arc::new(validator), true));
        self
    }

    /// Appends a prepared field.
    #[must_use = "builder methods must be chained or built"]
    pub fn declare(mut self, field: MappingField) -> Self {
        self.fields.push(field);
        self
    }

    /// Rejects keys that are not declared.
    #[must_use = "builder methods must be chained or built"]
    pub const fn deny_unknown_keys(mut self) -> Self {
        self.deny_unknown_keys = true;
        self
    }

    #[must_use]
    pub fn build(self) -> MappingValidator {
        MappingValidator {
            fields: self.fields,
            deny_unknown_keys: self.deny_unknown_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::validators::{IntegerValidator, StringValidator};
    use pretty_assertions::assert_eq;

    fn person() -> MappingValidatorBuilder {
        MappingValidator::builder()
            .field("name", StringValidator::builder().build().unwrap())
            .optional_field(
                "age",
                IntegerValidator::builder().inclusive_minimum(0).build().unwrap(),
            )
    }

    #[test]
    fn field_failure_carries_key() {
        let err = person()
            .build()
            .validate(&Value::map([("name", Value::from("Al")), ("age", Value::Int(-1))]))
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

    #[test]
    fn required_key_is_checked_first() {
        let data = Value::map([("age", Value::from("old"))]);
        assert_eq!(
            person().build().validate(&data).unwrap_err(),
            ValidationError::RequiredKeyMissing {
                data: data.clone(),
                key: "name".to_owned(),
            }
        );
    }

    #[test]
    fn optional_key_may_be_absent() {
        let data = Value::map([("name", "Al")]);
        assert!(person().build().validate(&data).is_ok());
    }

    #[test]
    fn unknown_keys_follow_policy() {
        let data = Value::map([("name", Value::from("Al")), ("email", Value::from("a@b"))]);
        assert!(person().build().validate(&data).is_ok());
        assert_eq!(
            person().deny_unknown_keys().build().validate(&data).unwrap_err(),
            ValidationError::UnexpectedValue {
                key: "email".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_non_mappings() {
        assert_eq!(
            person().build().validate(&Value::list([1])).unwrap_err().code(),
            "invalid_type"
        );
    }

    #[test]
    fn fields_keep_declaration_order() {
        let validator = person().build();
        let names: Vec<_> = validator.fields().iter().map(MappingField::name).collect();
        assert_eq!(names, ["name", "age"]);
        assert!(validator.fields()[1].is_optional());
    }
}
