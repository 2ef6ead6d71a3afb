//! Sequence validators
//!
//! Checks run in a fixed order: type, items, length, uniqueness. The first
//! failure is returned.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::boundary::{BoundaryPair, BoundaryResolver, Edges, ResolverConfig};
use crate::foundation::{
    DynValidator, HashableValue, Validate, ValidationError, ValidationResult, Value, ValueKind,
};
use crate::validators::{AnyValidator, check_size, invalid_type, length_setters};

/// Validates lists and tuples.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::{IntegerValidator, SequenceValidator};
///
/// let scores = SequenceValidator::builder()
///     .items(IntegerValidator::builder().inclusive_minimum(0).build().unwrap())
///     .inclusive_max_length(3)
///     .unique_items(true)
///     .build()
///     .unwrap();
///
/// assert!(scores.validate(&Value::list([1, 2, 3])).is_ok());
/// assert_eq!(scores.validate(&Value::list([1, -2])).unwrap_err().path(), "[1]");
/// assert!(scores.validate(&Value::list([1, 1])).is_err());
/// ```
#[derive(Clone)]
pub struct SequenceValidator {
    item: DynValidator,
    length: BoundaryPair<usize>,
    unique_items: bool,
}

impl fmt::Debug for SequenceValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceValidator")
            .field("item", &"<validator>")
            .field("length", &self.length)
            .field("unique_items", &self.unique_items)
            .finish()
    }
}

impl SequenceValidator {
    #[must_use]
    pub fn builder() -> SequenceValidatorBuilder {
        SequenceValidatorBuilder::default()
    }

    #[must_use]
    pub const fn length(&self) -> &BoundaryPair<usize> {
        &self.length
    }

    #[must_use]
    pub const fn unique_items(&self) -> bool {
        self.unique_items
    }
}

fn check_unique(input: &Value, items: &[Value]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().find(|item| !seen.insert(HashableValue(*item))) {
        Some(duplicate) => Err(ValidationError::Uniqueness {
            data: input.clone(),
            duplicate: duplicate.clone(),
        }),
        None => Ok(()),
    }
}

impl Validate for SequenceValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let Some(items) = input.as_items() else {
            return Err(invalid_type(input, &[ValueKind::Sequence]));
        };

        for (index, item) in items.iter().enumerate() {
            self.item
                .validate(item)
                .map_err(|error| ValidationError::ItemValidation {
                    data: input.clone(),
                    index,
                    item: item.clone(),
                    error: Box::new(error),
                })?;
        }

        check_size(input, items.len(), &self.length)?;

        if self.unique_items {
            check_unique(input, items)?;
        }
        Ok(())
    }
}

/// Builder for [`SequenceValidator`].
#[derive(Clone)]
pub struct SequenceValidatorBuilder {
    item: DynValidator,
    edges: Edges<i64>,
    unique_items: bool,
    config: ResolverConfig,
}

impl Default for SequenceValidatorBuilder {
    fn default() -> Self {
        Self {
            item: Arc::new(AnyValidator),
            edges: Edges::new(),
            unique_items: false,
            config: ResolverConfig::default(),
        }
    }
}

impl SequenceValidatorBuilder {
    length_setters!(edges);

    /// Sets the validator applied to every item. Items are unchecked by default.
    #[must_use = "builder methods must be chained or built"]
    pub fn items<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.item = Arc::new(validator);
        self
    }

    /// Sets an already shared item validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn items_shared(mut self, validator: DynValidator) -> Self {
        self.item = validator;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = unique;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ValidationResult<SequenceValidator> {
        let length = BoundaryResolver::new(self.config).resolve_length(&self.edges.or_unlimited())?;
        Ok(SequenceValidator {
            item: self.item,
            length,
            unique_items: self.unique_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::validators::IntegerValidator;
    use pretty_assertions::assert_eq;

    fn non_negative() -> IntegerValidator {
        IntegerValidator::builder().inclusive_minimum(0).build().unwrap()
    }

    #[test]
    fn rejects_non_sequences() {
        let any = SequenceValidator::builder().build().unwrap();
        assert_eq!(
            any.validate(&Value::from("abc")).unwrap_err(),
            ValidationError::InvalidType {
                data: Value::from("abc"),
                expected: [ValueKind::Sequence].into_iter().collect(),
            }
        );
        assert!(any.validate(&Value::tagged("a", 1)).is_ok());
    }

    #[test]
    fn first_item_failure_is_wrapped() {
        let validator = SequenceValidator::builder()
            .items(non_negative())
            .build()
            .unwrap();
        let data = Value::list([1, -1, -2]);
        assert_eq!(
            validator.validate(&data).unwrap_err(),
            ValidationError::ItemValidation {
                data: data.clone(),
                index: 1,
                item: Value::Int(-1),
                error: Box::new(ValidationError::InvalidMinimumValue {
                    data: Value::Int(-1),
                    minimum: Boundary::inclusive(Value::Int(0)),
                }),
            }
        );
    }

    #[test]
    fn items_are_checked_before_length() {
        let validator = SequenceValidator::builder()
            .items(non_negative())
            .inclusive_max_length(1)
            .build()
            .unwrap();
        assert_eq!(
            validator.validate(&Value::list([1, -1])).unwrap_err().code(),
            "item_validation"
        );
        assert_eq!(
            validator.validate(&Value::list([1, 1])).unwrap_err().code(),
            "invalid_maximum_size"
        );
    }

    #[test]
    fn uniqueness_reports_first_duplicate() {
        let validator = SequenceValidator::builder().unique_items(true).build().unwrap();
        let data = Value::list([Value::Int(1), Value::from("a"), Value::from("a"), Value::Int(1)]);
        assert_eq!(
            validator.validate(&data).unwrap_err(),
            ValidationError::Uniqueness {
                data: data.clone(),
                duplicate: Value::from("a"),
            }
        );
    }

    #[test]
    fn uniqueness_compares_across_numeric_kinds() {
        let validator = SequenceValidator::builder().unique_items(true).build().unwrap();
        let data = Value::list([Value::Int(1), Value::Bool(true), Value::Float(1.0)]);
        let ValidationError::Uniqueness { duplicate, .. } = validator.validate(&data).unwrap_err()
        else {
            panic!("expected a uniqueness error");
        };
        assert!(matches!(duplicate, Value::Bool(true)));
        assert!(validator.validate(&Value::list([Value::Int(1), Value::Float(1.5)])).is_ok());
        assert!(validator.validate(&Value::list([Value::Int(0), Value::Float(-0.0)])).is_err());
    }

    #[test]
    fn uniqueness_handles_unhashable_shapes() {
        let validator = SequenceValidator::builder().unique_items(true).build().unwrap();
        let data = Value::list([
            Value::map([("a", 1), ("b", 2)]),
            Value::map([("b", 2), ("a", 1)]),
        ]);
        assert_eq!(validator.validate(&data).unwrap_err().code(), "uniqueness");
        assert!(validator.validate(&Value::list([Value::list([1]), Value::list([2])])).is_ok());
    }

    #[test]
    fn debug_hides_item_validator() {
        let validator = SequenceValidator::builder().build().unwrap();
        assert!(format!("{validator:?}").contains("<validator>"));
    }
}
