//! Field declarations
//!
//! A [`FieldDeclaration`] pairs a validator with a default and an
//! optionality flag. [`FieldDeclaration::check`] decides the effective value of
//! the field for one supplied value:
//!
//! 1. `MISSING` takes the default, or fails with `MissingValue` when there is
//!    none.
//! 2. `ABSENT` and `WILDCARD` fail with `ProhibitedValue` unless the field is
//!    optional. `ANY` is accepted without running the validator.
//! 3. A concrete value is passed to the validator.

use std::fmt;
use std::sync::Arc;

use conform_validator::foundation::{
    DynValidator, Validate, ValidationError, ValidationResult, Value,
};
use conform_validator::validators::AnyValidator;

use crate::sentinel::{ABSENT, FieldValue, MISSING, Sentinel};

/// Declaration of one template field.
#[derive(Clone)]
pub struct FieldDeclaration {
    validator: DynValidator,
    default: FieldValue,
    optional: bool,
}

impl fmt::Debug for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDeclaration")
            .field("default", &self.default)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

impl Default for FieldDeclaration {
    fn default() -> Self {
        Self::shared(Arc::new(AnyValidator))
    }
}

impl FieldDeclaration {
    /// A mandatory field without a default.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        Self::shared(Arc::new(validator))
    }

    /// Same as [`FieldDeclaration::new`] for an already shared validator.
    #[must_use]
    pub const fn shared(validator: DynValidator) -> Self {
        Self {
            validator,
            default: MISSING,
            optional: false,
        }
    }

    /// Value used when none is supplied.
    #[must_use = "builder methods must be chained or used"]
    pub fn with_default(mut self, default: impl Into<FieldValue>) -> Self {
        self.default = default.into();
        self
    }

    /// Allows `ABSENT` and `WILDCARD`. A field made optional without a default
    /// defaults to `ABSENT`.
    #[must_use = "builder methods must be chained or used"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        if self.default.is_missing() {
            self.default = ABSENT;
        }
        self
    }

    #[must_use]
    pub const fn validator(&self) -> &DynValidator {
        &self.validator
    }

    #[must_use]
    pub const fn default_value(&self) -> &FieldValue {
        &self.default
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Resolves the effective value of field `name` for a supplied value.
    ///
    /// Validator failures are wrapped in `FieldValidation` carrying `name`.
    pub fn check(&self, name: &str, value: FieldValue) -> ValidationResult<FieldValue> {
        let effective = if value.is_missing() {
            if self.default.is_missing() {
                return Err(ValidationError::MissingValue {
                    field: name.to_owned(),
                });
            }
            self.default.clone()
        } else {
            value
        };

        match &effective {
            FieldValue::Sentinel(sentinel) if sentinel.requires_optional() && !self.optional => {
                Err(ValidationError::ProhibitedValue {
                    field: name.to_owned(),
                    sentinel: sentinel.name(),
                })
            }
            FieldValue::Sentinel(Sentinel::Any | Sentinel::Absent | Sentinel::Wildcard) => {
                Ok(effective)
            }
            FieldValue::Sentinel(Sentinel::Missing) => Err(ValidationError::MissingValue {
                field: name.to_owned(),
            }),
            FieldValue::Value(datum) => {
                self.validator
                    .validate(datum)
                    .map_err(|error| ValidationError::FieldValidation {
                        key: name.to_owned(),
                        error: Box::new(error),
                    })?;
                Ok(effective)
            }
        }
    }
}
