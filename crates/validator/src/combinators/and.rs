//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which chains two validators:
//! both must pass, and the first failure is returned unmodified.
//!
//! # Examples
//!
//! ```
//! use conform_validator::foundation::{Validate, ValidateExt, Value};
//! use conform_validator::validators::{IntegerValidator, TypeValidator};
//! use conform_validator::foundation::ValueKind;
//!
//! let validator = TypeValidator::new([ValueKind::Int])
//!     .and(IntegerValidator::builder().inclusive_minimum(0).build().unwrap());
//! assert!(validator.validate(&Value::Int(3)).is_ok());
//! assert!(validator.validate(&Value::Int(-3)).is_err());
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub const fn left(&self) -> &L {
        &self.left
    }

    pub const fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a vector of validators.
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines any number of validators with logical AND, short-circuiting on
/// the first failure.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(input))
    }
}
