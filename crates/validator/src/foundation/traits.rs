//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ValidationResult, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure function from a datum to `Ok(())` or a
/// [`ValidationError`](crate::foundation::ValidationError). Implementations
/// read only their own configuration, so one validator can be shared across
/// threads and invoked any number of times with identical results.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, ValidationError, ValidationResult, Value};
///
/// struct NotNull;
///
/// impl Validate for NotNull {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> ValidationResult<()> {
///         match input {
///             Value::Null => Err(ValidationError::MissingValue { field: "value".into() }),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NotNull.validate(&Value::Int(1)).is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        (**self).validate(input)
    }
}

/// A type-erased, shareable validator over dynamic values.
///
/// Container validators (sequence, mapping, union) hold their children as
/// `DynValidator` so arbitrary validators can be nested.
pub type DynValidator = Arc<dyn Validate<Input = Value> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, which is returned unchanged.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Erases the validator's type so it can be nested in container validators.
    fn boxed(self) -> DynValidator
    where
        Self: Validate<Input = Value> + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// FUNCTION VALIDATOR
// ============================================================================

/// Adapts a pure closure into a validator over dynamic values.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F> Validate for FromFn<F>
where
    F: Fn(&Value) -> ValidationResult<()>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        (self.f)(input)
    }
}

/// Creates a validator from a closure.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, ValidationError, Value, from_fn};
///
/// let even = from_fn(|v: &Value| match v {
///     Value::Int(i) if i % 2 == 0 => Ok(()),
///     _ => Err(ValidationError::InvalidFormat { data: v.clone(), pattern: "even".into() }),
/// });
/// assert!(even.validate(&Value::Int(4)).is_ok());
/// assert!(even.validate(&Value::Int(3)).is_err());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Value) -> ValidationResult<()>,
{
    FromFn { f }
}

// ============================================================================
// TESTS
// ============================================================================
