//! Numeric validators
//!
//! Integer and float validators check the datum's type and then its value
//! against a resolved [`BoundaryPair`]. Omitted edges are unlimited.

use crate::boundary::{BoundaryPair, BoundaryResolver, BoundaryValue, Edges, ResolverConfig};
use crate::foundation::{Validate, ValidationError, ValidationResult, Value, ValueKind};
use crate::validators::{check_value, edge_setters, invalid_type};

// ============================================================================
// INTEGER
// ============================================================================

/// Validates integers against a value range.
///
/// Booleans are integers at the type level but are rejected with
/// [`ValidationError::ProhibitedBoolValue`] unless `allow_bool` is set, in
/// which case they count as `0` and `1`.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::IntegerValidator;
///
/// let percent = IntegerValidator::builder()
///     .inclusive_minimum(0)
///     .inclusive_maximum(100)
///     .build()
///     .unwrap();
/// assert!(percent.validate(&Value::Int(42)).is_ok());
/// assert!(percent.validate(&Value::Int(101)).is_err());
/// assert!(percent.validate(&Value::Bool(true)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerValidator {
    bounds: BoundaryPair<i64>,
    allow_bool: bool,
}

impl IntegerValidator {
    #[must_use]
    pub fn builder() -> IntegerValidatorBuilder {
        IntegerValidatorBuilder::default()
    }

    #[must_use]
    pub const fn bounds(&self) -> &BoundaryPair<i64> {
        &self.bounds
    }

    #[must_use]
    pub const fn allows_bool(&self) -> bool {
        self.allow_bool
    }
}

impl Validate for IntegerValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let value = match input {
            Value::Int(value) => *value,
            Value::Bool(flag) if self.allow_bool => i64::from(*flag),
            Value::Bool(_) => {
                return Err(ValidationError::ProhibitedBoolValue {
                    data: input.clone(),
                });
            }
            _ => return Err(invalid_type(input, &[ValueKind::Int])),
        };
        check_value(value, &self.bounds, || input.clone())
    }
}

/// Builder for [`IntegerValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidatorBuilder {
    edges: Edges<i64>,
    allow_bool: bool,
    config: ResolverConfig,
}

impl IntegerValidatorBuilder {
    edge_setters! {
        edges: i64;
        inclusive_minimum => inclusive_minimum,
        exclusive_minimum => exclusive_minimum,
        inclusive_maximum => inclusive_maximum,
        exclusive_maximum => exclusive_maximum,
    }

    /// Accepts booleans as `0` and `1`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_bool(mut self, allow: bool) -> Self {
        self.allow_bool = allow;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves the edges and builds the validator.
    pub fn build(self) -> ValidationResult<IntegerValidator> {
        let bounds = BoundaryResolver::new(self.config).resolve(&self.edges.or_unlimited())?;
        Ok(IntegerValidator {
            bounds,
            allow_bool: self.allow_bool,
        })
    }
}

// ============================================================================
// FLOAT
// ============================================================================

/// Validates floats against a value range.
///
/// With `allow_int` set, integers are accepted and compared as floats;
/// booleans are still rejected. NaN fails any limited side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatValidator {
    bounds: BoundaryPair<f64>,
    allow_int: bool,
}

impl FloatValidator {
    #[must_use]
    pub fn builder() -> FloatValidatorBuilder {
        FloatValidatorBuilder::default()
    }

    #[must_use]
    pub const fn bounds(&self) -> &BoundaryPair<f64> {
        &self.bounds
    }

    fn expected(&self) -> &'static [ValueKind] {
        if self.allow_int {
            &[ValueKind::Float, ValueKind::Int]
        } else {
            &[ValueKind::Float]
        }
    }
}

impl Validate for FloatValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let value = match input {
            Value::Float(value) => *value,
            Value::Int(value) if self.allow_int => *value as f64,
            Value::Bool(_) if self.allow_int => {
                return Err(ValidationError::ProhibitedBoolValue {
                    data: input.clone(),
                });
            }
            _ => return Err(invalid_type(input, self.expected())),
        };
        check_value(value, &self.bounds, || input.clone())
    }
}

/// Builder for [`FloatValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatValidatorBuilder {
    edges: Edges<f64>,
    allow_int: bool,
    config: ResolverConfig,
}

impl FloatValidatorBuilder {
    edge_setters! {
        edges: f64;
        inclusive_minimum => inclusive_minimum,
        exclusive_minimum => exclusive_minimum,
        inclusive_maximum => inclusive_maximum,
        exclusive_maximum => exclusive_maximum,
    }

    /// Accepts integers as well as floats.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_int(mut self, allow: bool) -> Self {
        self.allow_int = allow;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ValidationResult<FloatValidator> {
        let bounds = BoundaryResolver::new(self.config).resolve(&self.edges.or_unlimited())?;
        Ok(FloatValidator {
            bounds,
            allow_int: self.allow_int,
        })
    }
}

// ============================================================================
// RANGES BETWEEN
// ============================================================================

/// Validates native comparable values against a resolved range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangesBetween<T> {
    bounds: BoundaryPair<T>,
}

impl<T> RangesBetween<T> {
    #[must_use]
    pub const fn bounds(&self) -> &BoundaryPair<T> {
        &self.bounds
    }
}

impl<T: BoundaryValue> Validate for RangesBetween<T> {
    type Input = T;

    fn validate(&self, input: &T) -> ValidationResult<()> {
        check_value(*input, &self.bounds, || (*input).into())
    }
}

/// Creates a range validator from explicit edges.
///
/// Unlike the typed validators, both sides must be supplied; use
/// [`Edges::unlimited_minimum`] or [`Edges::unlimited_maximum`] to leave one
/// open.
///
/// # Examples
///
/// ```
/// use conform_validator::boundary::Edges;
/// use conform_validator::foundation::Validate;
/// use conform_validator::validators::ranges_between;
///
/// let positive = ranges_between(Edges::<i64>::new().exclusive_minimum(0).unlimited_maximum()).unwrap();
/// assert!(positive.validate(&1).is_ok());
/// assert!(positive.validate(&0).is_err());
///
/// assert!(ranges_between(Edges::<i64>::new().inclusive_minimum(0)).is_err());
/// ```
pub fn ranges_between<T: BoundaryValue>(edges: Edges<T>) -> ValidationResult<RangesBetween<T>> {
    let bounds = BoundaryResolver::default().resolve(&edges)?;
    Ok(RangesBetween { bounds })
}
