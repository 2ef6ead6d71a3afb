//! Built-in validators
//!
//! Every validator here is configured once by a constructor or builder and
//! then validates [`Value`]s without further allocation of shared state.
//!
//! # Categories
//!
//! - **Types**: [`TypeValidator`], [`BoolValidator`], [`AnyValidator`]
//! - **Numeric**: [`IntegerValidator`], [`FloatValidator`], [`ranges_between`]
//! - **Text**: [`StringValidator`], [`BytesValidator`]
//! - **Enumerations**: [`EnumValidator`]
//! - **Containers**: [`SequenceValidator`], [`MappingValidator`], [`UnionValidator`],
//!   [`has_length_between`], [`has_size_between`]
//!
//! # Examples
//!
//! ```
//! use conform_validator::prelude::*;
//!
//! let person = MappingValidator::builder()
//!     .field("name", StringValidator::builder().build().unwrap())
//!     .field("age", IntegerValidator::builder().inclusive_minimum(0).build().unwrap())
//!     .build();
//!
//! let err = person
//!     .validate(&Value::map([("name", Value::from("Al")), ("age", Value::Int(-1))]))
//!     .unwrap_err();
//! assert_eq!(err.path(), "age");
//! ```

pub mod enumeration;
pub mod mapping;
pub mod numeric;
pub mod sequence;
pub mod size;
pub mod string;
pub mod types;
pub mod union;

pub use enumeration::{EnumType, EnumValidator};
pub use mapping::{MappingField, MappingValidator, MappingValidatorBuilder};
pub use numeric::{
    FloatValidator, FloatValidatorBuilder, IntegerValidator, IntegerValidatorBuilder,
    RangesBetween, ranges_between,
};
pub use sequence::{SequenceValidator, SequenceValidatorBuilder};
pub use size::{HasLengthBetween, HasSizeBetween, has_length_between, has_size_between};
pub use string::{BytesValidator, BytesValidatorBuilder, StringValidator, StringValidatorBuilder};
pub use types::{AnyValidator, BoolValidator, TypeValidator, any_value, bool_validator};
pub use union::{UnionValidator, UnionValidatorBuilder};

use crate::boundary::{BoundaryPair, BoundaryValue, Side};
use crate::foundation::{ValidationError, ValidationResult, Value, ValueKind};

// ============================================================================
// SHARED CHECKS
// ============================================================================

pub(crate) fn invalid_type(data: &Value, expected: &[ValueKind]) -> ValidationError {
    ValidationError::InvalidType {
        data: data.clone(),
        expected: expected.iter().copied().collect(),
    }
}

/// Applies the value fit rule; `data` is only materialized on failure.
pub(crate) fn check_value<T: BoundaryValue>(
    value: T,
    bounds: &BoundaryPair<T>,
    data: impl FnOnce() -> Value,
) -> ValidationResult<()> {
    match bounds.violated_side(&value) {
        None => Ok(()),
        Some(Side::Minimum) => Err(ValidationError::InvalidMinimumValue {
            data: data(),
            minimum: bounds.minimum().map(Into::into),
        }),
        Some(Side::Maximum) => Err(ValidationError::InvalidMaximumValue {
            data: data(),
            maximum: bounds.maximum().map(Into::into),
        }),
    }
}

/// Applies the fit rule to the size of a sized datum.
pub(crate) fn check_size(
    data: &Value,
    size: usize,
    bounds: &BoundaryPair<usize>,
) -> ValidationResult<()> {
    match bounds.violated_side(&size) {
        None => Ok(()),
        Some(Side::Minimum) => Err(ValidationError::InvalidMinimumSize {
            data: data.clone(),
            size,
            minimum: bounds.minimum().map(Into::into),
        }),
        Some(Side::Maximum) => Err(ValidationError::InvalidMaximumSize {
            data: data.clone(),
            size,
            maximum: bounds.maximum().map(Into::into),
        }),
    }
}

// ============================================================================
// BUILDER SETTERS
// ============================================================================

/// Generates builder setters that record one edge each in an `Edges` field.
macro_rules! edge_setters {
    ($field:ident: $ty:ty; $($method:ident => $edge:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Sets the `", stringify!($edge), "` edge.")]
            #[must_use = "builder methods must be chained or built"]
            pub fn $method(mut self, value: $ty) -> Self {
                self.$field = self.$field.$edge(value);
                self
            }
        )+
    };
}

pub(crate) use edge_setters;

/// Generates the length setters shared by text, byte and sequence builders.
macro_rules! length_setters {
    ($field:ident) => {
        $crate::validators::edge_setters! {
            $field: i64;
            inclusive_min_length => inclusive_minimum,
            exclusive_min_length => exclusive_minimum,
            inclusive_max_length => inclusive_maximum,
            exclusive_max_length => exclusive_maximum,
        }
    };
}

pub(crate) use length_setters;
