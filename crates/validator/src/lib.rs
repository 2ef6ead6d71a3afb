//! # conform-validator
//!
//! Boundary algebra and composable validators for conform templates.
//!
//! ## Quick Start
//!
//! ```rust
//! use conform_validator::prelude::*;
//!
//! let age = IntegerValidator::builder()
//!     .inclusive_minimum(0)
//!     .exclusive_maximum(150)
//!     .build()
//!     .unwrap();
//! assert!(validate(&age, &Value::Int(30)).is_ok());
//! assert_eq!(validate(&age, &Value::Bool(true)).unwrap_err().code(), "prohibited_bool_value");
//! ```
//!
//! ## Boundaries
//!
//! Bounded validators resolve their edges through
//! [`BoundaryResolver`](boundary::BoundaryResolver) at construction. Conflicting
//! edges (both edges on one side, a minimum above the maximum, a range of a
//! single value) are reported by `build()` instead of producing a validator
//! that can never pass.
//!
//! ## Built-in Validators
//!
//! - **Types**: [`TypeValidator`](validators::TypeValidator),
//!   [`BoolValidator`](validators::BoolValidator), [`AnyValidator`](validators::AnyValidator)
//! - **Numeric**: [`IntegerValidator`](validators::IntegerValidator),
//!   [`FloatValidator`](validators::FloatValidator)
//! - **Text**: [`StringValidator`](validators::StringValidator),
//!   [`BytesValidator`](validators::BytesValidator)
//! - **Containers**: [`SequenceValidator`](validators::SequenceValidator),
//!   [`MappingValidator`](validators::MappingValidator),
//!   [`UnionValidator`](validators::UnionValidator)
//! - **Enumerations**: [`EnumValidator`](validators::EnumValidator)

// ValidationError carries the offending datum by value; boxing it would add an
// allocation to every failing call.
#![allow(clippy::result_large_err)]

pub mod boundary;
pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
