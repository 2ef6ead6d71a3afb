//! Validator combinators
//!
//! Combinators compose existing validators without changing their errors.

pub mod and;

pub use and::{And, AndAll, and, and_all};
