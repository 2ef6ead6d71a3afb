//! Prelude module for convenient imports.
//!
//! Provides a single `use conform_validator::prelude::*;` import that brings
//! in the traits, value model, errors, boundaries and built-in validators.

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    DynValidator, EnumMember, Measurable, Validate, ValidateExt, ValidationError,
    ValidationResult, Value, ValueKind, from_fn, validate,
};

// ============================================================================
// BOUNDARIES
// ============================================================================

pub use crate::boundary::{
    Boundary, BoundaryPair, BoundaryResolver, Edge, Edges, ResolverConfig, Side,
    resolve_boundaries,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, AndAll, and, and_all};
