//! Length and size validators
//!
//! Standalone validators for any sized datum. `has_length_between` accepts
//! text, byte strings and sequences; `has_size_between` accepts sequences and
//! mappings.

use crate::boundary::{BoundaryPair, Edges, resolve_length_boundaries, resolve_size_boundaries};
use crate::foundation::{Measurable, Validate, ValidationResult, Value, ValueKind};
use crate::validators::{check_size, invalid_type};

const LENGTH_KINDS: &[ValueKind] = &[ValueKind::Str, ValueKind::Bytes, ValueKind::Sequence];
const SIZE_KINDS: &[ValueKind] = &[ValueKind::Sequence, ValueKind::Map];

fn check_measure(
    input: &Value,
    kinds: &[ValueKind],
    bounds: &BoundaryPair<usize>,
) -> ValidationResult<()> {
    match input.length() {
        Some(size) if kinds.iter().any(|kind| input.is_instance(*kind)) => {
            check_size(input, size, bounds)
        }
        _ => Err(invalid_type(input, kinds)),
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Validates the length of text, byte strings and sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasLengthBetween {
    bounds: BoundaryPair<usize>,
}

impl Validate for HasLengthBetween {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        check_measure(input, LENGTH_KINDS, &self.bounds)
    }
}

/// Creates a length validator. Both sides must be supplied.
///
/// # Examples
///
/// ```
/// use conform_validator::boundary::Edges;
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::has_length_between;
///
/// let short = has_length_between(Edges::new().unlimited_minimum().inclusive_maximum(3)).unwrap();
/// assert!(short.validate(&Value::from("abc")).is_ok());
/// assert!(short.validate(&Value::list([1, 2, 3, 4])).is_err());
/// ```
pub fn has_length_between(edges: Edges<i64>) -> ValidationResult<HasLengthBetween> {
    let bounds = resolve_length_boundaries(&edges)?;
    Ok(HasLengthBetween { bounds })
}

// ============================================================================
// SIZE
// ============================================================================

/// Validates the number of items in sequences and mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasSizeBetween {
    bounds: BoundaryPair<usize>,
}

impl Validate for HasSizeBetween {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        check_measure(input, SIZE_KINDS, &self.bounds)
    }
}

/// Creates a size validator. Both sides must be supplied.
pub fn has_size_between(edges: Edges<i64>) -> ValidationResult<HasSizeBetween> {
    let bounds = resolve_size_boundaries(&edges)?;
    Ok(HasSizeBetween { bounds })
}
