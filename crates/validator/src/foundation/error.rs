//! Error types for validation failures
//!
//! Every failure the engine can report is a variant of [`ValidationError`].
//! Variants carry the structured context of the failure (the offending datum,
//! the violated boundary, the failing key or index) so callers can inspect
//! them programmatically instead of parsing messages.
//!
//! Wrapping variants (`ItemValidation`, `FieldValidation`, `ChoiceValidation`,
//! `InvalidMember`) hold the child error unchanged, preserving the path to the
//! innermost failure.

use std::fmt;

use smallvec::SmallVec;

use crate::boundary::{Boundary, Side};
use crate::foundation::value::{Value, ValueKind};

/// Allowed-type set carried by [`ValidationError::InvalidType`].
pub type KindSet = SmallVec<[ValueKind; 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    // ── boundary resolution ────────────────────────────────────────────────
    /// Neither an inclusive nor an exclusive edge was supplied for a side.
    #[error("no {side} boundary supplied")]
    MissingBoundary { side: Side },

    /// Both an inclusive and an exclusive edge were supplied for one side.
    #[error("inclusive ({inclusive}) and exclusive ({exclusive}) {side} boundaries are mutually exclusive")]
    MutuallyExclusiveBoundaries {
        side: Side,
        inclusive: Boundary<Value>,
        exclusive: Boundary<Value>,
    },

    /// The resolved minimum lies above the resolved maximum.
    #[error("minimum {minimum} overlaps maximum {maximum}")]
    OverlappingBoundaries {
        minimum: Boundary<Value>,
        maximum: Boundary<Value>,
    },

    /// The resolved range admits exactly one value.
    #[error("minimum {minimum} and maximum {maximum} match a single value")]
    SingleMatchBoundaries {
        minimum: Boundary<Value>,
        maximum: Boundary<Value>,
    },

    /// A length edge lies outside `[0, limit]`.
    #[error("{side} length {value} is outside [0, {limit}]")]
    InvalidLength { side: Side, value: i64, limit: usize },

    /// A size edge lies outside `[0, limit]`.
    #[error("{side} size {value} is outside [0, {limit}]")]
    InvalidSize { side: Side, value: i64, limit: usize },

    /// A pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An enumeration member's value failed the member-value validator.
    #[error("member {enumeration}.{member} is invalid: {error}")]
    InvalidMember {
        enumeration: String,
        member: String,
        #[source]
        error: Box<ValidationError>,
    },

    // ── datum checks ───────────────────────────────────────────────────────
    /// The datum's runtime type is not in the allowed set.
    #[error("{data} has type {}, expected {}", .data.kind(), KindList(.expected))]
    InvalidType { data: Value, expected: KindSet },

    /// A boolean was given to an integer validator that does not allow it.
    #[error("boolean {data} is not accepted as an integer")]
    ProhibitedBoolValue { data: Value },

    #[error("{data} is below the minimum {minimum}")]
    InvalidMinimumValue { data: Value, minimum: Boundary<Value> },

    #[error("{data} is above the maximum {maximum}")]
    InvalidMaximumValue { data: Value, maximum: Boundary<Value> },

    #[error("size {size} of {data} is below the minimum {minimum}")]
    InvalidMinimumSize {
        data: Value,
        size: usize,
        minimum: Boundary<Value>,
    },

    #[error("size {size} of {data} is above the maximum {maximum}")]
    InvalidMaximumSize {
        data: Value,
        size: usize,
        maximum: Boundary<Value>,
    },

    /// The datum does not fully match the pattern.
    #[error("{data} does not match {pattern:?}")]
    InvalidFormat { data: Value, pattern: String },

    /// A sequence item failed the item validator.
    #[error("item {index} ({item}) is invalid: {error}")]
    ItemValidation {
        data: Value,
        index: usize,
        item: Value,
        #[source]
        error: Box<ValidationError>,
    },

    /// A sequence requiring unique items contains a duplicate.
    #[error("{data} contains duplicate item {duplicate}")]
    Uniqueness { data: Value, duplicate: Value },

    /// A mandatory mapping key is absent.
    #[error("required key {key:?} is missing")]
    RequiredKeyMissing { data: Value, key: String },

    /// A mapping field's value failed its validator.
    #[error("field {key:?} is invalid: {error}")]
    FieldValidation {
        key: String,
        #[source]
        error: Box<ValidationError>,
    },

    /// A union tag is not one of the declared choices.
    #[error("unknown choice {key:?}, expected one of {allowed:?}")]
    InvalidKey {
        data: Value,
        key: String,
        allowed: Vec<String>,
    },

    /// The value of the chosen union branch failed its validator.
    #[error("choice {key:?} is invalid: {error}")]
    ChoiceValidation {
        key: String,
        #[source]
        error: Box<ValidationError>,
    },

    // ── field level ────────────────────────────────────────────────────────
    /// No value was supplied for a field without a default.
    #[error("missing value for field {field:?}")]
    MissingValue { field: String },

    /// A sentinel that is only legal on optional fields was given to a
    /// mandatory one.
    #[error("{sentinel} is not allowed for mandatory field {field:?}")]
    ProhibitedValue {
        field: String,
        sentinel: &'static str,
    },

    /// A key not declared by the template was supplied.
    #[error("unexpected key {key:?}")]
    UnexpectedValue { key: String },
}

impl ValidationError {
    /// Stable snake-case error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingBoundary { .. } => "missing_boundary",
            Self::MutuallyExclusiveBoundaries { .. } => "mutually_exclusive_boundaries",
            Self::OverlappingBoundaries { .. } => "overlapping_boundaries",
            Self::SingleMatchBoundaries { .. } => "single_match_boundaries",
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidSize { .. } => "invalid_size",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::InvalidMember { .. } => "invalid_member",
            Self::InvalidType { .. } => "invalid_type",
            Self::ProhibitedBoolValue { .. } => "prohibited_bool_value",
            Self::InvalidMinimumValue { .. } => "invalid_minimum_value",
            Self::InvalidMaximumValue { .. } => "invalid_maximum_value",
            Self::InvalidMinimumSize { .. } => "invalid_minimum_size",
            Self::InvalidMaximumSize { .. } => "invalid_maximum_size",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::ItemValidation { .. } => "item_validation",
            Self::Uniqueness { .. } => "uniqueness",
            Self::RequiredKeyMissing { .. } => "required_key_missing",
            Self::FieldValidation { .. } => "field_validation",
            Self::InvalidKey { .. } => "invalid_key",
            Self::ChoiceValidation { .. } => "choice_validation",
            Self::MissingValue { .. } => "missing_value",
            Self::ProhibitedValue { .. } => "prohibited_value",
            Self::UnexpectedValue { .. } => "unexpected_value",
        }
    }

    /// Returns the wrapped child error, if this variant wraps one.
    #[must_use]
    pub fn child(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidMember { error, .. }
            | Self::ItemValidation { error, .. }
            | Self::FieldValidation { error, .. }
            | Self::ChoiceValidation { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Iterates this error and every wrapped child, outermost first.
    pub fn source_chain(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::successors(Some(self), |error| error.child())
    }

    /// Follows wrapped errors down to the innermost failure.
    #[must_use]
    pub fn innermost(&self) -> &ValidationError {
        self.source_chain().last().unwrap_or(self)
    }

    /// Renders the key/index path of wrapped failures, e.g. `items[2].age`.
    ///
    /// Returns an empty string for errors that wrap nothing.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::ItemValidation { index, .. } => {
                    path.push_str(&format!("[{index}]"));
                }
                Self::FieldValidation { key, .. } | Self::ChoiceValidation { key, .. } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                }
                Self::InvalidMember { member, .. } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(member);
                }
                _ => {}
            }
            match current.child() {
                Some(child) => current = child,
                None => return path,
            }
        }
    }
}

struct KindList<'a>(&'a KindSet);

impl fmt::Display for KindList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// A validation result using [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn nested() -> ValidationError {
        ValidationError::FieldValidation {
            key: "items".to_owned(),
            error: Box::new(ValidationError::ItemValidation {
                data: Value::list([Value::map([("age", -1)])]),
                index: 0,
                item: Value::map([("age", -1)]),
                error: Box::new(ValidationError::FieldValidation {
                    key: "age".to_owned(),
                    error: Box::new(ValidationError::InvalidMinimumValue {
                        data: Value::Int(-1),
                        minimum: Boundary::inclusive(Value::Int(0)),
                    }),
                }),
            }),
        }
    }

    #[test]
    fn path_follows_wrapped_errors() {
        assert_eq!(nested().path(), "items[0].age");
    }

    #[test]
    fn source_chain_lists_codes_outermost_first() {
        let codes: Vec<_> = nested().source_chain().map(ValidationError::code).collect();
        assert_eq!(
            codes,
            [
                "field_validation",
                "item_validation",
                "field_validation",
                "invalid_minimum_value"
            ]
        );
    }

    #[test]
    fn innermost_returns_leaf() {
        assert_eq!(nested().innermost().code(), "invalid_minimum_value");
    }

    #[test]
    fn leaf_has_empty_path() {
        let error = ValidationError::MissingValue {
            field: "name".to_owned(),
        };
        assert_eq!(error.path(), "");
        assert!(error.child().is_none());
    }

    #[test]
    fn invalid_type_message_lists_kinds() {
        let error = ValidationError::InvalidType {
            data: Value::from("x"),
            expected: smallvec![ValueKind::Int, ValueKind::Float],
        };
        assert_eq!(error.to_string(), r#""x" has type str, expected int | float"#);
    }

    #[test]
    fn source_chain_is_exposed() {
        use std::error::Error;

        let error = nested();
        let source = error.source().map(ToString::to_string);
        assert!(source.is_some_and(|s| s.starts_with("item 0")));
    }
}
