//! Sentinel values and the matching rule used by structural equality.
//!
//! A sentinel stands in for a concrete value to express matching intent:
//!
//! | Sentinel   | Matches                                   |
//! |------------|-------------------------------------------|
//! | `WILDCARD` | everything, including a missing value     |
//! | `ANY`      | any value that is present                 |
//! | `ABSENT`   | only a missing value                      |
//! | `MISSING`  | produced for "no value supplied"          |

use std::fmt;

use conform_validator::foundation::Value;
use serde::{Deserialize, Serialize};

// ============================================================================
// SENTINEL
// ============================================================================

/// Matching intent in place of a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentinel {
    /// Any present value.
    Any,
    /// Any value, present or not.
    Wildcard,
    /// The value must be missing.
    Absent,
    /// No value was supplied.
    Missing,
}

impl Sentinel {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Wildcard => "WILDCARD",
            Self::Absent => "ABSENT",
            Self::Missing => "MISSING",
        }
    }

    /// Sentinels that mandatory fields reject.
    #[must_use]
    pub const fn requires_optional(self) -> bool {
        matches!(self, Self::Wildcard | Self::Absent)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A concrete value or a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Sentinel(Sentinel),
    Value(Value),
}

pub const ANY: FieldValue = FieldValue::Sentinel(Sentinel::Any);
pub const WILDCARD: FieldValue = FieldValue::Sentinel(Sentinel::Wildcard);
pub const ABSENT: FieldValue = FieldValue::Sentinel(Sentinel::Absent);
pub const MISSING: FieldValue = FieldValue::Sentinel(Sentinel::Missing);

impl FieldValue {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Sentinel(Sentinel::Missing))
    }

    #[must_use]
    pub const fn sentinel(&self) -> Option<Sentinel> {
        match self {
            Self::Sentinel(sentinel) => Some(*sentinel),
            Self::Value(_) => None,
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Sentinel(_) => None,
        }
    }

    /// Turns an optional lookup result into a field value, `None` being
    /// [`MISSING`].
    #[must_use]
    pub fn from_lookup(value: Option<&Value>) -> Self {
        value.map_or(MISSING, |value| Self::Value(value.clone()))
    }

    /// Compares a declared value against an actual one.
    ///
    /// Rules apply in order: `WILDCARD` matches anything; `ANY` matches
    /// anything but `MISSING`; `ABSENT` matches `MISSING`; otherwise the two
    /// must be equal. Never fails.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match self.sentinel() {
            Some(Sentinel::Wildcard) => true,
            Some(Sentinel::Any) if !other.is_missing() => true,
            Some(Sentinel::Absent) if other.is_missing() => true,
            _ => self == other,
        }
    }
}

/// Free-function form of [`FieldValue::matches`].
#[must_use]
pub fn matches(expected: &FieldValue, actual: &FieldValue) -> bool {
    expected.matches(actual)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel(sentinel) => fmt::Display::fmt(sentinel, f),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<Sentinel> for FieldValue {
    fn from(sentinel: Sentinel) -> Self {
        Self::Sentinel(sentinel)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! field_value_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    Self::Value(Value::from(v))
                }
            }
        )+
    };
}

field_value_from!(bool, i32, i64, f64, &str, String, Vec<Value>);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WILDCARD, MISSING, true)]
    #[case(WILDCARD, FieldValue::from(5), true)]
    #[case(ANY, FieldValue::from(5), true)]
    #[case(ANY, ABSENT, true)]
    #[case(ANY, MISSING, false)]
    #[case(ABSENT, MISSING, true)]
    #[case(ABSENT, FieldValue::from(5), false)]
    #[case(ABSENT, ABSENT, true)]
    #[case(MISSING, MISSING, true)]
    #[case(FieldValue::from(5), FieldValue::from(5), true)]
    #[case(FieldValue::from(5), FieldValue::from(6), false)]
    #[case(FieldValue::from(5), ANY, false)]
    #[case(FieldValue::from(5), MISSING, false)]
    fn matching_rule(#[case] expected: FieldValue, #[case] actual: FieldValue, #[case] result: bool) {
        assert_eq!(matches(&expected, &actual), result);
    }

    #[test]
    fn only_wildcard_and_absent_require_optional() {
        assert!(Sentinel::Wildcard.requires_optional());
        assert!(Sentinel::Absent.requires_optional());
        assert!(!Sentinel::Any.requires_optional());
        assert!(!Sentinel::Missing.requires_optional());
    }

    #[test]
    fn display_uses_sentinel_names() {
        assert_eq!(ANY.to_string(), "ANY");
        assert_eq!(FieldValue::from("x").to_string(), r#""x""#);
    }

    #[test]
    fn lookup_conversion() {
        assert_eq!(FieldValue::from_lookup(None), MISSING);
        assert_eq!(
            FieldValue::from_lookup(Some(&Value::Int(1))),
            FieldValue::from(1)
        );
    }

    #[test]
    fn sentinel_serde_names() {
        assert_eq!(serde_json::to_string(&Sentinel::Wildcard).unwrap(), r#""WILDCARD""#);
        let parsed: Sentinel = serde_json::from_str(r#""ABSENT""#).unwrap();
        assert_eq!(parsed, Sentinel::Absent);
    }
}
