//! Text and byte-string validators
//!
//! Lengths count Unicode scalar values for text and bytes for byte strings.
//! Patterns must match the whole datum.

use regex::Regex;
use regex::bytes::{Regex as BytesRegex, RegexBuilder as BytesRegexBuilder};

use crate::boundary::{BoundaryPair, BoundaryResolver, Edges, ResolverConfig};
use crate::foundation::{Measurable, Validate, ValidationError, ValidationResult, Value, ValueKind};
use crate::validators::{check_size, invalid_type, length_setters};

/// Anchors a pattern so it must match the entire input.
fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{pattern})\z")
}

fn invalid_pattern(pattern: &str, error: &regex::Error) -> ValidationError {
    ValidationError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: error.to_string(),
    }
}

// ============================================================================
// STRING
// ============================================================================

/// Validates text by length and, optionally, a full-match pattern.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::StringValidator;
///
/// let slug = StringValidator::builder()
///     .inclusive_min_length(1)
///     .pattern("[a-z-]+")
///     .build()
///     .unwrap();
/// assert!(slug.validate(&Value::from("hello-world")).is_ok());
/// assert!(slug.validate(&Value::from("Hello")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringValidator {
    length: BoundaryPair<usize>,
    pattern: Option<(String, Regex)>,
}

impl StringValidator {
    #[must_use]
    pub fn builder() -> StringValidatorBuilder {
        StringValidatorBuilder::default()
    }

    #[must_use]
    pub const fn length(&self) -> &BoundaryPair<usize> {
        &self.length
    }

    /// The pattern as supplied, before anchoring.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|(source, _)| source.as_str())
    }
}

impl Validate for StringValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let Value::Str(text) = input else {
            return Err(invalid_type(input, &[ValueKind::Str]));
        };
        check_size(input, text.as_str().length().unwrap_or_default(), &self.length)?;

        match &self.pattern {
            Some((source, regex)) if !regex.is_match(text) => Err(ValidationError::InvalidFormat {
                data: input.clone(),
                pattern: source.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`StringValidator`].
#[derive(Debug, Clone, Default)]
pub struct StringValidatorBuilder {
    edges: Edges<i64>,
    pattern: Option<String>,
    config: ResolverConfig,
}

impl StringValidatorBuilder {
    length_setters!(edges);

    /// Requires the whole text to match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves the length edges and compiles the pattern.
    pub fn build(self) -> ValidationResult<StringValidator> {
        let length = BoundaryResolver::new(self.config).resolve_length(&self.edges.or_unlimited())?;
        let pattern = self
            .pattern
            .map(|source| {
                Regex::new(&anchored(&source))
                    .map(|regex| (source.clone(), regex))
                    .map_err(|error| invalid_pattern(&source, &error))
            })
            .transpose()?;
        Ok(StringValidator { length, pattern })
    }
}

// ============================================================================
// BYTES
// ============================================================================

/// Validates byte strings by length and, optionally, a full-match pattern.
///
/// Patterns are compiled without Unicode mode: `\xNN` is the byte `NN` and
/// `.` matches any byte but `\n`.
#[derive(Debug, Clone)]
pub struct BytesValidator {
    length: BoundaryPair<usize>,
    pattern: Option<(String, BytesRegex)>,
}

impl BytesValidator {
    #[must_use]
    pub fn builder() -> BytesValidatorBuilder {
        BytesValidatorBuilder::default()
    }

    #[must_use]
    pub const fn length(&self) -> &BoundaryPair<usize> {
        &self.length
    }
}

impl Validate for BytesValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let Value::Bytes(bytes) = input else {
            return Err(invalid_type(input, &[ValueKind::Bytes]));
        };
        check_size(input, bytes.len(), &self.length)?;

        match &self.pattern {
            Some((source, regex)) if !regex.is_match(bytes) => {
                Err(ValidationError::InvalidFormat {
                    data: input.clone(),
                    pattern: source.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for [`BytesValidator`].
#[derive(Debug, Clone, Default)]
pub struct BytesValidatorBuilder {
    edges: Edges<i64>,
    pattern: Option<String>,
    config: ResolverConfig,
}

impl BytesValidatorBuilder {
    length_setters!(edges);

    /// Requires the whole byte string to match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ValidationResult<BytesValidator> {
        let length = BoundaryResolver::new(self.config).resolve_length(&self.edges.or_unlimited())?;
        let pattern = self
            .pattern
            .map(|source| {
                BytesRegexBuilder::new(&anchored(&source))
                    .unicode(false)
                    .build()
                    .map(|regex| (source.clone(), regex))
                    .map_err(|error| invalid_pattern(&source, &error))
            })
            .transpose()?;
        Ok(BytesValidator { length, pattern })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use pretty_assertions::assert_eq;

    #[test]
    fn length_counts_chars() {
        let short = StringValidator::builder()
            .inclusive_max_length(3)
            .build()
            .unwrap();
        assert!(short.validate(&Value::from("h\u{e9}y")).is_ok());
        assert_eq!(
            short.validate(&Value::from("hello")).unwrap_err(),
            ValidationError::InvalidMaximumSize {
                data: Value::from("hello"),
                size: 5,
                maximum: Boundary::inclusive(Value::Int(3)),
            }
        );
    }

    #[test]
    fn exclusive_min_length() {
        let non_empty = StringValidator::builder()
            .exclusive_min_length(0)
            .build()
            .unwrap();
        assert_eq!(
            non_empty.validate(&Value::from("")).unwrap_err().code(),
            "invalid_minimum_size"
        );
    }

    #[test]
    fn pattern_must_match_entire_text() {
        let digits = StringValidator::builder().pattern(r"\d+").build().unwrap();
        assert!(digits.validate(&Value::from("123")).is_ok());
        assert_eq!(
            digits.validate(&Value::from("12a")).unwrap_err(),
            ValidationError::InvalidFormat {
                data: Value::from("12a"),
                pattern: r"\d+".to_owned(),
            }
        );
        assert!(digits.validate(&Value::from("a12")).is_err());
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let choice = StringValidator::builder().pattern("a|b").build().unwrap();
        assert!(choice.validate(&Value::from("b")).is_ok());
        assert!(choice.validate(&Value::from("ab")).is_err());
    }

    #[test]
    fn invalid_pattern_is_reported_at_build() {
        let err = StringValidator::builder().pattern("(").build().unwrap_err();
        assert_eq!(err.code(), "invalid_pattern");
    }

    #[test]
    fn negative_length_is_rejected_at_build() {
        let err = StringValidator::builder()
            .inclusive_min_length(-1)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "invalid_length");
    }

    #[test]
    fn string_rejects_bytes() {
        let any_text = StringValidator::builder().build().unwrap();
        assert_eq!(
            any_text
                .validate(&Value::from(b"abc".as_slice()))
                .unwrap_err()
                .code(),
            "invalid_type"
        );
    }

    #[test]
    fn bytes_length_and_pattern() {
        let magic = BytesValidator::builder()
            .inclusive_min_length(2)
            .pattern(r"(?s)\x89PNG.*")
            .build()
            .unwrap();
        assert!(magic.validate(&Value::from(b"\x89PNG\r\n".as_slice())).is_ok());
        assert_eq!(
            magic.validate(&Value::from(b"GIF8".as_slice())).unwrap_err().code(),
            "invalid_format"
        );
        assert_eq!(
            magic.validate(&Value::from(b"x".as_slice())).unwrap_err().code(),
            "invalid_minimum_size"
        );
        assert_eq!(
            magic.validate(&Value::from("\u{89}PNG")).unwrap_err().code(),
            "invalid_type"
        );
    }

    #[test]
    fn bytes_pattern_matches_raw_bytes() {
        let header = BytesValidator::builder().pattern(r"\x89PNG").build().unwrap();
        assert!(header.validate(&Value::from(b"\x89PNG".as_slice())).is_ok());
        assert!(header.validate(&Value::from("\u{89}PNG".as_bytes())).is_err());

        let any_middle = BytesValidator::builder().pattern("a.b").build().unwrap();
        assert!(any_middle.validate(&Value::from(b"a\xffb".as_slice())).is_ok());
        assert!(any_middle.validate(&Value::from(b"a\nb".as_slice())).is_err());
    }
}
