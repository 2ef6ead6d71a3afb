//! Configuration for boundary resolution

use serde::{Deserialize, Serialize};

/// Policy applied by [`BoundaryResolver`](super::BoundaryResolver).
///
/// Every key is optional when deserializing; missing keys take the strict
/// defaults.
///
/// # Examples
///
/// ```
/// use conform_validator::boundary::ResolverConfig;
///
/// let config = ResolverConfig::from_json_str(r#"{"allow_single_match": true}"#).unwrap();
/// assert!(config.allow_single_match);
/// assert_eq!(config.max_length, ResolverConfig::default().max_length);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Accept a range that collapses to a single value.
    pub allow_single_match: bool,
    /// Largest edge accepted for length boundaries.
    pub max_length: usize,
    /// Largest edge accepted for size boundaries.
    pub max_size: usize,
}

/// Largest length a container can report on this platform.
pub const PLATFORM_MAX_SIZE: usize = isize::MAX as usize;

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ResolverConfig {
    /// Every conflict is reported.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_single_match: false,
            max_length: PLATFORM_MAX_SIZE,
            max_size: PLATFORM_MAX_SIZE,
        }
    }

    /// Single-value ranges are accepted.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            allow_single_match: true,
            ..Self::strict()
        }
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_allow_single_match(mut self, allow: bool) -> Self {
        self.allow_single_match = allow;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert_eq!(ResolverConfig::default(), ResolverConfig::strict());
        assert!(!ResolverConfig::default().allow_single_match);
    }

    #[test]
    fn lenient_allows_single_match() {
        let config = ResolverConfig::lenient();
        assert!(config.allow_single_match);
        assert_eq!(config.max_size, PLATFORM_MAX_SIZE);
    }

    #[test]
    fn json_roundtrip_keeps_limits() {
        let config = ResolverConfig::strict().with_max_length(64);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ResolverConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(ResolverConfig::from_json_str(r#"{"max_length": "big"}"#).is_err());
    }
}
