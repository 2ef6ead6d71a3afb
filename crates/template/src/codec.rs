//! Codecs attached to template types
//!
//! A codec turns a [`Value`] into bytes and back. Template types keep their
//! codecs in a [`CodecRegistry`] keyed by tag; at most one codec is the
//! default, used when the caller does not name a tag.

use std::fmt;
use std::sync::Arc;

use conform_validator::foundation::{ValidationError, Value};
use indexmap::IndexMap;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to select a codec, to encode or decode, or to validate the value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("no codec registered under tag {tag:?}")]
    UnknownCodec { tag: String },

    #[error("no default codec registered")]
    NoDefaultCodec,

    #[error("cannot make {tag:?} the default codec, {existing:?} already is")]
    DuplicateDefaultCodec { existing: String, tag: String },

    #[error("{codec} codec failed: {reason}")]
    Malformed { codec: &'static str, reason: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl CodecError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownCodec { .. } => "unknown_codec",
            Self::NoDefaultCodec => "no_default_codec",
            Self::DuplicateDefaultCodec { .. } => "duplicate_default_codec",
            Self::Malformed { .. } => "malformed",
            Self::Invalid(error) => error.code(),
        }
    }
}

// ============================================================================
// CODEC TRAIT
// ============================================================================

/// Converts values to and from a wire format.
pub trait Codec: Send + Sync {
    /// Short name used in errors.
    fn name(&self) -> &'static str;

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError>;
}

// ============================================================================
// JSON
// ============================================================================

/// JSON codec built on `serde_json`.
///
/// Byte strings encode as arrays of integers and tuples as arrays, so decoding
/// returns lists for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    fn malformed(error: &serde_json::Error) -> CodecError {
        CodecError::Malformed {
            codec: "json",
            reason: error.to_string(),
        }
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        let json = value.to_json();
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        };
        encoded.map_err(|error| Self::malformed(&error))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        serde_json::from_slice::<serde_json::Value>(bytes)
            .map(Value::from)
            .map_err(|error| Self::malformed(&error))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Tag-addressed codecs with at most one default.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: IndexMap<String, Arc<dyn Codec>>,
    default: Option<String>,
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("tags", &self.codecs.keys().collect::<Vec<_>>())
            .field("default", &self.default)
            .finish()
    }
}

impl CodecRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with [`JsonCodec`] as the default under `"json"`.
    #[must_use]
    pub fn json() -> Self {
        let mut registry = Self::new();
        registry
            .codecs
            .insert("json".to_owned(), Arc::new(JsonCodec::new()));
        registry.default = Some("json".to_owned());
        registry
    }

    /// Registers a codec under `tag`, replacing any codec with that tag.
    pub fn register(&mut self, tag: impl Into<String>, codec: impl Codec + 'static) -> &mut Self {
        self.codecs.insert(tag.into(), Arc::new(codec));
        self
    }

    /// Registers a codec and makes it the default.
    pub fn register_default(
        &mut self,
        tag: impl Into<String>,
        codec: impl Codec + 'static,
    ) -> Result<&mut Self, CodecError> {
        let tag = tag.into();
        if let Some(existing) = &self.default {
            return Err(CodecError::DuplicateDefaultCodec {
                existing: existing.clone(),
                tag,
            });
        }
        self.codecs.insert(tag.clone(), Arc::new(codec));
        self.default = Some(tag);
        Ok(self)
    }

    #[must_use]
    pub fn default_tag(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }

    /// Selects the codec named by `tag`, or the default when `tag` is `None`.
    pub fn codec(&self, tag: Option<&str>) -> Result<&dyn Codec, CodecError> {
        let tag = match tag {
            Some(tag) => tag,
            None => self.default.as_deref().ok_or(CodecError::NoDefaultCodec)?,
        };
        let codec = self
            .codecs
            .get(tag)
            .ok_or_else(|| CodecError::UnknownCodec {
                tag: tag.to_owned(),
            })?;
        tracing::trace!(tag, codec = codec.name(), "codec selected");
        Ok(codec.as_ref())
    }
}
