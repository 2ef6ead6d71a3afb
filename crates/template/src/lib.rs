//! # conform-template
//!
//! Templates declare named fields (validator, default, optionality) and
//! compare against actual data under sentinel rules:
//!
//! - [`ANY`](sentinel::ANY) matches any present value
//! - [`WILDCARD`](sentinel::WILDCARD) matches anything, present or not
//! - [`ABSENT`](sentinel::ABSENT) matches only a missing value
//! - [`MISSING`](sentinel::MISSING) stands for "no value supplied"
//!
//! ## Quick Start
//!
//! ```rust
//! use conform_template::prelude::*;
//!
//! let event = TemplateType::builder("Event")
//!     .field("kind", FieldDeclaration::new(StringValidator::builder().build().unwrap()))
//!     .field("id", FieldDeclaration::new(IntegerValidator::builder().build().unwrap()))
//!     .field("trace", FieldDeclaration::default().optional())
//!     .codecs(CodecRegistry::json())
//!     .build();
//!
//! let expected = event.instantiate([("kind", FieldValue::from("created")), ("id", ANY)]).unwrap();
//! let actual = event.decode(br#"{"kind": "created", "id": 7}"#, None).unwrap();
//! assert!(expected == actual);
//! ```

// ValidationError carries the offending datum by value; boxing it would add an
// allocation to every failing call.
#![allow(clippy::result_large_err)]

pub mod codec;
pub mod field;
pub mod sentinel;
pub mod template;

pub use codec::{Codec, CodecError, CodecRegistry, JsonCodec};
pub use field::FieldDeclaration;
pub use sentinel::{ABSENT, ANY, FieldValue, MISSING, Sentinel, WILDCARD, matches};
pub use template::{Mismatch, Template, TemplateType, TemplateTypeBuilder, resolve};

/// Prelude for template declarations and comparisons.
pub mod prelude {
    pub use crate::codec::{Codec, CodecError, CodecRegistry, JsonCodec};
    pub use crate::field::FieldDeclaration;
    pub use crate::sentinel::{ABSENT, ANY, FieldValue, MISSING, Sentinel, WILDCARD};
    pub use crate::template::{Mismatch, Template, TemplateType};

    pub use conform_validator::prelude::*;
}
