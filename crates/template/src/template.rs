//! Template types and instances
//!
//! A [`TemplateType`] is declared once from an ordered list of named
//! [`FieldDeclaration`]s. Instantiating it resolves every field to its
//! effective value; the resulting [`Template`] is immutable and compares
//! against actual data field by field under the sentinel matching rule.
//!
//! # Examples
//!
//! ```
//! use conform_template::prelude::*;
//!
//! let user = TemplateType::builder("User")
//!     .field("name", FieldDeclaration::new(StringValidator::builder().build().unwrap()))
//!     .field(
//!         "age",
//!         FieldDeclaration::new(IntegerValidator::builder().inclusive_minimum(0).build().unwrap())
//!             .with_default(0),
//!     )
//!     .build();
//!
//! let expected = user.instantiate([("name", ANY)]).unwrap();
//! assert!(expected == Value::map([("name", Value::from("Al")), ("age", Value::Int(0))]));
//! assert!(expected != Value::map([("age", Value::Int(0))]));
//! ```

use std::fmt;

use conform_validator::foundation::{Validate, ValidationError, ValidationResult, Value, ValueKind};
use conform_validator::validators::{MappingField, MappingValidator};
use indexmap::IndexMap;

use crate::codec::{CodecError, CodecRegistry};
use crate::field::FieldDeclaration;
use crate::sentinel::{FieldValue, MISSING};

// ============================================================================
// TEMPLATE TYPE
// ============================================================================

/// A declared structure: ordered fields plus the codecs attached to it.
#[derive(Debug, Clone)]
pub struct TemplateType {
    name: String,
    fields: IndexMap<String, FieldDeclaration>,
    validator: MappingValidator,
    codecs: CodecRegistry,
}

impl TemplateType {
    pub fn builder(name: impl Into<String>) -> TemplateTypeBuilder {
        TemplateTypeBuilder {
            name: name.into(),
            fields: IndexMap::new(),
            codecs: CodecRegistry::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDeclaration)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.get(name)
    }

    /// Structural validator for data of this type.
    ///
    /// Fields that are neither optional nor defaulted are required keys, and
    /// undeclared keys are rejected.
    #[must_use]
    pub const fn validator(&self) -> &MappingValidator {
        &self.validator
    }

    #[must_use]
    pub const fn codecs(&self) -> &CodecRegistry {
        &self.codecs
    }

    /// Resolves every declared field against the supplied values.
    ///
    /// Fields not supplied are `MISSING`. Fails on the first undeclared key or
    /// the first field that does not check; no partial template is returned.
    pub fn instantiate<K, V, I>(&self, values: I) -> ValidationResult<Template>
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut supplied: IndexMap<String, FieldValue> = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if let Some(key) = supplied.keys().find(|key| !self.fields.contains_key(*key)) {
            tracing::debug!(template = %self.name, key = %key, "undeclared key supplied");
            return Err(ValidationError::UnexpectedValue { key: key.clone() });
        }

        let mut resolved = IndexMap::with_capacity(self.fields.len());
        for (name, field) in &self.fields {
            let value = supplied.swap_remove(name).unwrap_or(MISSING);
            let effective = field.check(name, value).inspect_err(|error| {
                tracing::debug!(template = %self.name, field = %name, %error, "field rejected");
            })?;
            resolved.insert(name.clone(), effective);
        }

        Ok(Template {
            type_name: self.name.clone(),
            values: resolved,
        })
    }

    /// Instantiates from a mapping value, e.g. one produced by a codec.
    pub fn instantiate_value(&self, value: &Value) -> ValidationResult<Template> {
        let Some(map) = value.as_map() else {
            return Err(ValidationError::InvalidType {
                data: value.clone(),
                expected: [ValueKind::Map].into_iter().collect(),
            });
        };
        self.instantiate(map.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Decodes `bytes` with the selected codec and validates the result.
    pub fn decode(&self, bytes: &[u8], tag: Option<&str>) -> Result<Value, CodecError> {
        let value = self.codecs.codec(tag)?.decode(bytes)?;
        self.validator.validate(&value)?;
        Ok(value)
    }

    /// Validates `value` and encodes it with the selected codec.
    pub fn encode(&self, value: &Value, tag: Option<&str>) -> Result<Vec<u8>, CodecError> {
        let codec = self.codecs.codec(tag)?;
        self.validator.validate(value)?;
        codec.encode(value)
    }
}

/// Builder for [`TemplateType`].
#[derive(Debug, Clone)]
pub struct TemplateTypeBuilder {
    name: String,
    fields: IndexMap<String, FieldDeclaration>,
    codecs: CodecRegistry,
}

impl TemplateTypeBuilder {
    /// Declares a field. Redeclaring a name replaces the field in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, field: FieldDeclaration) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn codecs(mut self, codecs: CodecRegistry) -> Self {
        self.codecs = codecs;
        self
    }

    #[must_use]
    pub fn build(self) -> TemplateType {
        let validator = self
            .fields
            .iter()
            .fold(MappingValidator::builder(), |builder, (name, field)| {
                builder.declare(MappingField::new(
                    name.clone(),
                    field.validator().clone(),
                    field.is_optional(),
                ))
            })
            .deny_unknown_keys()
            .build();

        tracing::trace!(template = %self.name, fields = self.fields.len(), "template type declared");
        TemplateType {
            name: self.name,
            fields: self.fields,
            validator,
            codecs: self.codecs,
        }
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// Resolved field values of one template instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    type_name: String,
    values: IndexMap<String, FieldValue>,
}

impl Template {
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Fields whose declared value does not match `actual`.
    ///
    /// Keys absent from `actual` (or every key, if `actual` is not a mapping)
    /// compare as `MISSING`. Keys of `actual` that the template does not
    /// declare are not compared.
    #[must_use]
    pub fn mismatches(&self, actual: &Value) -> Vec<Mismatch> {
        self.values
            .iter()
            .filter_map(|(name, expected)| {
                let actual = FieldValue::from_lookup(actual.get(name));
                (!expected.matches(&actual)).then(|| Mismatch {
                    field: name.clone(),
                    expected: expected.clone(),
                    actual,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn matches(&self, actual: &Value) -> bool {
        self.values
            .iter()
            .all(|(name, expected)| expected.matches(&FieldValue::from_lookup(actual.get(name))))
    }

    /// Concrete field values as a mapping; sentinel-valued fields are left out.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Map(
            self.values
                .iter()
                .filter_map(|(name, value)| Some((name.clone(), value.as_value()?.clone())))
                .collect(),
        )
    }
}

impl PartialEq<Value> for Template {
    fn eq(&self, other: &Value) -> bool {
        self.matches(other)
    }
}

impl PartialEq<Template> for Value {
    fn eq(&self, other: &Template) -> bool {
        other.matches(self)
    }
}

/// Looks up the resolved value of field `name`.
#[must_use]
pub fn resolve<'a>(template: &'a Template, name: &str) -> Option<&'a FieldValue> {
    template.get(name)
}

// ============================================================================
// MISMATCH
// ============================================================================

/// One field that failed structural comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub field: String,
    pub expected: FieldValue,
    pub actual: FieldValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}
