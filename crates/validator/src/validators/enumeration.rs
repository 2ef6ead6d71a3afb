//! Enumerated validators

use indexmap::IndexMap;

use crate::foundation::{
    EnumMember, Validate, ValidationError, ValidationResult, Value, ValueKind,
};
use crate::validators::invalid_type;

// ============================================================================
// ENUM TYPE
// ============================================================================

/// A declared enumeration: a name and ordered `member -> value` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    name: String,
    members: IndexMap<String, Value>,
}

impl EnumType {
    pub fn new<K, V, I>(name: impl Into<String>, members: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the named member as a value of this enumeration.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<Value> {
        self.members
            .get_key_value(name)
            .map(|(name, value)| EnumMember::new(self.name.clone(), name.clone(), value.clone()).into())
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Membership test used by [`EnumValidator`].
    #[must_use]
    pub fn contains(&self, member: &EnumMember) -> bool {
        member.enumeration == self.name && self.members.contains_key(&member.name)
    }
}

// ============================================================================
// ENUM VALIDATOR
// ============================================================================

/// Accepts members of one enumeration.
///
/// Construction validates every member's underlying value and fails on the
/// first invalid one, so a validator never describes an inconsistent domain.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::{Validate, Value};
/// use conform_validator::validators::{EnumType, EnumValidator, IntegerValidator};
///
/// let color = EnumType::new("Color", [("Red", 1), ("Green", 2)]);
/// let positive = IntegerValidator::builder().exclusive_minimum(0).build().unwrap();
/// let validator = EnumValidator::new(color.clone(), &positive).unwrap();
///
/// assert!(validator.validate(&color.member("Red").unwrap()).is_ok());
/// assert!(validator.validate(&Value::Int(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValidator {
    enum_type: EnumType,
}

impl EnumValidator {
    pub fn new<V>(enum_type: EnumType, member_validator: &V) -> ValidationResult<Self>
    where
        V: Validate<Input = Value> + ?Sized,
    {
        for (member, value) in &enum_type.members {
            member_validator
                .validate(value)
                .map_err(|error| ValidationError::InvalidMember {
                    enumeration: enum_type.name.clone(),
                    member: member.clone(),
                    error: Box::new(error),
                })?;
        }
        Ok(Self { enum_type })
    }

    #[must_use]
    pub const fn enum_type(&self) -> &EnumType {
        &self.enum_type
    }
}

impl Validate for EnumValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        match input {
            Value::Enum(member) if self.enum_type.contains(member) => Ok(()),
            _ => Err(invalid_type(input, &[ValueKind::Enum])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{AnyValidator, StringValidator};
    use pretty_assertions::assert_eq;

    fn status() -> EnumType {
        EnumType::new("Status", [("Active", "active"), ("Gone", "gone")])
    }

    #[test]
    fn construction_checks_member_values() {
        let short = StringValidator::builder()
            .inclusive_max_length(4)
            .build()
            .unwrap();
        let err = EnumValidator::new(status(), &short).unwrap_err();
        assert_eq!(err.code(), "invalid_member");
        assert_eq!(err.path(), "Active");
        assert_eq!(err.innermost().code(), "invalid_maximum_size");
    }

    #[test]
    fn accepts_own_members_only() {
        let validator = EnumValidator::new(status(), &AnyValidator).unwrap();
        assert!(validator.validate(&status().member("Gone").unwrap()).is_ok());

        let foreign = EnumMember::new("Other", "Active", "active");
        assert_eq!(
            validator.validate(&Value::Enum(foreign)).unwrap_err().code(),
            "invalid_type"
        );

        let unknown = EnumMember::new("Status", "Paused", "paused");
        assert!(validator.validate(&Value::Enum(unknown)).is_err());
    }

    #[test]
    fn raw_values_are_not_members() {
        let validator = EnumValidator::new(status(), &AnyValidator).unwrap();
        assert!(validator.validate(&Value::from("active")).is_err());
    }

    #[test]
    fn member_lookup() {
        assert_eq!(status().member("Missing"), None);
        assert_eq!(
            status().members().map(|(name, _)| name).collect::<Vec<_>>(),
            ["Active", "Gone"]
        );
    }
}
