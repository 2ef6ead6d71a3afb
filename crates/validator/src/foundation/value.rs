//! Dynamic values checked by validators.
//!
//! [`Value`] is the data model every validator in this crate is polymorphic over.
//! It mirrors what a decoded payload can contain: scalars, text and byte strings,
//! ordered sequences, string-keyed mappings, and members of declared enumerations.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE KIND
// ============================================================================

/// Runtime type tag of a [`Value`].
///
/// `Sequence` is abstract: it is never produced by [`Value::kind`], but both
/// lists and tuples are instances of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Sequence,
    List,
    Tuple,
    Map,
    Enum,
}

impl ValueKind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::Sequence => "sequence",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Map => "map",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// ENUM MEMBER
// ============================================================================

/// A member of a declared enumeration, e.g. `Color.Red = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// Name of the enumeration the member belongs to.
    pub enumeration: String,
    /// Member name.
    pub name: String,
    /// Underlying member value.
    pub value: Box<Value>,
}

impl EnumMember {
    pub fn new(
        enumeration: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            enumeration: enumeration.into(),
            name: name.into(),
            value: Box::new(value.into()),
        }
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed datum.
///
/// Mapping equality ignores key order; sequence equality does not. Booleans,
/// integers and floats compare by numeric value, so `Bool(true)`, `Int(1)`
/// and `Float(1.0)` are equal.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(IndexMap<String, Value>),
    Enum(EnumMember),
}

impl Value {
    /// Builds a mapping from `(key, value)` pairs, keeping insertion order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a list from anything convertible into values.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a tagged pair `(tag, value)` as consumed by union validators.
    pub fn tagged(tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Tuple(vec![Self::Str(tag.into()), value.into()])
    }

    /// Returns the concrete kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::List(_) => ValueKind::List,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Map(_) => ValueKind::Map,
            Self::Enum(_) => ValueKind::Enum,
        }
    }

    /// Instance check against a kind.
    ///
    /// Booleans are instances of `Int`; lists and tuples are instances of
    /// `Sequence`.
    #[must_use]
    pub fn is_instance(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Self::Bool(_), ValueKind::Int) => true,
            (Self::List(_) | Self::Tuple(_), ValueKind::Sequence) => true,
            _ => self.kind() == kind,
        }
    }

    /// Items of a list or tuple.
    #[must_use]
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a key of a mapping. Returns `None` for non-mappings.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Converts into a JSON document.
    ///
    /// Byte strings become arrays of integers, tuples become arrays, enum
    /// members collapse to their underlying value and non-finite floats become
    /// `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(i) => Json::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Str(s) => Json::String(s.clone()),
            Self::Bytes(bytes) => Json::Array(bytes.iter().map(|b| Json::from(*b)).collect()),
            Self::List(items) | Self::Tuple(items) => {
                Json::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Enum(member) => member.value.to_json(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (Number::of(self), Number::of(other)) {
            return a == b;
        }
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// NUMERIC TOWER
// ============================================================================

/// Numeric view of a value: booleans widen to integers, integers compare
/// exactly against floats.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Int(i) => Some(Self::Int(*i)),
            Value::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }

    /// The integer this number is exactly equal to, if any.
    fn as_exact_int(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            // i64 spans [-2^63, 2^63)
            Self::Float(f) => (f.fract() == 0.0
                && f >= -9_223_372_036_854_775_808.0
                && f < 9_223_372_036_854_775_808.0)
                .then(|| f as i64),
        }
    }

    /// Equal numbers hash equally whatever their variant; all NaNs share one
    /// hash.
    fn hash<H: Hasher>(self, state: &mut H) {
        ValueKind::Int.hash(state);
        if let Some(i) = self.as_exact_int() {
            0u8.hash(state);
            i.hash(state);
            return;
        }
        1u8.hash(state);
        match self {
            Self::Float(f) if f.is_nan() => f64::NAN.to_bits().hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Int(i) => i.hash(state),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(_)) => other.as_exact_int() == Some(*i),
            (Self::Float(_), Self::Int(i)) => self.as_exact_int() == Some(*i),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<EnumMember> for Value {
    fn from(v: EnumMember) -> Self {
        Self::Enum(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            Self::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                f.write_str(")")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Enum(member) => write!(f, "{}.{}", member.enumeration, member.name),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Data with a length: text, byte strings and containers.
pub trait Measurable {
    /// Returns the length, or `None` if the datum is not sized.
    fn length(&self) -> Option<usize>;
}

impl Measurable for str {
    /// Text length counts Unicode scalar values.
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Measurable for [u8] {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Measurable for [Value] {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Measurable for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Self::Str(s) => s.as_str().length(),
            Self::Bytes(b) => b.as_slice().length(),
            Self::List(items) | Self::Tuple(items) => items.as_slice().length(),
            Self::Map(map) => Some(map.len()),
            _ => None,
        }
    }
}

// ============================================================================
// HASHING
// ============================================================================

/// Borrowing wrapper that makes a [`Value`] usable as a hash-set key.
///
/// All NaN values compare and hash equal, and numbers follow the same
/// numeric tower as `Value` equality (`true`, `1` and `1.0` are one key), so
/// the wrapper is a lawful `Eq`. Mappings hash independently of key order.
#[derive(Debug, Clone, Copy)]
pub struct HashableValue<'a>(pub &'a Value);

impl PartialEq for HashableValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        identical(self.0, other.0)
    }
}

impl Eq for HashableValue<'_> {}

impl Hash for HashableValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(self.0, state);
    }
}

fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => (x.is_nan() && y.is_nan()) || x == y,
        (Value::List(xs), Value::List(ys)) | (Value::Tuple(xs), Value::Tuple(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| identical(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| identical(x, y)))
        }
        (Value::Enum(x), Value::Enum(y)) => {
            x.enumeration == y.enumeration && x.name == y.name && identical(&x.value, &y.value)
        }
        _ => a == b,
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    if let Some(number) = Number::of(value) {
        number.hash(state);
        return;
    }
    value.kind().hash(state);

    match value {
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => {}
        Value::Str(s) => s.hash(state),
        Value::Bytes(b) => b.hash(state),
        Value::List(items) | Value::Tuple(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Map(map) => {
            // XOR of per-entry hashes keeps the result independent of key order.
            let mut combined = 0u64;
            for (k, v) in map {
                let mut entry = std::hash::DefaultHasher::new();
                k.hash(&mut entry);
                hash_value(v, &mut entry);
                combined ^= entry.finish();
            }
            map.len().hash(state);
            combined.hash(state);
        }
        Value::Enum(member) => {
            member.enumeration.hash(state);
            member.name.hash(state);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
