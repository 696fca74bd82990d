//! Per-value-type behaviour shared by every record field.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::validation::{Constraint, ValidationReport};

/// A token that is not part of a field's known vocabulary.
///
/// Only the token enums can create one, and only for strings that match none
/// of their known tokens. A known token therefore always lives in its known
/// variant, and two enum values are equal exactly when their tokens are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownToken(String);

impl UnknownToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Behaviour of a value type that can be stored in a record field.
///
/// Implemented for the primitive field types here, and for token enums and
/// records by the generator macros.
pub trait RecordField: Clone + Serialize + DeserializeOwned {
    /// View handed out by the getter: a copy for scalars, a borrow otherwise.
    type Ref<'a>
    where
        Self: 'a;

    /// Value kind shown in field metadata.
    const KIND: &'static str;

    /// Known tokens, for token enums and lists of them.
    const TOKENS: Option<&'static [&'static str]> = None;

    fn borrow_field(&self) -> Self::Ref<'_>;

    fn field_eq(&self, other: &Self) -> bool;

    fn field_hash<H: Hasher>(&self, state: &mut H);

    /// Writes the value the way it appears in a record dump.
    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Reports every way this value breaks `constraint`.
    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        let _ = (constraint, path, report);
    }

    /// The value as a dynamic JSON value.
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Parses a dynamic JSON value. The value is not checked against any
    /// constraint, only for its shape.
    fn from_json(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

impl RecordField for i32 {
    type Ref<'a> = i32;

    const KIND: &'static str = "integer";

    fn borrow_field(&self) -> i32 {
        *self
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }

    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        constraint.check_integer(i64::from(*self), path, report)
    }
}

impl RecordField for i64 {
    type Ref<'a> = i64;

    const KIND: &'static str = "long";

    fn borrow_field(&self) -> i64 {
        *self
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }

    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        constraint.check_integer(*self, path, report)
    }
}

/// Bit pattern used for equality and hashing of decimal fields.
///
/// Every NaN maps to one canonical pattern so a record holding NaN still
/// equals itself. `0.0` and `-0.0` stay distinct.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl RecordField for f64 {
    type Ref<'a> = f64;

    const KIND: &'static str = "double";

    fn borrow_field(&self) -> f64 {
        *self
    }

    fn field_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(*self).hash(state)
    }

    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the decimal point on whole numbers (2.0, not 2)
        write!(f, "{:?}", self)
    }

    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        constraint.check_float(*self, path, report)
    }

    /// Non-finite values have no JSON number form and are written as the
    /// strings `NaN`, `Infinity` and `-Infinity`.
    fn to_json(&self) -> serde_json::Result<Value> {
        Ok(match non_finite_name(*self) {
            Some(name) => Value::from(name),
            None => Value::from(*self),
        })
    }

    fn from_json(value: Value) -> serde_json::Result<Self> {
        if let Value::String(text) = &value {
            match text.as_str() {
                "NaN" => return Ok(f64::NAN),
                "Infinity" => return Ok(f64::INFINITY),
                "-Infinity" => return Ok(f64::NEG_INFINITY),
                _ => {}
            }
        }
        serde_json::from_value(value)
    }
}

fn non_finite_name(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

impl RecordField for String {
    type Ref<'a> = &'a str;

    const KIND: &'static str = "string";

    fn borrow_field(&self) -> &str {
        self.as_str()
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }

    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        constraint.check_text(self, path, report)
    }
}

impl<T: RecordField> RecordField for Vec<T> {
    type Ref<'a>
        = &'a [T]
    where
        Self: 'a;

    const KIND: &'static str = "list";
    const TOKENS: Option<&'static [&'static str]> = T::TOKENS;

    fn borrow_field(&self) -> &[T] {
        self.as_slice()
    }

    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.field_eq(b))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.field_hash(state);
        }
    }

    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.describe_value(f)?;
        }
        f.write_str("]")
    }

    /// Each element is checked against the field's constraint under `path[i]`.
    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        for (i, item) in self.iter().enumerate() {
            item.check_value(constraint, &format!("{}[{}]", path, i), report);
        }
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        self.iter().map(T::to_json).collect::<serde_json::Result<Vec<_>>>().map(Value::Array)
    }

    fn from_json(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_json).collect(),
            other => serde_json::from_value(other),
        }
    }
}

/// Named entries, such as the audio selectors of an input keyed by selector
/// name. Entries are kept sorted by key so equality, hashing and the dump do
/// not depend on insertion order.
impl<T: RecordField> RecordField for BTreeMap<String, T> {
    type Ref<'a>
        = &'a BTreeMap<String, T>
    where
        Self: 'a;

    const KIND: &'static str = "map";
    const TOKENS: Option<&'static [&'static str]> = T::TOKENS;

    fn borrow_field(&self) -> &BTreeMap<String, T> {
        self
    }

    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.field_eq(vb))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self {
            key.hash(state);
            value.field_hash(state);
        }
    }

    /// Dumps as `{key=value, key=value}`.
    fn describe_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.describe_value(f)?;
        }
        f.write_str("}")
    }

    /// Each entry is checked against the field's constraint under `path[key]`.
    fn check_value(&self, constraint: &Constraint, path: &str, report: &mut ValidationReport) {
        for (key, value) in self {
            value.check_value(constraint, &format!("{}[{}]", path, key), report);
        }
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        let mut map = serde_json::Map::new();
        for (key, value) in self {
            map.insert(key.clone(), value.to_json()?);
        }
        Ok(Value::Object(map))
    }

    fn from_json(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| T::from_json(value).map(|value| (key, value)))
                .collect(),
            other => serde_json::from_value(other),
        }
    }
}

/// Field equality: absent equals absent, absent never equals present.
pub fn option_eq<T: RecordField>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.field_eq(b),
        _ => false,
    }
}

/// Field hash: absent fields contribute a fixed sentinel.
pub fn option_hash<T: RecordField, H: Hasher>(value: &Option<T>, state: &mut H) {
    match value {
        None => state.write_u8(0),
        Some(value) => {
            state.write_u8(1);
            value.field_hash(state);
        }
    }
}
