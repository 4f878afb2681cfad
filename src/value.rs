//! Argument and property values.
//!
//! A [`Value`] pairs an optional type annotation with a [`ValueKind`]. The
//! annotation is orthogonal to the kind: `(u8)10`, `(date)"2021-01-01"` and
//! `(nothing)#null` are all valid.
//!
//! ## Examples
//!
//! ```rust
//! use kdl_doc::{Value, ValueKind};
//!
//! let plain = Value::from("hello");
//! assert_eq!(plain.as_str(), Some("hello"));
//! assert_eq!(plain.ty(), None);
//!
//! let typed = Value::from(10).with_type("u8");
//! assert_eq!(typed.ty(), Some("u8"));
//! assert_eq!(typed.as_i64(), Some(10));
//! assert_eq!(typed.to_string(), "(u8)10");
//!
//! assert_eq!(Value::null().kind(), &ValueKind::Null);
//! ```

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::number::Number;
use crate::printer::Printer;

/// The payload of a [`Value`], without its type annotation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    /// Escaped, raw and bare-identifier strings all end up here.
    String(String),
}

/// A value with an optional `(type)` annotation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Value {
    ty: Option<String>,
    kind: ValueKind,
}

impl Value {
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Value { ty: None, kind }
    }

    /// An untyped `#null`.
    #[must_use]
    pub fn null() -> Self {
        Value::new(ValueKind::Null)
    }

    /// Returns a copy of this value carrying the given type annotation.
    #[must_use]
    pub fn with_type(self, ty: impl Into<String>) -> Self {
        Value {
            ty: Some(ty.into()),
            ..self
        }
    }

    /// Returns a copy of this value without a type annotation.
    #[must_use]
    pub fn without_type(self) -> Self {
        Value { ty: None, ..self }
    }

    pub(crate) fn with_optional_type(self, ty: Option<String>) -> Self {
        Value { ty, ..self }
    }

    #[must_use]
    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[must_use]
    pub fn into_kind(self) -> ValueKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self.kind, ValueKind::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.kind, ValueKind::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self.kind, ValueKind::String(_))
    }

    /// The boolean behind this value, or `None` for any other kind.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ValueKind::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Borrowed string content, or `None` when the value is not a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_doc::Value;
    ///
    /// assert_eq!(Value::from("hi").as_str(), Some("hi"));
    /// assert_eq!(Value::from(true).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match &self.kind {
            ValueKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Integer values that fit in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Any number, converted to the nearest `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::default().value_to_string(self))
    }
}

/// Serializes as the bare scalar; the type annotation is not part of the view.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.kind {
            ValueKind::Null => serializer.serialize_unit(),
            ValueKind::Bool(b) => serializer.serialize_bool(*b),
            ValueKind::Number(n) => n.serialize(serializer),
            ValueKind::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Value::new(kind)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::new(ValueKind::Bool(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::new(ValueKind::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::new(ValueKind::String(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::new(ValueKind::Number(value))
    }
}

macro_rules! number_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::from(Number::from(value))
                }
            }
        )*
    };
}

number_value_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, BigInt);

/// `None` becomes `#null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::null, Into::into)
    }
}
