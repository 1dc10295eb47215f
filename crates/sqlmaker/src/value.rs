//! Values bound to named parameters.
//!
//! A statement's parameter map holds [`Bound`] entries: either one scalar
//! [`Value`] or a sequence of them. Which one is chosen is decided at compile
//! time through [`IntoBound`], so `eq("id", 5)` binds a scalar while
//! `eq("id", vec![1, 2, 3])` binds a sequence and renders an `IN` list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar SQL value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Calendar date (`DATE`)
    #[serde(skip_deserializing)]
    Date(NaiveDate),
    /// Wall-clock timestamp (`DATETIME`); UTC instants are stored naive.
    #[serde(skip_deserializing)]
    DateTime(NaiveDateTime),
}

impl Value {
    /// Binary value (`BLOB`/`VARBINARY`).
    ///
    /// Byte vectors have no `From` conversion because `Vec<u8>` binds as a
    /// sequence of integers, the same way every other `Vec` does.
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Serialize `value` to a JSON document stored as text.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_string(value).map(Value::Text)
    }

    /// Whether this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read an integer payload as `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Date(v) => write!(f, "\"{}\"", v.format("%Y-%m-%d")),
            Value::DateTime(v) => write!(f, "\"{}\"", v.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}

macro_rules! value_from {
    ($variant:ident: $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

value_from!(Bool: bool);
value_from!(Int: i8, i16, i32, i64);
value_from!(UInt: u8, u16, u32, u64);
value_from!(Float: f32, f64);
value_from!(Text: String, &str, &String);
value_from!(Date: NaiveDate);
value_from!(DateTime: NaiveDateTime);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v.naive_utc())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Text(v.hyphenated().to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// The value bound to one named parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Bound {
    /// One value, rendered as `column=:name`.
    Scalar(Value),
    /// A list of values, rendered as `column IN (:name)` and expanded into one
    /// placeholder per element before execution.
    Sequence(Vec<Value>),
}

impl Bound {
    /// Whether this binding is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Bound::Sequence(_))
    }

    /// Number of placeholders this binding expands to.
    pub fn len(&self) -> usize {
        match self {
            Bound::Scalar(_) => 1,
            Bound::Sequence(values) => values.len(),
        }
    }

    /// Whether this is an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the scalar value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Bound::Scalar(v) => Some(v),
            Bound::Sequence(_) => None,
        }
    }

    /// Borrow the bound values as a slice.
    pub fn values(&self) -> &[Value] {
        match self {
            Bound::Scalar(v) => std::slice::from_ref(v),
            Bound::Sequence(values) => values,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Scalar(v) => write!(f, "{v}"),
            Bound::Sequence(values) => {
                f.write_str("(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Conversion into a [`Bound`], choosing scalar or sequence by type.
pub trait IntoBound {
    fn into_bound(self) -> Bound;
}

macro_rules! scalar_bound {
    ($($t:ty),+ $(,)?) => {
        $(
            impl IntoBound for $t {
                fn into_bound(self) -> Bound {
                    Bound::Scalar(self.into())
                }
            }
        )+
    };
}

scalar_bound!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    &str,
    &String,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    uuid::Uuid,
    Value,
);

impl IntoBound for Bound {
    fn into_bound(self) -> Bound {
        self
    }
}

impl<T: Into<Value>> IntoBound for Option<T> {
    fn into_bound(self) -> Bound {
        Bound::Scalar(self.into())
    }
}

impl<T: Into<Value>> IntoBound for Vec<T> {
    fn into_bound(self) -> Bound {
        Bound::Sequence(self.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> IntoBound for &[T] {
    fn into_bound(self) -> Bound {
        Bound::Sequence(self.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> IntoBound for [T; N] {
    fn into_bound(self) -> Bound {
        Bound::Sequence(self.into_iter().map(Into::into).collect())
    }
}

/// Conversion into one INSERT row.
pub trait IntoRow {
    fn into_row(self) -> Vec<Value>;
}

impl<T: Into<Value>> IntoRow for Vec<T> {
    fn into_row(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoRow for [T; N] {
    fn into_row(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! tuple_row {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoRow for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_row(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_row!(A);
tuple_row!(A, B);
tuple_row!(A, B, C);
tuple_row!(A, B, C, D);
tuple_row!(A, B, C, D, E);
tuple_row!(A, B, C, D, E, F);
tuple_row!(A, B, C, D, E, F, G);
tuple_row!(A, B, C, D, E, F, G, H);
tuple_row!(A, B, C, D, E, F, G, H, I);
tuple_row!(A, B, C, D, E, F, G, H, I, J);
tuple_row!(A, B, C, D, E, F, G, H, I, J, K);
tuple_row!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_sequence_are_chosen_by_type() {
        assert_eq!(5i64.into_bound(), Bound::Scalar(Value::Int(5)));
        assert_eq!("a".into_bound(), Bound::Scalar(Value::Text("a".into())));
        assert_eq!(
            vec![1i32, 2].into_bound(),
            Bound::Sequence(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(
            ["x", "y"].into_bound(),
            Bound::Sequence(vec![Value::Text("x".into()), Value::Text("y".into())])
        );
        let ids: &[u64] = &[7, 8];
        assert_eq!(
            ids.into_bound(),
            Bound::Sequence(vec![Value::UInt(7), Value::UInt(8)])
        );
    }

    #[test]
    fn test_option_binds_null() {
        let none: Option<i32> = None;
        assert_eq!(none.into_bound(), Bound::Scalar(Value::Null));
        assert_eq!(Some(3i32).into_bound(), Bound::Scalar(Value::Int(3)));
    }

    #[test]
    fn test_tuple_row() {
        let row = (1i64, "x", None::<i32>).into_row();
        assert_eq!(
            row,
            vec![Value::Int(1), Value::Text("x".into()), Value::Null]
        );
    }

    #[test]
    fn test_json_value() {
        let v = Value::json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(v, Value::Text(r#"{"a":1}"#.into()));
    }

    #[test]
    fn test_uuid_and_datetime() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            Value::from(id),
            Value::Text("00000000-0000-0000-0000-000000000000".into())
        );
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(Value::from(ts).to_string(), "\"2024-05-01 12:30:00\"");
    }

    #[test]
    fn test_bound_display() {
        let b = vec![1i32, 2, 3].into_bound();
        assert_eq!(b.to_string(), "(1, 2, 3)");
        assert_eq!(b.len(), 3);
        assert!(Bound::Sequence(vec![]).is_empty());
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert!(v.is_null());
        let v: Value = serde_json::from_str("-4").unwrap();
        assert_eq!(v, Value::Int(-4));
        let v: Value = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(v.as_str(), Some("hi"));
    }
}
