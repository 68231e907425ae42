use core::fmt;
use core::ops::Index;

use crate::ObjectDict;

/// A normalized value stored inside of an [`ObjectDict`].
///
/// Values are either primitives, sequences of values, or nested
/// [`ObjectDict`]s. There is no variant for a raw mapping, so every nested
/// mapping is always attribute-accessible.
///
/// # Examples
///
/// ```
/// use objdict::{ObjectDict, Value};
///
/// let mut dict = ObjectDict::new();
/// dict.set_attribute("port", 8080)?;
/// dict.set_attribute("hosts", vec!["a", "b"])?;
///
/// assert_eq!(dict.get_attribute("port")?.as_u16(), Some(8080));
/// assert_eq!(dict["hosts"][1], Value::from("b"));
/// # Ok::<_, objdict::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of normalized values.
    Sequence(Vec<Value>),
    /// A nested mapping.
    Mapping(ObjectDict),
}

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the value as a ", $doc, ".")]
        ///
        /// Returns `None` if the value is not an integer, or if it does not
        /// fit in the requested type.
        ///
        /// # Examples
        ///
        /// ```
        /// use objdict::Value;
        ///
        #[doc = concat!("let value = Value::Integer(", stringify!($lit), ");")]
        #[doc = concat!("assert_eq!(value.", stringify!($name), "(), Some(", stringify!($lit), "));")]
        /// ```
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            match self {
                Value::Integer(n) => <$ty>::try_from(*n).ok(),
                _ => None,
            }
        }
    };
}

impl Value {
    /// Get a short name for the kind of this value, as used in errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::Value;
    ///
    /// assert_eq!(Value::from(1).kind(), "integer");
    /// assert_eq!(Value::from("one").kind(), "string");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(..) => "bool",
            Value::Integer(..) => "integer",
            Value::Float(..) => "float",
            Value::String(..) => "string",
            Value::Sequence(..) => "sequence",
            Value::Mapping(..) => "mapping",
        }
    }

    /// Try and get the value as a boolean.
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    as_number!(as_u8, u8, "8-bit unsigned integer", 42);
    as_number!(as_i8, i8, "8-bit signed integer", -42);
    as_number!(as_u16, u16, "16-bit unsigned integer", 42);
    as_number!(as_i16, i16, "16-bit signed integer", -42);
    as_number!(as_u32, u32, "32-bit unsigned integer", 42);
    as_number!(as_i32, i32, "32-bit signed integer", -42);
    as_number!(as_u64, u64, "64-bit unsigned integer", 42);
    as_number!(as_i64, i64, "64-bit signed integer", -42);
    as_number!(as_usize, usize, "pointer-sized unsigned integer", 42);

    /// Try and get the value as a 64-bit float.
    ///
    /// Integers are widened, which may lose precision for very large values.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::Value;
    ///
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try and get the value as a string.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    /// Try and get the value as a sequence.
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try and get the value as a mutable sequence.
    ///
    /// Elements pushed through the returned vector must already be
    /// normalized, which the [`Value`] type guarantees.
    #[must_use]
    #[inline]
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try and convert the value into a sequence.
    #[must_use]
    #[inline]
    pub fn into_sequence(self) -> Option<Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try and get the value as a nested [`ObjectDict`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use objdict::ObjectDict;
    ///
    /// let inner = HashMap::from([("d", "x")]);
    /// let dict = ObjectDict::from_mapping([("b", inner)])?;
    ///
    /// let b = dict.get_attribute("b")?.as_mapping().ok_or("expected mapping")?;
    /// assert_eq!(b.get_attribute("d")?.as_str(), Some("x"));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<&ObjectDict> {
        match self {
            Value::Mapping(dict) => Some(dict),
            _ => None,
        }
    }

    /// Try and get the value as a mutable nested [`ObjectDict`].
    #[must_use]
    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut ObjectDict> {
        match self {
            Value::Mapping(dict) => Some(dict),
            _ => None,
        }
    }

    /// Try and convert the value into a nested [`ObjectDict`].
    #[must_use]
    #[inline]
    pub fn into_mapping(self) -> Option<ObjectDict> {
        match self {
            Value::Mapping(dict) => Some(dict),
            _ => None,
        }
    }

    /// Get a value by key if this value is a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::{ObjectDict, Value};
    ///
    /// let mut inner = ObjectDict::new();
    /// inner.insert("d", "x")?;
    /// let value = Value::Mapping(inner);
    ///
    /// assert_eq!(value.get("d").and_then(Value::as_str), Some("x"));
    /// assert!(value.get("e").is_none());
    /// assert!(Value::from(1).get("d").is_none());
    /// # Ok::<_, objdict::Error>(())
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(key)
    }

    /// Get a value by index if this value is a sequence.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_sequence()?.get(index)
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<ObjectDict> for Value {
    #[inline]
    fn from(value: ObjectDict) -> Self {
        Value::Mapping(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

/// Index into a mapping value by key.
///
/// # Panics
///
/// Panics if the value is not a mapping or the key is missing. Use
/// [`Value::get`] for a non-panicking lookup.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use objdict::ObjectDict;
///
/// let dict = ObjectDict::from_mapping([("b", BTreeMap::from([("c", vec![1, 2])]))])?;
/// assert_eq!(dict["b"]["c"][1].as_i64(), Some(2));
/// # Ok::<_, objdict::Error>(())
/// ```
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Mapping(dict) => &dict[key],
            other => panic!("cannot index into {} with key `{key}`", other.kind()),
        }
    }
}

/// Index into a sequence value by position.
///
/// # Panics
///
/// Panics if the value is not a sequence or the index is out of bounds.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Value::Sequence(items) => &items[index],
            other => panic!("cannot index into {} with index {index}", other.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => f.write_str(itoa::Buffer::new().format(*n)),
            Value::Float(n) => write_float(f, *n),
            Value::String(string) => write_quoted(f, string),
            Value::Sequence(items) => {
                f.write_str("[")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }

                    item.fmt(f)?;
                }

                f.write_str("]")
            }
            Value::Mapping(dict) => dict.fmt(f),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str(".nan")
    } else if n.is_infinite() {
        f.write_str(if n.is_sign_negative() { "-.inf" } else { ".inf" })
    } else {
        f.write_str(ryu::Buffer::new().format_finite(n))
    }
}

/// Write a double-quoted string using YAML escapes.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, string: &str) -> fmt::Result {
    f.write_str("\"")?;

    for c in string.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            c if c.is_control() => write!(f, "\\x{:02X}", u32::from(c))?,
            c => fmt::Write::write_char(f, c)?,
        }
    }

    f.write_str("\"")
}
