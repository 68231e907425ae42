use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::error::{Error, ErrorKind};
use crate::{ObjectDict, Value};

/// Conversion of a raw value into its normalized, stored form.
///
/// * Primitives become the matching [`Value`] variant.
/// * [`Value`] and [`ObjectDict`] are returned as they are.
/// * Sequences become a new [`Value::Sequence`], normalized element-wise.
/// * Mappings with string keys become a nested [`ObjectDict`].
///
/// Values which cannot be represented, such as `None` or `()`, fail with
/// [`ErrorKind::UnsupportedValueKind`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use objdict::{ErrorKind, Normalize, Value};
///
/// let value = vec![HashMap::from([("d", "x")])].normalize()?;
/// assert_eq!(value[0]["d"], Value::from("x"));
///
/// let error = None::<u32>.normalize().unwrap_err();
/// assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
/// # Ok::<_, objdict::Error>(())
/// ```
pub trait Normalize {
    /// Normalize the value.
    ///
    /// # Errors
    ///
    /// Errors if the value, or any value nested inside of it, cannot be
    /// stored in an [`ObjectDict`].
    fn normalize(self) -> Result<Value, Error>;
}

/// Normalize a value.
///
/// This is the free-standing form of [`Normalize::normalize`].
///
/// # Errors
///
/// Errors if the value, or any value nested inside of it, cannot be stored in
/// an [`ObjectDict`].
///
/// # Examples
///
/// ```
/// use objdict::Value;
///
/// let value = objdict::normalize(vec![1, 2, 3])?;
/// assert_eq!(value, Value::Sequence(vec![1.into(), 2.into(), 3.into()]));
///
/// // Normalizing a normalized value changes nothing.
/// assert_eq!(objdict::normalize(value.clone())?, value);
/// # Ok::<_, objdict::Error>(())
/// ```
#[inline]
pub fn normalize<T>(value: T) -> Result<Value, Error>
where
    T: Normalize,
{
    value.normalize()
}

fn normalize_sequence<I>(items: I) -> Result<Value, Error>
where
    I: IntoIterator,
    I::Item: Normalize,
{
    let items = items
        .into_iter()
        .map(Normalize::normalize)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Sequence(items))
}

impl Normalize for Value {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(self)
    }
}

impl Normalize for &Value {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(self.clone())
    }
}

impl Normalize for ObjectDict {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self))
    }
}

impl Normalize for &ObjectDict {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self.clone()))
    }
}

impl Normalize for bool {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::Bool(self))
    }
}

macro_rules! normalize_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Normalize for $ty {
                #[inline]
                fn normalize(self) -> Result<Value, Error> {
                    Ok(Value::Integer(i64::from(self)))
                }
            }
        )*
    };
}

macro_rules! normalize_wide_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Normalize for $ty {
                #[inline]
                fn normalize(self) -> Result<Value, Error> {
                    match i64::try_from(self) {
                        Ok(n) => Ok(Value::Integer(n)),
                        Err(..) => Err(Error::new(ErrorKind::IntegerOutOfRange(stringify!($ty)))),
                    }
                }
            }
        )*
    };
}

normalize_integer!(i8, i16, i32, i64, u8, u16, u32);
normalize_wide_integer!(isize, usize, u64, i128, u128);

impl Normalize for f32 {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::Float(f64::from(self)))
    }
}

impl Normalize for f64 {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::Float(self))
    }
}

impl Normalize for String {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::String(self))
    }
}

impl Normalize for &str {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::String(self.to_owned()))
    }
}

impl Normalize for Box<str> {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::String(self.into()))
    }
}

impl Normalize for Cow<'_, str> {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::String(self.into_owned()))
    }
}

impl Normalize for char {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Ok(Value::String(self.to_string()))
    }
}

impl<T> Normalize for Option<T>
where
    T: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        match self {
            Some(value) => value.normalize(),
            None => Err(Error::new(ErrorKind::UnsupportedValueKind("none"))),
        }
    }
}

impl Normalize for () {
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        Err(Error::new(ErrorKind::UnsupportedValueKind("unit")))
    }
}

impl<T> Normalize for Vec<T>
where
    T: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        normalize_sequence(self)
    }
}

impl<T> Normalize for VecDeque<T>
where
    T: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        normalize_sequence(self)
    }
}

impl<T, const N: usize> Normalize for [T; N]
where
    T: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        normalize_sequence(self)
    }
}

impl<K, V, S> Normalize for HashMap<K, V, S>
where
    K: Into<String>,
    V: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        ObjectDict::from_mapping(self).map(Value::Mapping)
    }
}

impl<K, V> Normalize for BTreeMap<K, V>
where
    K: Into<String>,
    V: Normalize,
{
    #[inline]
    fn normalize(self) -> Result<Value, Error> {
        ObjectDict::from_mapping(self).map(Value::Mapping)
    }
}
