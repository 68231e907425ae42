//! Serde support for [`ObjectDict`] and [`Value`].
//!
//! By enabling the `serde` feature (on by default):
//!
//! * [`ObjectDict`] and [`Value`] implement [`Serialize`] and [`Deserialize`].
//!   Deserializing applies the same rules as normalization, so `null` values
//!   and non-string keys are rejected.
//! * [`ObjectDict::from_serialize`] and [`Value::from_serialize`] normalize
//!   any serializable value.
//! * `&Value` and `&ObjectDict` implement [`IntoDeserializer`], so typed
//!   structures can be extracted when their shape is known ahead of time.
//!
//! [`Serialize`]: serde::Serialize
//! [`Deserialize`]: serde::Deserialize
//! [`IntoDeserializer`]: serde::de::IntoDeserializer
//! [`ObjectDict`]: crate::ObjectDict
//! [`Value`]: crate::Value
//! [`ObjectDict::from_serialize`]: crate::ObjectDict::from_serialize
//! [`Value::from_serialize`]: crate::Value::from_serialize
//!
//! ```
//! use objdict::ObjectDict;
//! use serde::Deserialize;
//! use serde::de::IntoDeserializer;
//!
//! const SOURCE: &str = r#"
//! name: Descartes
//! year: 1596
//! books:
//! - year: 1618
//!   title: Musicae Compendium
//! - year: 1637
//!   title: Discours de la méthode
//! "#;
//!
//! let dict: ObjectDict = serde_yaml::from_str(SOURCE)?;
//! assert_eq!(dict.lookup("books[1].year")?.as_u32(), Some(1637));
//!
//! #[derive(Deserialize)]
//! struct Book<'a> {
//!     title: &'a str,
//!     year: u32,
//! }
//!
//! #[derive(Deserialize)]
//! struct Record<'a> {
//!     name: &'a str,
//!     year: u32,
//!     #[serde(borrow)]
//!     books: Vec<Book<'a>>,
//! }
//!
//! let record = Record::deserialize((&dict).into_deserializer())?;
//! assert_eq!(record.name, "Descartes");
//! assert_eq!(record.year, 1596);
//! assert_eq!(record.books.len(), 2);
//! assert_eq!(record.books[0].title, "Musicae Compendium");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod de;
mod error;
mod ser;
mod to_value;

use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::{ObjectDict, Value};

impl Value {
    /// Normalize any serializable value.
    ///
    /// Unit enum variants become strings, and other enum variants become a
    /// mapping with a single key naming the variant.
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::UnsupportedValueKind`] for `None`, unit and bytes.
    /// * [`ErrorKind::InvalidKeyKind`] for mapping keys which are not strings.
    /// * [`ErrorKind::IntegerOutOfRange`] for integers which do not fit in an
    ///   `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use objdict::{ErrorKind, Value};
    ///
    /// let value = Value::from_serialize(&vec![1, 2, 3])?;
    /// assert_eq!(value[2].as_i64(), Some(3));
    ///
    /// let error = Value::from_serialize(&HashMap::from([(1, "one")])).unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::InvalidKeyKind("integer"));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn from_serialize<T>(value: &T) -> Result<Self, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(to_value::ValueSerializer)
    }
}

impl ObjectDict {
    /// Construct a dict from any serializable value which serializes as a
    /// mapping, such as a struct or a map with string keys.
    ///
    /// # Errors
    ///
    /// Errors in the same cases as [`Value::from_serialize`], and with
    /// [`ErrorKind::ExpectedMapping`] if the value is not a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::ObjectDict;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Server {
    ///     host: &'static str,
    ///     ports: Vec<u16>,
    /// }
    ///
    /// let dict = ObjectDict::from_serialize(&Server { host: "localhost", ports: vec![80, 443] })?;
    /// assert_eq!(dict.get_attribute("host")?.as_str(), Some("localhost"));
    /// assert_eq!(dict.lookup("ports[1]")?.as_u16(), Some(443));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn from_serialize<T>(value: &T) -> Result<Self, Error>
    where
        T: ?Sized + Serialize,
    {
        match Value::from_serialize(value)? {
            Value::Mapping(dict) => {
                tracing::trace!(len = dict.len(), "constructed object dict from serialize");
                Ok(dict)
            }
            other => Err(Error::new(ErrorKind::ExpectedMapping(other.kind()))),
        }
    }
}
