use core::fmt;
use core::hash::BuildHasherDefault;
use core::ops::Index;
use std::collections::HashMap;

use twox_hash::XxHash64;

use crate::dict::{Iter, Keys, Values};
use crate::error::{Error, ErrorKind};
use crate::value::write_quoted;
use crate::{Normalize, Value};

pub(crate) type Table = HashMap<String, Value, BuildHasherDefault<XxHash64>>;

/// A mapping from string keys to normalized [`Value`]s, with both
/// attribute-style and key-style access.
///
/// Values are normalized when they are stored, so every nested mapping is an
/// [`ObjectDict`] and every nested sequence only holds normalized values.
///
/// Attribute-style access is provided through [`get_attribute`] and
/// [`set_attribute`], which report missing names as errors. Key-style access
/// is provided through [`get`], [`insert`] and indexing. Both operate on the
/// same storage.
///
/// [`get_attribute`]: ObjectDict::get_attribute
/// [`set_attribute`]: ObjectDict::set_attribute
/// [`get`]: ObjectDict::get
/// [`insert`]: ObjectDict::insert
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use objdict::{ObjectDict, Value};
///
/// let dict = ObjectDict::from_mapping([
///     ("a", Value::from(1)),
///     ("b", objdict::normalize(HashMap::from([
///         ("c", vec![Value::from(1), Value::from(2), objdict::normalize(HashMap::from([("d", "x")]))?]),
///     ]))?),
/// ])?;
///
/// assert_eq!(dict.get_attribute("a")?.as_i64(), Some(1));
/// assert_eq!(dict["b"]["c"].as_sequence().map(<[_]>::len), Some(3));
/// assert_eq!(dict.lookup("b.c[2].d")?.as_str(), Some("x"));
/// # Ok::<_, objdict::Error>(())
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct ObjectDict {
    items: Table,
}

impl ObjectDict {
    /// Construct a new empty dict.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::ObjectDict;
    ///
    /// let dict = ObjectDict::new();
    /// assert!(dict.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a dict from a source mapping, normalizing every value.
    ///
    /// The source is walked once, eagerly. Any [`IntoIterator`] over
    /// key-value pairs with string keys can be used, such as a
    /// [`HashMap`], a [`BTreeMap`][std::collections::BTreeMap] or an array of
    /// pairs.
    ///
    /// # Errors
    ///
    /// Errors if any value cannot be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use objdict::{ErrorKind, ObjectDict};
    ///
    /// let source = BTreeMap::from([("one", vec![1, 2]), ("two", vec![3])]);
    /// let dict = ObjectDict::from_mapping(source)?;
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict["one"][1].as_i64(), Some(2));
    ///
    /// let error = ObjectDict::from_mapping([("x", None::<u32>)]).unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn from_mapping<I, K, V>(source: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Normalize,
    {
        let mut dict = Self::new();
        dict.extend(source)?;
        tracing::trace!(len = dict.len(), "constructed object dict");
        Ok(dict)
    }

    /// Get the number of entries in the dict.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the dict is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Test if the dict contains the given key.
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Get a value by its key.
    ///
    /// This is the key-style counterpart of [`ObjectDict::get_attribute`].
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::ObjectDict;
    ///
    /// let dict = ObjectDict::from_mapping([("number", 10)])?;
    /// assert_eq!(dict.get("number").and_then(|v| v.as_u32()), Some(10));
    /// assert!(dict.get("missing").is_none());
    /// # Ok::<_, objdict::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Get a value mutably by its key.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.items.get_mut(key)
    }

    /// Normalize a value and store it under the given key, returning the
    /// value previously stored there.
    ///
    /// Normalization finishes before the dict is modified, so a failed insert
    /// leaves the dict as it was.
    ///
    /// # Errors
    ///
    /// Errors if the value cannot be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::{ObjectDict, Value};
    ///
    /// let mut dict = ObjectDict::new();
    /// assert_eq!(dict.insert("n", 1)?, None);
    /// assert_eq!(dict.insert("n", 2)?, Some(Value::from(1)));
    ///
    /// assert!(dict.insert("n", None::<u32>).is_err());
    /// assert_eq!(dict["n"], Value::from(2));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<Value>, Error>
    where
        K: Into<String>,
        V: Normalize,
    {
        let key = key.into();

        let value = match value.normalize() {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(key = key.as_str(), %error, "rejected value");
                return Err(error);
            }
        };

        Ok(self.items.insert(key, value))
    }

    /// Get the value of an attribute.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::AttributeNotFound`] if no value is stored
    /// under `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::{ErrorKind, ObjectDict};
    ///
    /// let mut dict = ObjectDict::new();
    /// dict.set_attribute("greeting", "Hello World!")?;
    /// assert_eq!(dict.get_attribute("greeting")?.as_str(), Some("Hello World!"));
    ///
    /// let error = dict.get_attribute("missing").unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::AttributeNotFound("missing".into()));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Result<&Value, Error> {
        match self.items.get(name) {
            Some(value) => Ok(value),
            None => Err(Error::new(ErrorKind::AttributeNotFound(name.into()))),
        }
    }

    /// Get the value of an attribute mutably.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::AttributeNotFound`] if no value is stored
    /// under `name`.
    pub fn get_attribute_mut(&mut self, name: &str) -> Result<&mut Value, Error> {
        match self.items.get_mut(name) {
            Some(value) => Ok(value),
            None => Err(Error::new(ErrorKind::AttributeNotFound(name.into()))),
        }
    }

    /// Set the value of an attribute, overwriting any previous value.
    ///
    /// This goes through the same normalization as [`ObjectDict::insert`].
    ///
    /// # Errors
    ///
    /// Errors if the value cannot be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use objdict::ObjectDict;
    ///
    /// let mut dict = ObjectDict::new();
    /// dict.set_attribute("server", HashMap::from([("port", 8080)]))?;
    ///
    /// // The nested mapping was converted and is attribute-accessible.
    /// let server = dict.get_attribute("server")?.as_mapping().ok_or("not a mapping")?;
    /// assert_eq!(server.get_attribute("port")?.as_u16(), Some(8080));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_attribute<V>(&mut self, name: &str, value: V) -> Result<(), Error>
    where
        V: Normalize,
    {
        self.insert(name, value)?;
        Ok(())
    }

    /// Remove a value by its key, returning it if it was present.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.items.remove(key)
    }

    /// Remove all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert every key-value pair from `source`.
    ///
    /// Entries are inserted in iteration order. If a value fails to
    /// normalize, entries inserted before it are kept.
    ///
    /// # Errors
    ///
    /// Errors if any value cannot be normalized.
    pub fn extend<I, K, V>(&mut self, source: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Normalize,
    {
        let source = source.into_iter();
        self.items.reserve(source.size_hint().0);

        for (key, value) in source {
            self.insert(key, value)?;
        }

        Ok(())
    }

    /// Iterate over the keys of the dict in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::ObjectDict;
    ///
    /// let dict = ObjectDict::from_mapping([("b", 2), ("c", 3), ("a", 1)])?;
    /// assert!(dict.keys().eq(["a", "b", "c"]));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.items)
    }

    /// Iterate over the values of the dict in sorted key order.
    #[must_use]
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values::new(&self.items)
    }

    /// Iterate over the entries of the dict in sorted key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::ObjectDict;
    ///
    /// let dict = ObjectDict::from_mapping([("two", 2), ("one", 1)])?;
    /// assert!(dict.iter().flat_map(|(_, value)| value.as_u32()).eq([1, 2]));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.items)
    }
}

/// Index into the dict by key.
///
/// # Panics
///
/// Panics if the key is missing. Use [`ObjectDict::get`] or
/// [`ObjectDict::get_attribute`] for a non-panicking lookup.
impl Index<&str> for ObjectDict {
    type Output = Value;

    #[inline]
    fn index(&self, key: &str) -> &Self::Output {
        match self.items.get(key) {
            Some(value) => value,
            None => panic!("attribute `{key}` not found"),
        }
    }
}

impl<'a> IntoIterator for &'a ObjectDict {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ObjectDict {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats the dict in an inline form with sorted keys.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use objdict::ObjectDict;
///
/// let dict = ObjectDict::from_mapping([("b", HashMap::from([("c", vec![1, 2])]))])?;
/// assert_eq!(dict.to_string(), "{b: {c: [1, 2]}}");
/// # Ok::<_, objdict::Error>(())
/// ```
impl fmt::Display for ObjectDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            if is_bare_key(key) {
                f.write_str(key)?;
            } else {
                write_quoted(f, key)?;
            }

            write!(f, ": {value}")?;
        }

        f.write_str("}")
    }
}

/// Keys that read back as the same string when written without quotes.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-')) {
        return false;
    }

    !matches!(
        key.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "yes" | "no" | "on" | "off" | "y" | "n"
    )
}
