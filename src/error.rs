use core::fmt;

/// An error raised while building, reading or writing an
/// [`ObjectDict`][crate::ObjectDict].
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use objdict::{ErrorKind, ObjectDict};
    ///
    /// let dict = ObjectDict::new();
    /// let error = dict.get_attribute("missing").unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::AttributeNotFound(name) if &**name == "missing"));
    /// ```
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {}

/// The kind of an [`Error`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No value is stored under the given name.
    AttributeNotFound(Box<str>),
    /// A value of the given kind cannot be stored.
    UnsupportedValueKind(&'static str),
    /// A mapping key of the given kind is not a string.
    InvalidKeyKind(&'static str),
    /// An integer of the given type does not fit in an `i64`.
    IntegerOutOfRange(&'static str),
    /// Expected a mapping, but found a value of the given kind.
    ExpectedMapping(&'static str),
    /// Expected a sequence, but found a value of the given kind.
    ExpectedSequence(&'static str),
    /// Sequence index out of bounds.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// The lookup path is malformed.
    InvalidPath(Box<str>),
    /// A custom message, raised through serde.
    ///
    /// Serde deserializers only carry errors as messages. Errors raised while
    /// deserializing a [`Value`][crate::Value] therefore arrive here, holding
    /// the message of the kind that caused them. [`normalize`][crate::normalize]
    /// and `from_serialize` report the typed kind.
    Custom(Box<str>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::AttributeNotFound(name) => write!(f, "attribute `{name}` not found"),
            ErrorKind::UnsupportedValueKind(kind) => {
                write!(f, "{kind} values cannot be stored in an object dict")
            }
            ErrorKind::InvalidKeyKind(kind) => {
                write!(f, "{kind} keys are not supported, expected a string")
            }
            ErrorKind::IntegerOutOfRange(ty) => write!(f, "{ty} value out of range for i64"),
            ErrorKind::ExpectedMapping(found) => write!(f, "expected mapping, found {found}"),
            ErrorKind::ExpectedSequence(found) => write!(f, "expected sequence, found {found}"),
            ErrorKind::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            ErrorKind::InvalidPath(path) => write!(f, "invalid path `{path}`"),
            ErrorKind::Custom(message) => message.fmt(f),
        }
    }
}
