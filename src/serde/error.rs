use core::fmt;

use serde::{de, ser};

use crate::error::{Error, ErrorKind};

impl Error {
    #[inline]
    fn from_display<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::new(ErrorKind::Custom(msg.to_string().into()))
    }
}

impl ser::Error for Error {
    #[inline]
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Error::from_display(msg)
    }
}

impl de::Error for Error {
    #[inline]
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Error::from_display(msg)
    }
}
