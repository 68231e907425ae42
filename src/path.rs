//! Dotted path lookups, the counterpart of chained attribute access such as
//! `config.server.hosts[0].name`.

use crate::error::{Error, ErrorKind};
use crate::{ObjectDict, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

/// Parse a path into its steps.
///
/// A path always starts with a key. Keys are separated by `.`, and sequence
/// indexes are written as `[n]`.
pub(crate) fn parse(path: &str) -> Result<Vec<Step<'_>>, Error> {
    let invalid = || Error::new(ErrorKind::InvalidPath(path.into()));

    let mut steps = Vec::new();
    let mut rest = path;
    let mut expect_key = true;

    loop {
        if expect_key {
            let end = rest
                .find(|c: char| matches!(c, '.' | '[' | ']'))
                .unwrap_or(rest.len());

            if end == 0 {
                return Err(invalid());
            }

            steps.push(Step::Key(&rest[..end]));
            rest = &rest[end..];
        }

        let Some(&b) = rest.as_bytes().first() else {
            break;
        };

        match b {
            b'.' => {
                rest = &rest[1..];
                expect_key = true;
            }
            b'[' => {
                let close = rest.find(']').ok_or_else(invalid)?;
                let digits = &rest[1..close];

                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }

                let index = digits.parse::<usize>().map_err(|_| invalid())?;
                steps.push(Step::Index(index));
                rest = &rest[close + 1..];
                expect_key = false;
            }
            _ => return Err(invalid()),
        }
    }

    Ok(steps)
}

fn step<'v>(value: &'v Value, step: Step<'_>) -> Result<&'v Value, Error> {
    match (value, step) {
        (Value::Mapping(dict), Step::Key(key)) => dict.get_attribute(key),
        (Value::Sequence(items), Step::Index(index)) => match items.get(index) {
            Some(value) => Ok(value),
            None => Err(Error::new(ErrorKind::IndexOutOfBounds {
                index,
                len: items.len(),
            })),
        },
        (other, Step::Key(..)) => Err(Error::new(ErrorKind::ExpectedMapping(other.kind()))),
        (other, Step::Index(..)) => Err(Error::new(ErrorKind::ExpectedSequence(other.kind()))),
    }
}

fn step_mut<'v>(value: &'v mut Value, step: Step<'_>) -> Result<&'v mut Value, Error> {
    match (value, step) {
        (Value::Mapping(dict), Step::Key(key)) => dict.get_attribute_mut(key),
        (Value::Sequence(items), Step::Index(index)) => {
            let len = items.len();

            match items.get_mut(index) {
                Some(value) => Ok(value),
                None => Err(Error::new(ErrorKind::IndexOutOfBounds { index, len })),
            }
        }
        (other, Step::Key(..)) => Err(Error::new(ErrorKind::ExpectedMapping(other.kind()))),
        (other, Step::Index(..)) => Err(Error::new(ErrorKind::ExpectedSequence(other.kind()))),
    }
}

impl ObjectDict {
    /// Look up a nested value by a dotted path.
    ///
    /// Keys are separated by `.` and sequence indexes are written as `[n]`,
    /// so `b.c[2].d` reads `d` from the third element of `c` in `b`.
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::InvalidPath`] if the path is malformed.
    /// * [`ErrorKind::AttributeNotFound`] if a key is missing.
    /// * [`ErrorKind::ExpectedMapping`] or [`ErrorKind::ExpectedSequence`] if a
    ///   step does not match the kind of value it is applied to.
    /// * [`ErrorKind::IndexOutOfBounds`] if an index is past the end of a
    ///   sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use objdict::{ErrorKind, ObjectDict};
    ///
    /// let hosts = vec![HashMap::from([("name", "alpha")]), HashMap::from([("name", "beta")])];
    /// let dict = ObjectDict::from_mapping([("server", HashMap::from([("hosts", hosts)]))])?;
    ///
    /// assert_eq!(dict.lookup("server.hosts[1].name")?.as_str(), Some("beta"));
    ///
    /// let error = dict.lookup("server.hosts[2]").unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::IndexOutOfBounds { index: 2, len: 2 });
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn lookup(&self, path: &str) -> Result<&Value, Error> {
        let mut steps = parse(path)?.into_iter();

        let mut current = match steps.next() {
            Some(Step::Key(key)) => self.get_attribute(key)?,
            _ => return Err(Error::new(ErrorKind::InvalidPath(path.into()))),
        };

        for s in steps {
            current = step(current, s)?;
        }

        Ok(current)
    }

    /// Look up a nested value mutably by a dotted path.
    ///
    /// See [`ObjectDict::lookup`] for the path syntax.
    ///
    /// # Errors
    ///
    /// Errors in the same cases as [`ObjectDict::lookup`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use objdict::ObjectDict;
    ///
    /// let mut dict = ObjectDict::from_mapping([("server", HashMap::from([("ports", vec![80, 443])]))])?;
    ///
    /// *dict.lookup_mut("server.ports[0]")? = objdict::normalize(8080)?;
    /// assert_eq!(dict["server"]["ports"][0].as_u16(), Some(8080));
    /// # Ok::<_, objdict::Error>(())
    /// ```
    pub fn lookup_mut(&mut self, path: &str) -> Result<&mut Value, Error> {
        let mut steps = parse(path)?.into_iter();

        let mut current = match steps.next() {
            Some(Step::Key(key)) => self.get_attribute_mut(key)?,
            _ => return Err(Error::new(ErrorKind::InvalidPath(path.into()))),
        };

        for s in steps {
            current = step_mut(current, s)?;
        }

        Ok(current)
    }
}
