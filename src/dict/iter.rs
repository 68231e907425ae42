use std::vec;

use crate::dict::object_dict::Table;
use crate::Value;

/// An iterator over the entries of an [`ObjectDict`] in sorted key order.
///
/// See [`ObjectDict::iter`].
///
/// [`ObjectDict`]: crate::ObjectDict
/// [`ObjectDict::iter`]: crate::ObjectDict::iter
pub struct Iter<'a> {
    iter: vec::IntoIter<(&'a str, &'a Value)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(table: &'a Table) -> Self {
        let mut entries = table
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect::<Vec<_>>();

        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        Self {
            iter: entries.into_iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth(n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// An iterator over the keys of an [`ObjectDict`] in sorted order.
///
/// See [`ObjectDict::keys`].
///
/// [`ObjectDict`]: crate::ObjectDict
/// [`ObjectDict::keys`]: crate::ObjectDict::keys
pub struct Keys<'a> {
    iter: Iter<'a>,
}

impl<'a> Keys<'a> {
    #[inline]
    pub(crate) fn new(table: &'a Table) -> Self {
        Self {
            iter: Iter::new(table),
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iter.next()?.0)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(self.iter.next_back()?.0)
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// An iterator over the values of an [`ObjectDict`] in sorted key order.
///
/// See [`ObjectDict::values`].
///
/// [`ObjectDict`]: crate::ObjectDict
/// [`ObjectDict::values`]: crate::ObjectDict::values
pub struct Values<'a> {
    iter: Iter<'a>,
}

impl<'a> Values<'a> {
    #[inline]
    pub(crate) fn new(table: &'a Table) -> Self {
        Self {
            iter: Iter::new(table),
        }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iter.next()?.1)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(self.iter.next_back()?.1)
    }
}

impl ExactSizeIterator for Values<'_> {}
