//! The ordered query-parameter multimap.

use crate::{encoding, error::DecodeError, Options};
use std::slice;

/// An ordered multimap of decoded query parameters.
///
/// Duplicate names are kept, and insertion order is the iteration and
/// serialization order. A value is tri-state: a pair may carry no value at
/// all (`?flag`), an empty value (`?flag=`), or a non-empty one; the first
/// two round-trip distinctly.
///
/// # Examples
///
/// ```
/// use urlsmith::QueryParams;
///
/// let mut params = QueryParams::parse("a=1&b")?;
/// params.add("a", "2");
/// assert!(params.values("a").eq([Some("1"), Some("2")]));
/// assert!(params.values("b").eq([None::<&str>]));
/// assert_eq!(params.serialize(), "a=1&b&a=2");
/// # Ok::<_, urlsmith::error::DecodeError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> QueryParams {
        QueryParams::default()
    }

    /// Parses a raw query string with default [`Options`].
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when a name or value is not properly
    /// percent-encoded; the error index is into the query string.
    pub fn parse(s: &str) -> Result<QueryParams, DecodeError> {
        QueryParams::parse_with(s, Options::default())
    }

    /// Parses a raw query string with the given options.
    ///
    /// Pieces are separated by `&`; empty pieces between consecutive `&`
    /// are skipped. Within a piece, everything after the first `=` is the
    /// value; a piece with no `=` becomes an absent-value pair, and a
    /// trailing `=` becomes an empty-string value.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with(s: &str, options: Options) -> Result<QueryParams, DecodeError> {
        let mut params = QueryParams::new();
        let mut pos = 0;
        for piece in s.split('&') {
            if !piece.is_empty() {
                params.parse_piece(piece, pos, options)?;
            }
            pos += piece.len() + 1;
        }
        Ok(params)
    }

    fn parse_piece(&mut self, piece: &str, pos: usize, options: Options) -> Result<(), DecodeError> {
        let plus = options.form_query_spaces;
        let lenient = options.lenient_decoding;
        match piece.split_once('=') {
            Some((name, value)) => {
                let decoded_name =
                    encoding::decode_with(name, plus, lenient).map_err(|e| e.at(pos))?;
                let decoded_value = encoding::decode_with(value, plus, lenient)
                    .map_err(|e| e.at(pos + name.len() + 1))?;
                self.pairs
                    .push((decoded_name.into_owned(), Some(decoded_value.into_owned())));
            }
            None => {
                let decoded = encoding::decode_with(piece, plus, lenient).map_err(|e| e.at(pos))?;
                self.pairs.push((decoded.into_owned(), None));
            }
        }
        Ok(())
    }

    /// Appends a parameter with a value.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), Some(value.into())));
    }

    /// Appends a parameter without a value (`?flag`, as opposed to `?flag=`).
    pub fn add_key_only(&mut self, name: impl Into<String>) {
        self.pairs.push((name.into(), None));
    }

    /// Removes all pairs with this name, then appends one with a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.remove_all(&name);
        self.pairs.push((name, Some(value.into())));
    }

    /// Removes all pairs with this name, then appends one without a value.
    pub fn set_key_only(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.remove_all(&name);
        self.pairs.push((name, None));
    }

    /// Removes all pairs with the given name.
    pub fn remove_all(&mut self, name: &str) {
        self.pairs.retain(|pair| pair.0 != name);
    }

    /// Removes all pairs with the given name and value.
    pub fn remove(&mut self, name: &str, value: &str) {
        self.pairs
            .retain(|pair| pair.0 != name || pair.1.as_deref() != Some(value));
    }

    /// Returns `true` if at least one pair with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|pair| pair.0 == name)
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the store holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the values of pairs with the given name,
    /// in insertion order.
    ///
    /// An absent value yields `None`.
    pub fn values<'a>(&'a self, name: &'a str) -> Values<'a> {
        Values {
            inner: self.pairs.iter(),
            name,
        }
    }

    /// Returns an iterator over all `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Serializes the store with default [`Options`].
    ///
    /// Pairs are written as `name=value`, or bare `name` when the value is
    /// absent, separated by `&`; an empty store yields an empty string.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(Options::default())
    }

    /// Serializes the store with the given options.
    #[must_use]
    pub fn serialize_with(&self, options: Options) -> String {
        let mut out = String::new();
        self.write_wire(options, &mut out);
        out
    }

    pub(crate) fn write_wire(&self, options: Options, out: &mut String) {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            encoding::encode_query_part_to(name, options.form_query_spaces, out);
            if let Some(value) = value {
                out.push('=');
                encoding::encode_query_part_to(value, options.form_query_spaces, out);
            }
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, Option<V>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (N, Option<V>)>>(iter: I) -> QueryParams {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

impl<N: Into<String>, V: Into<String>> Extend<(N, Option<V>)> for QueryParams {
    fn extend<I: IntoIterator<Item = (N, Option<V>)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.pairs.push((name.into(), value.map(Into::into)));
        }
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over the values of one parameter name.
///
/// This struct is created by [`QueryParams::values`].
#[derive(Clone, Debug)]
pub struct Values<'a> {
    inner: slice::Iter<'a, (String, Option<String>)>,
    name: &'a str,
}

impl<'a> Iterator for Values<'a> {
    type Item = Option<&'a str>;

    fn next(&mut self) -> Option<Option<&'a str>> {
        for (name, value) in self.inner.by_ref() {
            if name.as_str() == self.name {
                return Some(value.as_deref());
            }
        }
        None
    }
}

/// An iterator over all `(name, value)` pairs.
///
/// This struct is created by [`QueryParams::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, Option<String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
