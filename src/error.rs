//! Error types.

/// Detailed cause of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// The decoded octets are not valid UTF-8.
    ///
    /// The error index points to the first octet at which the decoded
    /// sequence stops being valid UTF-8.
    InvalidUtf8,
}

/// An error occurred when percent-decoding a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub(crate) index: usize,
    pub(crate) kind: DecodeErrorKind,
}

impl DecodeError {
    /// Returns the index where the error occurred.
    ///
    /// For [`DecodeErrorKind::InvalidOctet`] the index is into the input
    /// string; for [`DecodeErrorKind::InvalidUtf8`] it is into the decoded
    /// octets.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Rebases the error index onto a larger input.
    pub(crate) fn at(self, base: usize) -> DecodeError {
        DecodeError {
            index: base + self.index,
            kind: self.kind,
        }
    }

    pub(crate) fn into_parse(self, base: usize) -> ParseError {
        let kind = match self.kind {
            DecodeErrorKind::InvalidOctet => ParseErrorKind::InvalidOctet,
            DecodeErrorKind::InvalidUtf8 => ParseErrorKind::InvalidUtf8,
        };
        ParseError {
            index: base + self.index,
            kind,
        }
    }
}

impl std::error::Error for DecodeError {}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid IP literal address, including an unterminated one.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
    /// The port subcomponent is not a decimal integer in the range 0..=65535.
    ///
    /// The error index points to the first character of the port.
    InvalidPort,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// A component decoded to octets that are not valid UTF-8.
    ///
    /// Not produced when lenient decoding is enabled.
    InvalidUtf8,
}

/// An error occurred when parsing a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index in the input string where the error occurred.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::error::Error for ParseError {}

/// An error occurred when expanding and parsing a URL template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{placeholder}` in the template has no supplied replacement value.
    Unresolved {
        /// The placeholder identifier.
        name: String,
    },
    /// The expanded template failed to parse.
    Url(ParseError),
}

impl From<ParseError> for TemplateError {
    fn from(e: ParseError) -> TemplateError {
        TemplateError::Url(e)
    }
}

impl std::error::Error for TemplateError {}
