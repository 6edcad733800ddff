//! Utilities for percent-encoding.
//!
//! Every component of a URL has its own allowed-character [`Table`]; a byte
//! outside the component's table is written as `%` followed by two uppercase
//! hex digits of the byte. Decoding is the exact inverse and is common to
//! all components.
//!
//! [`Table`]: table::Table

pub mod table;

use crate::error::{DecodeError, DecodeErrorKind};
use std::borrow::Cow;
use table::Table;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Percent-encodes a string with the given table.
///
/// The input is borrowed unchanged when no byte needs encoding.
///
/// # Examples
///
/// ```
/// use urlsmith::encoding::{encode, table};
///
/// assert_eq!(encode("a b", table::PATH_SEGMENT), "a%20b");
/// assert_eq!(encode("abc", table::PATH_SEGMENT), "abc");
/// ```
#[must_use]
pub fn encode<'a>(s: &'a str, table: &Table) -> Cow<'a, str> {
    if s.bytes().all(|x| table.allows(x)) {
        Cow::Borrowed(s)
    } else {
        let mut buf = String::with_capacity(s.len());
        encode_to(s, table, &mut buf);
        Cow::Owned(buf)
    }
}

/// Percent-encodes a string with the given table, appending the output to `buf`.
pub fn encode_to(s: &str, table: &Table, buf: &mut String) {
    for x in s.bytes() {
        table.encode(x, buf);
    }
}

/// Encodes one query name or value, optionally writing spaces as `+`.
pub(crate) fn encode_query_part_to(s: &str, plus_spaces: bool, buf: &mut String) {
    for x in s.bytes() {
        if plus_spaces && x == b' ' {
            buf.push('+');
        } else {
            table::QUERY_PART.encode(x, buf);
        }
    }
}

/// Percent-decodes a string.
///
/// The input is borrowed unchanged when it contains no `%`, which makes
/// decoding idempotent on already-decoded text.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a `%` is not followed by two hex digits,
/// or when the decoded octets are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use urlsmith::encoding::decode;
///
/// assert_eq!(decode("a%20b").unwrap(), "a b");
/// assert_eq!(decode("%2").unwrap_err().index(), 0);
/// ```
pub fn decode(s: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode_with(s, false, false)
}

/// Percent-decodes a string, substituting U+FFFD for undecodable octet
/// sequences instead of failing.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a `%` is not followed by two hex digits;
/// malformed escapes are an error even in lenient mode.
pub fn decode_lenient(s: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode_with(s, false, true)
}

pub(crate) fn decode_with(
    s: &str,
    plus_as_space: bool,
    lenient: bool,
) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = s.as_bytes();
    // Skip bytes that need no decoding.
    let i = match bytes
        .iter()
        .position(|&x| x == b'%' || (plus_as_space && x == b'+'))
    {
        Some(i) => i,
        None => return Ok(Cow::Borrowed(s)),
    };

    let mut buf = Vec::with_capacity(bytes.len());
    buf.extend_from_slice(&bytes[..i]);

    let mut i = i;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            if i + 2 >= bytes.len() {
                return Err(DecodeError {
                    index: i,
                    kind: DecodeErrorKind::InvalidOctet,
                });
            }
            let octet = match decode_octet(bytes[i + 1], bytes[i + 2]) {
                Some(octet) => octet,
                None => {
                    return Err(DecodeError {
                        index: i,
                        kind: DecodeErrorKind::InvalidOctet,
                    });
                }
            };
            buf.push(octet);
            i += 3;
        } else if plus_as_space && x == b'+' {
            buf.push(b' ');
            i += 1;
        } else {
            buf.push(x);
            i += 1;
        }
    }

    let text = if lenient {
        match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    } else {
        String::from_utf8(buf).map_err(|e| DecodeError {
            index: e.utf8_error().valid_up_to(),
            kind: DecodeErrorKind::InvalidUtf8,
        })?
    };
    Ok(Cow::Owned(text))
}
