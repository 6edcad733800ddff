//! URL components.

use crate::encoding::table;
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use urlsmith::{component::Scheme, Url};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let url = Url::parse("HTTP://example.com/")?;
/// assert_eq!(url.scheme(), Some(SCHEME_HTTP));
/// # Ok::<_, urlsmith::error::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`, returning `None` if the string
    /// is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme].
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name. For a non-panicking
    /// variant, use [`new`](Self::new).
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Returns the scheme as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// A parsed [host] subcomponent of authority.
///
/// The variant tag drives re-rendering: an IPv6 address is always wrapped
/// in square brackets, while a registered name is percent-encoded with the
/// host table.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Host {
    /// A registered name, held in decoded form.
    RegName(String),
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
    /// An IPv6 address.
    Ipv6(Ipv6Addr),
}

impl From<String> for Host {
    /// Creates a `Host` from a decoded registered name.
    ///
    /// A name that matches the `IPv4address` rule of
    /// [Section 3.2.2 of RFC 3986][host] becomes [`Host::Ipv4`].
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    fn from(name: String) -> Host {
        match name.parse::<Ipv4Addr>() {
            Ok(addr) => Host::Ipv4(addr),
            Err(_) => Host::RegName(name),
        }
    }
}

impl From<&str> for Host {
    fn from(name: &str) -> Host {
        Host::from(name.to_owned())
    }
}

impl From<Ipv4Addr> for Host {
    fn from(addr: Ipv4Addr) -> Host {
        Host::Ipv4(addr)
    }
}

impl From<Ipv6Addr> for Host {
    fn from(addr: Ipv6Addr) -> Host {
        Host::Ipv6(addr)
    }
}

impl From<IpAddr> for Host {
    fn from(addr: IpAddr) -> Host {
        match addr {
            IpAddr::V4(addr) => Host::Ipv4(addr),
            IpAddr::V6(addr) => Host::Ipv6(addr),
        }
    }
}
