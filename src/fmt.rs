use crate::{
    component::{Host, Scheme},
    encoding::{self, table},
    error::{DecodeError, DecodeErrorKind, ParseError, ParseErrorKind, TemplateError},
    query::QueryParams,
    Url,
};
use std::fmt;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            DecodeErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            DecodeErrorKind::InvalidUtf8 => "decoded octets are not valid UTF-8 at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::InvalidUtf8 => "decoded octets are not valid UTF-8 at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Unresolved { name } => write!(f, "unresolved placeholder {name:?}"),
            TemplateError::Url(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Host {
    /// Writes the host as it appears in a rendered URL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::RegName(name) => f.write_str(&encoding::encode(name, table::REG_NAME)),
            Host::Ipv4(addr) => fmt::Display::fmt(addr, f),
            Host::Ipv6(addr) => write!(f, "[{addr}]"),
        }
    }
}

impl fmt::Display for QueryParams {
    /// Writes the serialized wire form with default options.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl fmt::Display for Url {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Url")
            .field("scheme", &self.scheme())
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path_segments", &self.path_segments())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
