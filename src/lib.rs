#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A builder and parser for URLs, with component-wise percent-encoding per
//! [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! The crate is built from three pieces:
//!
//! - [`encoding`]: percent-encoding and -decoding against per-component
//!   allowed-character tables;
//! - [`QueryParams`]: an ordered multimap of decoded query parameters with
//!   stable re-serialization;
//! - [`Url`]: the parsed or assembled components of one URL, composing the
//!   two above.
//!
//! # Examples
//!
//! Parse a URL, adjust it, and render it back:
//!
//! ```
//! use urlsmith::Url;
//!
//! let url = Url::parse("https://example.com/search?q=rust")?
//!     .with_port(8080)
//!     .add_query_parameter("lang", "en");
//! assert_eq!(url.render(), "https://example.com:8080/search?q=rust&lang=en");
//! # Ok::<_, urlsmith::error::ParseError>(())
//! ```
//!
//! Assemble one from scratch:
//!
//! ```
//! use urlsmith::{component::Scheme, Url};
//!
//! let url = Url::new()
//!     .with_scheme(Scheme::new_or_panic("https"))
//!     .with_host("example.com")
//!     .append_path_segment("a b")
//!     .with_fragment(Some("frag"));
//! assert_eq!(url.render(), "https://example.com/a%20b#frag");
//! ```
//!
//! Expand a template:
//!
//! ```
//! use urlsmith::{Placeholders, Url};
//!
//! let vars = Placeholders::new().insert("term", "c++ & rust");
//! let url = Url::parse_template("https://example.com/search?q={term}", &vars)?;
//! assert_eq!(url.render(), "https://example.com/search?q=c%2B%2B%20%26%20rust");
//! # Ok::<_, urlsmith::error::TemplateError>(())
//! ```

pub mod component;
pub mod encoding;
pub mod error;
pub mod query;
pub mod template;

mod fmt;
mod parser;

pub use crate::{query::QueryParams, template::Placeholders};

use crate::{
    component::{Host, Scheme},
    encoding::table,
    error::{ParseError, TemplateError},
};
use std::fmt::Write;

/// Encoding-mode flags captured when a [`Url`] is constructed.
///
/// Both flags default to off.
///
/// # Examples
///
/// ```
/// use urlsmith::{Options, Url};
///
/// let options = Options::new().form_query_spaces(true);
/// let url = Url::parse_with("/search?q=a+b", options)?;
/// assert!(url.query().values("q").eq([Some("a b")]));
/// assert_eq!(url.render(), "/search?q=a+b");
/// # Ok::<_, urlsmith::error::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub(crate) form_query_spaces: bool,
    pub(crate) lenient_decoding: bool,
}

impl Options {
    /// Creates the default flag set.
    #[must_use]
    pub fn new() -> Options {
        Options::default()
    }

    /// Interoperates with form-encoded query strings: `+` decodes to a
    /// space and a space encodes to `+`, in query names and values only.
    ///
    /// Every other component always escapes a space as `%20`.
    #[must_use]
    pub fn form_query_spaces(mut self, enabled: bool) -> Options {
        self.form_query_spaces = enabled;
        self
    }

    /// Substitutes U+FFFD for undecodable octet sequences instead of
    /// failing the parse. Malformed percent escapes still fail.
    #[must_use]
    pub fn lenient_decoding(mut self, enabled: bool) -> Options {
        self.lenient_decoding = enabled;
        self
    }
}

/// The decoded components of one URL.
///
/// A `Url` is created by [`parse`](Self::parse), by
/// [`parse_template`](Self::parse_template), or empty through
/// [`new`](Self::new), and is then adjusted with the builder-style methods,
/// each of which consumes and returns the value. Every stored component is
/// held in decoded form; decoding happens exactly once at parse time and
/// encoding exactly once at render time, so a literal `%` in a component
/// never gets decoded twice.
///
/// [`render`](Self::render) and the getters take `&self` and never mutate,
/// so a constructed `Url` may be shared across threads for read-only use.
///
/// Two `Url`s compare equal when their components are equal; the encoding
/// [`Options`] do not take part in the comparison.
#[derive(Clone, Default)]
pub struct Url {
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) host: Option<Host>,
    pub(crate) port: Option<u16>,
    pub(crate) path_absolute: bool,
    pub(crate) path_segments: Vec<String>,
    pub(crate) query: QueryParams,
    pub(crate) fragment: Option<String>,
    pub(crate) options: Options,
}

impl Url {
    /// Creates an empty URL.
    #[must_use]
    pub fn new() -> Url {
        Url::default()
    }

    /// Parses a URL from a string with default [`Options`].
    ///
    /// Parsing is tolerant: characters that RFC 3986 would require to be
    /// percent-encoded are accepted verbatim and re-encoded on render.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for an invalid IP literal, an invalid port,
    /// a malformed percent escape, or a component that decodes to invalid
    /// UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlsmith::Url;
    ///
    /// let url = Url::parse("https://user:pw@example.com:8080/a b/c?x=1&y=&z#frag")?;
    /// assert_eq!(url.scheme().unwrap().as_str(), "https");
    /// assert_eq!(url.userinfo(), Some("user:pw"));
    /// assert_eq!(url.port(), Some(8080));
    /// assert_eq!(url.path_segments(), ["a b", "c"]);
    /// assert_eq!(url.fragment(), Some("frag"));
    /// assert_eq!(url.render(), "https://user:pw@example.com:8080/a%20b/c?x=1&y=&z#frag");
    /// # Ok::<_, urlsmith::error::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Url, ParseError> {
        parser::parse(s, Options::default())
    }

    /// Parses a URL from a string with the given options.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with(s: &str, options: Options) -> Result<Url, ParseError> {
        parser::parse(s, options)
    }

    /// Expands the `{placeholder}` markers in a URL template, then parses
    /// the result with default [`Options`].
    ///
    /// Replacement values are percent-encoded with the query table before
    /// substitution, since placeholders most commonly stand in query
    /// values; a placeholder inside a path segment whose value needs
    /// characters outside the query set must be pre-encoded by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unresolved`] naming the first placeholder
    /// without a supplied replacement, or [`TemplateError::Url`] when the
    /// expanded string fails to parse.
    pub fn parse_template(s: &str, placeholders: &Placeholders) -> Result<Url, TemplateError> {
        Url::parse_template_with(s, placeholders, Options::default())
    }

    /// Expands a URL template and parses the result with the given options.
    ///
    /// # Errors
    ///
    /// See [`parse_template`](Self::parse_template).
    pub fn parse_template_with(
        s: &str,
        placeholders: &Placeholders,
        options: Options,
    ) -> Result<Url, TemplateError> {
        let expanded = template::expand(s, placeholders)?;
        Ok(parser::parse(&expanded, options)?)
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_deref().map(Scheme::new_validated)
    }

    /// Returns the decoded userinfo component.
    ///
    /// The userinfo may itself contain a `:`-separated password; the crate
    /// does not split it further.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host component.
    #[must_use]
    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Returns the port component.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns `true` if the rendered path begins with `/`.
    ///
    /// A non-empty path renders absolute whenever a host is present, since
    /// a URL with an authority admits only an empty or absolute path.
    #[must_use]
    pub fn is_path_absolute(&self) -> bool {
        self.path_absolute || (self.host.is_some() && !self.path_segments.is_empty())
    }

    /// Returns the decoded path segments.
    ///
    /// Empty segments are preserved; `/a//b` yields `["a", "", "b"]`.
    #[must_use]
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Returns the decoded path as a single string.
    #[must_use]
    pub fn path(&self) -> String {
        let mut out = String::new();
        if self.is_path_absolute() {
            out.push('/');
        }
        for (i, segment) in self.path_segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(segment);
        }
        out
    }

    /// Returns the query-parameter store.
    #[must_use]
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Returns the query-parameter store for mutation.
    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Returns the decoded fragment component.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the encoding-mode flags.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Sets the scheme, normalized to lowercase.
    #[must_use]
    pub fn with_scheme(mut self, scheme: &Scheme) -> Url {
        self.scheme = Some(scheme.as_str().to_ascii_lowercase());
        self
    }

    /// Removes the scheme.
    #[must_use]
    pub fn without_scheme(mut self) -> Url {
        self.scheme = None;
        self
    }

    /// Sets or removes the userinfo, given in decoded form.
    #[must_use]
    pub fn with_userinfo(mut self, userinfo: Option<&str>) -> Url {
        self.userinfo = userinfo.map(|s| s.to_owned());
        self
    }

    /// Sets the host.
    ///
    /// Accepts anything convertible into a [`Host`]: a decoded registered
    /// name (promoted to [`Host::Ipv4`] when it is a dotted-quad literal),
    /// or an IP address.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv6Addr;
    /// use urlsmith::{component::Host, Url};
    ///
    /// let url = Url::new().with_host("127.0.0.1");
    /// assert!(matches!(url.host(), Some(&Host::Ipv4(_))));
    ///
    /// let url = Url::new().with_host(Ipv6Addr::LOCALHOST);
    /// assert_eq!(url.render(), "//[::1]");
    /// ```
    #[must_use]
    pub fn with_host(mut self, host: impl Into<Host>) -> Url {
        self.host = Some(host.into());
        self
    }

    /// Removes the whole authority: host, userinfo, and port.
    #[must_use]
    pub fn without_host(mut self) -> Url {
        self.userinfo = None;
        self.host = None;
        self.port = None;
        self
    }

    /// Sets or removes the port.
    ///
    /// Takes either a `u16` or an `Option<u16>`; `None` stands for the
    /// scheme's default port.
    #[must_use]
    pub fn with_port(mut self, port: impl Into<Option<u16>>) -> Url {
        self.port = port.into();
        self
    }

    /// Sets the path from a decoded string, replacing any existing segments.
    ///
    /// A leading `/` marks the path absolute; the remainder is split on `/`
    /// into segments.
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Url {
        self.path_segments.clear();
        self.path_absolute = path.starts_with('/');
        if !path.is_empty() {
            let body = path.strip_prefix('/').unwrap_or(path);
            self.path_segments.extend(body.split('/').map(str::to_owned));
        }
        self
    }

    /// Appends one decoded path segment.
    #[must_use]
    pub fn append_path_segment(mut self, segment: impl Into<String>) -> Url {
        self.path_segments.push(segment.into());
        self
    }

    /// Appends a query parameter. New parameters go to the end of the query.
    #[must_use]
    pub fn add_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Url {
        self.query.add(name, value);
        self
    }

    /// Appends a valueless query parameter (`?flag`).
    #[must_use]
    pub fn add_query_flag(mut self, name: impl Into<String>) -> Url {
        self.query.add_key_only(name);
        self
    }

    /// Replaces all query parameters with this name by a single new pair,
    /// appended at the end of the query.
    #[must_use]
    pub fn set_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Url {
        self.query.set(name, value);
        self
    }

    /// Removes all query parameters with this name.
    #[must_use]
    pub fn remove_query_parameters(mut self, name: &str) -> Url {
        self.query.remove_all(name);
        self
    }

    /// Replaces the whole query store.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Url {
        self.query = query;
        self
    }

    /// Sets or removes the fragment, given in decoded form.
    #[must_use]
    pub fn with_fragment(mut self, fragment: Option<&str>) -> Url {
        self.fragment = fragment.map(|s| s.to_owned());
        self
    }

    /// Sets the encoding-mode flags.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Url {
        self.options = options;
        self
    }

    /// Renders the URL.
    ///
    /// Each component is encoded with its own allowed-character table and
    /// the separators (`://`, `@`, `:`, `/`, `?`, `#`) appear only when the
    /// following component is present. Rendering never fails: a `:` in the
    /// first segment of a rootless, schemeless path is escaped to `%3A`,
    /// and a path that would begin with `//` without an authority is
    /// prefixed with `/.`, so the output always reads back as intended.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(host) = &self.host {
            out.push_str("//");
            if let Some(userinfo) = &self.userinfo {
                encoding::encode_to(userinfo, table::USERINFO, &mut out);
                out.push('@');
            }
            write!(out, "{host}").unwrap();
            if let Some(port) = self.port {
                write!(out, ":{port}").unwrap();
            }
        }
        self.write_path(&mut out);
        if !self.query.is_empty() {
            out.push('?');
            self.query.write_wire(self.options, &mut out);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            encoding::encode_to(fragment, table::FRAGMENT, &mut out);
        }
        out
    }

    fn write_path(&self, out: &mut String) {
        if self.path_segments.is_empty() {
            if self.path_absolute {
                out.push('/');
            }
            return;
        }
        let absolute = self.is_path_absolute();
        if absolute && self.host.is_none() && self.path_segments[0].is_empty() {
            // "//" at the start of an authority-less path would read back
            // as an authority.
            out.push_str("/.");
        }
        if absolute {
            out.push('/');
        }
        for (i, segment) in self.path_segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            if i == 0 && !absolute && self.scheme.is_none() {
                encoding::encode_to(segment, table::PATH_SEGMENT_NC, out);
            } else {
                encoding::encode_to(segment, table::PATH_SEGMENT, out);
            }
        }
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Url) -> bool {
        self.scheme == other.scheme
            && self.userinfo == other.userinfo
            && self.host == other.host
            && self.port == other.port
            && self.is_path_absolute() == other.is_path_absolute()
            && self.path_segments == other.path_segments
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

impl Eq for Url {}

impl std::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Url, ParseError> {
        Url::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Url;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Url {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.render())
        }
    }

    impl<'de> Deserialize<'de> for Url {
        fn deserialize<D>(deserializer: D) -> Result<Url, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Url::parse(&s).map_err(de::Error::custom)
        }
    }
}
