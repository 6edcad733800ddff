//! The URL grammar parser.
//!
//! Parsing is tolerant where RFC 3986 would reject: components are split at
//! the structural delimiters and percent-decoded, and only IP literals,
//! ports, and percent escapes can fail.

use crate::{
    component::{Host, Scheme},
    encoding,
    error::{ParseError, ParseErrorKind},
    query::QueryParams,
    Options, Url,
};
use std::borrow::Cow;
use std::net::Ipv6Addr;

pub(crate) fn parse(s: &str, options: Options) -> Result<Url, ParseError> {
    let mut url = Url::new().with_options(options);
    let mut rest = s;
    let mut pos = 0;

    // Scheme: the prefix before the first ':' when it matches
    // ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ); anything else makes the
    // input scheme-relative.
    if let Some(i) = rest.find(':') {
        if Scheme::new(&rest[..i]).is_some() {
            url.scheme = Some(rest[..i].to_ascii_lowercase());
            rest = &rest[i + 1..];
            pos += i + 1;
        }
    }

    // Authority: present only after "//"; runs to the next '/', '?', '#'
    // or the end.
    if let Some(auth_rest) = rest.strip_prefix("//") {
        pos += 2;
        let end = auth_rest
            .find(&['/', '?', '#'][..])
            .unwrap_or(auth_rest.len());
        parse_authority(&auth_rest[..end], pos, options, &mut url)?;
        rest = &auth_rest[end..];
        pos += end;
    }

    // Path: up to '?' or '#'.
    let end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    parse_path(&rest[..end], pos, options, &mut url)?;
    rest = &rest[end..];
    pos += end;

    // Query.
    if let Some(query_rest) = rest.strip_prefix('?') {
        let end = query_rest.find('#').unwrap_or(query_rest.len());
        url.query = QueryParams::parse_with(&query_rest[..end], options)
            .map_err(|e| e.into_parse(pos + 1))?;
        rest = &query_rest[end..];
        pos += end + 1;
    }

    // Fragment.
    if let Some(fragment) = rest.strip_prefix('#') {
        url.fragment = Some(decode_component(fragment, pos + 1, options)?.into_owned());
    }

    Ok(url)
}

fn parse_authority(
    auth: &str,
    pos: usize,
    options: Options,
    url: &mut Url,
) -> Result<(), ParseError> {
    let mut rest = auth;
    let mut pos = pos;

    // The userinfo ends at the last '@'.
    if let Some(i) = rest.rfind('@') {
        url.userinfo = Some(decode_component(&rest[..i], pos, options)?.into_owned());
        rest = &rest[i + 1..];
        pos += i + 1;
    }

    if rest.starts_with('[') {
        // A bracketed host is an IPv6 literal; ':' inside the brackets is
        // structural and the content is never percent-decoded.
        let close = match rest.find(']') {
            Some(close) => close,
            None => {
                return Err(ParseError {
                    index: pos,
                    kind: ParseErrorKind::InvalidIpLiteral,
                });
            }
        };
        let addr: Ipv6Addr = rest[1..close].parse().map_err(|_| ParseError {
            index: pos,
            kind: ParseErrorKind::InvalidIpLiteral,
        })?;
        url.host = Some(Host::Ipv6(addr));

        match rest[close + 1..].strip_prefix(':') {
            Some(port) => url.port = parse_port(port, pos + close + 2)?,
            None if close + 1 == rest.len() => {}
            None => {
                return Err(ParseError {
                    index: pos,
                    kind: ParseErrorKind::InvalidIpLiteral,
                });
            }
        }
    } else {
        // The host and port split at the last ':'.
        let (host, port) = match rest.rfind(':') {
            Some(i) => (&rest[..i], Some((&rest[i + 1..], pos + i + 1))),
            None => (rest, None),
        };
        let decoded = decode_component(host, pos, options)?.into_owned();
        url.host = Some(Host::from(decoded));
        if let Some((port, port_pos)) = port {
            url.port = parse_port(port, port_pos)?;
        }
    }
    Ok(())
}

/// An empty port (`host:`) counts as absent.
fn parse_port(s: &str, pos: usize) -> Result<Option<u16>, ParseError> {
    if s.is_empty() {
        return Ok(None);
    }
    if s.bytes().all(|x| x.is_ascii_digit()) {
        if let Ok(port) = s.parse::<u16>() {
            return Ok(Some(port));
        }
    }
    Err(ParseError {
        index: pos,
        kind: ParseErrorKind::InvalidPort,
    })
}

fn parse_path(path: &str, pos: usize, options: Options, url: &mut Url) -> Result<(), ParseError> {
    if path.is_empty() {
        return Ok(());
    }
    let (absolute, body) = match path.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, path),
    };
    url.path_absolute = absolute;
    let mut pos = pos + absolute as usize;
    for segment in body.split('/') {
        url.path_segments
            .push(decode_component(segment, pos, options)?.into_owned());
        pos += segment.len() + 1;
    }
    Ok(())
}

fn decode_component<'a>(
    raw: &'a str,
    pos: usize,
    options: Options,
) -> Result<Cow<'a, str>, ParseError> {
    let decoded = if options.lenient_decoding {
        encoding::decode_lenient(raw)
    } else {
        encoding::decode(raw)
    };
    decoded.map_err(|e| e.into_parse(pos))
}
