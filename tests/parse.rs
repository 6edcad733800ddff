use std::net::{Ipv4Addr, Ipv6Addr};

use urlsmith::component::Host;
use urlsmith::error::ParseErrorKind;
use urlsmith::{Options, Url};

#[test]
fn parse_full() {
    let u = Url::parse("https://user:pw@example.com:8080/a b/c?x=1&y=&z#frag").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "https");
    assert_eq!(u.userinfo(), Some("user:pw"));
    assert_eq!(u.host(), Some(&Host::RegName("example.com".to_owned())));
    assert_eq!(u.port(), Some(8080));
    assert!(u.is_path_absolute());
    assert_eq!(u.path_segments(), ["a b", "c"]);
    assert!(u.query().values("x").eq([Some("1")]));
    assert!(u.query().values("y").eq([Some("")]));
    assert!(u.query().values("z").eq([None::<&str>]));
    assert_eq!(u.fragment(), Some("frag"));
    assert_eq!(
        u.render(),
        "https://user:pw@example.com:8080/a%20b/c?x=1&y=&z#frag"
    );
}

#[test]
fn parse_absolute() {
    let u = Url::parse("file:///etc/hosts").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "file");
    assert_eq!(u.host(), Some(&Host::RegName(String::new())));
    assert_eq!(u.port(), None);
    assert_eq!(u.path_segments(), ["etc", "hosts"]);
    assert_eq!(u.render(), "file:///etc/hosts");

    let u = Url::parse("ftp://ftp.is.co.za/rfc/rfc1808.txt").unwrap();
    assert_eq!(u.host(), Some(&Host::RegName("ftp.is.co.za".to_owned())));
    assert_eq!(u.path_segments(), ["rfc", "rfc1808.txt"]);

    let u = Url::parse("mailto:John.Doe@example.com").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "mailto");
    assert_eq!(u.host(), None);
    assert!(!u.is_path_absolute());
    assert_eq!(u.path_segments(), ["John.Doe@example.com"]);
    assert_eq!(u.render(), "mailto:John.Doe@example.com");
}

#[test]
fn parse_relative() {
    let u = Url::parse("a/b").unwrap();
    assert_eq!(u.scheme(), None);
    assert!(!u.is_path_absolute());
    assert_eq!(u.path_segments(), ["a", "b"]);
    assert_eq!(u.render(), "a/b");

    let u = Url::parse("/a/b").unwrap();
    assert!(u.is_path_absolute());
    assert_eq!(u.path_segments(), ["a", "b"]);
    assert_eq!(u.render(), "/a/b");

    let u = Url::parse("//example.com:8080/x").unwrap();
    assert_eq!(u.scheme(), None);
    assert_eq!(u.host(), Some(&Host::RegName("example.com".to_owned())));
    assert_eq!(u.port(), Some(8080));
    assert_eq!(u.path_segments(), ["x"]);

    let u = Url::parse("").unwrap();
    assert_eq!(u, Url::new());
    assert_eq!(u.render(), "");
}

#[test]
fn parse_preserves_empty_segments() {
    let u = Url::parse("/path/to//dir/").unwrap();
    assert_eq!(u.path_segments(), ["path", "to", "", "dir", ""]);
    assert_eq!(u.render(), "/path/to//dir/");

    let u = Url::parse("/").unwrap();
    assert_eq!(u.path_segments(), [""]);
    assert_eq!(u.render(), "/");
}

#[test]
fn parse_normalizes_scheme_case() {
    let u = Url::parse("HTTP://EXAMPLE.com/").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "http");
    // Only the scheme is normalized.
    assert_eq!(u.host(), Some(&Host::RegName("EXAMPLE.com".to_owned())));
}

#[test]
fn parse_hosts() {
    let u = Url::parse("http://127.0.0.1:80/").unwrap();
    assert_eq!(u.host(), Some(&Host::Ipv4(Ipv4Addr::new(127, 0, 0, 1))));
    assert_eq!(u.render(), "http://127.0.0.1:80/");

    // A percent-encoded dotted quad still reads as an IPv4 address once
    // decoded.
    let u = Url::parse("http://%31%32%37.0.0.1/").unwrap();
    assert_eq!(u.host(), Some(&Host::Ipv4(Ipv4Addr::new(127, 0, 0, 1))));

    // Not a dotted quad: stays a registered name.
    let u = Url::parse("http://999.0.0.1/").unwrap();
    assert_eq!(u.host(), Some(&Host::RegName("999.0.0.1".to_owned())));

    let u = Url::parse("http://[::1]:80/").unwrap();
    assert_eq!(u.host(), Some(&Host::Ipv6(Ipv6Addr::LOCALHOST)));
    assert_eq!(u.port(), Some(80));
    assert_eq!(u.render(), "http://[::1]:80/");

    let u = Url::parse("ldap://[2001:db8::7]/c=GB").unwrap();
    assert_eq!(
        u.host(),
        Some(&Host::Ipv6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 7)))
    );
}

#[test]
fn parse_userinfo() {
    // The userinfo ends at the last '@'.
    let u = Url::parse("http://a@b@c.com/").unwrap();
    assert_eq!(u.userinfo(), Some("a@b"));
    assert_eq!(u.host(), Some(&Host::RegName("c.com".to_owned())));
    assert_eq!(u.render(), "http://a%40b@c.com/");

    let u = Url::parse("http://@example.com/").unwrap();
    assert_eq!(u.userinfo(), Some(""));
    assert_eq!(u.render(), "http://@example.com/");
}

#[test]
fn parse_empty_port_is_absent() {
    let u = Url::parse("http://example.com:/").unwrap();
    assert_eq!(u.port(), None);
    assert_eq!(u.render(), "http://example.com/");
}

#[test]
fn parse_errors() {
    let e = Url::parse("http://[::1/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);
    assert_eq!(e.index(), 7);

    let e = Url::parse("http://[zz]/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    let e = Url::parse("http://[::1]junk/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    let e = Url::parse("http://example.com:abc/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidPort);
    assert_eq!(e.index(), 19);

    let e = Url::parse("http://example.com:99999/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidPort);

    let e = Url::parse("/x/%2").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
    assert_eq!(e.index(), 3);

    let e = Url::parse("#%C3%28").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidUtf8);
}

#[test]
fn parse_lenient() {
    let options = Options::new().lenient_decoding(true);
    let u = Url::parse_with("/p%FF", options).unwrap();
    assert_eq!(u.path_segments(), ["p\u{FFFD}"]);

    // Malformed escapes still fail in lenient mode.
    let e = Url::parse_with("/p%2", options).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
}

#[test]
fn parse_render_stability() {
    let cases = [
        "https://user:pw@example.com:8080/a%20b/c?x=1&y=&z#frag",
        "http://example.com",
        "http://example.com/",
        "file:///etc/hosts",
        "mailto:John.Doe@example.com",
        "news:comp.infosystems.www.servers.unix",
        "tel:+1-816-555-1212",
        "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
        "http://[::1]:80/",
        "ldap://[2001:db8::7]/c=GB?objectClass?one",
        "foo://info.example.com?fred",
        "a/b/c",
        "/a//b/",
        "?x=1",
        "#frag",
        "//example.com",
        "http://a@b@c.com/%2F?a=b=c&&d",
        "%3Afoo",
    ];
    for s in cases {
        let u = Url::parse(s).unwrap();
        let rendered = u.render();
        let reparsed = Url::parse(&rendered).unwrap();
        assert_eq!(u, reparsed, "{s}");
        assert_eq!(rendered, reparsed.render(), "{s}");
    }
}
