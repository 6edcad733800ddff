use std::net::{Ipv4Addr, Ipv6Addr};

use urlsmith::component::{Host, Scheme};
use urlsmith::{Options, QueryParams, Url};

#[test]
fn builds_from_scratch() {
    let url = Url::new()
        .with_scheme(Scheme::new_or_panic("https"))
        .with_host("example.com")
        .with_port(8080)
        .with_userinfo(Some("user:pw"))
        .append_path_segment("a b")
        .append_path_segment("c")
        .add_query_parameter("x", "1")
        .add_query_parameter("y", "")
        .add_query_flag("z")
        .with_fragment(Some("frag"));
    assert_eq!(
        url.render(),
        "https://user:pw@example.com:8080/a%20b/c?x=1&y=&z#frag"
    );

    // The rendered form parses back to an equal model.
    assert_eq!(Url::parse(&url.render()).unwrap(), url);
}

#[test]
fn renders_degenerate_states() {
    assert_eq!(Url::new().render(), "");
    assert_eq!(Url::new().with_path("/a/b").render(), "/a/b");
    assert_eq!(Url::new().with_fragment(Some("x")).render(), "#x");
    assert_eq!(
        Url::new().add_query_parameter("a", "1").render(),
        "?a=1"
    );
}

#[test]
fn scheme_is_lowercased() {
    let url = Url::new()
        .with_scheme(Scheme::new_or_panic("HTTPS"))
        .with_host("example.com");
    assert_eq!(url.render(), "https://example.com");
    assert_eq!(url.scheme(), Some(Scheme::new_or_panic("https")));

    assert!(Scheme::new("http").is_some());
    assert!(Scheme::new("x+y-z.1").is_some());
    assert!(Scheme::new("1http").is_none());
    assert!(Scheme::new("ht tp").is_none());
    assert!(Scheme::new("").is_none());
}

#[test]
fn hosts_render_by_tag() {
    let url = Url::new().with_host("example.com");
    assert_eq!(url.host(), Some(&Host::RegName("example.com".to_owned())));
    assert_eq!(url.render(), "//example.com");

    // A dotted quad is promoted.
    let url = Url::new().with_host("127.0.0.1");
    assert_eq!(url.host(), Some(&Host::Ipv4(Ipv4Addr::new(127, 0, 0, 1))));

    let url = Url::new().with_host(Ipv6Addr::LOCALHOST).with_port(80);
    assert_eq!(url.render(), "//[::1]:80");

    // A decoded reg-name is re-encoded on render.
    let url = Url::new().with_host("a b");
    assert_eq!(url.render(), "//a%20b");

    let url = Url::new().with_host("example.com").without_host();
    assert_eq!(url.render(), "");
}

#[test]
fn authority_forces_absolute_path() {
    let url = Url::new().with_host("example.com").append_path_segment("a");
    assert!(url.is_path_absolute());
    assert_eq!(url.render(), "//example.com/a");
    assert_eq!(url.path(), "/a");
}

#[test]
fn port_is_rendered_only_with_a_host() {
    let url = Url::new().with_port(8080).with_path("/x");
    assert_eq!(url.render(), "/x");
    assert_eq!(Url::new().with_port(None).render(), "");
}

#[test]
fn render_escapes_ambiguous_paths() {
    // A ':' in the first segment of a rootless, schemeless path would read
    // back as a scheme.
    let url = Url::new().with_path("a:b/c");
    assert_eq!(url.render(), "a%3Ab/c");
    assert_eq!(Url::parse(&url.render()).unwrap(), url);

    // With a scheme there is no ambiguity.
    let url = Url::new()
        .with_scheme(Scheme::new_or_panic("foo"))
        .with_path("a:b");
    assert_eq!(url.render(), "foo:a:b");

    // A path starting "//" without an authority would read back as one.
    let url = Url::new().with_path("//x");
    assert_eq!(url.render(), "/.//x");
    let reparsed = Url::parse("/.//x").unwrap();
    assert_eq!(reparsed.render(), "/.//x");
}

#[test]
fn with_path_replaces_segments() {
    let url = Url::new().with_path("/a/b").with_path("c/d");
    assert!(!url.is_path_absolute());
    assert_eq!(url.path_segments(), ["c", "d"]);
    assert_eq!(url.path(), "c/d");

    let url = Url::new().with_path("/");
    assert_eq!(url.path_segments(), [""]);
    assert_eq!(url.render(), "/");

    let url = Url::new().with_path("");
    assert_eq!(url.path_segments(), [""; 0]);
    assert_eq!(url.render(), "");
}

#[test]
fn query_mutators() {
    let url = Url::new()
        .add_query_parameter("a", "1")
        .add_query_parameter("a", "2")
        .set_query_parameter("a", "3")
        .add_query_parameter("b", "4")
        .remove_query_parameters("missing");
    assert_eq!(url.render(), "?a=3&b=4");

    let mut params = QueryParams::new();
    params.add("q", "rust");
    let url = Url::new().with_query(params);
    assert_eq!(url.render(), "?q=rust");

    let mut url = Url::parse("?a=1").unwrap();
    url.query_mut().add("b", "2");
    assert_eq!(url.render(), "?a=1&b=2");
}

#[test]
fn display_and_from_str() {
    let url: Url = "https://example.com/a?b=1#c".parse().unwrap();
    assert_eq!(url.to_string(), url.render());
    assert_eq!(format!("{url}"), "https://example.com/a?b=1#c");
}

#[test]
fn equality_ignores_options() {
    let a = Url::parse("/x?q=1").unwrap();
    let b = Url::parse_with("/x?q=1", Options::new().form_query_spaces(true)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Url::parse("/x?q=2").unwrap());
}

#[test]
fn render_does_not_mutate() {
    let url = Url::parse("https://example.com/a b?x=1#f").unwrap();
    let first = url.render();
    assert_eq!(first, url.render());
    assert_eq!(first, url.render());
}
