use std::collections::HashSet;

use surly::Url;

#[test]
fn from_str_trims() {
    let url: Url = " http://example.com ".parse().unwrap();
    assert_eq!(url, "http://example.com");

    let url: Url = "\n\thttp://example.com/a?b=c\t\n".parse().unwrap();
    assert_eq!(url, "http://example.com/a?b=c");

    // Interior whitespace is still invalid after trimming.
    assert!(" http://exa mple.com ".parse::<Url>().is_err());
    assert!(" [foul] http://example.com ".parse::<Url>().is_err());
}

#[test]
fn try_from_does_not_trim() {
    assert!(Url::try_from(" http://example.com ").is_err());
    assert_eq!(
        Url::try_from("http://example.com").unwrap(),
        "http://example.com"
    );
}

#[test]
fn try_from_string_recovers_input() {
    let url = Url::try_from(String::from("http://example.com")).unwrap();
    assert_eq!(url, "http://example.com");

    let e = Url::try_from(String::from("[foul] http://example.com")).unwrap_err();
    assert_eq!(e.into_input(), "[foul] http://example.com");
}

#[test]
fn into_and_from_string() {
    let url = Url::parse("http://example.com/a#b").unwrap();
    assert_eq!(url.clone().into_string(), "http://example.com/a#b");
    assert_eq!(String::from(url), "http://example.com/a#b");
}

#[test]
fn as_ref_and_borrow() {
    let url = Url::parse("http://example.com").unwrap();
    assert_eq!(url.as_ref(), "http://example.com");

    // `Borrow<str>` lets a borrowed string probe a keyed collection.
    let mut set = HashSet::new();
    set.insert(url);
    assert!(set.contains("http://example.com"));
    assert!(!set.contains("http://example.com/"));
}

#[test]
fn display_matches_raw() {
    let raw = "HTTP://EXAMPLE.com/%7euser?q#f";
    let url = Url::parse(raw).unwrap();
    assert_eq!(url.to_string(), raw);
    assert_eq!(format!("{url}"), raw);

    // Formatter flags pass through to the text.
    let url = Url::parse("foo:bar").unwrap();
    assert_eq!(format!("{url:>9}"), "  foo:bar");
    assert_eq!(format!("{url:-<9}"), "foo:bar--");
}

#[test]
fn text_round_trip() {
    for s in [
        "http://example.com",
        "https://user@example.com:8042/over/there?name=ferret#nose",
        "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
        "//cdn.example.org/lib.js",
        "../relative/path",
        "?q=1",
        "#frag",
        "",
    ] {
        let url: Url = s.parse().unwrap();
        assert_eq!(url.to_string(), s);
    }
}
