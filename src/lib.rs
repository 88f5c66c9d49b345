#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! A URL value type that preserves its input text exactly.
//!
//! [`Url`] checks a string against the `URI-reference` grammar from
//! [RFC 3986] and stores it byte-for-byte. No normalization and no
//! re-encoding takes place at any point: the text you parse is the text
//! you get back from [`as_str`], from [`Display`], and from every codec.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [`as_str`]: Url::as_str
//! [`Display`]: core::fmt::Display
//!
//! Grammar work is delegated to [`fluent_uri`], which is re-exported at
//! the crate root; [`as_uri_ref`] exposes the parsed components.
//!
//! [`as_uri_ref`]: Url::as_uri_ref
//!
//! # Examples
//!
//! Parse a URL and inspect its components:
//!
//! ```
//! use surly::Url;
//!
//! let url = Url::parse("https://user@example.com:8042/over/there?name=ferret#nose")?;
//! assert_eq!(url.as_str(), "https://user@example.com:8042/over/there?name=ferret#nose");
//!
//! let uri = url.as_uri_ref();
//! assert_eq!(uri.scheme().unwrap().as_str(), "https");
//! assert_eq!(uri.authority().unwrap().host(), "example.com");
//! assert_eq!(uri.path().as_str(), "/over/there");
//! assert_eq!(uri.fragment().unwrap().as_str(), "nose");
//! # Ok::<_, surly::ParseError>(())
//! ```
//!
//! Resolve a relative reference against a base:
//!
//! ```
//! use surly::Url;
//!
//! let base = Url::parse("http://example.com/a/b")?;
//! assert_eq!(base.resolve_reference(&Url::parse("c")?), "http://example.com/a/c");
//! # Ok::<_, surly::ParseError>(())
//! ```
//!
//! # Serde
//!
//! A `Url` serializes as a plain string scalar carrying the raw text, and
//! deserializes by trimming surrounding whitespace and validating. This
//! one pair of impls covers JSON strings with `serde_json` as well as XML
//! element content and attribute values with `quick-xml`; an invalid URL
//! aborts decoding of the enclosing document with the host format's own
//! error type.
//!
//! ```
//! use surly::Url;
//!
//! let url: Url = serde_json::from_str("\" http://example.com \"")?;
//! assert_eq!(url, "http://example.com");
//! assert_eq!(serde_json::to_string(&url)?, "\"http://example.com\"");
//! # Ok::<_, serde_json::Error>(())
//! ```

use fluent_uri::UriRef;

mod convert;
mod error;
mod fmt;
mod resolve;
mod serde;

pub use error::ParseError;

#[doc(no_inline)]
pub use fluent_uri;

/// A URL holding the exact text it was parsed from.
///
/// A `Url` is any [URI reference] valid under the RFC 3986 grammar, which
/// includes absolute URIs (`http://example.com/`), relative references
/// (`../a/b`, `?query`, `#fragment`) and the empty string. Validation
/// happens once, on construction; a `Url` with invalid text cannot exist.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// The value is immutable. Every producing operation, including
/// [`resolve_reference`], returns a new `Url` and leaves its operands
/// untouched. There is no interior mutability, so sharing across threads
/// requires no synchronization.
///
/// [`resolve_reference`]: Url::resolve_reference
///
/// # Comparison
///
/// Equality, ordering and hashing are all defined over the raw text.
/// Two `Url`s that are equivalent after normalization but textually
/// different compare unequal:
///
/// ```
/// use surly::Url;
///
/// assert_ne!(Url::parse("http://example.com/")?, Url::parse("http://example.com")?);
/// # Ok::<_, surly::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Url {
    uri: UriRef<String>,
}

impl Url {
    /// Parses a string into a `Url`.
    ///
    /// The input is validated as-is: no whitespace trimming, no case
    /// folding and no re-encoding. On success the text is stored
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the offending input and the
    /// grammar diagnostic if the input is not a valid URI reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let url = Url::parse("http://example.com")?;
    /// assert_eq!(url.as_str(), "http://example.com");
    ///
    /// assert!(Url::parse("[foul] http://example.com").is_err());
    /// # Ok::<_, surly::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Url, ParseError> {
        match UriRef::parse(s) {
            Ok(uri) => Ok(Url {
                uri: uri.to_owned(),
            }),
            Err(e) => Err(ParseError {
                input: s.to_owned(),
                source: e,
            }),
        }
    }

    /// Parses a string into a `Url`, panicking on invalid input.
    ///
    /// This method is intended for URL literals known to be valid when
    /// written down. Feeding it untrusted input is a bug in the caller;
    /// use [`parse`](Self::parse) there instead.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid URI reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let url = Url::parse_or_panic("http://example.com");
    /// assert_eq!(url.as_str(), "http://example.com");
    /// ```
    #[must_use]
    pub fn parse_or_panic(s: &str) -> Url {
        match Url::parse(s) {
            Ok(url) => url,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the raw text as a string slice.
    ///
    /// This is the exact input the `Url` was parsed from, byte-for-byte.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.uri.as_str()
    }

    /// Returns the parsed view of the URL.
    ///
    /// The view is derived from the raw text at construction and grants
    /// read access to the scheme, authority, path, query and fragment
    /// components.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let url = Url::parse("foo://bar/baz?qux")?;
    /// assert_eq!(url.as_uri_ref().scheme().unwrap().as_str(), "foo");
    /// assert_eq!(url.as_uri_ref().query().unwrap().as_str(), "qux");
    /// # Ok::<_, surly::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_uri_ref(&self) -> &UriRef<String> {
        &self.uri
    }

    /// Consumes this `Url` and yields the raw text as a [`String`].
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let url = Url::parse("http://example.com")?;
    /// assert_eq!(url.into_string(), "http://example.com");
    /// # Ok::<_, surly::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.uri.into_string()
    }
}

impl Default for Url {
    /// Creates an empty `Url`.
    ///
    /// The empty string is a valid relative reference, so a
    /// default-constructed `Url` behaves like any other: it compares
    /// equal to `""` and encodes as empty text in every codec.
    #[inline]
    fn default() -> Self {
        Url {
            uri: UriRef::default(),
        }
    }
}

impl PartialEq<str> for Url {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<Url> for str {
    #[inline]
    fn eq(&self, other: &Url) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<&str> for Url {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Url> for &str {
    #[inline]
    fn eq(&self, other: &Url) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<String> for Url {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<Url> for String {
    #[inline]
    fn eq(&self, other: &Url) -> bool {
        self == other.as_str()
    }
}
