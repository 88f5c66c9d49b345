//! Reference resolution.

use fluent_uri::Uri;

use crate::Url;

impl Url {
    /// Resolves `reference` against `self` and returns the target URL.
    ///
    /// This is the reference resolution algorithm from [Section 5 of
    /// RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5),
    /// with the structural merge and the `remove_dot_segments` work
    /// delegated to [`fluent_uri`]:
    ///
    /// - If `reference` has a scheme, the result is `reference` itself,
    ///   textually unchanged.
    /// - If `reference` is empty or fragment-only, the result is `self`
    ///   with `reference`'s fragment substituted, if any; resolving the
    ///   empty reference returns `self` exactly.
    /// - Otherwise the authority, path and query are merged per the RFC,
    ///   with dot segments removed from the merged path. A fragment on
    ///   `self` is ignored, as the RFC prescribes.
    ///
    /// The operation is total: it never fails and never mutates its
    /// operands. When `self` is no usable base for a relative reference
    /// (it has no scheme of its own, or it is an opaque URI like
    /// `foo:bar` that a rootless path cannot merge into), the reference
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let base = Url::parse("http://example.com/foo/bar")?;
    ///
    /// assert_eq!(base.resolve_reference(&Url::parse("baz")?), "http://example.com/foo/baz");
    /// assert_eq!(base.resolve_reference(&Url::parse("../baz")?), "http://example.com/baz");
    /// assert_eq!(base.resolve_reference(&Url::parse("?baz")?), "http://example.com/foo/bar?baz");
    /// assert_eq!(base.resolve_reference(&Url::parse("")?), "http://example.com/foo/bar");
    /// # Ok::<_, surly::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve_reference(&self, reference: &Url) -> Url {
        if reference.uri.has_scheme() {
            return reference.clone();
        }
        // A schemeless reference that is empty or starts with '#' has no
        // authority, path or query to merge.
        if matches!(reference.uri.as_str().bytes().next(), None | Some(b'#')) {
            return match reference.uri.fragment() {
                Some(fragment) => Url {
                    uri: self.uri.with_fragment(Some(fragment)),
                },
                None => self.clone(),
            };
        }
        let stripped;
        let base = if self.uri.has_fragment() {
            stripped = self.uri.with_fragment(None);
            &stripped
        } else {
            &self.uri
        };
        match Uri::try_from(base.borrow()) {
            Ok(base) => match reference.uri.resolve_against(&base) {
                Ok(target) => Url { uri: target.into() },
                Err(_) => reference.clone(),
            },
            Err(_) => reference.clone(),
        }
    }
}
