use core::{borrow::Borrow, str::FromStr};

use fluent_uri::UriRef;

use crate::{ParseError, Url};

impl FromStr for Url {
    type Err = ParseError;

    /// Parses a `Url` from generic text.
    ///
    /// Unlike [`Url::parse`], leading and trailing whitespace is trimmed
    /// before validation, so that values read from configuration files,
    /// environment variables or command-line flags tolerate incidental
    /// padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly::Url;
    ///
    /// let url: Url = " http://example.com\n".parse()?;
    /// assert_eq!(url, "http://example.com");
    /// # Ok::<_, surly::ParseError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s.trim())
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    /// Equivalent to [`parse`](Url::parse).
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
    }
}

impl TryFrom<String> for Url {
    type Error = ParseError;

    /// Equivalent to [`parse`](Url::parse), reusing the allocation.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match UriRef::parse(value) {
            Ok(uri) => Ok(Url { uri }),
            Err(e) => {
                let source = e.strip_input();
                Err(ParseError {
                    input: e.into_input(),
                    source,
                })
            }
        }
    }
}

impl From<Url> for String {
    /// Equivalent to [`into_string`](Url::into_string).
    #[inline]
    fn from(value: Url) -> Self {
        value.into_string()
    }
}

impl AsRef<str> for Url {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Url {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
