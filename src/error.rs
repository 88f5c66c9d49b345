use thiserror::Error;

/// An error returned when text fails URL syntax validation.
///
/// The error keeps the offending input and the grammar parser's
/// diagnostic; both appear in the [`Display`] output, and the diagnostic
/// is also reachable through [`Error::source`].
///
/// [`Display`]: core::fmt::Display
/// [`Error::source`]: std::error::Error::source
///
/// # Examples
///
/// ```
/// use surly::Url;
///
/// let e = Url::parse("[foul] http://example.com").unwrap_err();
/// assert_eq!(e.input(), "[foul] http://example.com");
/// assert!(e.to_string().starts_with("invalid URL"));
/// ```
#[derive(Debug, Error)]
#[error("invalid URL {input:?}: {source}")]
pub struct ParseError {
    pub(crate) input: String,
    pub(crate) source: fluent_uri::error::ParseError,
}

impl ParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consumes the error and recovers the input from it.
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }
}
