/// The nesting limit used by [`parse`](crate::parse).
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsonvet::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions { max_depth: 2 };
/// assert!(parse_with_options("[[]]", options).is_ok());
/// assert!(parse_with_options("[[[]]]", options).is_err());
/// ```
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`] (20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The depth at which requesting another value fails with
    /// [`SyntaxError::MaxDepthExceeded`](crate::SyntaxError::MaxDepthExceeded).
    ///
    /// The top-level value is requested at depth 0 and each opened object or
    /// array parses its members one level deeper. A limit of `0` therefore
    /// rejects every document.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
