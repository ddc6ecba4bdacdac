//! A strict, validating JSON parser.
//!
//! Text goes through a [`Lexer`] that produces [`Token`]s on demand, and a
//! recursive-descent [`Parser`] that shapes them into a [`Value`] tree. The
//! first problem found ends the parse with an [`Error`] that is either lexical
//! or syntactic and carries the line and column where it happened.
//!
//! The accepted language is a deliberately narrow JSON:
//! - the document must be a single object or array, never a bare scalar;
//! - numbers follow the strict grammar (no leading zeros, no bare `.`) and are
//!   kept as [`Value::Int`] or [`Value::Float`] according to their spelling;
//! - nesting is bounded by [`ParserOptions::max_depth`];
//! - nothing but whitespace may follow the document.
//!
//! ```rust
//! use jsonvet::{SyntaxError, Value};
//!
//! let value = jsonvet::parse(r#"{"name": "jsonvet", "tags": ["strict", 1]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("jsonvet"));
//!
//! let err = jsonvet::parse("42").unwrap_err();
//! assert!(matches!(err.kind(), jsonvet::ErrorKind::Syntax(SyntaxError::TopLevelScalar(_))));
//! assert_eq!(err.to_string(), "a JSON payload should be an object or array, not a NUMBER at 1:1");
//! ```

mod error;
mod escape;
mod lexer;
mod number;
mod options;
mod parser;
mod token;
mod value;

#[cfg(test)]
mod tests;

use core::str::FromStr;

pub use error::{Container, Error, ErrorKind, LexicalError, SyntaxError};
pub use lexer::Lexer;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::Parser;
pub use token::{Position, Token, TokenKind};
pub use value::{Array, Map, Value};

/// Parses `text` with the default options.
///
/// # Errors
///
/// Returns the first lexical or syntax error in `text`.
pub fn parse(text: &str) -> Result<Value, Error> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses `text`, failing once nesting reaches `options.max_depth`.
///
/// # Errors
///
/// Returns the first lexical or syntax error in `text`.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, Error> {
    tracing::trace!(len = text.len(), max_depth = options.max_depth, "parsing");
    let result = Parser::new(text, options).and_then(Parser::parse);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "rejected");
    }
    result
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
