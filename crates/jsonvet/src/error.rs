use core::fmt;

use thiserror::Error;

use crate::token::{Position, TokenKind};

/// The error returned when text cannot be lexed or parsed.
///
/// Every error is terminal: the first problem found aborts the parse and no
/// partial value is produced. The [`Display`](fmt::Display) output is the
/// message followed by the source position, e.g. `Nesting too deep at 1:9`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct Error {
    kind: ErrorKind,
    /// 1-based line of the offending token or character.
    pub line: usize,
    /// 1-based column of the offending token or character.
    pub column: usize,
}

impl Error {
    pub(crate) fn new(kind: impl Into<ErrorKind>, position: Position) -> Self {
        Self {
            kind: kind.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Where it went wrong.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// The descriptive message without the position suffix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns `true` for errors raised while tokenizing.
    #[must_use]
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lexical(_))
    }

    /// Returns `true` for errors raised while shaping tokens into a value.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax(_))
    }
}

/// The two disjoint error families.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text is not made of valid JSON tokens.
    #[error("{0}")]
    Lexical(#[from] LexicalError),
    /// The tokens are valid but do not form an accepted document.
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
}

/// Errors raised by the [`Lexer`](crate::Lexer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// Input ended before the closing quote of a string.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A backslash was followed by a character that is not a JSON escape.
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\u` escape contained a character that is not a hex digit.
    #[error("Invalid unicode escape character '{0}'")]
    InvalidUnicodeEscape(char),
    /// A character that cannot start any token.
    #[error("Unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    /// A number with a redundant leading zero, such as `01`.
    #[error("Leading zeros are not allowed in numbers")]
    LeadingZero,
    /// A number missing required digits, or one that cannot be represented.
    #[error("Invalid number format: {0}")]
    MalformedNumber(String),
}

/// Errors raised by the [`Parser`](crate::Parser).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The document does not start with `{` or `[`.
    #[error("a JSON payload should be an object or array, not a {0}")]
    TopLevelScalar(TokenKind),
    /// A token that cannot start a value.
    #[error("Unexpected token {0}")]
    UnexpectedToken(TokenKind),
    /// A specific token was required but another one was found.
    #[error("Expected token {expected} but got {found}")]
    ExpectedToken {
        /// The token the grammar requires here.
        expected: TokenKind,
        /// The token actually present.
        found: TokenKind,
    },
    /// An object member name that is not a string.
    #[error("Object keys must be strings, not {0}")]
    NonStringKey(TokenKind),
    /// A container element was followed by something other than `,` or the
    /// closing delimiter.
    #[error("Expected ',' or '{close}' in {0}", close = .0.closing_char())]
    MissingSeparator(Container),
    /// Tokens remain after the top-level value.
    #[error("Extra data after valid JSON")]
    TrailingData,
    /// A value was requested at or beyond the configured maximum depth.
    #[error("Nesting too deep")]
    MaxDepthExceeded,
}

/// The container in which a [`SyntaxError::MissingSeparator`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// A `{ ... }` object.
    Object,
    /// A `[ ... ]` array.
    Array,
}

impl Container {
    /// The delimiter that closes this container.
    #[must_use]
    pub fn closing_char(self) -> char {
        match self {
            Container::Object => '}',
            Container::Array => ']',
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Container::Object => "object",
            Container::Array => "array",
        })
    }
}
