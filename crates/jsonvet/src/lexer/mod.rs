//! Lexer: pull-based tokenizer over a borrowed input string.
//!
//! The lexer walks the text one character at a time, keeping the cursor
//! (byte offset), the character under it and its line/column. It never
//! rewinds. Each call to [`Lexer::next_token`] skips JSON whitespace and
//! produces exactly one [`Token`]; at the end of input it keeps returning
//! [`Token::Eof`].
//!
//! Grammar notes
//! - Strings decode `\" \\ \/ \b \f \n \r \t` and `\uXXXX`. Raw control
//!   characters between the quotes are accepted as they are.
//! - Numbers follow the strict JSON grammar and are returned as raw text; the
//!   parser decides between integer and float.
//! - `true`, `false` and `null` are matched by lookahead on the exact word.
//!   Nothing checks what follows, so `truex` lexes as `TRUE` and then fails
//!   on `x`.

use crate::{
    error::{Error, LexicalError},
    escape::UnicodeEscapeBuffer,
    token::{Position, Token},
};


const LITERALS: [(&str, Token); 3] = [
    ("true", Token::True),
    ("false", Token::False),
    ("null", Token::Null),
];

/// A tokenizer over JSON text.
///
/// # Examples
///
/// ```rust
/// use jsonvet::{Lexer, Token};
///
/// let mut lexer = Lexer::new(r#"{"n": -1.5e3}"#);
/// assert_eq!(lexer.next_token().unwrap(), Token::LBrace);
/// assert_eq!(lexer.next_token().unwrap(), Token::String("n".into()));
/// assert_eq!(lexer.next_token().unwrap(), Token::Colon);
/// assert_eq!(lexer.next_token().unwrap(), Token::Number("-1.5e3".into()));
/// assert_eq!(lexer.next_token().unwrap(), Token::RBrace);
/// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
/// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
/// ```
///
/// The lexer is also an [`Iterator`] over every token before `EOF`. Iteration
/// stops after the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    current: Option<char>,
    line: usize,
    column: usize,
    token_start: Position,
    /// First lexical error; replayed on every later call.
    failed: Option<Error>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            current: source.chars().next(),
            line: 1,
            column: 1,
            token_start: Position::START,
            failed: None,
            exhausted: false,
        }
    }

    /// Where the most recently returned token (or failed token) began.
    #[must_use]
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    /// The position of the character under the cursor.
    #[must_use]
    pub fn cursor(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Produces the next token.
    ///
    /// # Errors
    ///
    /// Returns a lexical [`Error`] when the text at the cursor is not a valid
    /// token. Errors are sticky: every later call returns the same error.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        let result = self.lex();
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    fn lex(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        self.token_start = self.cursor();

        let Some(c) = self.current else {
            return Ok(Token::Eof);
        };

        let token = match c {
            '{' => self.single(Token::LBrace),
            '}' => self.single(Token::RBrace),
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            ':' => self.single(Token::Colon),
            ',' => self.single(Token::Comma),
            '"' => {
                self.advance();
                self.string()?
            }
            '-' | '0'..='9' => self.number()?,
            _ => self
                .literal()
                .ok_or_else(|| self.error(LexicalError::UnexpectedCharacter(c)))?,
        };

        tracing::trace!(kind = %token.kind(), at = %self.token_start, "token");
        Ok(token)
    }

    fn advance(&mut self) {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.current = self.source[self.pos..].chars().next();
    }

    fn error(&self, kind: LexicalError) -> Error {
        Error::new(kind, self.cursor())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Reads the rest of a string whose opening quote was consumed.
    fn string(&mut self) -> Result<Token, Error> {
        let mut out = String::new();
        loop {
            let Some(c) = self.current else {
                return Err(self.error(LexicalError::UnterminatedString));
            };
            self.advance();
            match c {
                '"' => return Ok(Token::String(out)),
                '\\' => out.push(self.escape()?),
                _ => out.push(c),
            }
        }
    }

    /// Decodes the escape whose backslash was consumed.
    fn escape(&mut self) -> Result<char, Error> {
        let Some(c) = self.current else {
            return Err(self.error(LexicalError::UnterminatedString));
        };
        let at = self.cursor();
        self.advance();
        let decoded = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.unicode_escape(),
            other => return Err(Error::new(LexicalError::InvalidEscape(other), at)),
        };
        Ok(decoded)
    }

    fn unicode_escape(&mut self) -> Result<char, Error> {
        let mut buf = UnicodeEscapeBuffer::new();
        loop {
            let Some(c) = self.current else {
                return Err(self.error(LexicalError::UnterminatedString));
            };
            let decoded = buf.feed(c).map_err(|e| self.error(e))?;
            self.advance();
            if let Some(ch) = decoded {
                return Ok(ch);
            }
        }
    }

    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn number(&mut self) -> Result<Token, Error> {
        let start = self.pos;

        if self.current == Some('-') {
            self.advance();
        }

        match self.current {
            Some('0') => {
                self.advance();
                if self.at_digit() {
                    return Err(self.error(LexicalError::LeadingZero));
                }
            }
            Some('1'..='9') => self.skip_digits(),
            _ => return Err(self.malformed("expected digit after '-'")),
        }

        if self.current == Some('.') {
            self.advance();
            self.require_digits("expected digit after '.'")?;
        }

        if matches!(self.current, Some('e' | 'E')) {
            self.advance();
            if matches!(self.current, Some('+' | '-')) {
                self.advance();
            }
            self.require_digits("expected digit in exponent")?;
        }

        Ok(Token::Number(self.source[start..self.pos].to_owned()))
    }

    fn at_digit(&self) -> bool {
        self.current.is_some_and(|c| c.is_ascii_digit())
    }

    fn skip_digits(&mut self) {
        while self.at_digit() {
            self.advance();
        }
    }

    fn require_digits(&mut self, reason: &str) -> Result<(), Error> {
        if !self.at_digit() {
            return Err(self.malformed(reason));
        }
        self.skip_digits();
        Ok(())
    }

    fn malformed(&self, reason: &str) -> Error {
        self.error(LexicalError::MalformedNumber(reason.to_owned()))
    }

    fn literal(&mut self) -> Option<Token> {
        let rest = &self.source[self.pos..];
        let (word, token) = LITERALS
            .into_iter()
            .find(|(word, _)| rest.starts_with(*word))?;
        for _ in 0..word.len() {
            self.advance();
        }
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.exhausted = true;
                None
            }
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
            ok => Some(ok),
        }
    }
}
