//! Recursive-descent parser.
//!
//! Each grammar production is a method: [`Parser::parse`] for the document,
//! then `value`, `object` and `array`. The parser owns its [`Lexer`] and holds
//! at most one token of lookahead. A consumed token is replaced lazily, on the
//! next peek, so nothing past the closing delimiter of the top-level value is
//! read until the trailing-data check asks for it.
//!
//! Depth accounting
//! - `value(depth)` refuses to start when `depth >= max_depth`, before it
//!   dispatches on the token. The error points at that token.
//! - Opening `{` or `[` parses the container at `depth + 1`; members of both
//!   objects and arrays are then requested at that same depth.
//!
//! Depth is passed down the call chain, never stored, so sibling subtrees
//! cannot observe each other's depth.

use crate::{
    error::{Container, Error, SyntaxError},
    lexer::Lexer,
    number::NumberLexeme,
    options::ParserOptions,
    token::{Position, Token, TokenKind},
    value::{Array, Map, Value},
};


/// A single-use parser over one input string.
///
/// Most callers want [`parse`](crate::parse) or
/// [`parse_with_options`](crate::parse_with_options), which construct and
/// consume a `Parser` in one step.
///
/// ```rust
/// use jsonvet::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new("[true, null]", ParserOptions::default()).unwrap();
/// assert_eq!(parser.parse().unwrap(), Value::Array(vec![Value::Bool(true), Value::Null]));
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// `None` between consuming a token and the next peek.
    current: Option<Token>,
    /// Start of `current`, or of the last consumed token while `current` is
    /// empty.
    position: Position,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    ///
    /// Fails if the first token is not lexically valid.
    pub fn new(source: &'src str, options: ParserOptions) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let position = lexer.token_start();
        Ok(Self {
            lexer,
            current: Some(current),
            position,
            max_depth: options.max_depth,
        })
    }

    /// Parses the whole input as one object or array.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error encountered. In particular
    /// a document whose first token is not `{` or `[` fails with
    /// [`SyntaxError::TopLevelScalar`], and anything but whitespace after the
    /// top-level value fails with [`SyntaxError::TrailingData`], whether or
    /// not it would lex.
    pub fn parse(mut self) -> Result<Value, Error> {
        match self.peek()? {
            TokenKind::LBrace | TokenKind::LBracket => {}
            kind => return Err(self.error(SyntaxError::TopLevelScalar(kind))),
        }

        let value = self.value(0)?;

        match self.lexer.next_token() {
            Ok(Token::Eof) => Ok(value),
            Ok(_) | Err(_) => Err(Error::new(SyntaxError::TrailingData, self.lexer.token_start())),
        }
    }

    fn error(&self, kind: SyntaxError) -> Error {
        Error::new(kind, self.position)
    }

    /// Kind of the lookahead token, reading it first if needed.
    fn peek(&mut self) -> Result<TokenKind, Error> {
        if let Some(token) = &self.current {
            return Ok(token.kind());
        }
        let token = self.lexer.next_token()?;
        self.position = self.lexer.token_start();
        let kind = token.kind();
        self.current = Some(token);
        Ok(kind)
    }

    /// Consumes the lookahead token.
    fn bump(&mut self) -> Result<Token, Error> {
        self.peek()?;
        Ok(self.current.take().unwrap_or(Token::Eof))
    }

    fn eat(&mut self, kind: TokenKind) -> Result<Token, Error> {
        let found = self.peek()?;
        if found == kind {
            self.bump()
        } else {
            Err(self.error(SyntaxError::ExpectedToken {
                expected: kind,
                found,
            }))
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value, Error> {
        if depth >= self.max_depth {
            // Point at the refused value if it lexes; the depth error stands either way.
            let _ = self.peek();
            tracing::debug!(
                depth,
                max_depth = self.max_depth,
                at = %self.position,
                "nesting limit reached"
            );
            return Err(self.error(SyntaxError::MaxDepthExceeded));
        }

        match self.peek()? {
            TokenKind::LBrace => self.object(depth + 1),
            TokenKind::LBracket => self.array(depth + 1),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => self.scalar(),
            kind => Err(self.error(SyntaxError::UnexpectedToken(kind))),
        }
    }

    fn scalar(&mut self) -> Result<Value, Error> {
        let position = self.position;
        let value = match self.bump()? {
            Token::String(text) => Value::String(text),
            Token::Number(text) => NumberLexeme::classify(&text)
                .to_value()
                .map_err(|e| Error::new(e, position))?,
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Null => Value::Null,
            other => {
                return Err(Error::new(
                    SyntaxError::UnexpectedToken(other.kind()),
                    position,
                ));
            }
        };
        Ok(value)
    }

    fn object(&mut self, depth: usize) -> Result<Value, Error> {
        self.eat(TokenKind::LBrace)?;
        let mut map = Map::new();

        if self.peek()? == TokenKind::RBrace {
            self.bump()?;
            return Ok(Value::Object(map));
        }

        loop {
            let key = self.key()?;
            self.eat(TokenKind::Colon)?;
            let value = self.value(depth)?;
            // Repeated keys keep their first slot and take the latest value.
            map.insert(key, value);

            match self.peek()? {
                TokenKind::Comma => {
                    self.bump()?;
                }
                TokenKind::RBrace => {
                    self.bump()?;
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.error(SyntaxError::MissingSeparator(Container::Object))),
            }
        }
    }

    fn key(&mut self) -> Result<String, Error> {
        let kind = self.peek()?;
        if kind != TokenKind::String {
            return Err(self.error(SyntaxError::NonStringKey(kind)));
        }
        match self.bump()? {
            Token::String(key) => Ok(key),
            other => Err(self.error(SyntaxError::NonStringKey(other.kind()))),
        }
    }

    fn array(&mut self, depth: usize) -> Result<Value, Error> {
        self.eat(TokenKind::LBracket)?;
        let mut items = Array::new();

        if self.peek()? == TokenKind::RBracket {
            self.bump()?;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.value(depth)?);

            match self.peek()? {
                TokenKind::Comma => {
                    self.bump()?;
                }
                TokenKind::RBracket => {
                    self.bump()?;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.error(SyntaxError::MissingSeparator(Container::Array))),
            }
        }
    }
}
