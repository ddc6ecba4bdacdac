use crate::error::LexicalError;
use crate::value::Value;

/// Lexical hint that keeps integers and floats apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

impl<'a> NumberLexeme<'a> {
    pub(crate) fn classify(text: &'a str) -> Self {
        if text.contains(['.', 'e', 'E']) {
            NumberLexeme::Float(text)
        } else {
            NumberLexeme::Integer(text)
        }
    }

    /// Converts the lexeme into a [`Value`].
    ///
    /// The lexer's grammar guarantees the text is well formed, so the only
    /// failure in practice is an integer outside the `i64` range.
    pub(crate) fn to_value(self) -> Result<Value, LexicalError> {
        match self {
            NumberLexeme::Integer(text) => text.parse::<i64>().map(Value::Int).map_err(|_| {
                LexicalError::MalformedNumber(format!("{text} does not fit in a 64-bit integer"))
            }),
            NumberLexeme::Float(text) => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| {
                    LexicalError::MalformedNumber(format!("cannot read {text} as a float"))
                }),
        }
    }
}
