//! Decoding of four-digit `\uXXXX` string escapes.
//!
//! [`UnicodeEscapeBuffer`] accumulates ASCII hexadecimal digits (`0-9`,
//! `A-F`, `a-f`) and yields a [`char`] once exactly four have been fed, then
//! resets itself for the next escape.
//!
//! Surrogate pairs are not combined: each escape stands alone. A surrogate
//! half (`D800`..=`DFFF`) is not a Unicode scalar value, so it decodes to
//! U+FFFD REPLACEMENT CHARACTER instead of failing.

use crate::error::LexicalError;

const DIGITS: u8 = 4;

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    code: u32,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds one character of the escape.
    ///
    /// Returns `Ok(None)` while fewer than four digits have been seen and
    /// `Ok(Some(ch))` on the fourth, after which the buffer is empty again.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<char>, LexicalError> {
        let digit = c
            .to_digit(16)
            .ok_or(LexicalError::InvalidUnicodeEscape(c))?;

        self.code = (self.code << 4) | digit;
        self.len += 1;

        if self.len < DIGITS {
            return Ok(None);
        }

        let decoded = char::from_u32(self.code).unwrap_or(char::REPLACEMENT_CHARACTER);
        *self = Self::default();
        Ok(Some(decoded))
    }
}
