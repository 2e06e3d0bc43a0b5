use crate::error::{ErrorKind, SyntaxError};

/// Read position over the source text.
///
/// `position` is a byte offset, so it always lands on a `char` boundary and
/// can be reported directly in errors.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Next unread character, or `None` at end of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Step over the next character. No-op at end of input.
    #[inline]
    pub(crate) fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }

    /// Consume `expected` if it is next.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Consume a run of letters and digits.
    pub(crate) fn scan_word(&mut self) -> &'a str {
        let start = self.position;
        self.bump_while(char::is_alphanumeric);
        &self.source[start..self.position]
    }

    /// Consume a numeric literal and convert it.
    ///
    /// Grammar: `digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`, where the
    /// leading digits may be empty if a decimal point follows.
    pub(crate) fn scan_number(&mut self) -> Result<f64, SyntaxError> {
        let start = self.position;

        self.bump_while(|c| c.is_ascii_digit());
        if self.eat('.') {
            self.bump_while(|c| c.is_ascii_digit());
        }
        if &self.source[start..self.position] == "." {
            return Err(self.error(ErrorKind::DecimalPointOnly));
        }

        if self.eat('e') || self.eat('E') {
            if !self.eat('+') {
                self.eat('-');
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error(ErrorKind::MissingExponentDigits));
            }
            self.bump_while(|c| c.is_ascii_digit());
        }

        let text = &self.source[start..self.position];
        match text.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(self.error(ErrorKind::InvalidNumber(text.to_owned()))),
        }
    }

    /// Build an error located at the current position.
    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(src: &str) -> Result<(f64, usize), SyntaxError> {
        let mut cursor = Cursor::new(src);
        let value = cursor.scan_number()?;
        Ok((value, cursor.position()))
    }

    #[test]
    fn test_scan_integer_and_decimal() {
        assert_eq!(number("42"), Ok((42.0, 2)));
        assert_eq!(number("3.5+x"), Ok((3.5, 3)));
        assert_eq!(number(".25"), Ok((0.25, 3)));
        assert_eq!(number("7."), Ok((7.0, 2)));
    }

    #[test]
    fn test_scan_exponent() {
        assert_eq!(number("45.3e-13"), Ok((45.3e-13, 8)));
        assert_eq!(number("1E+3"), Ok((1000.0, 4)));
        assert_eq!(number("2e2*x"), Ok((200.0, 3)));
    }

    #[test]
    fn test_decimal_point_only() {
        let err = number(".").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::DecimalPointOnly);
        assert_eq!(err.position(), 1);

        let err = number(".e5").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::DecimalPointOnly);
    }

    #[test]
    fn test_missing_exponent_digits() {
        let err = number("1e").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingExponentDigits);
        assert_eq!(err.position(), 2);

        let err = number("1e+x").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingExponentDigits);
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_out_of_range_literal_is_infinite() {
        let (value, _) = number("1e999").unwrap();
        assert!(value.is_infinite());
    }

    #[test]
    fn test_scan_word_stops_at_non_alphanumeric() {
        let mut cursor = Cursor::new("log10(x)");
        assert_eq!(cursor.scan_word(), "log10");
        assert_eq!(cursor.peek(), Some('('));
    }

    #[test]
    fn test_skip_whitespace_and_multibyte() {
        let mut cursor = Cursor::new(" \t\u{3000}é");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('é'));
        cursor.bump();
        assert!(cursor.at_end());
        assert_eq!(cursor.position(), " \t\u{3000}é".len());
    }
}
