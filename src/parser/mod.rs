//! Lexical layer shared by the compiler and the variable query.
//!
//! The grammar itself lives in the compiler, which drives a [`Cursor`]
//! directly and emits bytecode while it descends; there is no token stream
//! and no AST.

mod cursor;

pub(crate) use cursor::Cursor;

/// Whether `source` mentions the variable as a standalone `x`/`X`.
///
/// The scan tokenises the text the same way the compiler does: a word that
/// starts with another letter swallows any `x` inside it (`exp`, `max`), and
/// numeric literals are skipped whole. Invalid input never fails; it simply
/// reports what the scan saw.
///
/// # Example
/// ```
/// use mathparse::uses_variable;
///
/// assert!(uses_variable("sin(2*X)"));
/// assert!(!uses_variable("exp(1)"));
/// ```
#[must_use]
pub fn uses_variable(source: &str) -> bool {
    let mut cursor = Cursor::new(source);
    while let Some(ch) = cursor.peek() {
        match ch {
            'x' | 'X' => return true,
            c if c.is_alphabetic() => {
                cursor.scan_word();
            }
            c if c.is_ascii_digit() || c == '.' => {
                // Only the extent matters here; malformed literals are the
                // compiler's concern.
                let _ = cursor.scan_number();
            }
            _ => cursor.bump(),
        }
    }
    false
}
