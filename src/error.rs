use std::fmt;
use thiserror::Error;

/// What went wrong while compiling an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Input validation
    #[error("no expression provided")]
    Empty,
    #[error("extra data found after the end of the expression")]
    TrailingInput,

    // Grouping
    #[error("expected right parenthesis")]
    ExpectedRightParen,
    #[error("unmatched right parenthesis")]
    UnmatchedRightParen,

    // Tokens
    #[error("operator '{0}' found in an unexpected position")]
    UnexpectedOperator(char),
    #[error("reached end of input in the middle of an expression")]
    UnexpectedEnd,
    #[error("illegal character '{0}' found in data")]
    IllegalCharacter(char),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    // Function calls
    #[error("function name '{0}' must be followed by its argument in parentheses")]
    MissingFunctionArgument(String),
    #[error("missing right parenthesis after argument of function '{0}'")]
    UnclosedFunctionArgument(String),

    // Numeric literals
    #[error("improper number consisting of a decimal point only")]
    DecimalPointOnly,
    #[error("number has no digits in its exponent")]
    MissingExponentDigits,
    #[error("illegal number '{0}'")]
    InvalidNumber(String),

    // Safety limits
    #[error("expression nesting exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { limit: usize },
}

/// A rejected expression: the failure kind plus the 0-based byte offset
/// into the source where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: ErrorKind,
    position: usize,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        SyntaxError { kind, position }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the source text.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Human-readable description, without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (position {})", self.kind, self.position)
    }
}

impl std::error::Error for SyntaxError {}
