//! Built-in function definitions
//!
//! Each entry pairs a source-level name with the operator it compiles to and
//! a short description used by the shell's help text.

use crate::evaluator::UnaryOp;

/// A built-in function known to the parser.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDefinition {
    /// Canonical lower-case name (e.g., "sin", "log10")
    pub name: &'static str,
    /// Operator emitted for a call
    pub op: UnaryOp,
    /// One-line description
    pub description: &'static str,
}

pub(crate) static DEFINITIONS: [FunctionDefinition; 15] = [
    // Trigonometric (radians)
    FunctionDefinition {
        name: "sin",
        op: UnaryOp::Sin,
        description: "sine",
    },
    FunctionDefinition {
        name: "cos",
        op: UnaryOp::Cos,
        description: "cosine",
    },
    FunctionDefinition {
        name: "tan",
        op: UnaryOp::Tan,
        description: "tangent",
    },
    FunctionDefinition {
        name: "cot",
        op: UnaryOp::Cot,
        description: "cotangent, cos(x)/sin(x)",
    },
    FunctionDefinition {
        name: "sec",
        op: UnaryOp::Sec,
        description: "secant, 1/cos(x)",
    },
    FunctionDefinition {
        name: "cosec",
        op: UnaryOp::Cosec,
        description: "cosecant, 1/sin(x)",
    },
    // Inverse trigonometric
    FunctionDefinition {
        name: "arcsin",
        op: UnaryOp::Arcsin,
        description: "inverse sine, defined for |x| <= 1",
    },
    FunctionDefinition {
        name: "arccos",
        op: UnaryOp::Arccos,
        description: "inverse cosine, defined for |x| <= 1",
    },
    FunctionDefinition {
        name: "arctan",
        op: UnaryOp::Arctan,
        description: "inverse tangent",
    },
    // Exponential and logarithmic
    FunctionDefinition {
        name: "exp",
        op: UnaryOp::Exp,
        description: "e raised to x",
    },
    FunctionDefinition {
        name: "ln",
        op: UnaryOp::Ln,
        description: "natural logarithm, defined for x > 0",
    },
    FunctionDefinition {
        name: "log10",
        op: UnaryOp::Log10,
        description: "base-10 logarithm, defined for x > 0",
    },
    FunctionDefinition {
        name: "log2",
        op: UnaryOp::Log2,
        description: "base-2 logarithm, defined for x > 0",
    },
    // Other
    FunctionDefinition {
        name: "abs",
        op: UnaryOp::Abs,
        description: "absolute value",
    },
    FunctionDefinition {
        name: "sqrt",
        op: UnaryOp::Sqrt,
        description: "square root, defined for x >= 0",
    },
];
