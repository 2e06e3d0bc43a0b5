//! Bytecode instruction definitions.
//!
//! A compiled program is a flat sequence of [`Instruction`]s in postfix
//! order. Operators read their operands from the evaluation stack, so the
//! order of the sequence is the order of evaluation.

use std::fmt;

/// Two-operand arithmetic. Pops `y`, then `x`, pushes `x op y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Apply the operator with plain IEEE-754 semantics.
    #[inline]
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div => x / y,
            BinaryOp::Pow => x.powf(y),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// One-operand operators: negation and the built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Cosec,
    Arcsin,
    Arccos,
    Arctan,
    Exp,
    Ln,
    Log10,
    Log2,
    Abs,
    Sqrt,
}

impl UnaryOp {
    /// Apply the operator, returning NaN when the argument is outside the
    /// function's domain.
    ///
    /// | op | guard |
    /// |----|-------|
    /// | `arcsin`, `arccos` | `|x| <= 1` |
    /// | `ln`, `log2`, `log10` | `x > 0` |
    /// | `sqrt` | `x >= 0` |
    ///
    /// `cot`, `sec` and `cosec` are unguarded: a zero denominator yields an
    /// infinity (or NaN) through ordinary division.
    #[inline]
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Negate => -x,
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Tan => x.tan(),
            UnaryOp::Cot => x.cos() / x.sin(),
            UnaryOp::Sec => 1.0 / x.cos(),
            UnaryOp::Cosec => 1.0 / x.sin(),
            UnaryOp::Arcsin if x.abs() <= 1.0 => x.asin(),
            UnaryOp::Arccos if x.abs() <= 1.0 => x.acos(),
            UnaryOp::Arctan => x.atan(),
            UnaryOp::Exp => x.exp(),
            UnaryOp::Ln if x > 0.0 => x.ln(),
            UnaryOp::Log10 if x > 0.0 => x.log10(),
            UnaryOp::Log2 if x > 0.0 => x.log2(),
            UnaryOp::Abs => x.abs(),
            UnaryOp::Sqrt if x >= 0.0 => x.sqrt(),
            UnaryOp::Arcsin
            | UnaryOp::Arccos
            | UnaryOp::Ln
            | UnaryOp::Log10
            | UnaryOp::Log2
            | UnaryOp::Sqrt => f64::NAN,
        }
    }

    /// Source-level name (`neg` for negation).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Negate => "neg",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Cot => "cot",
            UnaryOp::Sec => "sec",
            UnaryOp::Cosec => "cosec",
            UnaryOp::Arcsin => "arcsin",
            UnaryOp::Arccos => "arccos",
            UnaryOp::Arctan => "arctan",
            UnaryOp::Exp => "exp",
            UnaryOp::Ln => "ln",
            UnaryOp::Log10 => "log10",
            UnaryOp::Log2 => "log2",
            UnaryOp::Abs => "abs",
            UnaryOp::Sqrt => "sqrt",
        }
    }
}

/// A single step of a compiled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push `constants[index]`
    PushConst(usize),
    /// Push the value of `x`
    PushVariable,
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Instruction {
    /// Returns `(pops, pushes)` for this instruction.
    #[inline]
    #[must_use]
    pub const fn stack_effect(self) -> (usize, usize) {
        match self {
            Instruction::PushConst(_) | Instruction::PushVariable => (0, 1),
            Instruction::Binary(_) => (2, 1),
            Instruction::Unary(_) => (1, 1),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushConst(idx) => write!(f, "const#{idx}"),
            Instruction::PushVariable => write!(f, "x"),
            Instruction::Binary(op) => write!(f, "{}", op.symbol()),
            Instruction::Unary(op) => write!(f, "{}", op.name()),
        }
    }
}
