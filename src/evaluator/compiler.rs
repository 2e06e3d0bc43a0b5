//! Expression compiler for the bytecode evaluator.
//!
//! This module turns source text directly into bytecode ([`Instruction`]s)
//! that can be executed by the [`CompiledProgram`](super::CompiledProgram).
//!
//! # Grammar
//!
//! ```text
//! expression := ['+'|'-'] term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := primary ('^' primary)*
//! primary    := 'x' | FUNCTION '(' expression ')' | NUMBER | '(' expression ')'
//! ```
//!
//! Each rule emits its operator after its operands have been emitted, so the
//! instruction stream comes out in postfix order with no intermediate tree.
//! Two consequences of the grammar are deliberate:
//!
//! - `^` chains left to right: `2^3^2` is `(2^3)^2`.
//! - A leading sign applies to the whole first term: `-2^2` is `-(2^2)`.
//!
//! # Stack Depth
//!
//! After emission, [`required_stack_depth`] scans the finished program once
//! to find the exact number of stack slots evaluation needs.

use super::instruction::{BinaryOp, Instruction, UnaryOp};
use crate::error::{ErrorKind, SyntaxError};
use crate::functions;
use crate::parser::Cursor;

/// Internal compiler state for one compile call.
///
/// Owns the read cursor and the growing instruction stream and constant pool.
/// Consumed by [`Compiler::compile`].
pub(crate) struct Compiler<'src> {
    cursor: Cursor<'src>,
    /// Emitted bytecode instructions
    instructions: Vec<Instruction>,
    /// Constant pool, one entry per literal occurrence
    constants: Vec<f64>,
    /// Current parenthesis/call nesting
    depth: usize,
    /// Nesting limit
    max_depth: usize,
}

impl<'src> Compiler<'src> {
    pub(crate) fn new(source: &'src str, max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(source),
            instructions: Vec::with_capacity(source.len()),
            constants: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole source and return `(instructions, constants)`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyntaxError`] encountered; nothing is recovered.
    pub(crate) fn compile(mut self) -> Result<(Vec<Instruction>, Vec<f64>), SyntaxError> {
        self.cursor.skip_whitespace();
        if self.cursor.at_end() {
            return Err(SyntaxError::new(ErrorKind::Empty, 0));
        }

        self.parse_expression()?;

        self.cursor.skip_whitespace();
        if !self.cursor.at_end() {
            return Err(self.cursor.error(ErrorKind::TrailingInput));
        }

        Ok((self.instructions, self.constants))
    }

    #[inline]
    fn emit(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    /// Append a literal to the pool. No deduplication: every occurrence
    /// gets its own slot.
    #[inline]
    fn add_const(&mut self, value: f64) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    /// Enter a parenthesised sub-expression opened at `open`.
    fn enter(&mut self, open: usize) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::new(
                ErrorKind::MaxDepthExceeded {
                    limit: self.max_depth,
                },
                open,
            ));
        }
        Ok(())
    }

    #[inline]
    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.cursor.skip_whitespace();
        let negate = match self.cursor.peek() {
            Some(sign @ ('+' | '-')) => {
                self.cursor.bump();
                self.cursor.skip_whitespace();
                sign == '-'
            }
            _ => false,
        };

        self.parse_term()?;
        if negate {
            self.emit(Instruction::Unary(UnaryOp::Negate));
        }

        self.cursor.skip_whitespace();
        while let Some(op @ ('+' | '-')) = self.cursor.peek() {
            self.cursor.bump();
            self.parse_term()?;
            self.emit(Instruction::Binary(if op == '+' {
                BinaryOp::Add
            } else {
                BinaryOp::Sub
            }));
            self.cursor.skip_whitespace();
        }
        Ok(())
    }

    fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.parse_factor()?;
        self.cursor.skip_whitespace();
        while let Some(op @ ('*' | '/')) = self.cursor.peek() {
            self.cursor.bump();
            self.parse_factor()?;
            self.emit(Instruction::Binary(if op == '*' {
                BinaryOp::Mul
            } else {
                BinaryOp::Div
            }));
            self.cursor.skip_whitespace();
        }
        Ok(())
    }

    fn parse_factor(&mut self) -> Result<(), SyntaxError> {
        self.parse_primary()?;
        self.cursor.skip_whitespace();
        while self.cursor.eat('^') {
            self.parse_primary()?;
            self.emit(Instruction::Binary(BinaryOp::Pow));
            self.cursor.skip_whitespace();
        }
        Ok(())
    }

    fn parse_primary(&mut self) -> Result<(), SyntaxError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('x' | 'X') => {
                self.cursor.bump();
                self.emit(Instruction::PushVariable);
                Ok(())
            }
            Some(c) if c.is_alphabetic() => self.parse_call(),
            Some(c) if c.is_ascii_digit() || c == '.' => {
                let value = self.cursor.scan_number()?;
                let idx = self.add_const(value);
                self.emit(Instruction::PushConst(idx));
                Ok(())
            }
            Some('(') => {
                self.enter(self.cursor.position())?;
                self.cursor.bump();
                self.parse_expression()?;
                self.cursor.skip_whitespace();
                if !self.cursor.eat(')') {
                    return Err(self.cursor.error(ErrorKind::ExpectedRightParen));
                }
                self.leave();
                Ok(())
            }
            Some(')') => Err(self.cursor.error(ErrorKind::UnmatchedRightParen)),
            Some(op @ ('+' | '-' | '*' | '/' | '^')) => {
                Err(self.cursor.error(ErrorKind::UnexpectedOperator(op)))
            }
            Some(c) => Err(self.cursor.error(ErrorKind::IllegalCharacter(c))),
            None => Err(self.cursor.error(ErrorKind::UnexpectedEnd)),
        }
    }

    /// `FUNCTION '(' expression ')'`, cursor on the first letter.
    fn parse_call(&mut self) -> Result<(), SyntaxError> {
        let name = self.cursor.scan_word().to_lowercase();
        let Some(op) = functions::lookup(&name) else {
            return Err(self.cursor.error(ErrorKind::UnknownIdentifier(name)));
        };

        self.cursor.skip_whitespace();
        if self.cursor.peek() != Some('(') {
            return Err(self.cursor.error(ErrorKind::MissingFunctionArgument(name)));
        }
        self.enter(self.cursor.position())?;
        self.cursor.bump();

        self.parse_expression()?;
        self.cursor.skip_whitespace();
        if !self.cursor.eat(')') {
            return Err(self.cursor.error(ErrorKind::UnclosedFunctionArgument(name)));
        }
        self.leave();

        self.emit(Instruction::Unary(op));
        Ok(())
    }
}

/// Maximum number of values simultaneously on the stack while running
/// `instructions`.
///
/// A single pass: pushes add one, binary operators net minus one, unary
/// operators leave the depth unchanged.
#[must_use]
pub fn required_stack_depth(instructions: &[Instruction]) -> usize {
    let mut current = 0_usize;
    let mut max = 0_usize;
    for instr in instructions {
        let (pops, pushes) = instr.stack_effect();
        current = current.saturating_sub(pops) + pushes;
        max = max.max(current);
    }
    max
}
