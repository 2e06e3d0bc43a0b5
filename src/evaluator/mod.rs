//! Compiled expression evaluator.
//!
//! This module compiles expression text into flat bytecode and evaluates it
//! on a stack machine, without ever building a tree.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌────────────┐    ┌─────────────────────┐
//! │ source text │ -> │  Compiler  │ -> │   CompiledProgram   │
//! │  "sin(x)"   │    │ (Bytecode) │    │   (Stack Machine)   │
//! └─────────────┘    └────────────┘    └─────────────────────┘
//!                                              │
//!                          ┌───────────────────┼───────────────────┐
//!                          ▼                   ▼                   ▼
//!                    ┌──────────┐       ┌──────────┐       ┌──────────┐
//!                    │ evaluate │       │  batch   │       │ parallel │
//!                    │ (scalar) │       │ (reuse)  │       │  (Rayon) │
//!                    └──────────┘       └──────────┘       └──────────┘
//! ```
//!
//! # Failure Model
//!
//! Compilation either succeeds or returns a [`SyntaxError`](crate::SyntaxError).
//! Evaluation never fails: every numeric problem (domain violation, division
//! by zero, overflow) comes back as `NaN`.
//!
//! # Example
//!
//! ```
//! use mathparse::compile;
//!
//! let program = compile("sin(x) * cos(x) + x^2").expect("Should compile");
//! let result = program.evaluate(0.5);
//! assert!((result - (0.5_f64.sin() * 0.5_f64.cos() + 0.25)).abs() < 1e-10);
//! ```

mod batch;
mod compiler;
mod execution;
mod instruction;

#[cfg(test)]
mod tests;

pub(crate) use compiler::Compiler;
pub use compiler::required_stack_depth;
pub use instruction::{BinaryOp, Instruction, UnaryOp};

use std::fmt;

/// Compiled expression - immutable, reusable, thread-safe.
///
/// Holds the instruction stream, its constant pool and the exact stack depth
/// evaluation needs. Nothing in it changes after compilation, so one program
/// can be evaluated for many values of `x`, from many threads at once; each
/// evaluation owns its own stack.
#[derive(Clone)]
pub struct CompiledProgram {
    /// Bytecode instructions in postfix order
    instructions: Box<[Instruction]>,
    /// Constant pool for numeric literals
    constants: Box<[f64]>,
    /// Maximum number of simultaneous stack values
    stack_size: usize,
    /// Text the program was compiled from
    source: Box<str>,
}

impl CompiledProgram {
    pub(crate) fn new(source: &str, instructions: Vec<Instruction>, constants: Vec<f64>) -> Self {
        let stack_size = required_stack_depth(&instructions);
        Self {
            instructions: instructions.into_boxed_slice(),
            constants: constants.into_boxed_slice(),
            stack_size,
            source: source.into(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the instruction stream.
    #[inline]
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the constant pool.
    #[inline]
    #[must_use]
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// Get the required stack size for this program.
    #[inline]
    #[must_use]
    pub const fn required_stack_depth(&self) -> usize {
        self.stack_size
    }

    /// Get the expression text the program was compiled from.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether evaluation reads the variable at all.
    #[must_use]
    pub fn uses_variable(&self) -> bool {
        self.instructions.contains(&Instruction::PushVariable)
    }

    /// Get number of bytecode instructions (for debugging/profiling).
    #[inline]
    #[must_use]
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }
}

impl fmt::Debug for CompiledProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledProgram")
            .field("source", &self.source)
            .field("instruction_count", &self.instructions.len())
            .field("constant_count", &self.constants.len())
            .field("stack_size", &self.stack_size)
            .finish()
    }
}

/// Reverse-Polish listing with constants inlined, e.g. `2 x * sin`.
impl fmt::Display for CompiledProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match instr {
                Instruction::PushConst(idx) => write!(f, "{}", self.constants[*idx])?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
