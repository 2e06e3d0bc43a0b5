//! Builder pattern API for compilation
//!
//! Provides a fluent interface for configuring and running the compiler.
//!
//! # Example
//! ```
//! use mathparse::Compile;
//!
//! let program = Compile::new()
//!     .max_depth(32)
//!     .compile_str("sqrt(abs(x))")
//!     .expect("Should compile");
//! assert_eq!(program.evaluate(-4.0), 2.0);
//! ```

use crate::evaluator::{CompiledProgram, Compiler};
use crate::{DEFAULT_MAX_DEPTH, SyntaxError};
use tracing::{debug, trace};

/// Builder for compiling expressions
#[derive(Debug, Clone, Default)]
pub struct Compile {
    max_depth: Option<usize>,
}

impl Compile {
    /// Create a new compile builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum nesting of parentheses and function calls
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Compile `source` into a reusable program.
    ///
    /// # Errors
    /// Returns `SyntaxError` if the input is blank, malformed, contains an
    /// unknown identifier, or nests deeper than the configured limit.
    pub fn compile_str(&self, source: &str) -> Result<CompiledProgram, SyntaxError> {
        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);

        let (instructions, constants) = Compiler::new(source, max_depth)
            .compile()
            .inspect_err(|err| debug!(source, %err, "rejected expression"))?;

        let program = CompiledProgram::new(source, instructions, constants);
        debug!(
            source,
            instructions = program.instruction_count(),
            constants = program.constants().len(),
            stack_size = program.required_stack_depth(),
            "compiled expression"
        );
        trace!(listing = %program, "bytecode");

        Ok(program)
    }
}
