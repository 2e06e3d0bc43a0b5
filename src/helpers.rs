//! Convenience wrappers for one-off use
//!
//! For repeated evaluation, compile once and call
//! [`CompiledProgram::evaluate`] instead.

use crate::{Compile, CompiledProgram, SyntaxError};

/// Compile an expression with default settings.
///
/// # Example
/// ```
/// use mathparse::compile;
///
/// let program = compile("3.5").expect("Should compile");
/// assert_eq!(program.constants(), &[3.5]);
/// ```
///
/// # Errors
/// Returns `SyntaxError` describing the first problem found and where.
pub fn compile(source: &str) -> Result<CompiledProgram, SyntaxError> {
    Compile::new().compile_str(source)
}

/// Evaluate a compiled program at `x`. Never fails; `NaN` means undefined
/// or infinite.
#[inline]
#[must_use]
pub fn evaluate(program: &CompiledProgram, x: f64) -> f64 {
    program.evaluate(x)
}

/// Compile and evaluate in one step.
///
/// # Example
/// ```
/// use mathparse::evaluate_str;
///
/// assert_eq!(evaluate_str("2^3^2", 0.0), Ok(64.0));
/// assert!(evaluate_str("sin(", 0.0).is_err());
/// ```
///
/// # Errors
/// Returns `SyntaxError` if `source` does not compile.
pub fn evaluate_str(source: &str, x: f64) -> Result<f64, SyntaxError> {
    compile(source).map(|program| program.evaluate(x))
}
