//! Single-Variable Expression Compiler
//!
//! Compiles a textual math expression in one variable, `x`, into compact
//! stack-machine bytecode, then evaluates that bytecode as often as needed.
//!
//! # Features
//! - Recursive-descent parser that emits postfix bytecode as it goes
//! - Exact evaluation stack sizing, computed once at compile time
//! - Built-in functions: sin, cos, tan, cot, sec, cosec, arcsin, arccos,
//!   arctan, exp, ln, log10, log2, abs, sqrt (case-insensitive)
//! - Numeric failures reported as `NaN`, never as errors
//! - Immutable, thread-safe compiled programs
//! - Optional parallel batch evaluation (`parallel` feature)
//!
//! # Usage Examples
//!
//! ```
//! use mathparse::{compile, uses_variable};
//!
//! let program = compile("sin(2*x)*cos(x)").expect("Should compile");
//! assert!(uses_variable(program.source()));
//!
//! let y = program.evaluate(std::f64::consts::FRAC_PI_4);
//! assert!((y - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
//!
//! // Undefined and infinite results are NaN
//! assert!(compile("ln(x)").unwrap().evaluate(0.0).is_nan());
//!
//! // Syntax errors carry a message and a byte position
//! let err = compile("sin(").unwrap_err();
//! assert_eq!(err.position(), 4);
//! ```

mod builder;
mod error;
mod evaluator;
pub mod functions;
mod helpers;
mod parser;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use builder::Compile;
pub use error::{ErrorKind, SyntaxError};
pub use evaluator::{BinaryOp, CompiledProgram, Instruction, UnaryOp, required_stack_depth};
pub use helpers::{compile, evaluate, evaluate_str};
pub use parser::uses_variable;

/// Default maximum nesting of parentheses and function calls
pub const DEFAULT_MAX_DEPTH: usize = 256;
