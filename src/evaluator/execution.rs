//! Scalar evaluation implementation for the bytecode evaluator.
//!
//! This module provides the `evaluate` method for single-point evaluation.
//! It runs the instruction stream once, left to right, on a stack sized
//! exactly to the program's `required_stack_depth`.
//!
//! # Numeric failures
//!
//! - Any operator that yields `NaN` stops evaluation on the spot and `NaN`
//!   is returned; the remaining instructions never run.
//! - Infinities may flow through intermediate steps (`arctan(1/0)` is
//!   finite), but an infinite final value is reported as `NaN`.

use super::CompiledProgram;
use super::instruction::Instruction;

/// Size of the inline stack buffer (on CPU stack, not heap).
///
/// 48 elements * 8 bytes = 384 bytes, fits comfortably in L1 cache.
/// Programs with deeper stacks fall back to heap allocation.
const INLINE_STACK_SIZE: usize = 48;

impl CompiledProgram {
    /// Evaluate the program with the variable set to `x`.
    ///
    /// # Returns
    ///
    /// The value of the expression, or `NaN` when it is undefined or
    /// infinite at `x` (e.g., `ln(-1)`, `1/0`).
    ///
    /// # Example
    ///
    /// ```
    /// use mathparse::compile;
    ///
    /// let program = compile("x^2 + 1").expect("compile");
    /// assert!((program.evaluate(3.0) - 10.0).abs() < 1e-10);
    /// assert!(compile("sqrt(x)").expect("compile").evaluate(-1.0).is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.stack_size <= INLINE_STACK_SIZE {
            let mut inline_stack = [0.0_f64; INLINE_STACK_SIZE];
            self.run(x, &mut inline_stack[..self.stack_size])
        } else {
            let mut stack = vec![0.0; self.stack_size];
            self.run(x, &mut stack)
        }
    }

    /// Evaluate using a caller-provided stack buffer.
    ///
    /// The buffer is resized to exactly `required_stack_depth()` slots, so a
    /// single `Vec` can be reused across many evaluations without further
    /// allocation.
    #[inline]
    pub fn evaluate_with_stack(&self, x: f64, stack: &mut Vec<f64>) -> f64 {
        stack.clear();
        stack.resize(self.stack_size, 0.0);
        self.run(x, stack)
    }

    /// Execute on a stack of exactly `stack_size` slots.
    ///
    /// Programs are only built by the compiler, which guarantees every
    /// operator finds its operands; indexing never leaves the slice.
    fn run(&self, x: f64, stack: &mut [f64]) -> f64 {
        debug_assert_eq!(stack.len(), self.stack_size);

        let consts = &*self.constants;
        let mut len = 0_usize;

        for instr in &*self.instructions {
            match *instr {
                Instruction::PushConst(idx) => {
                    stack[len] = consts[idx];
                    len += 1;
                }
                Instruction::PushVariable => {
                    stack[len] = x;
                    len += 1;
                }
                Instruction::Binary(op) => {
                    len -= 1;
                    let y = stack[len];
                    let result = op.apply(stack[len - 1], y);
                    if result.is_nan() {
                        return f64::NAN;
                    }
                    stack[len - 1] = result;
                }
                Instruction::Unary(op) => {
                    let top = &mut stack[len - 1];
                    let result = op.apply(*top);
                    if result.is_nan() {
                        return f64::NAN;
                    }
                    *top = result;
                }
            }
        }

        match len.checked_sub(1).map(|top| stack[top]) {
            Some(value) if !value.is_infinite() => value,
            _ => f64::NAN,
        }
    }
}
