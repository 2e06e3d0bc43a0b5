//! Batch evaluation for the bytecode evaluator.
//!
//! Evaluates one program at many values of `x`. The sequential path reuses a
//! single stack buffer for every point; the parallel path (feature
//! `parallel`) gives each Rayon worker its own buffer via `map_init`, so no
//! stack is ever shared between threads.

use super::CompiledProgram;

/// Below this many points the parallel path runs sequentially.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_SIZE: usize = 256;

impl CompiledProgram {
    /// Evaluate at every point of `xs`, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use mathparse::compile;
    ///
    /// let program = compile("x^2 + 1").expect("compile");
    /// let output = program.evaluate_batch(&[1.0, 2.0, 3.0]);
    /// assert_eq!(output, vec![2.0, 5.0, 10.0]);
    /// ```
    #[must_use]
    pub fn evaluate_batch(&self, xs: &[f64]) -> Vec<f64> {
        let mut stack = Vec::with_capacity(self.stack_size);
        xs.iter()
            .map(|&x| self.evaluate_with_stack(x, &mut stack))
            .collect()
    }

    /// Parallel batch evaluation using Rayon.
    ///
    /// Results are in the same order as `xs`. Small inputs fall back to
    /// [`evaluate_batch`](Self::evaluate_batch) to avoid thread overhead.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn evaluate_batch_parallel(&self, xs: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;

        if xs.len() < MIN_PARALLEL_SIZE {
            return self.evaluate_batch(xs);
        }

        xs.par_iter()
            .map_init(
                || Vec::with_capacity(self.stack_size),
                |stack, &x| self.evaluate_with_stack(x, stack),
            )
            .collect()
    }
}
