//! TraceMemory: the eligibility trace.
//!
//! A vector the same length as the encodings, accumulated across the steps
//! of an episode and decayed on every update. The `/ sqrt(2)` factor keeps
//! the trace magnitude bounded as contributions accumulate; it is applied
//! unconditionally on every update, including the first of an episode.

use crate::error::{LearnError, Result};
use crate::vector::Vector;
use std::f64::consts::SQRT_2;

/// Eligibility trace over the encoding dimensions.
#[derive(Clone, Debug)]
pub struct TraceMemory {
    e: Vector,
}

impl TraceMemory {
    /// Create a new all-zero trace.
    pub fn new(dimensions: usize) -> Self {
        Self {
            e: Vector::zeros(dimensions),
        }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.e.dimensions()
    }

    /// Set every component to 0. Called at the start of every episode.
    pub fn reset(&mut self) {
        self.e.fill_zero();
    }

    /// Fold the current state's encoding into the trace:
    /// `e[i] = (encoding[i] + lambda * e[i]) / sqrt(2)`.
    ///
    /// Must be called exactly once per visited state, in visitation order,
    /// before that state's TD update is applied.
    pub fn update(&mut self, encoding: &Vector, lambda: f64) -> Result<()> {
        if encoding.dimensions() != self.e.dimensions() {
            return Err(LearnError::DimensionMismatch {
                expected: self.e.dimensions(),
                got: encoding.dimensions(),
            });
        }

        for (e, &c) in self.e.data_mut().iter_mut().zip(encoding.data().iter()) {
            *e = (c + lambda * *e) / SQRT_2;
        }
        Ok(())
    }

    /// The current trace vector.
    pub fn as_vector(&self) -> &Vector {
        &self.e
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zero() {
        let trace = TraceMemory::new(8);
        assert_eq!(trace.as_vector(), &Vector::zeros(8));
    }

    #[test]
    fn test_lambda_zero_update() {
        let mut trace = TraceMemory::new(4);
        let enc = Vector::from_data(vec![1.0, -2.0, 0.5, 0.0]);

        trace.reset();
        trace.update(&enc, 0.0).unwrap();

        for i in 0..4 {
            assert!((trace.as_vector()[i] - enc[i] / SQRT_2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_two_updates() {
        let mut trace = TraceMemory::new(2);
        let a = Vector::from_data(vec![1.0, 0.0]);
        let b = Vector::from_data(vec![0.0, 1.0]);
        let lambda = 0.5;

        trace.update(&a, lambda).unwrap();
        trace.update(&b, lambda).unwrap();

        // e = (b + lambda * (a / sqrt(2))) / sqrt(2)
        let expected0 = (0.0 + lambda * (1.0 / SQRT_2)) / SQRT_2;
        let expected1 = (1.0 + lambda * 0.0) / SQRT_2;
        assert!((trace.as_vector()[0] - expected0).abs() < 1e-12);
        assert!((trace.as_vector()[1] - expected1).abs() < 1e-12);
    }

    #[test]
    fn test_reset_clears() {
        let mut trace = TraceMemory::new(3);
        trace
            .update(&Vector::from_data(vec![1.0, 1.0, 1.0]), 0.9)
            .unwrap();
        trace.reset();
        assert_eq!(trace.as_vector(), &Vector::zeros(3));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut trace = TraceMemory::new(3);
        let err = trace.update(&Vector::zeros(4), 0.5).unwrap_err();
        assert!(matches!(
            err,
            LearnError::DimensionMismatch {
                expected: 3,
                got: 4
            }
        ));
    }

    #[test]
    fn test_magnitude_stays_bounded() {
        let mut trace = TraceMemory::new(1);
        let enc = Vector::from_data(vec![1.0]);

        for _ in 0..1000 {
            trace.update(&enc, 1.0).unwrap();
        }

        // Fixed point of e = (1 + e) / sqrt(2) is 1 / (sqrt(2) - 1)
        let fixed_point = 1.0 / (SQRT_2 - 1.0);
        assert!((trace.as_vector()[0] - fixed_point).abs() < 1e-9);
    }
}
