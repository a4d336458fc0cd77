//! Vector type for hrrlearn.
//!
//! Encodings and the learned weight vector are both fixed-length
//! real-valued vectors. Stored as f64 because HRR readout is a continuous
//! inner product, not a bipolar comparison.

use std::ops::{Index, IndexMut};

/// A fixed-length real-valued vector.
///
/// This is the core data structure for both state encodings and the
/// weight vector. The length is fixed at creation.
#[derive(Clone, Debug)]
pub struct Vector {
    /// The actual vector data
    data: Vec<f64>,
}

impl Vector {
    /// Create a new zero vector of given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            data: vec![0.0; dimensions],
        }
    }

    /// Create a vector from raw data.
    pub fn from_data(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the raw data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Compute the L2 norm.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|&v| v * v).sum::<f64>().sqrt()
    }

    /// Set every component to 0.
    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// True if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::zeros(100);
        assert_eq!(v.dimensions(), 100);
        assert!(v.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_norm() {
        let v = Vector::from_data(vec![1.0, -1.0, 1.0, -1.0]);
        assert!((v.norm() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_index() {
        let mut v = Vector::zeros(4);
        v[2] = 0.5;
        assert_eq!(v[2], 0.5);
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn test_fill_zero() {
        let mut v = Vector::from_data(vec![1.0, 2.0, 3.0]);
        v.fill_zero();
        assert_eq!(v, Vector::zeros(3));
    }
}
