//! VectorSpace: the HRR vector-generation and similarity engine.
//!
//! Generates fixed-length real-valued vectors used as distributed symbolic
//! encodings of discrete locations, and computes the scalar readout (inner
//! product) between an encoding and a weight vector.
//!
//! Components are drawn i.i.d. from N(0, 1/N), so generated vectors are
//! approximately unit-norm and approximately pairwise orthogonal in
//! expectation as N grows. Generation is deterministic given the global
//! seed and the order of `generate()` calls: each call hashes
//! (global_seed || call counter) into a fresh ChaCha8 stream.

use crate::error::{LearnError, Result};
use crate::vector::Vector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use sha2::{Digest, Sha256};

/// HRR engine: random-vector generation plus dot-product readout.
///
/// The dimensionality is a constructor-only parameter. Changing it after
/// encodings exist would invalidate every previously generated vector, so
/// no resize operation is offered.
pub struct VectorSpace {
    dimensions: usize,
    global_seed: u64,
    /// Per-call counter mixed into the seed derivation.
    next_id: u64,
    /// Component distribution, N(0, 1/N).
    component: Normal<f64>,
}

impl VectorSpace {
    /// Create a new VectorSpace with default seed.
    pub fn new(dimensions: usize) -> Self {
        Self::with_seed(dimensions, 0)
    }

    /// Create a new VectorSpace with a specific global seed.
    ///
    /// Using the same seed guarantees the same sequence of vectors from
    /// successive `generate()` calls, across runs and machines.
    pub fn with_seed(dimensions: usize, global_seed: u64) -> Self {
        assert!(dimensions > 0, "VectorSpace dimensionality must be > 0");

        let sigma = 1.0 / (dimensions as f64).sqrt();
        let component = Normal::new(0.0, sigma).expect("sigma is finite and positive");

        Self {
            dimensions,
            global_seed,
            next_id: 0,
            component,
        }
    }

    /// Get the dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Generate a fresh encoding, statistically independent of every
    /// previous one.
    ///
    /// Uses SHA-256 hash of (global_seed || call counter) to seed a ChaCha8
    /// RNG, then samples N components from N(0, 1/N).
    pub fn generate(&mut self) -> Vector {
        let id = self.next_id;
        self.next_id += 1;

        let mut hasher = Sha256::new();
        hasher.update(self.global_seed.to_le_bytes());
        hasher.update(id.to_le_bytes());
        let hash = hasher.finalize();

        // Use first 8 bytes of hash as seed
        let seed = u64::from_le_bytes(hash[0..8].try_into().unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let data: Vec<f64> = (0..self.dimensions)
            .map(|_| self.component.sample(&mut rng))
            .collect();

        Vector::from_data(data)
    }

    /// Inner product of an encoding and a weight vector.
    ///
    /// Both operands must match the engine dimensionality.
    pub fn dot(&self, a: &Vector, b: &Vector) -> Result<f64> {
        self.check_dimensions(a)?;
        self.check_dimensions(b)?;

        Ok(a.data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| x * y)
            .sum())
    }

    fn check_dimensions(&self, v: &Vector) -> Result<()> {
        if v.dimensions() != self.dimensions {
            return Err(LearnError::DimensionMismatch {
                expected: self.dimensions,
                got: v.dimensions(),
            });
        }
        Ok(())
    }
}
