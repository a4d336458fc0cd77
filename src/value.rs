//! ValueFunction: linear readout of an encoding against learned weights.
//!
//! The value of a state is the dot product of its encoding with the weight
//! vector. Weights are initialized to all-zero once per run and persist
//! across episodes; they are the learned model.

use crate::error::Result;
use crate::vector::Vector;
use crate::vector_space::VectorSpace;
use crate::world::WorldState;

/// Linear value approximator over encoding space.
#[derive(Clone, Debug)]
pub struct ValueFunction {
    weights: Vector,
}

impl ValueFunction {
    /// Create a value function with all-zero weights.
    pub fn new(dimensions: usize) -> Self {
        Self {
            weights: Vector::zeros(dimensions),
        }
    }

    /// Value of a state under the current weights.
    ///
    /// Pure readout; evaluating the same state twice with unchanged
    /// weights yields the same value.
    pub fn value(&self, space: &VectorSpace, state: &WorldState) -> Result<f64> {
        space.dot(state.encoding(), &self.weights)
    }

    /// Semi-gradient update: `weights[x] += delta * direction[x]`.
    ///
    /// The caller supplies `delta = alpha * td_error` and the update
    /// direction (the current state's encoding).
    pub fn adjust(&mut self, direction: &Vector, delta: f64) {
        for (w, &d) in self.weights.data_mut().iter_mut().zip(direction.data().iter()) {
            *w += delta * d;
        }
    }

    /// The learned weight vector.
    pub fn weights(&self) -> &Vector {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    #[test]
    fn test_zero_weights_give_zero_value() {
        let mut space = VectorSpace::with_seed(32, 0);
        let world = World::build_with_goal(4, 1, &mut space).unwrap();
        let vf = ValueFunction::new(32);

        for state in world.states() {
            assert_eq!(vf.value(&space, state).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_value_idempotent() {
        let mut space = VectorSpace::with_seed(32, 0);
        let world = World::build_with_goal(4, 1, &mut space).unwrap();
        let mut vf = ValueFunction::new(32);
        vf.adjust(world.state(2).encoding(), 0.7);

        let first = vf.value(&space, world.state(2)).unwrap();
        let second = vf.value(&space, world.state(2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_adjust_moves_value() {
        let mut space = VectorSpace::with_seed(32, 0);
        let world = World::build_with_goal(4, 1, &mut space).unwrap();
        let mut vf = ValueFunction::new(32);

        let state = world.state(0);
        let delta = 0.5;
        vf.adjust(state.encoding(), delta);

        // value = delta * dot(enc, enc)
        let expected = delta * space.dot(state.encoding(), state.encoding()).unwrap();
        let got = vf.value(&space, state).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }
}
