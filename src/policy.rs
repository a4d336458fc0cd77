//! Policy: epsilon-soft greedy left/right movement decision.
//!
//! Only the two neighbors of the current location are compared; the current
//! state's own value plays no role. Ties keep the default (Left). On an
//! exploration draw the greedy choice is fully discarded and replaced by a
//! uniformly random direction, not blended with it.

use rand::Rng;

/// A movement along the circular world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
}

/// Epsilon-soft greedy policy over the two neighbors.
#[derive(Clone, Copy, Debug)]
pub struct Policy {
    epsilon: f64,
}

impl Policy {
    /// Create a policy with the given exploration rate.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Get the exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Decide a movement given the values of the left and right neighbors.
    ///
    /// Greedy step: Left by default, Right only if `left_value <
    /// right_value` (equal values keep Left). Then one uniform draw in
    /// [0, 1): below epsilon, the movement is re-chosen uniformly at
    /// random.
    pub fn choose<R: Rng>(&self, left_value: f64, right_value: f64, rng: &mut R) -> Move {
        let mut movement = Move::Left;

        if left_value < right_value {
            movement = Move::Right;
        }

        let exploration_draw: f64 = rng.gen();
        if exploration_draw < self.epsilon {
            movement = Self::random_movement(rng);
        }

        movement
    }

    /// Uniformly random movement.
    fn random_movement<R: Rng>(rng: &mut R) -> Move {
        if rng.gen_range(0..2) == 0 {
            Move::Left
        } else {
            Move::Right
        }
    }
}
