//! World: the circular 1-D arrangement of encoded states.
//!
//! Each location gets a reward and a distributed encoding, generated once
//! at build time. Exactly one location carries nonzero reward (the goal),
//! and the goal is fixed for the remainder of the run: every episode
//! targets the same location.

use crate::error::Result;
use crate::vector::Vector;
use crate::vector_space::VectorSpace;
use rand::Rng;

/// One world location: reward, encoding, and index.
///
/// The encoding and location are immutable after creation; the reward is
/// set once, when the goal is assigned.
#[derive(Clone, Debug)]
pub struct WorldState {
    reward: f64,
    encoding: Vector,
    location: usize,
}

impl WorldState {
    fn new(encoding: Vector, location: usize) -> Self {
        Self {
            reward: 0.0,
            encoding,
            location,
        }
    }

    /// Get the reward (1.0 at the goal, 0.0 everywhere else).
    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Get the distributed encoding of this location.
    pub fn encoding(&self) -> &Vector {
        &self.encoding
    }

    /// Get the location index.
    pub fn location(&self) -> usize {
        self.location
    }
}

/// An ordered sequence of [`WorldState`], logically circular.
#[derive(Clone, Debug)]
pub struct World {
    states: Vec<WorldState>,
    goal_location: usize,
}

impl World {
    /// Build a world of `world_size` states, choosing the goal uniformly
    /// at random.
    pub fn build<R: Rng>(
        world_size: usize,
        space: &mut VectorSpace,
        rng: &mut R,
    ) -> Result<Self> {
        let goal = rng.gen_range(0..world_size);
        Self::build_with_goal(world_size, goal, space)
    }

    /// Build a world of `world_size` states with an explicit goal location.
    pub fn build_with_goal(
        world_size: usize,
        goal_location: usize,
        space: &mut VectorSpace,
    ) -> Result<Self> {
        let mut states: Vec<WorldState> = (0..world_size)
            .map(|i| WorldState::new(space.generate(), i))
            .collect();
        states[goal_location].reward = 1.0;

        Ok(Self {
            states,
            goal_location,
        })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The goal location, fixed for the lifetime of the world.
    pub fn goal_location(&self) -> usize {
        self.goal_location
    }

    /// Get the state at a location.
    pub fn state(&self, location: usize) -> &WorldState {
        &self.states[location]
    }

    /// Iterate over all states in location order.
    pub fn states(&self) -> impl Iterator<Item = &WorldState> {
        self.states.iter()
    }

    /// Left neighbor on the circular index space.
    ///
    /// For a single-location world this is the location itself.
    pub fn left_of(&self, location: usize) -> usize {
        if location == 0 {
            self.states.len() - 1
        } else {
            location - 1
        }
    }

    /// Right neighbor on the circular index space.
    ///
    /// For a single-location world this is the location itself.
    pub fn right_of(&self, location: usize) -> usize {
        if location == self.states.len() - 1 {
            0
        } else {
            location + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_world(world_size: usize, goal: usize) -> World {
        let mut space = VectorSpace::with_seed(16, 0);
        World::build_with_goal(world_size, goal, &mut space).unwrap()
    }

    #[test]
    fn test_build_sizes() {
        let world = small_world(8, 3);
        assert_eq!(world.len(), 8);
        for (i, state) in world.states().enumerate() {
            assert_eq!(state.location(), i);
            assert_eq!(state.encoding().dimensions(), 16);
        }
    }

    #[test]
    fn test_exactly_one_goal() {
        let mut space = VectorSpace::with_seed(16, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let world = World::build(32, &mut space, &mut rng).unwrap();

        let rewarded: Vec<usize> = world
            .states()
            .filter(|s| s.reward() != 0.0)
            .map(|s| s.location())
            .collect();
        assert_eq!(rewarded, vec![world.goal_location()]);
        assert_eq!(world.state(world.goal_location()).reward(), 1.0);
    }

    #[test]
    fn test_neighbors_wrap() {
        let world = small_world(5, 0);
        assert_eq!(world.left_of(0), 4);
        assert_eq!(world.right_of(4), 0);
        assert_eq!(world.left_of(3), 2);
        assert_eq!(world.right_of(3), 4);
    }

    #[test]
    fn test_neighbors_involutive() {
        let world = small_world(7, 0);
        for x in 0..world.len() {
            assert_eq!(world.right_of(world.left_of(x)), x);
            assert_eq!(world.left_of(world.right_of(x)), x);
        }
    }

    #[test]
    fn test_single_location_self_neighbors() {
        let world = small_world(1, 0);
        assert_eq!(world.left_of(0), 0);
        assert_eq!(world.right_of(0), 0);
    }
}
