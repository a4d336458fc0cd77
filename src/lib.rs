//! # hrrlearn: TD(λ) over Holographic Reduced Representations
//!
//! A reinforcement-learning experiment: an agent walks a circular 1-D
//! world of discrete locations, seeking a single rewarded goal, and learns
//! a value function over locations with TD(λ) and eligibility traces.
//! Locations are represented not by their raw index but by a distributed
//! vector encoding (a Holographic Reduced Representation); the value
//! function is a linear readout of that encoding against a learned weight
//! vector.
//!
//! ## Quick Start
//!
//! ```rust
//! use hrrlearn::{Learner, RunConfig};
//!
//! # fn main() -> hrrlearn::Result<()> {
//! let config = RunConfig {
//!     world_size: 16,
//!     vector_length: 256,
//!     number_of_runs: 50,
//!     ..RunConfig::default()
//! };
//!
//! let mut learner = Learner::with_seed(config, 42)?;
//! let stats = learner.run()?;
//! println!("goals reached: {}", stats.goals_reached);
//!
//! for (location, value) in learner.report_values()? {
//!     println!("{location:>3}  {value:+.4}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Encoding**: each location gets a fixed-length random vector,
//!   approximately orthogonal to every other location's vector
//!   ([`VectorSpace`]).
//! - **Value**: dot product of an encoding with the weight vector
//!   ([`ValueFunction`]).
//! - **Trace**: per-episode eligibility accumulator, decayed every step
//!   ([`TraceMemory`]).
//! - **Policy**: epsilon-soft greedy choice between the two circular
//!   neighbors, with a left-biased tie-break ([`Policy`]).
//! - **Learner**: the episode loop tying it all together ([`Learner`]).

pub mod config;
pub mod error;
pub mod learner;
pub mod policy;
pub mod trace;
pub mod value;
pub mod vector;
pub mod vector_space;
pub mod world;

// Re-exports for convenience
pub use config::RunConfig;
pub use error::{LearnError, Result};
pub use learner::{EpisodeOutcome, Learner, LocationValue, RunStats, MAX_STEPS_PER_EPISODE};
pub use policy::{Move, Policy};
pub use trace::TraceMemory;
pub use value::ValueFunction;
pub use vector::Vector;
pub use vector_space::VectorSpace;
pub use world::{World, WorldState};
