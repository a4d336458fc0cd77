//! Learner: the TD(λ) episode loop.
//!
//! Owns the world, the eligibility trace, the value function, the policy,
//! and the RNG for the duration of a run. Episodes run strictly one after
//! another; the weight vector persists across episodes while the trace is
//! reset at the start of each.
//!
//! # Update rule
//!
//! At every visited state the trace is folded first, then the TD error is
//! computed and the weights adjusted along the *current state's encoding*.
//! Using the encoding rather than the trace as the update direction
//! diverges from textbook TD(λ); it matches the observed behavior of the
//! system this crate reproduces and is kept deliberately.

use crate::config::RunConfig;
use crate::error::Result;
use crate::policy::{Move, Policy};
use crate::trace::TraceMemory;
use crate::value::ValueFunction;
use crate::vector::Vector;
use crate::vector_space::VectorSpace;
use crate::world::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// Hard cap on steps per episode, so an episode terminates even under
/// pathological weights.
pub const MAX_STEPS_PER_EPISODE: usize = 100;

/// How a single episode ended. Both variants are normal terminations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The agent reached the goal after `steps` movements.
    GoalReached { steps: usize },
    /// The step cap was hit before the goal; the next episode proceeds.
    StepCapExhausted,
}

/// Aggregate statistics over a batch of episodes.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RunStats {
    /// Episodes executed.
    pub episodes: usize,
    /// Episodes that ended at the goal.
    pub goals_reached: usize,
    /// Episodes terminated by the step cap.
    pub step_cap_hits: usize,
    /// Fewest steps taken in a goal-reaching episode, if any.
    pub min_steps: Option<usize>,
    /// Most steps taken in a goal-reaching episode, if any.
    pub max_steps: Option<usize>,
    /// Total steps across goal-reaching episodes.
    pub total_steps: usize,
}

impl RunStats {
    fn new() -> Self {
        Self {
            episodes: 0,
            goals_reached: 0,
            step_cap_hits: 0,
            min_steps: None,
            max_steps: None,
            total_steps: 0,
        }
    }

    fn record(&mut self, outcome: EpisodeOutcome) {
        self.episodes += 1;
        match outcome {
            EpisodeOutcome::GoalReached { steps } => {
                self.goals_reached += 1;
                self.total_steps += steps;
                self.min_steps = Some(self.min_steps.map_or(steps, |m| m.min(steps)));
                self.max_steps = Some(self.max_steps.map_or(steps, |m| m.max(steps)));
            }
            EpisodeOutcome::StepCapExhausted => self.step_cap_hits += 1,
        }
    }

    /// Mean steps per goal-reaching episode.
    pub fn average_steps(&self) -> Option<f64> {
        if self.goals_reached == 0 {
            None
        } else {
            Some(self.total_steps as f64 / self.goals_reached as f64)
        }
    }
}

/// Ordered per-location value, for external reporting.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LocationValue {
    pub location: usize,
    pub value: f64,
}

/// TD(λ) learner over a circular HRR-encoded world.
///
/// Exclusively owns every piece of mutable run state; there are no
/// process-wide singletons. Two learners built from the same config and
/// seed produce identical weight vectors.
pub struct Learner {
    config: RunConfig,
    space: VectorSpace,
    world: World,
    trace: TraceMemory,
    values: ValueFunction,
    policy: Policy,
    rng: ChaCha8Rng,
    /// Episodes completed so far, used as the run index in diagnostics.
    episodes_run: usize,
}

impl Learner {
    /// Initialize a learner with the default seed.
    pub fn new(config: RunConfig) -> Result<Self> {
        Self::with_seed(config, 0)
    }

    /// Initialize a learner with a specific seed.
    ///
    /// The seed feeds every sampling point: encoding generation, the goal
    /// draw, start-location draws, and epsilon draws.
    pub fn with_seed(config: RunConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut space = VectorSpace::with_seed(config.vector_length, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::build(config.world_size, &mut space, &mut rng)?;

        debug!(
            world_size = config.world_size,
            vector_length = config.vector_length,
            goal = world.goal_location(),
            "world initialized"
        );

        Ok(Self {
            trace: TraceMemory::new(config.vector_length),
            values: ValueFunction::new(config.vector_length),
            policy: Policy::new(config.epsilon),
            config,
            space,
            world,
            rng,
            episodes_run: 0,
        })
    }

    /// Run `config.number_of_runs` episodes.
    pub fn run(&mut self) -> Result<RunStats> {
        self.run_episodes(self.config.number_of_runs)
    }

    /// Run `count` episodes back to back, accumulating statistics.
    ///
    /// Weights persist across episodes (and across calls); the trace is
    /// reset at the start of each episode.
    pub fn run_episodes(&mut self, count: usize) -> Result<RunStats> {
        let mut stats = RunStats::new();
        for _ in 0..count {
            let outcome = self.run_episode()?;
            stats.record(outcome);
        }
        Ok(stats)
    }

    /// Run a single episode from a random start location to the goal (or
    /// the step cap).
    fn run_episode(&mut self) -> Result<EpisodeOutcome> {
        let run = self.episodes_run;
        self.episodes_run += 1;

        let mut agent_location = self.rng.gen_range(0..self.world.len());
        self.trace.reset();

        for step in 0..MAX_STEPS_PER_EPISODE {
            let state = self.world.state(agent_location);
            self.trace.update(state.encoding(), self.config.lambda)?;

            // Terminal transition: no successor, so the target is the bare
            // reward.
            if state.location() == self.world.goal_location() {
                let td_error = state.reward() - self.values.value(&self.space, state)?;
                self.values
                    .adjust(state.encoding(), self.config.alpha * td_error);
                debug!(
                    run,
                    step,
                    location = agent_location,
                    goal = self.world.goal_location(),
                    td_error,
                    "reached goal"
                );
                return Ok(EpisodeOutcome::GoalReached { steps: step });
            }

            let left = self.world.left_of(agent_location);
            let right = self.world.right_of(agent_location);
            let left_value = self.values.value(&self.space, self.world.state(left))?;
            let right_value = self.values.value(&self.space, self.world.state(right))?;

            let next_location = match self.policy.choose(left_value, right_value, &mut self.rng)
            {
                Move::Left => left,
                Move::Right => right,
            };

            let next_value = self
                .values
                .value(&self.space, self.world.state(next_location))?;
            let td_error = state.reward() + self.config.discount * next_value
                - self.values.value(&self.space, state)?;
            self.values
                .adjust(state.encoding(), self.config.alpha * td_error);

            debug!(
                run,
                step,
                location = agent_location,
                goal = self.world.goal_location(),
                td_error,
                "step"
            );

            agent_location = next_location;
        }

        debug!(run, goal = self.world.goal_location(), "step cap exhausted");
        Ok(EpisodeOutcome::StepCapExhausted)
    }

    /// Ordered (location, value) pairs for every world location under the
    /// current weights.
    pub fn report_values(&self) -> Result<Vec<(usize, f64)>> {
        self.world
            .states()
            .map(|s| Ok((s.location(), self.values.value(&self.space, s)?)))
            .collect()
    }

    /// The value report as JSON, for external inspection.
    pub fn report_json(&self) -> Result<String> {
        let report: Vec<LocationValue> = self
            .report_values()?
            .into_iter()
            .map(|(location, value)| LocationValue { location, value })
            .collect();
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// The goal location, fixed for the run.
    pub fn goal_location(&self) -> usize {
        self.world.goal_location()
    }

    /// The learned weight vector.
    pub fn weights(&self) -> &Vector {
        self.values.weights()
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}
