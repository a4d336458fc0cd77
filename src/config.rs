//! RunConfig: experiment parameters and the settings-file loader.
//!
//! The settings file is one header line (discarded) followed by
//! whitespace-separated values in a fixed order:
//!
//! ```text
//! worldSize vectorLength alpha lambda epsilon discount numberOfRuns
//! 64 1024 0.1 0.5 0.05 0.9 100
//! ```

use crate::error::{LearnError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable parameters for a learning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of locations in the circular world.
    pub world_size: usize,
    /// HRR dimensionality N.
    pub vector_length: usize,
    /// Learning rate.
    pub alpha: f64,
    /// Eligibility trace decay.
    pub lambda: f64,
    /// Exploration rate, in [0, 1].
    pub epsilon: f64,
    /// Discount factor, in [0, 1].
    pub discount: f64,
    /// Number of episodes per run. Zero is valid: no learning occurs.
    pub number_of_runs: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            world_size: 64,
            vector_length: 1024,
            alpha: 0.1,
            lambda: 0.5,
            epsilon: 0.05,
            discount: 0.9,
            number_of_runs: 100,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a settings file.
    ///
    /// Validates before returning, so a loaded config is always usable.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the settings format: header line discarded, then the seven
    /// values in order.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut lines = contents.lines();
        // Priming read to discard the header line
        lines.next();

        let mut fields = lines.flat_map(str::split_whitespace);
        let mut next = |name: &str| -> Result<String> {
            fields
                .next()
                .map(str::to_string)
                .ok_or_else(|| LearnError::InvalidConfig(format!("missing field: {name}")))
        };

        Ok(Self {
            world_size: parse_field(&next("worldSize")?, "worldSize")?,
            vector_length: parse_field(&next("vectorLength")?, "vectorLength")?,
            alpha: parse_field(&next("alpha")?, "alpha")?,
            lambda: parse_field(&next("lambda")?, "lambda")?,
            epsilon: parse_field(&next("epsilon")?, "epsilon")?,
            discount: parse_field(&next("discount")?, "discount")?,
            number_of_runs: parse_field(&next("numberOfRuns")?, "numberOfRuns")?,
        })
    }

    /// Fail fast on parameters that would make the run meaningless.
    ///
    /// Out-of-range values are rejected, never silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.world_size == 0 {
            return Err(LearnError::InvalidConfig(
                "worldSize must be positive".to_string(),
            ));
        }
        if self.vector_length == 0 {
            return Err(LearnError::InvalidConfig(
                "vectorLength must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(LearnError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(LearnError::InvalidConfig(format!(
                "discount must be in [0, 1], got {}",
                self.discount
            )));
        }
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(token: &str, name: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| LearnError::InvalidConfig(format!("cannot parse {name}: {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.world_size, 64);
        assert_eq!(config.vector_length, 1024);
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.lambda, 0.5);
        assert_eq!(config.epsilon, 0.05);
        assert_eq!(config.discount, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_settings() {
        let contents = "worldSize vectorLength alpha lambda epsilon discount numberOfRuns\n\
                        32 512 0.2 0.4 0.1 0.8 250\n";
        let config = RunConfig::parse(contents).unwrap();

        assert_eq!(config.world_size, 32);
        assert_eq!(config.vector_length, 512);
        assert_eq!(config.alpha, 0.2);
        assert_eq!(config.lambda, 0.4);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.discount, 0.8);
        assert_eq!(config.number_of_runs, 250);
    }

    #[test]
    fn test_parse_missing_field() {
        let contents = "header\n32 512 0.2\n";
        let err = RunConfig::parse(contents).unwrap_err();
        assert!(matches!(err, LearnError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_bad_token() {
        let contents = "header\n32 many 0.2 0.4 0.1 0.8 250\n";
        let err = RunConfig::parse(contents).unwrap_err();
        assert!(matches!(err, LearnError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_zero_world() {
        let config = RunConfig {
            world_size: 0,
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        let config = RunConfig {
            epsilon: 1.5,
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_discount() {
        let config = RunConfig {
            discount: -0.1,
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
