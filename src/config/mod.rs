#[cfg(feature = "cli")]
pub mod cli;
pub mod seed_file;
pub mod seed_list;

use crate::core::ConfigProvider;
use crate::utils::error::{CandidateError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const MIN_DOMAINS_ENV: &str = "MIN_DOMAINS_PER_STRAT";
pub const ALLOW_SHORT_ENV: &str = "ALLOW_SHORT_STRAT";
pub const DEFAULT_MIN_PER_STRATUM: usize = 50;
pub const DEFAULT_OUTPUT_PATH: &str = "candidate.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Cap on domains kept per stratum, and the shortage-warning threshold.
    pub min_per_stratum: usize,
    /// Only changes the wording of shortage warnings.
    pub allow_short: bool,
    pub output_path: String,
    pub seed_file: Option<String>,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            min_per_stratum: DEFAULT_MIN_PER_STRATUM,
            allow_short: false,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            seed_file: None,
        }
    }
}

impl CandidateConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_per_stratum = match lookup(MIN_DOMAINS_ENV) {
            Some(raw) => parse_min_per_stratum(&raw)?,
            None => DEFAULT_MIN_PER_STRATUM,
        };
        let allow_short = lookup(ALLOW_SHORT_ENV)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        Ok(Self {
            min_per_stratum,
            allow_short,
            ..Self::default()
        })
    }
}

/// Negative values clamp to zero, which empties every stratum.
fn parse_min_per_stratum(raw: &str) -> Result<usize> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CandidateError::InvalidConfigValueError {
            field: MIN_DOMAINS_ENV.to_string(),
            value: raw.to_string(),
            reason: "expected an integer".to_string(),
        })?;
    Ok(usize::try_from(value).unwrap_or(0))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes")
}

impl ConfigProvider for CandidateConfig {
    fn min_per_stratum(&self) -> usize {
        self.min_per_stratum
    }

    fn allow_short(&self) -> bool {
        self.allow_short
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }
}

impl Validate for CandidateConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(seed_file) = &self.seed_file {
            validate_path("seed_file", seed_file)?;
        }
        Ok(())
    }
}
