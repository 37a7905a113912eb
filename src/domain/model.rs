use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag written into the `source` column of every row.
pub const SEED_SOURCE: &str = "seed_list";

/// A named category and its raw, unnormalized seed entries in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stratum {
    pub name: String,
    pub domains: Vec<String>,
}

impl Stratum {
    pub fn new<N, I, D>(name: N, domains: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collector output for one stratum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratumSample {
    pub name: String,
    /// Unique canonical domains, first occurrence order, truncated to the limit.
    pub domains: Vec<String>,
    /// Unique count before truncation.
    pub unique_count: usize,
}

/// Raised when a stratum yields fewer unique domains than the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortageWarning {
    pub stratum: String,
    pub found: usize,
    pub required: usize,
    pub allow_short: bool,
}

impl fmt::Display for ShortageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[WARN] Stratum {} has only {} unique domains (< {}).",
            self.stratum, self.found, self.required
        )?;
        if self.allow_short {
            write!(f, " Continuing due to ALLOW_SHORT_STRAT.")
        } else {
            write!(f, " Using available domains and continuing.")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub domain: String,
    pub stratum: String,
    pub source: String,
    pub source_rank: String,
}

impl CandidateRow {
    pub fn seeded(domain: &str, stratum: &str) -> Self {
        Self {
            domain: domain.to_string(),
            stratum: stratum.to_string(),
            source: SEED_SOURCE.to_string(),
            source_rank: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionResult {
    /// In configured enumeration order.
    pub samples: Vec<StratumSample>,
    pub warnings: Vec<ShortageWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// `None` on a dry run.
    pub output_path: Option<String>,
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
    pub warnings: Vec<ShortageWarning>,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
