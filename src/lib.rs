pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliArgs, LocalStorage};

pub use crate::app::pipelines::SeedPipeline;
pub use crate::config::CandidateConfig;
pub use crate::core::etl::CandidateEngine;
pub use crate::core::normalize::normalize_domain;
pub use crate::utils::error::{CandidateError, Result};
