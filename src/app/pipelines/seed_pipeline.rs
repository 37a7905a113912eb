use crate::config::seed_file::SeedFile;
use crate::core::collector::collect_strata;
use crate::core::writer::{build_rows, encode_csv};
use crate::core::{CollectionResult, ConfigProvider, Pipeline, Storage, Stratum};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;

/// Seed strata in, candidate CSV out.
pub struct SeedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    strata: Option<Vec<Stratum>>,
}

impl<S: Storage, C: ConfigProvider> SeedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            strata: None,
        }
    }

    /// Uses the given strata instead of the seed file or built-in lists.
    pub fn with_strata(mut self, strata: Vec<Stratum>) -> Self {
        self.strata = Some(strata);
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SeedPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Stratum>> {
        if let Some(strata) = &self.strata {
            return Ok(strata.clone());
        }

        let seeds = match self.config.seed_file() {
            Some(path) => {
                tracing::info!("Loading seed strata from {}", path);
                SeedFile::from_file(path)?
            }
            None => SeedFile::builtin(),
        };
        seeds.validate()?;

        Ok(seeds.into_strata())
    }

    async fn transform(&self, strata: Vec<Stratum>) -> Result<CollectionResult> {
        let result = collect_strata(
            &strata,
            self.config.min_per_stratum(),
            self.config.allow_short(),
        );

        log_cross_stratum_repeats(&result);
        Ok(result)
    }

    async fn load(&self, result: &CollectionResult) -> Result<String> {
        let rows = build_rows(&result.samples);
        let data = encode_csv(&rows)?;

        let output_path = self.config.output_path();
        self.storage.write_file(output_path, &data).await?;

        tracing::info!("Wrote {} rows to {}", rows.len(), output_path);
        Ok(output_path.to_string())
    }
}

/// Same domain under several strata is kept as-is; only reported.
fn log_cross_stratum_repeats(result: &CollectionResult) {
    let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
    for sample in &result.samples {
        for domain in &sample.domains {
            owners
                .entry(domain.as_str())
                .or_default()
                .push(sample.name.as_str());
        }
    }

    for (domain, strata) in owners.iter().filter(|(_, strata)| strata.len() > 1) {
        tracing::debug!("{} appears in strata {:?}", domain, strata);
    }
}
