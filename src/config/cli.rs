use crate::config::CandidateConfig;
use crate::core::Storage;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "candidate-gen")]
#[command(about = "Generate a stratified candidate domain list as CSV")]
pub struct CliArgs {
    /// Output CSV path (default: candidate.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override MIN_DOMAINS_PER_STRAT
    #[arg(long)]
    pub min_per_stratum: Option<usize>,

    /// Same as ALLOW_SHORT_STRAT=1
    #[arg(long)]
    pub allow_short: bool,

    /// TOML file with [[strata]] tables replacing the built-in seed lists
    #[arg(long)]
    pub seeds: Option<String>,

    /// Collect and print the summary without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Read the written file back and check its row count
    #[arg(long)]
    pub verify: bool,

    /// Also print the run summary as JSON
    #[arg(long)]
    pub summary_json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Command-line flags take precedence over the environment.
    pub fn apply_to(&self, config: &mut CandidateConfig) {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(min) = self.min_per_stratum {
            config.min_per_stratum = min;
        }
        if self.allow_short {
            config.allow_short = true;
        }
        if let Some(seeds) = &self.seeds {
            config.seed_file = Some(seeds.clone());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    /// Overwrites in place; not atomic.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_env_config() {
        let args = CliArgs::parse_from([
            "candidate-gen",
            "--output",
            "out/list.csv",
            "--min-per-stratum",
            "3",
            "--allow-short",
        ]);
        let mut config = CandidateConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.output_path, "out/list.csv");
        assert_eq!(config.min_per_stratum, 3);
        assert!(config.allow_short);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = CliArgs::parse_from(["candidate-gen"]);
        let mut config = CandidateConfig {
            min_per_stratum: 7,
            allow_short: true,
            ..CandidateConfig::default()
        };
        args.apply_to(&mut config);

        assert_eq!(config.min_per_stratum, 7);
        assert!(config.allow_short);
    }

    #[tokio::test]
    async fn test_local_storage_round_trip_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/candidate.csv", b"abc").await.unwrap();
        assert_eq!(storage.read_file("nested/candidate.csv").await.unwrap(), b"abc");
    }

    #[tokio::test]
    async fn test_local_storage_write_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        // A directory cannot be overwritten as a file.
        std::fs::create_dir(temp_dir.path().join("candidate.csv")).unwrap();

        let err = storage.write_file("candidate.csv", b"abc").await.unwrap_err();
        assert!(err.is_io());
    }
}
