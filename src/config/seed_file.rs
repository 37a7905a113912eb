use crate::config::seed_list::BUILTIN_STRATA;
use crate::domain::model::Stratum;
use crate::utils::error::{CandidateError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed lists loaded from TOML, replacing the built-in strata.
///
/// ```toml
/// [[strata]]
/// name = "GOV"
/// domains = ["opm.go.th", "https://www.mdes.go.th/"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    pub strata: Vec<Stratum>,
}

impl SeedFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn builtin() -> Self {
        Self {
            strata: builtin_strata(),
        }
    }

    pub fn into_strata(self) -> Vec<Stratum> {
        self.strata
    }
}

impl Validate for SeedFile {
    fn validate(&self) -> Result<()> {
        if self.strata.is_empty() {
            return Err(CandidateError::ValidationError {
                message: "seed file defines no strata".to_string(),
            });
        }

        for stratum in &self.strata {
            validate_non_empty_string("strata.name", &stratum.name)?;
        }
        validate_unique_names("strata.name", self.strata.iter().map(|s| s.name.as_str()))
    }
}

pub fn builtin_strata() -> Vec<Stratum> {
    BUILTIN_STRATA
        .iter()
        .map(|seed| Stratum::new(seed.name, seed.domains.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_strata_order() {
        let names: Vec<String> = builtin_strata().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "GOV",
                "EDU",
                "FIN",
                "HEALTH",
                "TELCO_UTIL",
                "NEWS_MEDIA",
                "ECOM_RETAIL",
                "TRAVEL_SERVICES"
            ]
        );
        assert!(SeedFile::builtin().validate().is_ok());
    }

    #[test]
    fn test_parse_seed_file_keeps_table_order() {
        let content = r#"
[[strata]]
name = "B"
domains = ["z.com"]

[[strata]]
name = "A"
domains = ["x.com", "y.com"]
"#;

        let seeds = SeedFile::from_toml_str(content).unwrap();
        assert!(seeds.validate().is_ok());
        assert_eq!(seeds.strata[0], Stratum::new("B", ["z.com"]));
        assert_eq!(seeds.strata[1].domains, vec!["x.com", "y.com"]);
    }

    #[test]
    fn test_seed_file_from_disk() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[strata]]\nname = \"GOV\"\ndomains = [\"opm.go.th\"]\n")
            .unwrap();

        let seeds = SeedFile::from_file(temp_file.path()).unwrap();
        assert_eq!(seeds.into_strata().len(), 1);
    }

    #[test]
    fn test_invalid_seed_files() {
        assert!(SeedFile::from_toml_str("strata = 3").is_err());
        assert!(SeedFile::from_toml_str("strata = []").unwrap().validate().is_err());

        let duplicate = r#"
[[strata]]
name = "GOV"
domains = []

[[strata]]
name = "GOV"
domains = ["opm.go.th"]
"#;
        assert!(SeedFile::from_toml_str(duplicate).unwrap().validate().is_err());

        let blank = "[[strata]]\nname = \" \"\ndomains = []\n";
        assert!(SeedFile::from_toml_str(blank).unwrap().validate().is_err());
    }
}
