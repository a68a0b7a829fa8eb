use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::country::{CountryRule, CountryTable};
use crate::types::{Country, RiskScheme};

pub const DEFAULT_INPUT_PATH: &str = "./data/raw/Usage_des_reseaux_sociaux.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./data/processed/questionnaire_clean.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("country rule targets '{0}', which is not a matchable category")]
    InvalidCategory(String),
    #[error("country rule for '{0}' has an empty pattern list or blank pattern")]
    EmptyPattern(String),
    #[error("country category '{0}' appears in more than one rule")]
    DuplicateCategory(String),
}

/// Immutable settings for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleaningConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub country_table: CountryTable,
    pub risk_scheme: RiskScheme,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            country_table: CountryTable::default(),
            risk_scheme: RiskScheme::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsSection,
    risk_scheme: Option<RiskScheme>,
    #[serde(default)]
    countries: Vec<CountryRuleEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsSection {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountryRuleEntry {
    category: String,
    patterns: Vec<String>,
}

impl CleaningConfig {
    /// Reads a TOML config file. Keys left out fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(input) = file.paths.input {
            config.input_path = input;
        }
        if let Some(output) = file.paths.output {
            config.output_path = output;
        }
        if let Some(scheme) = file.risk_scheme {
            config.risk_scheme = scheme;
        }

        if !file.countries.is_empty() {
            let mut rules = Vec::with_capacity(file.countries.len());
            for entry in file.countries {
                let category = Country::try_from(entry.category.as_str())
                    .map_err(|_| ConfigError::InvalidCategory(entry.category.clone()))?;
                rules.push(CountryRule::new(category, entry.patterns)?);
            }
            config.country_table = CountryTable::new(rules)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CleaningConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.risk_scheme, RiskScheme::Weighted);
        assert_eq!(&config.country_table, CountryTable::builtin());
    }

    #[test]
    fn overrides_paths_scheme_and_countries() {
        let config = CleaningConfig::from_toml_str(
            r#"
                risk_scheme = "boolean"

                [paths]
                input = "in.csv"
                output = "out/clean.csv"

                [[countries]]
                category = "France"
                patterns = ["Paris"]

                [[countries]]
                category = "usa"
                patterns = ["Boston"]
            "#,
        )
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out/clean.csv"));
        assert_eq!(config.risk_scheme, RiskScheme::Boolean);
        assert_eq!(config.country_table.rules().len(), 2);
        assert_eq!(
            config.country_table.classify(Some("boston")),
            Country::Usa
        );
        assert_eq!(
            config.country_table.classify(Some("Tunis")),
            Country::Other
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let err = CleaningConfig::from_toml_str(
            r#"
                [[countries]]
                category = "Atlantis"
                patterns = ["x"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCategory(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = CleaningConfig::from_toml_str("verbose = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
