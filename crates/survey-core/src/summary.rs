use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use serde::Serialize;
use survey_parser::SchemaReport;

use crate::error::{CleaningError, Result};
use crate::types::RiskScheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub responses: usize,
}

/// Run report: provenance, shape, country breakdown and mean risk.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningSummary {
    pub input_path: Option<PathBuf>,
    pub input_hash: Option<String>,
    pub output_path: Option<PathBuf>,
    pub row_count: usize,
    pub column_count: usize,
    pub risk_scheme: RiskScheme,
    pub schema: SchemaReport,
    /// Sorted by descending count, then name.
    pub countries: Vec<CountryCount>,
    pub mean_risk_score: Option<f64>,
}

impl CleaningSummary {
    pub fn from_frame(df: &DataFrame, schema: SchemaReport, risk_scheme: RiskScheme) -> Result<Self> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for country in df.column("country")?.str()?.into_iter().flatten() {
            *counts.entry(country).or_default() += 1;
        }
        let mut countries: Vec<CountryCount> = counts
            .into_iter()
            .map(|(country, responses)| CountryCount {
                country: country.to_string(),
                responses,
            })
            .collect();
        countries.sort_by(|a, b| {
            b.responses
                .cmp(&a.responses)
                .then_with(|| a.country.cmp(&b.country))
        });

        let mean_risk_score = df.column("risk_score")?.f64()?.mean();

        Ok(Self {
            input_path: None,
            input_hash: None,
            output_path: None,
            row_count: df.height(),
            column_count: df.width(),
            risk_scheme,
            schema,
            countries,
            mean_risk_score,
        })
    }

    pub fn top_countries(&self, limit: usize) -> &[CountryCount] {
        &self.countries[..self.countries.len().min(limit)]
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| CleaningError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
