use std::path::PathBuf;

use polars::prelude::DataFrame;
use serde::Serialize;

/// A survey export read from disk, one string column per header.
#[derive(Debug, Clone)]
pub struct LoadedSurvey {
    pub source_path: PathBuf,
    /// BLAKE3 hex digest of the raw file bytes.
    pub input_hash: String,
    pub df: DataFrame,
}

impl LoadedSurvey {
    pub fn row_count(&self) -> usize {
        self.df.height()
    }
}

/// What the schema mapper did to the header row.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaReport {
    pub dropped_decoy: bool,
    pub renamed: usize,
    /// Canonical columns with no matching source header.
    pub absent: Vec<&'static str>,
    /// Headers that are neither a known source header nor a canonical name.
    pub unmapped: Vec<String>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.absent.is_empty()
    }
}
