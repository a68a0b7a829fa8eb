//! End-to-end cleaning: schema mapping, normalizers, derived features, risk score.

use polars::prelude::*;
use survey_parser::{apply_schema, canonical_columns, load_survey_file, SchemaReport};
use tracing::{debug, info};

use crate::columns::ensure_text_columns;
use crate::config::CleaningConfig;
use crate::error::Result;
use crate::features::{
    add_anxiety_cycle_features, add_daily_time_features, add_time_of_day_indicators,
};
use crate::normalize::{
    add_submission_time, convert_yes_no, extract_integers, normalize_country, normalize_gender,
    split_multiselect_columns, INTEGER_COLUMNS, MULTISELECT_COLUMNS,
};
use crate::outputs::write_clean_csv;
use crate::risk::apply_risk_score;
use crate::summary::CleaningSummary;

const YES_NO_COLUMNS: [&str; 1] = ["usage_is_healthy"];

#[derive(Debug, Clone)]
pub struct CleanedFrame {
    pub dataframe: DataFrame,
    pub schema: SchemaReport,
}

#[derive(Debug, Clone)]
pub struct CleaningOutput {
    pub dataframe: DataFrame,
    pub summary: CleaningSummary,
}

/// Cleans a raw export frame (one text column per header) in memory.
///
/// The time-of-day flags read the raw `day_moments` text, so they are derived before
/// the multi-select split replaces that column with a list.
pub fn clean_frame(mut df: DataFrame, config: &CleaningConfig) -> Result<CleanedFrame> {
    let schema = apply_schema(&mut df)?;
    debug!(
        renamed = schema.renamed,
        dropped_decoy = schema.dropped_decoy,
        unmapped = schema.unmapped.len(),
        "applied canonical schema"
    );
    ensure_text_columns(&mut df, canonical_columns())?;

    add_submission_time(&mut df)?;
    extract_integers(&mut df, &INTEGER_COLUMNS)?;
    normalize_country(&mut df, &config.country_table)?;
    normalize_gender(&mut df)?;
    debug!("normalized demographic columns");

    add_daily_time_features(&mut df)?;
    add_anxiety_cycle_features(&mut df)?;
    add_time_of_day_indicators(&mut df)?;
    split_multiselect_columns(&mut df, &MULTISELECT_COLUMNS)?;
    convert_yes_no(&mut df, &YES_NO_COLUMNS)?;
    debug!("derived usage features");

    let dataframe = apply_risk_score(&df, config.risk_scheme)?;
    info!(
        rows = dataframe.height(),
        columns = dataframe.width(),
        scheme = %config.risk_scheme,
        "cleaned survey frame"
    );

    Ok(CleanedFrame { dataframe, schema })
}

/// Loads the configured input, cleans it, writes the output CSV and summarizes the run.
///
/// Nothing is written when loading or cleaning fails.
pub fn run(config: &CleaningConfig) -> Result<CleaningOutput> {
    let loaded = load_survey_file(&config.input_path)?;
    info!(
        path = %loaded.source_path.display(),
        rows = loaded.row_count(),
        hash = %loaded.input_hash,
        "loaded survey export"
    );

    let CleanedFrame { dataframe, schema } = clean_frame(loaded.df, config)?;
    write_clean_csv(&dataframe, &config.output_path)?;
    info!(path = %config.output_path.display(), "wrote cleaned dataset");

    let mut summary = CleaningSummary::from_frame(&dataframe, schema, config.risk_scheme)?;
    summary.input_path = Some(loaded.source_path);
    summary.input_hash = Some(loaded.input_hash);
    summary.output_path = Some(config.output_path.clone());

    Ok(CleaningOutput { dataframe, summary })
}
