//! Derived indicator columns built from normalized answers.

use polars::prelude::*;

use crate::columns::{map_text, put_column};
use crate::mappers::{cycle_outcome, cycle_trigger, map_anxiety_delta, map_daily_time};

/// Day periods and the keyword that marks each in the `day_moments` answer.
pub const DAY_PERIODS: [(&str, &str); 4] = [
    ("usage_morning", "Matin"),
    ("usage_afternoon", "Après-midi"),
    ("usage_evening", "Soir"),
    ("usage_night", "Nuit"),
];

/// Adds `daily_time_numeric` (hours estimate) and `usage_intensity_score` (1–6).
pub fn add_daily_time_features(df: &mut DataFrame) -> PolarsResult<()> {
    let buckets = map_text(df, "daily_time_cat", map_daily_time)?;

    let hours: Vec<Option<f64>> = buckets
        .iter()
        .map(|bucket| bucket.map(|b| b.hours_estimate()))
        .collect();
    let intensity: Vec<Option<i64>> = buckets
        .iter()
        .map(|bucket| bucket.map(|b| b.intensity()))
        .collect();

    put_column(df, Series::new("daily_time_numeric".into(), hours))?;
    put_column(df, Series::new("usage_intensity_score".into(), intensity))
}

/// Adds `anxiety_delta`, `cycle_trigger_numeric` and `cycle_outcome_numeric`.
///
/// The delta only accepts the three exact labels; the cycle indicators are keyword based
/// and default to 0.
pub fn add_anxiety_cycle_features(df: &mut DataFrame) -> PolarsResult<()> {
    let delta = map_text(df, "anxiety_after", map_anxiety_delta)?;
    let outcome = map_text(df, "anxiety_after", cycle_outcome)?;
    let trigger = map_text(df, "anxiety_more_usage", cycle_trigger)?;

    put_column(df, Series::new("anxiety_delta".into(), delta))?;
    put_column(df, Series::new("cycle_trigger_numeric".into(), trigger))?;
    put_column(df, Series::new("cycle_outcome_numeric".into(), outcome))
}

/// Adds one boolean column per day period, read from the raw `day_moments` text.
pub fn add_time_of_day_indicators(df: &mut DataFrame) -> PolarsResult<()> {
    for (column, keyword) in DAY_PERIODS {
        let flags = map_text(df, "day_moments", |raw| {
            raw.is_some_and(|text| text.contains(keyword))
        })?;
        put_column(df, Series::new(column.into(), flags))?;
    }
    Ok(())
}
