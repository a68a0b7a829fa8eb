use polars::prelude::*;

use crate::columns::{map_text, put_column};
use crate::mappers::{frequency_risk, productivity_risk};
use crate::normalize::convert_yes_no;
use crate::types::RiskScheme;

const MAX_POINTS_PER_DIMENSION: f64 = 1.0;

/// The six behavioral indicators that make up the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskDimension {
    Sleep,
    TimeLoss,
    Notification,
    Guilt,
    FailedReduction,
    Productivity,
}

impl RiskDimension {
    pub const ALL: [RiskDimension; 6] = [
        RiskDimension::Sleep,
        RiskDimension::TimeLoss,
        RiskDimension::Notification,
        RiskDimension::Guilt,
        RiskDimension::FailedReduction,
        RiskDimension::Productivity,
    ];

    pub fn output_column(&self) -> &'static str {
        match self {
            RiskDimension::Sleep => "risk_sleep",
            RiskDimension::TimeLoss => "risk_timeloss",
            RiskDimension::Notification => "risk_notification",
            RiskDimension::Guilt => "risk_guilt",
            RiskDimension::FailedReduction => "risk_failed_reduction",
            RiskDimension::Productivity => "risk_productivity",
        }
    }

    pub fn source_column(&self) -> &'static str {
        match self {
            RiskDimension::Sleep => "sleep_difficulties",
            RiskDimension::TimeLoss => "time_loss",
            RiskDimension::Notification => "notification_compulsion",
            RiskDimension::Guilt => "guilt_after_use",
            RiskDimension::FailedReduction => "failed_reduction",
            RiskDimension::Productivity => "productivity_impact",
        }
    }

    /// Weighted contribution of a raw answer for this dimension.
    pub fn weighted_points(&self, raw: Option<&str>) -> f64 {
        match self {
            RiskDimension::Productivity => productivity_risk(raw),
            _ => frequency_risk(raw),
        }
    }
}

pub fn source_columns() -> [&'static str; 6] {
    RiskDimension::ALL.map(|dimension| dimension.source_column())
}

/// Percentage of the maximum attainable points.
pub fn risk_percentage(total_points: f64) -> f64 {
    let max_points = RiskDimension::ALL.len() as f64 * MAX_POINTS_PER_DIMENSION;
    total_points / max_points * 100.0
}

/// Adds the per-dimension `risk_*` columns, `total_risk_points` and `risk_score`.
///
/// Under [`RiskScheme::Boolean`] the six source columns are first converted to booleans
/// in place and each true answer counts one point; false and missing count zero.
pub fn apply_risk_score(df: &DataFrame, scheme: RiskScheme) -> Result<DataFrame, PolarsError> {
    let mut output = df.clone();
    if scheme == RiskScheme::Boolean {
        convert_yes_no(&mut output, &source_columns())?;
    }

    let mut totals = vec![0.0f64; output.height()];

    for dimension in RiskDimension::ALL {
        let points: Vec<f64> = match scheme {
            RiskScheme::Weighted => map_text(&output, dimension.source_column(), |raw| {
                dimension.weighted_points(raw)
            })?,
            RiskScheme::Boolean => output
                .column(dimension.source_column())?
                .bool()?
                .into_iter()
                .map(|answer| if answer == Some(true) { 1.0 } else { 0.0 })
                .collect(),
        };

        for (total, value) in totals.iter_mut().zip(&points) {
            *total += value;
        }
        put_column(
            &mut output,
            Series::new(dimension.output_column().into(), points),
        )?;
    }

    let scores: Vec<f64> = totals.iter().copied().map(risk_percentage).collect();
    put_column(&mut output, Series::new("total_risk_points".into(), totals))?;
    put_column(&mut output, Series::new("risk_score".into(), scores))?;

    Ok(output)
}
