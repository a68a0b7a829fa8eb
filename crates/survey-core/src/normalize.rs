//! Per-column normalizers: raw answer text in, typed column out.

use polars::prelude::*;

use crate::columns::{map_text, put_column};
use crate::country::CountryTable;
use crate::extract::{extract_first_integer, parse_submission_timestamp, split_multiselect};
use crate::mappers::{map_gender, map_yes_no};

pub const INTEGER_COLUMNS: [&str; 3] = ["age", "anxiety_score", "self_control_score"];
pub const MULTISELECT_COLUMNS: [&str; 4] = ["platforms", "day_moments", "activities", "emotions"];

/// Replaces each column with the first integer found in its text.
pub fn extract_integers(df: &mut DataFrame, columns: &[&str]) -> PolarsResult<()> {
    for column in columns {
        let values = map_text(df, column, extract_first_integer)?;
        put_column(df, Series::new((*column).into(), values))?;
    }
    Ok(())
}

pub fn normalize_country(df: &mut DataFrame, table: &CountryTable) -> PolarsResult<()> {
    let values = map_text(df, "country", |raw| table.classify(raw).as_str())?;
    put_column(df, Series::new("country".into(), values))
}

pub fn normalize_gender(df: &mut DataFrame) -> PolarsResult<()> {
    let values = map_text(df, "gender", |raw| map_gender(raw).map(|g| g.as_str()))?;
    put_column(df, Series::new("gender".into(), values))
}

/// Converts oui/non answers to booleans in place.
pub fn convert_yes_no(df: &mut DataFrame, columns: &[&str]) -> PolarsResult<()> {
    for column in columns {
        let values = map_text(df, column, map_yes_no)?;
        put_column(df, Series::new((*column).into(), values))?;
    }
    Ok(())
}

/// Replaces comma-separated answers with list-of-string columns.
pub fn split_multiselect_columns(df: &mut DataFrame, columns: &[&str]) -> PolarsResult<()> {
    for column in columns {
        let series = if df.height() == 0 {
            Series::new_empty(
                (*column).into(),
                &DataType::List(Box::new(DataType::String)),
            )
        } else {
            let lists = map_text(df, column, |raw| {
                Series::new(PlSmallStr::EMPTY, split_multiselect(raw))
            })?;
            Series::new((*column).into(), lists)
        };
        put_column(df, series)?;
    }
    Ok(())
}

/// Adds `submitted_at` parsed from the raw `timestamp` text.
pub fn add_submission_time(df: &mut DataFrame) -> PolarsResult<()> {
    let micros = map_text(df, "timestamp", parse_submission_timestamp)?;
    let series = Series::new("submitted_at".into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
    put_column(df, series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_become_nullable_i64() {
        let mut df = df!(
            "age" => &[Some("22 ans"), Some("?"), None],
        )
        .unwrap();
        extract_integers(&mut df, &["age"]).unwrap();
        let age = df.column("age").unwrap().i64().unwrap();
        assert_eq!(age.get(0), Some(22));
        assert_eq!(age.get(1), None);
        assert_eq!(age.get(2), None);
    }

    #[test]
    fn multiselect_becomes_list_column() {
        let mut df = df!("platforms" => &[Some("Facebook, Instagram,, TikTok "), None]).unwrap();
        split_multiselect_columns(&mut df, &["platforms"]).unwrap();

        let lists = df
            .column("platforms")
            .unwrap()
            .as_materialized_series()
            .list()
            .unwrap()
            .clone();
        let first = lists.get_as_series(0).unwrap();
        let tags: Vec<&str> = first.str().unwrap().into_iter().flatten().collect();
        assert_eq!(tags, vec!["Facebook", "Instagram", "TikTok"]);
        assert_eq!(lists.get_as_series(1).unwrap().len(), 0);
    }

    #[test]
    fn gender_unmapped_is_null() {
        let mut df = df!("gender" => &[Some("Femme"), Some("x"), None]).unwrap();
        normalize_gender(&mut df).unwrap();
        let gender = df.column("gender").unwrap().str().unwrap();
        assert_eq!(gender.get(0), Some("Female"));
        assert_eq!(gender.get(1), None);
        assert_eq!(gender.get(2), None);
    }
}
