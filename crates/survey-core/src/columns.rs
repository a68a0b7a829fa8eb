use polars::prelude::*;
use tracing::warn;

/// Applies `f` to every cell of a text column, in row order.
pub fn map_text<T, F>(df: &DataFrame, column: &str, f: F) -> PolarsResult<Vec<T>>
where
    F: FnMut(Option<&str>) -> T,
{
    let values = df.column(column)?.str()?;
    Ok(values.into_iter().map(f).collect())
}

/// Inserts `series`, replacing a column of the same name in place.
pub fn put_column(df: &mut DataFrame, series: Series) -> PolarsResult<()> {
    df.with_column(series)?;
    Ok(())
}

/// Adds each missing column as all-null text so later steps see a stable schema.
pub fn ensure_text_columns<'a, I>(df: &mut DataFrame, names: I) -> PolarsResult<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let height = df.height();
    let mut added = Vec::new();
    for name in names {
        if df.get_column_index(name).is_some() {
            continue;
        }
        warn!(column = name, "column absent from export; filling with nulls");
        put_column(df, Series::full_null(name.into(), height, &DataType::String))?;
        added.push(name);
    }
    Ok(added)
}
