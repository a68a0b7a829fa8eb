use std::fs::{self, File};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{CleaningError, Result};

/// Writes the cleaned frame as CSV, creating the parent directory when needed.
///
/// List columns are rendered as JSON arrays of strings; nulls become empty cells.
pub fn write_clean_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut frame = flatten_list_columns(df)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CleaningError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut file = File::create(path).map_err(|source| CleaningError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)?;

    debug!(path = %path.display(), rows = frame.height(), "wrote cleaned CSV");
    Ok(())
}

/// Replaces every list column with its JSON text rendering.
pub fn flatten_list_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut output = df.clone();
    let list_columns: Vec<Column> = df
        .get_columns()
        .iter()
        .filter(|column| matches!(column.dtype(), DataType::List(_)))
        .cloned()
        .collect();

    for column in list_columns {
        let lists = column.as_materialized_series().list()?;
        let mut rendered: Vec<Option<String>> = Vec::with_capacity(lists.len());
        for entry in lists.into_iter() {
            match entry {
                Some(inner) => {
                    let tags: Vec<&str> = if inner.is_empty() {
                        Vec::new()
                    } else {
                        inner.str()?.into_iter().flatten().collect()
                    };
                    rendered.push(Some(serde_json::to_string(&tags)?));
                }
                None => rendered.push(None),
            }
        }
        output.with_column(Series::new(column.name().clone(), rendered))?;
    }

    Ok(output)
}
