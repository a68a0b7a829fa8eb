use std::collections::HashSet;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use polars::prelude::*;

use crate::errors::ParserError;
use crate::model::LoadedSurvey;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a survey export from disk.
///
/// A path that is not a regular file is reported as [`ParserError::MissingFile`] so the
/// caller can abort before producing any output.
pub fn load_survey_file(path: &Path) -> Result<LoadedSurvey, ParserError> {
    if !path.is_file() {
        return Err(ParserError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input_hash = blake3::hash(&bytes).to_hex().to_string();
    let content = String::from_utf8(bytes).map_err(|source| ParserError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let df = parse_survey_csv(&content)?;

    Ok(LoadedSurvey {
        source_path: path.to_path_buf(),
        input_hash,
        df,
    })
}

/// Parses CSV text into a frame of nullable string columns, one per header.
///
/// Blank cells become nulls; every other cell is kept verbatim.
pub fn parse_survey_csv(content: &str) -> Result<DataFrame, ParserError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| ParserError::Csv { source })?
        .clone();
    let names = header_names(&headers)?;

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| ParserError::Csv { source })?;
        let line_index = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(row_index + 2);

        if record.len() > names.len() {
            return Err(ParserError::DataRow {
                line_index,
                message: format!(
                    "expected at most {} fields, found {}",
                    names.len(),
                    record.len()
                ),
            });
        }

        for (idx, column) in values.iter_mut().enumerate() {
            column.push(clean_cell(record.get(idx)));
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .zip(values)
        .map(|(name, data)| Series::new(name.as_str().into(), data).into())
        .collect();

    DataFrame::new(columns).map_err(|err| ParserError::Validation {
        message: format!("failed to build survey dataframe: {err}"),
    })
}

fn header_names(headers: &StringRecord) -> Result<Vec<String>, ParserError> {
    if headers.is_empty() {
        return Err(ParserError::InvalidHeader {
            message: "file has no header row".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(headers.len());
    for (idx, raw) in headers.iter().enumerate() {
        let name = if raw.trim().is_empty() {
            format!("unnamed_{idx}")
        } else {
            raw.to_string()
        };
        if !seen.insert(name.clone()) {
            return Err(ParserError::InvalidHeader {
                message: format!("duplicate column '{name}'"),
            });
        }
        names.push(name);
    }
    Ok(names)
}

fn clean_cell(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
