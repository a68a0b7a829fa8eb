pub mod errors;
pub mod model;
mod reader;
pub mod schema;

pub use errors::ParserError;
pub use model::{LoadedSurvey, SchemaReport};
pub use reader::{load_survey_file, parse_survey_csv};
pub use schema::{apply_schema, canonical_columns, DECOY_COLUMN, SOURCE_COLUMNS};

#[cfg(test)]
mod tests;
