pub mod columns;
pub mod config;
pub mod country;
pub mod error;
pub mod extract;
pub mod features;
pub mod mappers;
pub mod normalize;
pub mod outputs;
pub mod pipeline;
pub mod risk;
pub mod summary;
pub mod types;

pub use config::CleaningConfig;
pub use country::CountryTable;
pub use error::{CleaningError, Result};
pub use pipeline::{clean_frame, run, CleanedFrame, CleaningOutput};
pub use summary::CleaningSummary;
pub use types::{Country, DailyTimeBucket, Gender, RiskScheme};
