use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("row {row}: field `{field}` is not an integer ({value:?}): {source}")]
    MalformedNumericField {
        row: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no shows found in watch history")]
    EmptyResult,

    #[error("failed to read watch history: {0}")]
    Csv(#[from] csv::Error),
}
