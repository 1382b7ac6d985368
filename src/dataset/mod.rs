//! @ai:module:intent CSV adapter supplying (candidate, reference, latency) tuples
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvDatasetReader, TranslationSet, DatasetError

pub mod reader;
pub mod row;

pub use reader::{find_latest_csv, CsvDatasetReader, DatasetReaderTrait};
pub use row::{CandidateOutput, TranslationRow, TranslationSet};

use thiserror::Error;

/// @ai:intent Unified error type for dataset ingestion
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("reference column '{0}' not found in header")]
    MissingReferenceColumn(String),

    #[error("no candidate columns with prefix '{0}' found in header")]
    NoCandidateColumns(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
