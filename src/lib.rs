//! @ai:module:intent Translation benchmark analyzer library
//! @ai:module:layer application
//! @ai:module:public_api config, dataset, scoring, metrics, report

pub mod config;
pub mod dataset;
pub mod metrics;
pub mod report;
pub mod scoring;

pub use config::AnalyzerConfig;
pub use dataset::{CsvDatasetReader, DatasetError, TranslationSet};
pub use metrics::{AnalysisResults, FailureDetector, ModelStats, ModelStatus, StatsAggregator};
pub use report::ReportGenerator;
pub use scoring::{score_translations, BleuScorer, Tokenizer};
