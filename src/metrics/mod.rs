//! @ai:module:intent Metrics aggregation, classification and ranking
//! @ai:module:layer application
//! @ai:module:public_api ScoreRecord, ModelStats, ModelStatus, FailureDetector, StatsAggregator, AnalysisResults

pub mod aggregator;
pub mod failure;
pub mod types;

pub use aggregator::{StatsAggregator, StatsAggregatorTrait};
pub use failure::{FailureDetector, FailureDetectorTrait};
pub use types::{
    AnalysisResults, ModelLatency, ModelStats, ModelStatus, ModelSummary, OverallAssessment,
    PartialModel, ScoreRecord, WorkingRank,
};
