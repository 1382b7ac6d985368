//! @ai:module:intent Metric types for translation benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api ScoreRecord, ModelStats, ModelStatus, AnalysisResults
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent One evaluation of a (candidate, reference) pair for one model
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub bleu: f64,
    pub latency_ms: f64,
    pub failed: bool,
}

impl ScoreRecord {
    /// @ai:intent Record for a successfully scored row
    /// @ai:effects pure
    pub fn success(bleu: f64, latency_ms: f64) -> Self {
        Self {
            bleu,
            latency_ms,
            failed: false,
        }
    }

    /// @ai:intent Record for a failed row; excluded from averages
    /// @ai:effects pure
    pub fn failure() -> Self {
        Self {
            bleu: 0.0,
            latency_ms: 0.0,
            failed: true,
        }
    }
}

/// @ai:intent Aggregated statistics over all records for one model
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ModelStats {
    pub success_count: u32,
    pub total_count: u32,
    pub avg_bleu: f64,
    pub avg_latency_ms: f64,
    pub success_rate_pct: f64,
    pub efficiency: f64,
}

impl ModelStats {
    /// @ai:intent Derive statistics entirely from a record sequence
    /// @ai:post no division by zero: empty input yields all-zero stats
    /// @ai:effects pure
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        let total_count = records.len() as u32;
        let successes: Vec<&ScoreRecord> = records.iter().filter(|r| !r.failed).collect();
        let success_count = successes.len() as u32;

        let success_rate_pct = if total_count > 0 {
            f64::from(success_count) / f64::from(total_count) * 100.0
        } else {
            0.0
        };

        let avg_bleu = average(successes.iter().map(|r| r.bleu));
        let avg_latency_ms = average(successes.iter().map(|r| r.latency_ms));

        let efficiency = if avg_latency_ms > 0.0 {
            avg_bleu / (avg_latency_ms / 1000.0)
        } else {
            0.0
        };

        Self {
            success_count,
            total_count,
            avg_bleu,
            avg_latency_ms,
            success_rate_pct,
            efficiency,
        }
    }

    /// @ai:intent Number of failed rows for this model
    /// @ai:effects pure
    pub fn failure_count(&self) -> u32 {
        self.total_count - self.success_count
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
pub(crate) fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// @ai:intent Operational classification of a model, from its success rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Working,
    Partial,
    Failed,
}

impl ModelStatus {
    /// @ai:intent Classify from success rate: 100 working, 0 failed, else partial
    /// @ai:post every rate maps to exactly one status
    /// @ai:effects pure
    pub fn from_success_rate(success_rate_pct: f64) -> Self {
        if success_rate_pct >= 100.0 {
            ModelStatus::Working
        } else if success_rate_pct > 0.0 {
            ModelStatus::Partial
        } else {
            ModelStatus::Failed
        }
    }

    /// @ai:intent Convert status to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Working => "working",
            ModelStatus::Partial => "partial",
            ModelStatus::Failed => "failed",
        }
    }
}

/// @ai:intent Per-model statistics with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    pub stats: ModelStats,
    pub status: ModelStatus,
}

/// @ai:intent Rank entry within the working bucket, fastest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingRank {
    pub rank: u32,
    pub name: String,
    pub avg_latency_ms: f64,
}

/// @ai:intent Partially working model with its failure count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialModel {
    pub name: String,
    pub failures: u32,
}

/// @ai:intent Named latency extreme among working models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelLatency {
    pub name: String,
    pub avg_latency_ms: f64,
}

/// @ai:intent Overall assessment across all models
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub model_count: u32,
    pub operational_rate_pct: f64,
    pub fastest: Option<ModelLatency>,
    pub slowest: Option<ModelLatency>,
    pub avg_working_latency_ms: f64,
}

/// @ai:intent Complete analysis results for one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub timestamp: String,
    pub source: String,
    pub reference_model: String,
    /// All models, sorted by efficiency descending.
    pub ranking: Vec<ModelSummary>,
    /// Fully working models, ranked by average latency ascending.
    pub working: Vec<WorkingRank>,
    pub partial: Vec<PartialModel>,
    pub failed: Vec<String>,
    pub overall: OverallAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_records_example() {
        let records = vec![
            ScoreRecord::success(0.5, 100.0),
            ScoreRecord::success(0.6, 200.0),
            ScoreRecord::success(0.7, 300.0),
            ScoreRecord::failure(),
        ];

        let stats = ModelStats::from_records(&records);
        assert_eq!(stats.success_count, 3);
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.failure_count(), 1);
        assert!((stats.success_rate_pct - 75.0).abs() < 1e-9);
        assert!((stats.avg_bleu - 0.6).abs() < 1e-9);
        assert!((stats.avg_latency_ms - 200.0).abs() < 1e-9);
        assert!((stats.efficiency - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_from_empty_records() {
        let stats = ModelStats::from_records(&[]);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.success_rate_pct, 0.0);
        assert_eq!(stats.avg_bleu, 0.0);
        assert_eq!(stats.efficiency, 0.0);
    }

    #[test]
    fn test_stats_all_failures_have_zero_averages() {
        let records = vec![ScoreRecord::failure(), ScoreRecord::failure()];
        let stats = ModelStats::from_records(&records);
        assert_eq!(stats.success_count, 0);
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.success_rate_pct, 0.0);
        assert_eq!(stats.avg_latency_ms, 0.0);
        assert_eq!(stats.efficiency, 0.0);
    }

    #[test]
    fn test_success_rate_hundred_iff_no_failures() {
        let all_ok = vec![ScoreRecord::success(0.9, 50.0)];
        assert_eq!(ModelStats::from_records(&all_ok).success_rate_pct, 100.0);

        let one_failed = vec![ScoreRecord::success(0.9, 50.0), ScoreRecord::failure()];
        assert!(ModelStats::from_records(&one_failed).success_rate_pct < 100.0);
    }

    #[test]
    fn test_status_partition() {
        assert_eq!(ModelStatus::from_success_rate(100.0), ModelStatus::Working);
        assert_eq!(ModelStatus::from_success_rate(99.9), ModelStatus::Partial);
        assert_eq!(ModelStatus::from_success_rate(0.1), ModelStatus::Partial);
        assert_eq!(ModelStatus::from_success_rate(0.0), ModelStatus::Failed);
    }

    #[test]
    fn test_average() {
        let values = vec![10.0, 20.0, 30.0];
        assert!((average(values.into_iter()) - 20.0).abs() < 1e-9);
        assert_eq!(average(std::iter::empty()), 0.0);
    }
}
