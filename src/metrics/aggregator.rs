//! @ai:module:intent Statistical aggregation, classification and ranking of model scores
//! @ai:module:layer application
//! @ai:module:public_api StatsAggregator
//! @ai:module:stateless true

use crate::metrics::types::{
    average, AnalysisResults, ModelLatency, ModelStats, ModelStatus, ModelSummary,
    OverallAssessment, PartialModel, ScoreRecord, WorkingRank,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// @ai:intent Trait for score aggregation
pub trait StatsAggregatorTrait: Send + Sync {
    /// @ai:intent Fold per-model records into classified, ranked results
    fn aggregate(
        &self,
        records: &HashMap<String, Vec<ScoreRecord>>,
        source: &str,
        reference_model: &str,
    ) -> AnalysisResults;
}

/// @ai:intent Aggregates score records into per-model statistics and rankings
pub struct StatsAggregator;

impl StatsAggregator {
    /// @ai:intent Create a new aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Build summaries in deterministic name order
    /// @ai:effects pure
    fn summarize(records: &HashMap<String, Vec<ScoreRecord>>) -> Vec<ModelSummary> {
        let mut names: Vec<&String> = records.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| {
                let stats = ModelStats::from_records(&records[name]);
                ModelSummary {
                    name: name.clone(),
                    stats,
                    status: ModelStatus::from_success_rate(stats.success_rate_pct),
                }
            })
            .collect()
    }

    /// @ai:intent Rank working models by average latency, fastest first
    /// @ai:effects pure
    fn rank_working(summaries: &[ModelSummary]) -> Vec<WorkingRank> {
        let mut working: Vec<&ModelSummary> = summaries
            .iter()
            .filter(|s| s.status == ModelStatus::Working)
            .collect();

        working.sort_by(|a, b| {
            a.stats
                .avg_latency_ms
                .partial_cmp(&b.stats.avg_latency_ms)
                .unwrap_or(Ordering::Equal)
        });

        working
            .into_iter()
            .enumerate()
            .map(|(i, s)| WorkingRank {
                rank: i as u32 + 1,
                name: s.name.clone(),
                avg_latency_ms: s.stats.avg_latency_ms,
            })
            .collect()
    }

    /// @ai:intent Overall assessment across the working bucket
    /// @ai:effects pure
    fn assess(summaries: &[ModelSummary], working: &[WorkingRank]) -> OverallAssessment {
        let model_count = summaries.len() as u32;

        let operational_rate_pct = if model_count > 0 {
            working.len() as f64 / f64::from(model_count) * 100.0
        } else {
            0.0
        };

        // Working ranking is latency-sorted, so the extremes are the ends.
        let fastest = working.first().map(|w| ModelLatency {
            name: w.name.clone(),
            avg_latency_ms: w.avg_latency_ms,
        });
        let slowest = working.last().map(|w| ModelLatency {
            name: w.name.clone(),
            avg_latency_ms: w.avg_latency_ms,
        });

        let avg_working_latency_ms = average(working.iter().map(|w| w.avg_latency_ms));

        OverallAssessment {
            model_count,
            operational_rate_pct,
            fastest,
            slowest,
            avg_working_latency_ms,
        }
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAggregatorTrait for StatsAggregator {
    /// @ai:intent Aggregate records into classified, ranked results
    /// @ai:post every model appears in exactly one of working/partial/failed
    /// @ai:effects pure
    fn aggregate(
        &self,
        records: &HashMap<String, Vec<ScoreRecord>>,
        source: &str,
        reference_model: &str,
    ) -> AnalysisResults {
        let mut ranking = Self::summarize(records);
        let working = Self::rank_working(&ranking);

        let partial: Vec<PartialModel> = ranking
            .iter()
            .filter(|s| s.status == ModelStatus::Partial)
            .map(|s| PartialModel {
                name: s.name.clone(),
                failures: s.stats.failure_count(),
            })
            .collect();

        let failed: Vec<String> = ranking
            .iter()
            .filter(|s| s.status == ModelStatus::Failed)
            .map(|s| s.name.clone())
            .collect();

        let overall = Self::assess(&ranking, &working);

        // Main report order: efficiency descending. Stable sort keeps the
        // prior name order for ties.
        ranking.sort_by(|a, b| {
            b.stats
                .efficiency
                .partial_cmp(&a.stats.efficiency)
                .unwrap_or(Ordering::Equal)
        });

        AnalysisResults {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: source.to_string(),
            reference_model: reference_model.to_string(),
            ranking,
            working,
            partial,
            failed,
            overall,
        }
    }
}
