//! @ai:module:intent BLEU scoring of candidate translations
//! @ai:module:layer domain
//! @ai:module:public_api Tokenizer, BleuScorer, score_translations

pub mod bleu;
pub mod ngram;
pub mod tokenizer;

pub use bleu::{BleuScorer, BleuScorerTrait, DEFAULT_MAX_ORDER};
pub use ngram::{ngram_counts, ngrams};
pub use tokenizer::Tokenizer;

use crate::dataset::TranslationSet;
use crate::metrics::{FailureDetectorTrait, ScoreRecord};
use std::collections::HashMap;

/// @ai:intent Score every candidate in a dataset against its row's reference
/// @ai:post every model has one record per row; failed rows carry no score
/// @ai:effects pure
pub fn score_translations<S, F>(
    set: &TranslationSet,
    scorer: &S,
    detector: &F,
) -> HashMap<String, Vec<ScoreRecord>>
where
    S: BleuScorerTrait,
    F: FailureDetectorTrait,
{
    let mut records: HashMap<String, Vec<ScoreRecord>> = set
        .models
        .iter()
        .map(|m| (m.clone(), Vec::with_capacity(set.rows.len())))
        .collect();

    for row in &set.rows {
        for candidate in &row.candidates {
            let record = if detector.is_failure(&candidate.text, candidate.latency_ms) {
                ScoreRecord::failure()
            } else {
                let bleu = scorer.score(&candidate.text, &row.reference);
                ScoreRecord::success(bleu, candidate.latency_ms)
            };

            if let Some(model_records) = records.get_mut(&candidate.model) {
                model_records.push(record);
            }
        }
    }

    records
}
