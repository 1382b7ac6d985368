//! @ai:module:intent BLEU score computation between candidate and reference text
//! @ai:module:layer domain
//! @ai:module:public_api BleuScorer
//! @ai:module:stateless true

use crate::scoring::ngram::ngram_counts;
use crate::scoring::tokenizer::Tokenizer;

/// Highest n-gram order used for the geometric mean.
pub const DEFAULT_MAX_ORDER: usize = 4;

/// @ai:intent Trait for candidate-vs-reference scoring
pub trait BleuScorerTrait: Send + Sync {
    /// @ai:intent Score a candidate translation against a reference
    fn score(&self, candidate: &str, reference: &str) -> f64;
}

/// @ai:intent Computes unsmoothed BLEU with brevity penalty
///
/// No smoothing is applied: a zero precision at any order in 1..=max_order
/// zeroes the whole score.
pub struct BleuScorer {
    tokenizer: Tokenizer,
    max_order: usize,
}

impl BleuScorer {
    /// @ai:intent Create a scorer using n-gram orders 1..=4
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::with_max_order(DEFAULT_MAX_ORDER)
    }

    /// @ai:intent Create a scorer with a custom highest n-gram order
    /// @ai:pre max_order >= 1
    /// @ai:effects pure
    pub fn with_max_order(max_order: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            max_order,
        }
    }

    /// @ai:intent Modified n-gram precision with reference-clipped counts
    /// @ai:post 0.0 when the candidate has no n-grams at this order
    /// @ai:effects pure
    fn modified_precision(candidate: &[String], reference: &[String], n: usize) -> f64 {
        let cand_counts = ngram_counts(candidate, n);

        if cand_counts.is_empty() {
            return 0.0;
        }

        let ref_counts = ngram_counts(reference, n);

        let total: u32 = cand_counts.values().sum();
        let clipped: u32 = cand_counts
            .iter()
            .map(|(gram, &count)| count.min(ref_counts.get(gram).copied().unwrap_or(0)))
            .sum();

        f64::from(clipped) / f64::from(total)
    }

    /// @ai:intent Brevity penalty discouraging under-generation
    /// @ai:post 1.0 when the candidate is at least reference length
    /// @ai:effects pure
    fn brevity_penalty(cand_len: usize, ref_len: usize) -> f64 {
        if cand_len > ref_len {
            1.0
        } else if cand_len == 0 {
            // Unreachable after the empty-token check, kept as a guard.
            0.0
        } else {
            (1.0 - ref_len as f64 / cand_len as f64).exp()
        }
    }
}

impl Default for BleuScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl BleuScorerTrait for BleuScorer {
    /// @ai:intent Score a candidate against a reference
    /// @ai:post result is in [0.0, 1.0]; degenerate input yields 0.0, never an error
    /// @ai:effects pure
    fn score(&self, candidate: &str, reference: &str) -> f64 {
        if candidate.trim().is_empty() || reference.trim().is_empty() {
            return 0.0;
        }

        let cand_tokens = self.tokenizer.tokenize(candidate);
        let ref_tokens = self.tokenizer.tokenize(reference);

        if cand_tokens.is_empty() || ref_tokens.is_empty() {
            return 0.0;
        }

        let bp = Self::brevity_penalty(cand_tokens.len(), ref_tokens.len());

        let mut log_precision_sum = 0.0;

        for n in 1..=self.max_order {
            let precision = Self::modified_precision(&cand_tokens, &ref_tokens, n);

            if precision <= 0.0 {
                // Unsmoothed geometric mean: one zero order zeroes the score.
                return 0.0;
            }

            log_precision_sum += precision.ln();
        }

        let geo_mean = (log_precision_sum / self.max_order as f64).exp();
        bp * geo_mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_identical_text_scores_one() {
        let scorer = BleuScorer::new();
        let text = "The cat sat on the mat";
        assert!((scorer.score(text, text) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_candidate_or_reference_scores_zero() {
        let scorer = BleuScorer::new();
        assert_eq!(scorer.score("", "The cat sat on the mat"), 0.0);
        assert_eq!(scorer.score("The cat sat on the mat", ""), 0.0);
        assert_eq!(scorer.score("   \n ", "The cat sat on the mat"), 0.0);
    }

    #[test]
    fn test_no_fourgram_overlap_scores_zero() {
        let scorer = BleuScorer::new();
        // Shares "the" (unigram precision > 0) but no 4-gram overlap.
        let score = scorer.score("A dog ran in the park", "The cat sat on the mat");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_is_normalization_insensitive() {
        let scorer = BleuScorer::new();
        let score = scorer.score("the  CAT sat\ton the mat", "The cat sat on the mat");
        assert!((score - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_score_in_unit_interval() {
        let scorer = BleuScorer::new();
        let cases = [
            ("the cat sat on the mat", "the cat sat on the mat today"),
            ("the cat sat on the", "the cat sat on the mat"),
            ("a b c d e f", "a b c d x y"),
            ("the the the the", "the cat sat on the mat"),
        ];

        for (candidate, reference) in cases {
            let score = scorer.score(candidate, reference);
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_repeated_tokens_are_clipped() {
        let cand = vec!["the".to_string(); 4];
        let reference: Vec<String> = ["the", "cat", "sat", "on", "the", "mat"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        // "the" appears twice in the reference, so 4 candidate occurrences
        // clip to 2 out of 4.
        let p1 = BleuScorer::modified_precision(&cand, &reference, 1);
        assert!((p1 - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_precision_zero_without_candidate_ngrams() {
        let cand = vec!["gato".to_string()];
        let reference = vec!["gato".to_string(), "negro".to_string()];
        assert_eq!(BleuScorer::modified_precision(&cand, &reference, 2), 0.0);
    }

    #[test]
    fn test_brevity_penalty_monotonic_below_reference_length() {
        let ref_len = 10;
        let mut previous = 0.0;

        for cand_len in 1..=ref_len {
            let bp = BleuScorer::brevity_penalty(cand_len, ref_len);
            assert!(bp > previous, "bp not increasing at len {cand_len}");
            previous = bp;
        }

        assert!((previous - 1.0).abs() < EPSILON);
        assert_eq!(BleuScorer::brevity_penalty(ref_len + 1, ref_len), 1.0);
    }

    #[test]
    fn test_brevity_penalty_zero_length_guard() {
        assert_eq!(BleuScorer::brevity_penalty(0, 5), 0.0);
    }

    #[test]
    fn test_longer_candidate_has_no_penalty() {
        let scorer = BleuScorer::new();
        let score = scorer.score(
            "the cat sat on the mat quietly today",
            "the cat sat on the mat",
        );
        // All reference 4-grams are covered; only precision dilution applies.
        assert!(score > 0.0);
        assert!(score < 1.0);
    }
}
