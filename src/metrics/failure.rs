//! @ai:module:intent Row failure detection from configurable sentinel patterns
//! @ai:module:layer domain
//! @ai:module:public_api FailureDetector
//! @ai:module:stateless true

/// @ai:intent Trait for row failure detection
pub trait FailureDetectorTrait: Send + Sync {
    /// @ai:intent Decide whether a candidate row counts as a failure
    fn is_failure(&self, candidate: &str, latency_ms: f64) -> bool;
}

/// @ai:intent Detects failed rows by sentinel substring, emptiness, or zero latency
///
/// The sentinel list is data, not logic: it comes from configuration so the
/// detection policy can change without touching the aggregation code.
pub struct FailureDetector {
    sentinels: Vec<String>,
}

impl FailureDetector {
    /// @ai:intent Create a detector with the given sentinel patterns
    /// @ai:effects pure
    pub fn new(sentinels: Vec<String>) -> Self {
        Self { sentinels }
    }

    /// @ai:intent Sentinel patterns this detector matches
    /// @ai:effects pure
    pub fn sentinels(&self) -> &[String] {
        &self.sentinels
    }
}

impl FailureDetectorTrait for FailureDetector {
    /// @ai:intent A row fails on any sentinel match, empty candidate, or zero latency
    /// @ai:effects pure
    fn is_failure(&self, candidate: &str, latency_ms: f64) -> bool {
        if candidate.trim().is_empty() || latency_ms == 0.0 {
            return true;
        }

        self.sentinels.iter().any(|s| candidate.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailureConfig;

    fn default_detector() -> FailureDetector {
        FailureDetector::new(FailureConfig::default().sentinels)
    }

    #[test]
    fn test_sentinel_substrings_fail() {
        let detector = default_detector();
        assert!(detector.is_failure("[Mock] canned translation", 120.0));
        assert!(detector.is_failure("API call failed: timeout", 120.0));
        assert!(detector.is_failure("El gato... Translation truncated", 120.0));
    }

    #[test]
    fn test_empty_candidate_fails() {
        let detector = default_detector();
        assert!(detector.is_failure("", 120.0));
        assert!(detector.is_failure("   \t ", 120.0));
    }

    #[test]
    fn test_zero_latency_fails() {
        let detector = default_detector();
        assert!(detector.is_failure("el gato se sentó", 0.0));
    }

    #[test]
    fn test_normal_row_passes() {
        let detector = default_detector();
        assert!(!detector.is_failure("el gato se sentó en la alfombra", 842.0));
    }

    #[test]
    fn test_custom_sentinels_are_data_not_logic() {
        let detector = FailureDetector::new(vec!["<placeholder>".to_string()]);
        assert!(detector.is_failure("output <placeholder> here", 120.0));
        // Default markers are not special once the policy is replaced.
        assert!(!detector.is_failure("API call failed: timeout", 120.0));
    }
}
