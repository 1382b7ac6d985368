//! @ai:module:intent Row types produced by the CSV adapter
//! @ai:module:layer domain
//! @ai:module:public_api TranslationSet, TranslationRow, CandidateOutput
//! @ai:module:stateless true

/// @ai:intent One model's output for one input row
#[derive(Debug, Clone)]
pub struct CandidateOutput {
    pub model: String,
    pub text: String,
    /// 0.0 when the latency cell was missing or unparseable.
    pub latency_ms: f64,
}

/// @ai:intent One input row: reference text plus every model's candidate
#[derive(Debug, Clone)]
pub struct TranslationRow {
    pub reference: String,
    pub candidates: Vec<CandidateOutput>,
}

/// @ai:intent All rows extracted from one results file
#[derive(Debug, Clone)]
pub struct TranslationSet {
    pub reference_model: String,
    /// Models discovered from the header, reference model excluded.
    pub models: Vec<String>,
    pub rows: Vec<TranslationRow>,
}
