//! @ai:module:intent N-gram windowing and occurrence counting
//! @ai:module:layer domain
//! @ai:module:public_api ngrams, ngram_counts
//! @ai:module:stateless true

use std::collections::HashMap;

/// @ai:intent Yield every full n-token window of a token sequence in order
/// @ai:pre n >= 1
/// @ai:post empty when tokens.len() < n
/// @ai:effects pure
pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = &[String]> {
    tokens.windows(n)
}

/// @ai:intent Count occurrences of each distinct n-gram in a token sequence
/// @ai:effects pure
pub fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], u32> {
    if n == 0 || tokens.len() < n {
        return HashMap::new();
    }

    let mut counts: HashMap<&[String], u32> = HashMap::new();

    for gram in ngrams(tokens, n) {
        *counts.entry(gram).or_insert(0) += 1;
    }

    counts
}
