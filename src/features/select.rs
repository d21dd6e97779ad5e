use indexmap::IndexMap;

use crate::corpus::TokenSequence;
use crate::features::{Feature, FeatureSet};

/// Counts every distinct token across `sequences` concatenated in order.
/// Entries keep the position at which the token was first seen.
pub fn pooled_counts<'a>(sequences: &[&'a TokenSequence]) -> IndexMap<&'a str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for seq in sequences.iter().copied() {
        for token in seq.iter() {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Top `n` word types by pooled count. Equal counts keep first-seen order.
pub fn select_features(sequences: &[&TokenSequence], n: usize) -> FeatureSet {
    let mut ranked: Vec<(&str, usize)> = pooled_counts(sequences).into_iter().collect();
    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    FeatureSet::new(
        ranked
            .into_iter()
            .map(|(word, count)| Feature {
                word: word.to_string(),
                count,
            })
            .collect(),
    )
}
