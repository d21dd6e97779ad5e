use std::collections::HashMap;

use indexmap::IndexMap;

use crate::corpus::TokenSequence;
use crate::error::DeltaError;
use crate::features::FeatureSet;
use crate::scores::FrequencyProfile;

/// Relative frequency of every feature in `tokens`.
///
/// An empty feature set needs no division and yields an empty profile even for
/// an empty sequence; otherwise an empty sequence is `InsufficientData`.
pub fn profile_entity(
    entity: &str,
    tokens: &TokenSequence,
    features: &FeatureSet,
) -> Result<FrequencyProfile, DeltaError> {
    if features.is_empty() {
        return Ok(FrequencyProfile {
            entity: entity.to_string(),
            total_tokens: tokens.len(),
            freqs: Vec::new(),
        });
    }
    if tokens.is_empty() {
        return Err(DeltaError::InsufficientData {
            entity: entity.to_string(),
        });
    }

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(features.len());
    for word in features.words() {
        counts.insert(word, 0);
    }
    for token in tokens.iter() {
        if let Some(c) = counts.get_mut(token) {
            *c += 1;
        }
    }

    let total = tokens.len() as f64;
    let freqs = features
        .words()
        .map(|w| counts.get(w).copied().unwrap_or(0) as f64 / total)
        .collect();

    Ok(FrequencyProfile {
        entity: entity.to_string(),
        total_tokens: tokens.len(),
        freqs,
    })
}

/// Relative frequency of every distinct token, in first-seen order.
pub fn relative_frequencies(
    entity: &str,
    tokens: &TokenSequence,
) -> Result<IndexMap<String, f64>, DeltaError> {
    if tokens.is_empty() {
        return Err(DeltaError::InsufficientData {
            entity: entity.to_string(),
        });
    }
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens.iter() {
        *counts.entry(token).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count as f64 / total))
        .collect())
}
