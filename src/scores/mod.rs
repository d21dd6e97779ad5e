pub mod delta;
pub mod normalize;
pub mod profile;
pub mod zscore;

use crate::corpus::AuthorLabel;

/// Relative frequency of each feature in one entity, in feature-set order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyProfile {
    pub entity: AuthorLabel,
    pub total_tokens: usize,
    pub freqs: Vec<f64>,
}

/// Mean-of-means and sample standard deviation of one feature across candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStatistic {
    pub mean: f64,
    pub std_dev: f64,
}

impl FeatureStatistic {
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusStats {
    pub features: Vec<FeatureStatistic>,
}

impl CorpusStats {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn degenerate_indices(&self) -> Vec<usize> {
        self.features
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_degenerate())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Z-scores in feature-set order. `None` marks a feature left out of scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ZScoreVector {
    pub entity: AuthorLabel,
    pub scores: Vec<Option<f64>>,
}

impl ZScoreVector {
    pub fn scored_len(&self) -> usize {
        self.scores.iter().filter(|z| z.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeltaScore {
    pub author: AuthorLabel,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySummary {
    pub label: AuthorLabel,
    pub tokens: usize,
}
