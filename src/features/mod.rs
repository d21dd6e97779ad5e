mod select;

pub use select::{pooled_counts, select_features};

/// One selected word type and its count in the pooled candidate corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub word: String,
    pub count: usize,
}

/// Most frequent word types of the pooled candidate corpus, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.word.as_str())
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.features.iter().position(|f| f.word == word)
    }
}
