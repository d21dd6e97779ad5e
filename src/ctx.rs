use crate::config::DeltaConfig;
use crate::corpus::{AuthorLabel, CorpusStore, TokenSequence};
use crate::features::FeatureSet;
use crate::scores::{CorpusStats, DeltaScore, FrequencyProfile, ZScoreVector};

/// State of one analysis run, filled in stage by stage.
pub struct Ctx<'a> {
    pub store: &'a dyn CorpusStore,
    pub config: DeltaConfig,
    pub candidates: Vec<AuthorLabel>,
    pub candidate_tokens: Vec<&'a TokenSequence>,
    pub unknown_tokens: Option<&'a TokenSequence>,
    pub feature_set: Option<FeatureSet>,
    pub candidate_profiles: Vec<FrequencyProfile>,
    pub unknown_profile: Option<FrequencyProfile>,
    pub stats: Option<CorpusStats>,
    pub excluded: Vec<String>,
    pub candidate_zscores: Vec<ZScoreVector>,
    pub unknown_zscores: Option<ZScoreVector>,
    pub ranking: Vec<DeltaScore>,
    pub warnings: Vec<String>,
}

impl<'a> Ctx<'a> {
    pub fn new(store: &'a dyn CorpusStore, candidates: Vec<AuthorLabel>, config: DeltaConfig) -> Self {
        Self {
            store,
            config,
            candidates,
            candidate_tokens: Vec::new(),
            unknown_tokens: None,
            feature_set: None,
            candidate_profiles: Vec::new(),
            unknown_profile: None,
            stats: None,
            excluded: Vec::new(),
            candidate_zscores: Vec::new(),
            unknown_zscores: None,
            ranking: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn unknown_label(&self) -> &str {
        &self.config.unknown_label
    }
}
