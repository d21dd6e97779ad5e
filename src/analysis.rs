use anyhow::{Context, Result};

use crate::config::DeltaConfig;
use crate::corpus::{AuthorLabel, CorpusStore};
use crate::ctx::Ctx;
use crate::features::FeatureSet;
use crate::pipeline::Pipeline;
use crate::scores::{CorpusStats, DeltaScore, EntitySummary, ZScoreVector};

/// Everything a Delta run produced, ranking first.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaAnalysis {
    pub config: DeltaConfig,
    pub candidates: Vec<EntitySummary>,
    pub unknown: EntitySummary,
    pub feature_set: FeatureSet,
    pub stats: CorpusStats,
    /// Features kept in the feature set but left out of scoring.
    pub excluded: Vec<String>,
    pub candidate_zscores: Vec<ZScoreVector>,
    pub unknown_zscores: ZScoreVector,
    /// Candidates by ascending delta.
    pub ranking: Vec<DeltaScore>,
    pub warnings: Vec<String>,
}

impl DeltaAnalysis {
    /// Best-matching candidate, if any.
    pub fn attributed(&self) -> Option<&DeltaScore> {
        self.ranking.first()
    }

    pub fn delta_for(&self, author: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|d| d.author == author)
            .map(|d| d.delta)
    }

    pub fn zscores_for(&self, author: &str) -> Option<&ZScoreVector> {
        self.candidate_zscores.iter().find(|z| z.entity == author)
    }
}

/// Scores the store's unknown sample against `candidates` in the given order.
pub fn run_delta_analysis(
    store: &dyn CorpusStore,
    candidates: &[AuthorLabel],
    config: &DeltaConfig,
) -> Result<DeltaAnalysis> {
    config.validate()?;
    let mut ctx = Ctx::new(store, candidates.to_vec(), config.clone());
    Pipeline::delta().run(&mut ctx)?;
    into_analysis(ctx)
}

fn into_analysis(ctx: Ctx<'_>) -> Result<DeltaAnalysis> {
    let candidates = ctx
        .candidates
        .iter()
        .zip(&ctx.candidate_tokens)
        .map(|(label, seq)| EntitySummary {
            label: label.clone(),
            tokens: seq.len(),
        })
        .collect();
    let unknown = EntitySummary {
        label: ctx.config.unknown_label.clone(),
        tokens: ctx.unknown_tokens.map(|t| t.len()).unwrap_or(0),
    };

    Ok(DeltaAnalysis {
        candidates,
        unknown,
        feature_set: ctx.feature_set.context("feature set missing")?,
        stats: ctx.stats.context("corpus norm missing")?,
        excluded: ctx.excluded,
        candidate_zscores: ctx.candidate_zscores,
        unknown_zscores: ctx.unknown_zscores.context("unknown z-scores missing")?,
        ranking: ctx.ranking,
        warnings: ctx.warnings,
        config: ctx.config,
    })
}
