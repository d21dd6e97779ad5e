use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::normalize::normalize;

pub struct Stage3Normalize;

impl Stage3Normalize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Normalize {
    fn name(&self) -> &'static str {
        "stage3_normalize"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let n_features = ctx
            .feature_set
            .as_ref()
            .context("feature set missing before normalization")?
            .len();
        let stats = normalize(&ctx.candidate_profiles, n_features)?;

        let degenerate = stats.degenerate_indices();
        if !degenerate.is_empty() {
            warn!(
                degenerate = degenerate.len(),
                policy = ctx.config.degenerate_policy.as_str(),
                "zero standard deviation features"
            );
        }

        info!(features = stats.len(), "corpus_norm_ready");
        ctx.stats = Some(stats);
        Ok(())
    }
}
