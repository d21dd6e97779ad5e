use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::delta::rank_candidates;

pub struct Stage5Delta;

impl Stage5Delta {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Delta {
    fn name(&self) -> &'static str {
        "stage5_delta"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let unknown = ctx
            .unknown_zscores
            .as_ref()
            .context("unknown z-scores missing before delta")?;
        let ranking = rank_candidates(unknown, &ctx.candidate_zscores)?;

        if let Some(best) = ranking.first() {
            info!(
                best = %best.author,
                delta = best.delta,
                candidates = ranking.len(),
                "delta_ranking_ready"
            );
        }
        ctx.ranking = ranking;
        Ok(())
    }
}
