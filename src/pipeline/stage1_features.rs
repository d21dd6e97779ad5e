use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::features::select_features;
use crate::pipeline::Stage;

pub struct Stage1Features;

impl Stage1Features {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Features {
    fn name(&self) -> &'static str {
        "stage1_features"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let requested = ctx.config.feature_count;
        let feature_set = select_features(&ctx.candidate_tokens, requested);

        if feature_set.len() < requested {
            ctx.warnings.push(format!(
                "only {} distinct words in candidate corpus; using {} of {} requested features",
                feature_set.len(),
                feature_set.len(),
                requested
            ));
        }

        info!(
            features = feature_set.len(),
            requested = requested,
            "feature_set_ready"
        );
        ctx.feature_set = Some(feature_set);
        Ok(())
    }
}
