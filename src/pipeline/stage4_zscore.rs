use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::DegeneratePolicy;
use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::zscore::zscore_vector;

pub struct Stage4Zscore;

impl Stage4Zscore {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Zscore {
    fn name(&self) -> &'static str {
        "stage4_zscore"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let features = ctx
            .feature_set
            .as_ref()
            .context("feature set missing before z-scores")?;
        let stats = ctx.stats.as_ref().context("corpus norm missing before z-scores")?;
        let unknown_profile = ctx
            .unknown_profile
            .as_ref()
            .context("unknown profile missing before z-scores")?;
        let policy = ctx.config.degenerate_policy;

        let mut candidate_zscores = Vec::with_capacity(ctx.candidate_profiles.len());
        for profile in &ctx.candidate_profiles {
            candidate_zscores.push(zscore_vector(profile, features, stats, policy)?);
        }
        let unknown_zscores = zscore_vector(unknown_profile, features, stats, policy)?;

        let mut excluded = Vec::new();
        let mut warnings = Vec::new();
        for i in stats.degenerate_indices() {
            let Some(feature) = features.get(i) else {
                continue;
            };
            match policy {
                DegeneratePolicy::Exclude => {
                    warn!(feature = %feature.word, "feature excluded from scoring");
                    warnings.push(format!(
                        "feature '{}' has zero standard deviation; excluded from scoring",
                        feature.word
                    ));
                    excluded.push(feature.word.clone());
                }
                DegeneratePolicy::Zero => {
                    warnings.push(format!(
                        "feature '{}' has zero standard deviation; z-score set to 0",
                        feature.word
                    ));
                }
                DegeneratePolicy::Fail => {}
            }
        }

        info!(
            scored = unknown_zscores.scored_len(),
            excluded = excluded.len(),
            "zscores_ready"
        );
        ctx.candidate_zscores = candidate_zscores;
        ctx.unknown_zscores = Some(unknown_zscores);
        ctx.excluded = excluded;
        ctx.warnings.extend(warnings);
        Ok(())
    }
}
