use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::TokenSequence;
use crate::ctx::Ctx;
use crate::error::DeltaError;
use crate::features::FeatureSet;
use crate::pipeline::Stage;
use crate::scores::FrequencyProfile;
use crate::scores::profile::profile_entity;

#[cfg(feature = "mt")]
use rayon::prelude::*;

pub struct Stage2Profile;

impl Stage2Profile {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Profile {
    fn name(&self) -> &'static str {
        "stage2_profile"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let features = ctx
            .feature_set
            .as_ref()
            .context("feature set missing before profiling")?;
        let unknown_tokens = ctx
            .unknown_tokens
            .context("unknown sample missing before profiling")?;

        let candidate_profiles = profile_candidates(
            &ctx.candidates,
            &ctx.candidate_tokens,
            features,
            ctx.config.threads,
        )?;
        let unknown_profile = profile_entity(&ctx.config.unknown_label, unknown_tokens, features)?;

        info!(
            candidates = candidate_profiles.len(),
            features = features.len(),
            "frequency_profiles_ready"
        );
        ctx.candidate_profiles = candidate_profiles;
        ctx.unknown_profile = Some(unknown_profile);
        Ok(())
    }
}

fn profile_candidates(
    labels: &[String],
    tokens: &[&TokenSequence],
    features: &FeatureSet,
    threads: usize,
) -> Result<Vec<FrequencyProfile>> {
    if labels.len() != tokens.len() {
        return Err(DeltaError::LengthMismatch {
            expected: labels.len(),
            found: tokens.len(),
        }
        .into());
    }

    profile_all(labels, tokens, features, threads)
}

#[cfg(feature = "mt")]
fn profile_all(
    labels: &[String],
    tokens: &[&TokenSequence],
    features: &FeatureSet,
    threads: usize,
) -> Result<Vec<FrequencyProfile>> {
    let run = || {
        labels
            .par_iter()
            .zip(tokens.par_iter())
            .map(|(label, seq)| profile_entity(label, seq, features))
            .collect::<Result<Vec<_>, DeltaError>>()
    };
    let profiles = if threads == 0 {
        run()?
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        pool.install(run)?
    };
    Ok(profiles)
}

#[cfg(not(feature = "mt"))]
fn profile_all(
    labels: &[String],
    tokens: &[&TokenSequence],
    features: &FeatureSet,
    _threads: usize,
) -> Result<Vec<FrequencyProfile>> {
    let mut profiles = Vec::with_capacity(labels.len());
    for (label, seq) in labels.iter().zip(tokens) {
        profiles.push(profile_entity(label, seq, features)?);
    }
    Ok(profiles)
}
