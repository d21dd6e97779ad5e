use crate::config::DegeneratePolicy;
use crate::error::DeltaError;
use crate::features::FeatureSet;
use crate::math::stats::z_score;
use crate::scores::{CorpusStats, FeatureStatistic, FrequencyProfile, ZScoreVector};

/// `(value - mean) / std_dev`, refusing a zero standard deviation.
pub fn standardize(value: f64, stat: &FeatureStatistic, feature: &str) -> Result<f64, DeltaError> {
    let z = z_score(value, stat.mean, stat.std_dev).ok_or_else(|| {
        DeltaError::DegenerateFeature {
            feature: feature.to_string(),
        }
    })?;
    if !z.is_finite() {
        return Err(DeltaError::NonFinite {
            stage: "zscore",
            detail: format!("feature '{}' value={}", feature, value),
        });
    }
    Ok(z)
}

/// Z-score vector for one entity. Degenerate features are resolved here and
/// nowhere else, according to `policy`.
pub fn zscore_vector(
    profile: &FrequencyProfile,
    features: &FeatureSet,
    stats: &CorpusStats,
    policy: DegeneratePolicy,
) -> Result<ZScoreVector, DeltaError> {
    if profile.freqs.len() != features.len() {
        return Err(DeltaError::LengthMismatch {
            expected: features.len(),
            found: profile.freqs.len(),
        });
    }
    if stats.len() != features.len() {
        return Err(DeltaError::LengthMismatch {
            expected: features.len(),
            found: stats.len(),
        });
    }

    let mut scores = Vec::with_capacity(features.len());
    for ((feature, &value), stat) in features.iter().zip(&profile.freqs).zip(&stats.features) {
        let z = match standardize(value, stat, &feature.word) {
            Ok(z) => Some(z),
            Err(DeltaError::DegenerateFeature { feature }) => match policy {
                DegeneratePolicy::Exclude => None,
                DegeneratePolicy::Zero => Some(0.0),
                DegeneratePolicy::Fail => return Err(DeltaError::DegenerateFeature { feature }),
            },
            Err(err) => return Err(err),
        };
        scores.push(z);
    }

    Ok(ZScoreVector {
        entity: profile.entity.clone(),
        scores,
    })
}
