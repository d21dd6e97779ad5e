use crate::error::DeltaError;
use crate::math::stats::{is_constant, mean, sample_std_dev};
use crate::scores::{CorpusStats, FeatureStatistic, FrequencyProfile};

/// Per-feature mean and sample standard deviation over candidate profiles.
///
/// Only candidate profiles belong here; the unknown sample never contributes
/// to the corpus norm.
pub fn normalize(
    candidates: &[FrequencyProfile],
    n_features: usize,
) -> Result<CorpusStats, DeltaError> {
    if candidates.len() < 2 {
        return Err(DeltaError::InsufficientCandidates {
            found: candidates.len(),
        });
    }
    for profile in candidates {
        if profile.freqs.len() != n_features {
            return Err(DeltaError::LengthMismatch {
                expected: n_features,
                found: profile.freqs.len(),
            });
        }
    }

    let mut column = vec![0.0f64; candidates.len()];
    let mut features = Vec::with_capacity(n_features);
    for i in 0..n_features {
        for (slot, profile) in column.iter_mut().zip(candidates) {
            *slot = profile.freqs[i];
        }
        let (m, sd) = if is_constant(&column) {
            // summing then dividing can land an ulp off a shared value
            (column[0], 0.0)
        } else {
            let m = mean(&column);
            let sd = sample_std_dev(&column, m).ok_or(DeltaError::InsufficientCandidates {
                found: candidates.len(),
            })?;
            (m, sd)
        };
        if !m.is_finite() || !sd.is_finite() {
            return Err(DeltaError::NonFinite {
                stage: "normalize",
                detail: format!("feature #{} mean={} sd={}", i, m, sd),
            });
        }
        features.push(FeatureStatistic {
            mean: m,
            std_dev: sd,
        });
    }

    Ok(CorpusStats { features })
}
