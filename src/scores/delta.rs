use crate::error::DeltaError;
use crate::scores::{DeltaScore, ZScoreVector};

/// Mean absolute z-score difference over the features scored in both vectors.
/// With nothing to score the delta is 0.
pub fn delta_score(unknown: &ZScoreVector, candidate: &ZScoreVector) -> Result<f64, DeltaError> {
    if unknown.scores.len() != candidate.scores.len() {
        return Err(DeltaError::LengthMismatch {
            expected: unknown.scores.len(),
            found: candidate.scores.len(),
        });
    }

    let mut sum = 0.0f64;
    let mut scored = 0usize;
    for (u, c) in unknown.scores.iter().zip(&candidate.scores) {
        if let (Some(u), Some(c)) = (u, c) {
            sum += (u - c).abs();
            scored += 1;
        }
    }
    if scored == 0 {
        return Ok(0.0);
    }

    let delta = sum / scored as f64;
    if !delta.is_finite() {
        return Err(DeltaError::NonFinite {
            stage: "delta",
            detail: format!("candidate '{}'", candidate.entity),
        });
    }
    Ok(delta)
}

/// Candidates ordered by ascending delta. Equal deltas keep input order.
pub fn rank_candidates(
    unknown: &ZScoreVector,
    candidates: &[ZScoreVector],
) -> Result<Vec<DeltaScore>, DeltaError> {
    let mut ranking = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        ranking.push(DeltaScore {
            author: candidate.entity.clone(),
            delta: delta_score(unknown, candidate)?,
        });
    }
    ranking.sort_by(|a, b| a.delta.total_cmp(&b.delta));
    Ok(ranking)
}
