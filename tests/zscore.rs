use stylodelta::features::{Feature, FeatureSet};
use stylodelta::scores::zscore::{standardize, zscore_vector};
use stylodelta::scores::{CorpusStats, FeatureStatistic, FrequencyProfile};
use stylodelta::{DegeneratePolicy, DeltaError};

fn fixture() -> (FeatureSet, CorpusStats, FrequencyProfile) {
    let features = FeatureSet::new(vec![
        Feature {
            word: "the".to_string(),
            count: 10,
        },
        Feature {
            word: "and".to_string(),
            count: 6,
        },
    ]);
    let stats = CorpusStats {
        features: vec![
            FeatureStatistic {
                mean: 0.05,
                std_dev: 0.0,
            },
            FeatureStatistic {
                mean: 0.02,
                std_dev: 0.01,
            },
        ],
    };
    let profile = FrequencyProfile {
        entity: "unknown".to_string(),
        total_tokens: 100,
        freqs: vec![0.05, 0.04],
    };
    (features, stats, profile)
}

#[test]
fn standardize_basic() {
    let stat = FeatureStatistic {
        mean: 0.02,
        std_dev: 0.01,
    };
    let z = standardize(0.035, &stat, "and").unwrap();
    assert!((z - 1.5).abs() < 1e-9);
}

#[test]
fn standardize_refuses_zero_std_dev() {
    let stat = FeatureStatistic {
        mean: 0.02,
        std_dev: 0.0,
    };
    assert_eq!(
        standardize(0.02, &stat, "the").unwrap_err(),
        DeltaError::DegenerateFeature {
            feature: "the".to_string()
        }
    );
}

#[test]
fn exclude_policy_leaves_gap() {
    let (features, stats, profile) = fixture();
    let z = zscore_vector(&profile, &features, &stats, DegeneratePolicy::Exclude).unwrap();
    assert_eq!(z.entity, "unknown");
    assert_eq!(z.scores[0], None);
    assert!((z.scores[1].unwrap() - 2.0).abs() < 1e-9);
    assert_eq!(z.scored_len(), 1);
}

#[test]
fn zero_policy_scores_zero() {
    let (features, stats, profile) = fixture();
    let z = zscore_vector(&profile, &features, &stats, DegeneratePolicy::Zero).unwrap();
    assert_eq!(z.scores[0], Some(0.0));
    assert_eq!(z.scored_len(), 2);
}

#[test]
fn fail_policy_names_feature() {
    let (features, stats, profile) = fixture();
    let err = zscore_vector(&profile, &features, &stats, DegeneratePolicy::Fail).unwrap_err();
    assert_eq!(
        err,
        DeltaError::DegenerateFeature {
            feature: "the".to_string()
        }
    );
}

#[test]
fn misaligned_profile_rejected() {
    let (features, stats, mut profile) = fixture();
    profile.freqs.pop();
    assert!(matches!(
        zscore_vector(&profile, &features, &stats, DegeneratePolicy::Exclude),
        Err(DeltaError::LengthMismatch { .. })
    ));
}
