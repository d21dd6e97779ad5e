use stylodelta::DeltaError;
use stylodelta::scores::FrequencyProfile;
use stylodelta::scores::normalize::normalize;

fn profile(entity: &str, freqs: &[f64]) -> FrequencyProfile {
    FrequencyProfile {
        entity: entity.to_string(),
        total_tokens: 100,
        freqs: freqs.to_vec(),
    }
}

#[test]
fn mean_of_means_and_sample_std_dev() {
    let profiles = vec![
        profile("a", &[0.10, 0.02]),
        profile("b", &[0.20, 0.02]),
        profile("c", &[0.30, 0.05]),
    ];
    let stats = normalize(&profiles, 2).unwrap();
    assert_eq!(stats.len(), 2);

    let f0 = stats.features[0];
    assert!((f0.mean - 0.20).abs() < 1e-12);
    assert!((f0.std_dev - 0.10).abs() < 1e-12);

    let f1 = stats.features[1];
    assert!((f1.mean - 0.03).abs() < 1e-12);
    // deviations -0.01, -0.01, 0.02 -> sum sq 0.0006 / 2
    assert!((f1.std_dev - 0.0003f64.sqrt()).abs() < 1e-12);
    assert!(stats.degenerate_indices().is_empty());
}

#[test]
fn identical_frequencies_are_degenerate() {
    let profiles = vec![profile("a", &[0.5, 0.1]), profile("b", &[0.5, 0.3])];
    let stats = normalize(&profiles, 2).unwrap();
    assert!(stats.features[0].is_degenerate());
    assert_eq!(stats.degenerate_indices(), vec![0]);
}

#[test]
fn requires_two_candidates() {
    let err = normalize(&[profile("a", &[0.5])], 1).unwrap_err();
    assert_eq!(err, DeltaError::InsufficientCandidates { found: 1 });
    let err = normalize(&[], 0).unwrap_err();
    assert_eq!(err, DeltaError::InsufficientCandidates { found: 0 });
}

#[test]
fn rejects_misaligned_profiles() {
    let profiles = vec![profile("a", &[0.5, 0.1]), profile("b", &[0.5])];
    assert!(matches!(
        normalize(&profiles, 2),
        Err(DeltaError::LengthMismatch { expected: 2, found: 1 })
    ));
}

#[test]
fn order_of_candidates_does_not_matter() {
    let a = profile("a", &[0.11, 0.07, 0.001]);
    let b = profile("b", &[0.13, 0.02, 0.004]);
    let c = profile("c", &[0.09, 0.05, 0.0]);
    let s1 = normalize(&[a.clone(), b.clone(), c.clone()], 3).unwrap();
    let s2 = normalize(&[c, a, b], 3).unwrap();
    for (x, y) in s1.features.iter().zip(&s2.features) {
        assert!((x.mean - y.mean).abs() < 1e-15);
        assert!((x.std_dev - y.std_dev).abs() < 1e-15);
    }
}

#[test]
fn shared_frequency_is_degenerate_for_three_candidates() {
    // 0.1 + 0.1 + 0.1 over 3 is not exactly 0.1 in f64
    let profiles = vec![
        profile("a", &[0.1, 0.2]),
        profile("b", &[0.1, 0.0]),
        profile("c", &[0.1, 0.0]),
    ];
    let stats = normalize(&profiles, 2).unwrap();
    assert!(stats.features[0].is_degenerate());
    assert_eq!(stats.features[0].mean, 0.1);
    assert_eq!(stats.degenerate_indices(), vec![0]);
    assert!(!stats.features[1].is_degenerate());
}
