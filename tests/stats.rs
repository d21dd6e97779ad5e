use stylodelta::math::stats::{is_constant, mean, sample_std_dev, z_score};

#[test]
fn mean_basic() {
    assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn sample_std_dev_uses_n_minus_one() {
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let m = mean(&v);
    let sd = sample_std_dev(&v, m).unwrap();
    // population sd is 2.0; sample sd = sqrt(32 / 7)
    assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn sample_std_dev_needs_two_values() {
    assert!(sample_std_dev(&[1.0], 1.0).is_none());
    assert!(sample_std_dev(&[], 0.0).is_none());
}

#[test]
fn sample_std_dev_constant_is_zero() {
    let v = [0.25, 0.25, 0.25];
    assert_eq!(sample_std_dev(&v, mean(&v)), Some(0.0));
}

#[test]
fn z_score_basic() {
    let z = z_score(3.0, 1.0, 0.5).unwrap();
    assert!((z - 4.0).abs() < 1e-12);
    assert!(z_score(3.0, 1.0, 0.0).is_none());
}

#[test]
fn is_constant_compares_bits() {
    assert!(is_constant(&[0.1, 0.1, 0.1]));
    assert!(is_constant(&[]));
    assert!(!is_constant(&[0.1, 0.1 + f64::EPSILON]));
}
