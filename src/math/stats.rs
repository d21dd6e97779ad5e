//! Descriptive statistics over per-author frequency vectors.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// True when every value is bit-identical to the first.
pub fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v.to_bits() == first.to_bits()),
        None => true,
    }
}

/// Sample standard deviation (n - 1 denominator). `None` for fewer than 2 values.
pub fn sample_std_dev(values: &[f64], mean_val: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v - mean_val;
            d * d
        })
        .sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// `None` when `std_dev` is exactly 0.
pub fn z_score(x: f64, mean_val: f64, std_dev: f64) -> Option<f64> {
    if std_dev == 0.0 {
        return None;
    }
    Some((x - mean_val) / std_dev)
}
