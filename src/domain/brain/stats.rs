//! Trial-level aggregates used by the game result constructors.

/// Fewest samples before the extremes are trimmed.
pub const TRIM_MIN_SAMPLES: usize = 5;

pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean after dropping the single fastest and slowest sample.
///
/// Short series (fewer than `TRIM_MIN_SAMPLES`) are averaged untrimmed.
pub fn trimmed_mean(samples: &[f64]) -> f64 {
    if samples.len() < TRIM_MIN_SAMPLES {
        return mean(samples);
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    mean(&sorted[1..sorted.len() - 1])
}

/// Population standard deviation. Zero for fewer than two samples.
pub fn standard_deviation(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let avg = mean(samples);
    let variance =
        samples.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
