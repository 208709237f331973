//! Trailing-window statistics over per-game values.

/// Games per rolling window.
pub const ROLLING_WINDOW: usize = 5;

/// Decimal places kept on every rolling value.
pub const ROLLING_DECIMALS: i32 = 2;

/// Round to `decimals` places, ties to even (`0.125 -> 0.12`, `0.375 -> 0.38`).
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Rolling mean and sample standard deviation, aligned index-for-index with the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollingSeries {
    pub mean: Vec<Option<f64>>,
    pub std_dev: Vec<Option<f64>>,
}

/// Compute trailing-window statistics, the current value included.
///
/// Position `i` is `None` until a full window is available (`i + 1 < window`)
/// and whenever a value inside its window is missing. Standard deviation
/// uses the `n - 1` denominator.
pub fn rolling(values: &[Option<u32>], window: usize) -> RollingSeries {
    let mut series = RollingSeries {
        mean: Vec::with_capacity(values.len()),
        std_dev: Vec::with_capacity(values.len()),
    };

    for i in 0..values.len() {
        let stats = (i + 1 >= window && window > 0)
            .then(|| &values[i + 1 - window..=i])
            .and_then(full_window)
            .map(|w| (mean(&w), sample_std_dev(&w)));

        match stats {
            Some((m, sd)) => {
                series.mean.push(Some(round_half_even(m, ROLLING_DECIMALS)));
                series
                    .std_dev
                    .push(sd.map(|sd| round_half_even(sd, ROLLING_DECIMALS)));
            }
            None => {
                series.mean.push(None);
                series.std_dev.push(None);
            }
        }
    }

    series
}

fn full_window(slice: &[Option<u32>]) -> Option<Vec<f64>> {
    slice.iter().map(|v| v.map(f64::from)).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
