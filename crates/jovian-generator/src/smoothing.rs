//! Centered moving-average smoothing

/// Smoothing window in years (two years either side of the center)
pub const SMOOTHING_WINDOW_YEARS: usize = 5;

/// Centered moving average with boundary-clipped windows
///
/// Each output is the arithmetic mean of the input over a window of
/// `window` samples centered at the same index. At the sequence boundaries
/// the window is truncated rather than padded or wrapped, so the first and
/// last outputs average over fewer samples.
pub fn centered_moving_average(series: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;

    (0..series.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(series.len());
            let window = &series[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}
