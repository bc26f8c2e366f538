/// Short-horizon trend extrapolation over a measurement series.
///
/// Fits an ordinary-least-squares line against a synthetic sample index and
/// projects it a configurable number of one-hour steps past the series end.
/// The index deliberately ignores irregular real-world gaps between samples:
/// the i-th measurement sits at x = i whether the gap before it was one hour
/// or five. That uniform-spacing assumption is part of the model's contract,
/// not an oversight to fix.
///
/// A trailing moving average is also provided as a secondary, smoother
/// one-step estimator for callers that prefer it over the fitted line.

use chrono::Duration;

use crate::model::{ForecastPoint, ForecastResult, Measurement};

/// Hard minimum series length for a meaningful fit.
pub const MIN_SERIES_LEN: usize = 3;

/// Projected concentrations are floored here; a forecast of zero or below
/// is meaningless as a concentration.
pub const FORECAST_FLOOR: f64 = 1.0;

/// Default trailing window for the moving-average estimator.
pub const DEFAULT_MA_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
// Linear fit
// ---------------------------------------------------------------------------

/// A fitted line `value ≈ intercept + slope · index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at a (possibly future) sample index.
    pub fn predict(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }
}

/// Least-squares fit of `values` against their indices 0..n.
///
/// Returns `None` when fewer than two points are available; with a single
/// sample the slope is undefined.
pub fn fit_linear(values: &[f64]) -> Option<LinearFit> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (i, &value) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_xx += x * x;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(LinearFit { slope, intercept })
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

/// Projects the series `horizon` one-hour steps forward.
///
/// Requires at least `MIN_SERIES_LEN` measurements; shorter series yield
/// `InsufficientData` regardless of content. Otherwise the fitted line is
/// evaluated at indices n..n+horizon, every raw prediction is floored at
/// `FORECAST_FLOOR`, and the k-th point is stamped `last + k` hours. The
/// result always carries exactly `horizon` points; there are no partial
/// forecasts.
pub fn forecast(series: &[Measurement], horizon: usize) -> ForecastResult {
    if series.len() < MIN_SERIES_LEN {
        return ForecastResult::InsufficientData;
    }

    let values: Vec<f64> = series.iter().map(|m| m.value).collect();
    let fit = match fit_linear(&values) {
        Some(fit) => fit,
        None => return ForecastResult::InsufficientData,
    };

    let n = series.len();
    let last = series[n - 1].datetime;

    let points = (0..horizon)
        .map(|k| ForecastPoint {
            datetime: last + Duration::hours(k as i64 + 1),
            value: fit.predict((n + k) as f64).max(FORECAST_FLOOR),
        })
        .collect();

    ForecastResult::Forecast(points)
}

// ---------------------------------------------------------------------------
// Moving average
// ---------------------------------------------------------------------------

/// Trailing moving average of `values` over `window`-sized windows.
///
/// Returns one averaged point per full window, so the result is
/// `len - window + 1` long; fewer values than the window (or a zero
/// window) yield an empty vector.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// The last trailing average as a one-step-ahead estimate, if computable.
pub fn moving_average_predict(values: &[f64], window: usize) -> Option<f64> {
    moving_average(values, window).last().copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
