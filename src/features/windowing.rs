// src/features/windowing.rs
//! Fixed-size signal windowing and per-window descriptive statistics

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, CoreResult};
use crate::signal::stats;

/// Descriptive statistics for one signal window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFeatureVector {
    /// Arithmetic mean
    pub mean: f32,
    /// Root mean square
    pub rms: f32,
    /// Population variance
    pub variance: f32,
    /// Largest absolute amplitude
    pub peak: f32,
}

/// Slice a signal into fixed-size windows
///
/// Windows start at offset 0 and step by `step_size`; a window is
/// emitted while `start + window_size <= len`, so a trailing partial
/// window is dropped. That truncation is a deliberate policy: baseline
/// feature data was derived this way, and reproducing it requires
/// `len / window_size` windows for a step equal to the window.
pub fn sliding_window(
    signal: &[f32],
    window_size: usize,
    step_size: usize,
) -> CoreResult<Vec<&[f32]>> {
    if window_size == 0 {
        return Err(AnalysisError::InvalidWindowConfig {
            window: window_size,
            signal_len: None,
        });
    }
    if step_size == 0 {
        return Err(AnalysisError::InvalidWindowConfig {
            window: step_size,
            signal_len: None,
        });
    }
    if window_size > signal.len() {
        return Err(AnalysisError::InvalidWindowConfig {
            window: window_size,
            signal_len: Some(signal.len()),
        });
    }

    let mut windows = Vec::new();
    let mut start = 0;
    while start + window_size <= signal.len() {
        windows.push(&signal[start..start + window_size]);
        start += step_size;
    }
    Ok(windows)
}

/// Compute descriptive statistics for one window
pub fn extract_features(window: &[f32]) -> WindowFeatureVector {
    let mean = stats::mean(window);
    let rms = if window.is_empty() {
        0.0
    } else {
        (window.iter().map(|&x| x * x).sum::<f32>() / window.len() as f32).sqrt()
    };
    let variance = stats::variance(window);
    let peak = window.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);

    WindowFeatureVector {
        mean,
        rms,
        variance,
        peak,
    }
}

/// Window a signal and extract features from every window
pub fn window_features(
    signal: &[f32],
    window_size: usize,
    step_size: usize,
) -> CoreResult<Vec<WindowFeatureVector>> {
    let windows = sliding_window(signal, window_size, step_size)?;
    Ok(windows.into_iter().map(extract_features).collect())
}
