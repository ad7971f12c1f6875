// src/features/synthetic.rs
//! Deterministic synthetic EMG fixtures
//!
//! Labeled fixtures for validating the scorer and classifier end to
//! end: a rectified-Gaussian signal generator and a window-level
//! anomaly injector. Everything is seeded, so fixture data is
//! reproducible across runs and machines. None of this participates in
//! the clinical analysis path.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::constants::synthetic;
use crate::error::{AnalysisError, CoreResult};

/// Generate `n` samples of rectified standard-normal noise
///
/// Samples are the absolute value of a standard-normal draw, matching
/// the amplitude envelope of surface EMG at rest.
pub fn generate_signal(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| standard_normal(&mut rng).abs()).collect()
}

/// Amplify `num_windows` distinct windows of a signal
///
/// Window indices are drawn deterministically from the seed; every
/// sample in a selected window is multiplied by the fixed
/// [`ANOMALY_GAIN`](synthetic::ANOMALY_GAIN). Returns the modified
/// signal together with the set of altered window indices, which serve
/// as ground-truth labels.
pub fn inject_window_anomalies(
    signal: &[f32],
    window_len: usize,
    num_windows: usize,
    seed: u64,
) -> CoreResult<(Vec<f32>, BTreeSet<usize>)> {
    if window_len == 0 || window_len > signal.len() {
        return Err(AnalysisError::InvalidWindowConfig {
            window: window_len,
            signal_len: (window_len > 0).then(|| signal.len()),
        });
    }

    let total_windows = signal.len() / window_len;
    if num_windows > total_windows {
        return Err(AnalysisError::InvalidWindowConfig {
            window: num_windows,
            signal_len: Some(total_windows),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..total_windows).collect();
    indices.shuffle(&mut rng);
    indices.truncate(num_windows);
    let selected: BTreeSet<usize> = indices.into_iter().collect();

    let mut modified = signal.to_vec();
    for &window in &selected {
        let start = window * window_len;
        for sample in &mut modified[start..start + window_len] {
            *sample *= synthetic::ANOMALY_GAIN;
        }
    }

    Ok((modified, selected))
}

// Box-Muller transform for Gaussian random numbers
fn standard_normal(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen::<f32>().max(f32::MIN_POSITIVE);
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}
