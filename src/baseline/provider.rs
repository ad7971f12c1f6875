// src/baseline/provider.rs
//! Baseline resolution strategies
//!
//! Both comparators implement one [`BaselineStrategy`] seam so the
//! align → score → classify → summarize pipeline exists exactly once.
//! The static strategy compares against an independently sourced
//! reference population; the moving-average strategy derives a local
//! baseline from the patient signal itself.

use crate::config::constants::thresholds;
use crate::error::{AnalysisError, CoreResult};
use crate::signal::{align, stats};

/// Polymorphic seam over the two comparator strategies
pub trait BaselineStrategy {
    /// Produce a baseline sequence aligned to the patient signal
    fn resolve_baseline(&self, patient: &[f32]) -> CoreResult<Vec<f32>>;

    /// Scalar reference spread used to normalize deviations
    fn spread(&self, patient: &[f32]) -> CoreResult<f32>;

    /// Default anomaly threshold for this strategy
    ///
    /// The two strategies ship different defaults (3.0 static, 2.0
    /// moving-average). Callers may override per analysis, but the
    /// defaults are never unified: that would silently change clinical
    /// sensitivity.
    fn default_threshold(&self) -> f32;
}

/// Comparison against a stored healthy-population reference
///
/// Mean and standard deviation are computed once over the full stored
/// sample set at construction, before any truncation. The reference
/// distribution describes the whole baseline population, not just the
/// prefix that happens to align with a given patient signal.
#[derive(Debug, Clone)]
pub struct StaticBaseline {
    samples: Vec<f32>,
    mean: f32,
    std_dev: f32,
}

impl StaticBaseline {
    /// Build a static baseline from reference samples
    pub fn new(samples: Vec<f32>) -> CoreResult<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptyOrInvalidInput {
                reason: "static baseline has no samples".to_string(),
            });
        }

        let mean = stats::mean(&samples);
        let std_dev = stats::std_dev(&samples);
        Ok(Self {
            samples,
            mean,
            std_dev,
        })
    }

    /// Full-population reference mean
    pub fn mean(&self) -> f32 {
        self.mean
    }

    /// Full-population reference standard deviation
    pub fn std_dev(&self) -> f32 {
        self.std_dev
    }

    /// Number of stored reference samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the reference is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl BaselineStrategy for StaticBaseline {
    fn resolve_baseline(&self, patient: &[f32]) -> CoreResult<Vec<f32>> {
        let (_, reference) = align(patient, &self.samples);
        Ok(reference.to_vec())
    }

    fn spread(&self, _patient: &[f32]) -> CoreResult<f32> {
        if self.std_dev == 0.0 {
            return Err(AnalysisError::DegenerateBaseline {
                samples: self.samples.len(),
            });
        }
        Ok(self.std_dev)
    }

    fn default_threshold(&self) -> f32 {
        thresholds::STATIC_ANOMALY_THRESHOLD
    }
}

/// Self-baseline derived from a centered moving average
///
/// The baseline is a "same"-length convolution of the patient signal
/// with a uniform window: output length equals input length, and edge
/// windows are implicitly zero-padded, which biases baseline values
/// toward zero near the signal boundaries. That edge behavior is
/// pinned by tests, not corrected.
#[derive(Debug, Clone)]
pub struct MovingAverageBaseline {
    window: usize,
}

impl MovingAverageBaseline {
    /// Build a moving-average baseline with the given window
    pub fn new(window: usize) -> CoreResult<Self> {
        if window == 0 {
            return Err(AnalysisError::InvalidWindowConfig {
                window,
                signal_len: None,
            });
        }
        Ok(Self { window })
    }

    /// Configured window size, in samples
    pub fn window(&self) -> usize {
        self.window
    }

    fn check_against(&self, patient: &[f32]) -> CoreResult<()> {
        if self.window > patient.len() {
            return Err(AnalysisError::InvalidWindowConfig {
                window: self.window,
                signal_len: Some(patient.len()),
            });
        }
        Ok(())
    }
}

impl BaselineStrategy for MovingAverageBaseline {
    fn resolve_baseline(&self, patient: &[f32]) -> CoreResult<Vec<f32>> {
        self.check_against(patient)?;

        let n = patient.len();
        let mut prefix = Vec::with_capacity(n + 1);
        let mut acc = 0.0f32;
        prefix.push(acc);
        for &x in patient {
            acc += x;
            prefix.push(acc);
        }

        // Centered "same" convolution: window ending at i + center,
        // out-of-range samples contribute zero but still divide by the
        // full window length.
        let center = (self.window - 1) / 2;
        let inv = 1.0 / self.window as f32;
        let baseline = (0..n)
            .map(|i| {
                let hi = (i + center).min(n - 1);
                let lo = (i + center + 1).saturating_sub(self.window);
                (prefix[hi + 1] - prefix[lo]) * inv
            })
            .collect();

        Ok(baseline)
    }

    fn spread(&self, patient: &[f32]) -> CoreResult<f32> {
        self.check_against(patient)?;
        Ok(stats::std_dev(&patient[..self.window]) + thresholds::SPREAD_EPSILON)
    }

    fn default_threshold(&self) -> f32 {
        thresholds::MOVING_AVERAGE_ANOMALY_THRESHOLD
    }
}
