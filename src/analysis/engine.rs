// src/analysis/engine.rs
//! The analysis pipeline: align → score → classify → summarize
//!
//! Both comparator strategies flow through the one pipeline below. Every
//! invocation is a pure function over its inputs; nothing is cached or
//! shared between calls.

use tracing::debug;

use crate::analysis::scorer::score_deviations;
use crate::analysis::severity::SeverityTier;
use crate::analysis::summary::{summarize, AnalysisResult};
use crate::baseline::{
    BaselineRegistry, BaselineStrategy, MovingAverageBaseline, MuscleGroup, StaticBaseline,
};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, CoreResult};
use crate::signal::align;

/// Run one analysis of a patient signal against a baseline strategy
///
/// `threshold` overrides the strategy's default anomaly threshold when
/// given. Fails before any computation on empty input; never returns a
/// partial result.
pub fn analyze(
    patient: &[f32],
    strategy: &dyn BaselineStrategy,
    threshold: Option<f32>,
) -> CoreResult<AnalysisResult> {
    if patient.is_empty() {
        return Err(AnalysisError::EmptyOrInvalidInput {
            reason: "patient signal has no samples".to_string(),
        });
    }

    let baseline = strategy.resolve_baseline(patient)?;
    let (patient, baseline) = align(patient, &baseline);
    if patient.is_empty() {
        return Err(AnalysisError::EmptyOrInvalidInput {
            reason: "aligned signal pair has no samples".to_string(),
        });
    }

    let spread = strategy.spread(patient)?;
    let threshold = threshold.unwrap_or_else(|| strategy.default_threshold());
    debug!(samples = patient.len(), spread, threshold, "scoring aligned pair");

    let scores = score_deviations(patient, baseline, spread);
    let severities: Vec<SeverityTier> = scores.iter().map(|&s| SeverityTier::classify(s)).collect();

    let result = summarize(patient, baseline, &scores, &severities, threshold);
    debug!(
        anomalies = result.anomaly_count,
        percent = result.anomaly_percent,
        "analysis complete"
    );
    Ok(result)
}

/// Configured front door over the two comparator strategies
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    /// Build an engine from a validated configuration
    pub fn new(config: AnalysisConfig) -> Result<Self, Vec<String>> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build an engine with default settings
    pub fn with_defaults() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compare a patient signal against a registry reference
    pub fn compare_with_baseline(
        &self,
        patient: &[f32],
        muscle: MuscleGroup,
        registry: &BaselineRegistry,
    ) -> CoreResult<AnalysisResult> {
        let reference = registry
            .get(muscle)
            .ok_or(AnalysisError::MissingBaselineFile { muscle, path: None })?;
        let strategy = StaticBaseline::new(reference.to_vec())?;
        analyze(patient, &strategy, Some(self.config.static_threshold))
    }

    /// Compare a patient signal against its own moving-average baseline
    pub fn compare_self_baseline(&self, patient: &[f32]) -> CoreResult<AnalysisResult> {
        let strategy = MovingAverageBaseline::new(self.config.moving_average.window)?;
        analyze(patient, &strategy, Some(self.config.moving_average.threshold))
    }
}
