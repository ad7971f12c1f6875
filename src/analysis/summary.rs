// src/analysis/summary.rs
//! Aggregation of per-sample results into the caller-facing record
//!
//! The [`AnalysisResult`] produced here is the sole contract with the
//! presentation layer; nothing downstream reaches into scoring state.

use serde::{Deserialize, Serialize};

use crate::analysis::scorer::flag_anomalies;
use crate::analysis::severity::SeverityTier;

/// Per-sample deviation outcome, kept for anomalous samples only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationRecord {
    /// Timepoint index into the aligned patient signal
    pub index: usize,
    /// Patient sample value at that timepoint
    pub patient_value: f32,
    /// Deviation z-score
    pub score: f32,
    /// Whether the score exceeded the analysis threshold
    pub is_anomalous: bool,
    /// Ordinal severity of the deviation
    pub severity: SeverityTier,
}

/// Aggregate outcome of one analysis invocation
///
/// Immutable once produced and owned exclusively by the caller; no
/// entity here outlives the invocation that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of aligned samples analyzed
    pub total_samples: usize,
    /// Number of samples whose score exceeded the threshold
    pub anomaly_count: usize,
    /// Anomalous share of the signal, percent rounded to two decimals
    pub anomaly_percent: f32,
    /// Anomalous samples in ascending index order
    pub records: Vec<DeviationRecord>,
    /// Aligned patient signal, as analyzed
    pub patient_signal: Vec<f32>,
    /// Aligned baseline signal the patient was compared against
    pub baseline_signal: Vec<f32>,
}

/// Aggregate per-sample scores and severities into an [`AnalysisResult`]
pub fn summarize(
    patient: &[f32],
    baseline: &[f32],
    scores: &[f32],
    severities: &[SeverityTier],
    threshold: f32,
) -> AnalysisResult {
    debug_assert_eq!(patient.len(), scores.len());
    debug_assert_eq!(scores.len(), severities.len());

    let flags = flag_anomalies(scores, threshold);
    let total_samples = patient.len();
    let anomaly_count = flags.iter().filter(|&&f| f).count();

    let anomaly_percent = if total_samples == 0 {
        0.0
    } else {
        let percent = 100.0 * anomaly_count as f32 / total_samples as f32;
        (percent * 100.0).round() / 100.0
    };

    let records = flags
        .iter()
        .enumerate()
        .filter(|&(_, &flagged)| flagged)
        .map(|(index, _)| DeviationRecord {
            index,
            patient_value: patient[index],
            score: scores[index],
            is_anomalous: true,
            severity: severities[index],
        })
        .collect();

    AnalysisResult {
        total_samples,
        anomaly_count,
        anomaly_percent,
        records,
        patient_signal: patient.to_vec(),
        baseline_signal: baseline.to_vec(),
    }
}
