// src/analysis/scorer.rs
//! Per-sample deviation scoring

/// Z-score each aligned sample pair against a scalar spread
///
/// `score[i] = |patient[i] - baseline[i]| / spread`. Callers must have
/// validated the spread already: the static strategy rejects a zero
/// spread outright and the moving-average strategy is epsilon-guarded,
/// so no score here can be produced by a silent division by zero.
pub fn score_deviations(patient: &[f32], baseline: &[f32], spread: f32) -> Vec<f32> {
    debug_assert_eq!(patient.len(), baseline.len());
    debug_assert!(spread > 0.0);

    patient
        .iter()
        .zip(baseline.iter())
        .map(|(&p, &b)| (p - b).abs() / spread)
        .collect()
}

/// Threshold mask over a score sequence, strict comparison
pub fn flag_anomalies(scores: &[f32], threshold: f32) -> Vec<bool> {
    scores.iter().map(|&s| s > threshold).collect()
}
