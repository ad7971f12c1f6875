// tests/analysis_pipeline_tests.rs
//! End-to-end pipeline tests over both comparator strategies
//!
//! These drive the full align → score → classify → summarize pipeline
//! the way the surrounding clinical application would: a patient signal
//! in, an aggregate result out, with no reach into scoring internals.

use emg_analysis_core::analysis::engine::{analyze, AnalysisEngine};
use emg_analysis_core::baseline::{
    BaselineRegistry, MovingAverageBaseline, MuscleGroup, StaticBaseline,
};
use emg_analysis_core::error::AnalysisError;
use emg_analysis_core::features::{generate_signal, inject_window_anomalies};
use emg_analysis_core::report::{ClinicalSummary, Interpretation};
use emg_analysis_core::{AnalysisConfig, SeverityTier};

use std::collections::HashMap;

fn reference_signal(len: usize) -> Vec<f32> {
    // Deterministic varying reference with a known non-zero spread
    (0..len).map(|i| 0.4 + 0.1 * ((i % 7) as f32)).collect()
}

/// Scenario A: a patient signal identical to the baseline is normal
#[test]
fn test_identical_patient_reads_normal() {
    let reference = reference_signal(500);
    let strategy = StaticBaseline::new(reference.clone()).unwrap();

    let result = analyze(&reference, &strategy, None).unwrap();

    assert_eq!(result.total_samples, 500);
    assert_eq!(result.anomaly_count, 0);
    assert_eq!(result.anomaly_percent, 0.0);
    assert!(result.records.is_empty());
    assert_eq!(Interpretation::from_result(&result), Interpretation::Normal);
}

/// Scenario B: one spike of ten reference deviations is one Severe record
#[test]
fn test_single_large_spike_is_flagged_severe() {
    let reference = reference_signal(500);
    let strategy = StaticBaseline::new(reference.clone()).unwrap();

    let mut patient = reference;
    patient[50] += strategy.std_dev() * 10.0;

    let result = analyze(&patient, &strategy, None).unwrap();

    assert_eq!(result.anomaly_count, 1);
    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.index, 50);
    assert_eq!(record.severity, SeverityTier::Severe);
    assert!(record.score > 5.0);
    assert_eq!(Interpretation::from_result(&result), Interpretation::Abnormal);
}

/// Scenario C: moving-average analysis recovers injected anomalous windows
#[test]
fn test_moving_average_recovers_injected_windows() {
    let window_len = 200;
    let clean = generate_signal(5000, 42);
    let (patient, injected) = inject_window_anomalies(&clean, window_len, 5, 42).unwrap();
    assert_eq!(injected.len(), 5);

    let strategy = MovingAverageBaseline::new(50).unwrap();
    let result = analyze(&patient, &strategy, None).unwrap();
    assert!(result.anomaly_count > 0);

    // Every injected window contributes at least one flagged sample
    for &window in &injected {
        let start = window * window_len;
        let end = start + window_len;
        let hits = result
            .records
            .iter()
            .filter(|r| r.index >= start && r.index < end)
            .count();
        assert!(hits > 0, "no flagged sample inside injected window {}", window);
    }

    // Flagged samples concentrate inside the injected windows
    let inside = result
        .records
        .iter()
        .filter(|r| injected.contains(&(r.index / window_len)))
        .count();
    let outside = result.records.len() - inside;
    assert!(inside > outside);
}

#[test]
fn test_anomaly_count_consistency() {
    let window_len = 200;
    let clean = generate_signal(5000, 42);
    let (patient, _) = inject_window_anomalies(&clean, window_len, 5, 42).unwrap();

    let strategy = MovingAverageBaseline::new(50).unwrap();
    let result = analyze(&patient, &strategy, None).unwrap();

    assert_eq!(result.anomaly_count, result.records.len());
    let expected_percent = {
        let percent = 100.0 * result.anomaly_count as f32 / result.total_samples as f32;
        (percent * 100.0).round() / 100.0
    };
    assert_eq!(result.anomaly_percent, expected_percent);
}

#[test]
fn test_constant_static_baseline_is_rejected() {
    let strategy = StaticBaseline::new(vec![0.7; 300]).unwrap();
    let patient = reference_signal(300);

    let err = analyze(&patient, &strategy, None).unwrap_err();
    assert_eq!(err, AnalysisError::DegenerateBaseline { samples: 300 });
}

#[test]
fn test_constant_initial_window_does_not_reject() {
    // Constant over the spread-estimation window; epsilon guard holds
    let mut patient = vec![0.5; 64];
    patient.extend(reference_signal(200));

    let strategy = MovingAverageBaseline::new(64).unwrap();
    let result = analyze(&patient, &strategy, None);
    assert!(result.is_ok());
}

#[test]
fn test_threshold_override_changes_sensitivity() {
    let reference = reference_signal(400);
    let strategy = StaticBaseline::new(reference.clone()).unwrap();

    let mut patient = reference;
    // A bump of two reference deviations: below 3.0, above 1.0
    patient[100] += strategy.std_dev() * 2.0;

    let default = analyze(&patient, &strategy, None).unwrap();
    assert_eq!(default.anomaly_count, 0);

    let sensitive = analyze(&patient, &strategy, Some(1.0)).unwrap();
    assert_eq!(sensitive.anomaly_count, 1);
    assert_eq!(sensitive.records[0].index, 100);
}

#[test]
fn test_engine_end_to_end_with_registry() {
    let reference = reference_signal(600);
    let mut signals = HashMap::new();
    signals.insert(MuscleGroup::Forearm, reference.clone());
    let registry = BaselineRegistry::from_signals(signals).unwrap();

    let engine = AnalysisEngine::new(AnalysisConfig::default()).unwrap();

    let mut patient = reference;
    patient[10] += 100.0;
    let result = engine
        .compare_with_baseline(&patient, MuscleGroup::Forearm, &registry)
        .unwrap();
    assert_eq!(result.anomaly_count, 1);

    let summary = ClinicalSummary::new("P-1001", MuscleGroup::Forearm, &result);
    assert_eq!(summary.interpretation, Interpretation::Abnormal);
    let guidance = summary.guidance.expect("abnormal summary carries guidance");
    assert!(guidance.alert.contains("forearm") || guidance.alert.contains("Forearm"));
}

#[test]
fn test_longer_patient_is_truncated_to_reference() {
    let reference = reference_signal(100);
    let strategy = StaticBaseline::new(reference.clone()).unwrap();

    let mut patient = reference;
    patient.extend(vec![99.0; 50]); // beyond the aligned range

    let result = analyze(&patient, &strategy, None).unwrap();
    assert_eq!(result.total_samples, 100);
    assert_eq!(result.anomaly_count, 0);
}
