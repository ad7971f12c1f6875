// src/report.rs
//! Deterministic clinical interpretation of analysis results
//!
//! The banner and guidance here are derived from the analysis outcome
//! and muscle group alone, never from internal scoring state. The
//! guidance table is keyed by [`MuscleGroup`] itself, so its keys and
//! the baseline registry's selectable set cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::analysis::summary::AnalysisResult;
use crate::baseline::MuscleGroup;

/// Overall reading of an analysis outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpretation {
    /// No sample exceeded the anomaly threshold
    Normal,
    /// At least one sample exceeded the anomaly threshold
    Abnormal,
}

impl Interpretation {
    /// Derive the interpretation from an analysis result
    pub fn from_result(result: &AnalysisResult) -> Self {
        if result.anomaly_count == 0 {
            Interpretation::Normal
        } else {
            Interpretation::Abnormal
        }
    }

    /// Clinician-facing banner text
    pub fn banner(&self) -> &'static str {
        match self {
            Interpretation::Normal => {
                "The EMG signal closely follows the normal muscle activation pattern. \
                 No abnormal muscle behavior was detected during the observed period."
            }
            Interpretation::Abnormal => {
                "The EMG signal shows significant deviations from normal muscle behavior. \
                 Flagged time points indicate muscle activity exceeding expected limits, \
                 which may suggest muscle fatigue, nerve dysfunction, or abnormal \
                 contractions. Further clinical evaluation is recommended."
            }
        }
    }
}

/// Muscle-specific alert and follow-up advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClinicalGuidance {
    /// Alert shown when the muscle's analysis is abnormal
    pub alert: &'static str,
    /// Suggested next steps for the clinician
    pub next_steps: &'static str,
}

/// Guidance lookup for a muscle group
pub fn guidance(muscle: MuscleGroup) -> ClinicalGuidance {
    match muscle {
        MuscleGroup::Biceps => ClinicalGuidance {
            alert: "Abnormal biceps activation detected during elbow flexion.",
            next_steps: "Assess musculocutaneous nerve conduction and review recent \
                         upper-arm strain or overuse.",
        },
        MuscleGroup::Triceps => ClinicalGuidance {
            alert: "Abnormal triceps activation detected during elbow extension.",
            next_steps: "Evaluate radial nerve function and check for cervical \
                         radiculopathy at C7.",
        },
        MuscleGroup::Forearm => ClinicalGuidance {
            alert: "Abnormal forearm compartment activity detected.",
            next_steps: "Screen for median/ulnar entrapment (carpal or cubital tunnel) \
                         and repetitive strain injury.",
        },
        MuscleGroup::Thigh => ClinicalGuidance {
            alert: "Abnormal quadriceps activation pattern detected.",
            next_steps: "Assess femoral nerve conduction and lumbar roots L2-L4; review \
                         gait and load history.",
        },
        MuscleGroup::Calf => ClinicalGuidance {
            alert: "Abnormal calf muscle activity detected.",
            next_steps: "Evaluate tibial nerve and S1 root involvement; consider \
                         assessment for peripheral neuropathy.",
        },
    }
}

/// Serializable clinical summary handed to the report/export layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalSummary {
    /// Patient identifier as entered by the clinician
    pub patient_id: String,
    /// Muscle group the patient signal was compared for
    pub muscle: MuscleGroup,
    /// Number of samples analyzed
    pub total_samples: usize,
    /// Number of anomalous samples
    pub anomaly_count: usize,
    /// Anomalous share of the signal, percent
    pub anomaly_percent: f32,
    /// Overall reading
    pub interpretation: Interpretation,
    /// Banner text for the reading
    pub banner: &'static str,
    /// Muscle-specific guidance, present for abnormal readings
    pub guidance: Option<ClinicalGuidance>,
}

impl ClinicalSummary {
    /// Assemble the summary for one analysis outcome
    pub fn new(patient_id: impl Into<String>, muscle: MuscleGroup, result: &AnalysisResult) -> Self {
        let interpretation = Interpretation::from_result(result);
        let guidance = match interpretation {
            Interpretation::Normal => None,
            Interpretation::Abnormal => Some(guidance(muscle)),
        };

        Self {
            patient_id: patient_id.into(),
            muscle,
            total_samples: result.total_samples,
            anomaly_count: result.anomaly_count,
            anomaly_percent: result.anomaly_percent,
            interpretation,
            banner: interpretation.banner(),
            guidance,
        }
    }
}
