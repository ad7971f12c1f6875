// src/analysis/severity.rs
//! Ordinal anomaly severity classification
//!
//! Severity is a monotonic step function of the deviation score alone,
//! applied identically under both comparator strategies. Under the
//! static strategy's coarser 3.0 threshold consumers mostly care about
//! Normal versus not, but the classifier stays strategy-agnostic so the
//! same four-tier rule is always testable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::thresholds;

/// Ordinal anomaly severity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Deviation within expected limits
    Normal,
    /// Score above 3
    Mild,
    /// Score above 4
    Moderate,
    /// Score above 5
    Severe,
}

impl SeverityTier {
    /// Classify a deviation score
    ///
    /// Comparisons are strict: a score sitting exactly on a tier cut
    /// stays in the lower tier.
    pub fn classify(score: f32) -> Self {
        if score > thresholds::SEVERITY_SEVERE {
            SeverityTier::Severe
        } else if score > thresholds::SEVERITY_MODERATE {
            SeverityTier::Moderate
        } else if score > thresholds::SEVERITY_MILD {
            SeverityTier::Mild
        } else {
            SeverityTier::Normal
        }
    }

    /// Numeric rank, for aggregation and display ordering
    pub fn rank(&self) -> u8 {
        match self {
            SeverityTier::Normal => 0,
            SeverityTier::Mild => 1,
            SeverityTier::Moderate => 2,
            SeverityTier::Severe => 3,
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "Normal",
            SeverityTier::Mild => "Mild",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Severe => "Severe",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
