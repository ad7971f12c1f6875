//! EMG-Analysis-Core: signal comparison and anomaly classification for clinical EMG review
//!
//! This library is the numeric core of a clinical EMG screening tool. It
//! compares a patient's electromyography time series against a baseline,
//! flags anomalous samples via thresholded z-scores, classifies anomaly
//! severity, and aggregates the results into a record a presentation layer
//! can render. It features:
//!
//! - Two baseline strategies: a static healthy-reference comparison and a
//!   self-derived moving-average comparison
//! - Per-sample z-score deviation scoring with strategy-specific thresholds
//! - Ordinal severity classification (Normal/Mild/Moderate/Severe)
//! - A process-start baseline registry for the five supported muscle groups
//! - Windowed feature extraction and deterministic synthetic fixtures
//!
//! # Quick Start
//!
//! ```rust
//! use emg_analysis_core::analysis::engine;
//! use emg_analysis_core::baseline::StaticBaseline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reference = vec![0.5, 0.6, 0.4, 0.5, 0.6, 0.5, 0.4, 0.6];
//!     let patient = vec![0.5, 0.6, 0.4, 9.5, 0.6, 0.5, 0.4, 0.6];
//!
//!     let strategy = StaticBaseline::new(reference)?;
//!     let result = engine::analyze(&patient, &strategy, None)?;
//!
//!     println!("{} of {} samples anomalous ({}%)",
//!              result.anomaly_count, result.total_samples, result.anomaly_percent);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod analysis;
pub mod baseline;
pub mod config;
pub mod error;
pub mod features;
pub mod report;
pub mod signal;

// Re-export commonly used types for convenience
pub use analysis::{
    engine::{analyze, AnalysisEngine},
    AnalysisResult, DeviationRecord, SeverityTier,
};
pub use baseline::{
    BaselineRegistry, BaselineStrategy, MovingAverageBaseline, MuscleGroup, StaticBaseline,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, CoreResult};
pub use report::{ClinicalGuidance, ClinicalSummary, Interpretation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
    }
}
