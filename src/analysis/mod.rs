// src/analysis/mod.rs
//! Deviation scoring, severity classification, and result aggregation

pub mod engine;
pub mod scorer;
pub mod severity;
pub mod summary;

pub use engine::{analyze, AnalysisEngine};
pub use scorer::{flag_anomalies, score_deviations};
pub use severity::SeverityTier;
pub use summary::{summarize, AnalysisResult, DeviationRecord};
