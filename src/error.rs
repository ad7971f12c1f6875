// src/error.rs
//! Unified error handling for the analysis core
//!
//! Every fallible operation in the crate reports one of the variants below.
//! No component ever substitutes a silent default or lets NaN propagate in
//! place of an error, and no partial [`AnalysisResult`](crate::AnalysisResult)
//! is produced on failure; callers get all-or-nothing per invocation.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::baseline::MuscleGroup;

/// Unified error type for the analysis core
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input signal is empty or failed numeric parsing entirely
    EmptyOrInvalidInput {
        /// What the caller supplied and why it was rejected
        reason: String,
    },

    /// Static reference spread is zero (constant-valued baseline)
    DegenerateBaseline {
        /// Number of samples in the offending reference population
        samples: usize,
    },

    /// Non-positive or oversized window parameter
    InvalidWindowConfig {
        /// The rejected window size
        window: usize,
        /// Signal length the window was checked against, when one applies
        signal_len: Option<usize>,
    },

    /// A named static baseline is unavailable
    MissingBaselineFile {
        /// Muscle group whose reference could not be loaded
        muscle: MuscleGroup,
        /// Path that was attempted, when the failure happened on disk
        path: Option<PathBuf>,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyOrInvalidInput { reason } => {
                write!(f, "[INPUT] empty or invalid signal: {}", reason)
            }
            AnalysisError::DegenerateBaseline { samples } => {
                write!(
                    f,
                    "[BASELINE] degenerate reference: standard deviation is zero over {} samples",
                    samples
                )
            }
            AnalysisError::InvalidWindowConfig { window, signal_len } => match signal_len {
                Some(len) => write!(
                    f,
                    "[WINDOW] window size {} exceeds signal length {}",
                    window, len
                ),
                None => write!(f, "[WINDOW] window size {} must be positive", window),
            },
            AnalysisError::MissingBaselineFile { muscle, path } => match path {
                Some(path) => write!(
                    f,
                    "[REGISTRY] baseline for {} unavailable: {}",
                    muscle,
                    path.display()
                ),
                None => write!(f, "[REGISTRY] no baseline loaded for {}", muscle),
            },
        }
    }
}

impl Error for AnalysisError {}

/// Result type alias for core analysis operations
pub type CoreResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_degenerate_baseline() {
        let err = AnalysisError::DegenerateBaseline { samples: 128 };
        let display = format!("{}", err);
        assert!(display.contains("BASELINE"));
        assert!(display.contains("128"));
    }

    #[test]
    fn test_display_window_config() {
        let zero = AnalysisError::InvalidWindowConfig {
            window: 0,
            signal_len: None,
        };
        assert!(format!("{}", zero).contains("must be positive"));

        let oversized = AnalysisError::InvalidWindowConfig {
            window: 500,
            signal_len: Some(100),
        };
        let display = format!("{}", oversized);
        assert!(display.contains("500"));
        assert!(display.contains("100"));
    }

    #[test]
    fn test_display_missing_baseline() {
        let err = AnalysisError::MissingBaselineFile {
            muscle: MuscleGroup::Calf,
            path: Some(PathBuf::from("baseline_emg/baseline_calf.csv")),
        };
        let display = format!("{}", err);
        assert!(display.contains("Calf"));
        assert!(display.contains("baseline_calf.csv"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisError>();
    }
}
