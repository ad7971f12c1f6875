// src/signal/ingest.rs
//! Delimited-text signal ingestion
//!
//! Patient uploads arrive as delimited tabular text with one sample per
//! row; the first column is the signal. Rows whose first field does not
//! parse as a finite number are dropped, which also absorbs header lines.
//! An input with no surviving samples is rejected, never analyzed.

use std::path::Path;

use crate::error::{AnalysisError, CoreResult};

/// Parse a delimited tabular payload into a signal
pub fn parse_signal_text(text: &str) -> CoreResult<Vec<f32>> {
    let mut samples = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let field = line
            .split(&[',', ';', '\t'][..])
            .next()
            .unwrap_or(line)
            .split_whitespace()
            .next()
            .unwrap_or("");

        if let Ok(value) = field.parse::<f32>() {
            if value.is_finite() {
                samples.push(value);
            }
        }
    }

    if samples.is_empty() {
        return Err(AnalysisError::EmptyOrInvalidInput {
            reason: "no numeric samples in input".to_string(),
        });
    }

    Ok(samples)
}

/// Read and parse a signal file
pub fn load_signal(path: &Path) -> CoreResult<Vec<f32>> {
    let text = std::fs::read_to_string(path).map_err(|err| AnalysisError::EmptyOrInvalidInput {
        reason: format!("cannot read {}: {}", path.display(), err),
    })?;
    parse_signal_text(&text)
}
