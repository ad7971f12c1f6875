// src/baseline/registry.rs
//! Process-start registry of normal-muscle reference signals
//!
//! Reference signals are loaded once at startup and held read-only for
//! the lifetime of the service; there is no reload without restart. The
//! registry is an explicitly constructed value passed by reference into
//! analysis calls, not ambient global state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::baseline::muscle::MuscleGroup;
use crate::config::constants::baseline;
use crate::error::{AnalysisError, CoreResult};
use crate::signal::ingest;

/// Immutable map from muscle group to its reference signal
#[derive(Debug, Clone)]
pub struct BaselineRegistry {
    baselines: HashMap<MuscleGroup, Vec<f32>>,
}

impl BaselineRegistry {
    /// Build a registry from in-memory signals
    ///
    /// Intended for tests and embedders that source reference data
    /// themselves. Empty signals are rejected.
    pub fn from_signals(signals: HashMap<MuscleGroup, Vec<f32>>) -> CoreResult<Self> {
        for (muscle, samples) in &signals {
            if samples.is_empty() {
                return Err(AnalysisError::EmptyOrInvalidInput {
                    reason: format!("reference signal for {} is empty", muscle),
                });
            }
        }
        Ok(Self { baselines: signals })
    }

    /// Load every muscle group's reference from a directory, failing fast
    ///
    /// Expects one `baseline_<muscle>.csv` per muscle group. The first
    /// missing or unreadable file aborts startup for the whole registry.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let mut baselines = HashMap::new();

        for muscle in MuscleGroup::ALL {
            let path = Self::reference_path(dir, muscle);
            let samples = Self::load_reference(&path, muscle)?;
            baselines.insert(muscle, samples);
        }

        info!(dir = %dir.display(), groups = baselines.len(), "baseline registry loaded");
        Ok(Self { baselines })
    }

    /// Load whatever references are present, excluding the rest
    ///
    /// Muscle groups whose file is missing or unparseable are left out of
    /// the selectable set and reported back to the caller.
    pub fn load_available(dir: &Path) -> (Self, Vec<MuscleGroup>) {
        let mut baselines = HashMap::new();
        let mut skipped = Vec::new();

        for muscle in MuscleGroup::ALL {
            let path = Self::reference_path(dir, muscle);
            match Self::load_reference(&path, muscle) {
                Ok(samples) => {
                    baselines.insert(muscle, samples);
                }
                Err(err) => {
                    warn!(%muscle, %err, "excluding muscle group from baseline registry");
                    skipped.push(muscle);
                }
            }
        }

        info!(
            dir = %dir.display(),
            loaded = baselines.len(),
            skipped = skipped.len(),
            "baseline registry loaded (lenient)"
        );
        (Self { baselines }, skipped)
    }

    /// Reference signal for a muscle group, if one was loaded
    pub fn get(&self, muscle: MuscleGroup) -> Option<&[f32]> {
        self.baselines.get(&muscle).map(Vec::as_slice)
    }

    /// Muscle groups with a loaded reference, in display order
    pub fn available(&self) -> Vec<MuscleGroup> {
        MuscleGroup::ALL
            .into_iter()
            .filter(|m| self.baselines.contains_key(m))
            .collect()
    }

    /// Number of loaded references
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Whether no reference was loaded
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    fn reference_path(dir: &Path, muscle: MuscleGroup) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            baseline::BASELINE_FILE_PREFIX,
            muscle.file_stem(),
            baseline::BASELINE_FILE_EXTENSION
        ))
    }

    fn load_reference(path: &Path, muscle: MuscleGroup) -> CoreResult<Vec<f32>> {
        let text =
            std::fs::read_to_string(path).map_err(|_| AnalysisError::MissingBaselineFile {
                muscle,
                path: Some(path.to_path_buf()),
            })?;
        ingest::parse_signal_text(&text)
    }
}
