// src/baseline/muscle.rs
//! The closed muscle-group enumeration
//!
//! One enumeration backs both baseline selection and the clinical
//! guidance lookup, so the two tables cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Muscle groups with a preloaded normal-activity reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    /// Upper-arm flexor
    Biceps,
    /// Upper-arm extensor
    Triceps,
    /// Forearm flexor/extensor compartment
    Forearm,
    /// Quadriceps group
    Thigh,
    /// Gastrocnemius/soleus group
    Calf,
}

impl MuscleGroup {
    /// Every selectable muscle group, in display order
    pub const ALL: [MuscleGroup; 5] = [
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Forearm,
        MuscleGroup::Thigh,
        MuscleGroup::Calf,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearm => "Forearm",
            MuscleGroup::Thigh => "Thigh",
            MuscleGroup::Calf => "Calf",
        }
    }

    /// Lowercase stem used in reference file names
    pub fn file_stem(&self) -> &'static str {
        match self {
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearm => "forearm",
            MuscleGroup::Thigh => "thigh",
            MuscleGroup::Calf => "calf",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown muscle group: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(MuscleGroup::ALL.len(), 5);
        for muscle in MuscleGroup::ALL {
            assert_eq!(muscle.as_str().parse::<MuscleGroup>().unwrap(), muscle);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("biceps".parse::<MuscleGroup>().unwrap(), MuscleGroup::Biceps);
        assert_eq!(" CALF ".parse::<MuscleGroup>().unwrap(), MuscleGroup::Calf);
        assert!("deltoid".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn test_file_stem_is_lowercase_name() {
        for muscle in MuscleGroup::ALL {
            assert_eq!(muscle.file_stem(), muscle.as_str().to_lowercase());
        }
    }
}
