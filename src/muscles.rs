//! Muscle group definitions - weekly volume landmarks per group

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Size class of a muscle group, ordered by recovery demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum MuscleSizeCategory {
    Small,  // Arms, core
    Medium, // Shoulders
    Large,  // Chest, back, legs
}

impl MuscleSizeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleSizeCategory::Small => "small",
            MuscleSizeCategory::Medium => "medium",
            MuscleSizeCategory::Large => "large",
        }
    }

    /// All categories for iteration
    pub fn all() -> &'static [MuscleSizeCategory] {
        &[
            MuscleSizeCategory::Small,
            MuscleSizeCategory::Medium,
            MuscleSizeCategory::Large,
        ]
    }
}

impl fmt::Display for MuscleSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MuscleSizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(MuscleSizeCategory::Small),
            "medium" => Ok(MuscleSizeCategory::Medium),
            "large" => Ok(MuscleSizeCategory::Large),
            _ => Err(format!("Unknown muscle size category: {}", s)),
        }
    }
}

/// Weekly set landmarks for one muscle group.
///
/// Ordered `mev <= mav_low <= mav_high <= mrv`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeLandmarks {
    pub category: MuscleSizeCategory,
    /// Minimum effective volume
    pub mev: u32,
    /// Lower bound of the adaptive sweet spot
    pub mav_low: u32,
    /// Upper bound of the adaptive sweet spot
    pub mav_high: u32,
    /// Maximum recoverable volume
    pub mrv: u32,
}

/// Landmarks for any muscle group without its own entry
pub const DEFAULT_LANDMARKS: VolumeLandmarks = VolumeLandmarks {
    category: MuscleSizeCategory::Medium,
    mev: 6,
    mav_low: 10,
    mav_high: 14,
    mrv: 20,
};

/// Registered muscle groups (exact, case-sensitive names)
pub const MUSCLE_LANDMARKS: &[(&str, VolumeLandmarks)] = &[
    (
        "Chest",
        VolumeLandmarks {
            category: MuscleSizeCategory::Large,
            mev: 8,
            mav_low: 12,
            mav_high: 18,
            mrv: 22,
        },
    ),
    (
        "Back",
        VolumeLandmarks {
            category: MuscleSizeCategory::Large,
            mev: 10,
            mav_low: 14,
            mav_high: 20,
            mrv: 25,
        },
    ),
    (
        "Legs",
        VolumeLandmarks {
            category: MuscleSizeCategory::Large,
            mev: 6,
            mav_low: 12,
            mav_high: 16,
            mrv: 20,
        },
    ),
    (
        "Shoulders",
        VolumeLandmarks {
            category: MuscleSizeCategory::Medium,
            mev: 8,
            mav_low: 12,
            mav_high: 18,
            mrv: 22,
        },
    ),
    (
        "Arms",
        VolumeLandmarks {
            category: MuscleSizeCategory::Small,
            mev: 6,
            mav_low: 10,
            mav_high: 14,
            mrv: 20,
        },
    ),
    (
        "Core",
        VolumeLandmarks {
            category: MuscleSizeCategory::Small,
            mev: 4,
            mav_low: 8,
            mav_high: 14,
            mrv: 20,
        },
    ),
];

/// Find landmarks for a muscle group, falling back to [`DEFAULT_LANDMARKS`]
pub fn landmarks_for(muscle_group: &str) -> VolumeLandmarks {
    match MUSCLE_LANDMARKS.iter().find(|(name, _)| *name == muscle_group) {
        Some((_, landmarks)) => *landmarks,
        None => {
            debug!("No landmarks for muscle group {:?}, using defaults", muscle_group);
            DEFAULT_LANDMARKS
        }
    }
}

/// Names of all registered muscle groups
pub fn registered_groups() -> impl Iterator<Item = &'static str> {
    MUSCLE_LANDMARKS.iter().map(|(name, _)| *name)
}

/// Whether a muscle group has its own landmarks (otherwise defaults apply)
pub fn is_registered(muscle_group: &str) -> bool {
    registered_groups().any(|name| name == muscle_group)
}

/// Registered muscle groups of one size category
pub fn landmarks_in_category(
    category: MuscleSizeCategory,
) -> impl Iterator<Item = (&'static str, VolumeLandmarks)> {
    MUSCLE_LANDMARKS
        .iter()
        .filter(move |(_, landmarks)| landmarks.category == category)
        .map(|(name, landmarks)| (*name, *landmarks))
}
