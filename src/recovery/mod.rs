//! Recovery module - muscle recovery status and training volume guidance
//!
//! Features:
//! - Recovery phase per muscle group from time since last trained and weekly sets
//! - Progress fraction for recovery bars
//! - Time-until-ready estimate
//! - Coaching message based on volume landmarks (MEV / MAV / MRV)
//!
//! Everything here is a pure function of its inputs and the two constant
//! registries ([`crate::muscles`] and [`thresholds`]).

pub mod progress;
pub mod ready_in;
pub mod recommendation;
pub mod status;
pub mod thresholds;
pub mod tracker;

pub use thresholds::{thresholds_for, RecoveryThresholds};
pub use tracker::MuscleTracker;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::muscles::{landmarks_for, VolumeLandmarks};

/// Recovery phase of a muscle group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecoveryStatus {
    Rest,
    Recovering,
    Ready,
    Train,
    /// Never trained
    New,
}

impl RecoveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryStatus::Rest => "Rest",
            RecoveryStatus::Recovering => "Recovering",
            RecoveryStatus::Ready => "Ready",
            RecoveryStatus::Train => "Train",
            RecoveryStatus::New => "New",
        }
    }

    /// Still inside the rest or recovering window
    pub fn is_recovering(&self) -> bool {
        matches!(self, RecoveryStatus::Rest | RecoveryStatus::Recovering)
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecoveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rest" => Ok(RecoveryStatus::Rest),
            "recovering" => Ok(RecoveryStatus::Recovering),
            "ready" => Ok(RecoveryStatus::Ready),
            "train" => Ok(RecoveryStatus::Train),
            "new" => Ok(RecoveryStatus::New),
            _ => Err(format!("Unknown recovery status: {}", s)),
        }
    }
}

/// Per-muscle training aggregate supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleRecoveryInput {
    pub muscle_group: String,
    /// `None` = never trained
    pub days_since_last_trained: Option<u32>,
    /// Sub-day precision, only used for the ready-in estimate
    pub hours_since_last_trained: Option<u32>,
    /// Sets performed in the trailing 7 days
    pub weekly_set_count: u32,
}

impl MuscleRecoveryInput {
    pub fn new(muscle_group: impl Into<String>, days: Option<u32>, weekly_sets: u32) -> Self {
        Self {
            muscle_group: muscle_group.into(),
            days_since_last_trained: days,
            hours_since_last_trained: None,
            weekly_set_count: weekly_sets,
        }
    }

    pub fn with_hours(mut self, hours: Option<u32>) -> Self {
        self.hours_since_last_trained = hours;
        self
    }
}

/// All derived outputs for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleRecovery {
    pub muscle_group: String,
    pub status: RecoveryStatus,
    /// 0.0 - 1.0
    pub progress: f64,
    pub ready_in: Option<String>,
    pub recommendation: String,
    pub weekly_set_count: u32,
    pub landmarks: VolumeLandmarks,
}

/// Assess a muscle group using the registered landmarks and thresholds
pub fn assess(input: &MuscleRecoveryInput) -> MuscleRecovery {
    let landmarks = landmarks_for(&input.muscle_group);
    let thresholds = thresholds_for(landmarks.category);

    MuscleRecovery {
        muscle_group: input.muscle_group.clone(),
        status: status::compute_status(input, &landmarks, &thresholds),
        progress: progress::compute_progress(input, &landmarks, &thresholds),
        ready_in: ready_in::estimate_ready_in(input, &landmarks, &thresholds),
        recommendation: recommendation::generate_recommendation(input, &landmarks),
        weekly_set_count: input.weekly_set_count,
        landmarks,
    }
}

/// Recovery phase for a muscle group
pub fn compute_status(muscle_group: &str, days: Option<u32>, weekly_sets: u32) -> RecoveryStatus {
    let input = MuscleRecoveryInput::new(muscle_group, days, weekly_sets);
    let landmarks = landmarks_for(muscle_group);
    status::compute_status(&input, &landmarks, &thresholds_for(landmarks.category))
}

/// Recovery bar fill (0.0 - 1.0) for a muscle group
pub fn compute_progress(muscle_group: &str, days: Option<u32>, weekly_sets: u32) -> f64 {
    let input = MuscleRecoveryInput::new(muscle_group, days, weekly_sets);
    let landmarks = landmarks_for(muscle_group);
    progress::compute_progress(&input, &landmarks, &thresholds_for(landmarks.category))
}

/// Time until ready, `None` unless the muscle is resting or recovering
pub fn estimate_ready_in(
    muscle_group: &str,
    days: Option<u32>,
    hours: Option<u32>,
    weekly_sets: u32,
) -> Option<String> {
    let input = MuscleRecoveryInput::new(muscle_group, days, weekly_sets).with_hours(hours);
    let landmarks = landmarks_for(muscle_group);
    ready_in::estimate_ready_in(&input, &landmarks, &thresholds_for(landmarks.category))
}

/// Coaching message for a muscle group
pub fn generate_recommendation(muscle_group: &str, days: Option<u32>, weekly_sets: u32) -> String {
    let input = MuscleRecoveryInput::new(muscle_group, days, weekly_sets);
    recommendation::generate_recommendation(&input, &landmarks_for(muscle_group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::muscles::{registered_groups, DEFAULT_LANDMARKS};

    fn all_groups() -> Vec<&'static str> {
        let mut groups: Vec<_> = registered_groups().collect();
        groups.push("Forearms"); // unregistered, default landmarks
        groups
    }

    #[test]
    fn test_never_trained_is_new_and_full() {
        for group in all_groups() {
            for sets in [0, 5, 100] {
                assert_eq!(compute_status(group, None, sets), RecoveryStatus::New);
                assert_eq!(compute_progress(group, None, sets), 1.0);
                assert_eq!(estimate_ready_in(group, None, None, sets), None);
            }
        }
    }

    #[test]
    fn test_volume_override_forces_rest() {
        for group in all_groups() {
            let mrv = landmarks_for(group).mrv;
            for days in [0, 1, 3, 10, 30] {
                assert_eq!(compute_status(group, Some(days), mrv + 1), RecoveryStatus::Rest);
                assert_eq!(compute_progress(group, Some(days), mrv + 1), 0.1);
            }
        }
    }

    #[test]
    fn test_legs_scenarios() {
        assert_eq!(compute_status("Legs", Some(1), 8), RecoveryStatus::Rest);
        assert_eq!(compute_status("Legs", Some(3), 8), RecoveryStatus::Ready);
        assert_eq!(compute_status("Legs", Some(4), 3), RecoveryStatus::Train);
        assert_eq!(compute_status("Legs", Some(10), 25), RecoveryStatus::Rest);
        assert_eq!(compute_progress("Legs", Some(10), 25), 0.1);
    }

    #[test]
    fn test_ready_in_only_while_recovering() {
        for group in all_groups() {
            for days in 0..12 {
                for sets in [0, 4, 8, 15, 19, 30] {
                    let status = compute_status(group, Some(days), sets);
                    let label = estimate_ready_in(group, Some(days), Some(days * 24), sets);
                    assert_eq!(label.is_some(), status.is_recovering(), "{} d={} s={}", group, days, sets);
                }
            }
        }
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        for group in all_groups() {
            for days in [None, Some(0), Some(2), Some(6)] {
                let first = generate_recommendation(group, days, 9);
                let second = generate_recommendation(group, days, 9);
                assert_eq!(first, second);
                assert!(!first.is_empty());
            }
        }
    }

    #[test]
    fn test_assess_bundles_outputs() {
        let input = MuscleRecoveryInput::new("Legs", Some(1), 8).with_hours(Some(30));
        let recovery = assess(&input);
        assert_eq!(recovery.status, RecoveryStatus::Rest);
        assert_eq!(recovery.ready_in.as_deref(), Some("~1d 18h"));
        assert!((recovery.progress - 1.0 / 7.0).abs() < 1e-9);
        assert_eq!(recovery.landmarks.mrv, 20);
        assert_eq!(recovery.weekly_set_count, 8);
    }

    #[test]
    fn test_assess_unknown_group_uses_default() {
        let recovery = assess(&MuscleRecoveryInput::new("Neck", Some(2), 3));
        assert_eq!(recovery.landmarks, DEFAULT_LANDMARKS);
        // MEDIUM: 2 < 2.5 -> recovering
        assert_eq!(recovery.status, RecoveryStatus::Recovering);
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("ready".parse::<RecoveryStatus>(), Ok(RecoveryStatus::Ready));
        assert_eq!("NEW".parse::<RecoveryStatus>(), Ok(RecoveryStatus::New));
        assert!("tired".parse::<RecoveryStatus>().is_err());
        assert_eq!(RecoveryStatus::Recovering.to_string(), "Recovering");
    }

    #[test]
    fn test_recovery_serializes() {
        let recovery = assess(&MuscleRecoveryInput::new("Core", None, 0));
        let json = serde_json::to_value(&recovery).unwrap();
        assert_eq!(json["status"], "NEW");
        assert_eq!(json["ready_in"], serde_json::Value::Null);
        assert_eq!(json["landmarks"]["category"], "SMALL");
    }
}
