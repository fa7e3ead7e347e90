//! Recovery status from elapsed time and weekly volume

use super::thresholds::RecoveryThresholds;
use super::{MuscleRecoveryInput, RecoveryStatus};
use crate::muscles::VolumeLandmarks;

/// Threshold stretch once weekly volume passes the top of the MAV range
pub const HIGH_VOLUME_MULTIPLIER: f64 = 1.3;

/// Multiplier applied to every recovery threshold for this week's volume
pub fn volume_multiplier(weekly_sets: u32, landmarks: &VolumeLandmarks) -> f64 {
    if weekly_sets > landmarks.mav_high {
        HIGH_VOLUME_MULTIPLIER
    } else {
        1.0
    }
}

/// Volume beyond MRV forces rest no matter how long ago the muscle was trained
pub fn exceeds_mrv(weekly_sets: u32, landmarks: &VolumeLandmarks) -> bool {
    weekly_sets > landmarks.mrv
}

/// Derive the recovery phase.
///
/// A muscle sitting exactly on a boundary belongs to the later phase.
pub fn compute_status(
    input: &MuscleRecoveryInput,
    landmarks: &VolumeLandmarks,
    thresholds: &RecoveryThresholds,
) -> RecoveryStatus {
    let Some(days) = input.days_since_last_trained else {
        return RecoveryStatus::New;
    };
    let sets = input.weekly_set_count;

    if exceeds_mrv(sets, landmarks) {
        return RecoveryStatus::Rest;
    }

    let multiplier = volume_multiplier(sets, landmarks);
    let rest_end = thresholds.rest_end * multiplier;
    let recovering_end = thresholds.recovering_end * multiplier;
    let ready_end = thresholds.ready_end * multiplier;
    let days = f64::from(days);

    if days < rest_end {
        RecoveryStatus::Rest
    } else if days < recovering_end {
        RecoveryStatus::Recovering
    } else if days < ready_end {
        // Recovered but below MEV: push to train rather than idle as ready
        if sets < landmarks.mev {
            RecoveryStatus::Train
        } else {
            RecoveryStatus::Ready
        }
    } else {
        RecoveryStatus::Train
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::muscles::{landmarks_for, registered_groups, MuscleSizeCategory};
    use crate::recovery::thresholds::thresholds_for;

    fn status(group: &str, days: Option<u32>, sets: u32) -> RecoveryStatus {
        let landmarks = landmarks_for(group);
        let input = MuscleRecoveryInput::new(group, days, sets);
        compute_status(&input, &landmarks, &thresholds_for(landmarks.category))
    }

    fn rank(status: RecoveryStatus) -> u8 {
        match status {
            RecoveryStatus::Rest => 0,
            RecoveryStatus::Recovering => 1,
            RecoveryStatus::Ready | RecoveryStatus::Train => 2,
            RecoveryStatus::New => unreachable!("trained muscle reported as new"),
        }
    }

    #[test]
    fn test_multiplier() {
        let legs = landmarks_for("Legs");
        assert_eq!(volume_multiplier(16, &legs), 1.0);
        assert_eq!(volume_multiplier(17, &legs), HIGH_VOLUME_MULTIPLIER);
    }

    #[test]
    fn test_legs_just_trained_rest() {
        assert_eq!(status("Legs", Some(1), 8), RecoveryStatus::Rest);
    }

    #[test]
    fn test_legs_day_three_ready() {
        // 3 < 3.0 is false, falls through to the ready window
        assert_eq!(status("Legs", Some(3), 8), RecoveryStatus::Ready);
    }

    #[test]
    fn test_legs_under_volume_promotion() {
        assert_eq!(status("Legs", Some(4), 3), RecoveryStatus::Train);
        assert_eq!(status("Legs", Some(4), 6), RecoveryStatus::Ready);
    }

    #[test]
    fn test_legs_overloaded() {
        assert_eq!(status("Legs", Some(10), 25), RecoveryStatus::Rest);
        assert_eq!(status("Legs", Some(0), 21), RecoveryStatus::Rest);
        assert_eq!(status("Legs", Some(10), 20), RecoveryStatus::Train);
    }

    #[test]
    fn test_boundary_goes_to_next_phase() {
        // LARGE: rest_end 2.0, recovering_end 3.0, ready_end 5.0
        assert_eq!(status("Legs", Some(2), 8), RecoveryStatus::Recovering);
        assert_eq!(status("Legs", Some(5), 8), RecoveryStatus::Train);
        // SMALL: rest_end 1.0
        assert_eq!(status("Arms", Some(0), 8), RecoveryStatus::Rest);
        assert_eq!(status("Arms", Some(1), 8), RecoveryStatus::Recovering);
    }

    #[test]
    fn test_high_volume_stretches_thresholds() {
        // Legs at 18 sets: 2.6 / 3.9 / 6.5
        assert_eq!(status("Legs", Some(2), 18), RecoveryStatus::Rest);
        assert_eq!(status("Legs", Some(3), 18), RecoveryStatus::Recovering);
        assert_eq!(status("Legs", Some(6), 18), RecoveryStatus::Ready);
        assert_eq!(status("Legs", Some(7), 18), RecoveryStatus::Train);
    }

    #[test]
    fn test_medium_default_group() {
        let landmarks = landmarks_for("Glutes");
        assert_eq!(landmarks.category, MuscleSizeCategory::Medium);
        assert_eq!(status("Glutes", Some(1), 8), RecoveryStatus::Rest);
        assert_eq!(status("Glutes", Some(2), 8), RecoveryStatus::Recovering);
        assert_eq!(status("Glutes", Some(3), 8), RecoveryStatus::Ready);
        assert_eq!(status("Glutes", Some(4), 8), RecoveryStatus::Train);
    }

    #[test]
    fn test_never_trained_ignores_volume() {
        assert_eq!(status("Chest", None, 0), RecoveryStatus::New);
        assert_eq!(status("Chest", None, 50), RecoveryStatus::New);
    }

    #[test]
    fn test_monotonic_recovery() {
        for group in registered_groups().chain(["Unknown"]) {
            let mrv = landmarks_for(group).mrv;
            for sets in 0..=mrv {
                let mut last = 0;
                for days in 0..15 {
                    let current = rank(status(group, Some(days), sets));
                    assert!(current >= last, "{} sets={} day={} moved backward", group, sets, days);
                    last = current;
                }
            }
        }
    }
}
