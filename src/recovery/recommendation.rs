//! Coaching message per muscle group based on status and volume landmarks

use super::status::{compute_status, volume_multiplier};
use super::thresholds::thresholds_for;
use super::{MuscleRecoveryInput, RecoveryStatus};
use crate::muscles::VolumeLandmarks;

/// Headroom (sets below MRV) at which a ready muscle only gets maintenance work
pub const MAINTENANCE_HEADROOM: u32 = 2;

/// Build the coaching message for a muscle group
pub fn generate_recommendation(input: &MuscleRecoveryInput, landmarks: &VolumeLandmarks) -> String {
    let thresholds = thresholds_for(landmarks.category);
    let status = compute_status(input, landmarks, &thresholds);
    let group = input.muscle_group.as_str();
    let sets = input.weekly_set_count;

    match status {
        RecoveryStatus::Rest => {
            let days = remaining_days(input, landmarks, thresholds.rest_end);
            if sets > landmarks.mav_high {
                format!(
                    "{} is near max volume ({}/{} sets this week). Rest {} more {} before training it again.",
                    group, sets, landmarks.mrv, days, plural_days(days)
                )
            } else {
                format!(
                    "{} was just trained. Rest {} more {} to let it recover.",
                    group, days, plural_days(days)
                )
            }
        }
        RecoveryStatus::Recovering => {
            let days = remaining_days(input, landmarks, thresholds.recovering_end);
            format!(
                "{} is still recovering. Keep it light, ready in about {} {}.",
                group, days, plural_days(days)
            )
        }
        RecoveryStatus::Ready => {
            if sets < landmarks.mev {
                format!(
                    "{} is recovered and below minimum volume. Add {} this week.",
                    group, add_sets_range(sets, landmarks)
                )
            } else {
                let headroom = landmarks.mrv.saturating_sub(sets);
                if headroom > MAINTENANCE_HEADROOM {
                    format!(
                        "{} is ready to train. Up to {} more sets this week before max recoverable volume ({}).",
                        group, headroom, landmarks.mrv
                    )
                } else {
                    format!(
                        "{} is ready but close to max volume ({}/{} sets). Stick to maintenance work.",
                        group, sets, landmarks.mrv
                    )
                }
            }
        }
        RecoveryStatus::Train => format!(
            "{} is fully recovered. Add {} to maintain progress.",
            group, add_sets_range(sets, landmarks)
        ),
        RecoveryStatus::New => format!(
            "No history for {} yet. Start with {}-{} sets this week and reassess.",
            group, landmarks.mev, landmarks.mav_low
        ),
    }
}

/// Whole days until `phase_end` (stretched by volume), at least 1
fn remaining_days(
    input: &MuscleRecoveryInput,
    landmarks: &VolumeLandmarks,
    phase_end: f64,
) -> u32 {
    let multiplier = volume_multiplier(input.weekly_set_count, landmarks);
    let days_since = f64::from(input.days_since_last_trained.unwrap_or(0));
    let remaining = (phase_end * multiplier - days_since).ceil();
    if remaining < 1.0 { 1 } else { remaining as u32 }
}

/// Sets to add this week: from up-to-MEV to up-to-MAV-low
fn add_sets_range(sets: u32, landmarks: &VolumeLandmarks) -> String {
    let low = landmarks.mev.saturating_sub(sets).max(1);
    let high = landmarks.mav_low.saturating_sub(sets).max(low);
    if low == high {
        format!("{} {}", low, if low == 1 { "set" } else { "sets" })
    } else {
        format!("{}-{} sets", low, high)
    }
}

fn plural_days(days: u32) -> &'static str {
    if days == 1 { "day" } else { "days" }
}
