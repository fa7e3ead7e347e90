//! Time-until-ready estimate for resting and recovering muscles

use super::status::{compute_status, volume_multiplier};
use super::thresholds::RecoveryThresholds;
use super::MuscleRecoveryInput;
use crate::muscles::VolumeLandmarks;

/// Label for a muscle that is past the ready point but not yet reclassified
pub const SOON_LABEL: &str = "Soon";

/// Remaining time until the end of the recovering phase.
///
/// Uses hours since last trained (missing hours count as 0) rather than
/// whole days, so the label can be finer than the status.
pub fn estimate_ready_in(
    input: &MuscleRecoveryInput,
    landmarks: &VolumeLandmarks,
    thresholds: &RecoveryThresholds,
) -> Option<String> {
    if !compute_status(input, landmarks, thresholds).is_recovering() {
        return None;
    }

    let multiplier = volume_multiplier(input.weekly_set_count, landmarks);
    let ready_at_hours = thresholds.recovering_end * multiplier * 24.0;
    let hours_since = f64::from(input.hours_since_last_trained.unwrap_or(0));
    let remaining = (ready_at_hours - hours_since).max(0.0);

    Some(format_remaining(remaining))
}

/// Format remaining hours as `~2d 5h`, `~3d`, `~7h` or `Soon`.
///
/// Partial hours round up.
pub fn format_remaining(remaining_hours: f64) -> String {
    let hours = remaining_hours.max(0.0).ceil() as u64;

    if hours >= 24 {
        let days = hours / 24;
        let leftover = hours % 24;
        if leftover > 0 {
            format!("~{}d {}h", days, leftover)
        } else {
            format!("~{}d", days)
        }
    } else if hours > 0 {
        format!("~{}h", hours)
    } else {
        SOON_LABEL.to_string()
    }
}
