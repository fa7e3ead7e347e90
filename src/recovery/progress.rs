//! Recovery bar progress (0.0 - 1.0)
//!
//! A linear ramp from the last session to the (volume-stretched) full
//! recovery point. It is not derived from the status, so a muscle promoted
//! to train for low volume can still show a partly filled bar.

use super::status::{exceeds_mrv, volume_multiplier};
use super::thresholds::RecoveryThresholds;
use super::MuscleRecoveryInput;
use crate::muscles::VolumeLandmarks;

/// Bar fill while volume is above MRV, never empty
pub const OVERLOADED_PROGRESS: f64 = 0.1;

pub fn compute_progress(
    input: &MuscleRecoveryInput,
    landmarks: &VolumeLandmarks,
    thresholds: &RecoveryThresholds,
) -> f64 {
    let Some(days) = input.days_since_last_trained else {
        return 1.0;
    };
    let sets = input.weekly_set_count;

    if exceeds_mrv(sets, landmarks) {
        return OVERLOADED_PROGRESS;
    }

    let train_end = thresholds.train_end * volume_multiplier(sets, landmarks);
    (f64::from(days) / train_end).clamp(0.0, 1.0)
}
