//! Recovery phase boundaries per muscle size category

use serde::{Deserialize, Serialize};

use crate::muscles::MuscleSizeCategory;

/// Day values separating the recovery phases.
///
/// Strictly increasing: `rest_end < recovering_end < ready_end < train_end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecoveryThresholds {
    /// End of mandatory rest
    pub rest_end: f64,
    /// End of the recovering phase
    pub recovering_end: f64,
    /// End of the ready phase
    pub ready_end: f64,
    /// Full recovery, progress bar reaches 100%
    pub train_end: f64,
}

const SMALL: RecoveryThresholds = RecoveryThresholds {
    rest_end: 1.0,
    recovering_end: 2.0,
    ready_end: 3.0,
    train_end: 5.0,
};

const MEDIUM: RecoveryThresholds = RecoveryThresholds {
    rest_end: 1.5,
    recovering_end: 2.5,
    ready_end: 4.0,
    train_end: 6.0,
};

const LARGE: RecoveryThresholds = RecoveryThresholds {
    rest_end: 2.0,
    recovering_end: 3.0,
    ready_end: 5.0,
    train_end: 7.0,
};

/// Thresholds for a size category
pub fn thresholds_for(category: MuscleSizeCategory) -> RecoveryThresholds {
    match category {
        MuscleSizeCategory::Small => SMALL,
        MuscleSizeCategory::Medium => MEDIUM,
        MuscleSizeCategory::Large => LARGE,
    }
}
