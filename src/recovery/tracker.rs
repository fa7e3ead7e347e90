//! Per-muscle training aggregates from the set log

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{assess, MuscleRecovery, MuscleRecoveryInput, RecoveryStatus};
use crate::db::SetEntry;
use crate::muscles::registered_groups;

/// Rolling window for weekly set counts
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Load statistics for a single muscle group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleLoad {
    pub group: String,
    pub week_sets: u32,
    pub last_trained: Option<DateTime<Utc>>,
}

/// Tracks muscle group load from the set log as of `now`
pub struct MuscleTracker {
    loads: BTreeMap<String, MuscleLoad>,
    now: DateTime<Utc>,
}

impl MuscleTracker {
    /// Build tracker from logged sets
    pub fn from_entries(entries: &[SetEntry], now: DateTime<Utc>) -> Self {
        let mut loads: BTreeMap<String, MuscleLoad> = BTreeMap::new();

        // Registered groups show up even with no history
        for group in registered_groups() {
            loads.insert(group.to_string(), MuscleLoad::empty(group));
        }

        let week_ago = now - Duration::days(WEEK_WINDOW_DAYS);
        let mut skipped = 0;

        for entry in entries {
            if entry.date > now {
                skipped += 1;
                continue;
            }

            let load = loads
                .entry(entry.muscle_group.clone())
                .or_insert_with(|| MuscleLoad::empty(&entry.muscle_group));

            if entry.date > week_ago {
                load.week_sets = load.week_sets.saturating_add(entry.sets);
            }
            if load.last_trained.is_none_or(|last| last < entry.date) {
                load.last_trained = Some(entry.date);
            }
        }

        debug!(
            "Aggregated {} entries into {} muscle groups ({} in the future skipped)",
            entries.len(),
            loads.len(),
            skipped
        );

        Self { loads, now }
    }

    /// Get load for a specific muscle group
    pub fn get_load(&self, group: &str) -> Option<&MuscleLoad> {
        self.loads.get(group)
    }

    /// All loads sorted by group name
    pub fn loads(&self) -> impl Iterator<Item = &MuscleLoad> {
        self.loads.values()
    }

    /// Engine input for a muscle group (untracked groups count as never trained)
    pub fn input_for(&self, group: &str) -> MuscleRecoveryInput {
        match self.loads.get(group) {
            Some(load) => self.input_from_load(load),
            None => MuscleRecoveryInput::new(group, None, 0),
        }
    }

    fn input_from_load(&self, load: &MuscleLoad) -> MuscleRecoveryInput {
        let elapsed = load.last_trained.map(|last| self.now - last);
        MuscleRecoveryInput {
            muscle_group: load.group.clone(),
            days_since_last_trained: elapsed.map(|e| clamp_to_u32(e.num_days())),
            hours_since_last_trained: elapsed.map(|e| clamp_to_u32(e.num_hours())),
            weekly_set_count: load.week_sets,
        }
    }

    /// Recovery report for every tracked muscle group
    pub fn report(&self) -> Vec<MuscleRecovery> {
        self.loads
            .values()
            .map(|load| assess(&self.input_from_load(load)))
            .collect()
    }

    /// Recovery report limited to groups currently in `status`
    pub fn report_in_status(&self, status: RecoveryStatus) -> Vec<MuscleRecovery> {
        let mut report = self.report();
        report.retain(|r| r.status == status);
        report
    }
}

impl MuscleLoad {
    fn empty(group: &str) -> Self {
        Self {
            group: group.to_string(),
            week_sets: 0,
            last_trained: None,
        }
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
