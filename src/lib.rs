//! liftlog - Strength training log with muscle recovery guidance
//!
//! Turns per-muscle training history (time since last trained, sets in the
//! trailing week) into a recovery status, a progress bar value, a
//! time-until-ready label and a coaching message.

pub mod db;
pub mod muscles;
pub mod recovery;

pub use db::Database;
pub use recovery::{MuscleRecovery, MuscleRecoveryInput, MuscleTracker, RecoveryStatus};
