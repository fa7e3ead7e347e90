//! liftlog - Strength training log with muscle recovery guidance

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use tracing::warn;

use liftlog::db::{Database, SetEntry};
use liftlog::muscles::{
    is_registered, landmarks_in_category, MuscleSizeCategory, VolumeLandmarks, DEFAULT_LANDMARKS,
    MUSCLE_LANDMARKS,
};
use liftlog::recovery::{
    assess, thresholds_for, MuscleRecovery, MuscleRecoveryInput, MuscleTracker, RecoveryStatus,
};

const DEFAULT_DB_PATH: &str = "liftlog.db";

/// Width of the recovery bar in characters
const BAR_WIDTH: usize = 10;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(author, version, about = "Strength training log with muscle recovery guidance")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "LIFTLOG_DB", default_value = DEFAULT_DB_PATH)]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log sets for a muscle group
    Log {
        /// Muscle group (e.g., "Chest", "Legs")
        muscle: String,

        /// Number of sets
        #[arg(short, long, default_value = "1")]
        sets: u32,

        /// Optional exercise name
        #[arg(short, long)]
        exercise: Option<String>,

        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List logged sets
    List {
        /// Only sets from the last N days
        #[arg(short, long, default_value = "7")]
        days: u32,

        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show recovery status for every muscle group
    Status {
        /// Only show groups in this status (rest, recovering, ready, train, new)
        #[arg(long)]
        only: Option<RecoveryStatus>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Assess a muscle group from given numbers, without the database
    Check {
        /// Muscle group (e.g., "Chest", "Legs")
        muscle: String,

        /// Days since last trained (omit if never trained)
        #[arg(short, long)]
        days: Option<u32>,

        /// Hours since last trained
        #[arg(short = 'H', long)]
        hours: Option<u32>,

        /// Sets performed in the last 7 days
        #[arg(short, long, default_value = "0")]
        sets: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show volume landmarks and recovery thresholds
    Landmarks {
        /// Only groups of this size (small, medium, large)
        #[arg(short, long)]
        category: Option<MuscleSizeCategory>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Log { muscle, sets, exercise, notes }) => {
            if !is_registered(&muscle) {
                warn!("{} has no volume landmarks, defaults will be used", muscle);
                println!("Note: {} is not a known muscle group, using default landmarks", muscle);
            }
            let db = Database::open(&cli.db)?;
            let entry = SetEntry {
                id: None,
                date: Utc::now(),
                muscle_group: muscle.clone(),
                exercise,
                sets,
                notes,
            };
            let id = db.add_entry(&entry)?;
            println!("Logged: {} - {} sets (id: {})", muscle, sets, id);
        }

        Some(Commands::List { days, limit }) => {
            let db = Database::open(&cli.db)?;
            let entries = db.get_entries_since(Utc::now() - Duration::days(i64::from(days)))?;
            println!("Sets from the last {} days:", days);
            println!("{:-<60}", "");
            for e in entries.iter().take(limit) {
                println!(
                    "{} | {:10} | {:>3} sets | {} | {}",
                    e.date.format("%Y-%m-%d %H:%M"),
                    e.muscle_group,
                    e.sets,
                    e.exercise.as_deref().unwrap_or("-"),
                    e.notes.as_deref().unwrap_or("-")
                );
            }
        }

        Some(Commands::Status { only, json }) => {
            print_status(&Database::open(&cli.db)?, only, json)?;
        }

        Some(Commands::Check { muscle, days, hours, sets, json }) => {
            let input = MuscleRecoveryInput::new(muscle, days, sets).with_hours(hours);
            let recovery = assess(&input);
            if json {
                println!("{}", serde_json::to_string_pretty(&recovery)?);
            } else {
                print_recovery(&recovery);
            }
        }

        Some(Commands::Landmarks { category }) => print_landmarks(category),

        None => {
            // Default: show status
            print_status(&Database::open(&cli.db)?, None, false)?;
        }
    }

    Ok(())
}

fn print_status(db: &Database, only: Option<RecoveryStatus>, json: bool) -> Result<()> {
    let entries = db.get_entries()?;
    let tracker = MuscleTracker::from_entries(&entries, Utc::now());
    let report = match only {
        Some(status) => tracker.report_in_status(status),
        None => tracker.report(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Muscle recovery");
    println!("{:-<72}", "");
    for recovery in &report {
        println!(
            "{:10} | {:10} | {} | {:>3} sets | {}",
            recovery.muscle_group,
            recovery.status.label(),
            progress_bar(recovery.progress),
            recovery.weekly_set_count,
            recovery.ready_in.as_deref().unwrap_or("-"),
        );
        println!("{:10}   {}", "", recovery.recommendation);
    }
    Ok(())
}

fn print_recovery(recovery: &MuscleRecovery) {
    let l = &recovery.landmarks;
    println!("{} ({})", recovery.muscle_group, l.category);
    println!("  Status:   {}", recovery.status);
    println!("  Progress: {} {:.0}%", progress_bar(recovery.progress), recovery.progress * 100.0);
    if let Some(ready_in) = &recovery.ready_in {
        println!("  Ready in: {}", ready_in);
    }
    println!(
        "  Volume:   {} sets (MEV {}, MAV {}-{}, MRV {})",
        recovery.weekly_set_count, l.mev, l.mav_low, l.mav_high, l.mrv
    );
    println!("  {}", recovery.recommendation);
}

fn print_landmarks(category: Option<MuscleSizeCategory>) {
    let print_row = |name: &str, l: &VolumeLandmarks| {
        let t = thresholds_for(l.category);
        println!(
            "{:10} | {:6} | {:>3} | {:>3}-{:<3} | {:>3} | {}/{}/{}/{} d",
            name, l.category.label(), l.mev, l.mav_low, l.mav_high, l.mrv,
            t.rest_end, t.recovering_end, t.ready_end, t.train_end
        );
    };

    println!("{:10} | {:6} | MEV | MAV     | MRV | rest/recovering/ready/train", "Group", "Size");
    println!("{:-<72}", "");
    match category {
        Some(category) => {
            for (name, landmarks) in landmarks_in_category(category) {
                print_row(name, &landmarks);
            }
            if DEFAULT_LANDMARKS.category == category {
                print_row("(other)", &DEFAULT_LANDMARKS);
            }
        }
        None => {
            for (name, landmarks) in MUSCLE_LANDMARKS {
                print_row(name, landmarks);
            }
            print_row("(other)", &DEFAULT_LANDMARKS);
        }
    }
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
