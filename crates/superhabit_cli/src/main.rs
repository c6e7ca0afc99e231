//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `superhabit_core` linkage.
//! - Replay the add/archive/milestone/reset flow and print the counts.
//!
//! # Configuration
//! - `SUPERHABIT_LOG_DIR`: absolute directory; enables file logging when set.
//! - `SUPERHABIT_LOG_LEVEL`: optional level, defaults to the build-mode level.

use superhabit_core::{default_log_level, init_logging, Snapshot, StateStore};

const LOG_DIR_ENV: &str = "SUPERHABIT_LOG_DIR";
const LOG_LEVEL_ENV: &str = "SUPERHABIT_LOG_LEVEL";

fn main() {
    println!("superhabit_core ping={}", superhabit_core::ping());
    println!("superhabit_core version={}", superhabit_core::core_version());

    if let Some(log_dir) = env_value(LOG_DIR_ENV) {
        let level = env_value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        match init_logging(&level, &log_dir) {
            Ok(()) => println!("logging level={level} dir={log_dir}"),
            Err(err) => eprintln!("logging disabled: {err}"),
        }
    }

    let mut store = StateStore::new();
    print_counts("seed", &store.snapshot());
    print_counts("add_activity", &store.add_activity("Read 20 pages", "Goals"));
    print_counts("archive_activity", &store.archive_activity(4));
    print_counts("add_milestone", &store.add_milestone("Exam day"));
    print_counts("reset_all", &store.reset_all());
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn print_counts(step: &str, snapshot: &Snapshot) {
    println!(
        "{step}: activities={} active={} groups={} milestones={}",
        snapshot.activities.len(),
        snapshot.active_activities().count(),
        snapshot.groups.len(),
        snapshot.milestones.len()
    );
}
