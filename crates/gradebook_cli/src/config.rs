//! Process configuration resolution.
//!
//! # Responsibility
//! - Resolve the data file, log level, and log directory from command line
//!   and environment with working defaults.
//!
//! # Invariants
//! - Resolution never fails; unusable values surface at their use sites
//!   (logging init reports its own errors).

use gradebook_core::default_log_level;
use std::env;
use std::path::PathBuf;

const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";
const LOG_LEVEL_ENV: &str = "GRADEBOOK_LOG_LEVEL";
const LOG_DIR_ENV: &str = "GRADEBOOK_LOG_DIR";
const DEFAULT_DATA_FILE: &str = "students_data.json";

/// Resolved process configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Snapshot file holding all student records.
    pub data_file: PathBuf,
    /// Log level handed to core logging init.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
}

/// Resolves configuration from command line and environment.
///
/// Data file order: first positional argument, then `GRADEBOOK_DATA_FILE`,
/// then `students_data.json` in the working directory.
pub fn resolve() -> CliConfig {
    let data_file = env::args()
        .nth(1)
        .or_else(|| env::var(DATA_FILE_ENV).ok())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let log_level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());

    let log_dir = env::var(LOG_DIR_ENV).unwrap_or_else(|_| {
        env::temp_dir()
            .join("gradebook-logs")
            .to_string_lossy()
            .into_owned()
    });

    CliConfig {
        data_file: PathBuf::from(data_file),
        log_level,
        log_dir,
    }
}
