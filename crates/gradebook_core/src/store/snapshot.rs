//! Snapshot read/write for the roster file.
//!
//! # Responsibility
//! - Load the full roster document once at startup.
//! - Rewrite the full roster document after each mutation.
//! - Emit timed `snapshot_load`/`snapshot_save` logging events.
//!
//! # Invariants
//! - Loaded rosters preserve document order, which is insertion order at
//!   save time.
//! - Saves serialize every student, every time; the previous file content is
//!   replaced wholesale.

use super::StoreResult;
use crate::model::student::Roster;
use log::{error, info};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Reads the roster snapshot at `path`.
///
/// A missing file is the empty-roster case and returns `Ok` with no entries.
///
/// # Side effects
/// - Emits `snapshot_load` logging events with duration and status.
pub fn load_roster(path: impl AsRef<Path>) -> StoreResult<Roster> {
    let started_at = Instant::now();
    info!("event=snapshot_load module=store status=start");

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=snapshot_load module=store status=ok duration_ms={} students=0 file=absent",
                started_at.elapsed().as_millis()
            );
            return Ok(Roster::new());
        }
        Err(err) => {
            error!(
                "event=snapshot_load module=store status=error duration_ms={} error_code=snapshot_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_str::<Roster>(&text) {
        Ok(roster) => {
            info!(
                "event=snapshot_load module=store status=ok duration_ms={} students={}",
                started_at.elapsed().as_millis(),
                roster.len()
            );
            Ok(roster)
        }
        Err(err) => {
            error!(
                "event=snapshot_load module=store status=error duration_ms={} error_code=snapshot_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Writes the full roster snapshot to `path`, replacing any previous content.
///
/// # Side effects
/// - Emits `snapshot_save` logging events with duration and status.
pub fn save_roster(path: impl AsRef<Path>, roster: &Roster) -> StoreResult<()> {
    let started_at = Instant::now();
    info!(
        "event=snapshot_save module=store status=start students={}",
        roster.len()
    );

    let document = match serde_json::to_string_pretty(roster) {
        Ok(document) => document,
        Err(err) => {
            error!(
                "event=snapshot_save module=store status=error duration_ms={} error_code=snapshot_encode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match std::fs::write(path, document) {
        Ok(()) => {
            info!(
                "event=snapshot_save module=store status=ok duration_ms={} students={}",
                started_at.elapsed().as_millis(),
                roster.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=snapshot_save module=store status=error duration_ms={} error_code=snapshot_write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
