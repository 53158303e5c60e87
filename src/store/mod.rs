//! Day-keyed JSON persistence for the attendance state.
//! One file per calendar day; a day change simply addresses a different
//! file, prior-day files are never deleted.

use crate::errors::{AppError, AppResult};
use crate::models::session::{AllMemberWorkStatus, MemberWorkStatus};
use crate::ui::messages;
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic storage key for a calendar day. Same day, same key,
/// regardless of time-of-day.
pub fn day_key(date: NaiveDate) -> String {
    format!(
        "attendance-{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Insert a fresh absent record for every roster member missing from the
/// map. Additive only: entries for names outside the roster are retained,
/// they are simply never surfaced. Idempotent on well-formed state.
pub fn reconcile(state: &mut AllMemberWorkStatus, roster: &[String]) {
    for name in roster {
        state.entry(name.clone()).or_default();
    }
}

pub struct AttendanceStore {
    dir: PathBuf,
}

impl AttendanceStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", day_key(date)))
    }

    /// Load the state for `date`, falling back to a fresh all-absent map
    /// when the file is missing or unreadable. Parse failures are logged
    /// and otherwise treated like a missing file.
    pub fn load(&self, roster: &[String], date: NaiveDate) -> AllMemberWorkStatus {
        let mut state = match self.try_load(date) {
            Ok(Some(state)) => state,
            Ok(None) => AllMemberWorkStatus::new(),
            Err(e) => {
                messages::warning(format!(
                    "Ignoring saved attendance for {}: {}",
                    day_key(date),
                    e
                ));
                AllMemberWorkStatus::new()
            }
        };

        reconcile(&mut state, roster);
        state
    }

    fn try_load(&self, date: NaiveDate) -> AppResult<Option<AllMemberWorkStatus>> {
        let path = self.day_file(date);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).map_err(|e| AppError::LoadParse(e.to_string()))?;

        // Validate shape per member: an entry without a proper sessions
        // list is dropped here and re-seeded absent by reconcile().
        let mut state = AllMemberWorkStatus::new();
        for (name, value) in raw {
            if let Ok(record) = serde_json::from_value::<MemberWorkStatus>(value) {
                state.insert(name, record);
            }
        }

        Ok(Some(state))
    }

    /// Serialize the full map and write it under `date`'s key. Written to
    /// a temp file first, then renamed into place.
    pub fn save(&self, date: NaiveDate, state: &AllMemberWorkStatus) -> AppResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AppError::StoreWrite(e.to_string()))?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;

        let path = self.day_file(date);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| AppError::StoreWrite(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| AppError::StoreWrite(e.to_string()))?;

        Ok(())
    }

    /// Save, downgrading a failure to an operator warning. The in-memory
    /// state stays authoritative; the next successful write catches up.
    pub fn save_or_warn(&self, date: NaiveDate, state: &AllMemberWorkStatus) {
        if let Err(e) = self.save(date, state) {
            messages::warning(e.to_string());
        }
    }
}
