pub mod backup;
pub mod clock_in;
pub mod clock_out;
pub mod config;
pub mod export;
pub mod init;
pub mod report;
pub mod shifts;
pub mod status;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceStore;
use crate::utils::{date, path};
use chrono::NaiveDate;

/// Store rooted at the configured data directory.
pub(crate) fn open_store(cfg: &Config) -> AttendanceStore {
    AttendanceStore::new(path::expand_tilde(&cfg.data_dir))
}

/// Reject names that are not on the roster before touching any state.
pub(crate) fn ensure_member(cfg: &Config, name: &str) -> AppResult<()> {
    if cfg.is_member(name) {
        Ok(())
    } else {
        Err(AppError::UnknownMember(name.to_string()))
    }
}

/// Gate for the admin views: plain equality against the configured secret.
pub(crate) fn check_secret(cfg: &Config, secret: &str) -> AppResult<()> {
    if secret == cfg.admin_secret {
        Ok(())
    } else {
        Err(AppError::AdminAuth)
    }
}

/// Resolve an optional --date argument, defaulting to today.
pub(crate) fn resolve_date(date: &Option<String>) -> AppResult<NaiveDate> {
    match date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}
