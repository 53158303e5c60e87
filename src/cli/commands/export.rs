use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::export;
use crate::utils::time;

use super::{check_secret, open_store, resolve_date};

/// Export the admin report for a day to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        secret,
        format,
        file,
        date: date_arg,
        force,
    } = cmd
    {
        check_secret(cfg, secret)?;

        let day = resolve_date(date_arg)?;
        let store = open_store(cfg);
        let state = store.load(&cfg.roster, day);
        let rows = report::build_report(&state, &cfg.roster, time::now_ms());

        export::write_report(format, file, &rows, *force)?;
    }

    Ok(())
}
