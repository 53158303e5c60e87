use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::{self, Transition};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::{date, time};
use chrono::Local;

use super::{ensure_member, open_store};

/// Clock a member in for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { name } = cmd {
        ensure_member(cfg, name)?;

        let store = open_store(cfg);
        let today = date::today();
        let mut state = store.load(&cfg.roster, today);

        match engine::clock_in(&mut state, name, time::now_ms()) {
            Transition::ClockedIn => {
                store.save_or_warn(today, &state);
                messages::success(format!(
                    "Welcome, {}! Clocked in at {}.",
                    name,
                    Local::now().format("%H:%M:%S")
                ));
                messages::info("Remember to clock out when you leave the room.");
            }
            _ => messages::warning(format!("{} is already clocked in.", name)),
        }
    }

    Ok(())
}
