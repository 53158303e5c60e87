use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule;
use crate::errors::AppResult;
use crate::ui::messages;
use chrono::{Local, Timelike};

use super::ensure_member;

/// List today's remaining shifts for one member.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts { name } = cmd {
        ensure_member(cfg, name)?;

        let now = Local::now();
        match schedule::todays_schedule(&cfg.schedule, &now) {
            None => messages::info("No event scheduled today."),
            Some(day) => {
                let remaining = schedule::upcoming_shifts_for(day, name, now.hour());
                if remaining.is_empty() {
                    messages::info(format!("No shifts left today for {}.", name));
                } else {
                    messages::header(format!("Remaining shifts today for {}", name));
                    for shift in remaining {
                        println!("  - {}", shift.time);
                    }
                }
            }
        }
    }

    Ok(())
}
