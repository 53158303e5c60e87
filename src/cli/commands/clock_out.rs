use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::{self, Transition};
use crate::core::schedule;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use chrono::{DateTime, Local, Timelike};

use super::{ensure_member, open_store};

/// Clock a member out for today and remind them of any shifts they still
/// have left on the schedule.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { name } = cmd {
        ensure_member(cfg, name)?;

        let store = open_store(cfg);
        let today = date::today();
        let mut state = store.load(&cfg.roster, today);

        let now = Local::now();
        match engine::clock_out(&mut state, name, now.timestamp_millis()) {
            Transition::ClockedOut => {
                store.save_or_warn(today, &state);
                messages::success(format!(
                    "Thanks for today, {}! Clocked out at {}.",
                    name,
                    now.format("%H:%M:%S")
                ));
                remind_upcoming(cfg, name, &now);
            }
            _ => messages::warning(format!("{} is not clocked in.", name)),
        }
    }

    Ok(())
}

fn remind_upcoming(cfg: &Config, name: &str, now: &DateTime<Local>) {
    let Some(day) = schedule::todays_schedule(&cfg.schedule, now) else {
        return;
    };

    let remaining = schedule::upcoming_shifts_for(day, name, now.hour());
    if remaining.is_empty() {
        messages::info("That was your last shift today. Otsukaresama!");
    } else {
        messages::warning("You still have shifts left today:");
        for shift in remaining {
            println!("  - {}", shift.time);
        }
        messages::info("If you cannot make a shift, tell the club leader.");
    }
}
