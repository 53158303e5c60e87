use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{engine, report, schedule};
use crate::errors::AppResult;
use crate::models::session::AllMemberWorkStatus;
use crate::ui::messages;
use crate::utils::colors::status_badge;
use crate::utils::table::{Column, Table};
use crate::utils::{date, time};
use chrono::{DateTime, Local, Timelike};
use std::thread;
use std::time::Duration;

use super::open_store;

/// Show the attendance board for today: presence count, the shift in
/// progress, and a per-member table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        filter,
        watch,
        ticks,
    } = cmd
    {
        let store = open_store(cfg);

        if !*watch && ticks.is_none() {
            let state = store.load(&cfg.roster, date::today());
            render(cfg, &state, &Local::now(), filter.as_deref());
            return Ok(());
        }

        // Watch mode: re-render once per second. Ticks are display-only
        // and never mutate the ledger; the state is re-read so edits from
        // other invocations show up. Bounded by --ticks when given, so the
        // loop always winds down with the process.
        let mut remaining = ticks.unwrap_or(u32::MAX);
        while remaining > 0 {
            let state = store.load(&cfg.roster, date::today());
            print!("\x1b[2J\x1b[H");
            render(cfg, &state, &Local::now(), filter.as_deref());
            remaining -= 1;
            if remaining > 0 {
                thread::sleep(Duration::from_secs(1));
            }
        }
    }

    Ok(())
}

fn render(cfg: &Config, state: &AllMemberWorkStatus, now: &DateTime<Local>, filter: Option<&str>) {
    let present = report::present_count(state, &cfg.roster);
    messages::header(format!(
        "Attendance {} / {} members",
        present,
        cfg.roster.len()
    ));

    print_current_shift(cfg, now);
    println!();

    let mut table = Table::new(vec![
        Column {
            header: "Name".into(),
            width: 16,
        },
        Column {
            header: "Status".into(),
            width: 10,
        },
        Column {
            header: "Worked".into(),
            width: 10,
        },
    ]);

    let now_ms = now.timestamp_millis();
    for name in &cfg.roster {
        if !matches_filter(cfg, name, filter) {
            continue;
        }

        let record = state.get(name.as_str());
        let is_present = record.is_some_and(|r| r.status.is_present());
        let worked = record.map_or(0, |r| engine::elapsed_ms(&r.sessions, now_ms));

        table.add_row(vec![
            name.clone(),
            status_badge(is_present),
            time::format_hms(worked),
        ]);
    }

    print!("{}", table.render());
}

fn matches_filter(cfg: &Config, name: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(initial) => cfg
            .readings
            .get(name)
            .is_some_and(|reading| reading.starts_with(initial)),
    }
}

fn print_current_shift(cfg: &Config, now: &DateTime<Local>) {
    match schedule::todays_schedule(&cfg.schedule, now) {
        None => println!("No event scheduled today."),
        Some(day) => {
            let label = schedule::day_label(&cfg.schedule, day);
            match schedule::active_shift(day, now.hour()) {
                Some(shift) => {
                    println!("Current shift ({}): {}", label, shift.time);
                    println!("On duty: {}", shift.members.join(", "));
                }
                None => println!("Outside shift hours ({}).", label),
            }
        }
    }
}
