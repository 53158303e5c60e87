use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        if *check {
            check_config(cfg);
        }
    }

    Ok(())
}

fn check_config(cfg: &Config) {
    let mut problems = 0;

    if cfg.roster.is_empty() {
        messages::warning("Roster is empty: nobody can clock in.");
        problems += 1;
    }

    for name in &cfg.roster {
        if !cfg.readings.contains_key(name) {
            messages::warning(format!(
                "No reading for {}: the initial filter will skip them.",
                name
            ));
            problems += 1;
        }
    }

    for day in &cfg.schedule {
        for shift in &day.shifts {
            if shift.start_hour >= shift.end_hour || shift.end_hour > 24 {
                messages::warning(format!(
                    "Bad shift window on {}: {} ({}..{})",
                    day.date, shift.time, shift.start_hour, shift.end_hour
                ));
                problems += 1;
            }

            for member in &shift.members {
                if !cfg.is_member(member) {
                    messages::warning(format!(
                        "Shift {} on {} lists unknown member {}.",
                        shift.time, day.date, member
                    ));
                    problems += 1;
                }
            }
        }
    }

    if problems == 0 {
        messages::success("Configuration looks good.");
    }
}
