use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::{Column, Table};
use crate::utils::time;
use ansi_term::Colour;

use super::{check_secret, open_store, resolve_date};

/// Admin view: total worked time per member, longest first. Open sessions
/// are measured against the current time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        secret,
        date: date_arg,
    } = cmd
    {
        check_secret(cfg, secret)?;

        let day = resolve_date(date_arg)?;
        let store = open_store(cfg);
        let state = store.load(&cfg.roster, day);
        let rows = report::build_report(&state, &cfg.roster, time::now_ms());

        messages::header(format!("Work report for {}", day));

        let mut table = Table::new(vec![
            Column {
                header: "Name".into(),
                width: 16,
            },
            Column {
                header: "Total".into(),
                width: 10,
            },
            Column {
                header: "Status".into(),
                width: 10,
            },
        ]);

        for row in &rows {
            let badge = if row.status.is_present() {
                Colour::Green.bold().paint("present").to_string()
            } else {
                Colour::White.dimmed().paint("absent").to_string()
            };

            table.add_row(vec![
                row.name.clone(),
                time::format_hms(row.total_ms),
                badge,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
