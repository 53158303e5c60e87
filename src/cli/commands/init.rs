use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with a sample roster
///  - the attendance data directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("Initializing kintai…");

    Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("Config file: {}", Config::config_file().display());
    messages::info("Edit the roster, readings and schedule before first use.");
    messages::success("kintai initialization completed!");

    Ok(())
}
