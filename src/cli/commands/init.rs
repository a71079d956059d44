use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimetable…");

    Config::init_all(cli.api.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());

    Ok(())
}
