mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod launch;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Preferences;

fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::logging::init(cli.debug);

    let prefs = cli.with_overrides(Preferences::load(cli.config.as_deref()));
    tracing::debug!(?prefs, "effective preferences");

    match app::run(&cli, &prefs) {
        Ok(code) => code,
        Err(e) => {
            app::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
