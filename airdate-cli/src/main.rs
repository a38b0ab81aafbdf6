//! airdate CLI
//!
//! Command-line front end for parsing show listings into records.

mod cli_types;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, ParseArgs};
use commands::config::{run_config_path, run_config_show};
use commands::parse::{run_parse, run_sample};
use config::{POLICY_ENV, Settings};
use error::CliError;
use logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Parse { files, args } => {
            settings_for(&args, config_path).and_then(|s| run_parse(&files, s))
        }
        Commands::Sample { args } => settings_for(&args, config_path).and_then(run_sample),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(config_path).map(|()| true),
            ConfigAction::Path => run_config_path(config_path).map(|()| true),
        },
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn settings_for(
    args: &ParseArgs,
    config_path: Option<&std::path::Path>,
) -> Result<Settings, CliError> {
    let file = config::load(config_path)?;
    let env_policy = std::env::var(POLICY_ENV).ok();
    let (settings, sources) = config::resolve(args, env_policy.as_deref(), &file)?;
    log::debug!(
        "Settings: policy={} ({}), sort={} ({}), format={} ({})",
        settings.policy,
        sources.policy,
        settings.sort,
        sources.sort,
        settings.format,
        sources.format,
    );
    Ok(settings)
}
