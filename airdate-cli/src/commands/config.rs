use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::ParseArgs;
use crate::config::{self, POLICY_ENV};
use crate::error::CliError;

/// Show effective settings and their sources.
pub(crate) fn run_config_show(explicit: Option<&Path>) -> Result<(), CliError> {
    let path = config::config_path(explicit);

    log::info!(
        "{}",
        "airdate Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let file = config::load(explicit)?;
    let env_policy = std::env::var(POLICY_ENV).ok();
    let (settings, sources) = config::resolve(&ParseArgs::default(), env_policy.as_deref(), &file)?;

    let fields = [
        ("policy", settings.policy.to_string(), sources.policy),
        ("sort", settings.sort.to_string(), sources.sort),
        ("format", settings.format.to_string(), sources.format),
    ];

    for (name, value, source) in fields {
        log::info!(
            "  {:<8} {} {}",
            name,
            value.if_supports_color(Stdout, |t| t.green()),
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path(explicit: Option<&Path>) -> Result<(), CliError> {
    match config::config_path(explicit) {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}
