//! Settings resolution: CLI flags, environment, config file, defaults.
//!
//! The config file is TOML:
//! ```toml
//! [parse]
//! policy = "lenient"
//! sort = true
//!
//! [output]
//! format = "json"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli_types::ParseArgs;
use crate::error::CliError;

/// Environment variable naming an alternate config file.
pub(crate) const CONFIG_ENV: &str = "AIRDATE_CONFIG";
/// Environment variable overriding the parse policy.
pub(crate) const POLICY_ENV: &str = "AIRDATE_POLICY";

/// How a batch containing malformed records is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Policy {
    /// Any malformed record fails the whole batch.
    #[default]
    Strict,
    /// Malformed records are reported and skipped.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ParseSection {
    pub policy: Option<Policy>,
    pub sort: Option<bool>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct OutputSection {
    pub format: Option<OutputFormat>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Effective settings for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Settings {
    pub policy: Policy,
    pub sort: bool,
    pub format: OutputFormat,
}

/// Provenance of each setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SettingSources {
    pub policy: SettingSource,
    pub sort: SettingSource,
    pub format: SettingSource,
}

/// Return the config file path.
///
/// Priority: explicit `--config` > `$AIRDATE_CONFIG` > platform config dir.
pub(crate) fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|d| d.join("airdate").join("config.toml")))
}

/// Load the config file. A missing file yields the defaults.
pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile, CliError> {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        CliError::config(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Load the config file from the resolved location, if there is one.
pub(crate) fn load(explicit: Option<&Path>) -> Result<ConfigFile, CliError> {
    match config_path(explicit) {
        Some(path) => load_config_file(&path),
        None => {
            log::debug!("Could not determine config directory, using defaults");
            Ok(ConfigFile::default())
        }
    }
}

/// Combine flags, the policy environment value, and the config file.
///
/// Priority: flags > env > config file > default.
pub(crate) fn resolve(
    args: &ParseArgs,
    env_policy: Option<&str>,
    file: &ConfigFile,
) -> Result<(Settings, SettingSources), CliError> {
    let env_policy = env_policy
        .map(|value| {
            Policy::from_str(value, true).map_err(|_| {
                CliError::config(format!(
                    "${POLICY_ENV} must be \"strict\" or \"lenient\", got {value:?}"
                ))
            })
        })
        .transpose()?;

    let (policy, policy_source) = if let Some(p) = args.policy {
        (p, SettingSource::Flag)
    } else if let Some(p) = env_policy {
        (p, SettingSource::EnvVar(POLICY_ENV))
    } else if let Some(p) = file.parse.policy {
        (p, SettingSource::ConfigFile)
    } else {
        (Policy::default(), SettingSource::Default)
    };

    let (sort, sort_source) = if args.sort {
        (true, SettingSource::Flag)
    } else if let Some(s) = file.parse.sort {
        (s, SettingSource::ConfigFile)
    } else {
        (false, SettingSource::Default)
    };

    let (format, format_source) = if args.json {
        (OutputFormat::Json, SettingSource::Flag)
    } else if let Some(f) = args.format {
        (f, SettingSource::Flag)
    } else if let Some(f) = file.output.format {
        (f, SettingSource::ConfigFile)
    } else {
        (OutputFormat::default(), SettingSource::Default)
    };

    Ok((
        Settings {
            policy,
            sort,
            format,
        },
        SettingSources {
            policy: policy_source,
            sort: sort_source,
            format: format_source,
        },
    ))
}
