//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{OutputFormat, Policy};

#[derive(Parser)]
#[command(name = "airdate")]
#[command(about = "Parse show listings like \"Title (2005-2013)\" into records", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that parses records.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ParseArgs {
    /// What to do with malformed records: fail the whole batch or skip them
    #[arg(short, long, value_enum)]
    pub policy: Option<Policy>,

    /// Order shows by how long they ran, longest first
    #[arg(short, long)]
    pub sort: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse records, one per line, from files or stdin
    Parse {
        /// Input files ("-" for stdin; stdin if none given)
        files: Vec<PathBuf>,

        #[command(flatten)]
        args: ParseArgs,
    },

    /// Parse the built-in sample listing
    Sample {
        #[command(flatten)]
        args: ParseArgs,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each one came from
    Show,

    /// Print the config file path
    Path,
}
