//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Qt Linguist catalog tool for Papagayo-NG
#[derive(Parser, Debug)]
#[command(name = "tscat", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "tscat.toml")]
    pub config: PathBuf,

    /// Log level; `RUST_LOG` takes precedence
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a source string against a locale catalog
    Lookup(LookupArgs),
    /// Report translation completion per context
    Stats(StatsArgs),
    /// Verify that catalogs survive a parse/write/parse round trip
    Check(CheckArgs),
    /// Rewrite a catalog in canonical lupdate layout
    Fmt(FmtArgs),
    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `lookup`.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Locale tag; defaults to the configured language
    #[arg(long)]
    pub locale: Option<String>,

    /// Translations directory; defaults to the configured one
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Context (dialog or module) the string belongs to
    #[arg(long)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// English source text
    pub source: String,
}

/// Arguments for `stats`.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Catalog files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `check`.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Catalog files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `fmt`.
#[derive(clap::Args, Debug)]
pub struct FmtArgs {
    /// Catalog file
    pub file: PathBuf,

    /// Write here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
