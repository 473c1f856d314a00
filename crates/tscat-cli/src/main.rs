//! Main entry point for tscat.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

use tscat_cli::logging::init_tracing;
use tscat_cli::{commands, Cli, Command, ConfigCommand};
use tscat_config::{Config, ConfigLoader, LogFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        // Must not read the existing file, which may be malformed.
        Command::Config(ConfigCommand::Init { force }) => {
            init_tracing(cli.log_level.as_deref().unwrap_or("info"), LogFormat::Pretty);
            commands::config_init(&cli.config, *force)?;
            println!("Wrote {}", cli.config.display());
        }
        Command::Config(ConfigCommand::Show) => {
            let config = setup(&cli)?;
            print!("{}", commands::config_show(&config)?);
        }
        Command::Lookup(args) => {
            let config = setup(&cli)?;
            println!("{}", commands::lookup(&config, args)?);
        }
        Command::Stats(args) => {
            setup(&cli)?;
            print!("{}", commands::stats(args)?);
        }
        Command::Check(args) => {
            setup(&cli)?;
            let report = commands::check(args);
            print!("{}", report.output);
            report.into_result()?;
        }
        Command::Fmt(args) => {
            setup(&cli)?;
            if let Some(text) = commands::fmt(args)? {
                print!("{text}");
            }
        }
    }

    Ok(())
}

/// Loads the configuration and starts logging with its settings.
fn setup(cli: &Cli) -> Result<Config> {
    let config = load_config(cli)?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, config.logging.format);
    debug!("Loaded configuration from {:?}", cli.config);
    Ok(config)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = ConfigLoader::new(&cli.config).load()?;
    Ok(config)
}
