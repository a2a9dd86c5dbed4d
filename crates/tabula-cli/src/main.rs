//! Tabula CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tabula_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{
    run_decode, run_delete, run_encode, run_export, run_fetch, run_import, run_rename, run_token,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Export(args) => run_export(args).map(|path| {
            println!("{}", path.display());
            0
        }),
        Command::Import(args) => run_import(args).map(|failed| if failed { 2 } else { 0 }),
        Command::Encode(args) => run_encode(args).map(|()| 0),
        Command::Decode(args) => run_decode(args).map(|()| 0),
        Command::Delete(args) => run_delete(args).map(|removed| if removed { 0 } else { 1 }),
        Command::Token(args) => {
            run_token(args);
            Ok(0)
        }
        Command::Rename(args) => run_rename(args).map(|()| 0),
        Command::Fetch(args) => run_fetch(args).map(|()| 0),
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
