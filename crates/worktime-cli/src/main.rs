//! Worktime report converter CLI.

use clap::{ColorChoice, CommandFactory, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use worktime_cli::logging::{LogConfig, LogFormat, init_logging};
use worktime_cli::pipeline::{self, Destination};
use worktime_output::{LineTerminator, WriteOptions};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, TerminatorArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let Some(input) = cli.input.as_deref() else {
        let mut command = Cli::command();
        let _ = command.print_help();
        return 1;
    };
    let options = WriteOptions::default()
        .with_terminator(match cli.terminator {
            TerminatorArg::Crlf => LineTerminator::Crlf,
            TerminatorArg::Lf => LineTerminator::Lf,
        })
        .with_bom(cli.bom);
    let conversion = match pipeline::convert_file(input, options) {
        Ok(conversion) => conversion,
        Err(error) => {
            eprintln!("error: {error}");
            return error.exit_code();
        }
    };
    match pipeline::write_output(&conversion.csv, cli.output.as_deref()) {
        Ok(destination) => {
            if matches!(destination, Destination::File(_)) {
                print_summary(&conversion, &destination);
            }
            0
        }
        Err(error) => {
            eprintln!("error: failed to write output: {error}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Off => LevelFilter::OFF,
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
