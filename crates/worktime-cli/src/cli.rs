use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Convert an exported worktime HTML report into a date-pivoted CSV.
#[derive(Debug, Parser)]
#[command(
    name = "worktime-html-csv",
    version,
    about = "Convert an exported worktime HTML report into a date-pivoted CSV",
    long_about = "Reads a worktime report page exported as HTML, extracts the \
                  per-day worktime records from its grid, and writes a CSV with \
                  one row per (order, process) pair and one column per calendar \
                  date between the first and last booked day."
)]
pub struct Cli {
    /// Input HTML report file.
    pub input: Option<PathBuf>,

    /// Output CSV file (stdout when omitted).
    pub output: Option<PathBuf>,

    /// Prefix the CSV with a UTF-8 byte order mark.
    #[arg(long)]
    pub bom: bool,

    /// Record terminator for the CSV output.
    #[arg(long, value_enum, default_value = "crlf")]
    pub terminator: TerminatorArg,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: Color,

    /// Set the log level explicitly (overrides -v/-q).
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long, value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CSV record terminator choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TerminatorArg {
    /// Carriage return + line feed (`\r\n`).
    Crlf,
    /// Line feed only (`\n`).
    Lf,
}

/// Explicit log level choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_input_and_output() {
        let cli = Cli::parse_from(["worktime-html-csv", "report.html", "out.csv"]);
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("report.html")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.csv")));
        assert!(!cli.bom);
    }

    #[test]
    fn terminator_defaults_to_crlf() {
        let cli = Cli::parse_from(["worktime-html-csv", "report.html"]);
        assert!(matches!(cli.terminator, TerminatorArg::Crlf));
        let cli = Cli::parse_from(["worktime-html-csv", "--terminator", "lf", "report.html"]);
        assert!(matches!(cli.terminator, TerminatorArg::Lf));
    }

    #[test]
    fn bom_flag_is_opt_in() {
        let cli = Cli::parse_from(["worktime-html-csv", "--bom", "report.html"]);
        assert!(cli.bom);
    }
}
