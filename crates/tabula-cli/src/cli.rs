//! CLI argument definitions for tabula.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use tabula_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "tabula",
    version,
    about = "Tabula - move records between JSON, spreadsheets, and base64 blobs",
    long_about = "Export record collections to spreadsheets, import spreadsheet rows as\n\
                  pipe-delimited strings, and manage base64-encoded blobs on disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export a JSON array of flat objects to a spreadsheet.
    Export(ExportArgs),

    /// Import rows from a spreadsheet as pipe-delimited strings.
    Import(ImportArgs),

    /// Print a file as base64 (optionally as a data URI).
    Encode(EncodeArgs),

    /// Decode a base64 text file (data-URI prefix allowed) into a file.
    Decode(DecodeArgs),

    /// Delete a file.
    Delete(DeleteArgs),

    /// Print a random alphanumeric token.
    Token(TokenArgs),

    /// Print a random file name that keeps the original extension.
    Rename(RenameArgs),

    /// Fetch a URL and print the response body.
    Fetch(FetchArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON file containing an array of objects.
    #[arg(value_name = "JSON_FILE")]
    pub input: PathBuf,

    /// Output folder (created when missing).
    #[arg(long = "out", value_name = "DIR")]
    pub output_folder: String,

    /// Base file name; the date and extension are appended.
    #[arg(long = "name", value_name = "BASE")]
    pub file_name_base: String,

    /// Sheet name (default: Report).
    #[arg(long = "sheet", default_value = "")]
    pub sheet_name: String,

    /// Explicit column labels, matched by position.
    #[arg(long = "headers", value_delimiter = ',')]
    pub headers: Option<Vec<String>>,

    /// Resolve `--out` against this application root.
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Spreadsheet format to write.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: SheetFormatArg,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Spreadsheet file (or base64 text with --base64).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// The input holds base64 text instead of raw workbook bytes.
    #[arg(long = "base64")]
    pub base64: bool,

    /// First row to read (1-based).
    #[arg(long = "start-row", default_value_t = 1)]
    pub start_row: u32,

    /// First column to read (1-based); also the column that ends the scan.
    #[arg(long = "start-column", default_value_t = 1)]
    pub start_column: u32,

    /// Number of columns per row.
    #[arg(long = "columns")]
    pub total_columns: u32,

    /// Spreadsheet format to read.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: SheetFormatArg,
}

#[derive(Parser)]
pub struct EncodeArgs {
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Wrap the payload as `data:<MIME>;base64,...`.
    #[arg(long = "mime")]
    pub mime: Option<String>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    #[arg(value_name = "BASE64_FILE")]
    pub input: PathBuf,

    #[arg(value_name = "OUT")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DeleteArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct TokenArgs {
    #[arg(long = "length", default_value_t = 16)]
    pub length: usize,

    /// Seed for a reproducible token.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct RenameArgs {
    #[arg(value_name = "FILE_NAME")]
    pub file_name: String,

    /// Seed for a reproducible name.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct FetchArgs {
    #[arg(value_name = "URL")]
    pub url: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SheetFormatArg {
    Xlsx,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
