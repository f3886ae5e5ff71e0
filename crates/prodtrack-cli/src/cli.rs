//! CLI argument definitions for the production workbook analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prodtrack",
    version,
    about = "Analyze a production-tracking workbook",
    long_about = "Analyze a production-tracking XLSX workbook.\n\n\
                  Groups order rows by canonical company name, classifies\n\
                  tracking columns into binary sub-steps and textual status\n\
                  columns, and exports filtered rows as JSON records."
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
    /// Group order rows by base company name and write a summary JSON.
    Companies(CompaniesArgs),

    /// Export production rows with a manufacturing-order id as JSON records.
    Export(ExportArgs),

    /// Show the sub-step / status column split for a tracking sheet.
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct CompaniesArgs {
    /// Workbook file, or a directory to search for the first .xlsx.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Name of the order summary sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: String,

    /// Name of the customer-label column.
    #[arg(long = "customer-col", value_name = "NAME")]
    pub customer_col: String,

    /// Output path for the company summary JSON.
    #[arg(long = "output", value_name = "PATH", default_value = "company_summary.json")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Workbook file, or a directory to search for the first .xlsx.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Name of the production-tracking sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: String,

    /// Name of the manufacturing-order identifier column; rows without a
    /// value there are excluded.
    #[arg(long = "id-col", value_name = "NAME")]
    pub id_col: String,

    /// Output path for the records JSON.
    #[arg(long = "output", value_name = "PATH", default_value = "production_records.json")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Workbook file, or a directory to search for the first .xlsx.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Name of the production-tracking sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: String,

    /// Info columns (identifiers, descriptive fields) excluded from
    /// classification; exact names, comma separated.
    #[arg(long = "info-cols", value_name = "A,B,..", value_delimiter = ',')]
    pub info_cols: Vec<String>,

    /// JSON file mapping each status column to its sub-step columns.
    #[arg(long = "groups", value_name = "FILE")]
    pub groups: Option<PathBuf>,
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
