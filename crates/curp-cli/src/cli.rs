//! CLI argument definitions for the CURP batch toolkit.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "curp-batch",
    version,
    about = "CURP batch validator - validate, enrich, and export applicant identifiers",
    long_about = "Validate Mexican CURP identifiers from an applicant table.\n\n\
                  Supports strict filtering with text/JSON export, diagnostic\n\
                  analysis with a styled XLSX report, and SQL script generation\n\
                  joined against program and campus catalogs."
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
    /// Diagnostic analysis of every row with a styled XLSX report.
    Analyze(AnalyzeArgs),

    /// Strict-filter the batch and export the valid records (text + JSON).
    Export(ExportArgs),

    /// Generate a SQL INSERT script for valid records, joined against the
    /// program and campus catalogs.
    Sql(SqlArgs),

    /// Convert program/campus catalogs to SQL INSERT scripts.
    Catalog(CatalogArgs),

    /// List the federal entity codes accepted in a CURP.
    Entities,
}

/// Source options shared by the batch commands.
#[derive(Args)]
pub struct SourceArgs {
    /// Applicant table: CSV, or an XLSX workbook.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet name for XLSX input.
    #[arg(long = "sheet", value_name = "NAME", default_value = "Aspirantes")]
    pub sheet: String,

    /// Reference date for ages and century inference (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub reference_date: Option<NaiveDate>,

    /// Accept the inclusive sex code X in addition to H and M.
    #[arg(long = "inclusive-sex")]
    pub inclusive_sex: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output path for the XLSX report (default: Analisis_CURP.xlsx next to
    /// the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the summary without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory for the exported files (default: next to the input).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct SqlArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Program catalog CSV (key, name) for the enrichment join.
    #[arg(long = "programs", value_name = "CSV")]
    pub programs: Option<PathBuf>,

    /// Campus catalog (CSV or PDF) for the enrichment join.
    #[arg(long = "campuses", value_name = "CSV_OR_PDF")]
    pub campuses: Option<PathBuf>,

    /// Output path for the generated script.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "insert_aspirantes.sql"
    )]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Program catalog CSV to convert.
    #[arg(long = "programs", value_name = "CSV")]
    pub programs: Option<PathBuf>,

    /// Campus catalog (CSV or PDF) to convert.
    #[arg(long = "campuses", value_name = "CSV_OR_PDF")]
    pub campuses: Option<PathBuf>,

    /// Output path for the program SQL script.
    #[arg(
        long = "programs-output",
        value_name = "PATH",
        default_value = "Carreras.sql"
    )]
    pub programs_output: PathBuf,

    /// Output path for the campus SQL script.
    #[arg(
        long = "campuses-output",
        value_name = "PATH",
        default_value = "insert_planteles.sql"
    )]
    pub campuses_output: PathBuf,
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

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| format!("invalid date '{raw}': {error}"))
}
