//! CLI argument definitions for the VetEMR console.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vetemr",
    version,
    about = "VetEMR - interactive console for a clinic records server",
    long_about = "Interactive console for a VetEMR records server.\n\n\
                  Sign in, browse the patient roster, open a patient's medical\n\
                  history, admit new patients, and file medical records. Type\n\
                  'help' at the prompt for the command list."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Records server base URL (overrides the configured value).
    #[arg(long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Sign in with this email before the first prompt.
    #[arg(long = "email", value_name = "EMAIL")]
    pub email: Option<String>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow clinical content (names, diagnoses) in debug logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
