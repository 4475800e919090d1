//! Library interface for the `epr-comms` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                 Log filter (e.g., debug, epr_comms_core=trace)
    EPR_COMMS_LOG_PATH       Explicit JSONL log file path
    EPR_COMMS_LOG_DIR        JSONL log directory
    EPR_COMMS_TOP_PHRASES    Default number of key phrases
    EPR_COMMS_LOG_LEVEL      Default log level (debug, info, warn, error)
";

/// Command-line interface definition for epr-comms.
#[derive(Parser)]
#[command(name = "epr-comms")]
#[command(
    about = "Turn regulatory compliance text into a seller communication strategy",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Full communication-strategy report
    Report(commands::report::ReportArgs),

    /// Score reading ease, legal density and terminology density
    Complexity(commands::complexity::ComplexityArgs),

    /// Extract EPR concepts, key phrases, actions and deadlines
    Concepts(commands::concepts::ConceptsArgs),

    /// Assess translation and localization difficulty
    Translation(commands::translation::TranslationArgs),

    /// List lexicon matches paragraph by paragraph
    Keywords(commands::keywords::KeywordsArgs),

    /// Print the JSON Schema of a report's `--json` output
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}
