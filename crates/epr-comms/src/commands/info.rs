//! Info command implementation

use clap::Args;
use epr_comms_core::config::{Config, ConfigSources};
use epr_comms_core::{Lexicon, Tier};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_phrases: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
    lexicon: LexiconInfo,
}

/// Size of each effective lexicon list.
#[derive(Serialize)]
struct LexiconInfo {
    customized: bool,
    high_priority: usize,
    medium_priority: usize,
    process_terms: usize,
    legal_markers: usize,
    cultural_terms: usize,
}

impl LexiconInfo {
    fn new(lexicon: &Lexicon, customized: bool) -> Self {
        Self {
            customized,
            high_priority: lexicon.terms(Tier::HighPriority).len(),
            medium_priority: lexicon.terms(Tier::MediumPriority).len(),
            process_terms: lexicon.terms(Tier::ProcessTerms).len(),
            legal_markers: lexicon.legal_markers().len(),
            cultural_terms: lexicon.cultural_terms().len(),
        }
    }
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, lexicon: &Lexicon) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top_phrases: config.top_phrases,
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
            lexicon: LexiconInfo::new(lexicon, config.lexicon.is_some()),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `lexicon` - Lexicon built from `config`
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    lexicon: &Lexicon,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources, lexicon),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    print_opt("Top phrases", cfg.top_phrases);
    if cfg.disable_input_limit {
        println!("{}: {}", "Input limit".dimmed(), "disabled".yellow());
    } else {
        print_opt("Max input bytes", cfg.max_input_bytes);
    }

    let lex = &cfg.lexicon;
    println!();
    println!(
        "{}{}",
        "Lexicon".bold().underline(),
        if lex.customized { " (customized)" } else { "" }
    );
    println!("{}: {}", "High-priority terms".dimmed(), lex.high_priority);
    println!("{}: {}", "Medium-priority terms".dimmed(), lex.medium_priority);
    println!("{}: {}", "Process terms".dimmed(), lex.process_terms);
    println!("{}: {}", "Legal markers".dimmed(), lex.legal_markers);
    println!("{}: {}", "Cultural terms".dimmed(), lex.cultural_terms);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
