//! Translation command: localization difficulty and strategy.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use epr_comms_core::Analyzer;

use super::read_document;

/// Arguments for the `translation` subcommand.
#[derive(Args, Debug)]
pub struct TranslationArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Assess how ready a document is for translation.
#[instrument(name = "cmd_translation", skip_all, fields(file = %args.file))]
pub fn cmd_translation(
    args: TranslationArgs,
    global_json: bool,
    analyzer: &Analyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing translation command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = analyzer.assess_translation_readiness(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {}",
        "Difficulty:".cyan(),
        report.translation_difficulty.as_str()
    );
    println!(
        "  {} {} acronyms, {:.2} words/sentence",
        "Density:".cyan(),
        report.technical_density_score,
        report.avg_sentence_length,
    );
    if report.cultural_adaptation_needed {
        println!(
            "  {} {}",
            "Cultural terms:".cyan(),
            report.cultural_terms_found.join(", ").yellow()
        );
    }

    println!("\n  {}", "Localization strategy:".cyan());
    for step in &report.recommended_localization_strategy {
        println!("    - {step}");
    }

    Ok(())
}
