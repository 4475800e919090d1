//! Complexity command: reading ease, legal density and audience fit.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use epr_comms_core::analysis::reports::AdaptationPriority;
use epr_comms_core::{Analyzer, Tier};

use super::read_document;

/// Arguments for the `complexity` subcommand.
#[derive(Args, Debug)]
pub struct ComplexityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Score the complexity of a document.
#[instrument(name = "cmd_complexity", skip_all, fields(file = %args.file))]
pub fn cmd_complexity(
    args: ComplexityArgs,
    global_json: bool,
    analyzer: &Analyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing complexity command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = analyzer.analyze_complexity(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {:.2} ({})",
        "Reading ease:".cyan(),
        report.flesch_reading_ease,
        report.readability_level.as_str(),
    );
    println!(
        "  {} {} words, {} sentences, {:.2} words/sentence, {:.2} syllables/word",
        "Counts:".cyan(),
        report.total_words,
        report.total_sentences,
        report.avg_words_per_sentence,
        report.avg_syllables_per_word,
    );
    println!(
        "  {} {:.4}",
        "Legal ratio:".cyan(),
        report.legal_complexity_ratio
    );

    println!("\n  {}", "Terminology density (per 100 words):".cyan());
    for tier in Tier::ALL {
        println!(
            "    {}: {:.2}",
            tier.as_str().dimmed(),
            report.epr_terminology_density.get(tier)
        );
    }

    println!(
        "\n  {} {}",
        "Audience:".cyan(),
        report.recommended_audience.as_str()
    );
    let adaptation = report.adaptation_priority.as_str();
    if report.adaptation_priority == AdaptationPriority::High {
        println!("  {} {}", "Adaptation:".cyan(), adaptation.yellow());
    } else {
        println!("  {} {}", "Adaptation:".cyan(), adaptation);
    }

    Ok(())
}
