//! Concepts command: weighted EPR concepts, key phrases, actions and deadlines.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use epr_comms_core::analysis::DEFAULT_TOP_PHRASES;
use epr_comms_core::{Analyzer, Tier};

use super::read_document;

/// Arguments for the `concepts` subcommand.
#[derive(Args, Debug)]
pub struct ConceptsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Number of key phrases to report.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Extract key concepts from a document.
#[instrument(name = "cmd_concepts", skip_all, fields(file = %args.file))]
pub fn cmd_concepts(
    args: ConceptsArgs,
    global_json: bool,
    analyzer: &Analyzer,
    config_top_phrases: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let top_n = args
        .top
        .or(config_top_phrases)
        .unwrap_or(DEFAULT_TOP_PHRASES);
    debug!(file = %args.file, top_n, "executing concepts command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = analyzer.extract_key_concepts(&content, top_n);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());

    for tier in Tier::ALL {
        let concepts = report.epr_concepts.get(tier);
        if concepts.is_empty() {
            continue;
        }
        println!("\n  {}", tier.as_str().cyan());
        for concept in concepts {
            println!(
                "    {} {}x (score {})",
                concept.term,
                concept.frequency,
                concept.importance_score
            );
        }
    }

    if !report.key_phrases.is_empty() {
        println!("\n  {}", "Key phrases:".cyan());
        for phrase in &report.key_phrases {
            println!("    {} {}", format!("{}x", phrase.frequency).dimmed(), phrase.phrase);
        }
    }

    if !report.action_items.is_empty() {
        println!("\n  {}", "Action items:".cyan());
        for item in &report.action_items {
            println!("    - {item}");
        }
    }

    if !report.critical_deadlines.is_empty() {
        println!("\n  {}", "Deadlines:".cyan());
        for deadline in &report.critical_deadlines {
            println!("    - {}", deadline.yellow());
        }
    }

    if !report.communication_priorities.is_empty() {
        println!("\n  {}", "Lead with:".cyan());
        for (rank, priority) in report.communication_priorities.iter().enumerate() {
            println!("    {}. {}", rank + 1, priority.as_str());
        }
    }

    Ok(())
}
