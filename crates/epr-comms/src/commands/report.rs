//! Report command: full communication-strategy recommendations.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use epr_comms_core::Analyzer;
use epr_comms_core::analysis::reports::ImplementationPriority;

use super::read_document;

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Generate the strategic communication report for a document.
#[instrument(name = "cmd_report", skip_all, fields(file = %args.file))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    analyzer: &Analyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing report command");

    let content = read_document(&args.file, max_input_bytes)?;
    let report = analyzer.generate_recommendations(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let strategy = &report.strategic_recommendations;
    let complexity = &report.analysis_summary.complexity_analysis;
    let translation = &report.analysis_summary.translation_readiness;

    println!("{}", args.file.bold());

    let priority = report.implementation_priority.as_str();
    match report.implementation_priority {
        ImplementationPriority::Urgent => println!("\n  {} {}", "Priority:".cyan(), priority.red()),
        ImplementationPriority::High => {
            println!("\n  {} {}", "Priority:".cyan(), priority.yellow());
        }
        ImplementationPriority::Medium => {
            println!("\n  {} {}", "Priority:".cyan(), priority.green());
        }
    }
    println!(
        "  {} {}",
        "Message focus:".cyan(),
        strategy.primary_message_focus.as_str()
    );
    println!(
        "  {} {}",
        "Crisis risk:".cyan(),
        strategy.crisis_communication_risk.as_str()
    );

    println!(
        "\n  {} {:.2} ({}), {} words, {} sentences",
        "Reading ease:".cyan(),
        complexity.flesch_reading_ease,
        complexity.readability_level.as_str(),
        complexity.total_words,
        complexity.total_sentences,
    );
    println!(
        "  {} {}",
        "Audience as written:".cyan(),
        complexity.recommended_audience.as_str()
    );
    println!(
        "  {} {}",
        "Translation:".cyan(),
        translation.translation_difficulty.as_str()
    );

    println!("\n  {}", "Channels:".cyan());
    print_row("primary", &strategy.channel_strategy.primary);
    print_row("secondary", &strategy.channel_strategy.secondary);
    print_row("avoid", &strategy.channel_strategy.avoid);

    print_list("Audience segments:", &strategy.audience_segmentation);
    print_list("Adaptation needs:", &strategy.content_adaptation_needs);
    print_list("Success metrics:", &strategy.success_metrics_focus);

    Ok(())
}

fn print_row(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("    {}: {}", label.dimmed(), items.join(", "));
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n  {}", heading.cyan());
    for item in items {
        println!("    - {item}");
    }
}
