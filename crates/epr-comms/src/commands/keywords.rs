//! Keywords command: lexicon matches per paragraph.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use epr_comms_core::analysis::KeywordMatch;
use epr_comms_core::{Analyzer, Tier, text};

use super::read_document;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Files to scan (`-` for stdin). Each paragraph is matched separately.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Only report these tiers (comma-separated). Omit for all tiers.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub tier: Option<Vec<Tier>>,
}

#[derive(Serialize)]
struct FileKeywords {
    file: Utf8PathBuf,
    segments: usize,
    matches: Vec<KeywordMatch>,
}

/// Detect lexicon phrases in one or more documents.
#[instrument(name = "cmd_keywords", skip_all, fields(files = args.files.len()))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    analyzer: &Analyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, tiers = ?args.tier, "executing keywords command");

    let mut results = Vec::with_capacity(args.files.len());
    for file in args.files {
        let content = read_document(&file, max_input_bytes)?;
        let segments = text::split_paragraphs(&content);
        let mut matches = analyzer.detect_keywords(&segments);
        if let Some(ref tiers) = args.tier {
            matches.retain(|m| tiers.contains(&m.tier));
        }
        results.push(FileKeywords {
            file,
            segments: segments.len(),
            matches,
        });
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!(
            "{} {}",
            result.file.bold(),
            format!("({} paragraphs, {} matches)", result.segments, result.matches.len()).dimmed()
        );
        for m in &result.matches {
            println!("  {:<16} {}", m.tier.as_str().cyan(), m.term);
        }
    }

    Ok(())
}
