//! Markdown input handling.
//!
//! Regulatory guidance is often published as Markdown. Before analysis the
//! document is reduced to its prose with pulldown-cmark so code samples,
//! tables and front matter do not skew word counts or acronym density.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented) and inline code
/// - YAML frontmatter
/// - Table structure
///
/// Headings are kept and terminated with a full stop so they count as
/// their own sentence. Paragraphs, list items and blockquotes are separated
/// by a blank line, which keeps paragraph segmentation intact.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Table(_)) => skip_depth += 1,
            Event::End(TagEnd::CodeBlock | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),

            Event::End(TagEnd::Heading(_)) if skip_depth == 0 => {
                if !result.trim_end().ends_with(['.', '!', '?']) {
                    result.push('.');
                }
                result.push_str("\n\n");
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                result.push_str("\n\n");
            }

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_paragraphs;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Producers must register.\n\n```toml\nfee = 12\n```\n\nFees are due yearly.";
        let result = strip_to_prose(input);
        assert!(!result.contains("fee = 12"));
        assert!(result.contains("Producers must register."));
        assert!(result.contains("Fees are due yearly."));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\nregulation: PPWR\nupdated: 2025-01-01\n---\n\nSellers must comply.";
        let result = strip_to_prose(input);
        assert!(!result.contains("PPWR"));
        assert_eq!(result, "Sellers must comply.");
    }

    #[test]
    fn headings_become_sentences() {
        let input = "# Registration\n\nSellers must register.";
        assert_eq!(
            strip_to_prose(input),
            "Registration.\n\nSellers must register."
        );
    }

    #[test]
    fn heading_with_punctuation_is_left_alone() {
        let input = "## Who must register?\n\nEvery producer.";
        assert!(strip_to_prose(input).starts_with("Who must register?\n\n"));
    }

    #[test]
    fn strip_preserves_link_text() {
        let input = "See the [EPR portal](https://example.com/epr) for details.";
        let result = strip_to_prose(input);
        assert!(result.contains("EPR portal"));
        assert!(!result.contains("https://example.com"));
    }

    #[test]
    fn strip_removes_inline_code() {
        let input = "Set `reporting_year` before you submit.";
        let result = strip_to_prose(input);
        assert!(!result.contains("reporting_year"));
        assert!(result.contains("before you submit."));
    }

    #[test]
    fn strip_removes_emphasis_markers() {
        let input = "Producers **must** register *before* selling.";
        assert_eq!(strip_to_prose(input), "Producers must register before selling.");
    }

    #[test]
    fn strip_removes_tables() {
        let input = "Text before.\n\n| Material | Fee |\n|---|---|\n| Glass | 2 |\n\nText after.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Glass"));
        assert!(result.contains("Text before."));
        assert!(result.contains("Text after."));
    }

    #[test]
    fn list_items_become_paragraphs() {
        let input = "- Register with the authority.\n- Report packaging volumes.\n";
        let result = strip_to_prose(input);
        assert_eq!(
            split_paragraphs(&result),
            vec!["Register with the authority.", "Report packaging volumes."]
        );
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
