//! Lexicon keyword detection across text segments.

use crate::lexicon::{Lexicon, Tier};

use super::reports::KeywordMatch;

/// Scan segments for lexicon phrases.
///
/// Each segment is lower-cased and checked against every phrase, tier by
/// tier. A phrase is reported once per segment that contains it, in
/// segment order, then tier order, then phrase order. Results are never
/// deduplicated across segments.
#[tracing::instrument(skip_all, fields(segments = segments.len()))]
pub fn detect_keywords<S: AsRef<str>>(segments: &[S], lexicon: &Lexicon) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();

    for segment in segments {
        let lower = segment.as_ref().to_lowercase();
        for tier in Tier::ALL {
            for term in lexicon.terms(tier) {
                if lower.contains(term.as_str()) {
                    matches.push(KeywordMatch {
                        term: term.clone(),
                        tier,
                    });
                }
            }
        }
    }

    tracing::debug!(found = matches.len(), "keyword scan complete");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_compliance_match() {
        let lexicon = Lexicon::default();
        let matches = detect_keywords(&["This document ensures compliance with EU law"], &lexicon);
        assert_eq!(
            matches,
            vec![KeywordMatch {
                term: "compliance".to_string(),
                tier: Tier::HighPriority,
            }]
        );
    }

    #[test]
    fn empty_input() {
        let segments: [&str; 0] = [];
        assert!(detect_keywords(&segments, &Lexicon::default()).is_empty());
    }

    #[test]
    fn order_is_segment_then_tier_then_phrase() {
        let lexicon = Lexicon::default();
        let segments = vec![
            "Submit evidence of material recovery to the EPR register".to_string(),
            "Penalties apply".to_string(),
        ];
        let matches = detect_keywords(&segments, &lexicon);
        let found: Vec<(&str, Tier)> = matches.iter().map(|m| (m.term.as_str(), m.tier)).collect();
        assert_eq!(
            found,
            vec![
                ("epr", Tier::HighPriority),
                ("material recovery", Tier::MediumPriority),
                ("register", Tier::ProcessTerms),
                ("submit", Tier::ProcessTerms),
                ("evidence", Tier::ProcessTerms),
                ("penalties", Tier::HighPriority),
            ]
        );
    }

    #[test]
    fn duplicates_across_segments_kept() {
        let lexicon = Lexicon::default();
        let matches = detect_keywords(&["Liability.", "LIABILITY!"], &lexicon);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.term == "liability"));
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let lexicon = Lexicon::default();
        let segments = ["Producers must comply"];
        let first = detect_keywords(&segments, &lexicon);
        let second = detect_keywords(&segments, &lexicon);
        assert_eq!(first, second);
    }
}
