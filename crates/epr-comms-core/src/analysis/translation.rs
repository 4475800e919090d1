//! Translation readiness assessment.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;
use crate::text;

use super::reports::{TranslationDifficulty, TranslationReport};

/// Regex for acronyms: two or more consecutive uppercase letters as a word.
static ACRONYM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex"));

/// Assess how hard `text` will be to localize.
///
/// Difficulty score is `2 * cultural terms + acronyms + avg sentence length / 10`:
/// above 15 is HIGH, above 8 is MEDIUM.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn assess_translation_readiness(text: &str, lexicon: &Lexicon) -> TranslationReport {
    let lower = text.to_lowercase();
    let cultural_terms_found: Vec<String> = lexicon
        .cultural_terms()
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .cloned()
        .collect();

    let acronyms = ACRONYM_RE.find_iter(text).count();

    let lengths: Vec<usize> = text::split_sentences(text)
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let avg_sentence_length = text::ratio(lengths.iter().sum::<usize>() as f64, lengths.len());

    let cultural = cultural_terms_found.len();
    let translation_difficulty = difficulty(cultural, acronyms, avg_sentence_length);

    tracing::debug!(
        cultural,
        acronyms,
        avg_sentence_length,
        difficulty = translation_difficulty.as_str(),
        "translation readiness assessed"
    );

    TranslationReport {
        cultural_adaptation_needed: cultural > 0,
        cultural_terms_found,
        technical_density_score: acronyms,
        avg_sentence_length: text::round2(avg_sentence_length),
        translation_difficulty,
        recommended_localization_strategy: localization_strategy(cultural, acronyms),
    }
}

fn difficulty(cultural: usize, acronyms: usize, avg_sentence_length: f64) -> TranslationDifficulty {
    let score = (cultural * 2 + acronyms) as f64 + avg_sentence_length / 10.0;

    if score > 15.0 {
        TranslationDifficulty::High
    } else if score > 8.0 {
        TranslationDifficulty::Medium
    } else {
        TranslationDifficulty::Low
    }
}

fn localization_strategy(cultural: usize, acronyms: usize) -> Vec<String> {
    let mut strategies = Vec::new();

    if cultural > 0 {
        strategies.push("Create culture-specific explanatory content");
    }
    if acronyms > 5 {
        strategies.push("Develop multilingual glossary");
        strategies.push("Include visual aids and diagrams");
    }
    strategies.push("Implement local review by native speakers");
    strategies.push("Test comprehension with local seller focus groups");

    strategies.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(text: &str) -> TranslationReport {
        assess_translation_readiness(text, &Lexicon::default())
    }

    #[test]
    fn plain_text_is_low_difficulty() {
        let report = assess("Sellers pay a fee. The fee is small.");
        assert!(!report.cultural_adaptation_needed);
        assert_eq!(report.technical_density_score, 0);
        assert_eq!(report.avg_sentence_length, 4.0);
        assert_eq!(report.translation_difficulty, TranslationDifficulty::Low);
        assert_eq!(
            report.recommended_localization_strategy,
            vec![
                "Implement local review by native speakers",
                "Test comprehension with local seller focus groups",
            ]
        );
    }

    #[test]
    fn cultural_terms_in_lexicon_order() {
        let report = assess("Act in Good Faith and apply due diligence at all times.");
        assert!(report.cultural_adaptation_needed);
        assert_eq!(report.cultural_terms_found, vec!["due diligence", "good faith"]);
        assert_eq!(
            report.recommended_localization_strategy[0],
            "Create culture-specific explanatory content"
        );
    }

    #[test]
    fn acronyms_counted_per_occurrence() {
        let report = assess("EPR and WEEE rules apply in the EU. EPR fees are set by PRO members.");
        assert_eq!(report.technical_density_score, 5);
        assert_eq!(report.recommended_localization_strategy.len(), 2);
    }

    #[test]
    fn many_acronyms_add_glossary_and_visuals() {
        let report = assess("EPR WEEE EU PRO VAT EORI rules.");
        assert_eq!(report.technical_density_score, 6);
        assert_eq!(
            report.recommended_localization_strategy,
            vec![
                "Develop multilingual glossary",
                "Include visual aids and diagrams",
                "Implement local review by native speakers",
                "Test comprehension with local seller focus groups",
            ]
        );
    }

    #[test]
    fn mixed_case_words_are_not_acronyms() {
        let report = assess("The Epr scheme and eEPR portal.");
        assert_eq!(report.technical_density_score, 0);
    }

    #[test]
    fn difficulty_bands() {
        assert_eq!(difficulty(0, 0, 80.0), TranslationDifficulty::Low);
        assert_eq!(difficulty(0, 8, 1.0), TranslationDifficulty::Medium);
        assert_eq!(difficulty(4, 7, 1.0), TranslationDifficulty::High);
        assert_eq!(difficulty(0, 15, 0.0), TranslationDifficulty::Medium);
        assert_eq!(difficulty(0, 15, 0.5), TranslationDifficulty::High);
    }

    #[test]
    fn empty_text() {
        let report = assess("");
        assert_eq!(report.avg_sentence_length, 0.0);
        assert!(report.cultural_terms_found.is_empty());
        assert_eq!(report.translation_difficulty, TranslationDifficulty::Low);
    }
}
