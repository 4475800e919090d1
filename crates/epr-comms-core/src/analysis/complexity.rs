//! Complexity scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = more readable. The score is not clamped, so very dense
//! regulatory prose can go negative. Alongside readability this module
//! measures legal drafting markers and lexicon terminology density, and
//! turns the three into an audience and an adaptation priority.

use crate::lexicon::{Lexicon, Tier};
use crate::text;

use super::reports::{
    AdaptationPriority, AudienceRecommendation, ComplexityReport, ReadingLevel, TierDensity,
};

/// Score the complexity of `text`.
///
/// Degenerate input never fails: with no words or no sentences the
/// averages are 0 and the score is the formula's intercept.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_complexity(text: &str, lexicon: &Lexicon) -> ComplexityReport {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let sentences = text::split_sentences(text);

    let avg_words_per_sentence = text::ratio(words.len() as f64, sentences.len());

    let syllables: usize = words.iter().map(|w| text::count_syllables(w)).sum();
    let avg_syllables_per_word = text::ratio(syllables as f64, words.len());

    let flesch = flesch_reading_ease(avg_words_per_sentence, avg_syllables_per_word);

    let legal_hits = words
        .iter()
        .filter(|w| lexicon.legal_markers().iter().any(|m| m.as_str() == **w))
        .count();
    let legal_ratio = text::ratio(legal_hits as f64, words.len());

    let density = terminology_density(&lower, words.len(), lexicon);

    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        flesch,
        legal_ratio,
        "complexity scored"
    );

    ComplexityReport {
        total_words: words.len(),
        total_sentences: sentences.len(),
        avg_words_per_sentence: text::round2(avg_words_per_sentence),
        avg_syllables_per_word: text::round2(avg_syllables_per_word),
        flesch_reading_ease: text::round2(flesch),
        readability_level: ReadingLevel::from_score(flesch),
        legal_complexity_ratio: text::round4(legal_ratio),
        epr_terminology_density: density,
        recommended_audience: recommend_audience(flesch, legal_ratio),
        adaptation_priority: adaptation_priority(flesch, legal_ratio, &density),
    }
}

/// Flesch Reading Ease from the two averages.
///
/// Evaluated left to right with separate multiplies and subtractions, so a
/// text built to land on a band edge (exactly 60, say) lands on it.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Lexicon occurrences per 100 words for each tier, rounded to 2 dp.
///
/// `lower` must already be lower-cased.
fn terminology_density(lower: &str, word_count: usize, lexicon: &Lexicon) -> TierDensity {
    let per_tier = |tier: Tier| {
        let count: usize = lexicon
            .terms(tier)
            .iter()
            .map(|term| lower.matches(term.as_str()).count())
            .sum();
        text::round2(text::ratio(count as f64, word_count) * 100.0)
    };

    TierDensity {
        high_priority: per_tier(Tier::HighPriority),
        medium_priority: per_tier(Tier::MediumPriority),
        process_terms: per_tier(Tier::ProcessTerms),
    }
}

fn recommend_audience(flesch: f64, legal_ratio: f64) -> AudienceRecommendation {
    if flesch >= 60.0 && legal_ratio < 0.02 {
        AudienceRecommendation::AllSellers
    } else if flesch >= 50.0 && legal_ratio < 0.05 {
        AudienceRecommendation::ExperiencedSellers
    } else {
        AudienceRecommendation::LegalTeams
    }
}

fn adaptation_priority(flesch: f64, legal_ratio: f64, density: &TierDensity) -> AdaptationPriority {
    let total_density = density.total();

    if flesch < 50.0 || legal_ratio > 0.05 || total_density > 5.0 {
        AdaptationPriority::High
    } else if flesch < 60.0 || legal_ratio > 0.02 || total_density > 3.0 {
        AdaptationPriority::Medium
    } else {
        AdaptationPriority::Low
    }
}
