//! Text processing utilities.
//!
//! Provides the sentence, word and paragraph splitting shared by the
//! analysis modules, plus the heuristic syllable counter used for
//! readability scoring.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-terminating punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Word-character tokens, used for phrase extraction.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// A blank line, with or without carriage returns or stray indentation.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("valid regex"));

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Fragments are trimmed and empty fragments dropped. Abbreviations and
/// decimals are not special-cased: "3.5" is two fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract `\w+` tokens from text, in order.
pub fn word_tokens(text: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Estimate syllables in a single word.
///
/// Counts groups of consecutive vowels (`aeiouy`), drops one for a
/// trailing `e`, and never returns less than 1. Punctuation attached to
/// the word is treated as a consonant.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllables = 0usize;
    let mut prev_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !prev_was_vowel {
            syllables += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        syllables = syllables.saturating_sub(1);
    }

    syllables.max(1)
}

/// Divide, yielding 0 when the denominator is 0.
pub(crate) fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
