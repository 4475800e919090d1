//! Key concept extraction.
//!
//! Finds weighted lexicon concepts, frequent three-word phrases,
//! obligation phrases ("must register") and deadline fragments, and
//! ranks what a seller communication should lead with.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{Lexicon, Tier};
use crate::text;

use super::reports::{CommunicationPriority, Concept, ConceptReport, KeyPhrase, TierConcepts};

/// Number of key phrases returned when the caller has no preference.
pub const DEFAULT_TOP_PHRASES: usize = 10;

/// Obligation phrasing followed by the verb it governs.
static ACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)must\s+\w+",
        r"(?i)shall\s+\w+",
        r"(?i)required\s+to\s+\w+",
        r"(?i)obligation\s+to\s+\w+",
        r"(?i)need\s+to\s+\w+",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Numeric dates and "by/before <month> <day>" phrasing.
static DEADLINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d{1,2}/\d{1,2}/\d{4}",
        r"(?i)\d{1,2}\s+\w+\s+\d{4}",
        r"(?i)by\s+\w+\s+\d{1,2}",
        r"(?i)before\s+\w+\s+\d{1,2}",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Extract key concepts from `text`, keeping the `top_n` most frequent phrases.
#[tracing::instrument(skip(text, lexicon), fields(text_len = text.len()))]
pub fn extract_key_concepts(text: &str, top_n: usize, lexicon: &Lexicon) -> ConceptReport {
    let lower = text.to_lowercase();

    let mut epr_concepts = TierConcepts::default();
    for tier in Tier::ALL {
        let found = epr_concepts.get_mut(tier);
        for term in lexicon.terms(tier) {
            let frequency = lower.matches(term.as_str()).count();
            if frequency > 0 {
                found.push(Concept {
                    term: term.clone(),
                    frequency,
                    importance_score: frequency * tier.weight(),
                });
            }
        }
    }

    let key_phrases = frequent_phrases(&lower, top_n);
    let action_items = identify_action_items(text);
    let critical_deadlines = identify_deadlines(text);
    let communication_priorities = rank_priorities(&epr_concepts, &action_items);

    tracing::debug!(
        high = epr_concepts.high_priority.len(),
        actions = action_items.len(),
        deadlines = critical_deadlines.len(),
        "concepts extracted"
    );

    ConceptReport {
        epr_concepts,
        key_phrases,
        action_items,
        critical_deadlines,
        communication_priorities,
    }
}

/// Count every run of three consecutive tokens and keep the `top_n` most frequent.
///
/// Ties keep the order in which phrases first appeared.
fn frequent_phrases(lower: &str, top_n: usize) -> Vec<KeyPhrase> {
    let tokens = text::word_tokens(lower);

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut phrases: Vec<KeyPhrase> = Vec::new();
    for window in tokens.windows(3) {
        let phrase = window.join(" ");
        if let Some(&i) = index.get(&phrase) {
            phrases[i].frequency += 1;
        } else {
            index.insert(phrase.clone(), phrases.len());
            phrases.push(KeyPhrase {
                phrase,
                frequency: 1,
            });
        }
    }

    // stable: equal counts stay in first-seen order
    phrases.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    phrases.truncate(top_n);
    phrases
}

/// Obligation phrases, deduplicated by exact text, in first-seen order.
fn identify_action_items(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    ACTION_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().to_string())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Deadline fragments, pattern by pattern, duplicates kept.
fn identify_deadlines(text: &str) -> Vec<String> {
    DEADLINE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn rank_priorities(concepts: &TierConcepts, action_items: &[String]) -> Vec<CommunicationPriority> {
    let mut priorities = Vec::new();

    if !concepts.high_priority.is_empty() {
        priorities.push(CommunicationPriority::ComplianceObligations);
    }
    if !action_items.is_empty() {
        priorities.push(CommunicationPriority::RequiredActions);
    }
    if !concepts.process_terms.is_empty() {
        priorities.push(CommunicationPriority::Procedures);
    }
    if !concepts.medium_priority.is_empty() {
        priorities.push(CommunicationPriority::BackgroundContext);
    }

    priorities
}
