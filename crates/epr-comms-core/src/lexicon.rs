//! Terminology lexicon for regulatory text analysis.
//!
//! The default lexicon targets Extended Producer Responsibility (EPR)
//! documents: three priority tiers of domain phrases, a list of legal
//! drafting markers, and a list of phrases that do not carry across
//! languages and legal cultures.
//!
//! Every phrase is matched against lower-cased text, so all entries are
//! stored lower-case. A [`Lexicon`] is immutable once built; callers
//! construct one at startup and share it by reference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default high-priority terms: obligations, liability and enforcement.
pub const HIGH_PRIORITY_TERMS: &[&str] = &[
    "extended producer responsibility",
    "epr",
    "compliance",
    "liability",
    "packaging waste",
    "recycling targets",
    "producer obligations",
    "registration requirements",
    "reporting deadlines",
    "penalties",
];

/// Default medium-priority terms: policy background and context.
pub const MEDIUM_PRIORITY_TERMS: &[&str] = &[
    "circular economy",
    "waste prevention",
    "environmental impact",
    "product lifecycle",
    "take-back programs",
    "eco-design",
    "material recovery",
    "producer register",
];

/// Default process terms: verbs and nouns describing what sellers do.
pub const PROCESS_TERMS: &[&str] = &[
    "register",
    "report",
    "submit",
    "comply",
    "deadline",
    "requirement",
    "obligation",
    "documentation",
    "evidence",
    "certification",
];

/// Legal drafting markers that signal dense, lawyerly prose.
///
/// Complexity scoring compares these against single whitespace-delimited
/// words, so the multi-word entries never match.
pub const LEGAL_MARKERS: &[&str] = &[
    "notwithstanding",
    "pursuant to",
    "aforementioned",
    "whereas",
    "hereinafter",
    "thereof",
    "whereby",
    "insofar as",
    "provided that",
];

/// Phrases whose meaning is tied to a particular legal or business culture.
pub const CULTURAL_TERMS: &[&str] = &[
    "due diligence",
    "good faith",
    "reasonable care",
    "best efforts",
    "state of the art",
    "common practice",
    "industry standard",
];

/// Terminology priority tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Compliance obligations, liability and penalties.
    #[cfg_attr(feature = "clap", value(name = "high"))]
    HighPriority,
    /// Background policy concepts.
    #[cfg_attr(feature = "clap", value(name = "medium"))]
    MediumPriority,
    /// Procedural vocabulary.
    #[cfg_attr(feature = "clap", value(name = "process"))]
    ProcessTerms,
}

impl Tier {
    /// All tiers in scan order.
    pub const ALL: [Self; 3] = [Self::HighPriority, Self::MediumPriority, Self::ProcessTerms];

    /// Multiplier applied to a term's frequency to get its importance score.
    pub const fn weight(self) -> usize {
        match self {
            Self::HighPriority => 3,
            Self::MediumPriority | Self::ProcessTerms => 2,
        }
    }

    /// Returns the tier's snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighPriority => "high_priority",
            Self::MediumPriority => "medium_priority",
            Self::ProcessTerms => "process_terms",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexicon overrides read from configuration.
///
/// Each list, when present, replaces the corresponding built-in list.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Replacement high-priority terms.
    pub high_priority: Option<Vec<String>>,
    /// Replacement medium-priority terms.
    pub medium_priority: Option<Vec<String>>,
    /// Replacement process terms.
    pub process_terms: Option<Vec<String>>,
    /// Replacement legal markers.
    pub legal_markers: Option<Vec<String>>,
    /// Replacement cultural terms.
    pub cultural_terms: Option<Vec<String>>,
}

/// Immutable terminology used by every analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    high_priority: Vec<String>,
    medium_priority: Vec<String>,
    process_terms: Vec<String>,
    legal_markers: Vec<String>,
    cultural_terms: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            high_priority: owned(HIGH_PRIORITY_TERMS),
            medium_priority: owned(MEDIUM_PRIORITY_TERMS),
            process_terms: owned(PROCESS_TERMS),
            legal_markers: owned(LEGAL_MARKERS),
            cultural_terms: owned(CULTURAL_TERMS),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from the defaults with configured lists swapped in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLexicon`] if any phrase is blank or
    /// contains upper-case characters.
    pub fn from_config(config: &LexiconConfig) -> ConfigResult<Self> {
        let mut lexicon = Self::default();
        let overrides = [
            ("high_priority", &config.high_priority, &mut lexicon.high_priority),
            ("medium_priority", &config.medium_priority, &mut lexicon.medium_priority),
            ("process_terms", &config.process_terms, &mut lexicon.process_terms),
            ("legal_markers", &config.legal_markers, &mut lexicon.legal_markers),
            ("cultural_terms", &config.cultural_terms, &mut lexicon.cultural_terms),
        ];

        for (list, replacement, slot) in overrides {
            if let Some(phrases) = replacement {
                validate(list, phrases)?;
                slot.clone_from(phrases);
            }
        }

        tracing::debug!(
            high = lexicon.high_priority.len(),
            medium = lexicon.medium_priority.len(),
            process = lexicon.process_terms.len(),
            "lexicon built"
        );
        Ok(lexicon)
    }

    /// Phrases belonging to `tier`, in declaration order.
    pub fn terms(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::HighPriority => &self.high_priority,
            Tier::MediumPriority => &self.medium_priority,
            Tier::ProcessTerms => &self.process_terms,
        }
    }

    /// Legal drafting markers.
    pub fn legal_markers(&self) -> &[String] {
        &self.legal_markers
    }

    /// Culturally non-portable phrases.
    pub fn cultural_terms(&self) -> &[String] {
        &self.cultural_terms
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn validate(list: &str, phrases: &[String]) -> ConfigResult<()> {
    for phrase in phrases {
        if phrase.trim().is_empty() {
            return Err(ConfigError::InvalidLexicon {
                list: list.to_string(),
                phrase: phrase.clone(),
                reason: "phrase is blank",
            });
        }
        if phrase.chars().any(char::is_uppercase) {
            return Err(ConfigError::InvalidLexicon {
                list: list.to_string(),
                phrase: phrase.clone(),
                reason: "phrase must be lower-case",
            });
        }
    }
    Ok(())
}
