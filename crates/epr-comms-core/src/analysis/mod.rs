//! Regulatory text analysis.
//!
//! Decomposes communication-strategy analysis into independent features:
//! keyword detection, complexity scoring, concept extraction and
//! translation readiness, combined by [`recommendations::generate_recommendations`].
//!
//! Each feature is a pure function in its own module taking the text and
//! a [`Lexicon`]. [`Analyzer`] bundles a lexicon with all five operations
//! for callers that build the lexicon once at startup.

pub mod complexity;
pub mod concepts;
pub mod keywords;
pub mod recommendations;
pub mod reports;
pub mod translation;

pub use concepts::DEFAULT_TOP_PHRASES;
pub use reports::{
    ComplexityReport, ConceptReport, KeywordMatch, RecommendationReport, TranslationReport,
};

use crate::lexicon::Lexicon;

/// Runs every analysis against a fixed lexicon.
///
/// Holds no per-call state; one `Analyzer` can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    /// Create an analyzer over `lexicon`.
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon this analyzer matches against.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// See [`keywords::detect_keywords`].
    pub fn detect_keywords<S: AsRef<str>>(&self, segments: &[S]) -> Vec<KeywordMatch> {
        keywords::detect_keywords(segments, &self.lexicon)
    }

    /// See [`complexity::analyze_complexity`].
    pub fn analyze_complexity(&self, text: &str) -> ComplexityReport {
        complexity::analyze_complexity(text, &self.lexicon)
    }

    /// See [`concepts::extract_key_concepts`].
    pub fn extract_key_concepts(&self, text: &str, top_n: usize) -> ConceptReport {
        concepts::extract_key_concepts(text, top_n, &self.lexicon)
    }

    /// See [`translation::assess_translation_readiness`].
    pub fn assess_translation_readiness(&self, text: &str) -> TranslationReport {
        translation::assess_translation_readiness(text, &self.lexicon)
    }

    /// See [`recommendations::generate_recommendations`].
    pub fn generate_recommendations(&self, text: &str) -> RecommendationReport {
        recommendations::generate_recommendations(text, &self.lexicon)
    }
}
