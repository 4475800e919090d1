//! Report structs for regulatory text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and by downstream consumers. Categorical
//! results are enums that serialize as their full human-readable label.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Tier;

// -- Keywords ---------------------------------------------------------------

/// A lexicon phrase found in an input segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordMatch {
    /// The matched lexicon phrase.
    pub term: String,
    /// The tier the phrase belongs to.
    pub tier: Tier,
}

// -- Complexity -------------------------------------------------------------

/// Full complexity analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityReport {
    /// Whitespace-delimited word count.
    pub total_words: usize,
    /// Non-empty sentence count.
    pub total_sentences: usize,
    /// Mean words per sentence (2 dp).
    pub avg_words_per_sentence: f64,
    /// Mean estimated syllables per word (2 dp).
    pub avg_syllables_per_word: f64,
    /// Flesch reading ease, unclamped (2 dp).
    pub flesch_reading_ease: f64,
    /// Grade band for the reading ease score.
    pub readability_level: ReadingLevel,
    /// Share of words that are legal drafting markers (4 dp).
    pub legal_complexity_ratio: f64,
    /// Lexicon term occurrences per 100 words, by tier.
    pub epr_terminology_density: TierDensity,
    /// Who the text is suitable for as written.
    pub recommended_audience: AudienceRecommendation,
    /// How much rewriting the text needs.
    pub adaptation_priority: AdaptationPriority,
}

/// Terminology density per tier, as a percentage of words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TierDensity {
    /// High-priority term density.
    pub high_priority: f64,
    /// Medium-priority term density.
    pub medium_priority: f64,
    /// Process term density.
    pub process_terms: f64,
}

impl TierDensity {
    /// Density for a single tier.
    pub const fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::HighPriority => self.high_priority,
            Tier::MediumPriority => self.medium_priority,
            Tier::ProcessTerms => self.process_terms,
        }
    }

    /// Sum across all tiers.
    pub fn total(&self) -> f64 {
        Tier::ALL.iter().map(|&t| self.get(t)).sum()
    }
}

/// Flesch reading ease band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadingLevel {
    /// Score ≥ 90.
    #[serde(rename = "Very Easy (5th grade level)")]
    VeryEasy,
    /// Score ≥ 80.
    #[serde(rename = "Easy (6th grade level)")]
    Easy,
    /// Score ≥ 70.
    #[serde(rename = "Fairly Easy (7th grade level)")]
    FairlyEasy,
    /// Score ≥ 60.
    #[serde(rename = "Standard (8th-9th grade level)")]
    Standard,
    /// Score ≥ 50.
    #[serde(rename = "Fairly Difficult (10th-12th grade level)")]
    FairlyDifficult,
    /// Score ≥ 30.
    #[serde(rename = "Difficult (College level)")]
    Difficult,
    /// Score < 30.
    #[serde(rename = "Very Difficult (Graduate level)")]
    VeryDifficult,
}

impl ReadingLevel {
    /// Classify a reading ease score. Bands are checked high to low.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Returns the band label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy (5th grade level)",
            Self::Easy => "Easy (6th grade level)",
            Self::FairlyEasy => "Fairly Easy (7th grade level)",
            Self::Standard => "Standard (8th-9th grade level)",
            Self::FairlyDifficult => "Fairly Difficult (10th-12th grade level)",
            Self::Difficult => "Difficult (College level)",
            Self::VeryDifficult => "Very Difficult (Graduate level)",
        }
    }
}

/// Seller audience the text suits without rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AudienceRecommendation {
    /// Plain enough for everyone.
    #[serde(rename = "All seller segments")]
    AllSellers,
    /// Needs some experience to follow.
    #[serde(rename = "Experienced sellers and enterprise accounts")]
    ExperiencedSellers,
    /// Needs legal support to follow.
    #[serde(rename = "Legal/compliance teams and enterprise sellers only")]
    LegalTeams,
}

impl AudienceRecommendation {
    /// Returns the audience label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllSellers => "All seller segments",
            Self::ExperiencedSellers => "Experienced sellers and enterprise accounts",
            Self::LegalTeams => "Legal/compliance teams and enterprise sellers only",
        }
    }
}

/// How urgently the text needs simplifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AdaptationPriority {
    /// Significant rewrite.
    #[serde(rename = "HIGH - Requires significant simplification")]
    High,
    /// Moderate rewrite.
    #[serde(rename = "MEDIUM - Moderate adaptation needed")]
    Medium,
    /// Light touch.
    #[serde(rename = "LOW - Minor adjustments sufficient")]
    Low,
}

impl AdaptationPriority {
    /// Returns the priority label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH - Requires significant simplification",
            Self::Medium => "MEDIUM - Moderate adaptation needed",
            Self::Low => "LOW - Minor adjustments sufficient",
        }
    }
}

// -- Concepts ---------------------------------------------------------------

/// Concept extraction results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConceptReport {
    /// Lexicon terms found, by tier.
    pub epr_concepts: TierConcepts,
    /// Most frequent three-word phrases.
    pub key_phrases: Vec<KeyPhrase>,
    /// Obligation phrases ("must register"), deduplicated.
    pub action_items: Vec<String>,
    /// Date and deadline fragments in scan order.
    pub critical_deadlines: Vec<String>,
    /// What to communicate first, most urgent first.
    pub communication_priorities: Vec<CommunicationPriority>,
}

/// Found concepts grouped by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TierConcepts {
    /// High-priority concepts.
    pub high_priority: Vec<Concept>,
    /// Medium-priority concepts.
    pub medium_priority: Vec<Concept>,
    /// Process concepts.
    pub process_terms: Vec<Concept>,
}

impl TierConcepts {
    /// Concepts found for a single tier.
    pub fn get(&self, tier: Tier) -> &[Concept] {
        match tier {
            Tier::HighPriority => &self.high_priority,
            Tier::MediumPriority => &self.medium_priority,
            Tier::ProcessTerms => &self.process_terms,
        }
    }

    pub(crate) const fn get_mut(&mut self, tier: Tier) -> &mut Vec<Concept> {
        match tier {
            Tier::HighPriority => &mut self.high_priority,
            Tier::MediumPriority => &mut self.medium_priority,
            Tier::ProcessTerms => &mut self.process_terms,
        }
    }
}

/// A lexicon term found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Concept {
    /// The lexicon phrase.
    pub term: String,
    /// Non-overlapping occurrences in the lower-cased text.
    pub frequency: usize,
    /// Frequency multiplied by the tier weight.
    pub importance_score: usize,
}

/// A frequent three-word phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyPhrase {
    /// Space-joined lower-case tokens.
    pub phrase: String,
    /// Occurrences.
    pub frequency: usize,
}

/// A topic to put in front of sellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CommunicationPriority {
    /// High-priority terms present.
    #[serde(rename = "Compliance obligations and liability")]
    ComplianceObligations,
    /// Action items present.
    #[serde(rename = "Required seller actions")]
    RequiredActions,
    /// Process terms present.
    #[serde(rename = "How-to procedures and documentation")]
    Procedures,
    /// Medium-priority terms present.
    #[serde(rename = "Background context and benefits")]
    BackgroundContext,
}

impl CommunicationPriority {
    /// Returns the priority label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComplianceObligations => "Compliance obligations and liability",
            Self::RequiredActions => "Required seller actions",
            Self::Procedures => "How-to procedures and documentation",
            Self::BackgroundContext => "Background context and benefits",
        }
    }
}

// -- Translation ------------------------------------------------------------

/// Localization readiness of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranslationReport {
    /// Whether any culture-bound phrases were found.
    pub cultural_adaptation_needed: bool,
    /// Culture-bound phrases found, in lexicon order.
    pub cultural_terms_found: Vec<String>,
    /// Number of acronyms (two or more capital letters).
    pub technical_density_score: usize,
    /// Mean words per sentence (2 dp).
    pub avg_sentence_length: f64,
    /// Overall difficulty band.
    pub translation_difficulty: TranslationDifficulty,
    /// Localization steps, in the order to apply them.
    pub recommended_localization_strategy: Vec<String>,
}

/// Translation difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TranslationDifficulty {
    /// Score > 15.
    #[serde(rename = "HIGH - Professional legal translation required")]
    High,
    /// Score > 8.
    #[serde(rename = "MEDIUM - Specialized translation with review needed")]
    Medium,
    /// Everything else.
    #[serde(rename = "LOW - Standard business translation sufficient")]
    Low,
}

impl TranslationDifficulty {
    /// Returns the difficulty label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH - Professional legal translation required",
            Self::Medium => "MEDIUM - Specialized translation with review needed",
            Self::Low => "LOW - Standard business translation sufficient",
        }
    }
}

// -- Recommendations --------------------------------------------------------

/// Complete communication strategy for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationReport {
    /// The analyses the recommendations were derived from.
    pub analysis_summary: AnalysisSummary,
    /// Derived guidance.
    pub strategic_recommendations: StrategicRecommendations,
    /// Overall urgency.
    pub implementation_priority: ImplementationPriority,
}

/// The three underlying analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSummary {
    /// Complexity scoring.
    pub complexity_analysis: ComplexityReport,
    /// Concept extraction.
    pub key_concepts: ConceptReport,
    /// Translation readiness.
    pub translation_readiness: TranslationReport,
}

/// Guidance derived from the analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StrategicRecommendations {
    /// What the messaging should lead with.
    pub primary_message_focus: PrimaryFocus,
    /// Seller segments to address separately.
    pub audience_segmentation: Vec<String>,
    /// Channels to use and avoid.
    pub channel_strategy: ChannelStrategy,
    /// Rewrites the content needs.
    pub content_adaptation_needs: Vec<String>,
    /// Likelihood of confusion or backlash.
    pub crisis_communication_risk: CrisisRisk,
    /// KPIs to track.
    pub success_metrics_focus: Vec<String>,
}

/// Channel mix for a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChannelStrategy {
    /// Lead channels.
    pub primary: Vec<String>,
    /// Supporting channels.
    pub secondary: Vec<String>,
    /// Channels unsuited to the content.
    pub avoid: Vec<String>,
}

/// Lead message for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PrimaryFocus {
    /// Obligations outweigh procedure.
    #[serde(rename = "Compliance importance and consequences")]
    ComplianceImportance,
    /// Procedure dominates.
    #[serde(rename = "Step-by-step guidance and procedures")]
    StepByStepGuidance,
    /// Neither.
    #[serde(rename = "General awareness and education")]
    GeneralAwareness,
}

impl PrimaryFocus {
    /// Returns the focus label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComplianceImportance => "Compliance importance and consequences",
            Self::StepByStepGuidance => "Step-by-step guidance and procedures",
            Self::GeneralAwareness => "General awareness and education",
        }
    }
}

/// Risk that a communication causes confusion or backlash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CrisisRisk {
    /// Three or more risk factors.
    #[serde(rename = "HIGH - Implement crisis communication protocols")]
    High,
    /// One or two risk factors.
    #[serde(rename = "MEDIUM - Monitor sentiment closely")]
    Medium,
    /// No risk factors.
    #[serde(rename = "LOW - Standard monitoring sufficient")]
    Low,
}

impl CrisisRisk {
    /// Returns the risk label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH - Implement crisis communication protocols",
            Self::Medium => "MEDIUM - Monitor sentiment closely",
            Self::Low => "LOW - Standard monitoring sufficient",
        }
    }
}

/// Overall urgency of acting on the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ImplementationPriority {
    /// Score ≥ 6.
    #[serde(rename = "URGENT - Immediate strategic intervention required")]
    Urgent,
    /// Score ≥ 3.
    #[serde(rename = "HIGH - Priority resource allocation needed")]
    High,
    /// Score < 3.
    #[serde(rename = "MEDIUM - Standard implementation timeline")]
    Medium,
}

impl ImplementationPriority {
    /// Returns the priority label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "URGENT - Immediate strategic intervention required",
            Self::High => "HIGH - Priority resource allocation needed",
            Self::Medium => "MEDIUM - Standard implementation timeline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_level_bands() {
        assert_eq!(ReadingLevel::from_score(206.835), ReadingLevel::VeryEasy);
        assert_eq!(ReadingLevel::from_score(89.99), ReadingLevel::Easy);
        assert_eq!(ReadingLevel::from_score(70.0), ReadingLevel::FairlyEasy);
        assert_eq!(ReadingLevel::from_score(50.0), ReadingLevel::FairlyDifficult);
        assert_eq!(ReadingLevel::from_score(30.0), ReadingLevel::Difficult);
        assert_eq!(ReadingLevel::from_score(-12.5), ReadingLevel::VeryDifficult);
    }

    #[test]
    fn reading_level_boundary_at_sixty() {
        assert_eq!(ReadingLevel::from_score(60.0), ReadingLevel::Standard);
        assert_eq!(
            ReadingLevel::from_score(60.0).as_str(),
            "Standard (8th-9th grade level)"
        );
        assert_eq!(ReadingLevel::from_score(59.999), ReadingLevel::FairlyDifficult);
    }

    #[test]
    fn labels_serialize_verbatim() {
        let json = serde_json::to_string(&ImplementationPriority::Urgent).unwrap();
        assert_eq!(json, format!("\"{}\"", ImplementationPriority::Urgent.as_str()));
        let json = serde_json::to_string(&CommunicationPriority::Procedures).unwrap();
        assert_eq!(json, "\"How-to procedures and documentation\"");
    }

    #[test]
    fn labels_round_trip_through_json() {
        let level: ReadingLevel =
            serde_json::from_str("\"Difficult (College level)\"").unwrap();
        assert_eq!(level, ReadingLevel::Difficult);
    }

    #[test]
    fn tier_density_total() {
        let density = TierDensity {
            high_priority: 2.5,
            medium_priority: 0.0,
            process_terms: 1.25,
        };
        assert_eq!(density.total(), 3.75);
        assert_eq!(density.get(Tier::ProcessTerms), 1.25);
    }
}
