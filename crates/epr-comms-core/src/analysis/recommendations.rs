//! Communication strategy synthesis.
//!
//! Runs complexity, concept and translation analysis over the same text
//! and turns their outputs into a campaign plan: what to lead with, who
//! to target, which channels to use, what to rewrite, how risky the
//! message is, what to measure, and how urgently to act.
//!
//! Every rule reads the *reported* values of the sub-analyses, so a
//! Flesch score is compared after rounding to 2 dp and the legal ratio
//! after rounding to 4 dp.

use crate::lexicon::Lexicon;

use super::complexity::analyze_complexity;
use super::concepts::{DEFAULT_TOP_PHRASES, extract_key_concepts};
use super::reports::{
    AnalysisSummary, ChannelStrategy, ComplexityReport, ConceptReport, CrisisRisk,
    ImplementationPriority, PrimaryFocus, RecommendationReport, StrategicRecommendations,
    TranslationDifficulty, TranslationReport,
};
use super::translation::assess_translation_readiness;

/// Generate a full communication strategy for `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn generate_recommendations(text: &str, lexicon: &Lexicon) -> RecommendationReport {
    let complexity = analyze_complexity(text, lexicon);
    let concepts = extract_key_concepts(text, DEFAULT_TOP_PHRASES, lexicon);
    let translation = assess_translation_readiness(text, lexicon);

    let strategic_recommendations = StrategicRecommendations {
        primary_message_focus: primary_focus(&concepts),
        audience_segmentation: segment_audience(&complexity),
        channel_strategy: recommend_channels(&complexity, &concepts),
        content_adaptation_needs: adaptation_needs(&complexity, &translation),
        crisis_communication_risk: crisis_risk(&complexity, &concepts),
        success_metrics_focus: success_metrics(&complexity, &concepts),
    };
    let implementation_priority = implementation_priority(&complexity, &concepts, &translation);

    tracing::info!(
        focus = strategic_recommendations.primary_message_focus.as_str(),
        risk = strategic_recommendations.crisis_communication_risk.as_str(),
        priority = implementation_priority.as_str(),
        "recommendations generated"
    );

    RecommendationReport {
        analysis_summary: AnalysisSummary {
            complexity_analysis: complexity,
            key_concepts: concepts,
            translation_readiness: translation,
        },
        strategic_recommendations,
        implementation_priority,
    }
}

fn primary_focus(concepts: &ConceptReport) -> PrimaryFocus {
    let high = concepts.epr_concepts.high_priority.len();
    let process = concepts.epr_concepts.process_terms.len();

    if high > process {
        PrimaryFocus::ComplianceImportance
    } else if process > 0 {
        PrimaryFocus::StepByStepGuidance
    } else {
        PrimaryFocus::GeneralAwareness
    }
}

fn segment_audience(complexity: &ComplexityReport) -> Vec<String> {
    let segments: &[&str] = if complexity.flesch_reading_ease < 50.0 {
        &["New/Small sellers", "Experienced sellers", "Enterprise accounts"]
    } else if complexity.legal_complexity_ratio > 0.02 {
        &["General sellers", "Sellers with legal support"]
    } else {
        &["All sellers"]
    };
    owned(segments)
}

fn recommend_channels(complexity: &ComplexityReport, concepts: &ConceptReport) -> ChannelStrategy {
    if complexity.flesch_reading_ease < 40.0 {
        channels(
            &["Webinars", "One-on-one consultations"],
            &["Detailed guides", "FAQ sections"],
            &["Email", "Brief notifications"],
        )
    } else if concepts.action_items.len() > 5 {
        channels(
            &["Interactive tutorials", "Step-by-step guides"],
            &["Email sequences", "Dashboard notifications"],
            &["Single announcements"],
        )
    } else {
        channels(
            &["Email", "Dashboard notifications"],
            &["Help center articles", "Video tutorials"],
            &["Complex webinars"],
        )
    }
}

fn channels(primary: &[&str], secondary: &[&str], avoid: &[&str]) -> ChannelStrategy {
    ChannelStrategy {
        primary: owned(primary),
        secondary: owned(secondary),
        avoid: owned(avoid),
    }
}

fn adaptation_needs(complexity: &ComplexityReport, translation: &TranslationReport) -> Vec<String> {
    let mut needs = Vec::new();

    if complexity.flesch_reading_ease < 50.0 {
        needs.push("Simplify sentence structure and vocabulary");
    }
    if complexity.legal_complexity_ratio > 0.02 {
        needs.push("Add plain language explanations for legal terms");
    }
    if translation.cultural_adaptation_needed {
        needs.push("Develop region-specific examples and references");
    }
    if translation.technical_density_score > 5 {
        needs.push("Create visual aids and infographics");
    }

    owned(&needs)
}

fn crisis_risk(complexity: &ComplexityReport, concepts: &ConceptReport) -> CrisisRisk {
    let mut risk_factors = 0;

    if complexity.flesch_reading_ease < 40.0 {
        risk_factors += 2;
    }
    if concepts.epr_concepts.high_priority.len() > 5 {
        risk_factors += 1;
    }
    if concepts.action_items.len() > 8 {
        risk_factors += 1;
    }

    match risk_factors {
        3.. => CrisisRisk::High,
        1.. => CrisisRisk::Medium,
        _ => CrisisRisk::Low,
    }
}

fn success_metrics(complexity: &ComplexityReport, concepts: &ConceptReport) -> Vec<String> {
    let mut metrics = vec!["Open rates", "Click-through rates"];

    if !concepts.action_items.is_empty() {
        metrics.extend(["Action completion rates", "Time to compliance"]);
    }
    if complexity.flesch_reading_ease < 50.0 {
        metrics.extend(["Comprehension survey scores", "Follow-up question volume"]);
    }
    metrics.extend([
        "Seller satisfaction scores",
        "Support ticket reduction",
        "Sentiment analysis scores",
    ]);

    owned(&metrics)
}

fn implementation_priority(
    complexity: &ComplexityReport,
    concepts: &ConceptReport,
    translation: &TranslationReport,
) -> ImplementationPriority {
    let mut score = if complexity.flesch_reading_ease < 40.0 {
        3
    } else if complexity.flesch_reading_ease < 60.0 {
        1
    } else {
        0
    };
    score += concepts.epr_concepts.high_priority.len();
    if translation.translation_difficulty == TranslationDifficulty::High {
        score += 2;
    }

    match score {
        6.. => ImplementationPriority::Urgent,
        3.. => ImplementationPriority::High,
        _ => ImplementationPriority::Medium,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
