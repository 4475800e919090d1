//! Schema command: JSON Schema for the `--json` output of each analysis.

use clap::{Args, ValueEnum};
use schemars::{Schema, schema_for};
use tracing::{debug, instrument};

use epr_comms_core::analysis::{
    ComplexityReport, ConceptReport, KeywordMatch, RecommendationReport, TranslationReport,
};

/// Report whose schema to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// `report --json`
    #[default]
    Report,
    /// `complexity --json`
    Complexity,
    /// `concepts --json`
    Concepts,
    /// `translation --json`
    Translation,
    /// One entry of `keywords --json` matches
    Keyword,
}

impl SchemaKind {
    /// Generate the JSON Schema for this report type.
    pub fn schema(self) -> Schema {
        match self {
            Self::Report => schema_for!(RecommendationReport),
            Self::Complexity => schema_for!(ComplexityReport),
            Self::Concepts => schema_for!(ConceptReport),
            Self::Translation => schema_for!(TranslationReport),
            Self::Keyword => schema_for!(KeywordMatch),
        }
    }
}

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Which report to describe.
    #[arg(value_enum, default_value_t)]
    pub kind: SchemaKind,
}

/// Print the JSON Schema for a report type.
///
/// The output is always JSON, so the global `--json` flag has no effect.
#[instrument(name = "cmd_schema", skip_all, fields(kind = ?args.kind))]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(kind = ?args.kind, "executing schema command");
    println!("{}", serde_json::to_string_pretty(&args.kind.schema())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_schema_lists_top_level_fields() {
        let value = serde_json::to_value(SchemaKind::Report.schema()).unwrap();
        let properties = value["properties"].as_object().unwrap();
        assert!(properties.contains_key("implementation_priority"));
        assert!(properties.contains_key("analysis_summary"));
        assert!(properties.contains_key("strategic_recommendations"));
    }

    #[test]
    fn complexity_schema_describes_reading_ease() {
        let value = serde_json::to_value(SchemaKind::Complexity.schema()).unwrap();
        assert!(value["properties"]["flesch_reading_ease"].is_object());
    }

    #[test]
    fn keyword_schema_has_tier_and_term() {
        let value = serde_json::to_value(SchemaKind::Keyword.schema()).unwrap();
        let properties = value["properties"].as_object().unwrap();
        assert!(properties.contains_key("tier"));
        assert!(properties.contains_key("term"));
    }
}
