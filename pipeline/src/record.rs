//! Records produced by the external feature extractor.
//!
//! Field names follow the extractor's JSON output verbatim; collections the
//! extractor may omit default to empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// `article_processed_<id>.json`: the narrative analysis of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticRecord {
    /// Article id.
    pub article_id: String,
    /// Headline, when one was found or generated.
    #[serde(default)]
    pub headline: Option<String>,
    /// Motifs in source order.
    #[serde(default)]
    pub motifs: Vec<MotifRecord>,
    /// Narrated agents.
    #[serde(default)]
    pub narrated_agents: Vec<AgentRecord>,
    /// Quotes.
    #[serde(default)]
    pub quotes: Vec<QuoteRecord>,
}

/// One motif (paragraph) and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifRecord {
    /// `motif_<n>`.
    pub motif_id: String,
    /// Paragraph text.
    pub text: String,
    /// Arguments in source order.
    #[serde(default)]
    pub arguments: Vec<ArgumentRecord>,
}

/// One argument and its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    /// `argument_<n>`.
    pub argument_id: String,
    /// `premise_<n>` components.
    #[serde(default)]
    pub premises: Vec<ComponentRecord>,
    /// `development_<n>` components.
    #[serde(default)]
    pub developments: Vec<ComponentRecord>,
    /// `conclusion_<n>` components.
    #[serde(default)]
    pub conclusions: Vec<ComponentRecord>,
}

/// A premise, development or conclusion span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// `<kind>_<n>`.
    pub id: String,
    /// Span text.
    pub text: String,
}

/// A narrated agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// `agent_<n>`.
    pub agent_id: String,
    /// Surface name.
    pub name: String,
    /// Class local name, e.g. `NarratedPolitician`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// `quote_<n>`.
    pub quote_id: String,
    /// The motif it appears in.
    pub motif_id: String,
    /// Quoted text.
    pub text: String,
    /// Class local name, e.g. `DirectQuote`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Status individual local name, e.g. `ReportedStatement`.
    #[serde(default)]
    pub status: Option<String>,
    /// Agents the quote is attributed to.
    #[serde(default)]
    pub attributed_to: Vec<String>,
    /// Agents mentioned inside the quote.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Argument components the quote supports.
    #[serde(default)]
    pub maps_to_arg_components: Vec<String>,
}

/// `article_biases_<id>.json`: technique hits keyed by phase, then technique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiasRecord(pub BTreeMap<String, BTreeMap<String, Vec<TechniqueHit>>>);

impl BiasRecord {
    /// Iterates `(phase, technique, hit)` in key order.
    pub fn hits(&self) -> impl Iterator<Item = (&str, &str, &TechniqueHit)> {
        self.0.iter().flat_map(|(phase, techniques)| {
            techniques.iter().flat_map(move |(technique, hits)| {
                hits.iter()
                    .map(move |hit| (phase.as_str(), technique.as_str(), hit))
            })
        })
    }

    /// Total number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits().count()
    }

    /// Returns true if no technique was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits().next().is_none()
    }
}

/// One detection of a technique in an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueHit {
    /// The argument the technique was found in.
    pub argument_id: String,
    /// Supporting text excerpts.
    #[serde(default)]
    pub excerpts: Vec<String>,
    /// Why the extractor flagged it.
    #[serde(default)]
    pub explanation: String,
    /// Premises involved.
    #[serde(default)]
    pub premise_ids: Vec<String>,
    /// Developments involved.
    #[serde(default)]
    pub development_ids: Vec<String>,
    /// Conclusions involved.
    #[serde(default)]
    pub conclusion_ids: Vec<String>,
}

impl SemanticRecord {
    /// Parses an `article_processed` document.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MalformedRecord`] if the JSON does not fit.
    pub fn from_json(text: &str) -> Result<Self, MappingError> {
        serde_json::from_str(text).map_err(|e| MappingError::MalformedRecord(e.to_string()))
    }
}

impl BiasRecord {
    /// Parses an `article_biases` document.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MalformedRecord`] if the JSON does not fit.
    pub fn from_json(text: &str) -> Result<Self, MappingError> {
        serde_json::from_str(text).map_err(|e| MappingError::MalformedRecord(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_extractor_output() {
        let json = r#"{
            "article_id": "ex1",
            "headline": "Prices rise",
            "motifs": [{
                "motif_id": "motif_0",
                "text": "Prices rose again.",
                "arguments": [{
                    "argument_id": "argument_0",
                    "premises": [{"id": "premise_0", "text": "Prices rose"}],
                    "developments": [],
                    "conclusions": [{"id": "conclusion_0", "text": "Life is harder"}]
                }]
            }],
            "narrated_agents": [{"agent_id": "agent_0", "name": "The minister", "type": "NarratedPolitician"}],
            "quotes": [{
                "quote_id": "quote_0",
                "motif_id": "motif_0",
                "text": "we are doing everything",
                "type": "ParaphrasedQuote",
                "status": "OfficialPosition",
                "attributed_to": ["agent_0"],
                "mentions": [],
                "maps_to_arg_components": ["premise_0"]
            }]
        }"#;
        let Ok(record) = SemanticRecord::from_json(json) else {
            panic!("record should parse");
        };
        assert_eq!(record.motifs[0].arguments[0].premises[0].id, "premise_0");
        assert_eq!(record.narrated_agents[0].kind, "NarratedPolitician");
        assert_eq!(record.quotes[0].status.as_deref(), Some("OfficialPosition"));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let Ok(record) = SemanticRecord::from_json(r#"{"article_id": "ex2"}"#) else {
            panic!("minimal record should parse");
        };
        assert!(record.headline.is_none());
        assert!(record.motifs.is_empty());
        assert!(record.quotes.is_empty());
    }

    #[test]
    fn bias_hits_flatten_in_key_order() {
        let json = r#"{
            "Memorise": {"RecencyEffect": [{"argument_id": "argument_1"}]},
            "Detect": {"NegativityBias": [
                {"argument_id": "argument_0", "excerpts": ["a", "b"], "explanation": "fear"}
            ]}
        }"#;
        let Ok(record) = BiasRecord::from_json(json) else {
            panic!("bias record should parse");
        };
        let order: Vec<(&str, &str)> = record.hits().map(|(p, t, _)| (p, t)).collect();
        assert_eq!(order, [("Detect", "NegativityBias"), ("Memorise", "RecencyEffect")]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        assert!(matches!(
            BiasRecord::from_json(r#"{"Detect": ["not", "a", "map"]}"#),
            Err(MappingError::MalformedRecord(_))
        ));
    }
}
