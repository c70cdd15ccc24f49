//! IRIs of the schema terms the pipeline mints and queries against.

/// `scim:` terms.
pub mod scim {
    /// `scim:Article`.
    pub const ARTICLE: &str = "https://stratcomcoe.org/influence-mini/ontology#Article";
    /// `scim:Motif`.
    pub const MOTIF: &str = "https://stratcomcoe.org/influence-mini/ontology#Motif";
    /// `scim:Argument`.
    pub const ARGUMENT: &str = "https://stratcomcoe.org/influence-mini/ontology#Argument";
    /// `scim:Premise`.
    pub const PREMISE: &str = "https://stratcomcoe.org/influence-mini/ontology#Premise";
    /// `scim:Development`.
    pub const DEVELOPMENT: &str = "https://stratcomcoe.org/influence-mini/ontology#Development";
    /// `scim:Conclusion`.
    pub const CONCLUSION: &str = "https://stratcomcoe.org/influence-mini/ontology#Conclusion";
    /// `scim:NarratedAgent`.
    pub const NARRATED_AGENT: &str = "https://stratcomcoe.org/influence-mini/ontology#NarratedAgent";
    /// `scim:Quote`.
    pub const QUOTE: &str = "https://stratcomcoe.org/influence-mini/ontology#Quote";
    /// `scim:QuoteStatus`.
    pub const QUOTE_STATUS: &str = "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus";

    /// `scim:hasId`.
    pub const HAS_ID: &str = "https://stratcomcoe.org/influence-mini/ontology#hasId";
    /// `scim:hasHeadline`.
    pub const HAS_HEADLINE: &str = "https://stratcomcoe.org/influence-mini/ontology#hasHeadline";
    /// `scim:hasText`.
    pub const HAS_TEXT: &str = "https://stratcomcoe.org/influence-mini/ontology#hasText";
    /// `scim:hasName`.
    pub const HAS_NAME: &str = "https://stratcomcoe.org/influence-mini/ontology#hasName";
    /// `scim:hasPosition`.
    pub const HAS_POSITION: &str = "https://stratcomcoe.org/influence-mini/ontology#hasPosition";
    /// `scim:hasOrder`.
    pub const HAS_ORDER: &str = "https://stratcomcoe.org/influence-mini/ontology#hasOrder";
    /// `scim:hasMotif`.
    pub const HAS_MOTIF: &str = "https://stratcomcoe.org/influence-mini/ontology#hasMotif";
    /// `scim:hasArgument`.
    pub const HAS_ARGUMENT: &str = "https://stratcomcoe.org/influence-mini/ontology#hasArgument";
    /// `scim:hasPremise`.
    pub const HAS_PREMISE: &str = "https://stratcomcoe.org/influence-mini/ontology#hasPremise";
    /// `scim:hasDevelopment`.
    pub const HAS_DEVELOPMENT: &str =
        "https://stratcomcoe.org/influence-mini/ontology#hasDevelopment";
    /// `scim:hasConclusion`.
    pub const HAS_CONCLUSION: &str = "https://stratcomcoe.org/influence-mini/ontology#hasConclusion";
    /// `scim:hasQuote`.
    pub const HAS_QUOTE: &str = "https://stratcomcoe.org/influence-mini/ontology#hasQuote";
    /// `scim:isMentionedIn`.
    pub const IS_MENTIONED_IN: &str = "https://stratcomcoe.org/influence-mini/ontology#isMentionedIn";
    /// `scim:appearsInMotif`.
    pub const APPEARS_IN_MOTIF: &str =
        "https://stratcomcoe.org/influence-mini/ontology#appearsInMotif";
    /// `scim:isAttributedTo`.
    pub const IS_ATTRIBUTED_TO: &str =
        "https://stratcomcoe.org/influence-mini/ontology#isAttributedTo";
    /// `scim:mentionsInQuote`.
    pub const MENTIONS_IN_QUOTE: &str =
        "https://stratcomcoe.org/influence-mini/ontology#mentionsInQuote";
    /// `scim:hasQuoteStatus`.
    pub const HAS_QUOTE_STATUS: &str =
        "https://stratcomcoe.org/influence-mini/ontology#hasQuoteStatus";
}

/// `dima:` terms.
pub mod dima {
    /// `dima:CognitivePhase`.
    pub const COGNITIVE_PHASE: &str = "https://m82-project.org/dima-bias/ontology#CognitivePhase";
    /// `dima:Technique`.
    pub const TECHNIQUE: &str = "https://m82-project.org/dima-bias/ontology#Technique";
    /// `dima:TechniqueUsage`.
    pub const TECHNIQUE_USAGE: &str = "https://m82-project.org/dima-bias/ontology#TechniqueUsage";

    /// `dima:usesTechnique`.
    pub const USES_TECHNIQUE: &str = "https://m82-project.org/dima-bias/ontology#usesTechnique";
    /// `dima:instantiatesTechnique`.
    pub const INSTANTIATES_TECHNIQUE: &str =
        "https://m82-project.org/dima-bias/ontology#instantiatesTechnique";
    /// `dima:hasExplanation`.
    pub const HAS_EXPLANATION: &str = "https://m82-project.org/dima-bias/ontology#hasExplanation";
    /// `dima:hasExcerpt`.
    pub const HAS_EXCERPT: &str = "https://m82-project.org/dima-bias/ontology#hasExcerpt";
    /// `dima:belongsToPhase`.
    pub const BELONGS_TO_PHASE: &str = "https://m82-project.org/dima-bias/ontology#belongsToPhase";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleId;
    use crate::registry;

    #[test]
    fn every_constant_is_schema_vocabulary() {
        let Ok(schema) = registry::load(ModuleId::DimaBias) else {
            panic!("dima-bias should load");
        };
        let terms = [
            scim::ARTICLE,
            scim::MOTIF,
            scim::ARGUMENT,
            scim::PREMISE,
            scim::DEVELOPMENT,
            scim::CONCLUSION,
            scim::NARRATED_AGENT,
            scim::QUOTE,
            scim::QUOTE_STATUS,
            scim::HAS_ID,
            scim::HAS_HEADLINE,
            scim::HAS_TEXT,
            scim::HAS_NAME,
            scim::HAS_POSITION,
            scim::HAS_ORDER,
            scim::HAS_MOTIF,
            scim::HAS_ARGUMENT,
            scim::HAS_PREMISE,
            scim::HAS_DEVELOPMENT,
            scim::HAS_CONCLUSION,
            scim::HAS_QUOTE,
            scim::IS_MENTIONED_IN,
            scim::APPEARS_IN_MOTIF,
            scim::IS_ATTRIBUTED_TO,
            scim::MENTIONS_IN_QUOTE,
            scim::HAS_QUOTE_STATUS,
            dima::COGNITIVE_PHASE,
            dima::TECHNIQUE,
            dima::TECHNIQUE_USAGE,
            dima::USES_TECHNIQUE,
            dima::INSTANTIATES_TECHNIQUE,
            dima::HAS_EXPLANATION,
            dima::HAS_EXCERPT,
            dima::BELONGS_TO_PHASE,
        ];
        for term in terms {
            assert!(schema.is_vocabulary(term), "{term} is not defined");
        }
    }
}
