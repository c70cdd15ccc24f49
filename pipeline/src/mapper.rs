//! Individual mapper: extractor records to per-article ABoxes.
//!
//! Every individual is minted as `<article>_<kind>_<ordinal>` in its
//! module's namespace, where the ordinal comes from the record-local id
//! (`motif_3` has ordinal 3). Mapping is pure: the result is an [`Abox`]
//! held in memory, and references into the influence-mini graph made by a
//! bias record are collected for the linker rather than checked here.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use dima_ontology::iris::{NS_SCIM, OWL_NAMED_INDIVIDUAL, RDF_TYPE};
use dima_ontology::registry::technique_slug;
use dima_ontology::vocab::{dima, scim};
use dima_ontology::{local_name, Graph, ModuleId, Schema, Term, Triple};
use regex::Regex;

use crate::article::validate_article_id;
use crate::error::MappingError;
use crate::record::{BiasRecord, ComponentRecord, SemanticRecord};

/// Record-local id kinds.
pub mod kind {
    /// The article itself (always ordinal 0).
    pub const ARTICLE: &str = "article";
    /// `motif_<n>`.
    pub const MOTIF: &str = "motif";
    /// `argument_<n>`.
    pub const ARGUMENT: &str = "argument";
    /// `premise_<n>`.
    pub const PREMISE: &str = "premise";
    /// `development_<n>`.
    pub const DEVELOPMENT: &str = "development";
    /// `conclusion_<n>`.
    pub const CONCLUSION: &str = "conclusion";
    /// `agent_<n>`.
    pub const AGENT: &str = "agent";
    /// `quote_<n>`.
    pub const QUOTE: &str = "quote";
}

/// An influence-mini individual a bias ABox depends on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExternalRef {
    /// Individual IRI.
    pub iri: String,
    /// Class the individual must have in the influence-mini graph.
    pub expected_class: &'static str,
}

/// The individuals and assertions mapped from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abox {
    /// Module the individuals belong to.
    pub module: ModuleId,
    /// Article they were minted for.
    pub article_id: String,
    /// Individual IRI to its asserted class.
    pub declarations: BTreeMap<String, &'static str>,
    /// Property assertions.
    pub assertions: Graph,
    /// Individuals of the other module this ABox refers to.
    pub external_refs: BTreeSet<ExternalRef>,
}

impl Abox {
    /// An empty ABox.
    #[must_use]
    pub fn new(module: ModuleId, article_id: &str) -> Self {
        Self {
            module,
            article_id: article_id.to_owned(),
            declarations: BTreeMap::new(),
            assertions: Graph::new(),
            external_refs: BTreeSet::new(),
        }
    }

    /// Declares `iri` as an instance of `class`. Returns false if it was
    /// already declared.
    pub fn declare(&mut self, iri: &str, class: &'static str) -> bool {
        if self.declarations.contains_key(iri) {
            return false;
        }
        self.declarations.insert(iri.to_owned(), class);
        true
    }

    /// Asserts `subject property object` between two individuals.
    pub fn link(&mut self, subject: &str, property: &str, object: &str) {
        self.assertions.insert(Triple::iris(subject, property, object));
    }

    /// Asserts `subject property value`.
    pub fn set(&mut self, subject: &str, property: &str, value: Term) {
        self.assertions
            .insert(Triple::new(Term::iri(subject), property, value));
    }

    /// Number of declared individuals.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.declarations.len()
    }

    /// Declarations (as `owl:NamedIndividual` plus class) and assertions.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let mut g = self.assertions.clone();
        for (iri, class) in &self.declarations {
            g.insert(Triple::iris(iri, RDF_TYPE, OWL_NAMED_INDIVIDUAL));
            g.insert(Triple::iris(iri, RDF_TYPE, class));
        }
        g
    }
}

/// Local name of an individual: `<article>_<kind>_<ordinal>`.
#[must_use]
pub fn individual_name(article_id: &str, kind: &str, ordinal: u64) -> String {
    format!("{article_id}_{kind}_{ordinal}")
}

/// Parses a record-local id of the given kind into its ordinal.
///
/// # Errors
///
/// Returns [`MappingError::MalformedId`] if `id` is not `<expected>_<digits>`.
pub fn parse_local_id(id: &str, expected: &'static str) -> Result<u64, MappingError> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let malformed = || MappingError::MalformedId {
        id: id.to_owned(),
        expected,
    };
    let caps = PATTERN
        .get_or_init(|| Regex::new(r"^([a-z]+)_(\d+)$").ok())
        .as_ref()
        .and_then(|re| re.captures(id))
        .ok_or_else(malformed)?;
    if caps.get(1).map(|m| m.as_str()) != Some(expected) {
        return Err(malformed());
    }
    caps.get(2)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(malformed)
}

fn expect_module(schema: &Schema, expected: ModuleId) -> Result<(), MappingError> {
    if schema.id() == expected {
        Ok(())
    } else {
        Err(MappingError::WrongModule {
            expected,
            found: schema.id(),
        })
    }
}

struct Minter<'a> {
    namespace: &'static str,
    article: &'a str,
    abox: Abox,
}

impl Minter<'_> {
    fn iri(&self, kind: &str, ordinal: u64) -> String {
        format!("{}{}", self.namespace, individual_name(self.article, kind, ordinal))
    }

    fn mint(&self, id: &str, kind: &'static str) -> Result<String, MappingError> {
        Ok(self.iri(kind, parse_local_id(id, kind)?))
    }

    fn individual(&mut self, iri: &str, class: &'static str) -> bool {
        if !self.abox.declare(iri, class) {
            return false;
        }
        self.abox
            .set(iri, scim::HAS_ID, Term::string(local_name(iri)));
        true
    }

    fn new_individual(
        &mut self,
        iri: &str,
        class: &'static str,
        kind: &'static str,
        id: &str,
    ) -> Result<(), MappingError> {
        if self.individual(iri, class) {
            Ok(())
        } else {
            Err(MappingError::Duplicate {
                kind,
                id: id.to_owned(),
            })
        }
    }
}

/// Resolves `name` to a class under `root`, falling back to `root` itself.
fn subclass_or(schema: &Schema, name: &str, root: &'static str, owner: &str) -> &'static str {
    match schema
        .class_by_name(name)
        .filter(|c| schema.is_subclass_of(c.id, root))
    {
        Some(class) => class.id,
        None => {
            tracing::warn!(
                id = owner,
                kind = name,
                fallback = local_name(root),
                "unknown type, using fallback class"
            );
            root
        }
    }
}

/// Maps an `article_processed` record onto the influence-mini schema.
///
/// # Errors
///
/// Returns [`MappingError`] on an invalid article id, malformed or duplicate
/// ids, a component reused with different text, or a reference to an id the
/// record does not declare.
pub fn map_semantic(schema: &Schema, record: &SemanticRecord) -> Result<Abox, MappingError> {
    expect_module(schema, ModuleId::InfluenceMini)?;
    validate_article_id(&record.article_id)?;
    let mut m = Minter {
        namespace: NS_SCIM,
        article: &record.article_id,
        abox: Abox::new(ModuleId::InfluenceMini, &record.article_id),
    };

    let article = m.iri(kind::ARTICLE, 0);
    m.individual(&article, scim::ARTICLE);
    if let Some(headline) = &record.headline {
        m.abox
            .set(&article, scim::HAS_HEADLINE, Term::string(headline.as_str()));
    }

    let mut motifs: BTreeMap<&str, String> = BTreeMap::new();
    let mut components: BTreeMap<&str, (String, &str)> = BTreeMap::new();
    for (position, motif) in record.motifs.iter().enumerate() {
        let motif_iri = m.mint(&motif.motif_id, kind::MOTIF)?;
        m.new_individual(&motif_iri, scim::MOTIF, kind::MOTIF, &motif.motif_id)?;
        m.abox
            .set(&motif_iri, scim::HAS_TEXT, Term::string(motif.text.as_str()));
        m.abox
            .set(&motif_iri, scim::HAS_POSITION, Term::non_negative(position as u64));
        m.abox.link(&article, scim::HAS_MOTIF, &motif_iri);
        motifs.insert(motif.motif_id.as_str(), motif_iri.clone());

        for argument in &motif.arguments {
            let arg_iri = m.mint(&argument.argument_id, kind::ARGUMENT)?;
            m.new_individual(&arg_iri, scim::ARGUMENT, kind::ARGUMENT, &argument.argument_id)?;
            m.abox.link(&motif_iri, scim::HAS_ARGUMENT, &arg_iri);

            let sections: [(&[ComponentRecord], &'static str, &'static str, &'static str); 3] = [
                (&argument.premises, kind::PREMISE, scim::PREMISE, scim::HAS_PREMISE),
                (&argument.developments, kind::DEVELOPMENT, scim::DEVELOPMENT, scim::HAS_DEVELOPMENT),
                (&argument.conclusions, kind::CONCLUSION, scim::CONCLUSION, scim::HAS_CONCLUSION),
            ];
            for (list, kind, class, property) in sections {
                for (order, component) in list.iter().enumerate() {
                    let iri = m.mint(&component.id, kind)?;
                    match components.get(component.id.as_str()) {
                        Some((_, text)) if *text != component.text => {
                            return Err(MappingError::ConflictingComponent {
                                id: component.id.clone(),
                            });
                        }
                        Some(_) => {}
                        None => {
                            m.new_individual(&iri, class, kind, &component.id)?;
                            m.abox
                                .set(&iri, scim::HAS_TEXT, Term::string(component.text.as_str()));
                            m.abox
                                .set(&iri, scim::HAS_ORDER, Term::non_negative(order as u64));
                            components.insert(component.id.as_str(), (iri.clone(), component.text.as_str()));
                        }
                    }
                    m.abox.link(&arg_iri, property, &iri);
                }
            }
        }
    }

    let mut agents: BTreeMap<&str, String> = BTreeMap::new();
    for agent in &record.narrated_agents {
        let iri = m.mint(&agent.agent_id, kind::AGENT)?;
        let class = subclass_or(schema, &agent.kind, scim::NARRATED_AGENT, &agent.agent_id);
        m.new_individual(&iri, class, kind::AGENT, &agent.agent_id)?;
        m.abox
            .set(&iri, scim::HAS_NAME, Term::string(agent.name.as_str()));
        agents.insert(agent.agent_id.as_str(), iri);
    }

    for quote in &record.quotes {
        let iri = m.mint(&quote.quote_id, kind::QUOTE)?;
        let class = subclass_or(schema, &quote.kind, scim::QUOTE, &quote.quote_id);
        m.new_individual(&iri, class, kind::QUOTE, &quote.quote_id)?;
        m.abox
            .set(&iri, scim::HAS_TEXT, Term::string(quote.text.as_str()));

        let missing = |kind: &'static str, id: &str| MappingError::MissingReference {
            owner: quote.quote_id.clone(),
            kind,
            id: id.to_owned(),
        };
        let motif = motifs
            .get(quote.motif_id.as_str())
            .ok_or_else(|| missing(kind::MOTIF, &quote.motif_id))?;
        m.abox.link(&iri, scim::APPEARS_IN_MOTIF, motif);

        if let Some(status) = &quote.status {
            match schema
                .individual_by_name(status)
                .filter(|s| s.type_ == scim::QUOTE_STATUS)
            {
                Some(s) => m.abox.link(&iri, scim::HAS_QUOTE_STATUS, s.id),
                None => tracing::warn!(id = %quote.quote_id, status = %status, "unknown quote status, skipped"),
            }
        }
        for agent_id in &quote.attributed_to {
            let agent = agents
                .get(agent_id.as_str())
                .ok_or_else(|| missing(kind::AGENT, agent_id))?;
            m.abox.link(&iri, scim::IS_ATTRIBUTED_TO, agent);
        }
        for agent_id in &quote.mentions {
            let agent = agents
                .get(agent_id.as_str())
                .ok_or_else(|| missing(kind::AGENT, agent_id))?;
            m.abox.link(&iri, scim::MENTIONS_IN_QUOTE, agent);
        }
        for component_id in &quote.maps_to_arg_components {
            let (component, _) = components
                .get(component_id.as_str())
                .ok_or_else(|| missing("component", component_id))?;
            m.abox.link(component, scim::HAS_QUOTE, &iri);
        }
    }

    tracing::debug!(
        article = %record.article_id,
        individuals = m.abox.individual_count(),
        assertions = m.abox.assertions.len(),
        "mapped semantic record"
    );
    Ok(m.abox)
}

/// Maps an `article_biases` record onto the DIMA schema.
///
/// One technique usage is minted per (technique, argument) pair as
/// `<article>_<technique>_<argument ordinal>`; repeated hits add excerpts
/// to the existing usage and keep the first explanation.
///
/// # Errors
///
/// Returns [`MappingError`] on an invalid article id, an unknown phase or
/// technique, a technique listed under the wrong phase, or a malformed
/// argument or component id.
pub fn map_biases(
    schema: &Schema,
    article_id: &str,
    record: &BiasRecord,
) -> Result<Abox, MappingError> {
    expect_module(schema, ModuleId::DimaBias)?;
    validate_article_id(article_id)?;
    let mut m = Minter {
        namespace: schema.namespace().iri,
        article: article_id,
        abox: Abox::new(ModuleId::DimaBias, article_id),
    };
    let scim_iri = |kind: &str, ordinal: u64| {
        format!("{NS_SCIM}{}", individual_name(article_id, kind, ordinal))
    };

    for (phase_name, technique_name, hit) in record.hits() {
        let phase = schema
            .phase(phase_name)
            .ok_or_else(|| MappingError::UnknownPhase(phase_name.to_owned()))?;
        let technique = schema
            .technique(technique_name)
            .ok_or_else(|| MappingError::UnknownTechnique {
                phase: phase_name.to_owned(),
                technique: technique_name.to_owned(),
            })?;
        if technique.phase != Some(phase.id) {
            return Err(MappingError::WrongPhase {
                technique: technique_name.to_owned(),
                expected: technique.phase.map_or("none", local_name).to_owned(),
                found: phase_name.to_owned(),
            });
        }

        let ordinal = parse_local_id(&hit.argument_id, kind::ARGUMENT)?;
        let usage = m.iri(&technique_slug(technique.iri), ordinal);
        if m.individual(&usage, dima::TECHNIQUE_USAGE) {
            m.abox
                .link(&usage, dima::INSTANTIATES_TECHNIQUE, technique.iri);
            if !hit.explanation.is_empty() {
                m.abox.set(
                    &usage,
                    dima::HAS_EXPLANATION,
                    Term::string(hit.explanation.as_str()),
                );
            }
        }
        for excerpt in &hit.excerpts {
            m.abox
                .set(&usage, dima::HAS_EXCERPT, Term::string(excerpt.as_str()));
        }

        let mut targets = vec![(scim_iri(kind::ARGUMENT, ordinal), scim::ARGUMENT)];
        let sections = [
            (&hit.premise_ids, kind::PREMISE, scim::PREMISE),
            (&hit.development_ids, kind::DEVELOPMENT, scim::DEVELOPMENT),
            (&hit.conclusion_ids, kind::CONCLUSION, scim::CONCLUSION),
        ];
        for (ids, kind, class) in sections {
            for id in ids {
                targets.push((scim_iri(kind, parse_local_id(id, kind)?), class));
            }
        }
        for (iri, expected_class) in targets {
            m.abox.link(&iri, dima::USES_TECHNIQUE, &usage);
            m.abox.external_refs.insert(ExternalRef {
                iri,
                expected_class,
            });
        }
    }

    tracing::debug!(
        article = article_id,
        usages = m.abox.individual_count(),
        references = m.abox.external_refs.len(),
        "mapped bias record"
    );
    Ok(m.abox)
}
