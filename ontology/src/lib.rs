//! Schema modules for the DIMA-OTK pipeline, encoded as typed Rust data.
//!
//! Two modules are provided: Influence-Mini (`scim:`), the narrative layer of
//! articles, motifs, arguments, agents and quotes; and DIMA bias (`dima:`),
//! the cognitive-bias layer that imports it. The crate also carries the
//! owned triple model the rest of the workspace works on, plus Turtle,
//! N-Triples and JSON-LD I/O.
//!
//! # Entry Point
//!
//! ```
//! let schema = dima_ontology::registry::load(dima_ontology::ModuleId::DimaBias).unwrap();
//! assert!(schema.technique("NegativityBias").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! use dima_ontology::{registry, serializer, ModuleId};
//!
//! let schema = registry::load(ModuleId::InfluenceMini).unwrap();
//! let tbox = schema.tbox_graph();
//! let turtle = serializer::turtle::to_turtle(&tbox, &schema.prefixes());
//! let nt = serializer::ntriples::to_ntriples(&tbox);
//! assert!(turtle.contains("scim:Motif"));
//! assert!(!nt.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::panic))]

pub mod graph;
pub mod model;
pub mod namespaces;
pub mod parse;
pub mod registry;
pub mod serializer;
pub mod vocab;

pub use graph::{Graph, Literal, Term, Triple};
pub use model::{
    iris, local_name, Class, Individual, IndividualValue, ModuleId, Namespace, NamespaceModule,
    Property, PropertyKind,
};
pub use parse::ParseError;
pub use registry::{Schema, SchemaError, TechniqueInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_term_iris_unique_across_modules() {
        let mut seen = HashSet::new();
        for id in ModuleId::ALL {
            let module = namespaces::module(id);
            for iri in module
                .classes
                .iter()
                .map(|c| c.id)
                .chain(module.properties.iter().map(|p| p.id))
                .chain(module.individuals.iter().map(|i| i.id))
            {
                assert!(seen.insert(iri), "Duplicate IRI: {iri}");
            }
        }
    }

    #[test]
    fn quote_statuses_are_eight() {
        let module = namespaces::influence_mini::module();
        let statuses = module
            .individuals
            .iter()
            .filter(|i| i.type_ == "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus")
            .count();
        assert_eq!(statuses, 8);
    }

    #[test]
    fn cognitive_phases_are_four() {
        let module = namespaces::dima_bias::module();
        let phases = module
            .individuals
            .iter()
            .filter(|i| i.type_ == vocab::dima::COGNITIVE_PHASE)
            .count();
        assert_eq!(phases, 4);
    }
}
