//! Cross-module linker.
//!
//! A bias ABox points at arguments and argument components minted by the
//! semantic mapping of the same article. Before the bias ABox is assembled,
//! each such reference must resolve in the persisted semantic graph to an
//! individual of the expected class.

use dima_ontology::iris::NS_SCIM;
use dima_ontology::{Graph, Schema};

use crate::error::IntegrityError;
use crate::mapper::Abox;

/// Checks every external reference of `abox` against `semantic_graph`.
///
/// `schema` supplies the class hierarchy, so a reference expecting
/// `ArgumentComponent` is satisfied by a `Premise`.
///
/// # Errors
///
/// Returns [`IntegrityError`] naming the first reference that is not typed
/// as expected, or that belongs to another article.
pub fn check(abox: &Abox, semantic_graph: &Graph, schema: &Schema) -> Result<(), IntegrityError> {
    let own_prefix = format!("{NS_SCIM}{}_", abox.article_id);
    for reference in &abox.external_refs {
        let resolved = reference.iri.starts_with(&own_prefix)
            && semantic_graph
                .types_of(&reference.iri)
                .any(|t| schema.is_subclass_of(t, reference.expected_class));
        if !resolved {
            tracing::warn!(
                article = %abox.article_id,
                iri = %reference.iri,
                "unresolved cross-module reference"
            );
            return Err(IntegrityError {
                article: abox.article_id.clone(),
                iri: reference.iri.clone(),
                expected: reference.expected_class.to_owned(),
            });
        }
    }
    tracing::debug!(
        article = %abox.article_id,
        references = abox.external_refs.len(),
        "cross-module references resolved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ExternalRef;
    use dima_ontology::iris::RDF_TYPE;
    use dima_ontology::vocab::scim;
    use dima_ontology::{registry, ModuleId, Triple};

    fn schema() -> Schema {
        let Ok(schema) = registry::load(ModuleId::DimaBias) else {
            panic!("dima-bias loads");
        };
        schema
    }

    fn abox_referring_to(article: &str, iri: &str, class: &'static str) -> Abox {
        let mut abox = Abox::new(ModuleId::DimaBias, article);
        abox.external_refs.insert(ExternalRef {
            iri: iri.to_owned(),
            expected_class: class,
        });
        abox
    }

    #[test]
    fn typed_reference_resolves() {
        let arg = format!("{NS_SCIM}ex1_argument_0");
        let g: Graph = [Triple::iris(&arg, RDF_TYPE, scim::ARGUMENT)].into_iter().collect();
        assert!(check(&abox_referring_to("ex1", &arg, scim::ARGUMENT), &g, &schema()).is_ok());
    }

    #[test]
    fn missing_reference_is_named() {
        let arg = format!("{NS_SCIM}ex1_argument_7");
        let err = check(&abox_referring_to("ex1", &arg, scim::ARGUMENT), &Graph::new(), &schema());
        let Err(err) = err else {
            panic!("argument_7 is not persisted");
        };
        assert_eq!(err.iri, arg);
        assert_eq!(err.article, "ex1");
    }

    #[test]
    fn wrong_class_does_not_resolve() {
        let iri = format!("{NS_SCIM}ex1_premise_0");
        let g: Graph = [Triple::iris(&iri, RDF_TYPE, scim::CONCLUSION)].into_iter().collect();
        assert!(check(&abox_referring_to("ex1", &iri, scim::PREMISE), &g, &schema()).is_err());
    }

    #[test]
    fn other_articles_individuals_do_not_count() {
        let arg = format!("{NS_SCIM}ex10_argument_0");
        let g: Graph = [Triple::iris(&arg, RDF_TYPE, scim::ARGUMENT)].into_iter().collect();
        assert!(check(&abox_referring_to("ex1", &arg, scim::ARGUMENT), &g, &schema()).is_err());
    }
}
