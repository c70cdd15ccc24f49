//! JSON-LD 1.1 serializer.
//!
//! Produces a single document with an `@context` built from the supplied
//! prefixes and a flat `@graph` array holding one node per subject.

use serde_json::{json, Map, Value};

use super::compact;
use crate::graph::{Graph, Term};
use crate::model::iris::{RDF_TYPE, XSD_STRING};

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(graph: &Graph, prefixes: &[(&str, &str)]) -> Value {
    let context: Map<String, Value> = prefixes
        .iter()
        .map(|(prefix, ns)| ((*prefix).to_owned(), json!(ns)))
        .collect();

    let mut nodes: Vec<Value> = Vec::new();
    let mut current: Option<(&Term, Map<String, Value>)> = None;
    for t in graph {
        let same = current.as_ref().is_some_and(|(s, _)| *s == &t.subject);
        if !same {
            if let Some((_, node)) = current.take() {
                nodes.push(Value::Object(node));
            }
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(node_id(&t.subject, prefixes)));
            current = Some((&t.subject, node));
        }
        if let Some((_, node)) = current.as_mut() {
            let (key, value) = if t.predicate == RDF_TYPE {
                ("@type".to_owned(), json!(node_id(&t.object, prefixes)))
            } else {
                (short(&t.predicate, prefixes), object_to_json(&t.object, prefixes))
            };
            push_value(node, key, value);
        }
    }
    if let Some((_, node)) = current {
        nodes.push(Value::Object(node));
    }

    json!({
        "@context": Value::Object(context),
        "@graph": nodes
    })
}

fn short(iri: &str, prefixes: &[(&str, &str)]) -> String {
    compact(iri, prefixes).unwrap_or_else(|| iri.to_owned())
}

fn node_id(term: &Term, prefixes: &[(&str, &str)]) -> String {
    match term {
        Term::Iri(iri) => short(iri, prefixes),
        Term::Blank(id) => format!("_:{id}"),
        Term::Literal(lit) => lit.lexical.clone(),
    }
}

fn object_to_json(term: &Term, prefixes: &[(&str, &str)]) -> Value {
    match term {
        Term::Iri(_) | Term::Blank(_) => json!({ "@id": node_id(term, prefixes) }),
        Term::Literal(lit) => match (&lit.lang, lit.datatype.as_str()) {
            (Some(lang), _) => json!({ "@value": lit.lexical, "@language": lang }),
            (None, XSD_STRING) => json!(lit.lexical),
            (None, datatype) => json!({ "@value": lit.lexical, "@type": short(datatype, prefixes) }),
        },
    }
}

/// Inserts `value` under `key`, promoting to an array when the key repeats.
fn push_value(node: &mut Map<String, Value>, key: String, value: Value) {
    if let Some(existing) = node.get_mut(&key) {
        let prev = std::mem::replace(existing, Value::Null);
        *existing = match prev {
            Value::Array(mut arr) => {
                arr.push(value);
                Value::Array(arr)
            }
            other => json!([other, value]),
        };
    } else {
        node.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use crate::model::iris::{OWL_CLASS, OWL_NAMED_INDIVIDUAL, RDFS_LABEL};

    const NS: &str = "https://m82-project.org/dima-bias/ontology#";
    const PREFIXES: &[(&str, &str)] = &[("dima", NS), ("owl", "http://www.w3.org/2002/07/owl#")];

    fn sample() -> Graph {
        let detect = format!("{NS}Detect");
        [
            Triple::iris(&detect, RDF_TYPE, OWL_NAMED_INDIVIDUAL),
            Triple::iris(&detect, RDF_TYPE, &format!("{NS}CognitivePhase")),
            Triple::new(Term::iri(&detect), RDFS_LABEL, Term::string("Detect")),
            Triple::iris(&format!("{NS}Technique"), RDF_TYPE, OWL_CLASS),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(&sample(), PREFIXES);
        assert_eq!(json["@context"]["dima"], json!(NS));
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn one_node_per_subject_with_merged_types() {
        let json = to_json_ld(&sample(), PREFIXES);
        let Some(graph) = json["@graph"].as_array() else {
            panic!("@graph must be an array");
        };
        assert_eq!(graph.len(), 2);
        let detect = graph.iter().find(|n| n["@id"] == json!("dima:Detect"));
        let Some(detect) = detect else {
            panic!("dima:Detect node missing");
        };
        assert_eq!(detect["@type"], json!(["owl:NamedIndividual", "dima:CognitivePhase"]));
    }

    #[test]
    fn all_nodes_have_ids() {
        let json = to_json_ld(&sample(), PREFIXES);
        for node in json["@graph"].as_array().into_iter().flatten() {
            assert!(!node["@id"].is_null());
        }
    }
}
