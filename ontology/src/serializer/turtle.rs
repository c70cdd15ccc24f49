//! Turtle 1.1 serializer.
//!
//! Triples are grouped by subject, predicates by `;` and objects by `,`.
//! IRIs are compacted against the supplied prefixes where the local name
//! allows it, and `rdf:type` is written as `a`.

use std::fmt::Write as _;

use super::compact;
use crate::graph::{Graph, Literal, Term};
use crate::model::iris::{RDF_TYPE, XSD_STRING};

/// Serializes `graph` to a Turtle string, declaring `prefixes` up front.
#[must_use]
pub fn to_turtle(graph: &Graph, prefixes: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(64 * 1024);

    for (prefix, ns) in prefixes {
        let _ = writeln!(out, "@prefix {prefix}: <{ns}> .");
    }
    if !prefixes.is_empty() {
        out.push('\n');
    }

    let mut current_subject: Option<&Term> = None;
    let mut current_predicate: Option<&str> = None;
    for t in graph {
        if current_subject == Some(&t.subject) {
            if current_predicate == Some(t.predicate.as_str()) {
                out.push_str(" ,\n    ");
            } else {
                out.push_str(" ;\n  ");
                out.push_str(&predicate_to_turtle(&t.predicate, prefixes));
                out.push(' ');
            }
        } else {
            if current_subject.is_some() {
                out.push_str(" .\n\n");
            }
            out.push_str(&term_to_turtle(&t.subject, prefixes));
            out.push_str("\n  ");
            out.push_str(&predicate_to_turtle(&t.predicate, prefixes));
            out.push(' ');
        }
        out.push_str(&term_to_turtle(&t.object, prefixes));
        current_subject = Some(&t.subject);
        current_predicate = Some(t.predicate.as_str());
    }
    if current_subject.is_some() {
        out.push_str(" .\n");
    }

    out
}

fn predicate_to_turtle(predicate: &str, prefixes: &[(&str, &str)]) -> String {
    if predicate == RDF_TYPE {
        return "a".to_owned();
    }
    iri_to_turtle(predicate, prefixes)
}

fn iri_to_turtle(iri: &str, prefixes: &[(&str, &str)]) -> String {
    compact(iri, prefixes).unwrap_or_else(|| format!("<{iri}>"))
}

fn term_to_turtle(term: &Term, prefixes: &[(&str, &str)]) -> String {
    match term {
        Term::Iri(iri) => iri_to_turtle(iri, prefixes),
        Term::Blank(id) => format!("_:{id}"),
        Term::Literal(lit) => literal_to_turtle(lit, prefixes),
    }
}

fn literal_to_turtle(lit: &Literal, prefixes: &[(&str, &str)]) -> String {
    let quoted = turtle_string(&lit.lexical);
    match (&lit.lang, lit.datatype.as_str()) {
        (Some(lang), _) => format!("{quoted}@{lang}"),
        (None, XSD_STRING) => quoted,
        (None, datatype) => format!("{quoted}^^{}", iri_to_turtle(datatype, prefixes)),
    }
}

fn turtle_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use crate::model::iris::{RDFS_LABEL, XSD_NON_NEGATIVE_INTEGER};

    const NS: &str = "https://stratcomcoe.org/influence-mini/ontology#";
    const PREFIXES: &[(&str, &str)] = &[("scim", NS)];

    #[test]
    fn groups_by_subject_and_predicate() {
        let motif = format!("{NS}ex1_motif_0");
        let g: Graph = [
            Triple::iris(&motif, RDF_TYPE, &format!("{NS}Motif")),
            Triple::new(Term::iri(&motif), RDFS_LABEL, Term::string("a")),
            Triple::new(Term::iri(&motif), RDFS_LABEL, Term::string("b")),
        ]
        .into_iter()
        .collect();
        let ttl = to_turtle(&g, PREFIXES);
        assert!(ttl.starts_with("@prefix scim: <"));
        assert!(ttl.contains("scim:ex1_motif_0\n  a scim:Motif ;"));
        assert!(ttl.contains("\"a\" ,\n    \"b\" ."));
    }

    #[test]
    fn escapes_and_types_literals() {
        let g: Graph = [
            Triple::new(Term::iri(format!("{NS}x")), RDFS_LABEL, Term::string("say \"hi\"\n")),
            Triple::new(
                Term::iri(format!("{NS}x")),
                format!("{NS}hasPosition"),
                Term::typed("0", XSD_NON_NEGATIVE_INTEGER),
            ),
        ]
        .into_iter()
        .collect();
        let ttl = to_turtle(&g, PREFIXES);
        assert!(ttl.contains(r#""say \"hi\"\n""#));
        assert!(ttl.contains("\"0\"^^<http://www.w3.org/2001/XMLSchema#nonNegativeInteger>"));
    }

    #[test]
    fn empty_graph_is_only_prefixes() {
        assert_eq!(to_turtle(&Graph::new(), &[]), "");
    }
}
