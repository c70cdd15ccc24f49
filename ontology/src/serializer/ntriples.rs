//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs only. This is the body format of the
//! reasoning-service request and response.

use crate::graph::{Graph, Term, Triple};

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for t in graph {
        write_triple(&mut out, t);
    }
    out
}

/// Appends one triple as an N-Triples line.
pub fn write_triple(out: &mut String, t: &Triple) {
    write_term(out, &t.subject);
    out.push_str(" <");
    out.push_str(&t.predicate);
    out.push_str("> ");
    write_term(out, &t.object);
    out.push_str(" .\n");
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Term::Blank(id) => {
            out.push_str("_:");
            out.push_str(id);
        }
        Term::Literal(lit) => {
            out.push('"');
            for c in lit.lexical.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    other => out.push(other),
                }
            }
            out.push('"');
            if let Some(lang) = &lit.lang {
                out.push('@');
                out.push_str(lang);
            } else {
                out.push_str("^^<");
                out.push_str(&lit.datatype);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::{RDFS_LABEL, RDF_TYPE, OWL_CLASS};

    #[test]
    fn every_line_ends_with_period() {
        let g: Graph = [
            Triple::iris("https://example.org/A", RDF_TYPE, OWL_CLASS),
            Triple::new(Term::iri("https://example.org/A"), RDFS_LABEL, Term::string("A\nB")),
            Triple::new(Term::Blank("b0".into()), RDFS_LABEL, Term::lang_string("x", "en")),
        ]
        .into_iter()
        .collect();
        let nt = to_ntriples(&g);
        assert_eq!(nt.lines().count(), 3);
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
        assert!(nt.contains("\"A\\nB\"^^<http://www.w3.org/2001/XMLSchema#string>"));
        assert!(nt.contains("_:b0 <http://www.w3.org/2000/01/rdf-schema#label> \"x\"@en ."));
    }
}
