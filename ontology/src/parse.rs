//! Turtle and N-Triples readers.
//!
//! Parsing is delegated to `sophia_turtle`; the resulting terms are copied
//! into the owned [`Graph`] model.

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple as RdfTriple;
use sophia_turtle::parser::{nt, turtle};
use thiserror::Error;

use crate::graph::{Graph, Literal, Term, Triple};
use crate::model::iris::XSD_STRING;

/// A document that could not be read as RDF.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The underlying parser rejected the input.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// The input holds a term this model cannot represent
    /// (a quoted triple, a variable, or a non-IRI predicate).
    #[error("unsupported term: {0}")]
    Unsupported(String),
}

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed input.
pub fn parse_turtle(text: &str) -> Result<Graph, ParseError> {
    collect(turtle::parse_str(text))
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed input.
pub fn parse_ntriples(text: &str) -> Result<Graph, ParseError> {
    collect(nt::parse_str(text))
}

fn collect<S: TripleSource>(mut source: S) -> Result<Graph, ParseError>
where
    S::Error: std::fmt::Display,
{
    let mut triples: Vec<Result<Triple, ParseError>> = Vec::new();
    source
        .for_each_triple(|t| triples.push(convert(t.s(), t.p(), t.o())))
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    triples.into_iter().collect()
}

fn convert<T: RdfTerm>(s: T, p: T, o: T) -> Result<Triple, ParseError> {
    let predicate = p
        .iri()
        .map(|iri| iri.as_str().to_owned())
        .ok_or_else(|| ParseError::Unsupported("predicate is not an IRI".to_owned()))?;
    Ok(Triple::new(convert_term(s)?, predicate, convert_term(o)?))
}

fn convert_term<T: RdfTerm>(term: T) -> Result<Term, ParseError> {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| Term::Iri(iri.as_str().to_owned()))
            .ok_or_else(|| ParseError::Unsupported("IRI without value".to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::Blank(id.as_str().to_owned()))
            .ok_or_else(|| ParseError::Unsupported("blank node without label".to_owned())),
        TermKind::Literal => {
            let lexical = term
                .lexical_form()
                .map(|l| l.to_string())
                .ok_or_else(|| ParseError::Unsupported("literal without value".to_owned()))?;
            let lang = term.language_tag().map(|tag| tag.as_str().to_owned());
            let datatype = term
                .datatype()
                .map_or_else(|| XSD_STRING.to_owned(), |dt| dt.as_str().to_owned());
            Ok(Term::Literal(Literal {
                lexical,
                datatype,
                lang,
            }))
        }
        other => Err(ParseError::Unsupported(format!("{other:?}"))),
    }
}
