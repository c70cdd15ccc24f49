//! Owned RDF triple model.
//!
//! A [`Graph`] is an ordered set of triples. Ordering is total and derived
//! from the term values, so two graphs holding the same triples always
//! iterate, serialize and compare identically regardless of insertion order.

use std::collections::BTreeSet;

use crate::model::iris::{RDF_LANG_STRING, RDF_TYPE, XSD_INTEGER, XSD_NON_NEGATIVE_INTEGER, XSD_STRING};

/// A literal value with its datatype and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI (`rdf:langString` when a language tag is present).
    pub datatype: String,
    /// BCP 47 language tag.
    pub lang: Option<String>,
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label, without the `_:` prefix.
    Blank(String),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates an `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Term::typed(value, XSD_STRING)
    }

    /// Creates a literal with an explicit datatype.
    pub fn typed(value: impl Into<String>, datatype: &str) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            datatype: datatype.to_owned(),
            lang: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_string(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            datatype: RDF_LANG_STRING.to_owned(),
            lang: Some(lang.into()),
        })
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Term::typed(value.to_string(), XSD_INTEGER)
    }

    /// Creates an `xsd:nonNegativeInteger` literal.
    #[must_use]
    pub fn non_negative(value: u64) -> Self {
        Term::typed(value.to_string(), XSD_NON_NEGATIVE_INTEGER)
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// One RDF statement. Predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    /// Creates a triple whose subject and object are both IRIs.
    pub fn iris(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(Term::iri(subject), predicate, Term::iri(object))
    }

    /// Returns true if `iri` appears as the subject or object.
    #[must_use]
    pub fn mentions(&self, iri: &str) -> bool {
        self.subject.as_iri() == Some(iri) || self.object.as_iri() == Some(iri)
    }
}

/// An ordered, duplicate-free set of triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Inserts every triple of `other`.
    pub fn extend(&mut self, other: &Graph) {
        self.triples.extend(other.triples.iter().cloned());
    }

    /// Returns true if the graph holds `triple`.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Keeps only the triples for which `keep` returns true.
    /// Returns the number of triples removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Triple) -> bool) -> usize {
        let before = self.triples.len();
        self.triples.retain(|t| keep(t));
        before - self.triples.len()
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates the triples in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates the objects of `subject predicate ?o`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.subject.as_iri() == Some(subject))
            .map(|t| &t.object)
    }

    /// Returns the `rdf:type` objects of `subject`.
    pub fn types_of<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.objects(subject, RDF_TYPE).filter_map(Term::as_iri)
    }

    /// Returns true if `subject rdf:type class` is present.
    #[must_use]
    pub fn has_type(&self, subject: &str, class: &str) -> bool {
        self.contains(&Triple::iris(subject, RDF_TYPE, class))
    }

    /// Returns every IRI in subject or object position that starts with `prefix`.
    #[must_use]
    pub fn iris_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for t in &self.triples {
            for term in [&t.subject, &t.object] {
                if let Some(iri) = term.as_iri().filter(|i| i.starts_with(prefix)) {
                    found.insert(iri.to_owned());
                }
            }
        }
        found
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
