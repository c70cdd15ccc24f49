//! Core vocabulary model types.
//!
//! These types describe a schema module (its terminology, or TBox) as typed
//! Rust data. Modules are built as owned `Vec`s of statically described
//! terms; the validated, indexed form is [`Schema`](crate::Schema).

/// Identifies one of the two schema modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleId {
    /// Semantic layer: articles, motifs, arguments, agents, quotes.
    InfluenceMini,
    /// Bias layer: techniques, tactics, phases, technique usages.
    DimaBias,
}

impl ModuleId {
    /// Both modules, in dependency order.
    pub const ALL: [ModuleId; 2] = [ModuleId::InfluenceMini, ModuleId::DimaBias];

    /// Returns the short name used in file names and log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::InfluenceMini => "influence-mini",
            ModuleId::DimaBias => "dima-bias",
        }
    }

    /// Returns the namespace IRI individuals of this module are minted in.
    #[must_use]
    pub fn namespace_iri(self) -> &'static str {
        match self {
            ModuleId::InfluenceMini => iris::NS_SCIM,
            ModuleId::DimaBias => iris::NS_DIMA,
        }
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema namespace (e.g., `scim:`, `dima:`).
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in Turtle and SPARQL (e.g., `"scim"`).
    pub prefix: &'static str,
    /// The namespace IRI terms are minted under, ending in `#`.
    pub iri: &'static str,
    /// The ontology IRI (namespace without the trailing `#`).
    pub ontology_iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
    /// Ontology IRIs of imported modules (`owl:imports`).
    pub imports: &'static [&'static str],
}

/// An OWL class definition.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI (e.g., `"https://stratcomcoe.org/influence-mini/ontology#Motif"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Full IRIs of mutually exclusive classes (`owl:disjointWith`).
    pub disjoint_with: &'static [&'static str],
}

/// Whether a property is a datatype or object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

/// An OWL property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Whether this is also an `owl:FunctionalProperty`.
    pub functional: bool,
    /// Full IRI of the domain class, or `None` if unspecified.
    pub domain: Option<&'static str>,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
    /// Full IRIs of super-properties (`rdfs:subPropertyOf`).
    pub sub_property_of: &'static [&'static str],
    /// Full IRI of the declared inverse property (`owl:inverseOf`).
    pub inverse_of: Option<&'static str>,
}

/// A value in a named individual's property assertion.
#[derive(Debug, Clone)]
pub enum IndividualValue {
    /// A plain string literal.
    Str(&'static str),
    /// An integer literal.
    Int(i64),
    /// An IRI reference to another resource.
    IriRef(&'static str),
}

/// A named individual declared by the terminology itself
/// (quote statuses, cognitive phases, tactics, techniques).
#[derive(Debug, Clone)]
pub struct Individual {
    /// Full IRI.
    pub id: &'static str,
    /// Full IRI of the class this individual is an instance of.
    pub type_: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Property assertions: pairs of (property IRI, value).
    pub properties: &'static [(&'static str, IndividualValue)],
}

/// A complete schema module: namespace metadata + classes + properties + individuals.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Which module this is.
    pub id: ModuleId,
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All OWL classes defined in this namespace.
    pub classes: Vec<Class>,
    /// All OWL properties defined in this namespace.
    pub properties: Vec<Property>,
    /// All named individuals declared in this namespace.
    pub individuals: Vec<Individual>,
}

impl NamespaceModule {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == iri)
    }

    /// Looks up a named individual by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, iri: &str) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.id == iri)
    }
}

/// Returns the part of `iri` after the last `#` or `/`.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    iri.rfind(['#', '/']).map_or(iri, |pos| &iri[pos + 1..])
}

/// Standard IRI constants used across both modules.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Influence-Mini ontology IRI.
    pub const SCIM_ONTOLOGY: &str = "https://stratcomcoe.org/influence-mini/ontology";
    /// Influence-Mini namespace.
    pub const NS_SCIM: &str = "https://stratcomcoe.org/influence-mini/ontology#";
    /// DIMA bias ontology IRI.
    pub const DIMA_ONTOLOGY: &str = "https://m82-project.org/dima-bias/ontology";
    /// DIMA bias namespace.
    pub const NS_DIMA: &str = "https://m82-project.org/dima-bias/ontology#";

    // RDF / RDFS / OWL terms
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:imports`.
    pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:NamedIndividual`.
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:SymmetricProperty`.
    pub const OWL_SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
    /// `owl:TransitiveProperty`.
    pub const OWL_TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
    /// `owl:inverseOf`.
    pub const OWL_INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    /// `owl:disjointWith`.
    pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_splits_on_hash_and_slash() {
        assert_eq!(local_name("https://m82-project.org/dima-bias/ontology#Detect"), "Detect");
        assert_eq!(local_name("https://example.org/a/b"), "b");
        assert_eq!(local_name("plain"), "plain");
    }
}
