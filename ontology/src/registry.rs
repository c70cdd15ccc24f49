//! Schema registry: validated, indexed schema modules.
//!
//! [`load`] builds a module's static tables, pulls in every module it
//! imports, and checks that the terminology is closed: every superclass,
//! inverse, domain, range, disjoint class and individual type must resolve,
//! no IRI may be declared twice, and the class hierarchy must be acyclic.
//! The resulting [`Schema`] is read-only.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::graph::{Graph, Term, Triple};
use crate::model::iris::*;
use crate::model::{
    local_name, Class, Individual, IndividualValue, ModuleId, Namespace, NamespaceModule,
    Property, PropertyKind,
};
use crate::namespaces;

/// A terminology definition that does not hold together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same IRI is declared twice (as any mix of class, property, individual).
    #[error("{0} is declared more than once")]
    DuplicateTerm(String),
    /// A term is declared outside its module's namespace.
    #[error("{term} is not in namespace {namespace}")]
    ForeignTerm {
        /// The offending term.
        term: String,
        /// The namespace it should belong to.
        namespace: String,
    },
    /// A class names a superclass that is not defined.
    #[error("class {class} has undefined superclass {parent}")]
    UndefinedSuperclass {
        /// The subclass.
        class: String,
        /// The missing parent.
        parent: String,
    },
    /// A property names an inverse that is not a defined object property.
    #[error("property {property} has undefined inverse {inverse}")]
    UndefinedInverse {
        /// The property declaring the inverse.
        property: String,
        /// The missing inverse.
        inverse: String,
    },
    /// A domain, range, disjoint class, super-property or individual
    /// type/property does not resolve.
    #[error("{term} has undefined {relation} {target}")]
    UndefinedTarget {
        /// The term holding the reference.
        term: String,
        /// Which reference failed (`domain`, `range`, ...).
        relation: &'static str,
        /// The missing target.
        target: String,
    },
    /// The subclass graph contains a cycle.
    #[error("class hierarchy is cyclic at {0}")]
    CyclicHierarchy(String),
    /// An `owl:imports` target is not a known module.
    #[error("import {0} does not name a known schema module")]
    UnresolvedImport(String),
}

/// A technique's catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueInfo {
    /// Technique IRI.
    pub iri: &'static str,
    /// Catalogue code (e.g., `TE0132`).
    pub code: Option<&'static str>,
    /// Tactic IRI.
    pub tactic: Option<&'static str>,
    /// Cognitive phase IRI.
    pub phase: Option<&'static str>,
}

/// A loaded schema module together with the modules it imports.
#[derive(Debug, Clone)]
pub struct Schema {
    module: NamespaceModule,
    imports: Vec<NamespaceModule>,
    classes: BTreeMap<&'static str, Class>,
    properties: BTreeMap<&'static str, Property>,
    individuals: BTreeMap<&'static str, Individual>,
    ancestors: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

/// Loads and validates the schema module `id`, including its imports.
///
/// # Errors
///
/// Returns [`SchemaError`] if the terminology is not closed or is cyclic.
pub fn load(id: ModuleId) -> Result<Schema, SchemaError> {
    let module = namespaces::module(id);
    let mut imports = Vec::new();
    let mut pending: Vec<&'static str> = module.namespace.imports.to_vec();
    while let Some(iri) = pending.pop() {
        let imported = ModuleId::ALL
            .iter()
            .map(|m| namespaces::module(*m))
            .find(|m| m.namespace.ontology_iri == iri)
            .ok_or_else(|| SchemaError::UnresolvedImport(iri.to_owned()))?;
        if imports
            .iter()
            .any(|m: &NamespaceModule| m.id == imported.id)
        {
            continue;
        }
        pending.extend(imported.namespace.imports.iter().copied());
        imports.push(imported);
    }
    let schema = Schema::from_modules(module, imports)?;
    tracing::debug!(
        module = %id,
        classes = schema.classes.len(),
        properties = schema.properties.len(),
        individuals = schema.individuals.len(),
        "schema loaded"
    );
    Ok(schema)
}

impl Schema {
    /// Validates and indexes `module` against itself plus `imports`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on the first violation found.
    pub fn from_modules(
        module: NamespaceModule,
        imports: Vec<NamespaceModule>,
    ) -> Result<Self, SchemaError> {
        for term in module_terms(&module) {
            if !term.starts_with(module.namespace.iri) {
                return Err(SchemaError::ForeignTerm {
                    term: term.to_owned(),
                    namespace: module.namespace.iri.to_owned(),
                });
            }
        }

        let mut seen = BTreeSet::new();
        let mut classes = BTreeMap::new();
        let mut properties = BTreeMap::new();
        let mut individuals = BTreeMap::new();
        for m in std::iter::once(&module).chain(imports.iter()) {
            for term in module_terms(m) {
                if !seen.insert(term) {
                    return Err(SchemaError::DuplicateTerm(term.to_owned()));
                }
            }
            classes.extend(m.classes.iter().map(|c| (c.id, c.clone())));
            properties.extend(m.properties.iter().map(|p| (p.id, p.clone())));
            individuals.extend(m.individuals.iter().map(|i| (i.id, i.clone())));
        }

        let is_class = |iri: &str| iri == OWL_THING || classes.contains_key(iri);
        let undefined = |term: &str, relation: &'static str, target: &str| {
            SchemaError::UndefinedTarget {
                term: term.to_owned(),
                relation,
                target: target.to_owned(),
            }
        };

        for class in &module.classes {
            if let Some(parent) = class.subclass_of.iter().find(|p| !is_class(p)) {
                return Err(SchemaError::UndefinedSuperclass {
                    class: class.id.to_owned(),
                    parent: (*parent).to_owned(),
                });
            }
            if let Some(other) = class.disjoint_with.iter().find(|d| !classes.contains_key(*d)) {
                return Err(undefined(class.id, "disjoint class", other));
            }
        }

        for prop in &module.properties {
            if let Some(domain) = prop.domain.filter(|d| !is_class(d)) {
                return Err(undefined(prop.id, "domain", domain));
            }
            let range_ok = match prop.kind {
                PropertyKind::Object => is_class(prop.range),
                PropertyKind::Datatype => prop.range.starts_with(XSD),
            };
            if !range_ok {
                return Err(undefined(prop.id, "range", prop.range));
            }
            if let Some(inverse) = prop.inverse_of {
                let resolved = properties
                    .get(inverse)
                    .is_some_and(|p| p.kind == PropertyKind::Object);
                if !resolved {
                    return Err(SchemaError::UndefinedInverse {
                        property: prop.id.to_owned(),
                        inverse: inverse.to_owned(),
                    });
                }
            }
            if let Some(sup) = prop.sub_property_of.iter().find(|s| !properties.contains_key(*s)) {
                return Err(undefined(prop.id, "super-property", sup));
            }
        }

        for ind in &module.individuals {
            if !classes.contains_key(ind.type_) {
                return Err(undefined(ind.id, "type", ind.type_));
            }
            if let Some((prop, _)) = ind
                .properties
                .iter()
                .find(|(p, _)| !properties.contains_key(*p))
            {
                return Err(undefined(ind.id, "property", prop));
            }
        }

        let ancestors = class_ancestors(&classes)?;

        Ok(Self {
            module,
            imports,
            classes,
            properties,
            individuals,
            ancestors,
        })
    }

    /// Which module this schema is.
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.module.id
    }

    /// Namespace metadata of the module itself (not its imports).
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.module.namespace
    }

    /// The module's raw tables.
    #[must_use]
    pub fn module(&self) -> &NamespaceModule {
        &self.module
    }

    /// Modules pulled in through `owl:imports`.
    #[must_use]
    pub fn imports(&self) -> &[NamespaceModule] {
        &self.imports
    }

    /// Builds the IRI of `local` in this module's namespace.
    #[must_use]
    pub fn mint(&self, local: &str) -> String {
        format!("{}{}", self.module.namespace.iri, local)
    }

    /// Looks up a class by IRI, across this module and its imports.
    #[must_use]
    pub fn class(&self, iri: &str) -> Option<&Class> {
        self.classes.get(iri)
    }

    /// Looks up a class by local name, preferring this module's namespace.
    #[must_use]
    pub fn class_by_name(&self, name: &str) -> Option<&Class> {
        self.namespaces()
            .find_map(|ns| self.classes.get(format!("{}{name}", ns.iri).as_str()))
    }

    /// Looks up a property by IRI.
    #[must_use]
    pub fn property(&self, iri: &str) -> Option<&Property> {
        self.properties.get(iri)
    }

    /// Looks up a named individual by IRI.
    #[must_use]
    pub fn individual(&self, iri: &str) -> Option<&Individual> {
        self.individuals.get(iri)
    }

    /// Looks up a named individual by local name, preferring this module's namespace.
    #[must_use]
    pub fn individual_by_name(&self, name: &str) -> Option<&Individual> {
        self.namespaces()
            .find_map(|ns| self.individuals.get(format!("{}{name}", ns.iri).as_str()))
    }

    /// Returns true if `sub` is `sup`, a transitive subclass of it, or `sup` is `owl:Thing`.
    #[must_use]
    pub fn is_subclass_of(&self, sub: &str, sup: &str) -> bool {
        sub == sup
            || sup == OWL_THING
            || self.ancestors.get(sub).is_some_and(|a| a.contains(sup))
    }

    /// Strict ancestors of `class`, excluding `owl:Thing`.
    pub fn ancestors(&self, class: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.ancestors.get(class).into_iter().flatten().copied()
    }

    /// Returns true if `iri` names a class, property, individual or
    /// ontology of this schema or its imports.
    #[must_use]
    pub fn is_vocabulary(&self, iri: &str) -> bool {
        self.classes.contains_key(iri)
            || self.properties.contains_key(iri)
            || self.individuals.contains_key(iri)
            || self
                .namespaces()
                .any(|ns| ns.ontology_iri == iri || ns.iri == iri)
    }

    /// Returns the catalogue entry of the technique named `name`.
    #[must_use]
    pub fn technique(&self, name: &str) -> Option<TechniqueInfo> {
        let ind = self.individual_by_name(name)?;
        if !self.is_subclass_of(ind.type_, TECHNIQUE) {
            return None;
        }
        let iri_of = |prop: &str| {
            ind.properties.iter().find_map(|(p, v)| match v {
                IndividualValue::IriRef(iri) if *p == prop => Some(*iri),
                _ => None,
            })
        };
        let code = ind.properties.iter().find_map(|(p, v)| match v {
            IndividualValue::Str(s) if *p == HAS_CODE => Some(*s),
            _ => None,
        });
        Some(TechniqueInfo {
            iri: ind.id,
            code,
            tactic: iri_of(BELONGS_TO_TACTIC),
            phase: iri_of(BELONGS_TO_PHASE),
        })
    }

    /// Returns the cognitive phase named `name`.
    #[must_use]
    pub fn phase(&self, name: &str) -> Option<&Individual> {
        self.individual_by_name(name)
            .filter(|ind| self.is_subclass_of(ind.type_, COGNITIVE_PHASE))
    }

    /// `(prefix, namespace)` pairs: standard vocabularies, then this module
    /// and its imports.
    #[must_use]
    pub fn prefixes(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = standard_prefixes().to_vec();
        out.extend(self.namespaces().map(|ns| (ns.prefix, ns.iri)));
        out
    }

    /// Renders this module's terminology (not its imports) as triples.
    #[must_use]
    pub fn tbox_graph(&self) -> Graph {
        tbox_graph(&self.module)
    }

    fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        std::iter::once(&self.module.namespace).chain(self.imports.iter().map(|m| &m.namespace))
    }
}

const TECHNIQUE: &str = "https://m82-project.org/dima-bias/ontology#Technique";
const COGNITIVE_PHASE: &str = "https://m82-project.org/dima-bias/ontology#CognitivePhase";
const HAS_CODE: &str = "https://m82-project.org/dima-bias/ontology#hasCode";
const BELONGS_TO_TACTIC: &str = "https://m82-project.org/dima-bias/ontology#belongsToTactic";
const BELONGS_TO_PHASE: &str = "https://m82-project.org/dima-bias/ontology#belongsToPhase";

/// Prefixes every serialization and query declares.
#[must_use]
pub fn standard_prefixes() -> [(&'static str, &'static str); 4] {
    [("owl", OWL), ("rdf", RDF), ("rdfs", RDFS), ("xsd", XSD)]
}

fn module_terms(m: &NamespaceModule) -> impl Iterator<Item = &'static str> + '_ {
    m.classes
        .iter()
        .map(|c| c.id)
        .chain(m.properties.iter().map(|p| p.id))
        .chain(m.individuals.iter().map(|i| i.id))
}

fn class_ancestors(
    classes: &BTreeMap<&'static str, Class>,
) -> Result<BTreeMap<&'static str, BTreeSet<&'static str>>, SchemaError> {
    fn visit(
        class: &'static str,
        classes: &BTreeMap<&'static str, Class>,
        done: &mut BTreeMap<&'static str, BTreeSet<&'static str>>,
        stack: &mut Vec<&'static str>,
    ) -> Result<(), SchemaError> {
        if done.contains_key(class) {
            return Ok(());
        }
        if stack.contains(&class) {
            return Err(SchemaError::CyclicHierarchy(class.to_owned()));
        }
        stack.push(class);
        let mut acc = BTreeSet::new();
        let parents = classes.get(class).map(|c| c.subclass_of).unwrap_or_default();
        for parent in parents.iter().copied().filter(|p| *p != OWL_THING) {
            visit(parent, classes, done, stack)?;
            acc.insert(parent);
            if let Some(grand) = done.get(parent) {
                acc.extend(grand.iter().copied());
            }
        }
        stack.pop();
        done.insert(class, acc);
        Ok(())
    }

    let mut done = BTreeMap::new();
    for class in classes.keys().copied() {
        visit(class, classes, &mut done, &mut Vec::new())?;
    }
    Ok(done)
}

fn tbox_graph(module: &NamespaceModule) -> Graph {
    let mut g = Graph::new();
    let ns = &module.namespace;
    let describe = |g: &mut Graph, id: &str, label: &str, comment: &str| {
        g.insert(Triple::new(Term::iri(id), RDFS_LABEL, Term::string(label)));
        g.insert(Triple::new(Term::iri(id), RDFS_COMMENT, Term::string(comment)));
    };

    g.insert(Triple::iris(ns.ontology_iri, RDF_TYPE, OWL_ONTOLOGY));
    describe(&mut g, ns.ontology_iri, ns.label, ns.comment);
    for import in ns.imports {
        g.insert(Triple::iris(ns.ontology_iri, OWL_IMPORTS, import));
    }

    for class in &module.classes {
        g.insert(Triple::iris(class.id, RDF_TYPE, OWL_CLASS));
        describe(&mut g, class.id, class.label, class.comment);
        for parent in class.subclass_of {
            g.insert(Triple::iris(class.id, RDFS_SUBCLASS_OF, parent));
        }
        for other in class.disjoint_with {
            g.insert(Triple::iris(class.id, OWL_DISJOINT_WITH, other));
        }
    }

    for prop in &module.properties {
        let kind = match prop.kind {
            PropertyKind::Datatype => OWL_DATATYPE_PROPERTY,
            PropertyKind::Object => OWL_OBJECT_PROPERTY,
        };
        g.insert(Triple::iris(prop.id, RDF_TYPE, kind));
        if prop.functional {
            g.insert(Triple::iris(prop.id, RDF_TYPE, OWL_FUNCTIONAL_PROPERTY));
        }
        describe(&mut g, prop.id, prop.label, prop.comment);
        if let Some(domain) = prop.domain {
            g.insert(Triple::iris(prop.id, RDFS_DOMAIN, domain));
        }
        g.insert(Triple::iris(prop.id, RDFS_RANGE, prop.range));
        for sup in prop.sub_property_of {
            g.insert(Triple::iris(prop.id, RDFS_SUBPROPERTY_OF, sup));
        }
        if let Some(inverse) = prop.inverse_of {
            g.insert(Triple::iris(prop.id, OWL_INVERSE_OF, inverse));
        }
    }

    for ind in &module.individuals {
        g.insert(Triple::iris(ind.id, RDF_TYPE, OWL_NAMED_INDIVIDUAL));
        g.insert(Triple::iris(ind.id, RDF_TYPE, ind.type_));
        describe(&mut g, ind.id, ind.label, ind.comment);
        for (prop, value) in ind.properties {
            let object = match value {
                IndividualValue::Str(s) => Term::string(*s),
                IndividualValue::Int(i) => Term::integer(*i),
                IndividualValue::IriRef(iri) => Term::iri(*iri),
            };
            g.insert(Triple::new(Term::iri(ind.id), *prop, object));
        }
    }
    g
}

/// Returns the local name of a technique IRI, lowercased, as used in usage IRIs.
#[must_use]
pub fn technique_slug(technique_iri: &str) -> String {
    local_name(technique_iri).to_lowercase()
}
