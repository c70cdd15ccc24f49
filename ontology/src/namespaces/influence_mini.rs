//! `scim:` namespace: the Influence-Mini semantic layer.
//!
//! Articles are split into motifs (paragraphs); each motif carries arguments
//! built from premises, developments and conclusions. Narrated agents are the
//! people and organisations a story talks about, and quotes are text spans
//! attributed to them.

use crate::model::iris::*;
use crate::model::{
    Class, Individual, ModuleId, Namespace, NamespaceModule, Property, PropertyKind,
};

/// Returns the `scim:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        id: ModuleId::InfluenceMini,
        namespace: Namespace {
            prefix: "scim",
            iri: NS_SCIM,
            ontology_iri: SCIM_ONTOLOGY,
            label: "Influence-Mini",
            comment: "Narrative structure of news articles: motifs, arguments, \
                      narrated agents and quotes.",
            imports: &[],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
    }
}

const QUOTE_SUBTYPES: &[&str] = &[
    "https://stratcomcoe.org/influence-mini/ontology#DirectQuote",
    "https://stratcomcoe.org/influence-mini/ontology#IndirectQuote",
    "https://stratcomcoe.org/influence-mini/ontology#ParaphrasedQuote",
    "https://stratcomcoe.org/influence-mini/ontology#InterpretiveQuote",
];

fn classes() -> Vec<Class> {
    let mut classes = vec![
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Article",
            label: "Article",
            comment: "A news article; the root of one mapped record.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Motif",
            label: "Motif",
            comment: "An ordered segment of an article, usually one paragraph.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Argument",
            label: "Argument",
            comment: "A line of reasoning inside a motif, built from premises, \
                      developments and conclusions.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent",
            label: "Argument component",
            comment: "A typed text span that takes part in an argument.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Premise",
            label: "Premise",
            comment: "A supporting claim an argument starts from.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"],
            disjoint_with: &[
                "https://stratcomcoe.org/influence-mini/ontology#Development",
                "https://stratcomcoe.org/influence-mini/ontology#Conclusion",
            ],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Development",
            label: "Development",
            comment: "An interpretive or inferential step bridging premises and conclusions.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"],
            disjoint_with: &["https://stratcomcoe.org/influence-mini/ontology#Conclusion"],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Conclusion",
            label: "Conclusion",
            comment: "The claim an argument arrives at.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedAgent",
            label: "Narrated agent",
            comment: "An entity mentioned in the narrative.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#Quote",
            label: "Quote",
            comment: "A text span attributed to a narrated agent.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#DirectQuote",
            label: "Direct quote",
            comment: "A verbatim citation, usually in quotation marks.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#Quote"],
            disjoint_with: &[
                "https://stratcomcoe.org/influence-mini/ontology#IndirectQuote",
                "https://stratcomcoe.org/influence-mini/ontology#ParaphrasedQuote",
                "https://stratcomcoe.org/influence-mini/ontology#InterpretiveQuote",
            ],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#IndirectQuote",
            label: "Indirect quote",
            comment: "A reworded statement that keeps an explicit attribution.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#Quote"],
            disjoint_with: &[
                "https://stratcomcoe.org/influence-mini/ontology#ParaphrasedQuote",
                "https://stratcomcoe.org/influence-mini/ontology#InterpretiveQuote",
            ],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#ParaphrasedQuote",
            label: "Paraphrased quote",
            comment: "A summary of what someone said, without explicit attribution.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#Quote"],
            disjoint_with: &["https://stratcomcoe.org/influence-mini/ontology#InterpretiveQuote"],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#InterpretiveQuote",
            label: "Interpretive quote",
            comment: "The author's interpretation of a position, presented as a quote.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#Quote"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Quote status",
            comment: "The rhetorical role a quote plays in the narrative.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
    ];
    classes.extend(agent_classes());
    classes
}

fn agent_classes() -> Vec<Class> {
    vec![
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedPerson",
            label: "Narrated person",
            comment: "A generic individual human agent.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedPolitician",
            label: "Narrated politician",
            comment: "An elected, governing, or policy-setting figure.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedJournalist",
            label: "Narrated journalist",
            comment: "A reporter, editor, or correspondent.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedActivist",
            label: "Narrated activist",
            comment: "A protester, advocate, or campaigner.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedBusinessLeader",
            label: "Narrated business leader",
            comment: "A CEO, manager, or business owner.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedAcademic",
            label: "Narrated academic",
            comment: "A professor, researcher, or expert.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedMilitaryFigure",
            label: "Narrated military figure",
            comment: "A general, commander, or individual soldier.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedGeneralPublic",
            label: "Narrated general public",
            comment: "An ordinary person without a notable role.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedBystander",
            label: "Narrated bystander",
            comment: "A member of the public present at an event.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedGeneralPublic"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedGeneralWorker",
            label: "Narrated general worker",
            comment: "A member of the public identified by their work.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedGeneralPublic"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedCriminal",
            label: "Narrated criminal",
            comment: "An individual accused of or described as committing a crime.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedCelebrity",
            label: "Narrated celebrity",
            comment: "An artist, influencer, or famous personality.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedPerson"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization",
            label: "Narrated organization",
            comment: "Any group or collective entity.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedCorporation",
            label: "Narrated corporation",
            comment: "A commercial entity, business, or brand.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedMediaOrganization",
            label: "Narrated media organization",
            comment: "A newspaper, news agency, or publisher.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedGovernment",
            label: "Narrated government",
            comment: "A governing body or administration.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedInstitution",
            label: "Narrated institution",
            comment: "A school, hospital, court, or non-profit.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedNGO",
            label: "Narrated NGO",
            comment: "A non-governmental advocacy group.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedMilitary",
            label: "Narrated military",
            comment: "An army or military institution as a whole.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedCriminalOrganization",
            label: "Narrated criminal organization",
            comment: "A gang, cartel, or mafia.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedTerroristOrganization",
            label: "Narrated terrorist organization",
            comment: "An extremist group using violence.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedInternationalOrganization",
            label: "Narrated international organization",
            comment: "An intergovernmental body such as the UN or NATO.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedOrganization"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedState",
            label: "Narrated state",
            comment: "A geopolitical or state-level actor.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"],
            disjoint_with: &[],
        },
        Class {
            id: "https://stratcomcoe.org/influence-mini/ontology#NarratedAgentUndecided",
            label: "Undecided agent",
            comment: "An agent whose role could not be determined.",
            subclass_of: &["https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        // Datatype properties
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasId",
            label: "hasId",
            comment: "The minted local identifier of an individual.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasHeadline",
            label: "hasHeadline",
            comment: "The headline of an article.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Article"),
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasText",
            label: "hasText",
            comment: "The source text of a motif, argument component or quote.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: None,
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasName",
            label: "hasName",
            comment: "The surface name of a narrated agent.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"),
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasPosition",
            label: "hasPosition",
            comment: "Zero-based position of a motif within its article.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Motif"),
            range: XSD_NON_NEGATIVE_INTEGER,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasOrder",
            label: "hasOrder",
            comment: "Zero-based order of a component within its argument section.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"),
            range: XSD_NON_NEGATIVE_INTEGER,
            sub_property_of: &[],
            inverse_of: None,
        },
        // Structure
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasMotif",
            label: "hasMotif",
            comment: "Links an article to one of its motifs.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Article"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Motif",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#isMotifOf"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isMotifOf",
            label: "isMotifOf",
            comment: "Links a motif to the article it belongs to.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Motif"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Article",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasArgument",
            label: "hasArgument",
            comment: "Links a motif to an argument it contains.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Motif"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Argument",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#isArgumentOf"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isArgumentOf",
            label: "isArgumentOf",
            comment: "Links an argument to the motif it belongs to.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Argument"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Motif",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasComponent",
            label: "hasComponent",
            comment: "Links an argument to any of its components.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Argument"),
            range: "https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#isComponentOf"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isComponentOf",
            label: "isComponentOf",
            comment: "Links a component to an argument that uses it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Argument",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasPremise",
            label: "hasPremise",
            comment: "Links an argument to one of its premises.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Argument"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Premise",
            sub_property_of: &["https://stratcomcoe.org/influence-mini/ontology#hasComponent"],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasDevelopment",
            label: "hasDevelopment",
            comment: "Links an argument to one of its developments.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Argument"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Development",
            sub_property_of: &["https://stratcomcoe.org/influence-mini/ontology#hasComponent"],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasConclusion",
            label: "hasConclusion",
            comment: "Links an argument to one of its conclusions.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Argument"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Conclusion",
            sub_property_of: &["https://stratcomcoe.org/influence-mini/ontology#hasComponent"],
            inverse_of: None,
        },
        // Quotes
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasQuote",
            label: "hasQuote",
            comment: "Links an argument component to a quote that supports it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Quote",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#isMentionedIn"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isMentionedIn",
            label: "isMentionedIn",
            comment: "Links a quote to an argument component it supports.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Quote"),
            range: "https://stratcomcoe.org/influence-mini/ontology#ArgumentComponent",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#appearsInMotif",
            label: "appearsInMotif",
            comment: "Links a quote to the motif it was found in.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Quote"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Motif",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#containsQuote"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#containsQuote",
            label: "containsQuote",
            comment: "Links a motif to a quote found in it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Motif"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Quote",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isAttributedTo",
            label: "isAttributedTo",
            comment: "Links a quote to the agent who said it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Quote"),
            range: "https://stratcomcoe.org/influence-mini/ontology#NarratedAgent",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#hasAttributedQuote"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasAttributedQuote",
            label: "hasAttributedQuote",
            comment: "Links an agent to a quote attributed to it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Quote",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#mentionsInQuote",
            label: "mentionsInQuote",
            comment: "Links a quote to an agent it talks about.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Quote"),
            range: "https://stratcomcoe.org/influence-mini/ontology#NarratedAgent",
            sub_property_of: &[],
            inverse_of: Some("https://stratcomcoe.org/influence-mini/ontology#isMentionedInQuote"),
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#isMentionedInQuote",
            label: "isMentionedInQuote",
            comment: "Links an agent to a quote that mentions it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#NarratedAgent"),
            range: "https://stratcomcoe.org/influence-mini/ontology#Quote",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://stratcomcoe.org/influence-mini/ontology#hasQuoteStatus",
            label: "hasQuoteStatus",
            comment: "The rhetorical role of a quote.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://stratcomcoe.org/influence-mini/ontology#Quote"),
            range: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            sub_property_of: &[],
            inverse_of: None,
        },
    ]
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#ReportedStatement",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Reported statement",
            comment: "A neutral factual claim.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#OfficialPosition",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Official position",
            comment: "The formal stance of an institution or its representative.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#PersonalOpinion",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Personal opinion",
            comment: "The subjective view of an individual.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#InterpretiveStatement",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Interpretive statement",
            comment: "A reworded or inferred interpretation.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#HypotheticalStatement",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Hypothetical statement",
            comment: "An imagined or speculative scenario.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#Contradiction",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Contradiction",
            comment: "Disagreement with or negation of another idea.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#CallToAction",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Call to action",
            comment: "A demand, request, or push for change.",
            properties: &[],
        },
        Individual {
            id: "https://stratcomcoe.org/influence-mini/ontology#UndecidedStatement",
            type_: "https://stratcomcoe.org/influence-mini/ontology#QuoteStatus",
            label: "Undecided statement",
            comment: "A quote whose role could not be determined.",
            properties: &[],
        },
    ]
}

/// Returns the IRIs of the quote subtypes, which are pairwise disjoint.
#[must_use]
pub fn quote_subtypes() -> &'static [&'static str] {
    QUOTE_SUBTYPES
}
