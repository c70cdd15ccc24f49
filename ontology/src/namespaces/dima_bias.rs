//! `dima:` namespace: the DIMA bias layer.
//!
//! Techniques are cognitive biases a text may exploit. Each technique belongs
//! to one tactic, and each tactic to one cognitive phase. A
//! `dima:TechniqueUsage` joins an Influence-Mini argument (or one of its
//! components) to the technique it instantiates.

use crate::model::iris::*;
use crate::model::{
    Class, Individual, IndividualValue, ModuleId, Namespace, NamespaceModule, Property,
    PropertyKind,
};

/// Returns the `dima:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        id: ModuleId::DimaBias,
        namespace: Namespace {
            prefix: "dima",
            iri: NS_DIMA,
            ontology_iri: DIMA_ONTOLOGY,
            label: "DIMA bias",
            comment: "Cognitive-bias techniques, their tactics and phases, and \
                      technique usages attached to Influence-Mini arguments.",
            imports: &[SCIM_ONTOLOGY],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            label: "Cognitive phase",
            comment: "A stage of information processing: Detect, Inform, Memorise or Act.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "Tactic",
            comment: "A grouping of techniques inside one cognitive phase.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Technique",
            comment: "A named rhetorical or cognitive-bias pattern.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://m82-project.org/dima-bias/ontology#TechniqueUsage",
            label: "Technique usage",
            comment: "One occurrence of a technique in an argument, with its \
                      explanation and supporting excerpts.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://m82-project.org/dima-bias/ontology#usesTechnique",
            label: "usesTechnique",
            comment: "Links an argument or argument component to a technique usage.",
            kind: PropertyKind::Object,
            functional: false,
            domain: None,
            range: "https://m82-project.org/dima-bias/ontology#TechniqueUsage",
            sub_property_of: &[],
            inverse_of: Some("https://m82-project.org/dima-bias/ontology#isTechniqueUsedBy"),
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#isTechniqueUsedBy",
            label: "isTechniqueUsedBy",
            comment: "Links a technique usage to the argument or component using it.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://m82-project.org/dima-bias/ontology#TechniqueUsage"),
            range: OWL_THING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#instantiatesTechnique",
            label: "instantiatesTechnique",
            comment: "The technique a usage is an occurrence of.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://m82-project.org/dima-bias/ontology#TechniqueUsage"),
            range: "https://m82-project.org/dima-bias/ontology#Technique",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#hasExplanation",
            label: "hasExplanation",
            comment: "Why the technique was detected.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://m82-project.org/dima-bias/ontology#TechniqueUsage"),
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#hasExcerpt",
            label: "hasExcerpt",
            comment: "A text excerpt supporting the detection.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://m82-project.org/dima-bias/ontology#TechniqueUsage"),
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#belongsToPhase",
            label: "belongsToPhase",
            comment: "The cognitive phase a tactic or technique belongs to.",
            kind: PropertyKind::Object,
            functional: true,
            domain: None,
            range: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#belongsToTactic",
            label: "belongsToTactic",
            comment: "The tactic a technique belongs to.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://m82-project.org/dima-bias/ontology#Technique"),
            range: "https://m82-project.org/dima-bias/ontology#Tactic",
            sub_property_of: &[],
            inverse_of: Some("https://m82-project.org/dima-bias/ontology#hasTechnique"),
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#hasTechnique",
            label: "hasTechnique",
            comment: "A technique grouped under a tactic.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://m82-project.org/dima-bias/ontology#Tactic"),
            range: "https://m82-project.org/dima-bias/ontology#Technique",
            sub_property_of: &[],
            inverse_of: None,
        },
        Property {
            id: "https://m82-project.org/dima-bias/ontology#hasCode",
            label: "hasCode",
            comment: "The catalogue code of a tactic or technique (e.g., TE0132).",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: None,
            range: XSD_STRING,
            sub_property_of: &[],
            inverse_of: None,
        },
    ]
}

fn individuals() -> Vec<Individual> {
    let mut individuals = phases();
    individuals.extend(tactics());
    individuals.extend(techniques());
    individuals
}

fn phases() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#Detect",
            type_: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            label: "Detect",
            comment: "Capturing attention and getting information noticed.",
            properties: &[],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#Inform",
            type_: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            label: "Inform",
            comment: "Shaping how information is understood.",
            properties: &[],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#Memorise",
            type_: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            label: "Memorise",
            comment: "Shaping what is retained.",
            properties: &[],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#Act",
            type_: "https://m82-project.org/dima-bias/ontology#CognitivePhase",
            label: "Act",
            comment: "Shaping decisions and behaviour.",
            properties: &[],
        },
    ]
}

fn tactics() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA013",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA013",
            comment: "Detect-phase tactic TA013.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA013")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA014",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA014",
            comment: "Detect-phase tactic TA014.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA014")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA015",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA015",
            comment: "Detect-phase tactic TA015.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA015")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA025",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA025",
            comment: "Inform-phase tactic TA025.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA025")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Inform")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA026",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA026",
            comment: "Inform-phase tactic TA026.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA026")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Inform")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA032",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA032",
            comment: "Memorise-phase tactic TA032.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA032")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA033",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA033",
            comment: "Memorise-phase tactic TA033.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA033")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#TA043",
            type_: "https://m82-project.org/dima-bias/ontology#Tactic",
            label: "TA043",
            comment: "Act-phase tactic TA043.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TA043")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Act")),
            ],
        },
    ]
}

fn techniques() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#BizarrenessEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Bizarreness effect",
            comment: "Unusual or bizarre material is remembered better than common material.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0131")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA013")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#NegativityBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Negativity bias",
            comment: "Negative information draws more attention and weighs more than positive information.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0132")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA013")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#VonRestorffEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Von Restorff effect",
            comment: "An item that stands out from its peers is more likely to be noticed and remembered.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0141")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA014")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#AnchoringBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Anchoring bias",
            comment: "Judgement leans on the first piece of information offered.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0142")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA014")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#ContrastEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Contrast effect",
            comment: "Perception of an item is shifted by comparison with a contrasting one.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0143")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA014")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#DistinctionBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Distinction bias",
            comment: "Options look more different when evaluated side by side than apart.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0151")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA015")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#WeberFechnerLaw",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Weber-Fechner law",
            comment: "Perceived change is proportional to the magnitude of the starting stimulus.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0152")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA015")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Detect")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#FalseConsensusEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "False consensus effect",
            comment: "Overestimating how widely one's own opinions are shared.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0251")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA025")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Inform")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#HindsightBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Hindsight bias",
            comment: "Past events are presented as having been predictable.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0261")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA026")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Inform")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#ImplicitStereotype",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Implicit stereotype",
            comment: "Unconscious attribution of qualities to members of a group.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0321")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA032")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#FadingAffectBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Fading affect bias",
            comment: "Emotion tied to unpleasant memories fades faster than for pleasant ones.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0322")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA032")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#RecencyEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Recency effect",
            comment: "The last items presented are recalled best.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0331")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA033")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#MereExposureEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Mere exposure effect",
            comment: "Repeated exposure alone increases liking.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0332")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA033")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#PrimacyEffect",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Primacy effect",
            comment: "The first items presented are recalled best.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0333")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA033")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Memorise")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#OmissionBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Omission bias",
            comment: "Harm from inaction is judged less severely than harm from action.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0431")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA043")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Act")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#StatusQuoBias",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Status quo bias",
            comment: "Preference for the current state of affairs.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0432")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA043")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Act")),
            ],
        },
        Individual {
            id: "https://m82-project.org/dima-bias/ontology#InformationOverload",
            type_: "https://m82-project.org/dima-bias/ontology#Technique",
            label: "Information overload",
            comment: "Too much information degrades the ability to decide.",
            properties: &[
                ("https://m82-project.org/dima-bias/ontology#hasCode", IndividualValue::Str("TE0433")),
                ("https://m82-project.org/dima-bias/ontology#belongsToTactic", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#TA043")),
                ("https://m82-project.org/dima-bias/ontology#belongsToPhase", IndividualValue::IriRef("https://m82-project.org/dima-bias/ontology#Act")),
            ],
        },
    ]
}
