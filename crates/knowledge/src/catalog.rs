//! Built-in da Vinci concept catalogs

use crate::KnowledgeBase;
use shared::{Domain, Result};

const PHYSICS: &[(&str, &str)] = &[
    ("Fluid Dynamics", "water screws and canal studies"),
    ("Aerodynamics", "ornithopter sketches and airflow notes"),
    ("Lever Mechanics", "gear trains, pulleys, cranes"),
    ("Structural Integrity", "bridges and fortification stress studies"),
    ("Fractal Geometry", "tree branching and river delta patterns"),
    ("Wave Propagation", "sound and light behavior studies"),
];

const BIOMECHANICS: &[(&str, &str)] = &[
    ("Joint Articulation", "elbow/shoulder motion notebooks"),
    ("Muscular Force", "layered muscle drawings"),
    ("Biological Levers", "limb lever ratios and gait notes"),
    ("Skeletal Structure", "Vitruvian proportions and load paths"),
    ("Kinematic Chains", "sequential movement studies"),
    ("Energy Transfer", "force distribution in living systems"),
];

const ANATOMY: &[(&str, &str)] = &[
    ("Human Proportionality", "Vitruvian Man proportional canon"),
    ("Muscular Systems", "detailed musculature sheets"),
    ("Circulatory System", "venous and arterial mapping"),
    ("Body Mechanics", "posture, stance, and motion sequences"),
    ("Neural Pathways", "brain and nerve studies"),
    ("Sensory Integration", "eye and ear mechanism drawings"),
];

pub fn physics() -> Result<KnowledgeBase> {
    KnowledgeBase::from_pairs("Physics", PHYSICS.iter().copied())
}

pub fn biomechanics() -> Result<KnowledgeBase> {
    KnowledgeBase::from_pairs("Biomechanics", BIOMECHANICS.iter().copied())
}

pub fn anatomy() -> Result<KnowledgeBase> {
    KnowledgeBase::from_pairs("Anatomy", ANATOMY.iter().copied())
}

/// Catalog backing a domain.
///
/// The configurable slot always gets the anatomy catalog, whatever its name.
pub fn catalog_for(domain: &Domain) -> Result<KnowledgeBase> {
    match domain {
        Domain::Physics => physics(),
        Domain::Biomechanics => biomechanics(),
        Domain::Configurable(name) => KnowledgeBase::from_pairs(name, ANATOMY.iter().copied()),
    }
}
