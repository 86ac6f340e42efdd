//! # DVNC Knowledge
//!
//! Hand-authored concept catalogs and the domain experts that draw on them.

mod catalog;
mod domain_expert;
mod knowledge_base;

pub use catalog::{anatomy, biomechanics, catalog_for, physics};
pub use domain_expert::{DomainExpert, EXPLORATION_TEMPERATURE};
pub use knowledge_base::KnowledgeBase;
