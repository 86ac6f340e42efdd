//! # DVNC Engine
//!
//! Integration layer with the Orchestrator - the central pipeline.

mod clock;
mod orchestrator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use orchestrator::{Analysis, Orchestrator, MAX_DRIVERS};

// Re-export dependencies
pub use knowledge::{DomainExpert, KnowledgeBase};
pub use report::{domain_icon, render, ReportBuilder, ReportSection, SectionKind};
pub use router::KeywordRouter;
