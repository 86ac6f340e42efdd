//! # DVNC Router
//!
//! Matches prompt text against every registered expert's concept vocabulary.

mod keyword_router;

pub use keyword_router::{concept_tokens, KeywordRouter};
