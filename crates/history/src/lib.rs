//! # DVNC History
//!
//! Bounded interaction history kept by a session.

mod interaction_history;

pub use interaction_history::{
    truncate_prompt, HistoryStats, InteractionHistory, InteractionRecord, DEFAULT_CAPACITY,
};
