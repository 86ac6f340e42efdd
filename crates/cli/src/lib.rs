//! # DVNC CLI
//!
//! Terminal front end: one-shot commands and the interactive session.

pub mod commands;
pub mod display;
pub mod export;
pub mod interactive;
pub mod settings;
