//! # DVNC Report
//!
//! Assembles the sectioned innovation report from insights and drivers.

mod report_builder;
mod templates;

pub use report_builder::{render, ReportBuilder, ReportSection, SectionKind, TIMESTAMP_FORMAT};
pub use templates::{domain_icon, ReportTemplates, CLOSING_LINE};
