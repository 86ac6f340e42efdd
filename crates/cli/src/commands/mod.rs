//! CLI Commands

pub mod analyze;
pub mod domains;
pub mod init;

pub use analyze::AnalyzeCommand;
pub use domains::DomainsCommand;
pub use init::InitCommand;
