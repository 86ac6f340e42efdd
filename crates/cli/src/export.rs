//! Report export to timestamped markdown files

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// File name for a report saved at `at`
pub fn report_file_name(at: NaiveDateTime) -> String {
    format!("dvnc_report_{}.md", at.format("%Y%m%d_%H%M%S"))
}

/// Write a report as UTF-8 into `dir`, creating it if needed
pub fn save_report(dir: &Path, content: &str, at: NaiveDateTime) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(at));
    std::fs::write(&path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Report saved");
    Ok(path)
}
