use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labpair_core::report::{RenderedReports, STAFF_FILE, STUDENTS_FILE};
use tracing::info;

/// Write both rendered reports into `dir`, returning the paths written.
pub fn write_reports(dir: &Path, reports: &RenderedReports) -> Result<[PathBuf; 2]> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let students_path = dir.join(STUDENTS_FILE);
    let staff_path = dir.join(STAFF_FILE);

    std::fs::write(&students_path, &reports.students)
        .with_context(|| format!("Failed to write {}", students_path.display()))?;
    std::fs::write(&staff_path, &reports.staff)
        .with_context(|| format!("Failed to write {}", staff_path.display()))?;

    info!(students = %students_path.display(), staff = %staff_path.display(), "Reports written");
    Ok([students_path, staff_path])
}
