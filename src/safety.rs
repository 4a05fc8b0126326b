//! Safety checks for the JSON export path.
//!
//! The export overwrites whatever is at the target path, so the target must
//! look like a report and must never be the dataset being read.

use anyhow::{bail, Result};
use std::path::Path;

/// Validates that a report path is safe to overwrite.
///
/// Checks:
/// - The file name must end in `.json`
/// - The path cannot be the same as the source CSV
/// - The path cannot point at another CSV file
pub fn validate_report_path(output: &Path, source: &Path) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("json") => {}
        Some("csv") => bail!(
            "Safety check failed: report '{}' would overwrite a CSV file",
            output.display()
        ),
        _ => bail!(
            "Safety check failed: report '{}' must have a .json extension",
            output.display()
        ),
    }

    if output == source {
        bail!(
            "Safety check failed: report '{}' cannot be the same as source '{}'",
            output.display(),
            source.display()
        );
    }

    Ok(())
}
