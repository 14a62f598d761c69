//! Plain-text report export.

use std::fs;
use std::path::Path;

use crate::error::ReportError;

/// Writes `text` to `path`, creating or truncating the file.
///
/// Last write wins. There is no atomic rename or backup; callers that need
/// durability have to add it themselves.
pub fn export(text: &str, path: &Path) -> Result<(), ReportError> {
    fs::write(path, text).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("report written to {}", path.display());
    Ok(())
}
