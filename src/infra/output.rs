use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::EventRecord;

/// Writes all records as one pretty-printed JSON array.
///
/// Non-ASCII text is written as-is; the parent directory is created if needed.
pub fn persist_to_json(records: &[EventRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json_content = serde_json::to_string_pretty(records)?;
    fs::write(path, json_content)?;

    Ok(())
}
