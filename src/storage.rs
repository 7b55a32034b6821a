use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::FetchError;

/// Writes the item list to `path` as pretty-printed JSON, creating any
/// missing parent directories first. An existing file is overwritten.
pub fn save_items(path: &Path, items: &[Value]) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // to_string_pretty uses 2-space indentation and leaves non-ASCII
    // characters unescaped, which the downstream consumers rely on.
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;

    log::info!("Wrote {} items to {:?}", items.len(), path);
    Ok(())
}
