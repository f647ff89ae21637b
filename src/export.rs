use crate::errors::BrowserError;
use crate::utils::{normalize_path, relative_path};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads `path` as UTF-8 for display. Failures become an inline marker.
pub fn read_preview(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            content
        }
        Err(e) => {
            warn!("Failed to read file {}: {}", path.display(), e);
            format!("[Failed to read file: {}]", e)
        }
    }
}

/// Prefixes `content` with a markdown heading naming the file relative to `root`.
pub fn format_content_export(
    root: &Path,
    path: &Path,
    content: &str,
) -> Result<String, BrowserError> {
    if content.trim().is_empty() {
        return Err(BrowserError::EmptyPreview);
    }

    let filename = normalize_path(&relative_path(root, path));
    Ok(format!("# {}\n\n{}", filename, content))
}
