use crate::enumerate::walk_directories;
use crate::filter::FilterConfig;
use crate::utils::{base_name, relative_path};
use std::path::Path;
use tracing::debug;

/// Renders the folder tree under `root`, one line per directory and file.
///
/// A directory line is `indent + name + "/"` and each of its files is
/// `indent + "  " + name`, where `indent` is two spaces per separator in the
/// directory's root-relative path. The root and its immediate children share
/// the same indent. Only the exclude substrings of `config` apply here.
pub fn build_structure(root: &Path, config: &FilterConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for listing in walk_directories(root, config) {
        let relative = relative_path(root, &listing.path);
        let depth = relative.components().count().saturating_sub(1);
        let indent = "  ".repeat(depth);

        lines.push(format!("{}{}/", indent, base_name(&listing.path)));
        for file in &listing.files {
            lines.push(format!("{}  {}", indent, file));
        }
    }

    debug!("Built structure with {} lines for {}", lines.len(), root.display());
    lines
}

pub fn format_structure(root: &Path, config: &FilterConfig) -> String {
    build_structure(root, config).join("\n")
}
