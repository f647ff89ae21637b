use crate::enumerate::FileEntry;
use std::path::Path;
use tracing::{debug, trace};

pub const DEFAULT_EXCLUDE_SUBSTRINGS: &str = ".git,__pycache__";

/// Include/exclude settings applied while walking the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub include_extensions: Vec<String>,
    pub exclude_substrings: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            include_extensions: Vec::new(),
            exclude_substrings: parse_list(DEFAULT_EXCLUDE_SUBSTRINGS),
        }
    }
}

impl FilterConfig {
    pub fn new(extensions: &str, excludes: &str) -> Self {
        let config = FilterConfig {
            include_extensions: parse_list(extensions),
            exclude_substrings: parse_list(excludes),
        };
        debug!("Using filter config: {:?}", config);
        config
    }

    /// True when any exclude substring occurs anywhere in the directory path.
    pub fn is_excluded_dir<P: AsRef<Path>>(&self, dir: P) -> bool {
        let dir = dir.as_ref().to_string_lossy();
        self.exclude_substrings
            .iter()
            .any(|needle| dir.contains(needle.as_str()))
    }

    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.include_extensions.is_empty()
            || self
                .include_extensions
                .iter()
                .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Splits comma-separated user input into trimmed, non-empty, unique items.
pub fn parse_list(input: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !items.iter().any(|existing| existing == item) {
            items.push(item.to_owned());
        }
    }
    items
}

pub fn filter_by_name<'a>(entries: &'a [FileEntry], query: &str) -> Vec<&'a FileEntry> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return entries.iter().collect();
    }

    let visible: Vec<&FileEntry> = entries
        .iter()
        .filter(|entry| entry.display_path().to_lowercase().contains(&query))
        .collect();
    trace!(
        "Name filter '{}' kept {} of {} entries",
        query,
        visible.len(),
        entries.len()
    );
    visible
}
