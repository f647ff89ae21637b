use crate::filter::FilterConfig;
use crate::utils::relative_path;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// A listed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    /// Always false while excluded directories are skipped during the walk.
    pub excluded: bool,
}

impl FileEntry {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative_path = relative_path(root, &path);
        FileEntry {
            path,
            relative_path,
            excluded: false,
        }
    }

    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// One visited directory and the names of the files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub path: PathBuf,
    pub files: Vec<String>,
}

/// Walks `root` top-down, a directory's files before its subdirectories,
/// keeping filesystem order otherwise. Directories whose path contains an
/// exclude substring are pruned together with everything below them.
pub fn walk_directories(root: &Path, config: &FilterConfig) -> Vec<DirListing> {
    let mut listings: Vec<DirListing> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
        .into_iter()
        .filter_entry(|entry| {
            if entry.file_type().is_dir() && config.is_excluded_dir(entry.path()) {
                debug!("Skipping excluded directory: {}", entry.path().display());
                return false;
            }
            true
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let failed = e.path().unwrap_or(root);
                warn!("Error walking {}: {}", failed.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            trace!("Entering directory: {}", entry.path().display());
            listings.push(DirListing {
                path: entry.path().to_path_buf(),
                files: Vec::new(),
            });
            continue;
        }

        if entry.path_is_symlink() && entry.path().is_dir() {
            trace!("Not following directory link: {}", entry.path().display());
            continue;
        }

        // Files of a directory arrive before any of its subdirectories.
        if let Some(current) = listings.last_mut() {
            current
                .files
                .push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    listings
}

/// Lists every file under `root` that survives the exclude and extension filters.
pub fn enumerate_files(root: &Path, config: &FilterConfig) -> Vec<FileEntry> {
    debug!("Enumerating files under {}", root.display());
    let entries: Vec<FileEntry> = walk_directories(root, config)
        .into_iter()
        .flat_map(|listing| {
            let dir = listing.path;
            listing
                .files
                .into_iter()
                .filter(|name| config.matches_extension(name))
                .map(move |name| dir.join(name))
                .collect::<Vec<_>>()
        })
        .map(|path| FileEntry::new(root, path))
        .collect();
    debug!("Found {} files under {}", entries.len(), root.display());
    entries
}
