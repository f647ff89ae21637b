use crate::enumerate::{enumerate_files, FileEntry};
use crate::errors::BrowserError;
use crate::export::{format_content_export, read_preview};
use crate::filter::{filter_by_name, parse_list, FilterConfig};
use crate::structure::format_structure;
use crate::utils::base_name;
use std::path::{self, Path, PathBuf};
use tracing::{debug, info};

/// Everything the browser knows between two user actions.
#[derive(Debug, Default)]
pub struct BrowserState {
    root: Option<PathBuf>,
    filters: FilterConfig,
    files: Vec<FileEntry>,
    query: String,
    selected: Option<FileEntry>,
    preview: String,
}

impl BrowserState {
    pub fn new(filters: FilterConfig) -> Self {
        BrowserState {
            filters,
            ..Default::default()
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&FileEntry> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn title(&self) -> String {
        match &self.root {
            Some(root) => format!("Branch Copier: {}", base_name(root)),
            None => "Branch Copier".to_owned(),
        }
    }

    /// Makes `folder` the new root and lists its files from scratch.
    pub fn open<P: AsRef<Path>>(&mut self, folder: P) -> Result<(), BrowserError> {
        let folder = folder.as_ref();
        if !folder.is_dir() {
            return Err(BrowserError::NotADirectory(folder.display().to_string()));
        }
        let root = path::absolute(folder)?;
        info!("Opened project folder {}", root.display());

        self.root = Some(root);
        self.selected = None;
        self.preview.clear();
        self.reload();
        Ok(())
    }

    pub fn set_extensions(&mut self, text: &str) {
        self.filters.include_extensions = parse_list(text);
        debug!("Include extensions: {:?}", self.filters.include_extensions);
        self.reload();
    }

    pub fn set_exclusions(&mut self, text: &str) {
        self.filters.exclude_substrings = parse_list(text);
        debug!("Exclude substrings: {:?}", self.filters.exclude_substrings);
        self.reload();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    /// Re-walks the root with the current filters. Drops the selection but
    /// leaves the preview text in place.
    pub fn reload(&mut self) {
        self.selected = None;
        self.files = match &self.root {
            Some(root) => enumerate_files(root, &self.filters),
            None => Vec::new(),
        };
    }

    pub fn visible_files(&self) -> Vec<&FileEntry> {
        filter_by_name(&self.files, &self.query)
    }

    /// Selects the `index`-th visible file and loads its preview.
    pub fn select_index(&mut self, index: usize) -> Result<&FileEntry, BrowserError> {
        let entry = self
            .visible_files()
            .get(index)
            .map(|entry| (*entry).clone())
            .ok_or(BrowserError::IndexOutOfRange(index))?;
        Ok(self.select_entry(entry))
    }

    /// Selects a listed file by absolute path or by path relative to the root.
    pub fn select_path<P: AsRef<Path>>(&mut self, path: P) -> Result<&FileEntry, BrowserError> {
        let path = path.as_ref();
        let root = self.root.as_deref().ok_or(BrowserError::NoFolderSelected)?;
        // Links are kept as named so a listed symlink selects itself.
        let wanted = if path.is_absolute() {
            path::absolute(path)?
        } else {
            root.join(path)
        };

        let entry = self
            .files
            .iter()
            .find(|entry| entry.path == wanted)
            .cloned()
            .ok_or_else(|| BrowserError::FileNotListed(path.display().to_string()))?;
        Ok(self.select_entry(entry))
    }

    fn select_entry(&mut self, entry: FileEntry) -> &FileEntry {
        debug!("Selected {}", entry.path.display());
        self.preview = read_preview(&entry.path);
        self.selected.insert(entry)
    }

    pub fn export_content(&self) -> Result<String, BrowserError> {
        let selected = self.selected.as_ref().ok_or(BrowserError::NoFileSelected)?;
        let root = self.root.as_deref().ok_or(BrowserError::NoFolderSelected)?;
        format_content_export(root, &selected.path, &self.preview)
    }

    pub fn export_structure(&self) -> Result<String, BrowserError> {
        let root = self.root.as_deref().ok_or(BrowserError::NoFolderSelected)?;
        Ok(format_structure(root, &self.filters))
    }

    pub fn path_at(&self, index: usize) -> Result<String, BrowserError> {
        self.visible_files()
            .get(index)
            .map(|entry| entry.display_path())
            .ok_or(BrowserError::IndexOutOfRange(index))
    }
}
