use branch_copier::browser::Browser;
use branch_copier::clipboard::{ClipboardWriter, MemoryClipboard};
use branch_copier::errors::BrowserError;
use branch_copier::filter::{filter_by_name, FilterConfig};
use branch_copier::state::BrowserState;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn browser_at(root: &Path, filters: FilterConfig) -> Browser<MemoryClipboard> {
    let mut state = BrowserState::new(filters);
    state.open(root).unwrap();
    Browser::new(state, MemoryClipboard::new())
}

struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn set_text(&mut self, _text: String) -> Result<(), BrowserError> {
        Err(BrowserError::ClipboardWriteError("no display".to_string()))
    }
}

#[test]
fn test_copy_file_contents_adds_relative_heading() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("a");
    write_file(&root, "b.txt", b"hello");

    let mut browser = browser_at(&root, FilterConfig::default());
    browser.state_mut().select_path("b.txt").unwrap();
    let notice = browser.copy_file_contents().unwrap();

    assert_eq!(notice.message, "File content with header copied.");
    assert_eq!(browser.clipboard().contents(), Some("# b.txt\n\nhello"));
}

#[test]
fn test_heading_uses_nested_relative_path() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/lib.rs", b"pub fn f() {}\n");

    let mut browser = browser_at(dir.path(), FilterConfig::default());
    browser.state_mut().select_index(0).unwrap();
    browser.copy_file_contents().unwrap();

    assert_eq!(
        browser.clipboard().contents(),
        Some("# src/lib.rs\n\npub fn f() {}\n")
    );
}

#[test]
fn test_copy_without_selection_leaves_clipboard_untouched() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "b.txt", b"hello");

    let mut browser = browser_at(dir.path(), FilterConfig::default());
    let err = browser.copy_file_contents().unwrap_err();

    assert!(matches!(err, BrowserError::NoFileSelected));
    assert_eq!(err.title(), "No file");
    assert!(browser.clipboard().writes().is_empty());
}

#[test]
fn test_copy_structure_without_folder_is_refused() {
    let mut browser = Browser::new(BrowserState::default(), MemoryClipboard::new());

    let err = browser.copy_structure().unwrap_err();
    assert!(matches!(err, BrowserError::NoFolderSelected));
    assert_eq!(err.to_string(), "Select a project folder first.");
    assert!(browser.clipboard().writes().is_empty());
}

#[test]
fn test_whitespace_only_preview_is_refused() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "blank.txt", b"  \n\t\n");

    let mut browser = browser_at(dir.path(), FilterConfig::default());
    browser.state_mut().select_path("blank.txt").unwrap();
    let err = browser.copy_file_contents().unwrap_err();

    assert!(matches!(err, BrowserError::EmptyPreview));
    assert!(browser.clipboard().writes().is_empty());
}

#[test]
fn test_undecodable_file_shows_failure_marker() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "image.bin", &[0xff, 0xfe, 0x00, 0x81]);

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(dir.path()).unwrap();
    state.select_path("image.bin").unwrap();

    assert!(
        state.preview().starts_with("[Failed to read file:"),
        "Unexpected preview: {}",
        state.preview()
    );
}

#[test]
fn test_copy_structure_writes_listing() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    write_file(&root, "sub/x.txt", b"x");

    let mut browser = browser_at(&root, FilterConfig::default());
    let notice = browser.copy_structure().unwrap();

    assert_eq!(notice.message, "Folder structure copied to clipboard.");
    assert_eq!(browser.clipboard().contents(), Some("proj/\nsub/\n  x.txt"));
}

#[test]
fn test_copy_path_uses_visible_position() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "Alpha.rs", b"a");
    write_file(dir.path(), "beta.rs", b"b");

    let mut browser = browser_at(dir.path(), FilterConfig::default());
    browser.state_mut().set_query("beta");
    browser.copy_path(0).unwrap();

    let copied = browser.clipboard().contents().unwrap();
    assert!(Path::new(copied).is_absolute());
    assert!(copied.ends_with("beta.rs"), "Copied {}", copied);

    let err = browser.copy_path(1).unwrap_err();
    assert!(matches!(err, BrowserError::IndexOutOfRange(1)));
    assert_eq!(browser.clipboard().writes().len(), 1);
}

#[test]
fn test_copy_selected_path() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/main.rs", b"fn main() {}");

    let mut browser = browser_at(dir.path(), FilterConfig::default());
    assert!(browser.copy_selected_path().is_err());

    browser.state_mut().select_path("src/main.rs").unwrap();
    browser.copy_selected_path().unwrap();
    let expected = browser.state().files()[0].display_path();
    assert_eq!(browser.clipboard().contents(), Some(expected.as_str()));
}

#[test]
fn test_clipboard_failure_is_reported() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "b.txt", b"hello");

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(dir.path()).unwrap();
    let mut browser = Browser::new(state, FailingClipboard);

    let err = browser.copy_structure().unwrap_err();
    assert_eq!(err.title(), "Clipboard Error");
    assert!(err.to_string().contains("no display"));
}

#[test]
fn test_name_filter_is_case_insensitive_and_idempotent() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "Alpha.rs", b"a");
    write_file(dir.path(), "beta.rs", b"b");
    write_file(dir.path(), "docs/ALPHABET.md", b"c");

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(dir.path()).unwrap();
    state.set_query("alpha");

    let once: Vec<_> = state.visible_files().into_iter().cloned().collect();
    assert_eq!(once.len(), 2);
    let twice: Vec<_> = filter_by_name(&once, "alpha").into_iter().cloned().collect();
    assert_eq!(once, twice);

    state.set_query("");
    assert_eq!(state.visible_files().len(), 3);
}

#[test]
fn test_changing_filters_reloads_and_drops_selection() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "main.rs", b"fn main() {}");
    write_file(dir.path(), "notes.md", b"notes");

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(dir.path()).unwrap();
    assert_eq!(state.files().len(), 2);
    state.select_path("main.rs").unwrap();

    state.set_extensions(".rs");
    assert_eq!(state.files().len(), 1);
    assert!(state.selected().is_none());
    assert!(matches!(
        state.export_content(),
        Err(BrowserError::NoFileSelected)
    ));

    state.set_exclusions("");
    assert_eq!(state.filters().exclude_substrings.len(), 0);
}

#[test]
fn test_opening_a_file_is_refused() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "b.txt", b"hello");

    let mut state = BrowserState::new(FilterConfig::default());
    let err = state.open(dir.path().join("b.txt")).unwrap_err();
    assert!(matches!(err, BrowserError::NotADirectory(_)));
    assert!(state.root().is_none());
}

#[test]
fn test_selecting_unlisted_file_is_refused() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "main.rs", b"fn main() {}");
    write_file(dir.path(), "notes.md", b"notes");

    let mut state = BrowserState::new(FilterConfig::new(".rs", ""));
    state.open(dir.path()).unwrap();
    let err = state.select_path("notes.md").unwrap_err();
    assert!(matches!(err, BrowserError::FileNotListed(_)));
}

#[test]
fn test_reopening_clears_preview() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "one/a.txt", b"first");
    write_file(dir.path(), "two/b.txt", b"second");

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(dir.path().join("one")).unwrap();
    state.select_index(0).unwrap();
    assert_eq!(state.preview(), "first");

    state.open(dir.path().join("two")).unwrap();
    assert_eq!(state.preview(), "");
    assert!(state.selected().is_none());
    assert_eq!(state.title(), "Branch Copier: two");
}

#[cfg(unix)]
#[test]
fn test_absolute_path_selects_symlink_not_its_target() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    let outside = dir.path().join("outside");
    write_file(&root, "real.txt", b"real");
    write_file(&outside, "far.txt", b"far");
    symlink(root.join("real.txt"), root.join("link.txt")).unwrap();
    symlink(outside.join("far.txt"), root.join("far_link.txt")).unwrap();

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(&root).unwrap();
    assert_eq!(state.files().len(), 3);

    let selected = state.select_path(root.join("link.txt")).unwrap();
    assert_eq!(selected.path, root.join("link.txt"));
    assert_eq!(state.preview(), "real");

    let selected = state.select_path(root.join("far_link.txt")).unwrap();
    assert_eq!(selected.relative_path, Path::new("far_link.txt"));
    assert_eq!(state.preview(), "far");
}

#[cfg(unix)]
#[test]
fn test_symlinked_root_keeps_chosen_path() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let real = dir.path().join("real_project");
    write_file(&real, "main.rs", b"fn main() {}");
    let chosen = dir.path().join("chosen_link");
    symlink(&real, &chosen).unwrap();

    let mut state = BrowserState::new(FilterConfig::default());
    state.open(&chosen).unwrap();

    assert_eq!(state.root(), Some(chosen.as_path()));
    assert_eq!(state.title(), "Branch Copier: chosen_link");
    assert_eq!(state.files().len(), 1);
    assert_eq!(state.files()[0].path, chosen.join("main.rs"));

    state.set_exclusions("chosen_link");
    assert!(state.files().is_empty());
}
