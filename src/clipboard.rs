use crate::errors::BrowserError;
use arboard::Clipboard;
use std::io::{self, Write};
use tracing::{debug, trace};

pub trait ClipboardWriter {
    /// Replaces the whole clipboard buffer with `text`.
    fn set_text(&mut self, text: String) -> Result<(), BrowserError>;
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Box<T> {
    fn set_text(&mut self, text: String) -> Result<(), BrowserError> {
        (**self).set_text(text)
    }
}

pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, BrowserError> {
        debug!("Initializing clipboard");
        let clipboard =
            Clipboard::new().map_err(|e| BrowserError::ClipboardInitError(e.to_string()))?;
        Ok(SystemClipboard { clipboard })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), BrowserError> {
        trace!("Writing {} bytes to the clipboard", text.len());
        self.clipboard
            .set_text(text)
            .map_err(|e| BrowserError::ClipboardWriteError(e.to_string()))
    }
}

/// Keeps every write in memory instead of touching the system clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        MemoryClipboard::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), BrowserError> {
        trace!("Recording {} bytes in memory clipboard", text.len());
        self.writes.push(text);
        Ok(())
    }
}

/// Prints what would be copied, for headless use.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl ClipboardWriter for StdoutClipboard {
    fn set_text(&mut self, text: String) -> Result<(), BrowserError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}
