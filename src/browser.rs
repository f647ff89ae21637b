use crate::clipboard::ClipboardWriter;
use crate::errors::BrowserError;
use crate::state::BrowserState;
use std::fmt;
use tracing::{error, info, warn};

/// Message shown to the user after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Ties the browser state to a clipboard. Each copy action either writes the
/// clipboard once or fails without writing anything.
pub struct Browser<C: ClipboardWriter> {
    state: BrowserState,
    clipboard: C,
}

impl<C: ClipboardWriter> Browser<C> {
    pub fn new(state: BrowserState, clipboard: C) -> Self {
        Browser { state, clipboard }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowserState {
        &mut self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn copy_file_contents(&mut self) -> Result<Notice, BrowserError> {
        let text = self.state.export_content().map_err(log_refusal)?;
        self.write(text)?;
        info!("Copied file contents to clipboard");
        Ok(Notice {
            title: "Copied",
            message: "File content with header copied.",
        })
    }

    pub fn copy_structure(&mut self) -> Result<Notice, BrowserError> {
        let text = self.state.export_structure().map_err(log_refusal)?;
        self.write(text)?;
        info!("Copied folder structure to clipboard");
        Ok(Notice {
            title: "Copied",
            message: "Folder structure copied to clipboard.",
        })
    }

    /// Copies the absolute path of the `index`-th visible file.
    pub fn copy_path(&mut self, index: usize) -> Result<Notice, BrowserError> {
        let path = self.state.path_at(index).map_err(log_refusal)?;
        self.write(path)?;
        info!("Copied file path to clipboard");
        Ok(Notice {
            title: "Copied",
            message: "File path copied to clipboard.",
        })
    }

    pub fn copy_selected_path(&mut self) -> Result<Notice, BrowserError> {
        let path = self
            .state
            .selected()
            .map(|entry| entry.display_path())
            .ok_or(BrowserError::NoFileSelected)
            .map_err(log_refusal)?;
        self.write(path)?;
        info!("Copied file path to clipboard");
        Ok(Notice {
            title: "Copied",
            message: "File path copied to clipboard.",
        })
    }

    fn write(&mut self, text: String) -> Result<(), BrowserError> {
        self.clipboard.set_text(text).map_err(|e| {
            error!("Clipboard write failed: {}", e);
            e
        })
    }
}

fn log_refusal(err: BrowserError) -> BrowserError {
    warn!("{}: {}", err.title(), err);
    err
}
