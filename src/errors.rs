use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Select a project folder first.")]
    NoFolderSelected,

    #[error("Select a file first.")]
    NoFileSelected,

    #[error("File preview is empty.")]
    EmptyPreview,

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File is not in the current list: {0}")]
    FileNotListed(String),

    #[error("No file at position {0} in the current list")]
    IndexOutOfRange(usize),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Line editor error: {0}")]
    ReadlineError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),
}

impl BrowserError {
    /// Short heading shown above the message, as in a dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            BrowserError::NoFolderSelected | BrowserError::NotADirectory(_) => "No folder",
            BrowserError::NoFileSelected
            | BrowserError::FileNotListed(_)
            | BrowserError::IndexOutOfRange(_) => "No file",
            BrowserError::EmptyPreview => "Empty",
            BrowserError::ClipboardInitError(_) | BrowserError::ClipboardWriteError(_) => {
                "Clipboard Error"
            }
            BrowserError::IoError(_) => "File Error",
            BrowserError::ReadlineError(_) => "Input Error",
            BrowserError::SerializationError(_) => "Output Error",
        }
    }
}

impl From<std::io::Error> for BrowserError {
    fn from(err: std::io::Error) -> Self {
        BrowserError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for BrowserError {
    fn from(err: serde_json::Error) -> Self {
        BrowserError::SerializationError(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for BrowserError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        BrowserError::ReadlineError(err.to_string())
    }
}
