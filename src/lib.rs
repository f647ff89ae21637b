pub mod browser;
pub mod clipboard;
pub mod enumerate;
pub mod errors;
pub mod export;
pub mod filter;
pub mod logger;
pub mod shell;
pub mod state;
pub mod structure;
pub mod utils;

pub use browser::{Browser, Notice};
pub use clipboard::{ClipboardWriter, MemoryClipboard, StdoutClipboard, SystemClipboard};
pub use errors::BrowserError;
pub use filter::FilterConfig;
pub use state::BrowserState;
