//! Session state and export surfaces for generated campaign results.

pub mod export;
pub mod session;

pub use export::{ClipboardSink, ExportError, SystemClipboard};
pub use session::Session;
