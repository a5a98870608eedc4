//! Clipboard and file export of the current session result.
//!
//! Both surfaces serialize the same canonical pretty-printed JSON. Export
//! never touches the session slot: a failed or rejected export leaves the
//! stored result exactly as it was.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::info;

use crate::session::Session;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Export requested with no stored result.
    #[error("No results to download")]
    NoResults,

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for clipboard writes. The system implementation is
/// [`SystemClipboard`]; tests substitute an in-memory sink.
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ExportError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    pub fn new() -> Result<Self, ExportError> {
        arboard::Clipboard::new()
            .map(Self)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ExportError> {
        self.0
            .set_text(text)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

impl Session {
    /// Copy the current result to a clipboard as pretty-printed JSON.
    pub fn copy_to_clipboard(&self, sink: &mut dyn ClipboardSink) -> Result<(), ExportError> {
        let result = self.current().ok_or(ExportError::NoResults)?;
        sink.set_text(result.to_pretty_json()?)?;
        info!("campaign result copied to clipboard");
        Ok(())
    }

    /// Write the current result to `campaign_results_<epoch-millis>.json`
    /// under `output_dir`, returning the path of the written file.
    pub fn export_to_file(&self, output_dir: &Path) -> Result<PathBuf, ExportError> {
        let result = self.current().ok_or(ExportError::NoResults)?;
        let path = output_dir.join(export_file_name(epoch_millis()));
        std::fs::write(&path, result.to_pretty_json()?)?;
        info!(path = %path.display(), "campaign result exported");
        Ok(path)
    }
}

/// File name for a result export at the given timestamp.
pub fn export_file_name(epoch_millis: u128) -> String {
    format!("campaign_results_{epoch_millis}.json")
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
