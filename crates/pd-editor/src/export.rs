//! Export delivery.
//!
//! An export is one [`ExportArtifact`]; the file and clipboard paths both
//! consume the same artifact, so they can never carry different bytes.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while handing an export to the outside world.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the file failed.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    /// The platform clipboard rejected the content.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// A serialized page ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename.
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// The document as text. Serializer output is always UTF-8.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// A "save as file" capability.
pub trait FileDelivery {
    /// Deliver the artifact; returns where it went, if that is knowable.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<Option<PathBuf>, ExportError>;
}

/// A platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// Writes artifacts into a directory under their suggested filename.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<Option<PathBuf>, ExportError> {
        fs::create_dir_all(&self.dir)?;
        // Only the final component of the suggested name is honoured.
        let name = Path::new(&artifact.filename)
            .file_name()
            .map_or_else(|| OsString::from(pd_core::EXPORT_FILENAME), OsStr::to_os_string);
        let path = self.dir.join(name);
        fs::write(&path, &artifact.bytes)?;
        log::info!("wrote {} bytes to {}", artifact.bytes.len(), path.display());
        Ok(Some(path))
    }
}

/// In-memory clipboard, for hosts without one and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn artifact(filename: &str) -> ExportArtifact {
        ExportArtifact {
            filename: filename.into(),
            mime: pd_core::EXPORT_MIME,
            bytes: b"<!doctype html>".to_vec(),
        }
    }

    #[test]
    fn directory_delivery_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut delivery = DirectoryDelivery::new(dir.path().join("out"));
        let path = delivery.deliver(&artifact("page.html")).unwrap().unwrap();
        assert_eq!(path, dir.path().join("out").join("page.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<!doctype html>");
    }

    #[test]
    fn directory_delivery_strips_parent_components() {
        let dir = tempfile::tempdir().unwrap();
        let mut delivery = DirectoryDelivery::new(dir.path());
        let path = delivery.deliver(&artifact("../../evil.html")).unwrap().unwrap();
        assert_eq!(path, dir.path().join("evil.html"));
    }

    #[test]
    fn directory_delivery_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "file, not a directory").unwrap();
        let mut delivery = DirectoryDelivery::new(&blocker);
        let err = delivery.deliver(&artifact("page.html")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
