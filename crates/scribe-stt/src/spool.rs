use std::path::Path;

use tempfile::NamedTempFile;

use crate::{
    error::{Result, SttError},
    types::Upload,
};

/// Transient on-disk copy of an upload
///
/// The provider call needs a complete resource it can read a length
/// from, so the upload is written out in full before the call. The
/// backing temp file is uniquely named per request and is removed when
/// the guard drops, which covers every exit path including provider
/// and internal failures.
#[derive(Debug)]
pub struct SpooledAudio {
    file: NamedTempFile,
    filename: String,
    content_type: String,
}

impl SpooledAudio {
    /// Write an upload into a uniquely named file under `dir`
    ///
    /// Falls back to the OS temp directory when no spool directory is
    /// configured.
    pub async fn write(upload: Upload, dir: Option<&Path>) -> Result<Self> {
        let dir = dir.map_or_else(std::env::temp_dir, Path::to_path_buf);
        let suffix = suffix_for(&upload.filename);

        // Temp file creation is synchronous filesystem I/O; keep it off
        // the async worker threads
        let file = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new().prefix("scribe-").suffix(&suffix).tempfile_in(&dir)
        })
        .await
        .map_err(|e| SttError::Spool(std::io::Error::other(e)))?
        .map_err(SttError::Spool)?;

        tokio::fs::write(file.path(), &upload.bytes)
            .await
            .map_err(SttError::Spool)?;

        tracing::trace!(path = %file.path().display(), bytes = upload.bytes.len(), "upload spooled");

        Ok(Self {
            file,
            filename: upload.filename,
            content_type: upload.content_type,
        })
    }

    /// Path of the spooled file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Client-declared filename of the original upload
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Client-declared content type of the original upload
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Read the complete spooled bytes back
    pub async fn read(&self) -> Result<Vec<u8>> {
        tokio::fs::read(self.file.path()).await.map_err(SttError::Spool)
    }
}

/// Temp file suffix preserving the upload's extension
fn suffix_for(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or_else(|| ".wav".to_string(), |ext| format!(".{ext}"))
}
