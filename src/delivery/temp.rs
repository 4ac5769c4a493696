use crate::extractor::MediaKind;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A downloaded media file staged on disk for the duration of a send.
///
/// Removal is tied to scope exit: whichever way the pipeline leaves, the file
/// goes with it. A failed removal is logged and swallowed, never raised.
#[derive(Debug)]
pub struct TempMedia {
    path: PathBuf,
}

impl TempMedia {
    /// Write `bytes` under `dir` as `{kind}-{millis}.{extension}`.
    pub async fn write(
        dir: &Path,
        kind: MediaKind,
        extension: &str,
        bytes: &[u8],
    ) -> io::Result<Self> {
        let name = format!("{}-{}.{}", kind, Utc::now().timestamp_millis(), extension);
        let path = dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempMedia {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove staged media file");
        }
    }
}
