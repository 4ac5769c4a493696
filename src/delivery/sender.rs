//! The conversation-handle seam.
//!
//! The pipeline only ever talks to a `MediaSender`, so the Telegram transport
//! stays swappable and the fallback behavior is testable with a fake.

use crate::extractor::MediaKind;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("send failed: {0}")]
pub struct SendError(pub String);

impl SendError {
    pub fn api(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// Where replies go. One instance per conversation.
#[async_trait]
pub trait MediaSender: Send + Sync {
    /// Short status text into the conversation.
    async fn notify(&self, text: &str) -> Result<(), SendError>;

    /// Kind-appropriate delivery (video/audio/photo; unknown goes as a file).
    async fn send_media(&self, kind: MediaKind, file: &Path, caption: &str)
    -> Result<(), SendError>;

    /// Generic document delivery, also the fallback path.
    async fn send_document(&self, file: &Path, caption: &str) -> Result<(), SendError>;
}
