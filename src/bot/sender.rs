use crate::delivery::sender::{MediaSender, SendError};
use crate::extractor::MediaKind;
use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::InputFile;

/// Production `MediaSender`: one Telegram chat.
pub struct TelegramSender {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSender {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl MediaSender for TelegramSender {
    async fn notify(&self, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(SendError::api)?;
        Ok(())
    }

    async fn send_media(
        &self,
        kind: MediaKind,
        file: &Path,
        caption: &str,
    ) -> Result<(), SendError> {
        let input = InputFile::file(file.to_path_buf());
        match kind {
            MediaKind::Video => {
                self.bot
                    .send_video(self.chat_id, input)
                    .caption(caption)
                    .await
                    .map_err(SendError::api)?;
            }
            MediaKind::Audio => {
                self.bot
                    .send_audio(self.chat_id, input)
                    .caption(caption)
                    .await
                    .map_err(SendError::api)?;
            }
            MediaKind::Image => {
                self.bot
                    .send_photo(self.chat_id, input)
                    .caption(caption)
                    .await
                    .map_err(SendError::api)?;
            }
            MediaKind::Unknown => {
                return self.send_document(file, caption).await;
            }
        }
        Ok(())
    }

    async fn send_document(&self, file: &Path, caption: &str) -> Result<(), SendError> {
        self.bot
            .send_document(self.chat_id, InputFile::file(file.to_path_buf()))
            .caption(caption)
            .await
            .map_err(SendError::api)?;
        Ok(())
    }
}
