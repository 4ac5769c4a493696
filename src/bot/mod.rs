//! Telegram command surface and per-message handler flow.
//!
//! Handlers never let an error escape into the dispatcher: every failure is
//! logged and turned into a user-facing notice, and the process keeps running.

pub mod sender;

use crate::app_state::AppState;
use crate::bot::sender::TelegramSender;
use crate::delivery;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

const WELCOME: &str = "Hi! Send me a link from a supported platform and I'll \
fetch the media behind it. Try /platforms to see what I can handle.";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "welcome message and usage.")]
    Start,
    #[command(description = "show this help text.")]
    Help,
    #[command(description = "list the supported platforms.")]
    Platforms,
}

/// Any non-command text that looks like a pasted link.
pub fn is_candidate_url(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("http") || text.starts_with("www.")
}

/// The dispatch tree: commands first, then candidate URLs, everything else
/// falls through to the dispatcher's default handler.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| {
                msg.text().map(is_candidate_url).unwrap_or(false)
            })
            .endpoint(handle_url),
        )
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let reply = match cmd {
        Command::Start => WELCOME.to_owned(),
        Command::Help => Command::descriptions().to_string(),
        Command::Platforms => format!(
            "Supported platforms: {}",
            state.platforms.supported_platforms()
        ),
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn handle_url(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let url = text.trim().to_owned();

    if let Err(e) = process_link(&bot, msg.chat.id, &url, &state).await {
        error!(error = %e, url = %url, "link handling failed");
        let _ = bot
            .send_message(msg.chat.id, "Something went wrong handling that link.")
            .await;
    }
    Ok(())
}

async fn process_link(
    bot: &Bot,
    chat_id: ChatId,
    url: &str,
    state: &AppState,
) -> anyhow::Result<()> {
    let Some(platform) = state.platforms.identify(url) else {
        bot.send_message(
            chat_id,
            "That link doesn't look like a supported platform. Try /platforms.",
        )
        .await?;
        return Ok(());
    };

    info!(platform, url, "extracting media");
    let media = match state.extractor.fetch_media(url).await {
        Ok(media) => media,
        Err(e) => {
            warn!(error = %e, platform, "extraction failed");
            bot.send_message(
                chat_id,
                format!(
                    "Couldn't fetch media from {}. The link may be private or unsupported.",
                    platform
                ),
            )
            .await?;
            return Ok(());
        }
    };

    // The record is an audit trail, not a delivery precondition.
    if let Err(e) = state.records.insert(&media, url).await {
        warn!(error = %e, "failed to persist media record");
    }

    let sender = TelegramSender::new(bot.clone(), chat_id);
    if let Err(e) =
        delivery::deliver(&sender, &state.downloader, &media, &state.staging_dir).await
    {
        warn!(error = %e, "delivery failed");
    }
    Ok(())
}
