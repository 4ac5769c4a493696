//! Delivery pipeline: download the selected media, stage it on disk, send it
//! into the conversation with a type-appropriate method and a single
//! generic-document fallback.

pub mod download;
pub mod errors;
pub mod sender;
pub mod temp;

pub use download::MediaDownloader;
pub use errors::DeliveryError;
pub use sender::{MediaSender, SendError};
pub use temp::TempMedia;

use crate::extractor::MediaInfo;
use std::path::Path;
use tracing::{error, instrument, warn};

const SEND_FAILURE_NOTICE: &str =
    "Sorry, I couldn't send the media file into this chat.";
const DOWNLOAD_FAILURE_NOTICE: &str =
    "Sorry, the media file could not be downloaded.";

/// Run the full delivery sequence for one selected media descriptor.
///
/// Every user-visible failure is reported here; the returned error exists for
/// the caller's logging only. Send failures past the fallback are not errors:
/// the user has been told, and there is nothing further to do.
#[instrument(skip_all, fields(platform = %media.platform, kind = %media.kind))]
pub async fn deliver(
    sender: &dyn MediaSender,
    downloader: &MediaDownloader,
    media: &MediaInfo,
    staging_dir: &Path,
) -> Result<(), DeliveryError> {
    if let Err(e) = sender
        .notify(&format!("Downloading {} from {}...", media.kind, media.platform))
        .await
    {
        warn!(error = %e, "failed to send download notice");
    }

    let bytes = match downloader.fetch_bytes(&media.media_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, url = %media.media_url, "media download failed");
            if let Err(notice) = sender.notify(DOWNLOAD_FAILURE_NOTICE).await {
                warn!(error = %notice, "failed to send download-failure notice");
            }
            return Err(e);
        }
    };

    let staged = match TempMedia::write(staging_dir, media.kind, &media.extension, &bytes).await {
        Ok(staged) => staged,
        Err(e) => {
            error!(error = %e, "failed to stage media on disk");
            if let Err(notice) = sender.notify(SEND_FAILURE_NOTICE).await {
                warn!(error = %notice, "failed to send staging-failure notice");
            }
            return Err(e.into());
        }
    };

    let caption = media.platform.clone();
    if let Err(primary) = sender.send_media(media.kind, staged.path(), &caption).await {
        warn!(error = %primary, "kind-specific send failed, falling back to document");
        let fallback_caption = format!("{} (sent as file)", media.platform);
        if let Err(fallback) = sender
            .send_document(staged.path(), &fallback_caption)
            .await
        {
            error!(error = %fallback, "document fallback failed");
            if let Err(notice) = sender.notify(SEND_FAILURE_NOTICE).await {
                warn!(error = %notice, "failed to send send-failure notice");
            }
        }
    }

    // `staged` drops here; the file is removed on every path above as well.
    Ok(())
}
