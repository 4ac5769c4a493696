//! Media-candidate selection policy.
//!
//! The preference order lives in one rule table instead of nested
//! conditionals, so the policy reads (and tests) as data: video quality tiers
//! first, then audio, then image, with per-kind extension defaults.

use crate::extractor::errors::ExtractError;
use crate::extractor::model::{ExtractionPayload, MediaCandidate, MediaInfo, MediaKind};
use crate::platforms::PlatformDirectory;
use url::Url;

const QUALITY_HD_NO_WATERMARK: &str = "hd_no_watermark";
const QUALITY_NO_WATERMARK: &str = "no_watermark";

const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Video preference tiers, evaluated in order; the first tier with a matching
/// candidate decides. Highest quality first (the two watermark-free tags are
/// ranked HD before plain).
const VIDEO_PREFERENCE: [fn(&MediaCandidate) -> bool; 3] = [
    |c| c.kind == MediaKind::Video && c.quality.as_deref() == Some(QUALITY_HD_NO_WATERMARK),
    |c| c.kind == MediaKind::Video && c.quality.as_deref() == Some(QUALITY_NO_WATERMARK),
    |c| c.kind == MediaKind::Video,
];

/// A candidate counts as an image either by its declared kind or by carrying a
/// still-image extension.
fn is_image(c: &MediaCandidate) -> bool {
    c.kind == MediaKind::Image || matches!(c.extension.as_deref(), Some("jpg") | Some("png"))
}

/// Derive the single best media descriptor from a validated payload.
///
/// `original_url` is the URL the user pasted; it feeds the platform fallback
/// when the payload does not declare its own source.
pub fn select_best(
    payload: &ExtractionPayload,
    original_url: &str,
    platforms: &PlatformDirectory,
) -> Result<MediaInfo, ExtractError> {
    match payload {
        ExtractionPayload::Candidates {
            medias,
            thumbnail,
            source,
        } => {
            let video = VIDEO_PREFERENCE
                .iter()
                .find_map(|matches_tier| medias.iter().find(|c| matches_tier(c)));

            // Audio and image are only consulted when no video tier matched.
            let (candidate, kind) = match video {
                Some(v) => (v, MediaKind::Video),
                None => medias
                    .iter()
                    .find(|c| c.kind == MediaKind::Audio)
                    .map(|c| (c, MediaKind::Audio))
                    .or_else(|| medias.iter().find(|c| is_image(c)).map(|c| (c, MediaKind::Image)))
                    .ok_or(ExtractError::NoMedia)?,
            };

            let extension = candidate
                .extension
                .clone()
                .unwrap_or_else(|| kind.default_extension().to_owned());

            Ok(MediaInfo {
                platform: resolve_platform(source.as_deref(), original_url, platforms),
                media_url: candidate.url.clone(),
                thumbnail: thumbnail.clone(),
                kind,
                extension,
            })
        }
        ExtractionPayload::Single { url, source } => {
            let suffix = trailing_extension(url);
            let (kind, extension) = match suffix.as_deref() {
                Some(ext) if AUDIO_EXTENSIONS.contains(&ext) => {
                    (MediaKind::Audio, ext.to_owned())
                }
                Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => {
                    (MediaKind::Image, ext.to_owned())
                }
                _ => (MediaKind::Video, MediaKind::Video.default_extension().to_owned()),
            };

            Ok(MediaInfo {
                platform: resolve_platform(source.as_deref(), original_url, platforms),
                media_url: url.clone(),
                thumbnail: None,
                kind,
                extension,
            })
        }
    }
}

/// Payload-declared source wins, then the platform matcher on the pasted URL,
/// then the literal `unknown`.
fn resolve_platform(
    declared: Option<&str>,
    original_url: &str,
    platforms: &PlatformDirectory,
) -> String {
    declared
        .map(str::to_owned)
        .or_else(|| platforms.identify(original_url).map(str::to_owned))
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Lowercased extension of the URL's path segment, query and fragment ignored.
fn trailing_extension(raw: &str) -> Option<String> {
    let path = match Url::parse(raw) {
        Ok(parsed) => parsed.path().to_owned(),
        Err(_) => raw
            .split(['?', '#'])
            .next()
            .unwrap_or(raw)
            .to_owned(),
    };
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
