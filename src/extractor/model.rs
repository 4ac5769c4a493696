use serde::Deserialize;
use std::fmt::{Display, Formatter};

use crate::extractor::errors::ExtractError;

/// Broad media category as tagged by the extraction API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    /// Fallback file extension when a candidate does not carry its own.
    pub fn default_extension(self) -> &'static str {
        match self {
            MediaKind::Video | MediaKind::Unknown => "mp4",
            MediaKind::Audio => "mp3",
            MediaKind::Image => "jpg",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One extractable asset variant from the API's media list. Ephemeral: it only
/// exists between parsing and selection.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaCandidate {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    pub quality: Option<String>,
    pub url: String,
    pub extension: Option<String>,
}

/// Wire shape of the extraction API response. Both known payload shapes come
/// through this one permissive struct; `ExtractionPayload::from_response`
/// decides which shape it actually is.
#[derive(Debug, Deserialize)]
pub struct RawResponse {
    pub url: Option<String>,
    pub source: Option<String>,
    pub thumbnail: Option<String>,
    pub medias: Option<Vec<MediaCandidate>>,
}

/// Validated response payload: either a candidate list or a bare URL.
///
/// Anything matching neither shape is rejected here, at the parse boundary,
/// so selection never pokes at fields that may be absent.
#[derive(Debug)]
pub enum ExtractionPayload {
    Candidates {
        medias: Vec<MediaCandidate>,
        thumbnail: Option<String>,
        source: Option<String>,
    },
    Single {
        url: String,
        source: Option<String>,
    },
}

impl ExtractionPayload {
    pub fn from_response(raw: RawResponse) -> Result<Self, ExtractError> {
        match raw {
            RawResponse {
                medias: Some(medias),
                thumbnail,
                source,
                ..
            } if !medias.is_empty() => Ok(Self::Candidates {
                medias,
                thumbnail,
                source,
            }),
            RawResponse {
                url: Some(url),
                source,
                ..
            } => Ok(Self::Single { url, source }),
            _ => Err(ExtractError::UnrecognizedPayload),
        }
    }
}

/// Final selection result handed to persistence and delivery. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    pub platform: String,
    pub media_url: String,
    pub thumbnail: Option<String>,
    pub kind: MediaKind,
    pub extension: String,
}
