use crate::extractor::errors::ExtractError;
use crate::extractor::model::{ExtractionPayload, MediaCandidate, MediaKind, RawResponse};
use crate::extractor::select::select_best;
use crate::platforms::PlatformDirectory;

fn platforms() -> PlatformDirectory {
    PlatformDirectory::from_json(
        r#"[
            {"name": "tiktok", "patterns": ["tiktok.com"]},
            {"name": "instagram", "patterns": ["instagram.com"]}
        ]"#,
    )
    .unwrap()
}

fn candidate(kind: MediaKind, quality: Option<&str>, url: &str, extension: Option<&str>) -> MediaCandidate {
    MediaCandidate {
        kind,
        quality: quality.map(str::to_owned),
        url: url.to_owned(),
        extension: extension.map(str::to_owned),
    }
}

fn candidates_payload(medias: Vec<MediaCandidate>) -> ExtractionPayload {
    ExtractionPayload::Candidates {
        medias,
        thumbnail: Some("https://cdn.example.com/thumb.jpg".to_owned()),
        source: None,
    }
}

#[test]
fn hd_no_watermark_beats_no_watermark() {
    // Order in the list must not matter, only the preference tiers.
    let payload = candidates_payload(vec![
        candidate(MediaKind::Video, Some("no_watermark"), "https://v/plain", None),
        candidate(MediaKind::Video, Some("hd_no_watermark"), "https://v/hd", None),
    ]);
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.media_url, "https://v/hd");
    assert_eq!(info.kind, MediaKind::Video);
    assert_eq!(info.extension, "mp4");
}

#[test]
fn plain_no_watermark_wins_when_no_hd() {
    let payload = candidates_payload(vec![
        candidate(MediaKind::Video, Some("watermark"), "https://v/marked", None),
        candidate(MediaKind::Video, Some("no_watermark"), "https://v/plain", None),
    ]);
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.media_url, "https://v/plain");
}

#[test]
fn any_video_beats_audio_and_image() {
    let payload = candidates_payload(vec![
        candidate(MediaKind::Audio, None, "https://a/track", Some("mp3")),
        candidate(MediaKind::Image, None, "https://i/pic", Some("jpg")),
        candidate(MediaKind::Video, Some("watermark"), "https://v/marked", None),
    ]);
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.media_url, "https://v/marked");
    assert_eq!(info.kind, MediaKind::Video);
}

#[test]
fn audio_selected_when_no_video_with_default_extension() {
    let payload = candidates_payload(vec![candidate(
        MediaKind::Audio,
        None,
        "https://a/track",
        None,
    )]);
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Audio);
    assert_eq!(info.extension, "mp3");
    assert_eq!(info.platform, "tiktok");
    assert_eq!(
        info.thumbnail.as_deref(),
        Some("https://cdn.example.com/thumb.jpg")
    );
}

#[test]
fn image_selected_by_extension_when_kind_unknown() {
    let payload = candidates_payload(vec![
        candidate(MediaKind::Unknown, None, "https://i/one", Some("png")),
    ]);
    let info = select_best(&payload, "https://www.instagram.com/p/abc", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Image);
    assert_eq!(info.extension, "png");
}

#[test]
fn audio_preferred_over_image() {
    let payload = candidates_payload(vec![
        candidate(MediaKind::Image, None, "https://i/pic", Some("jpg")),
        candidate(MediaKind::Audio, None, "https://a/track", Some("mp3")),
    ]);
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Audio);
    assert_eq!(info.media_url, "https://a/track");
}

#[test]
fn no_usable_candidate_is_no_media() {
    let payload = candidates_payload(vec![candidate(
        MediaKind::Unknown,
        None,
        "https://x/blob",
        Some("bin"),
    )]);
    let result = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms());
    assert!(matches!(result, Err(ExtractError::NoMedia)));
}

#[test]
fn single_url_png_is_image() {
    let payload = ExtractionPayload::Single {
        url: "https://cdn.example.com/shot.png".to_owned(),
        source: None,
    };
    let info = select_best(&payload, "https://www.instagram.com/p/abc", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Image);
    assert_eq!(info.extension, "png");
    assert_eq!(info.platform, "instagram");
}

#[test]
fn single_url_audio_keeps_own_extension() {
    let payload = ExtractionPayload::Single {
        url: "https://cdn.example.com/track.wav".to_owned(),
        source: None,
    };
    let info = select_best(&payload, "https://soundsite.example/track", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Audio);
    assert_eq!(info.extension, "wav");
}

#[test]
fn single_url_defaults_to_video_mp4() {
    let payload = ExtractionPayload::Single {
        url: "https://cdn.example.com/clip/812312".to_owned(),
        source: None,
    };
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.kind, MediaKind::Video);
    assert_eq!(info.extension, "mp4");
}

#[test]
fn declared_source_wins_over_matcher() {
    let payload = ExtractionPayload::Single {
        url: "https://cdn.example.com/clip.mp4".to_owned(),
        source: Some("douyin".to_owned()),
    };
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.platform, "douyin");
}

#[test]
fn unmatched_platform_falls_back_to_unknown() {
    let payload = candidates_payload(vec![candidate(MediaKind::Video, None, "https://v/1", None)]);
    let info = select_best(&payload, "https://obscure.example.net/v/1", &platforms()).unwrap();
    assert_eq!(info.platform, "unknown");
}

#[test]
fn shapeless_response_is_rejected_at_parse_boundary() {
    let raw = RawResponse {
        url: None,
        source: Some("tiktok".to_owned()),
        thumbnail: None,
        medias: None,
    };
    assert!(matches!(
        ExtractionPayload::from_response(raw),
        Err(ExtractError::UnrecognizedPayload)
    ));
}

#[test]
fn empty_media_list_with_url_degrades_to_single_shape() {
    let raw = RawResponse {
        url: Some("https://cdn.example.com/clip.mp4".to_owned()),
        source: None,
        thumbnail: None,
        medias: Some(vec![]),
    };
    assert!(matches!(
        ExtractionPayload::from_response(raw),
        Ok(ExtractionPayload::Single { .. })
    ));
}

#[test]
fn wire_shape_parses_unfamiliar_kind_as_unknown() {
    let raw: RawResponse = serde_json::from_str(
        r#"{
            "source": "tiktok",
            "thumbnail": "https://cdn.example.com/t.jpg",
            "medias": [
                {"type": "subtitle", "url": "https://x/sub", "extension": "srt"},
                {"type": "video", "quality": "hd_no_watermark", "url": "https://v/hd"}
            ]
        }"#,
    )
    .unwrap();
    let payload = ExtractionPayload::from_response(raw).unwrap();
    let info = select_best(&payload, "https://www.tiktok.com/@u/video/1", &platforms()).unwrap();
    assert_eq!(info.media_url, "https://v/hd");
    assert_eq!(info.platform, "tiktok");
}
