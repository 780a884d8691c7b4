//! Media variant: image/video embeds and playable-source resolution.
//!
//! # Invariants
//! - Source resolution never fails; unresolvable input degrades to a
//!   fallback variant instead of an error.
//! - Image load failure is handled by the renderer, which swaps in
//!   [`IMAGE_FALLBACK_ASSET`].

use crate::model::payload::{ContentPayload, MediaKind, MediaPayload};
use once_cell::sync::OnceCell;
use regex::Regex;

/// Static placeholder shown when an image url fails to load.
pub const IMAGE_FALLBACK_ASSET: &str = "/mindcanvas-icon.svg";

/// Recognized video-host watch-link markers followed by the embed id.
const WATCH_LINK_PATTERN: &str = r"(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)";

/// Hosted video ids are always exactly this long.
const EMBED_ID_LEN: usize = 11;

/// Uncommitted edit state for a media node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
}

impl MediaDraft {
    /// Copies the committed payload into local form state.
    pub fn edit(payload: &MediaPayload) -> Self {
        Self {
            title: payload.title.clone(),
            kind: payload.kind,
            url: payload.url.clone(),
        }
    }

    /// Emits the committed payload.
    pub fn save(self) -> ContentPayload {
        ContentPayload::Media(MediaPayload {
            title: self.title,
            kind: self.kind,
            url: self.url,
        })
    }
}

/// Playable source resolved from a media payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// No url entered yet.
    Missing,
    /// Direct image source.
    Image { url: String },
    /// Recognized video-host watch link; embed by id.
    VideoEmbed { video_id: String },
    /// Unrecognized video url; treat as a direct playable file.
    VideoFile { url: String },
}

/// Resolves the playable source for a media payload.
pub fn resolve_source(payload: &MediaPayload) -> MediaSource {
    if payload.url.is_empty() {
        return MediaSource::Missing;
    }

    match payload.kind {
        MediaKind::Image => MediaSource::Image {
            url: payload.url.clone(),
        },
        MediaKind::Video => match extract_embed_id(&payload.url) {
            Some(video_id) => MediaSource::VideoEmbed { video_id },
            None => MediaSource::VideoFile {
                url: payload.url.clone(),
            },
        },
    }
}

/// Extracts the embed id from a recognized watch link.
///
/// Matches the host's short-link, `/embed/`, and `watch?v=` url shapes
/// and requires the fixed id length; anything else falls back to
/// direct-file playback.
pub fn extract_embed_id(url: &str) -> Option<String> {
    let captures = watch_link_pattern().captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.len() == EMBED_ID_LEN).then(|| id.to_string())
}

fn watch_link_pattern() -> &'static Regex {
    static PATTERN: OnceCell<Regex> = OnceCell::new();
    PATTERN.get_or_init(|| {
        Regex::new(WATCH_LINK_PATTERN).expect("watch-link pattern is a valid regex")
    })
}
