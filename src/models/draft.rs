// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Draft and media attachment domain model (UI-agnostic).

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Maximum number of characters accepted in a draft body.
pub const BODY_CHAR_LIMIT: usize = 2200;

/// Default upper bound for a single media file (100 MiB).
pub const DEFAULT_MAX_MEDIA_BYTES: u64 = 100 * 1024 * 1024;

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];

/// Kind of media attached to a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by MIME type: anything under `video/` is a video, everything else an image.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().to_ascii_lowercase().starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Reasons a picked file cannot become a draft attachment.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),
    #[error("{name} is larger than the {limit_mb} MB limit")]
    TooLarge { name: String, limit_mb: u64 },
}

/// Media file owned by a draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    /// Opaque handle identifying this attachment for its lifetime in the draft.
    pub id: Uuid,
    pub path: PathBuf,
    pub kind: MediaKind,
    pub mime: String,
    pub size: u64,
}

impl MediaRef {
    pub fn new(path: PathBuf, mime: String, size: u64) -> Self {
        let kind = MediaKind::from_mime(&mime);
        Self {
            id: Uuid::new_v4(),
            path,
            kind,
            mime,
            size,
        }
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Return true when the extension is one of the accepted image or video formats.
pub fn is_supported_media(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Extensions offered by the file picker, images first.
pub fn accepted_extensions() -> Vec<&'static str> {
    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .copied()
        .collect()
}

/// Validate a picked file against format and size limits and build its `MediaRef`.
pub fn media_from_meta(
    path: PathBuf,
    mime: String,
    size: u64,
    max_bytes: u64,
) -> Result<MediaRef, MediaError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if !is_supported_media(&path) {
        return Err(MediaError::Unsupported(name));
    }
    if size > max_bytes {
        return Err(MediaError::TooLarge {
            name,
            limit_mb: max_bytes / (1024 * 1024),
        });
    }
    Ok(MediaRef::new(path, mime, size))
}

/// In-progress, unpublished content payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    title: Option<String>,
    body: String,
    attachments: Vec<MediaRef>,
}

impl Draft {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn attachments(&self) -> &[MediaRef] {
        &self.attachments
    }

    /// Store the title; blank input clears it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            None
        } else {
            Some(title)
        };
    }

    /// Store the body, truncated to [`BODY_CHAR_LIMIT`] characters.
    pub fn set_body(&mut self, body: impl Into<String>) {
        let mut body = body.into();
        if let Some((cut, _)) = body.char_indices().nth(BODY_CHAR_LIMIT) {
            body.truncate(cut);
        }
        self.body = body;
    }

    /// Number of characters in the body.
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }

    pub fn push_attachment(&mut self, media: MediaRef) {
        self.attachments.push(media);
    }

    /// Remove the attachment at `index`, keeping the others in order.
    pub fn remove_attachment(&mut self, index: usize) -> Option<MediaRef> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// True when there is neither non-blank text nor any attachment.
    pub fn has_no_content(&self) -> bool {
        self.body.trim().is_empty() && self.attachments.is_empty()
    }

    /// Reset to an empty draft, handing back the released attachments.
    pub fn clear(&mut self) -> Vec<MediaRef> {
        self.title = None;
        self.body.clear();
        std::mem::take(&mut self.attachments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(name: &str) -> MediaRef {
        MediaRef::new(PathBuf::from(name), "image/png".into(), 10)
    }

    #[test]
    fn remove_attachment_keeps_relative_order() {
        let mut draft = Draft::default();
        for name in ["a.png", "b.png", "c.png", "d.png"] {
            draft.push_attachment(media(name));
        }

        let removed = draft.remove_attachment(1).expect("index in range");

        assert_eq!(removed.display_name(), "b.png");
        let names: Vec<_> = draft.attachments().iter().map(|m| m.display_name()).collect();
        assert_eq!(names, ["a.png", "c.png", "d.png"]);
    }

    #[test]
    fn remove_attachment_out_of_range_is_noop() {
        let mut draft = Draft::default();
        draft.push_attachment(media("a.png"));

        assert!(draft.remove_attachment(3).is_none());
        assert_eq!(draft.attachments().len(), 1);
    }

    #[test]
    fn body_is_truncated_at_char_limit() {
        let mut draft = Draft::default();
        draft.set_body("é".repeat(BODY_CHAR_LIMIT + 50));

        assert_eq!(draft.body_chars(), BODY_CHAR_LIMIT);
    }

    #[test]
    fn blank_title_is_stored_as_none() {
        let mut draft = Draft::default();
        draft.set_title("Launch");
        assert_eq!(draft.title(), Some("Launch"));

        draft.set_title("   ");
        assert_eq!(draft.title(), None);
    }

    #[test]
    fn whitespace_body_without_media_has_no_content() {
        let mut draft = Draft::default();
        draft.set_body(" \n\t ");
        assert!(draft.has_no_content());

        draft.push_attachment(media("clip.png"));
        assert!(!draft.has_no_content());
    }

    #[test]
    fn clear_releases_everything() {
        let mut draft = Draft::default();
        draft.set_title("t");
        draft.set_body("b");
        draft.push_attachment(media("a.png"));
        draft.push_attachment(media("b.png"));

        let released = draft.clear();

        assert_eq!(released.len(), 2);
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn media_kind_follows_mime() {
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("image/gif"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("application/octet-stream"), MediaKind::Image);
    }

    #[test]
    fn media_from_meta_enforces_format_and_size() {
        let ok = media_from_meta(PathBuf::from("clip.MOV"), "video/quicktime".into(), 5, 10)
            .expect("supported and small");
        assert_eq!(ok.kind, MediaKind::Video);

        assert!(matches!(
            media_from_meta(PathBuf::from("notes.txt"), "text/plain".into(), 5, 10),
            Err(MediaError::Unsupported(_))
        ));
        assert!(matches!(
            media_from_meta(PathBuf::from("big.png"), "image/png".into(), 11, 10),
            Err(MediaError::TooLarge { .. })
        ));
    }
}
