// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor icon mapping for draft media.

use crate::models::draft::{MediaKind, MediaRef};

/// Return a Phosphor file icon matching the attachment's kind and format.
pub fn icon_for(media: &MediaRef) -> &'static str {
    let mime = media.mime.to_ascii_lowercase();
    match media.kind {
        MediaKind::Video => egui_phosphor::regular::FILE_VIDEO,
        MediaKind::Image => match mime.as_str() {
            "image/png" => egui_phosphor::regular::FILE_PNG,
            "image/jpeg" => egui_phosphor::regular::FILE_JPG,
            _ => egui_phosphor::regular::FILE_IMAGE,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn icons_follow_kind_then_format() {
        let video = MediaRef::new(PathBuf::from("a.mkv"), "video/x-matroska".into(), 1);
        let png = MediaRef::new(PathBuf::from("a.png"), "image/png".into(), 1);
        let gif = MediaRef::new(PathBuf::from("a.gif"), "image/gif".into(), 1);

        assert_eq!(icon_for(&video), egui_phosphor::regular::FILE_VIDEO);
        assert_eq!(icon_for(&png), egui_phosphor::regular::FILE_PNG);
        assert_eq!(icon_for(&gif), egui_phosphor::regular::FILE_IMAGE);
    }
}
