// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Media attachments panel for the draft, structured for MVU-style updates.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use eframe::egui;
use uuid::Uuid;

use crate::models::draft::{Draft, MediaKind, media_from_meta};
use crate::utils::probe::FileProbe;
use crate::utils::{format_bytes, icon_for};

/// Preview cache for the draft's media. Attachments themselves live in the `Draft`.
#[derive(Default)]
pub struct MediaModel {
    thumbnail_cache: HashMap<Uuid, egui::TextureHandle>,
    thumbnail_failures: HashSet<Uuid>,
    /// Thumbnails requested but not yet decoded.
    thumbnail_pending: HashSet<Uuid>,
}

/// Messages emitted by the media view or returned by media commands.
// Debug omitted because TextureHandle is not Debug.
pub enum MediaMsg {
    RequestPickFiles,
    FilesPicked(Vec<PathBuf>),
    Probed {
        path: PathBuf,
        result: Result<FileProbe, String>,
    },
    LoadThumbnail {
        id: Uuid,
        path: PathBuf,
    },
    ThumbnailReady {
        id: Uuid,
        texture: egui::TextureHandle,
    },
    ThumbnailFailed {
        id: Uuid,
    },
    Remove(usize),
    Open(usize),
    OpenFinished(Result<(), String>),
}

/// Side-effectful commands that run off the UI path.
#[derive(Debug, PartialEq, Eq)]
pub enum MediaCommand {
    PickFiles,
    Probe { path: PathBuf },
    LoadThumbnail { id: Uuid, path: PathBuf },
    OpenFile { path: PathBuf },
}

/// User-facing events for status/error surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaEvent {
    /// Message text to display.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl MediaEvent {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

impl MediaModel {
    /// Drop preview resources for attachments that left the draft.
    pub fn release(&mut self, ids: impl IntoIterator<Item = Uuid>) {
        for id in ids {
            self.thumbnail_cache.remove(&id);
            self.thumbnail_failures.remove(&id);
            self.thumbnail_pending.remove(&id);
        }
    }
}

/// Apply a message to the draft's media and the preview cache.
pub fn update(
    draft: &mut Draft,
    model: &mut MediaModel,
    msg: MediaMsg,
    max_bytes: u64,
    cmds: &mut Vec<MediaCommand>,
) -> Option<MediaEvent> {
    match msg {
        MediaMsg::RequestPickFiles => {
            cmds.push(MediaCommand::PickFiles);
            None
        }
        MediaMsg::FilesPicked(paths) => {
            if paths.is_empty() {
                return None;
            }
            for path in paths {
                cmds.push(MediaCommand::Probe { path });
            }
            Some(MediaEvent::info("Processing media..."))
        }
        MediaMsg::Probed { path, result } => {
            let probe = match result {
                Ok(probe) => probe,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "media probe failed: {err}");
                    return Some(MediaEvent::error(err));
                }
            };
            match media_from_meta(path, probe.mime, probe.size, max_bytes) {
                Ok(media) => {
                    tracing::debug!(id = %media.id, kind = media.kind.label(), "media attached");
                    if media.kind == MediaKind::Image {
                        model.thumbnail_pending.insert(media.id);
                        cmds.push(MediaCommand::LoadThumbnail {
                            id: media.id,
                            path: media.path.clone(),
                        });
                    }
                    draft.push_attachment(media);
                    Some(MediaEvent::info("Media added"))
                }
                Err(err) => {
                    tracing::warn!("media rejected: {err}");
                    Some(MediaEvent::error(err.to_string()))
                }
            }
        }
        MediaMsg::LoadThumbnail { id, path } => {
            if model.thumbnail_pending.insert(id) {
                cmds.push(MediaCommand::LoadThumbnail { id, path });
            }
            None
        }
        MediaMsg::ThumbnailReady { id, texture } => {
            model.thumbnail_pending.remove(&id);
            // The attachment may have been removed while decoding.
            if draft.attachments().iter().any(|m| m.id == id) {
                model.thumbnail_cache.insert(id, texture);
            }
            None
        }
        MediaMsg::ThumbnailFailed { id } => {
            model.thumbnail_pending.remove(&id);
            if draft.attachments().iter().any(|m| m.id == id) {
                model.thumbnail_failures.insert(id);
            }
            None
        }
        MediaMsg::Remove(index) => {
            let removed = draft.remove_attachment(index)?;
            model.release([removed.id]);
            Some(MediaEvent::info(format!(
                "Removed {}",
                removed.display_name()
            )))
        }
        MediaMsg::Open(index) => {
            let media = draft.attachments().get(index)?;
            cmds.push(MediaCommand::OpenFile {
                path: media.path.clone(),
            });
            None
        }
        MediaMsg::OpenFinished(result) => result.err().map(MediaEvent::error),
    }
}

/// Render the media panel and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, draft: &Draft, model: &MediaModel) -> Vec<MediaMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Add media", egui_phosphor::regular::UPLOAD_SIMPLE))
            .on_hover_text("Images (png, jpg, gif) and videos (mp4, mov, avi, mkv)")
            .clicked()
        {
            msgs.push(MediaMsg::RequestPickFiles);
        }
        ui.label(
            egui::RichText::new("or drop files on the window")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    });

    ui.add_space(6.0);

    let visuals = ui.visuals().clone();
    egui::Frame::new()
        .fill(visuals.panel_fill)
        .stroke(visuals.window_stroke())
        .inner_margin(8.0)
        .show(ui, |ui| {
            if draft.attachments().is_empty() {
                ui.label(
                    egui::RichText::new("No media attached").color(egui::Color32::from_gray(150)),
                );
            } else {
                render_media_list(ui, draft, model, &mut msgs);
            }
        });

    msgs
}

fn render_media_list(
    ui: &mut egui::Ui,
    draft: &Draft,
    model: &MediaModel,
    msgs: &mut Vec<MediaMsg>,
) {
    let count = draft.attachments().len();
    for (index, media) in draft.attachments().iter().enumerate() {
        ui.horizontal(|ui| {
            if let Some(texture) = model.thumbnail_cache.get(&media.id) {
                let size = texture.size_vec2();
                let max = 72.0;
                let scale = (max / size.x).min(max / size.y).min(1.0);
                ui.add(egui::Image::new((texture.id(), size * scale)));
            } else {
                if media.kind == MediaKind::Image
                    && !model.thumbnail_failures.contains(&media.id)
                    && !model.thumbnail_pending.contains(&media.id)
                {
                    msgs.push(MediaMsg::LoadThumbnail {
                        id: media.id,
                        path: media.path.clone(),
                    });
                }
                ui.add_sized(
                    egui::vec2(72.0, 54.0),
                    egui::Label::new(egui::RichText::new(icon_for(media)).size(28.0)),
                );
            }

            ui.vertical(|ui| {
                ui.label(media.display_name());
                ui.label(
                    egui::RichText::new(format!(
                        "{} | {} | {}",
                        media.kind.label(),
                        media.mime,
                        format_bytes(media.size)
                    ))
                    .small()
                    .color(egui::Color32::from_gray(102)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE))
                    .on_hover_text("Remove media")
                    .clicked()
                {
                    msgs.push(MediaMsg::Remove(index));
                }
                if ui
                    .button(egui::RichText::new(egui_phosphor::regular::ARROW_SQUARE_OUT))
                    .on_hover_text("Open in default viewer")
                    .clicked()
                {
                    msgs.push(MediaMsg::Open(index));
                }
            });
        });

        if index + 1 < count {
            ui.separator();
        }
    }
}

/// Load and resize an image to a thumbnail-friendly `ColorImage`.
pub(crate) fn load_image_thumbnail(path: &Path) -> Result<egui::ColorImage, String> {
    const MAX: u32 = 256;

    let dyn_img = image::open(path).map_err(|e| e.to_string())?;
    let resized = dyn_img.thumbnail(MAX, MAX).to_rgba8();
    let size = [resized.width() as usize, resized.height() as usize];
    let pixels = resized.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}
