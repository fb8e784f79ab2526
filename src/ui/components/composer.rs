// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Draft editor, preview, and publishing controls.

use eframe::egui;

use crate::logic::publish::{PROGRESS_DONE, PublishPhase};
use crate::models::draft::{BODY_CHAR_LIMIT, Draft};

/// Messages emitted by the composer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerMsg {
    TitleChanged(String),
    BodyChanged(String),
    Suggest,
    Publish,
    Schedule,
}

/// Render title and body inputs with the character counter.
pub fn view_editor(ui: &mut egui::Ui, draft: &Draft) -> Vec<ComposerMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.strong("Content");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("{} AI Suggest", egui_phosphor::regular::SPARKLE))
                .on_hover_text("Replace the text with a suggested opener")
                .clicked()
            {
                msgs.push(ComposerMsg::Suggest);
            }
        });
    });
    ui.add_space(4.0);

    let mut title = draft.title().unwrap_or_default().to_string();
    if ui
        .add(
            egui::TextEdit::singleline(&mut title)
                .hint_text("Title (optional)")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(ComposerMsg::TitleChanged(title));
    }

    let mut body = draft.body().to_string();
    if ui
        .add(
            egui::TextEdit::multiline(&mut body)
                .hint_text("What's on your mind? Share your story, thoughts, or updates...")
                .desired_rows(6)
                .char_limit(BODY_CHAR_LIMIT)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(ComposerMsg::BodyChanged(body));
    }
    ui.label(
        egui::RichText::new(format!("{}/{BODY_CHAR_LIMIT} characters", draft.body_chars()))
            .small()
            .color(egui::Color32::from_gray(110)),
    );

    msgs
}

/// Read-only rendering of how the post will look.
pub fn view_preview(ui: &mut egui::Ui, draft: &Draft) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(120.0);
        if let Some(title) = draft.title() {
            ui.heading(title);
        }
        if draft.body().is_empty() {
            ui.label(
                egui::RichText::new("Your content will appear here...")
                    .italics()
                    .color(egui::Color32::from_gray(150)),
            );
        } else {
            ui.label(draft.body());
        }
        let count = draft.attachments().len();
        if count > 0 {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!(
                    "{} {} file{} attached",
                    egui_phosphor::regular::PAPERCLIP,
                    count,
                    if count > 1 { "s" } else { "" }
                ))
                .small()
                .color(egui::Color32::from_gray(110)),
            );
        }
    });
}

/// Progress bar plus Publish / Schedule buttons.
pub fn view_actions(ui: &mut egui::Ui, phase: &PublishPhase) -> Vec<ComposerMsg> {
    let mut msgs = Vec::new();
    let busy = phase.is_in_flight();

    if let Some(progress) = phase.progress() {
        ui.horizontal(|ui| {
            ui.label("Publishing...");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", progress.round() as u32));
            });
        });
        ui.add(egui::ProgressBar::new(progress / PROGRESS_DONE).animate(true));
        ui.add_space(6.0);
    }

    ui.horizontal(|ui| {
        let publish_label = if busy {
            format!("{} Publishing...", egui_phosphor::regular::PAPER_PLANE_TILT)
        } else {
            format!("{} Publish Now", egui_phosphor::regular::PAPER_PLANE_TILT)
        };
        if ui
            .add_enabled(!busy, egui::Button::new(publish_label))
            .clicked()
        {
            msgs.push(ComposerMsg::Publish);
        }
        if ui
            .add_enabled(
                !busy,
                egui::Button::new(format!(
                    "{} Schedule",
                    egui_phosphor::regular::CALENDAR_BLANK
                )),
            )
            .clicked()
        {
            msgs.push(ComposerMsg::Schedule);
        }
    });

    msgs
}
