// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Platform picker rendered as a row of selectable cards.

use eframe::egui;

use crate::models::platform::{Platform, PlatformSelection, platform_count_label};

/// Phosphor glyph used for each platform card.
fn platform_icon(platform: Platform) -> &'static str {
    match platform {
        Platform::TikTok => egui_phosphor::regular::TIKTOK_LOGO,
        Platform::Facebook => egui_phosphor::regular::FACEBOOK_LOGO,
        Platform::YouTube => egui_phosphor::regular::YOUTUBE_LOGO,
        Platform::Instagram => egui_phosphor::regular::INSTAGRAM_LOGO,
        Platform::Twitter => egui_phosphor::regular::TWITTER_LOGO,
        Platform::LinkedIn => egui_phosphor::regular::LINKEDIN_LOGO,
    }
}

/// Render the platform cards and return the platforms the user toggled this frame.
pub fn view(ui: &mut egui::Ui, selection: &PlatformSelection) -> Vec<Platform> {
    let mut toggled = Vec::new();

    ui.horizontal_wrapped(|ui| {
        for platform in Platform::ALL {
            let selected = selection.contains(platform);
            let label = format!(
                "{} {}\n{}",
                platform_icon(platform),
                platform.name(),
                platform.description()
            );
            let button = egui::Button::new(label)
                .selected(selected)
                .min_size(egui::vec2(150.0, 48.0));
            if ui
                .add(button)
                .on_hover_text(if selected { "Click to deselect" } else { "Click to select" })
                .clicked()
            {
                toggled.push(platform);
            }
        }
    });

    if !selection.is_empty() {
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(format!(
                "{} {} selected. Ready to create content for: {}",
                egui_phosphor::regular::CHECK_CIRCLE,
                platform_count_label(selection.len()),
                selection.summary()
            ))
            .color(egui::Color32::from_rgb(30, 64, 175)),
        );
    }

    toggled
}
