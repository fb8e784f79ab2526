// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Scheduled posts overview with per-status counters.

use eframe::egui;
use uuid::Uuid;

use crate::models::schedule::{PostStatus, Schedule, ScheduledPost};

fn status_color(status: PostStatus) -> egui::Color32 {
    match status {
        PostStatus::Scheduled => egui::Color32::from_rgb(37, 99, 235),
        PostStatus::Published => egui::Color32::from_rgb(22, 163, 74),
        PostStatus::Failed => egui::Color32::from_rgb(220, 38, 38),
    }
}

/// Render counters and the post list. Returns ids of posts the user asked to delete.
pub fn view(ui: &mut egui::Ui, schedule: &Schedule) -> Vec<Uuid> {
    let mut deleted = Vec::new();

    ui.horizontal(|ui| {
        for status in PostStatus::ALL {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(140.0);
                ui.vertical(|ui| {
                    ui.label(status.label());
                    ui.label(
                        egui::RichText::new(schedule.count(status).to_string())
                            .heading()
                            .color(status_color(status)),
                    );
                });
            });
        }
    });

    ui.add_space(12.0);

    if schedule.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(egui_phosphor::regular::CALENDAR_BLANK).size(48.0));
            ui.heading("No Scheduled Posts");
            ui.label("You don't have any scheduled posts yet.");
        });
        return deleted;
    }

    for post in schedule.posts() {
        render_post(ui, post, &mut deleted);
        ui.add_space(6.0);
    }

    deleted
}

fn render_post(ui: &mut egui::Ui, post: &ScheduledPost, deleted: &mut Vec<Uuid>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&post.title);
                    ui.label(
                        egui::RichText::new(post.status.label())
                            .small()
                            .color(status_color(post.status)),
                    );
                });
                ui.label(egui::RichText::new(&post.content).color(egui::Color32::from_gray(90)));
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}    {} {}",
                        egui_phosphor::regular::CALENDAR_BLANK,
                        post.formatted_time(),
                        egui_phosphor::regular::PAPERCLIP,
                        post.media_label()
                    ))
                    .small()
                    .color(egui::Color32::from_gray(110)),
                );
                ui.horizontal_wrapped(|ui| {
                    for platform in &post.platforms {
                        ui.label(egui::RichText::new(platform.name()).small());
                    }
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui
                    .button(
                        egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                            .color(egui::Color32::from_rgb(220, 38, 38)),
                    )
                    .on_hover_text("Delete post")
                    .clicked()
                {
                    deleted.push(post.id);
                }
            });
        });
    });
}
