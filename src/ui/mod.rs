// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the publishing dashboard.
//! Handles layout, tab switching, and the worker pool that runs commands.

pub mod components;

use std::time::Duration;

use eframe::egui;

use crate::config::Config;
use crate::mvu::{self, AppModel, Command, Msg, Tab};
use crate::ui::components::composer::{self, ComposerMsg};
use crate::ui::components::media::{self, MediaMsg};
use crate::ui::components::{platforms, schedule};

/// Stateful egui application for composing and publishing posts.
pub struct DashboardApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for DashboardApp {
    fn default() -> Self {
        DashboardApp::new(&Config::default())
    }
}

impl DashboardApp {
    pub fn new(config: &Config) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        tracing::debug!(threads, "starting command workers");
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &msg_tx);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::new(config),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for DashboardApp {
    /// Drives a single UI frame: drains worker messages, applies them to the model, dispatches
    /// resulting commands, and renders the header, platform picker, active tab, and status bar.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            if !msg.is_progress() {
                self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            }
            self.inbox.push(msg);
        }

        self.collect_dropped_files(ctx);

        // Process pending messages in arrival order.
        let msgs = std::mem::take(&mut self.inbox);
        for msg in msgs {
            let msg = match msg {
                Msg::ThumbnailDecoded { id, image } => {
                    let texture = ctx.load_texture(
                        format!("thumb-{id}"),
                        image,
                        egui::TextureOptions::default(),
                    );
                    Msg::Media(MediaMsg::ThumbnailReady { id, texture })
                }
                other => other,
            };
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        // Workers do not wake the UI, so poll while they are busy.
        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Social Media Dashboard");
                ui.separator();
                self.render_tabs(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_platforms_section(ui);
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                match self.model.tab {
                    Tab::Create => self.render_create_tab(ui),
                    Tab::Schedule => self.render_schedule_tab(ui),
                }
            });
        });
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl DashboardApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Forward files dropped on the window to the model.
    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.inbox.push(Msg::FilesDropped(dropped));
        }
    }

    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        for (tab, label) in [
            (
                Tab::Create,
                format!("{} Create", egui_phosphor::regular::PENCIL_SIMPLE),
            ),
            (
                Tab::Schedule,
                format!("{} Schedule", egui_phosphor::regular::CLOCK),
            ),
        ] {
            if ui
                .add(egui::Button::new(label).selected(self.model.tab == tab))
                .clicked()
            {
                self.inbox.push(Msg::SelectTab(tab));
            }
        }
    }

    fn render_platforms_section(&mut self, ui: &mut egui::Ui) {
        ui.strong("Select Platforms");
        ui.label(
            egui::RichText::new("Choose which social media platforms you want to manage.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
        let toggled = platforms::view(ui, &self.model.platforms);
        self.inbox
            .extend(toggled.into_iter().map(Msg::TogglePlatform));
    }

    /// Composer, media, preview, and publishing controls. Requires at least one platform.
    fn render_create_tab(&mut self, ui: &mut egui::Ui) {
        if self.model.platforms.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(egui::RichText::new(egui_phosphor::regular::TARGET).size(48.0));
                ui.heading("Select Platforms First");
                ui.label("Choose which social media platforms you want to create content for.");
            });
            return;
        }

        let mut composer_msgs = Vec::new();
        ui.columns(2, |cols| {
            composer_msgs.extend(composer::view_editor(&mut cols[0], &self.model.draft));
            cols[0].add_space(12.0);
            cols[0].strong("Media Files");
            let media_msgs = media::view(&mut cols[0], &self.model.draft, &self.model.media);
            self.inbox.extend(media_msgs.into_iter().map(Msg::Media));

            cols[1].strong("Preview");
            composer::view_preview(&mut cols[1], &self.model.draft);
            cols[1].add_space(12.0);
            cols[1].strong("Publishing Options");
            composer_msgs.extend(composer::view_actions(&mut cols[1], &self.model.publish));
        });

        self.inbox
            .extend(composer_msgs.into_iter().map(|m| match m {
                ComposerMsg::TitleChanged(t) => Msg::TitleChanged(t),
                ComposerMsg::BodyChanged(b) => Msg::BodyChanged(b),
                ComposerMsg::Suggest => Msg::SuggestRequested,
                ComposerMsg::Publish => Msg::PublishRequested,
                ComposerMsg::Schedule => Msg::ScheduleRequested,
            }));
    }

    fn render_schedule_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Schedule Manager");
        ui.label("Manage your scheduled and published content");
        ui.add_space(8.0);
        let deleted = schedule::view(ui, &self.model.schedule);
        self.inbox
            .extend(deleted.into_iter().map(Msg::DeleteScheduledPost));
    }

    /// Render a simple modal window for the latest error.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(notice) = self.model.error.clone() {
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        }
    }
}
