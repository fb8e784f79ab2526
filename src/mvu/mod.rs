// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring dashboard state, messages, and commands.

use std::path::PathBuf;

use crossbeam_channel::Sender;
use uuid::Uuid;

use crate::config::Config;
use crate::logic::publish::{self, PublishOptions, PublishPhase, PublishResult};
use crate::logic::suggest::suggest_content;
use crate::models::draft::Draft;
use crate::models::platform::{Platform, PlatformSelection, platform_count_label};
use crate::models::schedule::Schedule;
use crate::ui::components::media::{self, MediaCommand, MediaModel, MediaMsg};
use crate::utils::probe_file;

/// Dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Create,
    Schedule,
}

/// Top-level application state.
pub struct AppModel {
    pub tab: Tab,
    /// Platforms targeted by the session.
    pub platforms: PlatformSelection,
    /// Content being composed.
    pub draft: Draft,
    /// Preview state for draft media.
    pub media: MediaModel,
    /// Phase of the current (or last) publish request.
    pub publish: PublishPhase,
    /// Scheduled posts list.
    pub schedule: Schedule,
    /// Pacing for simulated publishing.
    pub publish_options: PublishOptions,
    /// Largest accepted media file in bytes.
    pub max_media_bytes: u64,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error to display in modal.
    pub error: Option<ErrorNotice>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(config: &Config) -> Self {
        Self {
            tab: Tab::default(),
            platforms: config.session.platforms(),
            draft: Draft::default(),
            media: MediaModel::default(),
            publish: PublishPhase::default(),
            schedule: Schedule::with_samples(chrono::Local::now()),
            publish_options: PublishOptions::from(&config.publish),
            max_media_bytes: config.media.max_file_size,
            status: None,
            error: None,
            pending_commands: 0,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        AppModel::new(&Config::default())
    }
}

/// Error shown in the modal, titled by the area it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: &'static str,
    pub message: String,
}

const PUBLISH_ERROR_TITLE: &str = "Cannot publish";
const MEDIA_ERROR_TITLE: &str = "Media problem";

/// Application messages routed through the update function.
pub enum Msg {
    SelectTab(Tab),
    TogglePlatform(Platform),
    TitleChanged(String),
    BodyChanged(String),
    SuggestRequested,
    ScheduleRequested,
    PublishRequested,
    PublishProgress(f32),
    PublishCompleted {
        result: PublishResult,
        platform_count: usize,
    },
    DeleteScheduledPost(Uuid),
    ThumbnailDecoded {
        id: Uuid,
        image: eframe::egui::ColorImage,
    },
    DismissError,
    /// Files dropped onto the window.
    FilesDropped(Vec<PathBuf>),
    Media(MediaMsg),
}

impl Msg {
    /// Intermediate messages that do not finish a command.
    pub fn is_progress(&self) -> bool {
        matches!(self, Msg::PublishProgress(_))
    }
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    PickMedia,
    ProbeMedia { path: PathBuf },
    LoadThumbnail { id: Uuid, path: PathBuf },
    OpenMedia { path: PathBuf },
    Publish(PublishPayload),
}

/// Snapshot handed to the publish worker.
pub struct PublishPayload {
    pub draft: Draft,
    pub platforms: PlatformSelection,
    pub options: PublishOptions,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SelectTab(tab) => model.tab = tab,
        Msg::TogglePlatform(platform) => {
            let selected = model.platforms.toggle(platform);
            tracing::debug!(platform = platform.id(), selected, "platform toggled");
        }
        Msg::TitleChanged(text) => model.draft.set_title(text),
        Msg::BodyChanged(text) => model.draft.set_body(text),
        Msg::DismissError => model.error = None,
        Msg::FilesDropped(paths) => {
            if paths.is_empty() {
                return;
            }
            // The media panel is only visible on the Create tab with a platform selected.
            if model.tab != Tab::Create || model.platforms.is_empty() {
                tracing::debug!(count = paths.len(), "ignoring dropped files");
                surface_event(
                    model,
                    "Select a platform on the Create tab before adding media.".into(),
                    None,
                );
                return;
            }
            update(model, Msg::Media(MediaMsg::FilesPicked(paths)), cmds);
        }
        Msg::SuggestRequested => {
            model.draft.set_body(suggest_content());
            surface_event(
                model,
                "AI content generated! Feel free to customize the suggested content.".into(),
                None,
            );
        }
        Msg::ScheduleRequested => surface_event(
            model,
            "Scheduling feature will be available soon!".into(),
            None,
        ),
        Msg::PublishRequested => request_publish(model, cmds),
        Msg::PublishProgress(value) => model.publish.advance(value),
        Msg::PublishCompleted {
            result,
            platform_count,
        } => finish_publish(model, result, platform_count),
        Msg::DeleteScheduledPost(id) => {
            if model.schedule.delete(id) {
                surface_event(model, "Scheduled post deleted".into(), None);
            }
        }
        Msg::ThumbnailDecoded { id, image } => {
            // Texture creation needs the egui context; the UI converts this message before update.
            let _ = (id, image);
        }
        Msg::Media(m) => {
            let mut media_cmds = Vec::new();
            if let Some(event) = media::update(
                &mut model.draft,
                &mut model.media,
                m,
                model.max_media_bytes,
                &mut media_cmds,
            ) {
                let title = event.is_error.then_some(MEDIA_ERROR_TITLE);
                surface_event(model, event.message, title);
            }
            cmds.extend(media_cmds.into_iter().map(|c| match c {
                MediaCommand::PickFiles => Command::PickMedia,
                MediaCommand::Probe { path } => Command::ProbeMedia { path },
                MediaCommand::LoadThumbnail { id, path } => Command::LoadThumbnail { id, path },
                MediaCommand::OpenFile { path } => Command::OpenMedia { path },
            }));
        }
    }
}

/// Execute a command and return the message that completes it.
///
/// Intermediate progress is forwarded through `progress` while the command runs.
pub fn run_command(cmd: Command, progress: &Sender<Msg>) -> Msg {
    match cmd {
        Command::PickMedia => {
            let extensions = crate::models::draft::accepted_extensions();
            let files = rfd::FileDialog::new()
                .set_title("Select images or videos")
                .add_filter("Images and videos", &extensions[..])
                .pick_files()
                .unwrap_or_default();
            Msg::Media(MediaMsg::FilesPicked(files))
        }
        Command::ProbeMedia { path } => {
            let result = probe_file(&path).map_err(|e| format!("{e:#}"));
            Msg::Media(MediaMsg::Probed { path, result })
        }
        Command::LoadThumbnail { id, path } => match media::load_image_thumbnail(&path) {
            Ok(image) => Msg::ThumbnailDecoded { id, image },
            Err(err) => {
                tracing::debug!(path = %path.display(), "thumbnail failed: {err}");
                Msg::Media(MediaMsg::ThumbnailFailed { id })
            }
        },
        Command::OpenMedia { path } => {
            let result = open::that(&path)
                .map_err(|e| format!("Failed to open {}: {e}", path.display()));
            Msg::Media(MediaMsg::OpenFinished(result))
        }
        Command::Publish(payload) => {
            let PublishPayload {
                mut draft,
                platforms,
                options,
            } = payload;
            let result = publish::publish(
                &mut draft,
                &platforms,
                options,
                rand::thread_rng(),
                |value| {
                    let _ = progress.send(Msg::PublishProgress(value));
                },
            );
            Msg::PublishCompleted {
                result,
                platform_count: platforms.len(),
            }
        }
    }
}

/// Update status/error fields consistently for user feedback.
///
/// Passing an error title also raises the modal.
fn surface_event(model: &mut AppModel, message: String, error_title: Option<&'static str>) {
    if let Some(title) = error_title {
        model.error = Some(ErrorNotice {
            title,
            message: message.clone(),
        });
    }
    model.status = Some(message);
}

/// Validate the draft and hand a snapshot to the publish worker.
fn request_publish(model: &mut AppModel, cmds: &mut Vec<Command>) {
    if !model.publish.begin() {
        surface_event(model, "A publish is already in progress.".into(), None);
        return;
    }

    let outcome = publish::validate(&model.draft, &model.platforms);
    model.publish.validated(outcome);
    match outcome {
        Ok(()) => {
            tracing::info!(platforms = %model.platforms.summary(), "publish requested");
            model.status = Some(format!(
                "Publishing to {}...",
                platform_count_label(model.platforms.len())
            ));
            cmds.push(Command::Publish(PublishPayload {
                draft: model.draft.clone(),
                platforms: model.platforms.clone(),
                options: model.publish_options,
            }));
        }
        Err(err) => surface_event(
            model,
            format!("{err}: {}", err.hint()),
            Some(PUBLISH_ERROR_TITLE),
        ),
    }
}

fn finish_publish(model: &mut AppModel, result: PublishResult, platform_count: usize) {
    match result {
        PublishResult::Success => {
            if !model.publish.complete() {
                return;
            }
            let released = model.draft.clear();
            model.media.release(released.iter().map(|m| m.id));
            surface_event(
                model,
                format!(
                    "Content published successfully! Your content has been published to {}.",
                    platform_count_label(platform_count)
                ),
                None,
            );
        }
        PublishResult::ValidationFailed(err) => {
            model.publish = PublishPhase::Rejected(err);
            surface_event(
                model,
                format!("{err}: {}", err.hint()),
                Some(PUBLISH_ERROR_TITLE),
            );
        }
    }
}
