// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Publish workflow: validation, simulated upload progress, and per-request phases.
//!
//! Publishing performs no network I/O. Progress is cosmetic: a timer-paced
//! sequence of random increments from 0 to 100 that always ends at exactly 100.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use crate::config::PublishConfig;
use crate::models::draft::Draft;
use crate::models::platform::PlatformSelection;

/// Final progress value.
pub const PROGRESS_DONE: f32 = 100.0;

/// Smallest accepted progress increment. Keeps every step well above one f32 ulp of 100.
pub const MIN_STEP: f32 = 0.1;

const DEFAULT_MIN_STEP: f32 = 1.0;

/// Coerce a configured step range into a finite, non-empty `[min, max)` within `(0, 100]`.
///
/// Non-finite or non-positive minimums fall back to the default. A maximum that is
/// non-finite or not above the minimum becomes `min + 1`.
pub fn sane_step_range(min_step: f32, max_step: f32) -> (f32, f32) {
    let min_step = if min_step.is_finite() && min_step > 0.0 {
        min_step.clamp(MIN_STEP, PROGRESS_DONE)
    } else {
        DEFAULT_MIN_STEP
    };
    let max_step = if max_step.is_finite() && max_step > min_step {
        max_step.min(PROGRESS_DONE + 1.0)
    } else {
        min_step + 1.0
    };
    (min_step, max_step)
}

/// Reasons a draft cannot be published.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("No platforms selected")]
    NoPlatformSelected,
    #[error("No content to publish")]
    EmptyContent,
}

impl PublishError {
    /// Longer hint shown under the headline.
    pub fn hint(self) -> &'static str {
        match self {
            PublishError::NoPlatformSelected => {
                "Please select at least one platform to publish to."
            }
            PublishError::EmptyContent => "Please add some text or media files.",
        }
    }
}

/// Terminal outcome of a publish invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishResult {
    Success,
    ValidationFailed(PublishError),
}

/// Check the minimal preconditions for publishing.
///
/// An empty selection is reported before empty content.
pub fn validate(draft: &Draft, selection: &PlatformSelection) -> Result<(), PublishError> {
    if selection.is_empty() {
        return Err(PublishError::NoPlatformSelected);
    }
    if draft.has_no_content() {
        return Err(PublishError::EmptyContent);
    }
    Ok(())
}

/// Pacing for the simulated upload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PublishOptions {
    pub tick_interval: Duration,
    pub min_step: f32,
    pub max_step: f32,
}

impl Default for PublishOptions {
    fn default() -> Self {
        PublishOptions::from(&PublishConfig::default())
    }
}

impl From<&PublishConfig> for PublishOptions {
    fn from(cfg: &PublishConfig) -> Self {
        Self {
            tick_interval: cfg.tick_interval(),
            min_step: cfg.min_step,
            max_step: cfg.max_step,
        }
    }
}

/// Iterator over simulated progress values: `0.0`, strictly increasing steps, then exactly `100.0`.
pub struct ProgressTicker<R> {
    rng: R,
    min_step: f32,
    max_step: f32,
    next: Option<f32>,
}

impl<R: Rng> ProgressTicker<R> {
    pub fn new(rng: R, min_step: f32, max_step: f32) -> Self {
        let (min_step, max_step) = sane_step_range(min_step, max_step);
        Self {
            rng,
            min_step,
            max_step,
            next: Some(0.0),
        }
    }
}

impl<R: Rng> Iterator for ProgressTicker<R> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let current = self.next?;
        self.next = if current >= PROGRESS_DONE {
            None
        } else {
            let step = self.rng.gen_range(self.min_step..self.max_step);
            Some((current + step).min(PROGRESS_DONE))
        };
        Some(current)
    }
}

/// Validate, simulate the upload, and clear the draft on success.
///
/// `on_progress` is called for every progress value; it is never called when
/// validation fails, and the draft is left untouched in that case.
pub fn publish<R, F>(
    draft: &mut Draft,
    selection: &PlatformSelection,
    options: PublishOptions,
    rng: R,
    mut on_progress: F,
) -> PublishResult
where
    R: Rng,
    F: FnMut(f32),
{
    if let Err(err) = validate(draft, selection) {
        tracing::info!(reason = %err, "publish rejected");
        return PublishResult::ValidationFailed(err);
    }

    tracing::info!(
        platforms = %selection.summary(),
        attachments = draft.attachments().len(),
        "publishing"
    );
    let mut first = true;
    for progress in ProgressTicker::new(rng, options.min_step, options.max_step) {
        if !first && !options.tick_interval.is_zero() {
            std::thread::sleep(options.tick_interval);
        }
        first = false;
        tracing::debug!(progress, "publish progress");
        on_progress(progress);
    }

    draft.clear();
    tracing::info!("publish completed");
    PublishResult::Success
}

/// Lifecycle of a single publish request.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PublishPhase {
    #[default]
    Idle,
    Validating,
    Rejected(PublishError),
    Publishing {
        progress: f32,
    },
    Completed,
}

impl PublishPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, PublishPhase::Validating | PublishPhase::Publishing { .. })
    }

    /// Current progress when publishing.
    pub fn progress(&self) -> Option<f32> {
        match self {
            PublishPhase::Publishing { progress } => Some(*progress),
            _ => None,
        }
    }

    /// Start a new request. Returns false while another one is in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = PublishPhase::Validating;
        true
    }

    /// Record the validation outcome.
    pub fn validated(&mut self, outcome: Result<(), PublishError>) {
        if *self != PublishPhase::Validating {
            return;
        }
        *self = match outcome {
            Ok(()) => PublishPhase::Publishing { progress: 0.0 },
            Err(err) => PublishPhase::Rejected(err),
        };
    }

    /// Apply a progress report, ignoring values that would move backwards.
    pub fn advance(&mut self, value: f32) {
        if let PublishPhase::Publishing { progress } = self {
            *progress = progress.max(value.clamp(0.0, PROGRESS_DONE));
        }
    }

    /// Mark the in-flight upload finished. Returns false when nothing was publishing.
    pub fn complete(&mut self) -> bool {
        if matches!(self, PublishPhase::Publishing { .. }) {
            *self = PublishPhase::Completed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::draft::MediaRef;
    use crate::models::platform::Platform;

    fn instant() -> PublishOptions {
        PublishOptions {
            tick_interval: Duration::ZERO,
            ..PublishOptions::default()
        }
    }

    fn selection(platforms: &[Platform]) -> PlatformSelection {
        platforms.iter().copied().collect()
    }

    fn drafts() -> Vec<Draft> {
        let mut text = Draft::default();
        text.set_body("Hello world");
        let mut media_only = Draft::default();
        media_only.push_attachment(MediaRef::new(
            PathBuf::from("clip.mp4"),
            "video/mp4".into(),
            42,
        ));
        let mut titled_blank = Draft::default();
        titled_blank.set_title("Just a title");
        titled_blank.set_body("   ");
        vec![Draft::default(), text, media_only, titled_blank]
    }

    #[test]
    fn empty_selection_is_rejected_for_any_draft() {
        for draft in drafts() {
            assert_eq!(
                validate(&draft, &PlatformSelection::default()),
                Err(PublishError::NoPlatformSelected)
            );
        }
    }

    #[test]
    fn empty_content_is_rejected_for_any_selection() {
        let mut blank = Draft::default();
        blank.set_title("Title alone is not content");
        blank.set_body(" \n ");

        for platforms in [
            vec![Platform::TikTok],
            vec![Platform::Facebook, Platform::LinkedIn],
            Platform::ALL.to_vec(),
        ] {
            assert_eq!(
                validate(&blank, &selection(&platforms)),
                Err(PublishError::EmptyContent)
            );
        }
    }

    #[test]
    fn text_or_media_alone_is_enough() {
        let targets = selection(&[Platform::YouTube]);
        let drafts = drafts();

        assert!(validate(&drafts[1], &targets).is_ok());
        assert!(validate(&drafts[2], &targets).is_ok());
    }

    #[test]
    fn ticker_is_monotonic_and_ends_at_hundred() {
        for seed in 0..20 {
            let values: Vec<f32> = ProgressTicker::new(StdRng::seed_from_u64(seed), 1.0, 15.0).collect();

            assert_eq!(values.first(), Some(&0.0));
            assert_eq!(values.last(), Some(&PROGRESS_DONE));
            assert!(values.windows(2).all(|w| w[1] > w[0]), "seed {seed}: {values:?}");
            assert!(values.iter().all(|v| (0.0..=PROGRESS_DONE).contains(v)));
        }
    }

    #[test]
    fn ticker_terminates_for_degenerate_step_ranges() {
        let max_ticks = (PROGRESS_DONE / MIN_STEP) as usize + 2;
        let ranges = [
            (1e-9, 2e-9),
            (0.0, 0.0),
            (-1.0, 5.0),
            (f32::NAN, f32::NAN),
            (1.0, f32::INFINITY),
            (f32::NEG_INFINITY, f32::INFINITY),
            (500.0, 1e30),
        ];

        for (min, max) in ranges {
            let values: Vec<f32> = ProgressTicker::new(StdRng::seed_from_u64(3), min, max)
                .take(max_ticks + 1)
                .collect();

            assert!(values.len() <= max_ticks, "{min}..{max} did not finish");
            assert_eq!(values.last().copied(), Some(PROGRESS_DONE), "{min}..{max}");
            assert!(
                values.windows(2).all(|w| w[1] > w[0]),
                "{min}..{max} not strictly increasing"
            );
        }
    }

    #[test]
    fn sane_step_range_is_finite_and_non_empty() {
        for (min, max) in [(0.0, 1.0), (f32::NAN, 3.0), (2.0, f32::INFINITY), (1e-9, 2e-9)] {
            let (lo, hi) = sane_step_range(min, max);
            assert!(lo.is_finite() && hi.is_finite());
            assert!(lo >= MIN_STEP && hi > lo);
        }
        assert_eq!(sane_step_range(1.0, 15.0), (1.0, 15.0));
    }

    #[test]
    fn publish_reaches_hundred_and_clears_draft() {
        let mut draft = drafts().remove(1);
        draft.set_title("Launch");
        let targets = selection(&[Platform::TikTok, Platform::Instagram]);
        let mut seen = Vec::new();

        let result = publish(
            &mut draft,
            &targets,
            instant(),
            StdRng::seed_from_u64(7),
            |p| seen.push(p),
        );

        assert_eq!(result, PublishResult::Success);
        assert_eq!(seen.last(), Some(&PROGRESS_DONE));
        assert!(seen.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(draft, Draft::default());
        assert_eq!(targets.len(), 2, "selection is only read");
    }

    #[test]
    fn rejected_publish_emits_no_progress_and_keeps_draft() {
        let mut draft = drafts().remove(1);
        let before = draft.clone();
        let mut calls = 0;

        let result = publish(
            &mut draft,
            &PlatformSelection::default(),
            instant(),
            StdRng::seed_from_u64(1),
            |_| calls += 1,
        );

        assert_eq!(
            result,
            PublishResult::ValidationFailed(PublishError::NoPlatformSelected)
        );
        assert_eq!(calls, 0);
        assert_eq!(draft, before);
    }

    #[test]
    fn phase_walks_through_success_path() {
        let mut phase = PublishPhase::default();

        assert!(phase.begin());
        assert!(phase.is_in_flight());
        phase.validated(Ok(()));
        assert_eq!(phase.progress(), Some(0.0));
        phase.advance(40.0);
        phase.advance(25.0);
        assert_eq!(phase.progress(), Some(40.0), "progress never moves backwards");
        assert!(!phase.begin(), "second request while publishing is refused");
        assert!(phase.complete());
        assert_eq!(phase, PublishPhase::Completed);
        assert!(phase.begin(), "a finished request allows a new one");
    }

    #[test]
    fn phase_rejection_is_terminal() {
        let mut phase = PublishPhase::default();
        phase.begin();
        phase.validated(Err(PublishError::EmptyContent));

        assert_eq!(phase, PublishPhase::Rejected(PublishError::EmptyContent));
        assert!(!phase.complete());
        phase.advance(50.0);
        assert_eq!(phase.progress(), None);
    }
}
