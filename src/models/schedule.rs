// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Locally-held list of scheduled and past posts.

use chrono::{DateTime, Duration, Local};
use uuid::Uuid;

use crate::models::platform::Platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostStatus {
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [
        PostStatus::Scheduled,
        PostStatus::Published,
        PostStatus::Failed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Scheduled => "Scheduled",
            PostStatus::Published => "Published",
            PostStatus::Failed => "Failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub scheduled_at: DateTime<Local>,
    pub status: PostStatus,
    pub media_count: u32,
}

impl ScheduledPost {
    /// Short local timestamp such as `Oct 19, 02:30 PM`.
    pub fn formatted_time(&self) -> String {
        self.scheduled_at.format("%b %-d, %I:%M %p").to_string()
    }

    /// "1 file" / "3 files".
    pub fn media_label(&self) -> String {
        if self.media_count == 1 {
            "1 file".to_string()
        } else {
            format!("{} files", self.media_count)
        }
    }
}

/// Ordered collection of scheduled posts.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    posts: Vec<ScheduledPost>,
}

impl Schedule {
    pub fn new(posts: Vec<ScheduledPost>) -> Self {
        Self { posts }
    }

    /// Sample posts relative to `now`: two upcoming, one already published.
    pub fn with_samples(now: DateTime<Local>) -> Self {
        Self::new(vec![
            ScheduledPost {
                id: Uuid::new_v4(),
                title: "Morning Motivation".into(),
                content: "🌅 Start your day with positive energy! Here are 3 tips to boost your morning routine...".into(),
                platforms: vec![Platform::TikTok, Platform::Instagram, Platform::Facebook],
                scheduled_at: now + Duration::hours(2),
                status: PostStatus::Scheduled,
                media_count: 1,
            },
            ScheduledPost {
                id: Uuid::new_v4(),
                title: "Product Launch".into(),
                content: "🚀 Exciting news! Our new product is finally here. Check out what makes it special...".into(),
                platforms: vec![Platform::Facebook, Platform::Twitter, Platform::LinkedIn],
                scheduled_at: now + Duration::hours(24),
                status: PostStatus::Scheduled,
                media_count: 3,
            },
            ScheduledPost {
                id: Uuid::new_v4(),
                title: "Behind the Scenes".into(),
                content: "🎬 Take a look behind the scenes of our latest project. The creative process is amazing!".into(),
                platforms: vec![Platform::YouTube, Platform::TikTok],
                scheduled_at: now - Duration::hours(2),
                status: PostStatus::Published,
                media_count: 1,
            },
        ])
    }

    pub fn posts(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn count(&self, status: PostStatus) -> usize {
        self.posts.iter().filter(|p| p.status == status).count()
    }

    /// Delete the post with `id`. Returns false when no such post exists.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        self.posts.len() != before
    }
}
