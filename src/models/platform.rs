// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Supported social networks and the user's platform selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An external social network, identified by a short string id (e.g. `tiktok`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    TikTok,
    Facebook,
    YouTube,
    Instagram,
    Twitter,
    LinkedIn,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown platform id: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// Catalog in display order.
    pub const ALL: [Platform; 6] = [
        Platform::TikTok,
        Platform::Facebook,
        Platform::YouTube,
        Platform::Instagram,
        Platform::Twitter,
        Platform::LinkedIn,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::YouTube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Platform::TikTok => "Short-form videos",
            Platform::Facebook => "Posts & Stories",
            Platform::YouTube => "Videos & Shorts",
            Platform::Instagram => "Photos & Reels",
            Platform::Twitter => "Tweets & Threads",
            Platform::LinkedIn => "Professional posts",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, UnknownPlatform> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| UnknownPlatform(id.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_id(s)
    }
}

/// Set of target platforms chosen for the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformSelection {
    platforms: BTreeSet<Platform>,
}

impl PlatformSelection {
    /// Select `platform` if absent, otherwise deselect it. Returns whether it is now selected.
    pub fn toggle(&mut self, platform: Platform) -> bool {
        if self.platforms.remove(&platform) {
            false
        } else {
            self.platforms.insert(platform);
            true
        }
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Selected platforms in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.platforms.iter().copied()
    }

    /// Comma-separated display names, e.g. "TikTok, YouTube".
    pub fn summary(&self) -> String {
        self.iter().map(Platform::name).collect::<Vec<_>>().join(", ")
    }
}

impl FromIterator<Platform> for PlatformSelection {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        Self {
            platforms: iter.into_iter().collect(),
        }
    }
}

/// "1 platform" / "3 platforms".
pub fn platform_count_label(count: usize) -> String {
    if count == 1 {
        "1 platform".to_string()
    } else {
        format!("{count} platforms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_id(platform.id()), Ok(platform));
        }
        assert_eq!("TikTok".parse::<Platform>(), Ok(Platform::TikTok));
        assert!(Platform::from_id("myspace").is_err());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = PlatformSelection::default();

        assert!(selection.toggle(Platform::YouTube));
        assert!(selection.contains(Platform::YouTube));
        assert!(!selection.toggle(Platform::YouTube));
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_is_unique_and_order_independent() {
        let a: PlatformSelection = [Platform::LinkedIn, Platform::TikTok, Platform::LinkedIn]
            .into_iter()
            .collect();
        let b: PlatformSelection = [Platform::TikTok, Platform::LinkedIn].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.summary(), "TikTok, LinkedIn");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(platform_count_label(1), "1 platform");
        assert_eq!(platform_count_label(4), "4 platforms");
    }
}
