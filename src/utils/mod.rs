// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod file_icons;
pub mod probe;

/// Select a Phosphor icon for a media attachment.
pub use file_icons::icon_for;
/// Read size and MIME type of a picked file.
pub use probe::{format_bytes, probe_file};
