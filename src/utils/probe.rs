// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File metadata probing for picked media.

use std::path::Path;

use anyhow::{Context, Result};

/// Size and MIME type of a file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileProbe {
    pub size: u64,
    pub mime: String,
}

/// Stat a file and guess its MIME type from the extension.
///
/// # Errors
///
/// Returns an error when the file metadata cannot be read or the path is not a regular file.
pub fn probe_file(path: &Path) -> Result<FileProbe> {
    let meta = path
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {:?}", path))?;
    anyhow::ensure!(meta.is_file(), "Not a regular file: {:?}", path);
    Ok(FileProbe {
        size: meta.len(),
        mime: guess_mime(path),
    })
}

pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Human-readable formatting for byte sizes with binary units.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probe_reports_size_and_mime() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.mp4");
        std::fs::write(&path, [0u8; 2048]).unwrap();

        let probe = probe_file(&path).unwrap();

        assert_eq!(probe.size, 2048);
        assert_eq!(probe.mime, "video/mp4");
    }

    #[test]
    fn probe_rejects_missing_and_directories() {
        let tmp = TempDir::new().unwrap();

        assert!(probe_file(&tmp.path().join("missing.png")).is_err());
        assert!(probe_file(tmp.path()).is_err());
    }

    #[test]
    fn format_bytes_uses_binary_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(100 * 1024 * 1024), "100.0 MB");
    }
}
