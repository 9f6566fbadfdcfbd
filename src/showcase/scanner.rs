// SPDX-License-Identifier: MPL-2.0
//! Builds a showcase entry from a directory of images.

use super::{local_slide, ShowcaseEntry};
use crate::domain::slideshow::SlideSet;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// Scans `directory` (non-recursively) for supported images.
///
/// Files are ordered by name, case-insensitively. The entry title is the
/// directory name.
pub fn scan_directory(directory: &Path) -> Result<ShowcaseEntry> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_by_name(&mut images);
    tracing::debug!(directory = %directory.display(), count = images.len(), "scanned slide directory");

    let slides = images.into_iter().map(|path| local_slide(&path, None)).collect();

    Ok(ShowcaseEntry {
        title: directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        description: None,
        slides: SlideSet::new(slides),
        interval: None,
    })
}

fn sort_by_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
