// SPDX-License-Identifier: MPL-2.0
//! Showcase content: who the page is about, the project entries (each with its
//! own slides) and the services on offer.

pub mod manifest;
pub mod scanner;

use crate::domain::slideshow::{RotationInterval, Slide, SlideSet};
use crate::error::{Error, Result};
use crate::media;
use std::path::Path;

/// One project on the showcase page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseEntry {
    pub title: String,
    pub description: Option<String>,
    pub slides: SlideSet,
    /// Per-entry rotation period; `None` uses the configured default.
    pub interval: Option<RotationInterval>,
}

impl ShowcaseEntry {
    /// Rotation period for this entry, falling back to `default`.
    #[must_use]
    pub fn interval_or(&self, default: RotationInterval) -> RotationInterval {
        self.interval.unwrap_or(default)
    }
}

/// A paid service, with the inquiry its contact button starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub title: String,
    pub description: Option<String>,
    /// Display price, e.g. `$75+`.
    pub price: Option<String>,
    /// Expected turnaround, e.g. `1-2 day`.
    pub delivery: Option<String>,
    /// Contact subject; `None` derives one from the title.
    pub subject: Option<String>,
    /// Prefilled contact message.
    pub message: Option<String>,
}

/// Hero and footer text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: Option<String>,
    pub tagline: Option<String>,
    /// Shown after the copyright line.
    pub footer: Option<String>,
}

/// Everything the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Showcase {
    pub profile: Profile,
    pub entries: Vec<ShowcaseEntry>,
    pub services: Vec<Service>,
}

/// Loads the showcase from a manifest file or an image directory.
///
/// A directory becomes a single entry with no profile or services.
///
/// # Errors
///
/// Fails when the path cannot be read, the manifest does not parse, or the
/// path is a file that is not a `.toml` manifest.
pub fn load(path: &Path) -> Result<Showcase> {
    if path.is_dir() {
        return scanner::scan_directory(path).map(|entry| Showcase {
            entries: vec![entry],
            ..Showcase::default()
        });
    }

    let is_manifest = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_manifest {
        manifest::load_manifest(path)
    } else {
        Err(Error::Manifest(format!(
            "{} is neither a directory nor a .toml manifest",
            path.display()
        )))
    }
}

/// Builds a slide for a local file, probing its contents for animation.
/// Probe failures keep the extension-based guess.
pub(crate) fn local_slide(path: &Path, alt: Option<String>) -> Slide {
    let slide = Slide::new(path.to_string_lossy().into_owned(), alt);
    if !path.exists() {
        return slide;
    }
    match media::probe_animated(path) {
        Ok(animated) => slide.with_animated(animated),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not probe slide");
            slide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directory_path_yields_single_entry() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("one.png"), b"").expect("write");

        let showcase = load(dir.path()).expect("load");
        assert_eq!(showcase.entries.len(), 1);
        assert_eq!(showcase.entries[0].slides.len(), 1);
        assert!(showcase.services.is_empty());
        assert_eq!(showcase.profile, Profile::default());
    }

    #[test]
    fn non_manifest_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"").expect("write");

        assert!(matches!(load(&path), Err(Error::Manifest(_))));
    }

    #[test]
    fn interval_or_prefers_entry_value() {
        let mut entry = ShowcaseEntry {
            title: "x".into(),
            description: None,
            slides: SlideSet::default(),
            interval: None,
        };
        let fallback = RotationInterval::new(5000);
        assert_eq!(entry.interval_or(fallback), fallback);

        entry.interval = Some(RotationInterval::new(2000));
        assert_eq!(entry.interval_or(fallback).millis(), 2000);
    }

    #[test]
    fn unreadable_gif_keeps_extension_guess() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.gif");
        std::fs::write(&path, b"not a gif").expect("write");

        assert!(local_slide(&path, None).is_animated());
    }
}
