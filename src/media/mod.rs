// SPDX-License-Identifier: MPL-2.0
//! Slide media helpers: supported formats and animation probing.

use image_rs::AnimationDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;

/// Supported slide extensions
pub mod extensions {
    /// Image formats the slideshow can display.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

    /// Formats that may carry more than one frame.
    pub const MAYBE_ANIMATED_EXTENSIONS: &[&str] = &["gif", "webp"];
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
}

/// Whether a slide source must be fetched over HTTP rather than read from disk.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Whether `path` has a displayable image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    lowercase_extension(path)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Counts the frames in a GIF file.
fn count_gif_frames(path: &Path) -> crate::error::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let decoder = image_rs::codecs::gif::GifDecoder::new(reader)
        .map_err(|e| crate::error::Error::Io(e.to_string()))?;

    Ok(decoder.into_frames().count())
}

/// Animated WebP files carry `ANMF` chunks near the start of the file.
fn has_webp_animation_marker(path: &Path) -> crate::error::Result<bool> {
    let mut file = File::open(path)?;

    let mut buffer = vec![0u8; 1024];
    let bytes_read = file.read(&mut buffer)?;
    buffer.truncate(bytes_read);

    Ok(buffer.windows(4).any(|window| window == b"ANMF"))
}

/// Reads `path` to decide whether it animates on its own.
///
/// Only GIF and WebP are inspected; every other format is static.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or the GIF header is
/// unreadable.
pub fn probe_animated(path: &Path) -> crate::error::Result<bool> {
    match lowercase_extension(path).as_deref() {
        Some("gif") => Ok(count_gif_frames(path)? > 1),
        Some("webp") => has_webp_animation_marker(path),
        _ => Ok(false),
    }
}
