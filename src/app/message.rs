// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{contact_form, slideshow};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message for the slideshow with the given id.
    Slideshow(usize, slideshow::Message),
    Contact(contact_form::Message),
    /// A remote slide finished downloading.
    ImageFetched {
        slideshow: usize,
        source: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The `mailto:` link was handed to the system, or failed to be.
    EmailComposerOpened(Result<(), Error>),
    /// Hide the startup warning banner.
    DismissWarning,
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest `.toml` or image directory to show.
    pub path: Option<String>,
    /// Rotation interval override in milliseconds.
    pub interval_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHOWCASE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
