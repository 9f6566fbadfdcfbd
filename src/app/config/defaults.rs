// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! Rotation timing bounds live with the domain newtype
//! ([`rotation_bounds`](crate::domain::slideshow::rotation_bounds)) and are
//! re-exported here so config code has one place to look.

pub use crate::domain::slideshow::rotation_bounds::{DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Whether hovering a slideshow pauses it.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Form relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Subject used when the contact form is opened without one.
pub const DEFAULT_CONTACT_SUBJECT: &str = "New message from the showcase";

/// Environment variable carrying the relay access key.
pub const ENV_RELAY_ACCESS_KEY: &str = "ICED_SHOWCASE_WEB3FORMS_KEY";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INTERVAL_MS >= MIN_INTERVAL_MS);
    assert!(!DEFAULT_RELAY_ENDPOINT.is_empty());
};
