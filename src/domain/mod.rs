// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with no I/O and no framework types.
//!
//! # Modules
//!
//! - [`slideshow`]: Slide rotation ([`Rotator`](slideshow::Rotator),
//!   [`SlideSet`](slideshow::SlideSet), [`RotationInterval`](slideshow::RotationInterval))
//! - [`contact`]: Contact submissions ([`ContactSubmission`](contact::ContactSubmission))

pub mod contact;
pub mod slideshow;
