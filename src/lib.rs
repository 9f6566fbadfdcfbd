// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` is a portfolio page built with the Iced GUI framework.
//!
//! Each showcase entry is presented with an auto-advancing slideshow that
//! pauses while hovered and crossfades between slides. A modal contact form
//! relays messages to an HTTP form endpoint.
//!
//! # Architecture
//!
//! - [`domain`] - Pure types: the slide rotator state machine and contact submissions
//! - [`application`] - Ports implemented by infrastructure adapters
//! - [`infrastructure`] - HTTP relay, remote image download, tokio rotation driver
//! - [`showcase`] - Loading entries from a manifest or an image directory
//! - [`media`] - Image format detection and animation probing
//! - [`ui`] - Iced components
//! - [`app`] - Application shell, configuration and localization

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod showcase;
pub mod ui;
