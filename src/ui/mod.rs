// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, exposes `update` returning an effect for the caller, and a
//! `view` producing its own message type.
//!
//! - [`slideshow`] - Auto-advancing slideshow with hover pause and crossfade
//! - [`contact_form`] - Modal contact form
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod contact_form;
pub mod design_tokens;
pub mod slideshow;
pub mod styles;
