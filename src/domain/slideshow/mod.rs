// SPDX-License-Identifier: MPL-2.0
//! Slideshow domain: slides, rotation timing, and the rotator state machine.

pub mod newtypes;
pub mod render;
pub mod rotator;
pub mod slide;

pub use newtypes::{rotation_bounds, RotationInterval, TimerToken, TRANSITION_DURATION};
pub use render::{Layer, RenderState, TRANSITION_OFFSET};
pub use rotator::{ArmedTimers, Effect, Message, Phase, Rotator};
pub use slide::{fallback_alt, Slide, SlideSet};
