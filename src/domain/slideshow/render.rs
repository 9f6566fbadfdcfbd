// SPDX-License-Identifier: MPL-2.0
//! Framework-independent render description of a rotator.

use super::rotator::Rotator;

/// Horizontal distance the outgoing slide travels during a transition.
pub const TRANSITION_OFFSET: f32 = 16.0;

/// One image layer, listed bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub source: String,
    pub alt: String,
    pub opacity: f32,
    /// Horizontal offset in logical pixels (negative moves left).
    pub offset_x: f32,
}

/// What a host should draw for a rotator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderState {
    /// Zero, one, or two layers (two only while transitioning).
    pub layers: Vec<Layer>,
    pub show_pause_indicator: bool,
}

impl RenderState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Rotator {
    /// Describes the rotator at `progress` through the transition window
    /// (`0.0..=1.0`, ignored while idle).
    #[must_use]
    pub fn render(&self, progress: f32) -> RenderState {
        let Some(current) = self.current_slide() else {
            return RenderState::default();
        };

        let current_index = self.current_index();
        let mut layers = Vec::with_capacity(2);

        let progress = if self.is_transitioning() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        if self.is_transitioning() {
            let next_index = self.next_index();
            if let Some(next) = self.slides().get(next_index) {
                layers.push(Layer {
                    index: next_index,
                    source: next.source().to_string(),
                    alt: next.alt_text(next_index),
                    opacity: 1.0,
                    offset_x: 0.0,
                });
            }
        }

        layers.push(Layer {
            index: current_index,
            source: current.source().to_string(),
            alt: current.alt_text(current_index),
            opacity: 1.0 - progress,
            offset_x: -TRANSITION_OFFSET * progress,
        });

        RenderState {
            layers,
            show_pause_indicator: self.show_pause_indicator(),
        }
    }
}
