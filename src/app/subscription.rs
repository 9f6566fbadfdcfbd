// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Each slideshow declares its own timers; they are tagged with the
//! slideshow id and routed back through [`Message::Slideshow`].

use super::{Message, Section};
use iced::Subscription;

/// Batches the timer and frame subscriptions of every slideshow.
pub fn create_slideshow_subscription(sections: &[Section]) -> Subscription<Message> {
    Subscription::batch(sections.iter().map(|section| {
        section
            .slideshow
            .subscription()
            .map(|(id, message)| Message::Slideshow(id, message))
    }))
}
