// SPDX-License-Identifier: MPL-2.0
//! Iced host for a slide rotator.
//!
//! Timers are subscriptions derived from [`Rotator::armed_timers`]. Each one
//! is keyed by the slideshow id and the timer token, so arming a new token
//! starts a fresh countdown and disarming one drops (and cancels) its
//! subscription. While a transition runs, frame events drive the crossfade.

use crate::app::i18n::fluent::I18n;
use crate::domain::slideshow::{
    self as rotation, Effect, Layer, RotationInterval, Rotator, SlideSet, TRANSITION_DURATION,
};
use crate::media::is_remote;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Instant};
use iced::widget::{image, mouse_area, Container, Stack, Text};
use iced::{window, ContentFit, Element, Length, Padding, Subscription};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    Rotator(rotation::Message),
    /// A redraw frame while a transition is running.
    Frame(Instant),
}

/// One slideshow on the page.
#[derive(Debug)]
pub struct Slideshow {
    id: usize,
    rotator: Rotator,
    pause_on_hover: bool,
    transition_started: Option<Instant>,
    progress: f32,
    handles: HashMap<String, image::Handle>,
}

impl Slideshow {
    /// Mounts a slideshow. Local sources get image handles immediately;
    /// remote ones wait for [`Slideshow::set_image_bytes`].
    pub fn new(
        id: usize,
        slides: SlideSet,
        interval: RotationInterval,
        pause_on_hover: bool,
    ) -> Self {
        let handles = local_handles(&slides);
        Self {
            id,
            rotator: Rotator::mount(slides, interval),
            pause_on_hover,
            transition_started: None,
            progress: 0.0,
            handles,
        }
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Sources that need fetching before they can be drawn.
    pub fn pending_sources(&self) -> impl Iterator<Item = &str> {
        self.rotator
            .slides()
            .iter()
            .map(|slide| slide.source())
            .filter(|source| !self.handles.contains_key(*source))
    }

    pub fn set_image_bytes(&mut self, source: &str, bytes: Vec<u8>) {
        if self.rotator.slides().iter().any(|slide| slide.source() == source) {
            self.handles
                .insert(source.to_string(), image::Handle::from_bytes(bytes));
        }
    }

    /// Swaps in a new slide list. Image handles only change when the
    /// rotator accepts it; a torn-down slideshow keeps its old ones.
    pub fn reconfigure(&mut self, slides: SlideSet, interval: RotationInterval) -> Effect {
        let handles = local_handles(&slides);
        let effect = self.update(Message::Rotator(rotation::Message::Reconfigure {
            slides,
            interval,
        }));
        if effect == Effect::Reset {
            self.handles = handles;
        }
        effect
    }

    pub fn teardown(&mut self) -> Effect {
        self.update(Message::Rotator(rotation::Message::Teardown))
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Frame(now) => {
                if let Some(started) = self.transition_started {
                    let elapsed = now.saturating_duration_since(started);
                    self.progress =
                        (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0);
                }
                Effect::None
            }
            Message::Rotator(message) => {
                let effect = self.rotator.handle(message);
                match effect {
                    Effect::TransitionStarted { .. } => {
                        self.transition_started = Some(Instant::now());
                        self.progress = 0.0;
                    }
                    Effect::Advanced { .. } | Effect::Reset | Effect::TornDown => {
                        self.transition_started = None;
                        self.progress = 0.0;
                    }
                    Effect::None | Effect::Paused | Effect::Resumed => {}
                }
                effect
            }
        }
    }

    /// Timer and frame subscriptions, tagged with this slideshow's id.
    pub fn subscription(&self) -> Subscription<(usize, Message)> {
        let armed = self.rotator.armed_timers();
        let mut subscriptions = Vec::with_capacity(3);

        if let Some((token, period)) = armed.interval {
            subscriptions.push(time::every(period).with((self.id, token)).map(
                |((id, token), _)| (id, Message::Rotator(rotation::Message::IntervalElapsed(token))),
            ));
        }

        if let Some((token, duration)) = armed.transition {
            subscriptions.push(time::every(duration).with((self.id, token)).map(
                |((id, token), _)| {
                    (
                        id,
                        Message::Rotator(rotation::Message::TransitionElapsed(token)),
                    )
                },
            ));
            subscriptions.push(
                window::frames()
                    .with(self.id)
                    .map(|(id, at)| (id, Message::Frame(at))),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let render = self.rotator.render(self.progress);
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDESHOW_HEIGHT));

        for layer in &render.layers {
            stack = stack.push(self.layer_view(layer));
        }

        if self.rotator.slides().rotates() {
            let position = i18n.tr_with_args(
                "slideshow-position",
                &[
                    ("current", (self.rotator.current_index() + 1).into()),
                    ("total", self.rotator.slides().len().into()),
                ],
            );
            stack = stack.push(corner_badge(position, Vertical::Bottom));
        }

        if render.show_pause_indicator {
            stack = stack.push(corner_badge(
                format!("⏸ {}", i18n.tr("slideshow-paused")),
                Vertical::Top,
            ));
        }

        let framed = Container::new(stack)
            .width(Length::Fill)
            .style(styles::slide_frame);

        if self.pause_on_hover {
            mouse_area(framed)
                .on_enter(Message::Rotator(rotation::Message::Pause))
                .on_exit(Message::Rotator(rotation::Message::Resume))
                .into()
        } else {
            framed.into()
        }
    }

    fn layer_view<'a>(&'a self, layer: &Layer) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.handles.get(&layer.source) {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .opacity(layer.opacity)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(Text::new(layer.alt.clone()).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into(),
        };

        // Content is centered, so trimming twice the offset from the right
        // edge moves it left by the offset.
        let shift = (-layer.offset_x).max(0.0) * 2.0;
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::ZERO.right(shift))
            .into()
    }
}

fn corner_badge<'a>(label: String, vertical: Vertical) -> Element<'a, Message> {
    let badge = Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::pause_badge);

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Right)
        .align_y(vertical)
        .into()
}

fn local_handles(slides: &SlideSet) -> HashMap<String, image::Handle> {
    slides
        .iter()
        .filter(|slide| !is_remote(slide.source()))
        .map(|slide| {
            (
                slide.source().to_string(),
                image::Handle::from_path(slide.source()),
            )
        })
        .collect()
}
