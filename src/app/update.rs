// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Section};
use crate::application::port::ContactRelay;
use crate::domain::contact::{self, ContactChannel};
use crate::domain::slideshow::Effect as RotationEffect;
use crate::error::{Error, RelayError};
use crate::infrastructure::ImageFetcher;
use crate::media::is_remote;
use crate::ui::contact_form::{self, Effect as ContactEffect};
use crate::ui::slideshow;
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub sections: &'a mut Vec<Section>,
    pub contact: &'a mut contact_form::State,
    pub relay: Option<&'a Arc<dyn ContactRelay>>,
    pub channel: &'a ContactChannel,
    pub warning: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Slideshow(id, message) => handle_slideshow_message(ctx, id, message),
        Message::Contact(message) => handle_contact_message(ctx, message),
        Message::ImageFetched {
            slideshow,
            source,
            result,
        } => {
            handle_image_fetched(ctx, slideshow, &source, result);
            Task::none()
        }
        Message::EmailComposerOpened(result) => {
            if let Err(err) = result {
                tracing::warn!(error = %err, "could not open the mail client");
            }
            Task::none()
        }
        Message::DismissWarning => {
            *ctx.warning = None;
            Task::none()
        }
    }
}

fn handle_slideshow_message(
    ctx: &mut UpdateContext<'_>,
    id: usize,
    message: slideshow::Message,
) -> Task<Message> {
    let Some(section) = ctx
        .sections
        .iter_mut()
        .find(|section| section.slideshow.id() == id)
    else {
        return Task::none();
    };

    match section.slideshow.update(message) {
        RotationEffect::TransitionStarted { from, to } => {
            tracing::debug!(slideshow = id, from, to, "transition started");
        }
        RotationEffect::Advanced { index } => {
            tracing::debug!(slideshow = id, index, "slide advanced");
        }
        RotationEffect::Paused => tracing::debug!(slideshow = id, "rotation paused"),
        RotationEffect::Resumed => tracing::debug!(slideshow = id, "rotation resumed"),
        RotationEffect::Reset | RotationEffect::TornDown | RotationEffect::None => {}
    }
    Task::none()
}

fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_form::Message,
) -> Task<Message> {
    if let (
        ContactChannel::Email { address },
        contact_form::Message::Open {
            subject,
            message: body,
        },
    ) = (ctx.channel, &message)
    {
        let subject = subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(ctx.contact.default_subject());
        let uri = contact::mailto_uri(address, subject, body.as_deref().unwrap_or_default());
        tracing::info!(%subject, "opening mail client");
        return Task::perform(
            async move { open::that_detached(uri).map_err(Error::from) },
            Message::EmailComposerOpened,
        );
    }

    match ctx.contact.update(message) {
        ContactEffect::None => Task::none(),
        ContactEffect::Send(submission) => {
            let Some(relay) = ctx.relay else {
                tracing::error!("contact relay unavailable");
                return Task::done(Message::Contact(contact_form::Message::Completed(Err(
                    RelayError::Network("relay unavailable".to_string()),
                ))));
            };
            tracing::info!(subject = %submission.subject, "submitting contact message");
            Task::perform(relay.submit(submission), |result| {
                Message::Contact(contact_form::Message::Completed(result))
            })
        }
    }
}

fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    id: usize,
    source: &str,
    result: Result<Vec<u8>, Error>,
) {
    match result {
        Ok(bytes) => {
            if let Some(section) = ctx
                .sections
                .iter_mut()
                .find(|section| section.slideshow.id() == id)
            {
                section.slideshow.set_image_bytes(source, bytes);
            }
        }
        // The slide keeps showing its alt text.
        Err(err) => tracing::warn!(%source, error = %err, "remote slide unavailable"),
    }
}

/// One download task per remote slide that has no image yet, all sharing
/// `fetcher`'s client.
pub fn fetch_remote_slides(sections: &[Section], fetcher: &ImageFetcher) -> Task<Message> {
    let tasks: Vec<Task<Message>> = sections
        .iter()
        .flat_map(|section| {
            let id = section.slideshow.id();
            section
                .slideshow
                .pending_sources()
                .filter(|source| is_remote(source))
                .map(move |source| {
                    let source = source.to_string();
                    Task::perform(fetcher.fetch(source.clone()), move |result| {
                        Message::ImageFetched {
                            slideshow: id,
                            source,
                            result,
                        }
                    })
                })
        })
        .collect();
    Task::batch(tasks)
}
