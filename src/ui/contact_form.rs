// SPDX-License-Identifier: MPL-2.0
//! Modal contact form.
//!
//! The form owns its fields and the submit lifecycle. Sending is delegated to
//! the caller through [`Effect::Send`]; the caller reports back with
//! [`Message::Completed`].

use crate::app::i18n::fluent::I18n;
use crate::domain::contact::{ContactSubmission, Inquiry, InvalidField, Outcome};
use crate::error::RelayError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, mouse_area, opaque, text_editor, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{Element, Length};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    /// Show the form, optionally with a subject and a prefilled message.
    Open {
        subject: Option<String>,
        message: Option<String>,
    },
    /// Close button or a click outside the form.
    Close,
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    Completed(Result<(), RelayError>),
}

impl Message {
    /// Opens the form with `inquiry` filled in.
    #[must_use]
    pub fn inquiry(inquiry: Inquiry) -> Self {
        Message::Open {
            subject: Some(inquiry.subject),
            message: Some(inquiry.message),
        }
    }
}

/// What the caller must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver this submission and answer with [`Message::Completed`].
    Send(ContactSubmission),
}

pub struct State {
    visible: bool,
    default_subject: String,
    subject: String,
    name: String,
    email: String,
    message: text_editor::Content,
    submitting: bool,
    outcome: Option<Outcome>,
    invalid: Option<InvalidField>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("visible", &self.visible)
            .field("subject", &self.subject)
            .field("submitting", &self.submitting)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(default_subject: impl Into<String>) -> Self {
        let default_subject = default_subject.into();
        Self {
            visible: false,
            subject: default_subject.clone(),
            default_subject,
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
            submitting: false,
            outcome: None,
            invalid: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Subject used when an open request carries none.
    #[must_use]
    pub fn default_subject(&self) -> &str {
        &self.default_subject
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.text()
    }

    #[must_use]
    pub fn invalid_field(&self) -> Option<InvalidField> {
        self.invalid
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Open { subject, message } => {
                self.subject = subject
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| self.default_subject.clone());
                if let Some(text) = message {
                    self.message = text_editor::Content::with_text(&text);
                }
                self.outcome = None;
                self.invalid = None;
                self.visible = true;
                Effect::None
            }
            Message::Close => {
                self.visible = false;
                Effect::None
            }
            Message::NameChanged(name) => {
                self.name = name;
                Effect::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                Effect::None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::Completed(result) => {
                if !self.submitting {
                    return Effect::None;
                }
                self.submitting = false;
                match result {
                    Ok(()) => {
                        tracing::info!(subject = %self.subject, "contact message sent");
                        self.outcome = Some(Outcome::Sent);
                        self.name.clear();
                        self.email.clear();
                        self.message = text_editor::Content::new();
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, key = err.i18n_key(), "contact message failed");
                        self.outcome = Some(Outcome::Failed);
                    }
                }
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.submitting {
            return Effect::None;
        }
        match ContactSubmission::new(&self.subject, &self.name, &self.email, &self.message.text()) {
            Ok(submission) => {
                self.submitting = true;
                self.outcome = None;
                self.invalid = None;
                Effect::Send(submission)
            }
            Err(field) => {
                self.invalid = Some(field);
                Effect::None
            }
        }
    }

    /// The modal layer, or `None` while hidden.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        if !self.visible {
            return None;
        }

        let header = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(self.subject.as_str()).size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("✕").size(typography::TITLE_MD))
                    .on_press(Message::Close)
                    .style(styles::button_ghost),
            );

        let name = labeled(
            i18n.tr("contact-name-label"),
            text_input(&i18n.tr("contact-name-placeholder"), &self.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS)
                .into(),
        );
        let email = labeled(
            i18n.tr("contact-email-label"),
            text_input(&i18n.tr("contact-email-placeholder"), &self.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::XS)
                .into(),
        );
        let message = labeled(
            i18n.tr("contact-message-label"),
            text_editor(&self.message)
                .placeholder(i18n.tr("contact-message-placeholder"))
                .on_action(Message::MessageEdited)
                .padding(spacing::XS)
                .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT))
                .into(),
        );

        let send_label = if self.submitting {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-send")
        };
        let send = button(
            Container::new(Text::new(send_label).size(typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button_primary)
        .on_press_maybe((!self.submitting).then_some(Message::Submit));

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(name)
            .push(email)
            .push(message)
            .push(send);

        if let Some(field) = self.invalid {
            form = form.push(
                Text::new(i18n.tr(field.i18n_key()))
                    .size(typography::CAPTION)
                    .color(styles::outcome_color(true)),
            );
        }

        if let Some(outcome) = self.outcome {
            form = form.push(
                Container::new(
                    Text::new(i18n.tr(outcome.i18n_key()))
                        .size(typography::BODY)
                        .color(styles::outcome_color(outcome.is_error())),
                )
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            );
        }

        let card = Container::new(form)
            .padding(spacing::XL)
            .max_width(sizing::CONTACT_FORM_MAX_WIDTH)
            .style(styles::card);

        let backdrop = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::backdrop),
        )
        .on_press(Message::Close);

        let centered = Container::new(opaque(card))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        Some(Stack::new().push(backdrop).push(centered).into())
    }
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(field)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::new("Hello");
        state.update(Message::Open {
            subject: None,
            message: Some("I'm interested in the dashboard".into()),
        });
        state.update(Message::NameChanged("Jane".into()));
        state.update(Message::EmailChanged("jane@example.com".into()));
        state
    }

    #[test]
    fn open_uses_default_subject_and_prefill() {
        let mut state = State::new("Hello");
        assert!(!state.is_visible());
        state.update(Message::Open {
            subject: Some("Dashboard".into()),
            message: Some("About the dashboard".into()),
        });
        assert!(state.is_visible());
        assert_eq!(state.subject(), "Dashboard");
        assert!(state.message_text().starts_with("About the dashboard"));

        state.update(Message::Open {
            subject: Some("   ".into()),
            message: None,
        });
        assert_eq!(state.subject(), "Hello");
    }

    #[test]
    fn close_hides_form() {
        let mut state = filled();
        state.update(Message::Close);
        assert!(!state.is_visible());
        assert_eq!(state.name(), "Jane");
    }

    #[test]
    fn submit_emits_one_request_and_blocks_resubmit() {
        let mut state = filled();
        let effect = state.update(Message::Submit);
        match effect {
            Effect::Send(submission) => {
                assert_eq!(submission.subject, "Hello");
                assert_eq!(submission.name, "Jane");
                assert_eq!(submission.email, "jane@example.com");
            }
            Effect::None => panic!("expected a send effect"),
        }
        assert!(state.is_submitting());
        assert_eq!(state.update(Message::Submit), Effect::None);
    }

    #[test]
    fn invalid_input_does_not_send() {
        let mut state = State::new("Hello");
        state.update(Message::NameChanged("Jane".into()));
        state.update(Message::EmailChanged("not-an-email".into()));
        assert_eq!(state.update(Message::Submit), Effect::None);
        assert!(!state.is_submitting());
        assert_eq!(state.invalid_field(), Some(InvalidField::Email));
    }

    #[test]
    fn success_resets_fields_but_keeps_subject() {
        let mut state = filled();
        state.update(Message::Submit);
        state.update(Message::Completed(Ok(())));

        assert_eq!(state.outcome(), Some(Outcome::Sent));
        assert!(!state.is_submitting());
        assert!(state.name().is_empty());
        assert!(state.email().is_empty());
        assert!(state.message_text().trim().is_empty());
        assert_eq!(state.subject(), "Hello");
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut state = filled();
        state.update(Message::Submit);
        state.update(Message::Completed(Err(RelayError::HttpStatus(500))));

        assert_eq!(state.outcome(), Some(Outcome::Failed));
        assert!(!state.is_submitting());
        assert_eq!(state.name(), "Jane");
    }

    #[test]
    fn completion_without_pending_submit_is_ignored() {
        let mut state = filled();
        state.update(Message::Completed(Ok(())));
        assert!(state.outcome().is_none());
        assert_eq!(state.name(), "Jane");
    }

    #[test]
    fn reopening_clears_previous_outcome() {
        let mut state = filled();
        state.update(Message::Submit);
        state.update(Message::Completed(Err(RelayError::MissingAccessKey)));
        state.update(Message::Open {
            subject: None,
            message: None,
        });
        assert!(state.outcome().is_none());
    }

    #[test]
    fn inquiry_fills_subject_and_message() {
        let mut state = State::new("Hello");
        state.update(Message::inquiry(Inquiry {
            subject: "Quick Fix Inquiry".into(),
            message: "Hi, I have a problem for you to solve.".into(),
        }));
        assert!(state.is_visible());
        assert_eq!(state.subject(), "Quick Fix Inquiry");
        assert_eq!(state.default_subject(), "Hello");
        assert!(state
            .message_text()
            .starts_with("Hi, I have a problem for you to solve."));
    }
}
