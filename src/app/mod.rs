// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase slideshows
//! and the contact form.
//!
//! The `App` struct wires together localization, settings, the showcase
//! content and the contact relay, and translates messages into side effects
//! like image downloads, relay submissions or opening the mail client.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ContactRelay;
use crate::domain::contact::{ContactChannel, Inquiry};
use crate::domain::slideshow::RotationInterval;
use crate::infrastructure::{ImageFetcher, Web3FormsRelay};
use crate::showcase::{self, Profile, Service, Showcase, ShowcaseEntry};
use crate::ui::contact_form;
use crate::ui::slideshow::Slideshow;
use chrono::Datelike;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A showcase entry paired with its running slideshow.
#[derive(Debug)]
pub struct Section {
    pub title: String,
    pub description: Option<String>,
    pub slideshow: Slideshow,
}

impl Section {
    fn new(
        id: usize,
        entry: ShowcaseEntry,
        default_interval: RotationInterval,
        pause_on_hover: bool,
    ) -> Self {
        let interval = entry.interval_or(default_interval);
        Self {
            title: entry.title,
            description: entry.description,
            slideshow: Slideshow::new(id, entry.slides, interval, pause_on_hover),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    profile: Profile,
    sections: Vec<Section>,
    services: Vec<Service>,
    /// What the header contact button opens with.
    inquiry: Inquiry,
    contact: contact_form::State,
    channel: ContactChannel,
    relay: Option<Arc<dyn ContactRelay>>,
    fetcher: Option<ImageFetcher>,
    /// Year shown in the footer.
    year: i32,
    /// Why the showcase could not be loaded, if it failed.
    load_error: Option<String>,
    /// i18n key of a warning raised during startup.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sections", &self.sections.len())
            .field("services", &self.services.len())
            .field("contact", &self.contact)
            .field("channel", &self.channel)
            .field("has_relay", &self.relay.is_some())
            .field("load_error", &self.load_error)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let inquiry = header_inquiry(&config::ContactConfig::default(), &i18n);
        Self {
            i18n,
            profile: Profile::default(),
            sections: Vec::new(),
            services: Vec::new(),
            inquiry,
            contact: contact_form::State::new(config::DEFAULT_CONTACT_SUBJECT),
            channel: ContactChannel::Form,
            relay: None,
            fetcher: None,
            year: chrono::Local::now().year(),
            load_error: None,
            warning: None,
        }
    }
}

/// The header button's inquiry: configured text, else the localized default.
fn header_inquiry(contact: &config::ContactConfig, i18n: &I18n) -> Inquiry {
    Inquiry {
        subject: contact
            .inquiry_subject
            .clone()
            .unwrap_or_else(|| i18n.tr("contact-inquiry-subject")),
        message: contact
            .inquiry_message
            .clone()
            .unwrap_or_else(|| i18n.tr("contact-inquiry-message")),
    }
}

impl App {
    /// Loads settings and the showcase named by `flags`, then starts
    /// downloading any remote slides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let default_interval = flags
            .interval_ms
            .map(RotationInterval::new)
            .unwrap_or_else(|| config.slideshow.interval());

        let (content, load_error) = match flags.path.as_deref() {
            Some(path) => match showcase::load(Path::new(path)) {
                Ok(content) => (content, None),
                Err(err) => {
                    tracing::error!(%path, error = %err, "failed to load showcase");
                    (Showcase::default(), Some(err.to_string()))
                }
            },
            None => (Showcase::default(), None),
        };

        let relay: Option<Arc<dyn ContactRelay>> = match Web3FormsRelay::new(
            config.contact.endpoint(),
            config.contact.resolved_access_key(),
        ) {
            Ok(relay) => {
                if !relay.has_access_key() {
                    tracing::warn!("no contact relay access key configured");
                }
                Some(Arc::new(relay))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to build contact relay");
                None
            }
        };

        let fetcher = match ImageFetcher::new() {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                tracing::error!(error = %err, "failed to build image client; remote slides stay empty");
                None
            }
        };

        let channel = config.contact.channel();
        let mut app = App {
            inquiry: header_inquiry(&config.contact, &i18n),
            i18n,
            profile: content.profile,
            services: content.services,
            contact: contact_form::State::new(config.contact.subject()),
            channel,
            relay,
            fetcher,
            load_error,
            warning: config_warning,
            ..Self::default()
        };
        app.set_entries(
            content.entries,
            default_interval,
            config.slideshow.pauses_on_hover(),
        );

        tracing::info!(
            sections = app.sections.len(),
            services = app.services.len(),
            interval_ms = default_interval.millis(),
            locale = %app.i18n.current_locale(),
            "showcase ready"
        );

        let task = app.fetch_remote_slides();
        (app, task)
    }

    fn fetch_remote_slides(&self) -> Task<Message> {
        match &self.fetcher {
            Some(fetcher) => update::fetch_remote_slides(&self.sections, fetcher),
            None => Task::none(),
        }
    }

    /// Replaces the page content. Old slideshows are torn down first so
    /// none of their timers survive.
    fn set_entries(
        &mut self,
        entries: Vec<ShowcaseEntry>,
        default_interval: RotationInterval,
        pause_on_hover: bool,
    ) {
        for section in &mut self.sections {
            section.slideshow.teardown();
        }
        self.sections = entries
            .into_iter()
            .enumerate()
            .map(|(id, entry)| Section::new(id, entry, default_interval, pause_on_hover))
            .collect();
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.contact.is_visible() {
            format!("{} - {app_name}", self.contact.subject())
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_slideshow_subscription(&self.sections)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            sections: &mut self.sections,
            contact: &mut self.contact,
            relay: self.relay.as_ref(),
            channel: &self.channel,
            warning: &mut self.warning,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            profile: &self.profile,
            sections: &self.sections,
            services: &self.services,
            inquiry: &self.inquiry,
            contact: &self.contact,
            year: self.year,
            load_error: self.load_error.as_deref(),
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slideshow::{self as rotation, SlideSet};
    use crate::error::RelayError;
    use crate::ui::slideshow;
    use futures_util::future::BoxFuture;

    fn entry(title: &str, sources: &[&str]) -> ShowcaseEntry {
        ShowcaseEntry {
            title: title.to_string(),
            description: None,
            slides: SlideSet::from_sources(sources.iter().copied(), Vec::<String>::new()),
            interval: None,
        }
    }

    fn app_with(entries: Vec<ShowcaseEntry>) -> App {
        let mut app = App::default();
        app.set_entries(entries, RotationInterval::default(), true);
        app
    }

    struct AlwaysOk;

    impl ContactRelay for AlwaysOk {
        fn submit(
            &self,
            _submission: crate::domain::contact::ContactSubmission,
        ) -> BoxFuture<'static, Result<(), RelayError>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn sections_get_distinct_ids() {
        let app = app_with(vec![entry("A", &["a.png", "b.png"]), entry("B", &["c.png"])]);
        let ids: Vec<_> = app.sections.iter().map(|s| s.slideshow.id()).collect();
        assert_eq!(ids, [0, 1]);
    }

    #[test]
    fn slideshow_messages_route_by_id() {
        let mut app = app_with(vec![
            entry("A", &["a.png", "b.png"]),
            entry("B", &["c.png", "d.png"]),
        ]);

        let _ = app.update(Message::Slideshow(
            1,
            slideshow::Message::Rotator(rotation::Message::Pause),
        ));

        assert!(!app.sections[0].slideshow.rotator().is_paused());
        assert!(app.sections[1].slideshow.rotator().is_paused());
    }

    #[test]
    fn unknown_slideshow_id_is_ignored() {
        let mut app = app_with(vec![entry("A", &["a.png", "b.png"])]);
        let _ = app.update(Message::Slideshow(
            9,
            slideshow::Message::Rotator(rotation::Message::Pause),
        ));
        assert!(!app.sections[0].slideshow.rotator().is_paused());
    }

    #[test]
    fn replacing_entries_rebuilds_sections() {
        let mut app = app_with(vec![entry("A", &["a.png", "b.png"])]);
        app.set_entries(vec![entry("B", &["c.png"])], RotationInterval::default(), true);
        assert_eq!(app.sections.len(), 1);
        assert_eq!(app.sections[0].title, "B");
    }

    #[test]
    fn contact_open_shows_modal_and_updates_title() {
        let mut app = App::default();
        let _ = app.update(Message::Contact(contact_form::Message::Open {
            subject: Some("Dashboard".into()),
            message: None,
        }));
        assert!(app.contact.is_visible());
        assert!(app.title().starts_with("Dashboard - "));
    }

    #[test]
    fn submit_without_relay_still_reports_failure() {
        let mut app = App::default();
        let _ = app.update(Message::Contact(contact_form::Message::NameChanged(
            "Jane".into(),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::EmailChanged(
            "jane@example.com".into(),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Insert('x')),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        assert!(app.contact.is_submitting());

        let _ = app.update(Message::Contact(contact_form::Message::Completed(Err(
            RelayError::Network("relay unavailable".into()),
        ))));
        assert!(!app.contact.is_submitting());
        assert_eq!(
            app.contact.outcome(),
            Some(crate::domain::contact::Outcome::Failed)
        );
    }

    #[test]
    fn submit_with_relay_marks_submitting() {
        let mut app = App {
            relay: Some(Arc::new(AlwaysOk)),
            ..App::default()
        };
        let _ = app.update(Message::Contact(contact_form::Message::NameChanged(
            "Jane".into(),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::EmailChanged(
            "jane@example.com".into(),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Insert('x')),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        assert!(app.contact.is_submitting());
    }

    #[test]
    fn failed_fetch_leaves_slide_pending() {
        let mut app = app_with(vec![entry("A", &["https://example.com/a.png"])]);
        let _ = app.update(Message::ImageFetched {
            slideshow: 0,
            source: "https://example.com/a.png".into(),
            result: Err(crate::error::Error::Fetch("HTTP status: 404".into())),
        });
        assert_eq!(app.sections[0].slideshow.pending_sources().count(), 1);

        let _ = app.update(Message::ImageFetched {
            slideshow: 0,
            source: "https://example.com/a.png".into(),
            result: Ok(vec![0, 1, 2]),
        });
        assert_eq!(app.sections[0].slideshow.pending_sources().count(), 0);
    }

    #[test]
    fn header_inquiry_prefers_configured_text() {
        let i18n = I18n::new(Some("en-US".into()), &config::Config::default());

        let localized = header_inquiry(&config::ContactConfig::default(), &i18n);
        assert_eq!(localized.subject, "Custom Work Inquiry");
        assert!(localized
            .message
            .starts_with("Hi, I'm interested in [your brilliant idea]."));

        let configured = config::ContactConfig {
            inquiry_subject: Some("Commission".into()),
            inquiry_message: Some("Hello!".into()),
            ..config::ContactConfig::default()
        };
        let inquiry = header_inquiry(&configured, &i18n);
        assert_eq!(inquiry.subject, "Commission");
        assert_eq!(inquiry.message, "Hello!");
    }

    #[test]
    fn header_inquiry_prefills_the_form() {
        let mut app = App::default();
        let inquiry = app.inquiry.clone();
        let _ = app.update(Message::Contact(contact_form::Message::inquiry(inquiry.clone())));
        assert!(app.contact.is_visible());
        assert_eq!(app.contact.subject(), inquiry.subject);
        assert!(app
            .contact
            .message_text()
            .starts_with(inquiry.message.lines().next().unwrap_or_default()));
    }

    #[test]
    fn email_channel_skips_the_form() {
        let mut app = App {
            channel: ContactChannel::Email {
                address: "ada@example.com".into(),
            },
            ..App::default()
        };
        // The returned task would open the mail client; it is never run here.
        let _task = app.update(Message::Contact(contact_form::Message::Open {
            subject: Some("Quick Fix Inquiry".into()),
            message: Some("Hi".into()),
        }));
        assert!(!app.contact.is_visible());
        assert!(!app.title().contains("Quick Fix Inquiry"));
    }

    #[test]
    fn failed_mail_client_launch_is_only_logged() {
        let mut app = App::default();
        let _ = app.update(Message::EmailComposerOpened(Err(crate::error::Error::Io(
            "no handler".into(),
        ))));
        assert!(!app.contact.is_visible());
        assert!(app.warning.is_none());
    }

    #[test]
    fn dismiss_clears_warning() {
        let mut app = App {
            warning: Some("notification-config-load-error".into()),
            ..App::default()
        };
        let _ = app.update(Message::DismissWarning);
        assert!(app.warning.is_none());
    }
}
