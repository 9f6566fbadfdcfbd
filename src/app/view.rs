// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a scrollable column: hero, showcase cards, services and a
//! footer. The contact form, when open, is stacked on top as a modal layer.

use super::{Message, Section};
use crate::app::i18n::fluent::I18n;
use crate::domain::contact::Inquiry;
use crate::showcase::{Profile, Service};
use crate::ui::contact_form;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub sections: &'a [Section],
    pub services: &'a [Service],
    /// What the hero's contact button opens with.
    pub inquiry: &'a Inquiry,
    pub contact: &'a contact_form::State,
    pub year: i32,
    pub load_error: Option<&'a str>,
    /// i18n key of a startup warning.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    if let Some(key) = ctx.warning {
        page = page.push(warning_banner(i18n, key));
    }

    page = page.push(hero(i18n, ctx.profile, ctx.inquiry));
    page = page.push(Text::new(i18n.tr("showcase-heading")).size(typography::TITLE_MD));

    if let Some(detail) = ctx.load_error {
        page = page
            .push(
                Text::new(i18n.tr("showcase-load-error"))
                    .size(typography::BODY)
                    .color(styles::outcome_color(true)),
            )
            .push(
                Text::new(detail)
                    .size(typography::CAPTION)
                    .color(palette::ZINC_400),
            );
    } else if ctx.sections.is_empty() {
        page = page.push(Text::new(i18n.tr("showcase-empty")).size(typography::BODY));
    } else {
        for section in ctx.sections {
            page = page.push(section_card(i18n, section));
        }
    }

    if !ctx.services.is_empty() {
        page = page.push(Text::new(i18n.tr("services-heading")).size(typography::TITLE_MD));
        for service in ctx.services {
            page = page.push(service_card(i18n, service));
        }
    }

    let content: Element<'_, Message> = scrollable(
        Column::new()
            .push(
                Container::new(page)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(footer(i18n, ctx.profile, ctx.year)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into();

    match ctx.contact.view(i18n) {
        Some(modal) => Stack::new()
            .push(content)
            .push(modal.map(Message::Contact))
            .into(),
        None => content,
    }
}

fn hero<'a>(i18n: &'a I18n, profile: &'a Profile, inquiry: &Inquiry) -> Element<'a, Message> {
    let greeting = match &profile.name {
        Some(name) => i18n.tr_with_args("hero-greeting", &[("name", name.as_str().into())]),
        None => i18n.tr("window-title"),
    };

    let mut intro = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(greeting).size(typography::TITLE_LG));
    if let Some(tagline) = &profile.tagline {
        intro = intro.push(
            Text::new(tagline.as_str())
                .size(typography::BODY)
                .color(palette::ZINC_400),
        );
    }

    Row::new()
        .align_y(Vertical::Center)
        .push(intro)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("contact-open")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button_primary)
                .on_press(Message::Contact(contact_form::Message::inquiry(
                    inquiry.clone(),
                ))),
        )
        .into()
}

fn section_card<'a>(i18n: &'a I18n, section: &'a Section) -> Element<'a, Message> {
    let id = section.slideshow.id();
    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(section.title.as_str()).size(typography::TITLE_MD));

    if let Some(description) = &section.description {
        body = body.push(Text::new(description.as_str()).size(typography::BODY));
    }

    let prefill = i18n.tr_with_args(
        "showcase-contact-prefill",
        &[("title", section.title.as_str().into())],
    );

    body = body
        .push(
            section
                .slideshow
                .view(i18n)
                .map(move |message| Message::Slideshow(id, message)),
        )
        .push(
            button(Text::new(i18n.tr("showcase-contact-about")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button_ghost)
                .on_press(Message::Contact(contact_form::Message::Open {
                    subject: Some(section.title.clone()),
                    message: Some(prefill),
                })),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::card)
        .into()
}

fn service_card<'a>(i18n: &'a I18n, service: &'a Service) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(service.title.as_str()).size(typography::TITLE_MD));

    if let Some(description) = &service.description {
        body = body.push(Text::new(description.as_str()).size(typography::BODY));
    }

    let mut terms = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    if let Some(price) = &service.price {
        terms = terms.push(Text::new(price.as_str()).size(typography::TITLE_MD));
    }
    if let Some(delivery) = &service.delivery {
        terms = terms.push(
            Text::new(i18n.tr_with_args(
                "service-delivery",
                &[("delivery", delivery.as_str().into())],
            ))
            .size(typography::BODY)
            .color(palette::ZINC_400),
        );
    }

    body = body.push(terms).push(
        button(Text::new(i18n.tr("services-contact")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_primary)
            .on_press(Message::Contact(contact_form::Message::inquiry(
                service_inquiry(i18n, service),
            ))),
    );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::card)
        .into()
}

/// The inquiry a service's contact button opens with. Missing text is
/// derived from the service title.
pub(super) fn service_inquiry(i18n: &I18n, service: &Service) -> Inquiry {
    let title = [("title", FluentValue::from(service.title.as_str()))];
    Inquiry {
        subject: service
            .subject
            .clone()
            .unwrap_or_else(|| i18n.tr_with_args("service-inquiry-subject", &title)),
        message: service
            .message
            .clone()
            .unwrap_or_else(|| i18n.tr_with_args("service-inquiry-message", &title)),
    }
}

/// Copyright line, followed by the profile's footer note.
pub(super) fn footer_text(i18n: &I18n, profile: &Profile, year: i32) -> String {
    let name = profile
        .name
        .clone()
        .unwrap_or_else(|| i18n.tr("window-title"));
    let copyright = i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.to_string().into()), ("name", name.into())],
    );
    match &profile.footer {
        Some(note) => format!("{copyright} {note}"),
        None => copyright,
    }
}

fn footer<'a>(i18n: &I18n, profile: &Profile, year: i32) -> Element<'a, Message> {
    Container::new(Text::new(footer_text(i18n, profile, year)).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .style(styles::footer)
        .into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY)
                    .color(styles::outcome_color(true)),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("showcase-dismiss")).size(typography::CAPTION))
                    .style(styles::button_ghost)
                    .on_press(Message::DismissWarning),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    fn service(subject: Option<&str>, message: Option<&str>) -> Service {
        Service {
            title: "Landing Page".into(),
            description: None,
            price: Some("$250+".into()),
            delivery: Some("1-3 day".into()),
            subject: subject.map(Into::into),
            message: message.map(Into::into),
        }
    }

    #[test]
    fn service_inquiry_uses_manifest_text() {
        let inquiry = service_inquiry(
            &english(),
            &service(Some("Landing Page Inquiry"), Some("Hi, I need a landing page.")),
        );
        assert_eq!(inquiry.subject, "Landing Page Inquiry");
        assert_eq!(inquiry.message, "Hi, I need a landing page.");
    }

    #[test]
    fn service_inquiry_falls_back_to_title() {
        let inquiry = service_inquiry(&english(), &service(None, None));
        assert_eq!(inquiry.subject, "Landing Page Inquiry");
        assert!(inquiry
            .message
            .starts_with("Hi, I'm interested in Landing Page."));
    }

    #[test]
    fn footer_names_profile_and_year() {
        let profile = Profile {
            name: Some("Ada L.".into()),
            tagline: None,
            footer: Some("Available for freelance work.".into()),
        };
        assert_eq!(
            footer_text(&english(), &profile, 2026),
            "© 2026 Ada L. Available for freelance work."
        );
    }

    #[test]
    fn footer_without_profile_uses_app_name() {
        assert_eq!(
            footer_text(&english(), &Profile::default(), 2026),
            "© 2026 Showcase"
        );
    }
}
