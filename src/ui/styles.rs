// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action (send, open contact form).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::BLACK, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::DISABLED,
                ..palette::ZINC_900
            },
            shadow::SM,
        ),
        button::Status::Active | button::Status::Pressed => (palette::ZINC_900, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow,
        snap: true,
    }
}

/// Borderless icon button (modal close).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => Color { a: 0.9, ..text },
            _ => text,
        },
        border: Border::default(),
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Card surface for showcase entries and the contact form.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette::ZINC_400,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the contact modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Small pill drawn over a paused slideshow.
pub fn pause_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Frame around a slideshow viewport.
pub fn slide_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Full-width strip at the bottom of the page.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_900)),
        text_color: Some(palette::ZINC_400),
        ..Default::default()
    }
}

/// Text color for a contact outcome line.
#[must_use]
pub fn outcome_color(is_error: bool) -> Color {
    if is_error {
        palette::ERROR_400
    } else {
        palette::SUCCESS_500
    }
}
