// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navbar entry of the section currently in view.
pub fn nav_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::STAR_400,
        _ => palette::STAR_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::STAR_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Navbar entry of any other section.
pub fn nav_idle(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered => (Some(Background::Color(palette::VOID_700)), WHITE),
        button::Status::Pressed => (Some(Background::Color(palette::VOID_800)), WHITE),
        _ => (None, palette::DUST_300),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
