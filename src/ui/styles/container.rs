// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fixed bar at the top of the window.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::VOID_900)),
        border: Border {
            color: palette::VOID_700,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Full-width section block. Alternates shade so adjacent sections read as
/// separate.
pub fn section(index: usize) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let shade = if index % 2 == 0 {
            palette::VOID_800
        } else {
            palette::VOID_900
        };
        container::Style {
            background: Some(Background::Color(shade)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }
}

/// Warning banner under the navbar.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.2,
            ..palette::WARNING_500
        })),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
