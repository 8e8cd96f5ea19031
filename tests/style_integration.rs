// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use cosmic_folio::ui::design_tokens::{palette, sizing, spacing};
    use cosmic_folio::ui::styles::{button, container};
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn active_entry_stands_out_from_idle_ones() {
        let theme = Theme::TokyoNight;

        let active = button::nav_active(&theme, Status::Active);
        let idle = button::nav_idle(&theme, Status::Active);

        assert_eq!(active.background, Some(Background::Color(palette::STAR_500)));
        assert!(idle.background.is_none());
        assert_ne!(active.text_color, idle.text_color);
    }

    #[test]
    fn idle_entries_react_to_hover() {
        let theme = Theme::TokyoNight;
        let hovered = button::nav_idle(&theme, Status::Hovered);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn adjacent_sections_alternate_shade() {
        let theme = Theme::TokyoNight;
        let even = container::section(0)(&theme);
        let odd = container::section(1)(&theme);
        let next_even = container::section(2)(&theme);

        assert_ne!(even.background, odd.background);
        assert_eq!(even.background, next_even.background);
    }

    #[test]
    fn navbar_leaves_room_for_content() {
        assert!(sizing::NAVBAR_HEIGHT < 480.0 / 4.0);
        assert!(spacing::XXL > spacing::XL);
    }
}
