// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned above the scrollable page.
//!
//! One button per section, highlighted while that section is active, followed
//! by the language picker.

use crate::content::Section;
use crate::i18n::fluent::I18n;
use crate::locale::Language;
use crate::navigation::SectionId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sections: &'a [Section],
    pub active: SectionId,
    pub language: Language,
    pub languages: Vec<Language>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionPressed(SectionId),
    LanguageSelected(Language),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(title)
        .push(Space::new().width(Length::Fill));

    for section in ctx.sections {
        row = row.push(section_button(ctx.i18n, section, &ctx.active));
    }

    let picker = pick_list(
        ctx.languages,
        Some(ctx.language),
        Message::LanguageSelected,
    )
    .placeholder(ctx.i18n.tr("language-picker-label"))
    .text_size(typography::BODY)
    .width(Length::Fixed(sizing::PICKER_WIDTH));

    row = row.push(picker);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

fn section_button<'a>(
    i18n: &I18n,
    section: &Section,
    active: &SectionId,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(section.nav_key)).size(typography::BODY);
    let style = if section.id == *active {
        styles::button::nav_active
    } else {
        styles::button::nav_idle
    };

    button(label)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::SectionPressed(section.id.clone()))
        .into()
}
