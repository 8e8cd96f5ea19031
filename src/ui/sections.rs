// SPDX-License-Identifier: MPL-2.0
//! The scrollable page: every section stacked as a fixed-height block.
//!
//! Block heights come from [`SectionLayout`] so the geometry the tracker
//! reads is exactly the geometry drawn on screen.

use crate::content::{self, Section};
use crate::i18n::fluent::I18n;
use crate::navigation::{SectionLayout, ViewportMetrics};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::{FluentArgs, FluentValue};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Identifier of the page scrollable, used for programmatic scrolling.
pub const SCROLLABLE_ID: &str = "cosmic-folio-page";

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sections: &'a [Section],
    pub layout: &'a SectionLayout,
}

/// Converts iced's scroll report into tracker input.
#[must_use]
pub fn viewport_metrics(viewport: &Viewport) -> ViewportMetrics {
    ViewportMetrics::new(
        viewport.absolute_offset().y,
        viewport.bounds().height,
        viewport.content_bounds().height,
    )
}

/// Render the page. `on_scroll` receives the viewport after every scroll.
pub fn view<'a, Message: 'a>(
    ctx: ViewContext<'a>,
    on_scroll: impl Fn(ViewportMetrics) -> Message + 'a,
) -> Element<'a, Message> {
    let blocks = ctx
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| block(&ctx, index, section));

    Scrollable::new(Column::with_children(blocks).width(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(move |viewport| on_scroll(viewport_metrics(&viewport)))
        .into()
}

fn block<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    section: &Section,
) -> Element<'a, Message> {
    let height = ctx
        .layout
        .height_of(&section.id)
        .unwrap_or_else(|| section.min_height());

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr(section.title_key)).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr(section.intro_key)).size(typography::BODY_LG));

    if section.id == content::HOME {
        column = column.push(
            Text::new(ctx.i18n.tr("app-tagline"))
                .size(typography::BODY_LG)
                .color(palette::STAR_300),
        );
    }

    if section.id == content::ABOUT {
        let mut args = FluentArgs::new();
        args.set("years", FluentValue::from(content::YEARS_OF_EXPERIENCE));
        column = column.push(
            Text::new(ctx.i18n.tr_with_args("about-experience", &args)).size(typography::BODY_LG),
        );
    }

    for entry in section.entries {
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr(entry.title_key))
                        .size(typography::TITLE_SM)
                        .color(palette::STAR_400),
                )
                .push(
                    Text::new(ctx.i18n.tr(entry.detail_key))
                        .size(typography::BODY)
                        .color(palette::DUST_300),
                ),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .style(styles::container::section(index))
        .into()
}
