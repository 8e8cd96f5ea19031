// SPDX-License-Identifier: MPL-2.0
//! Application root state and the wiring between locale resolution, section
//! tracking and the page UI.
//!
//! The `App` struct owns every collaborator: the [`LocaleResolver`] with its
//! durable store, the [`SectionTracker`] fed by the stacked
//! [`SectionLayout`], and the current route. Scroll events never touch the
//! tracker directly; they go through a [`FrameCoalescer`] and are applied on
//! the next animation frame.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{Config, WindowConfig, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::content;
use crate::i18n::fluent::I18n;
use crate::locale::route::{localize_path, Route, Router};
use crate::locale::{LanguageEnvironment, LocaleResolver, SystemLocale};
use crate::navigation::{
    FrameCoalescer, ScrollAnimation, SectionId, SectionLayout, SectionTracker, ViewportMetrics,
};
use crate::storage::{FileStore, PreferenceStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::SCROLLABLE_ID;
use crate::ui::{navbar, sections, styles};
use iced::alignment::Vertical;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, operation, Column, Container, Id, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub type Resolver = LocaleResolver<Box<dyn PreferenceStore>, Box<dyn LanguageEnvironment>>;

/// The route shown in the window title, kept in sync with the active
/// language and section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    path: String,
}

impl PageRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Router for PageRoute {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: String) {
        tracing::debug!(from = %self.path, to = %path, "Route changed");
        self.path = path;
    }
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    resolver: Resolver,
    route: PageRoute,
    tracker: SectionTracker,
    layout: SectionLayout,
    coalescer: FrameCoalescer<ViewportMetrics>,
    animation: Option<ScrollAnimation>,
    /// Last known viewport, from scroll reports or window size changes.
    viewport: ViewportMetrics,
    scroll_duration: Duration,
    /// Deep-linked section, scrolled to once the first layout exists.
    pending_section: Option<SectionId>,
    /// i18n keys of warnings not yet dismissed.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("active", &self.tracker.active())
            .field("viewport", &self.viewport)
            .field("animating", &self.animation.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings(window: &WindowConfig) -> window::Settings {
    let (width, height) = window.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// `config_warning` is the i18n key returned by [`crate::config::load`], if
/// loading failed.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    let settings = window_settings(&config.window);

    // iced 0.14 requires a `Fn` boot closure; every piece is cheap to clone.
    let boot = move || App::new(flags.clone(), config.clone(), config_warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let (store, storage_warning) = FileStore::open();
        let resolver: Resolver = LocaleResolver::new(
            Box::new(store),
            Box::new(SystemLocale),
            config.general.default_language,
        );

        let mut app = Self::with_resolver(&flags, &config, resolver);
        app.notices
            .extend(config_warning.into_iter().chain(storage_warning));
        (app, Task::none())
    }

    /// Builds the application around an existing resolver.
    ///
    /// Resolves the initial language, then applies `--lang` or the deep
    /// link's language segment as an explicit selection.
    pub fn with_resolver(flags: &Flags, config: &Config, mut resolver: Resolver) -> Self {
        let deep_link = flags.route.as_deref().map(Route::parse).unwrap_or_default();
        let initial = resolver.initialize(true);

        let mut notices = Vec::new();
        let start_path = flags.route.as_deref().unwrap_or("/");
        let mut route = PageRoute::new(localize_path(start_path, initial.code));
        let mut language = initial.code;

        let requested = flags
            .lang
            .clone()
            .or_else(|| deep_link.language.map(|language| language.code().to_string()));
        if let Some(code) = requested {
            match resolver.select_language(&code, &mut route) {
                Ok(preference) => language = preference.code,
                Err(err) => {
                    tracing::warn!(%code, "Ignoring requested language: {err}");
                    notices.push(err.i18n_key().to_string());
                }
            }
        }

        let pending_section = deep_link.section.as_deref().and_then(|slug| {
            let section = content::find(slug);
            if section.is_none() {
                tracing::warn!(%slug, "Unknown section in route");
            }
            section.map(|section| section.id.clone())
        });

        let mut layout = SectionLayout::new();
        let mut tracker =
            SectionTracker::new(content::default_section(), config.navigation.tracker_settings());
        for section in &content::SECTIONS {
            let slot = layout.push(section.id.clone(), section.min_height());
            tracker.register_section(section.id.clone(), slot);
        }

        Self {
            i18n: I18n::new(language),
            resolver,
            route,
            tracker,
            layout,
            coalescer: FrameCoalescer::new(),
            animation: None,
            viewport: ViewportMetrics::new(0.0, 0.0, 0.0),
            scroll_duration: config.navigation.scroll_duration(),
            pending_section,
            notices,
        }
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr("window-title"),
            self.route.current_path()
        )
    }

    fn theme(&self) -> Theme {
        Theme::TokyoNight
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.needs_frames());
        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar::Message::SectionPressed(id)) => {
                self.scroll_to(&id, Instant::now(), true)
            }
            Message::Navbar(navbar::Message::LanguageSelected(language)) => {
                self.select_language(language.code());
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.handle_scrolled(viewport);
                Task::none()
            }
            Message::Frame(now) => self.handle_frame(now),
            Message::WindowResized(height) => self.handle_resized(height),
            Message::DismissNotice => {
                if !self.notices.is_empty() {
                    self.notices.remove(0);
                }
                Task::none()
            }
            Message::WindowCloseRequested(_) => {
                self.shutdown();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            sections: &content::SECTIONS,
            active: self.tracker.active(),
            language: self.i18n.current_language(),
            languages: self.i18n.available_languages(),
        })
        .map(Message::Navbar);

        let page = sections::view(
            sections::ViewContext {
                i18n: &self.i18n,
                sections: &content::SECTIONS,
                layout: &self.layout,
            },
            Message::Scrolled,
        );

        let mut body = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page);
        if let Some(notice) = self.notice_view() {
            body = body.push(notice);
        }

        Column::new().push(navbar).push(body).into()
    }

    /// Warning banner floating over the bottom of the page, so it never
    /// changes the viewport height.
    fn notice_view(&self) -> Option<Element<'_, Message>> {
        let key = self.notices.first()?;

        let banner = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(self.i18n.tr(key))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(self.i18n.tr("notice-dismiss")).size(typography::BODY))
                    .style(styles::button::nav_active)
                    .on_press(Message::DismissNotice),
            );

        Some(
            Container::new(
                Container::new(banner)
                    .padding(spacing::SM)
                    .max_width(sizing::CONTENT_MAX_WIDTH)
                    .style(styles::container::notice),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into(),
        )
    }

    fn needs_frames(&self) -> bool {
        self.coalescer.is_pending() || self.animation.is_some()
    }

    fn handle_scrolled(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
        // The animation owns the scroll position; its final frame schedules
        // the recomputation.
        if self.animation.is_some() {
            return;
        }
        self.coalescer.submit(viewport);
    }

    fn handle_frame(&mut self, now: Instant) -> Task<Message> {
        if let Some(animation) = self.animation {
            let offset = animation.sample(now);
            if animation.is_finished(now) {
                self.animation = None;
                self.viewport.top = offset;
                self.coalescer.submit(self.viewport);
            }
            return self.snap_to(offset);
        }

        if let Some(viewport) = self.coalescer.flush() {
            self.recompute(viewport);
        }
        Task::none()
    }

    fn handle_resized(&mut self, window_height: f32) -> Task<Message> {
        let height = (window_height - sizing::NAVBAR_HEIGHT).max(0.0);
        let document_height = self.layout.relayout(height);
        let max_scroll = (document_height - height).max(0.0);
        self.viewport = ViewportMetrics::new(
            self.viewport.top.clamp(0.0, max_scroll),
            height,
            document_height,
        );
        self.coalescer.submit(self.viewport);

        match self.pending_section.take() {
            Some(id) => self.scroll_to(&id, Instant::now(), false),
            None => Task::none(),
        }
    }

    /// Starts a programmatic scroll to `id`. The section becomes active
    /// immediately; the recomputation after the scroll settles may refine it.
    fn scroll_to(&mut self, id: &SectionId, now: Instant, animate: bool) -> Task<Message> {
        let Some(top) = self.tracker.scroll_to_section(id) else {
            tracing::debug!(section = %id, "Ignoring scroll to unlaid-out section");
            return Task::none();
        };
        self.sync_route(id);

        let target = top.clamp(0.0, self.viewport.max_scroll());
        self.coalescer.cancel();

        if !animate || self.scroll_duration.is_zero() {
            self.animation = None;
            self.viewport.top = target;
            self.coalescer.submit(self.viewport);
            return self.snap_to(target);
        }

        self.animation = Some(ScrollAnimation::new(
            self.viewport.top,
            target,
            now,
            self.scroll_duration,
        ));
        Task::none()
    }

    fn snap_to(&self, offset: f32) -> Task<Message> {
        let max_scroll = self.viewport.max_scroll();
        let y = if max_scroll > 0.0 {
            (offset / max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        };
        operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
    }

    fn recompute(&mut self, viewport: ViewportMetrics) {
        let previous = self.tracker.active();
        let active = self.tracker.update(viewport);
        if active != previous {
            self.sync_route(&active);
        }
    }

    fn select_language(&mut self, code: &str) {
        match self.resolver.select_language(code, &mut self.route) {
            Ok(preference) => self.i18n.set_language(preference.code),
            Err(err) => {
                tracing::warn!(%code, "Language selection rejected: {err}");
                self.notices.push(err.i18n_key().to_string());
            }
        }
    }

    fn sync_route(&mut self, section: &SectionId) {
        let path = Route::new(self.resolver.current_language(), Some(section.as_str())).path();
        if path != self.route.current_path() {
            self.route.navigate(path);
        }
    }

    /// Cancels pending frame work; later scroll reports are ignored.
    fn shutdown(&mut self) {
        self.animation = None;
        self.coalescer.teardown();
        tracing::info!(dropped = self.coalescer.dropped(), "Navigation torn down");
    }
}
