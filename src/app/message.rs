// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::navigation::ViewportMetrics;
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// The page scrollable reported a new viewport.
    Scrolled(ViewportMetrics),
    /// Animation frame, only delivered while work is pending.
    Frame(Instant),
    /// Window opened or resized; carries the new logical height.
    WindowResized(f32),
    DismissNotice,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional language override (`pt`, `en` or `es`). Treated as an
    /// explicit selection, so it is persisted.
    pub lang: Option<String>,
    /// Optional deep link such as `/en/projects`.
    pub route: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `COSMIC_FOLIO_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `COSMIC_FOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
