// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget of the portfolio.
//!
//! - **Palette**: Deep-space base colors and accents
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Fixed component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! ```
//! use cosmic_folio::ui::design_tokens::{palette, spacing};
//!
//! let padding = spacing::MD; // 16px
//! let accent = palette::STAR_400;
//! # let _ = (padding, accent);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Backgrounds, darkest first
    pub const VOID_900: Color = Color::from_rgb(0.035, 0.043, 0.09);
    pub const VOID_800: Color = Color::from_rgb(0.07, 0.08, 0.15);
    pub const VOID_700: Color = Color::from_rgb(0.12, 0.13, 0.22);

    // Accent (violet scale)
    pub const STAR_300: Color = Color::from_rgb(0.78, 0.72, 1.0);
    pub const STAR_400: Color = Color::from_rgb(0.64, 0.55, 0.98);
    pub const STAR_500: Color = Color::from_rgb(0.52, 0.42, 0.92);
    pub const STAR_600: Color = Color::from_rgb(0.42, 0.32, 0.8);

    pub const DUST_300: Color = Color::from_rgb(0.7, 0.72, 0.8);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the fixed navigation bar; the scrollable viewport is the
    /// window height minus this.
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    pub const PICKER_WIDTH: f32 = 140.0;

    /// Widest the section text column grows.
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// App name in the navbar
    pub const TITLE_MD: f32 = 20.0;

    /// Entry headings
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(sizing::NAVBAR_HEIGHT > 0.0);
};
