// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the grid and the overlay.
//!
//! ```
//! use iced_folio::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

pub mod opacity {
    /// Backdrop behind the overlay.
    pub const BACKDROP: f32 = 0.8;
    /// Placeholder tile while a thumbnail loads or after it failed.
    pub const PLACEHOLDER: f32 = 0.5;
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Width of the overlay's arrow buttons.
    pub const ARROW_BUTTON: f32 = 48.0;
    /// Maximum width of the overlay panel.
    pub const OVERLAY_MAX_WIDTH: f32 = 900.0;
    /// Maximum width of the grid column (the original "md" container).
    pub const CONTENT_MAX_WIDTH: f32 = 900.0;
}

pub mod typography {
    pub const TITLE: f32 = 40.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

/// Number of grid columns for a layout.
pub mod grid {
    pub const COMPACT_COLUMNS: usize = 1;
    pub const REGULAR_COLUMNS: usize = 3;
}
