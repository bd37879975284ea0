// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::portfolio::ImageId;
use crate::error::NetworkError;
use crate::gallery::{Gallery, LoadTicket};
use crate::media::ImageData;
use crate::navigation::{self, NavigationKey};
use crate::ui::grid;
use iced::{window, Size};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The initial list fetch finished.
    GalleryLoaded {
        ticket: LoadTicket,
        result: Result<Gallery, NetworkError>,
    },
    /// Bytes of one image arrived (or failed).
    ImageLoaded {
        ticket: LoadTicket,
        id: ImageId,
        result: Result<ImageData, NetworkError>,
    },
    Grid(grid::Message),
    /// Input from the open overlay's controls.
    Overlay(navigation::Message),
    /// Navigation key pressed and not captured by a widget.
    KeyPressed(NavigationKey),
    /// Window opened or resized.
    WindowResized(Size),
    WindowClosed(window::Id),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Base address of the portfolio service. Overrides `settings.toml`.
    pub base_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
