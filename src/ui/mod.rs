// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`grid`] - Responsive thumbnail grid
//! - [`overlay`] - Full-view modal with arrow navigation
//! - [`design_tokens`] - Spacing, sizing and color constants

pub mod design_tokens;
pub mod grid;
pub mod overlay;
