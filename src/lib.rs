// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photo portfolio client built with the Iced GUI framework.
//!
//! It fetches an ordered image list from a remote service once, renders it as
//! a responsive grid, and lets the user browse the images in a modal overlay
//! with arrow buttons or the keyboard.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod media;
pub mod navigation;
pub mod ui;
