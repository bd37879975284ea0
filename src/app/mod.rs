// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery loader and
//! the per-item navigation controllers.
//!
//! The `App` struct wires together the domains (loader, grid, overlay) and
//! translates messages into side effects like remote fetches. The list is
//! fetched once at boot; everything after that is local state transitions
//! plus per-image fetches.
//!
//! # Module Structure
//!
//! - [`message`] - Message types and runtime flags
//! - [`update`] - Message handlers
//! - [`view`] - View rendering
//! - [`subscription`] - Event subscriptions
//! - [`paths`] - Config directory resolution

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::portfolio::ImageId;
use crate::gallery::{fetch_all, Gallery, GalleryLoader, LoadTicket};
use crate::media::{RemoteImage, RemoteService};
use crate::navigation::{GridNavigation, LayoutClass};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use update::UpdateContext;

/// Root Iced application state.
pub struct App {
    service: Option<RemoteService>,
    loader: GalleryLoader,
    ticket: Option<LoadTicket>,
    gallery: Gallery,
    grid: GridNavigation,
    images: HashMap<ImageId, RemoteImage>,
    /// Classified from the first window size, then fixed.
    layout: Option<LayoutClass>,
    thumbnail_size: f32,
    compact_width_threshold: f32,
}

const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the application.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and starts the gallery fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }
        Self::from_config(&config, flags.base_url.as_deref())
    }

    /// Builds the application from an already loaded config. `base_url`
    /// overrides the configured service address.
    fn from_config(config: &Config, base_url: Option<&str>) -> (Self, Task<Message>) {
        let base_url = base_url.unwrap_or_else(|| config.base_url());
        let mut loader = GalleryLoader::new();
        let ticket = loader.begin();

        let (service, task) = match RemoteService::new(base_url, config.request_timeout()) {
            Ok(service) => {
                tracing::info!(base_url = %service.base_url(), "fetching gallery");
                let task = match ticket {
                    Some(ticket) => Task::perform(
                        fetch_all(service.clone(), config.retry_policy()),
                        move |result| Message::GalleryLoaded { ticket, result },
                    ),
                    None => Task::none(),
                };
                (Some(service), task)
            }
            Err(err) => {
                if let Some(ticket) = ticket {
                    let _ = loader.finish(ticket, Err(err));
                }
                (None, Task::none())
            }
        };

        let app = Self {
            service,
            loader,
            ticket,
            gallery: Gallery::empty(),
            grid: GridNavigation::default(),
            images: HashMap::new(),
            layout: None,
            thumbnail_size: config.thumbnail_size(),
            compact_width_threshold: config.compact_width_threshold(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.grid.open_controller() {
            Some(controller) if !controller.current_description().is_empty() => {
                format!("{} - {}", controller.current_description(), paths::APP_NAME)
            }
            _ => format!("{} - {}", view::HEADING, paths::APP_NAME),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.grid.open_index().is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = UpdateContext {
            service: self.service.as_ref(),
            loader: &mut self.loader,
            ticket: self.ticket,
            gallery: &mut self.gallery,
            grid: &mut self.grid,
            images: &mut self.images,
            layout: &mut self.layout,
            compact_width_threshold: self.compact_width_threshold,
        };

        match message {
            Message::GalleryLoaded { ticket, result } => {
                update::handle_gallery_loaded(&mut ctx, ticket, result)
            }
            Message::ImageLoaded { ticket, id, result } => {
                update::handle_image_loaded(&mut ctx, ticket, id, result);
                Task::none()
            }
            Message::Grid(message) => update::handle_grid_message(&mut ctx, message),
            Message::Overlay(message) => update::handle_overlay_message(&mut ctx, message),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::WindowClosed(_) => {
                update::handle_window_closed(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            grid: &self.grid,
            images: &self.images,
            thumbnail_size: self.thumbnail_size,
            compact_width_threshold: self.compact_width_threshold,
            overlay_allowed: self.layout.unwrap_or_default().allows_overlay(),
        })
    }
}
