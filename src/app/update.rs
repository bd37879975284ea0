// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs synchronously on the update loop; the only work pushed
//! to the background is HTTP, returned as a [`Task`].

use super::Message;
use crate::domain::portfolio::ImageId;
use crate::error::NetworkError;
use crate::gallery::{Gallery, GalleryLoader, LoadTicket};
use crate::media::{self, ImageData, RemoteImage, RemoteService};
use crate::navigation::{self, Effect, GridNavigation, LayoutClass, NavigationKey};
use crate::ui::grid;
use iced::{Size, Task};
use std::collections::HashMap;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub service: Option<&'a RemoteService>,
    pub loader: &'a mut GalleryLoader,
    pub ticket: Option<LoadTicket>,
    pub gallery: &'a mut Gallery,
    pub grid: &'a mut GridNavigation,
    pub images: &'a mut HashMap<ImageId, RemoteImage>,
    pub layout: &'a mut Option<LayoutClass>,
    pub compact_width_threshold: f32,
}

impl UpdateContext<'_> {
    fn layout(&self) -> LayoutClass {
        self.layout.unwrap_or_default()
    }
}

/// Applies the list fetch result and starts fetching every thumbnail.
pub fn handle_gallery_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<Gallery, NetworkError>,
) -> Task<Message> {
    let Some(gallery) = ctx.loader.finish(ticket, result).cloned() else {
        return Task::none();
    };

    *ctx.grid = GridNavigation::from_gallery(&gallery);
    ctx.images.clear();
    let ids: Vec<ImageId> = gallery.iter().map(|d| d.id().clone()).collect();
    *ctx.gallery = gallery;

    let Some(service) = ctx.service else {
        return Task::none();
    };

    for id in &ids {
        ctx.images.insert(id.clone(), RemoteImage::Loading);
    }
    Task::batch(ids.into_iter().map(|id| fetch_image(service, ticket, id)))
}

/// Stores fetched image bytes if they belong to the live gallery.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    id: ImageId,
    result: Result<ImageData, NetworkError>,
) {
    if !ctx.loader.is_live(ticket) {
        return;
    }
    if let Err(err) = &result {
        tracing::warn!(%id, error = %err, "image fetch failed");
    }
    ctx.images.insert(id, RemoteImage::from(result));
}

pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::ItemPressed(index) => {
            let layout = ctx.layout();
            let effect = ctx.grid.open(index, layout);
            apply_effect(ctx, effect)
        }
    }
}

/// Routes overlay control input to the item whose overlay is open.
pub fn handle_overlay_message(
    ctx: &mut UpdateContext<'_>,
    message: navigation::Message,
) -> Task<Message> {
    let Some(index) = ctx.grid.open_index() else {
        return Task::none();
    };
    let effect = ctx.grid.handle(index, message);
    apply_effect(ctx, effect)
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, key: NavigationKey) -> Task<Message> {
    let effect = ctx.grid.handle_key(key);
    apply_effect(ctx, effect)
}

/// Classifies the layout from the first known window size. Later resizes
/// do not change it.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    if ctx.layout.is_none() {
        let layout = LayoutClass::from_width(size.width, ctx.compact_width_threshold);
        tracing::debug!(width = size.width, ?layout, "layout classified");
        *ctx.layout = Some(layout);
    }
}

/// The view is going away: drop any result still in flight.
pub fn handle_window_closed(ctx: &mut UpdateContext<'_>) {
    ctx.loader.cancel();
}

/// Reacts to a controller transition. A shown image that previously failed
/// is fetched again; everything else is already on screen or loading.
fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::Show { id, .. } => {
            let needs_fetch = ctx.images.get(&id).is_none_or(RemoteImage::is_failed);
            match (needs_fetch, ctx.service, ctx.ticket) {
                (true, Some(service), Some(ticket)) => {
                    ctx.images.insert(id.clone(), RemoteImage::Loading);
                    fetch_image(service, ticket, id)
                }
                _ => Task::none(),
            }
        }
        Effect::Hide | Effect::None => Task::none(),
    }
}

fn fetch_image(service: &RemoteService, ticket: LoadTicket, id: ImageId) -> Task<Message> {
    let service = service.clone();
    let request_id = id.clone();
    Task::perform(media::load_image(service, request_id), move |result| {
        Message::ImageLoaded {
            ticket,
            id: id.clone(),
            result,
        }
    })
}
