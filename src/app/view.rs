// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a heading above a scrollable grid. When an item's overlay is
//! open it is stacked over the whole page.

use super::Message;
use crate::domain::portfolio::ImageId;
use crate::gallery::Gallery;
use crate::media::RemoteImage;
use crate::navigation::GridNavigation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{grid, overlay};
use iced::widget::{column, container, text};
use iced::{Element, Length};
use std::collections::HashMap;

pub const HEADING: &str = "Portfolio";
pub const TAGLINE: &str = "Digital and film photography";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub grid: &'a GridNavigation,
    pub images: &'a HashMap<ImageId, RemoteImage>,
    pub thumbnail_size: f32,
    pub compact_width_threshold: f32,
    pub overlay_allowed: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = column![
        text(HEADING).size(typography::TITLE),
        text(TAGLINE).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS);

    let gallery = grid::view(grid::ViewContext {
        gallery: ctx.gallery,
        images: ctx.images,
        thumbnail_size: ctx.thumbnail_size,
        compact_width_threshold: ctx.compact_width_threshold,
        clickable: ctx.overlay_allowed,
    })
    .map(Message::Grid);

    let page: Element<'_, Message> = container(
        column![header, gallery]
            .spacing(spacing::MD)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .padding(spacing::LG)
    .center_x(Length::Fill)
    .height(Length::Fill)
    .into();

    match ctx.grid.open_controller() {
        Some(controller) => overlay::modal(
            page,
            overlay::ViewContext {
                description: controller.current_description(),
                image: ctx.images.get(controller.current_id()),
                info: controller.info(),
            },
            Message::Overlay,
        ),
        None => page,
    }
}
