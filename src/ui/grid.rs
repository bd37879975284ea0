// SPDX-License-Identifier: MPL-2.0
//! Responsive thumbnail grid.
//!
//! Tiles are laid out in service order. The grid always shows each item's
//! own image, whatever its overlay is currently displaying.

use crate::domain::portfolio::{ImageDescriptor, ImageId};
use crate::gallery::Gallery;
use crate::media::RemoteImage;
use crate::ui::design_tokens::{grid, opacity, palette, spacing};
use iced::widget::{container, image, mouse_area, responsive, scrollable, Column, Row};
use iced::{mouse, Background, Color, ContentFit, Element, Length, Size};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Tile at this grid index was clicked.
    ItemPressed(usize),
}

pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub images: &'a HashMap<ImageId, RemoteImage>,
    pub thumbnail_size: f32,
    /// Widths below this render a single column.
    pub compact_width_threshold: f32,
    /// Whether clicking a tile can open the overlay (pointer cursor).
    pub clickable: bool,
}

/// Scrollable grid filling the available space. The column count follows
/// the width the grid is given.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |available: Size| {
        scrollable(view_inner(&ctx, available))
            .height(Length::Fill)
            .into()
    })
    .into()
}

/// Number of columns for the available width.
#[must_use]
pub fn columns_for_width(width: f32, compact_width_threshold: f32) -> usize {
    if width < compact_width_threshold {
        grid::COMPACT_COLUMNS
    } else {
        grid::REGULAR_COLUMNS
    }
}

fn view_inner<'a>(ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let columns = columns_for_width(available.width, ctx.compact_width_threshold);

    let mut tiles = ctx
        .gallery
        .iter()
        .enumerate()
        .map(|(index, descriptor)| tile(ctx, index, descriptor))
        .peekable();

    let mut rows = Column::new().spacing(spacing::XS).width(Length::Fill);
    while tiles.peek().is_some() {
        let mut row: Vec<Element<'a, Message>> = tiles.by_ref().take(columns).collect();
        while row.len() < columns {
            row.push(filler());
        }
        rows = rows.push(Row::with_children(row).spacing(spacing::XS));
    }

    rows.into()
}

fn tile<'a>(ctx: &ViewContext<'a>, index: usize, descriptor: &ImageDescriptor) -> Element<'a, Message> {
    let size = ctx.thumbnail_size;
    let content: Element<'a, Message> = match ctx.images.get(descriptor.id()).and_then(RemoteImage::handle) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(size))
            .into(),
        None => placeholder(size),
    };

    let interaction = if ctx.clickable {
        mouse::Interaction::Pointer
    } else {
        mouse::Interaction::default()
    };

    mouse_area(container(content).width(Length::Fill).padding(spacing::XXS))
        .interaction(interaction)
        .on_press(Message::ItemPressed(index))
        .into()
}

fn placeholder<'a>(size: f32) -> Element<'a, Message> {
    container(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(size))
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::PLACEHOLDER,
                ..palette::GRAY_400
            })),
            ..container::Style::default()
        })
        .into()
}

fn filler<'a>() -> Element<'a, Message> {
    container(Column::new()).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_width_uses_one_column() {
        assert_eq!(columns_for_width(320.0, 600.0), 1);
    }

    #[test]
    fn wide_width_uses_three_columns() {
        assert_eq!(columns_for_width(600.0, 600.0), 3);
        assert_eq!(columns_for_width(1920.0, 600.0), 3);
    }
}
