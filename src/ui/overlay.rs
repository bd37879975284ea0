// SPDX-License-Identifier: MPL-2.0
//! Full-view overlay: the current image with its caption between two arrow
//! buttons, over a translucent backdrop. Clicking the backdrop closes it.

use crate::media::RemoteImage;
use crate::navigation::{Message, NavigationInfo};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub description: &'a str,
    pub image: Option<&'a RemoteImage>,
    pub info: NavigationInfo,
}

/// Stacks the overlay on top of `base`.
pub fn modal<'a, M>(
    base: Element<'a, M>,
    ctx: ViewContext<'a>,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    stack![base, view(ctx).map(on_message)].into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backward = button(text("\u{2190}").size(typography::TITLE / 2.0))
        .width(Length::Fixed(sizing::ARROW_BUTTON))
        .on_press_maybe(ctx.info.can_move_backward.then_some(Message::MoveBackward));

    let forward = button(text("\u{2192}").size(typography::TITLE / 2.0))
        .width(Length::Fixed(sizing::ARROW_BUTTON))
        .on_press_maybe(ctx.info.can_move_forward.then_some(Message::MoveForward));

    let picture: Element<'a, Message> = match ctx.image.and_then(RemoteImage::handle) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .into(),
        None => {
            let label = if ctx.image.is_some_and(RemoteImage::is_failed) {
                "Image unavailable"
            } else {
                "Loading\u{2026}"
            };
            center(text(label).size(typography::BODY))
                .height(Length::Fixed(sizing::OVERLAY_MAX_WIDTH / 2.0))
                .into()
        }
    };

    let caption = text(ctx.description).size(typography::CAPTION);
    let counter = text(format!(
        "{} / {}",
        ctx.info.current_index + 1,
        ctx.info.total_count
    ))
    .size(typography::CAPTION);

    let body = column![picture, caption, counter]
        .spacing(spacing::MD)
        .width(Length::Fill);

    let panel = container(
        row![backward, body, forward]
            .spacing(spacing::MD)
            .align_y(Alignment::Center),
    )
    .padding(spacing::MD)
    .max_width(sizing::OVERLAY_MAX_WIDTH)
    .style(container::rounded_box);

    let backdrop = center(opaque(panel))
        .padding(spacing::LG)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            })),
            ..container::Style::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::Close))
}
