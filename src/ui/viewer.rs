use std::collections::HashMap;

use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{mouse, Alignment, Element, Length};

use crate::state::modal::ModalState;
use crate::Message;

const VIEWER_WIDTH: f32 = 840.0;
const IMAGE_HEIGHT: f32 = 560.0;

/// Lay the modal viewer over the gallery page.
///
/// Follows iced's modal composition: the page stays underneath, an
/// opaque backdrop captures clicks (closing the viewer), and the content
/// card floats centered on top.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    modal: &ModalState,
    full_images: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let Some(current) = modal.current() else {
        return base;
    };
    let (position, total) = modal.position();

    let picture: Element<'a, Message> = match full_images.get(&current.src) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .into(),
        None => container(text("Loading image…").size(16))
            .center_x(Length::Fill)
            .center_y(IMAGE_HEIGHT)
            .into(),
    };
    // Scroll gestures over the image navigate, the desktop stand-in for
    // swiping through a category
    let picture = mouse_area(picture).on_scroll(|delta| {
        let amount = match delta {
            mouse::ScrollDelta::Lines { x, y } => x + y,
            mouse::ScrollDelta::Pixels { x, y } => x + y,
        };
        if amount < 0.0 {
            Message::NextImage
        } else {
            Message::PreviousImage
        }
    });

    let header = row![
        text(current.alt.clone()).size(18),
        horizontal_space(),
        button(text("×").size(20))
            .on_press(Message::CloseModal)
            .padding(6),
    ]
    .align_y(Alignment::Center);

    let controls = row![
        button(text("‹").size(24))
            .on_press(Message::PreviousImage)
            .padding(8),
        text(format!("{position} / {total}")).size(14),
        button(text("›").size(24))
            .on_press(Message::NextImage)
            .padding(8),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let card = container(
        column![
            header,
            picture,
            container(controls).center_x(Length::Fill),
            container(text(current.category.clone()).size(13)).center_x(Length::Fill),
        ]
        .spacing(14),
    )
    .width(VIEWER_WIDTH)
    .padding(18)
    .style(container::rounded_box);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(card))).on_press(Message::CloseModal)
        )
    ]
    .into()
}
