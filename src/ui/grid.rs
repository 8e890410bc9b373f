use std::collections::HashMap;

use iced::widget::{button, container, image, mouse_area, text, Column, Row};
use iced::{Element, Length};

use crate::manifest::KNOWN_CATEGORIES;
use crate::state::data::GalleryItem;
use crate::Message;

const GRID_COLUMNS: usize = 4;
const CELL_SIZE: f32 = 220.0;

/// Category filter buttons ("All" plus every known category).
/// The active filter's button is disabled, which doubles as its
/// highlight.
pub fn filter_bar<'a>(current_filter: &str) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(8);

    for category in std::iter::once("all").chain(KNOWN_CATEGORIES) {
        let mut control = button(text(label_for(category)).size(14)).padding(8);
        if category != current_filter {
            control = control.on_press(Message::SetFilter(category.to_string()));
        }
        bar = bar.push(control);
    }

    bar.into()
}

/// The visible slice of the gallery as a fixed-column thumbnail grid.
/// Cells without a fetched thumbnail yet render a placeholder.
pub fn gallery_grid<'a>(
    items: &[GalleryItem],
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    if items.is_empty() {
        return container(text("No images in this category yet.").size(16))
            .center_x(Length::Fill)
            .padding(40)
            .into();
    }

    let mut grid = Column::new().spacing(12);

    for chunk in items.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(12);
        for item in chunk {
            row = row.push(grid_cell(item, thumbnails.get(&item.src)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn grid_cell<'a>(item: &GalleryItem, thumbnail: Option<&image::Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(CELL_SIZE)
            .height(CELL_SIZE)
            .into(),
        None => container(text("…").size(24))
            .center_x(CELL_SIZE)
            .center_y(CELL_SIZE)
            .into(),
    };

    mouse_area(content)
        .on_press(Message::OpenModal(item.clone()))
        .into()
}

/// Shown only while more filtered items remain hidden
pub fn load_more_button<'a>() -> Element<'a, Message> {
    button(text("Load More").size(16))
        .on_press(Message::LoadMore)
        .padding(12)
        .into()
}

fn label_for(category: &str) -> String {
    if category == "all" {
        return "All".to_string();
    }
    category
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
