use std::collections::{HashMap, HashSet};
use std::env;

use iced::keyboard::{self, key};
use iced::widget::{button, column, container, horizontal_space, image, row, scrollable, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;

mod error;
mod manifest;
mod state;
mod thumbs;
mod ui;

use manifest::generate::{self, GenerateSummary};
use manifest::loader;
use state::data::GalleryItem;
use state::gallery::GalleryIndex;
use state::modal::ModalState;

/// Site to browse when no base URL is given on the command line
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main application state
struct InkGallery {
    client: reqwest::Client,
    base_url: String,
    /// All loaded items plus filter/pagination view state
    index: GalleryIndex,
    /// The enlarged viewer state machine
    modal: ModalState,
    /// Grid thumbnails keyed by item src
    thumbnails: HashMap<String, image::Handle>,
    /// Full-size images for the viewer, keyed by item src
    full_images: HashMap<String, image::Handle>,
    /// Srcs already requested, so a repaint never refetches
    requested_thumbs: HashSet<String>,
    requested_full: HashSet<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The manifest load (including discovery fallback) settled
    ManifestLoaded(Result<Vec<GalleryItem>, String>),
    /// User clicked a category filter button
    SetFilter(String),
    /// User clicked the "Load More" button
    LoadMore,
    /// User clicked a thumbnail
    OpenModal(GalleryItem),
    CloseModal,
    NextImage,
    PreviousImage,
    /// A grid thumbnail finished fetching
    ThumbnailLoaded(String, Result<image::Handle, String>),
    /// A full-size viewer image finished fetching
    FullImageLoaded(String, Result<image::Handle, String>),
    /// User clicked "Regenerate Manifest"
    PickSiteRoot,
    /// Background manifest regeneration completed
    ManifestGenerated(Result<GenerateSummary, String>),
}

impl InkGallery {
    /// Create a new instance of the application and kick off the
    /// manifest load. Nothing renders as populated until that task
    /// settles, successfully or not.
    fn new() -> (Self, Task<Message>) {
        let base_url = env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::new();
        println!("🎨 Ink Gallery browsing {base_url}");

        let app = InkGallery {
            client: client.clone(),
            base_url: base_url.clone(),
            index: GalleryIndex::new(),
            modal: ModalState::default(),
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
            requested_thumbs: HashSet::new(),
            requested_full: HashSet::new(),
            status: "Loading gallery…".to_string(),
        };

        let load = Task::perform(loader::load(client, base_url), Message::ManifestLoaded);

        (app, load)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded(Ok(items)) => {
                let count = items.len();
                self.index = GalleryIndex::from_items(items);
                self.status = format!("Ready. {count} images in the gallery.");
                println!("🖼️  Gallery index loaded with {count} images");
                self.visible_thumbnail_tasks()
            }
            Message::ManifestLoaded(Err(reason)) => {
                // Silent degradation: an empty gallery, never a crash
                eprintln!("⚠️  Failed to load gallery manifest: {reason}");
                self.index = GalleryIndex::new();
                self.status = "Gallery unavailable. Is the site URL reachable?".to_string();
                Task::none()
            }
            Message::SetFilter(category) => {
                self.index.set_filter(&category);
                self.visible_thumbnail_tasks()
            }
            Message::LoadMore => {
                self.index.load_more();
                self.visible_thumbnail_tasks()
            }
            Message::OpenModal(item) => {
                self.modal.open_for(&item, self.index.all_items());
                self.modal_image_task()
            }
            Message::CloseModal => {
                self.modal.close();
                Task::none()
            }
            Message::NextImage => {
                if !self.modal.is_open() {
                    return Task::none();
                }
                self.modal.next();
                self.modal_image_task()
            }
            Message::PreviousImage => {
                if !self.modal.is_open() {
                    return Task::none();
                }
                self.modal.previous();
                self.modal_image_task()
            }
            Message::ThumbnailLoaded(src, Ok(handle)) => {
                self.thumbnails.insert(src, handle);
                Task::none()
            }
            Message::ThumbnailLoaded(src, Err(reason)) => {
                // The cell keeps its placeholder; src stays in
                // requested_thumbs so we do not hammer a broken image
                eprintln!("⚠️  Thumbnail fetch failed for {src}: {reason}");
                Task::none()
            }
            Message::FullImageLoaded(src, Ok(handle)) => {
                self.full_images.insert(src, handle);
                Task::none()
            }
            Message::FullImageLoaded(src, Err(reason)) => {
                eprintln!("⚠️  Image fetch failed for {src}: {reason}");
                Task::none()
            }
            Message::PickSiteRoot => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Site Root (folder containing assets/)")
                    .pick_folder();

                if let Some(site_root) = folder {
                    self.status = format!("Regenerating manifest in {}…", site_root.display());
                    return Task::perform(
                        generate::generate_async(site_root),
                        Message::ManifestGenerated,
                    );
                }

                Task::none()
            }
            Message::ManifestGenerated(Ok(summary)) => {
                self.status = format!(
                    "✅ Manifest regenerated: {} images across {} categories.",
                    summary.images, summary.categories
                );
                println!(
                    "📊 Wrote {} ({} images)",
                    summary.manifest_path.display(),
                    summary.images
                );
                Task::none()
            }
            Message::ManifestGenerated(Err(reason)) => {
                eprintln!("⚠️  Manifest regeneration failed: {reason}");
                self.status = "Manifest regeneration failed.".to_string();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Ink Gallery").size(32),
            horizontal_space(),
            button(text("Regenerate Manifest…").size(14))
                .on_press(Message::PickSiteRoot)
                .padding(8),
        ]
        .align_y(Alignment::Center);

        let mut page = column![
            header,
            text(&self.status).size(14),
            ui::grid::filter_bar(self.index.current_filter()),
            ui::grid::gallery_grid(self.index.visible(), &self.thumbnails),
        ]
        .spacing(20)
        .padding(30);

        if self.index.has_more() {
            page = page.push(container(ui::grid::load_more_button()).center_x(Length::Fill));
        }

        let base: Element<Message> = scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.modal.is_open() {
            ui::viewer::overlay(base, &self.modal, &self.full_images)
        } else {
            base
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Queue fetches for every visible thumbnail not yet requested
    fn visible_thumbnail_tasks(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for item in self.index.visible() {
            if self.requested_thumbs.contains(&item.src) {
                continue;
            }
            self.requested_thumbs.insert(item.src.clone());

            let url = thumbs::image_url(&self.base_url, &item.src);
            let src = item.src.clone();
            tasks.push(Task::perform(
                thumbs::fetch_thumbnail(self.client.clone(), url),
                move |result| Message::ThumbnailLoaded(src.clone(), result),
            ));
        }

        Task::batch(tasks)
    }

    /// Queue a full-size fetch for the image the modal is showing
    fn modal_image_task(&mut self) -> Task<Message> {
        let Some(current) = self.modal.current() else {
            return Task::none();
        };
        if self.full_images.contains_key(&current.src)
            || self.requested_full.contains(&current.src)
        {
            return Task::none();
        }

        let src = current.src.clone();
        self.requested_full.insert(src.clone());

        let url = thumbs::image_url(&self.base_url, &src);
        Task::perform(
            thumbs::fetch_full(self.client.clone(), url),
            move |result| Message::FullImageLoaded(src.clone(), result),
        )
    }
}

/// Keyboard shortcuts for the modal viewer.
/// Update ignores navigation messages while the viewer is closed.
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseModal),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousImage),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("Ink Gallery", InkGallery::update, InkGallery::view)
        .theme(InkGallery::theme)
        .subscription(InkGallery::subscription)
        .centered()
        .run_with(InkGallery::new)
}
