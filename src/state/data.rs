/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the manifest layer and the UI layer.

/// Represents a single image in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Sequential id assigned at manifest load (starts at 1)
    pub id: u32,
    /// Image path as served by the site (e.g. "/assets/images/gallery/realism/a.jpg")
    pub src: String,
    /// Alternative text for the image
    pub alt: String,
    /// Category tag driving the filter controls (e.g. "realism", "fineline")
    pub category: String,
}

impl GalleryItem {
    /// Build an item with the default alt text used across the gallery
    pub fn new(id: u32, src: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            alt: "Tattoo".to_string(),
            category: category.into(),
        }
    }
}
