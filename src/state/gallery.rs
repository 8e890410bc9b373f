use super::data::GalleryItem;

/// Number of items revealed per page of the gallery grid
pub const PAGE_SIZE: usize = 24;

/// The GalleryIndex owns every loaded gallery item plus the view state
/// derived from it: the active category filter and how many pages of the
/// filtered list are currently revealed.
///
/// `filtered` is always a re-derivation of `all_items` by category
/// equality; it is never mutated independently.
#[derive(Debug, Clone)]
pub struct GalleryIndex {
    all_items: Vec<GalleryItem>,
    filtered: Vec<GalleryItem>,
    current_filter: String,
    current_page: usize,
}

impl GalleryIndex {
    /// Create an empty index (used until the manifest load resolves,
    /// and when it fails)
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Build the index from freshly loaded items.
    /// Starts with the "all" filter and a single page revealed.
    pub fn from_items(items: Vec<GalleryItem>) -> Self {
        let filtered = items.clone();
        Self {
            all_items: items,
            filtered,
            current_filter: "all".to_string(),
            current_page: 1,
        }
    }

    /// Switch the active category filter.
    ///
    /// Resets pagination to one page and re-derives the filtered list by
    /// exact category match ("all" is a passthrough). An unknown category
    /// simply yields an empty filtered set.
    pub fn set_filter(&mut self, filter: &str) {
        self.current_filter = filter.to_string();
        self.current_page = 1;

        self.filtered = if filter == "all" {
            self.all_items.clone()
        } else {
            self.all_items
                .iter()
                .filter(|item| item.category == filter)
                .cloned()
                .collect()
        };
    }

    /// Reveal one more page of the filtered list.
    /// No-op once everything is already shown.
    pub fn load_more(&mut self) {
        if self.has_more() {
            self.current_page += 1;
        }
    }

    /// Number of items currently revealed:
    /// `min(current_page * PAGE_SIZE, filtered.len())`
    pub fn items_shown(&self) -> usize {
        (self.current_page * PAGE_SIZE).min(self.filtered.len())
    }

    /// The ordered slice of items the grid should render
    pub fn visible(&self) -> &[GalleryItem] {
        &self.filtered[..self.items_shown()]
    }

    /// Whether the "Load More" control should be visible
    pub fn has_more(&self) -> bool {
        self.current_page * PAGE_SIZE < self.filtered.len()
    }

    /// Every loaded item, in manifest order.
    /// The modal scopes its navigation list from here, not from the
    /// filtered view.
    pub fn all_items(&self) -> &[GalleryItem] {
        &self.all_items
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    pub fn len(&self) -> usize {
        self.all_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }
}

impl Default for GalleryIndex {
    fn default() -> Self {
        Self::new()
    }
}
