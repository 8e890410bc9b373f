use super::data::GalleryItem;

/// State machine for the enlarged image viewer.
///
/// Two states: Closed and Open. Opening scopes the navigation list to
/// every item sharing the clicked item's category (drawn from the full
/// index, not the active filter), and navigation wraps circularly in
/// both directions so a category can be browsed indefinitely.
///
/// Closing only clears the open flag: the stale list/index are harmless
/// because the next open fully re-derives them.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    open: bool,
    list: Vec<GalleryItem>,
    index: usize,
}

impl ModalState {
    /// Open the viewer on `item`, scoped to its category.
    ///
    /// The index is located by src equality since ids are not stable
    /// across reloads. Falling back to 0 is defensive only: `item`
    /// always originates from the same data the list is built from.
    pub fn open_for(&mut self, item: &GalleryItem, all_items: &[GalleryItem]) {
        self.list = all_items
            .iter()
            .filter(|candidate| candidate.category == item.category)
            .cloned()
            .collect();
        self.index = self
            .list
            .iter()
            .position(|candidate| candidate.src == item.src)
            .unwrap_or(0);
        self.open = true;
    }

    /// Advance to the next image, wrapping past the end
    pub fn next(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.list.len();
    }

    /// Step back to the previous image, wrapping past the start
    pub fn previous(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.index = (self.index + self.list.len() - 1) % self.list.len();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The item the viewer is currently showing
    pub fn current(&self) -> Option<&GalleryItem> {
        self.list.get(self.index)
    }

    /// One-based position caption, e.g. (2, 5) renders as "2 / 5"
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new(1, "a.jpg", "color"),
            GalleryItem::new(2, "b.jpg", "color"),
            GalleryItem::new(3, "c.jpg", "realism"),
        ]
    }

    #[test]
    fn test_open_scopes_to_category() {
        let items = sample_items();
        let mut modal = ModalState::default();

        modal.open_for(&items[1], &items);

        assert!(modal.is_open());
        assert_eq!(modal.position(), (2, 2));
        assert_eq!(modal.current().unwrap().src, "b.jpg");
    }

    #[test]
    fn test_navigation_wraps_both_directions() {
        let items = sample_items();
        let mut modal = ModalState::default();
        modal.open_for(&items[1], &items);

        // From b.jpg (index 1 of 2), next wraps to a.jpg
        modal.next();
        assert_eq!(modal.current().unwrap().src, "a.jpg");

        // Previous from index 0 wraps back to b.jpg
        modal.previous();
        assert_eq!(modal.current().unwrap().src, "b.jpg");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let items: Vec<GalleryItem> = (0..5)
            .map(|i| GalleryItem::new(i + 1, format!("{i}.jpg"), "color"))
            .collect();
        let mut modal = ModalState::default();
        modal.open_for(&items[2], &items);

        let start = modal.current().unwrap().src.clone();
        for _ in 0..items.len() {
            modal.next();
        }
        assert_eq!(modal.current().unwrap().src, start);
    }

    #[test]
    fn test_previous_inverts_next() {
        let items = sample_items();
        let mut modal = ModalState::default();
        modal.open_for(&items[0], &items);

        let before = modal.position();
        modal.next();
        modal.previous();
        assert_eq!(modal.position(), before);
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let mut modal = ModalState::default();
        let orphan = GalleryItem::new(1, "x.jpg", "nowhere");

        modal.open_for(&orphan, &[]);
        modal.next();
        modal.previous();

        assert!(modal.current().is_none());
        assert_eq!(modal.position(), (1, 0));
    }

    #[test]
    fn test_missing_src_defaults_to_first() {
        let items = sample_items();
        let mut modal = ModalState::default();
        // Same category as the list but a src that is not in it
        let stranger = GalleryItem::new(9, "z.jpg", "color");

        modal.open_for(&stranger, &items);

        assert_eq!(modal.position(), (1, 2));
        assert_eq!(modal.current().unwrap().src, "a.jpg");
    }

    #[test]
    fn test_reopen_rederives_scope() {
        let items = sample_items();
        let mut modal = ModalState::default();

        modal.open_for(&items[0], &items);
        modal.close();
        assert!(!modal.is_open());

        // Stale list/index from the previous open must not leak through
        modal.open_for(&items[2], &items);
        assert_eq!(modal.position(), (1, 1));
        assert_eq!(modal.current().unwrap().category, "realism");
    }
}
