/// UI widgets
///
/// Pure view helpers building `Element<Message>` trees from state:
/// - Filter bar, thumbnail grid, load-more control (grid.rs)
/// - The modal image viewer overlay (viewer.rs)

pub mod grid;
pub mod viewer;
