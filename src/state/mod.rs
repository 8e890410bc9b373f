/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The gallery index with filtering and pagination (gallery.rs)
/// - The modal viewer state machine (modal.rs)

pub mod data;
pub mod gallery;
pub mod modal;
