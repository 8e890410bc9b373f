/// Gallery manifest module
///
/// This module handles:
/// - Fetching and flattening the gallery manifest (loader.rs)
/// - Directory-listing discovery for dev servers (discover.rs)
/// - Regenerating the manifest from a local site root (generate.rs)

pub mod discover;
pub mod generate;
pub mod loader;

/// Category folders the gallery knows about, in display order.
/// The manifest is expected to cover these; any that come back absent or
/// empty are retried through directory discovery.
pub const KNOWN_CATEGORIES: [&str; 9] = [
    "animal",
    "big",
    "couples",
    "realism",
    "religious",
    "sleeve",
    "small",
    "students_work",
    "fineline",
];

/// Path of the gallery image tree relative to the site root
pub const GALLERY_ROOT: &str = "/assets/images/gallery";

/// Path of the manifest relative to the site root
pub const MANIFEST_PATH: &str = "/assets/gallery-manifest.json";
