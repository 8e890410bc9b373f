use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use walkdir::WalkDir;

use crate::error::Result;

use super::discover::is_image;
use super::loader::Manifest;
use super::KNOWN_CATEGORIES;

/// Result of a manifest regeneration run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub manifest_path: PathBuf,
    pub categories: usize,
    pub images: usize,
}

/// Folders that feed a category on disk. Besides the "thineline"
/// misspelling, "big" images also accumulated in "BIG" and a legacy
/// "buddha" folder.
fn source_folders(category: &str) -> Vec<&str> {
    match category {
        "fineline" => vec!["fineline", "thineline"],
        "big" => vec!["big", "BIG", "buddha"],
        _ => vec![category],
    }
}

/// Regenerate `assets/gallery-manifest.json` from the image tree under
/// `site_root`. This is the authoritative way to populate the gallery;
/// runtime directory discovery exists only as a dev-server fallback.
///
/// Every known category gets an entry (possibly empty), image paths are
/// name-sorted within their folder, and the src paths use the actual
/// folder on disk so alias folders keep serving correctly.
pub fn generate(site_root: &Path) -> Result<GenerateSummary> {
    let gallery_dir = site_root.join("assets").join("images").join("gallery");

    let mut categories = serde_json::Map::new();
    let mut images = 0usize;

    for category in KNOWN_CATEGORIES {
        let paths = scan_category(&gallery_dir, category);
        images += paths.len();
        categories.insert(category.to_string(), serde_json::Value::from(paths));
    }

    let manifest = Manifest {
        generated_at: Some(Utc::now().to_rfc3339()),
        categories,
    };

    let manifest_path = site_root.join("assets").join("gallery-manifest.json");
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

    Ok(GenerateSummary {
        manifest_path,
        categories: KNOWN_CATEGORIES.len(),
        images,
    })
}

/// Collect the src paths for one category, alias folders included
fn scan_category(gallery_dir: &Path, category: &str) -> Vec<String> {
    let mut paths = Vec::new();

    for folder in source_folders(category) {
        let dir = gallery_dir.join(folder);
        if !dir.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if is_image(&name) {
                paths.push(format!("/assets/images/gallery/{folder}/{name}"));
            }
        }
    }

    paths
}

/// Regenerate the manifest on a background thread.
/// Runs blocking because the scan and write are plain filesystem work.
pub async fn generate_async(site_root: PathBuf) -> std::result::Result<GenerateSummary, String> {
    tokio::task::spawn_blocking(move || generate(&site_root).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"img").unwrap();
    }

    fn site_with_gallery(folders: &[(&str, &[&str])]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (folder, files) in folders {
            let dir = tmp
                .path()
                .join("assets")
                .join("images")
                .join("gallery")
                .join(folder);
            fs::create_dir_all(&dir).unwrap();
            for file in *files {
                touch(&dir, file);
            }
        }
        tmp
    }

    fn read_manifest(site: &Path) -> Manifest {
        let raw = fs::read_to_string(site.join("assets").join("gallery-manifest.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn category_paths(manifest: &Manifest, category: &str) -> Vec<String> {
        manifest.categories[category]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_generate_writes_all_known_categories() {
        let site = site_with_gallery(&[("realism", &["b.jpg", "a.jpg"][..])]);

        let summary = generate(site.path()).unwrap();
        let manifest = read_manifest(site.path());

        assert_eq!(summary.categories, KNOWN_CATEGORIES.len());
        assert_eq!(summary.images, 2);
        assert!(manifest.generated_at.is_some());

        // Every known category is present, in canonical order
        let keys: Vec<&str> = manifest.categories.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, KNOWN_CATEGORIES);

        // Files come out name-sorted
        assert_eq!(
            category_paths(&manifest, "realism"),
            vec![
                "/assets/images/gallery/realism/a.jpg",
                "/assets/images/gallery/realism/b.jpg",
            ]
        );
        assert!(category_paths(&manifest, "sleeve").is_empty());
    }

    #[test]
    fn test_alias_folders_merge_into_canonical_category() {
        let site = site_with_gallery(&[
            ("fineline", &["f.jpg"][..]),
            ("thineline", &["t.jpg"][..]),
            ("buddha", &["deity.png"][..]),
        ]);

        generate(site.path()).unwrap();
        let manifest = read_manifest(site.path());

        // Alias images land under the canonical category, but the src
        // keeps the folder actually holding the file
        assert_eq!(
            category_paths(&manifest, "fineline"),
            vec![
                "/assets/images/gallery/fineline/f.jpg",
                "/assets/images/gallery/thineline/t.jpg",
            ]
        );
        assert_eq!(
            category_paths(&manifest, "big"),
            vec!["/assets/images/gallery/buddha/deity.png"]
        );
        assert!(!manifest.categories.contains_key("thineline"));
        assert!(!manifest.categories.contains_key("buddha"));
    }

    #[test]
    fn test_non_image_files_are_skipped() {
        let site = site_with_gallery(&[("small", &["keep.webp", "notes.txt", "skip.pdf"][..])]);

        let summary = generate(site.path()).unwrap();
        let manifest = read_manifest(site.path());

        assert_eq!(summary.images, 1);
        assert_eq!(
            category_paths(&manifest, "small"),
            vec!["/assets/images/gallery/small/keep.webp"]
        );
    }

    #[test]
    fn test_missing_gallery_dir_yields_empty_manifest() {
        let tmp = tempfile::tempdir().unwrap();

        let summary = generate(tmp.path()).unwrap();
        let manifest = read_manifest(tmp.path());

        assert_eq!(summary.images, 0);
        assert!(manifest
            .categories
            .values()
            .all(|v| v.as_array().unwrap().is_empty()));
    }
}
