use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::data::GalleryItem;

use super::{discover, KNOWN_CATEGORIES, MANIFEST_PATH};

/// The gallery manifest as served at `/assets/gallery-manifest.json`.
///
/// `categories` maps a category name to its list of image paths. The map
/// keeps manifest order (serde_json's preserve_order feature), so the
/// flattened index follows category-then-within-category order exactly
/// as written by the generator. Unknown keys and odd value shapes are
/// tolerated rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(
        rename = "generatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_at: Option<String>,

    #[serde(default)]
    pub categories: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Whether a category is present with at least one image
    fn has_images(&self, category: &str) -> bool {
        self.categories
            .get(category)
            .and_then(|value| value.as_array())
            .is_some_and(|paths| !paths.is_empty())
    }
}

/// Flatten the manifest's category blocks into a sequentially-id'd item
/// list, preserving manifest iteration order. Non-array category values
/// and non-string entries are skipped.
pub fn flatten(manifest: &Manifest) -> Vec<GalleryItem> {
    let mut items = Vec::new();
    let mut id = 1u32;

    for (category, paths) in &manifest.categories {
        let Some(paths) = paths.as_array() else {
            continue;
        };
        for src in paths.iter().filter_map(|value| value.as_str()) {
            items.push(GalleryItem::new(id, src, category.clone()));
            id += 1;
        }
    }

    items
}

/// Known categories the manifest left absent or empty
pub fn missing_categories(manifest: &Manifest) -> Vec<&'static str> {
    KNOWN_CATEGORIES
        .into_iter()
        .filter(|category| !manifest.has_images(category))
        .collect()
}

/// Load the gallery index from the site at `base_url`.
///
/// Fetches the manifest with a cache-busting query parameter, flattens
/// it, then runs directory discovery for any known category the manifest
/// missed. All discovery fetches settle before this resolves, so the
/// first render always sees the fully populated index.
///
/// A failed fetch or parse surfaces as `Err`; the caller degrades to an
/// empty gallery rather than aborting.
pub async fn load(
    client: reqwest::Client,
    base_url: String,
) -> std::result::Result<Vec<GalleryItem>, String> {
    let manifest = fetch_manifest(&client, &base_url)
        .await
        .map_err(|e| e.to_string())?;

    let mut items = flatten(&manifest);

    let missing = missing_categories(&manifest);
    if !missing.is_empty() {
        println!(
            "🔍 Manifest missing {} categor{}, trying directory discovery",
            missing.len(),
            if missing.len() == 1 { "y" } else { "ies" }
        );
        let mut id = items.len() as u32 + 1;
        for (src, category) in discover::discover_categories(&client, &base_url, &missing).await {
            items.push(GalleryItem::new(id, src, category));
            id += 1;
        }
    }

    Ok(items)
}

async fn fetch_manifest(client: &reqwest::Client, base_url: &str) -> Result<Manifest> {
    // Cache buster mirrors the site's `?v=Date.now()` query
    let url = format!(
        "{base_url}{MANIFEST_PATH}?v={}",
        Utc::now().timestamp_millis()
    );

    let manifest = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Manifest>()
        .await?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flatten_preserves_order_and_ids() {
        let manifest = parse(
            r#"{ "categories": { "color": ["a.jpg", "b.jpg"], "realism": ["c.jpg"] } }"#,
        );

        let items = flatten(&manifest);

        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            GalleryItem::new(1, "a.jpg", "color")
        );
        assert_eq!(
            items[1],
            GalleryItem::new(2, "b.jpg", "color")
        );
        assert_eq!(
            items[2],
            GalleryItem::new(3, "c.jpg", "realism")
        );
    }

    #[test]
    fn test_flatten_length_is_sum_of_category_lengths() {
        let manifest = parse(
            r#"{ "categories": {
                "animal": ["1.jpg", "2.jpg", "3.jpg"],
                "sleeve": [],
                "small": ["4.jpg"]
            } }"#,
        );

        assert_eq!(flatten(&manifest).len(), 4);
    }

    #[test]
    fn test_absent_categories_treated_as_empty() {
        let manifest = parse("{}");
        assert!(flatten(&manifest).is_empty());
        assert_eq!(missing_categories(&manifest).len(), KNOWN_CATEGORIES.len());
    }

    #[test]
    fn test_odd_value_shapes_are_tolerated() {
        let manifest = parse(
            r#"{ "generatedAt": "2025-01-01T00:00:00Z", "categories": {
                "realism": "not-a-list",
                "small": [1, "ok.jpg", null]
            }, "extra": true }"#,
        );

        let items = flatten(&manifest);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].src, "ok.jpg");
        assert_eq!(manifest.generated_at.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_missing_categories_ignores_populated_ones() {
        let manifest = parse(
            r#"{ "categories": { "realism": ["a.jpg"], "sleeve": [] } }"#,
        );

        let missing = missing_categories(&manifest);

        assert!(!missing.contains(&"realism"));
        assert!(missing.contains(&"sleeve"));
        assert!(missing.contains(&"fineline"));
    }
}
