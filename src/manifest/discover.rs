use std::sync::OnceLock;

use regex::Regex;

use super::GALLERY_ROOT;

/// Extensions accepted as gallery images. The check is a case-sensitive
/// suffix match, so both case variants are listed explicitly.
pub const IMAGE_EXTENSIONS: [&str; 10] = [
    ".jpg", ".jpeg", ".png", ".webp", ".gif", ".JPG", ".JPEG", ".PNG", ".WEBP", ".GIF",
];

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"href="([^"]+)""#).expect("valid href pattern"))
}

/// Whether an href points at an image file
pub fn is_image(href: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| href.ends_with(ext))
}

/// Pull image filenames out of a directory-listing HTML page
pub fn extract_image_hrefs(html: &str) -> Vec<String> {
    href_pattern()
        .captures_iter(html)
        .map(|captures| captures[1].to_string())
        .filter(|href| is_image(href))
        .collect()
}

/// Folders to probe for a category. "fineline" images historically also
/// lived in a misspelled "thineline" folder.
fn alias_folders(category: &str) -> Vec<&str> {
    if category == "fineline" {
        vec!["fineline", "thineline"]
    } else {
        vec![category]
    }
}

/// Best-effort discovery of images for categories the manifest missed.
///
/// Fetches the server's auto-index page for each category folder and
/// scrapes its anchor hrefs. Only works on servers that expose directory
/// listings (e.g. `python -m http.server` during local dev); in
/// production a category that stays empty is expected and fine.
///
/// Per-category fetches run concurrently and every failure is swallowed,
/// so the result is whatever could be found, in canonical category order.
pub async fn discover_categories(
    client: &reqwest::Client,
    base_url: &str,
    categories: &[&str],
) -> Vec<(String, String)> {
    let fetches = categories
        .iter()
        .map(|category| discover_category(client, base_url, category));

    futures::future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .collect()
}

/// Discover `(src, category)` pairs for a single category
async fn discover_category(
    client: &reqwest::Client,
    base_url: &str,
    category: &str,
) -> Vec<(String, String)> {
    let mut found = Vec::new();

    for folder in alias_folders(category) {
        let url = format!("{base_url}{GALLERY_ROOT}/{folder}/");

        let Ok(response) = client.get(&url).send().await else {
            continue;
        };
        if !response.status().is_success() {
            continue;
        }
        let Ok(html) = response.text().await else {
            continue;
        };

        for name in extract_image_hrefs(&html) {
            found.push((
                format!("{GALLERY_ROOT}/{folder}/{name}"),
                category.to_string(),
            ));
        }
    }

    if !found.is_empty() {
        println!("📂 Discovered {} images for '{category}'", found.len());
    }

    found
}
