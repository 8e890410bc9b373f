/// Image fetching and thumbnail generation
///
/// Gallery images are served by the site, so both tiers here start with
/// an HTTP fetch: grid thumbnails are decoded and downscaled before
/// upload, the modal viewer gets the full-size bytes as-is.

use iced::widget::image::Handle;

use crate::error::Result;

/// Bounding box for grid thumbnails (longest side)
const THUMBNAIL_SIZE: u32 = 512;

/// Resolve an item src against the site base URL.
/// Absolute URLs (e.g. scraped hrefs pointing elsewhere) pass through.
pub fn image_url(base_url: &str, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        format!("{base_url}{src}")
    }
}

/// Fetch and downscale a grid thumbnail.
/// Errors come back as strings so they can ride an application message.
pub async fn fetch_thumbnail(
    client: reqwest::Client,
    url: String,
) -> std::result::Result<Handle, String> {
    thumbnail_handle(&client, &url).await.map_err(|e| e.to_string())
}

async fn thumbnail_handle(client: &reqwest::Client, url: &str) -> Result<Handle> {
    let bytes = fetch_bytes(client, url).await?;

    // Decode and bound to THUMBNAIL_SIZE, preserving aspect ratio
    let decoded = image::load_from_memory(&bytes)?;
    let thumb = decoded.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8();
    let (width, height) = thumb.dimensions();

    Ok(Handle::from_rgba(width, height, thumb.into_raw()))
}

/// Fetch the full-size image for the modal viewer
pub async fn fetch_full(
    client: reqwest::Client,
    url: String,
) -> std::result::Result<Handle, String> {
    let bytes = fetch_bytes(&client, &url).await.map_err(|e| e.to_string())?;
    Ok(Handle::from_bytes(bytes))
}

async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}
