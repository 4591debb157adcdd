//! Asset extraction: split embedded data URIs out into real files.
//!
//! The builder stores uploaded images inline as `data:` URIs so the aggregate
//! stays a single JSON object.  At build time this pass clones the aggregate,
//! rewrites every embedded image to a relative `assets/...` path and hands the
//! decoded bytes to the writer.  Generators never see a data URI and stay pure
//! string builders.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;
use tracing::warn;

use store::StoreData;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("not a data uri")]
    NotDataUri,
    #[error("unsupported data uri encoding (expected base64)")]
    Encoding,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedAsset {
    /// Site-relative path, e.g. `assets/product-1002.png`.
    pub path: String,
    pub bytes: Vec<u8>,
}

/// File extension for a mime type, via a small map for the common image types
/// and mime_guess for anything exotic.
fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/svg+xml" => "svg",
        "image/x-icon" | "image/vnd.microsoft.icon" => "ico",
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first().copied())
            .unwrap_or("bin"),
    }
}

/// Decode a `data:<mime>;base64,<payload>` URI into (extension, bytes).
pub fn decode_data_uri(uri: &str) -> Result<(&'static str, Vec<u8>), AssetError> {
    let rest = uri.strip_prefix("data:").ok_or(AssetError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(AssetError::NotDataUri)?;

    let mime = match header.strip_suffix(";base64") {
        Some(mime) => mime,
        // plain-text data uris never come out of the image upload path
        None => return Err(AssetError::Encoding),
    };

    let bytes = STANDARD.decode(payload.trim())?;
    Ok((extension_for(mime), bytes))
}

pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

/// Rewrite one image slot: push the decoded asset, point the slot at it.
///
/// A malformed payload is logged and left in place; the site still builds.
fn rewrite(slot: &mut String, stem: &str, assets: &mut Vec<ExtractedAsset>) {
    if !is_data_uri(slot) {
        return;
    }
    match decode_data_uri(slot) {
        Ok((ext, bytes)) => {
            let path = format!("assets/{stem}.{ext}");
            *slot = path.clone();
            assets.push(ExtractedAsset { path, bytes });
        }
        Err(err) => warn!("skipping undecodable embedded image {stem}: {err}"),
    }
}

/// Extract all embedded images from the aggregate.
///
/// Returns a rewritten copy for the generators plus the decoded files for the
/// build tool to write next to the HTML.
pub fn extract(data: &StoreData) -> (StoreData, Vec<ExtractedAsset>) {
    let mut data = data.clone();
    let mut assets = Vec::new();

    rewrite(&mut data.settings.logo, "logo", &mut assets);
    rewrite(&mut data.settings.favicon, "favicon", &mut assets);
    rewrite(
        &mut data.settings.hero.background_image,
        "hero-background",
        &mut assets,
    );
    rewrite(&mut data.settings.about.image, "about", &mut assets);

    for product in data.products.iter_mut() {
        let stem = format!("product-{}", product.id);
        rewrite(&mut product.image, &stem, &mut assets);
    }
    for category in data.categories.iter_mut() {
        let stem = format!("category-{}", category.id);
        rewrite(&mut category.image, &stem, &mut assets);
    }

    (data, assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Product;

    // a 1x1 transparent png
    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn decodes_png_data_uri() {
        let (ext, bytes) = decode_data_uri(PNG_URI).unwrap();
        assert_eq!(ext, "png");
        // png magic
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn rejects_non_data_uris_and_bad_payloads() {
        assert!(matches!(
            decode_data_uri("https://example.com/x.png"),
            Err(AssetError::NotDataUri)
        ));
        assert!(matches!(
            decode_data_uri("data:text/plain,hello"),
            Err(AssetError::Encoding)
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,!!!"),
            Err(AssetError::Base64(_))
        ));
    }

    #[test]
    fn extract_rewrites_references_and_collects_files() {
        let mut data = StoreData::default();
        data.settings.logo = PNG_URI.into();

        let mut product = Product::new("Mug".into(), 8.5);
        product.id = "1002".into();
        product.image = PNG_URI.into();
        data.add_product(product);

        let (rewritten, assets) = extract(&data);
        assert_eq!(rewritten.settings.logo, "assets/logo.png");
        assert_eq!(rewritten.products[0].image, "assets/product-1002.png");
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1].path, "assets/product-1002.png");

        // the original aggregate is untouched
        assert!(data.settings.logo.starts_with("data:"));
    }

    #[test]
    fn extract_leaves_urls_and_bad_payloads_alone() {
        let mut data = StoreData::default();
        data.settings.logo = "https://example.com/logo.svg".into();
        data.settings.favicon = "data:image/png;base64,%%%".into();

        let (rewritten, assets) = extract(&data);
        assert_eq!(rewritten.settings.logo, "https://example.com/logo.svg");
        assert_eq!(rewritten.settings.favicon, "data:image/png;base64,%%%");
        assert!(assets.is_empty());
    }
}
