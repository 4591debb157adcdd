//! Whole-site generation: everything the publish flow writes to disk.

use store::StoreData;
use tracing::debug;

use crate::{
    assets::{self, ExtractedAsset},
    css,
    pages::{custom, home, products},
    theme,
};

#[derive(Clone, Debug)]
pub struct SiteFile {
    /// Site-relative path, e.g. `index.html`.
    pub path: String,
    pub contents: String,
}

#[derive(Clone, Debug)]
pub struct Site {
    pub files: Vec<SiteFile>,
    pub assets: Vec<ExtractedAsset>,
}

// filenames the fixed pages own; a custom page slug that lands on one of
// these (or is empty) gets an id-derived name instead
fn page_filename(slug: &str, id: &str) -> String {
    match slug {
        "" | "index" | "products" => format!("page-{id}.html"),
        other => format!("{other}.html"),
    }
}

/// Generate every artifact for the published site.
///
/// Runs the asset-extraction pre-pass first so the generators only ever see
/// relative asset paths, never data URIs.
pub fn generate_site(data: &StoreData) -> Site {
    let (data, extracted) = assets::extract(data);
    let resolved = theme::resolve(&data.settings);

    let mut files = vec![
        SiteFile {
            path: "index.html".into(),
            contents: home::generate_store_html(&data),
        },
        SiteFile {
            path: "products.html".into(),
            contents: products::generate_products_page_html(&data),
        },
        SiteFile {
            path: "store.css".into(),
            contents: css::generate_store_css(&resolved),
        },
        SiteFile {
            path: "enhanced.css".into(),
            contents: css::generate_enhanced_store_css(&resolved),
        },
    ];

    for page in data.published_pages() {
        files.push(SiteFile {
            path: page_filename(&page.slug, &page.id),
            contents: custom::generate_custom_page_html(page, &data),
        });
    }

    debug!(
        pages = files.len(),
        assets = extracted.len(),
        "generated site artifacts"
    );

    Site {
        files,
        assets: extracted,
    }
}
