//! Static-site generation for the storefront builder.
//!
//! Everything here is a pure function from the aggregate `StoreData` to
//! strings (or decoded asset bytes): resolving the theme, rendering section
//! fragments through their template selectors, assembling complete documents
//! and stylesheets, and splitting embedded images out into real files.

pub mod assets;
pub mod css;
pub mod pages;
pub mod sections;
pub mod site;
pub mod theme;
pub mod whatsapp;

pub use pages::custom::generate_custom_page_html;
pub use pages::home::generate_store_html;
pub use pages::products::generate_products_page_html;
pub use site::{Site, SiteFile, generate_site};
