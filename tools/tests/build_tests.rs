use store::{CustomPage, Product, StoreData};

use sitegen::generate_site;
use tools::write_site;

const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn sample_data() -> StoreData {
    let mut data = StoreData::default();
    data.settings.name = "Corner Shop".into();

    let mut product = Product::new("Mug".into(), 8.5);
    product.id = "1002".into();
    product.image = PNG_URI.into();
    product.is_featured = true;
    data.add_product(product);

    let mut page = CustomPage::new("Shipping".into());
    page.content = "<p>Three days.</p>".into();
    data.add_page(page);

    data
}

#[tokio::test]
async fn write_site_lays_out_the_dist_directory() {
    let outdir = tempfile::tempdir().unwrap();
    let site = generate_site(&sample_data());

    write_site(&site, outdir.path()).await.unwrap();

    for name in ["index.html", "products.html", "store.css", "enhanced.css", "shipping.html"] {
        assert!(outdir.path().join(name).is_file(), "missing {name}");
    }

    let asset = outdir.path().join("assets/product-1002.png");
    let bytes = std::fs::read(&asset).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

    let home = std::fs::read_to_string(outdir.path().join("index.html")).unwrap();
    assert!(home.contains("assets/product-1002.png"));
}

#[tokio::test]
async fn write_site_without_assets_skips_the_directory() {
    let outdir = tempfile::tempdir().unwrap();
    let mut data = sample_data();
    data.products[0].image = "https://example.com/mug.png".into();

    let site = generate_site(&data);
    write_site(&site, outdir.path()).await.unwrap();

    assert!(!outdir.path().join("assets").exists());
}
