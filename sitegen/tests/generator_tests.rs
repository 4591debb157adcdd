use pretty_assertions::assert_eq;
use store::{Category, CustomPage, LinkItem, LinkType, Product, StoreData};

use sitegen::{
    generate_custom_page_html, generate_products_page_html, generate_site, generate_store_html,
};

fn sample_data() -> StoreData {
    let mut data = StoreData::default();
    data.settings.name = "Corner Shop".into();
    data.settings.description = "Good things, fairly priced".into();
    data.settings.whatsapp.enabled = true;
    data.settings.whatsapp.phone_number = "15551234567".into();
    data.settings.about.text = "A small family business.".into();
    data.settings.faq.items = vec![store::settings::FaqItem {
        question: "Do you ship?".into(),
        answer: "Yes, worldwide.".into(),
    }];
    data.settings.features.items = vec![store::settings::FeatureItem {
        icon: "🚚".into(),
        title: "Fast delivery".into(),
        text: "Orders leave the same day.".into(),
    }];

    for (i, (featured, best, sale)) in [
        (true, false, false),
        (true, true, false),
        (false, false, true),
        (true, false, true),
        (false, true, false),
    ]
    .iter()
    .enumerate()
    {
        let mut p = Product::new(format!("Product {i}"), 10.0 + i as f64);
        p.id = format!("10{i}");
        p.category = "General".into();
        p.is_featured = *featured;
        p.is_best_seller = *best;
        p.is_on_sale = *sale;
        data.add_product(p);
    }

    let mut general = Category::new("General".into());
    general.id = "200".into();
    data.add_category(general);

    data.add_link(LinkItem::new(
        "About us".into(),
        "#about".into(),
        LinkType::Anchor,
    ));

    let mut page = CustomPage::new("Shipping".into());
    page.id = "300".into();
    page.content = "<h2>Shipping policy</h2>".into();
    data.add_page(page);

    data
}

#[test]
fn home_page_is_a_complete_document() {
    let html = generate_store_html(&sample_data());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Corner Shop</title>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="store.css">"#));
    // theme variables are embedded inline
    assert!(html.contains("--primary: #2563EB;"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn disabled_sections_leave_no_markup_behind() {
    let mut data = sample_data();
    data.settings.hero.enabled = false;
    data.settings.about.enabled = false;
    data.settings.faq.enabled = false;

    let html = generate_store_html(&data);
    assert!(!html.contains("class=\"hero"));
    assert!(!html.contains("id=\"about\""));
    assert!(!html.contains("class=\"faq"));

    // sections that stay enabled still render
    assert!(html.contains("featured-products"));
}

#[test]
fn section_order_is_respected() {
    let mut data = sample_data();
    data.settings.sections = vec!["faq".into(), "hero".into()];

    let html = generate_store_html(&data);
    let faq_at = html.find("class=\"faq").expect("faq section");
    let hero_at = html.find("class=\"hero").expect("hero section");
    assert!(faq_at < hero_at);
}

#[test]
fn unknown_section_ids_are_skipped() {
    let mut data = sample_data();
    data.settings.sections = vec!["testimonials".into(), "hero".into()];

    let html = generate_store_html(&data);
    assert!(!html.contains("testimonials"));
    assert!(html.contains("class=\"hero"));
}

#[test]
fn product_strips_honor_flags_limits_and_order() {
    let mut data = sample_data();
    data.settings.featured_section.limit = 2;

    let html = generate_store_html(&data);

    // featured products are ids 100, 101, 103; the limit keeps the first two
    let featured_at = html.find("featured-products").unwrap();
    let best_at = html.find("best-sellers").unwrap();
    let featured_strip = &html[featured_at..best_at];
    assert!(featured_strip.contains("product-100"));
    assert!(featured_strip.contains("product-101"));
    assert!(!featured_strip.contains("product-103"));

    // a product can appear in several buckets: 101 is featured and best seller
    let best_strip = &html[best_at..html.find("on-sale").unwrap()];
    assert!(best_strip.contains("product-101"));
}

#[test]
fn whatsapp_buttons_follow_configuration() {
    let enabled = generate_store_html(&sample_data());
    assert!(enabled.contains("https://wa.me/15551234567?text="));

    let mut data = sample_data();
    data.settings.whatsapp.enabled = false;
    let disabled = generate_store_html(&data);
    assert!(!disabled.contains("wa.me"));
    assert!(disabled.contains("order-btn disabled"));
}

#[test]
fn products_page_embeds_data_for_the_client_script() {
    let html = generate_products_page_html(&sample_data());

    assert!(html.contains("var PRODUCTS = ["));
    assert!(html.contains("var CONFIG = {"));
    // camelCase view model for the browser side
    assert!(html.contains(r#""isFeatured":true"#));
    assert!(html.contains(r#""whatsappUrl":"https://wa.me/"#));
    // search weights travel with the page
    assert!(html.contains(r#"{"key":"name","weight":3}"#));
    // server-rendered initial grid is present too
    assert!(html.contains(r#"<div class="product-grid" id="product-grid">"#));
    assert!(html.contains("product-104"));
}

#[test]
fn products_page_omits_search_box_when_disabled() {
    let mut data = sample_data();
    data.settings.search.enabled = false;
    let html = generate_products_page_html(&data);
    assert!(!html.contains(r#"id="search-box""#));
    // category filtering still works without search
    assert!(html.contains(r#"id="category-filter""#));
}

#[test]
fn custom_page_wraps_content_in_the_shell() {
    let data = sample_data();
    let page = &data.custom_pages[0];
    let html = generate_custom_page_html(page, &data);

    assert!(html.contains("<h2>Shipping policy</h2>"));
    assert!(html.contains("<title>Shipping | Corner Shop</title>"));
    // shell brings header and footer
    assert!(html.contains("site-header"));
    assert!(html.contains("site-footer"));
}

#[test]
fn custom_page_meta_overrides_win() {
    let data = sample_data();
    let mut page = data.custom_pages[0].clone();
    page.meta_title = Some("Shipping info".into());
    page.meta_description = Some("How we ship".into());

    let html = generate_custom_page_html(&page, &data);
    assert!(html.contains("<title>Shipping info</title>"));
    assert!(html.contains(r#"<meta name="description" content="How we ship">"#));
}

#[test]
fn site_generation_emits_every_artifact() {
    let mut data = sample_data();
    let mut draft = CustomPage::new("Draft".into());
    draft.is_published = false;
    data.add_page(draft);

    let site = generate_site(&data);
    let paths: Vec<&str> = site.files.iter().map(|f| f.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "index.html",
            "products.html",
            "store.css",
            "enhanced.css",
            "shipping.html",
        ]
    );
}

#[test]
fn site_generation_extracts_embedded_images() {
    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    let mut data = sample_data();
    data.products[0].image = PNG_URI.into();

    let site = generate_site(&data);
    assert_eq!(site.assets.len(), 1);
    assert_eq!(site.assets[0].path, "assets/product-100.png");

    let home = &site.files[0].contents;
    assert!(home.contains("assets/product-100.png"));
    assert!(!home.contains("data:image/png"));
}

#[test]
fn reserved_slugs_get_id_derived_filenames() {
    let mut data = sample_data();
    let mut clash = CustomPage::new("Products".into());
    clash.id = "301".into();
    data.add_page(clash);

    let site = generate_site(&data);
    let paths: Vec<&str> = site.files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&"page-301.html"));
}
