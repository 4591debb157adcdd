use store::{
    Category, CustomPage, LinkItem, LinkType, Product, StoreData,
    backup::{export_json, filename, import_json},
};

fn sample_data() -> StoreData {
    let mut data = StoreData::default();
    data.settings.name = "Corner Shop".into();
    data.settings.whatsapp.enabled = true;
    data.settings.whatsapp.phone_number = "15551234567".into();

    let mut shirt = Product::new("Shirt".into(), 19.99);
    shirt.id = "1001".into();
    shirt.category = "Apparel".into();
    shirt.is_featured = true;
    shirt.tags = vec!["cotton".into(), "summer".into()];
    data.add_product(shirt);

    let mut mug = Product::new("Mug".into(), 8.50);
    mug.id = "1002".into();
    mug.original_price = Some(12.00);
    mug.is_on_sale = true;
    data.add_product(mug);

    let mut apparel = Category::new("Apparel".into());
    apparel.id = "2001".into();
    data.add_category(apparel);

    let mut about = CustomPage::new("Shipping & Returns".into());
    about.id = "3001".into();
    about.content = "<h2>Shipping</h2><p>Three days.</p>".into();
    data.add_page(about);

    data.add_link(LinkItem::new("About".into(), "#about".into(), LinkType::Anchor));
    data
}

#[test]
fn backup_round_trip_is_lossless() {
    let data = sample_data();
    let exported = export_json(&data);
    let imported = import_json(&exported).unwrap();

    assert_eq!(imported.settings, data.settings);
    assert_eq!(imported.products, data.products);
    assert_eq!(imported.categories, data.categories);
    assert_eq!(imported.custom_pages, data.custom_pages);
    assert_eq!(imported.nav_links, data.nav_links);
}

#[test]
fn backup_filename_uses_store_name() {
    let data = sample_data();
    assert_eq!(filename(&data.settings), "Corner Shop_backup.json");
}

#[test]
fn import_rejects_malformed_json() {
    assert!(import_json("{not json").is_err());
}

#[test]
fn import_normalizes_partial_aggregates() {
    // an old backup with only a couple of fields still yields a fully-formed
    // settings tree
    let imported = import_json(r#"{"settings":{"name":"Old Shop"},"products":[]}"#).unwrap();
    assert_eq!(imported.settings.name, "Old Shop");
    assert!(imported.settings.hero.enabled);
    assert_eq!(imported.settings.featured_section.limit, 4);
    assert!(imported.categories.is_empty());
}

#[test]
fn update_replaces_matched_entity_only() {
    let mut data = sample_data();

    let mut renamed = data.products[0].clone();
    renamed.name = "Linen Shirt".into();
    assert!(data.update_product(renamed));
    assert_eq!(data.products[0].name, "Linen Shirt");
    assert_eq!(data.products[1].name, "Mug");

    let mut ghost = data.products[0].clone();
    ghost.id = "9999".into();
    assert!(!data.update_product(ghost));
    assert_eq!(data.products.len(), 2);
}

#[test]
fn remove_filters_by_id() {
    let mut data = sample_data();
    data.remove_product("1001");
    assert_eq!(data.products.len(), 1);
    assert_eq!(data.products[0].id, "1002");

    // removing a missing id is a no-op
    data.remove_product("1001");
    assert_eq!(data.products.len(), 1);
}

#[test]
fn loose_category_join_counts_products_by_name() {
    let data = sample_data();
    assert_eq!(data.product_count_in("Apparel"), 1);
    // renaming a category orphans its products -- the count goes to zero
    assert_eq!(data.product_count_in("Clothing"), 0);
}

#[test]
fn visible_collections_respect_order_and_flags() {
    let mut data = StoreData::default();

    let mut b = Category::new("B".into());
    b.order = 2;
    let mut a = Category::new("A".into());
    a.order = 1;
    let mut hidden = Category::new("Hidden".into());
    hidden.is_visible = false;
    data.add_category(b);
    data.add_category(a);
    data.add_category(hidden);

    let visible: Vec<&str> = data
        .visible_categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(visible, vec!["A", "B"]);
}
