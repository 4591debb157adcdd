//! The standalone products listing page.
//!
//! The page ships its own data: the full product list and the search/filter
//! configuration are embedded as JSON literals, and an inline script does
//! substring search, category/sale/featured filtering and grid re-rendering
//! entirely in the browser.  The script's card template literal deliberately
//! duplicates `pages::product_card` -- the published site is framework-free,
//! so there is no shared renderer to call at runtime.  Keep the two in sync
//! by hand.

use serde::Serialize;
use store::{Product, StoreData};

use crate::{
    pages::{document_shell, product_card},
    sections, theme, whatsapp,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductView<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    display_price: String,
    original_price: Option<f64>,
    image: &'a str,
    category: &'a str,
    is_featured: bool,
    is_best_seller: bool,
    is_on_sale: bool,
    discount_percentage: Option<u32>,
    tags: &'a [String],
    whatsapp_url: Option<String>,
}

impl<'a> ProductView<'a> {
    fn new(product: &'a Product, data: &StoreData) -> Self {
        ProductView {
            id: &product.id,
            name: &product.name,
            description: &product.description,
            display_price: product.display_price(),
            original_price: product.original_price.filter(|o| *o > product.price),
            image: &product.image,
            category: &product.category,
            is_featured: product.is_featured,
            is_best_seller: product.is_best_seller,
            is_on_sale: product.is_on_sale,
            discount_percentage: product.discount_percentage,
            tags: &product.tags,
            whatsapp_url: whatsapp::product_link(product, &data.settings),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchFieldView {
    key: &'static str,
    weight: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingConfig<'a> {
    search_enabled: bool,
    search_fields: Vec<SearchFieldView>,
    categories: Vec<&'a str>,
}

fn listing_config(data: &StoreData) -> ListingConfig<'_> {
    let search = &data.settings.search;
    let mut fields = Vec::new();
    for (key, field) in [
        ("name", &search.name),
        ("description", &search.description),
        ("category", &search.category),
        ("tags", &search.tags),
    ] {
        if field.enabled {
            fields.push(SearchFieldView {
                key,
                weight: field.weight,
            });
        }
    }
    ListingConfig {
        search_enabled: search.enabled,
        search_fields: fields,
        categories: data
            .visible_categories()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect(),
    }
}

// client-side re-render: the card markup below mirrors pages::product_card
const LISTING_SCRIPT: &str = r#"var grid = document.getElementById('product-grid');
var searchBox = document.getElementById('search-box');
var categoryFilter = document.getElementById('category-filter');
var chips = document.querySelectorAll('.filter-chip');
var activeChip = 'all';

function cardHtml(p) {
  var badge = p.isOnSale
    ? '<span class="sale-badge">' + (p.discountPercentage ? '-' + p.discountPercentage + '%' : 'Sale') + '</span>'
    : '';
  var priceRow = p.originalPrice
    ? '<div class="price-row"><span class="product-price">' + p.displayPrice + '</span><span class="original-price">' + p.originalPrice.toFixed(2) + '</span></div>'
    : '<div class="price-row"><span class="product-price">' + p.displayPrice + '</span></div>';
  var order = p.whatsappUrl
    ? '<a class="order-btn" data-product="' + p.id + '" href="' + p.whatsappUrl + '" target="_blank" rel="noopener">Order on WhatsApp</a>'
    : '<span class="order-btn disabled">Order on WhatsApp</span>';
  return '<div class="product-card" id="product-' + p.id + '">' +
    '<div class="card-media">' + badge + '<img class="product-image" src="' + p.image + '" alt="' + p.name + '" loading="lazy"></div>' +
    '<div class="product-body">' +
    '<h3 class="product-name">' + p.name + '</h3>' +
    '<p class="product-description">' + p.description + '</p>' +
    priceRow + order +
    '</div></div>';
}

function fieldText(p, key) {
  if (key === 'tags') return p.tags.join(' ');
  return p[key] || '';
}

function score(p, query) {
  if (!query) return 1;
  var total = 0;
  CONFIG.searchFields.forEach(function (field) {
    if (fieldText(p, field.key).toLowerCase().indexOf(query) !== -1) {
      total += field.weight;
    }
  });
  return total;
}

function apply() {
  var query = CONFIG.searchEnabled && searchBox ? searchBox.value.trim().toLowerCase() : '';
  var category = categoryFilter ? categoryFilter.value : '';

  var matches = PRODUCTS.filter(function (p) {
    if (category && p.category !== category) return false;
    if (activeChip === 'sale' && !p.isOnSale) return false;
    if (activeChip === 'featured' && !p.isFeatured) return false;
    return score(p, query) > 0;
  });

  if (query) {
    matches.sort(function (a, b) { return score(b, query) - score(a, query); });
  }

  grid.innerHTML = matches.length
    ? matches.map(cardHtml).join('')
    : '<div class="empty-results">No products match your search.</div>';
}

if (searchBox) searchBox.addEventListener('input', apply);
if (categoryFilter) categoryFilter.addEventListener('change', apply);
chips.forEach(function (chip) {
  chip.addEventListener('click', function () {
    chips.forEach(function (c) { c.classList.remove('active'); });
    chip.classList.add('active');
    activeChip = chip.dataset.filter;
    apply();
  });
});

var params = new URLSearchParams(window.location.search);
var preset = params.get('category');
if (preset && categoryFilter) {
  for (var i = 0; i < categoryFilter.options.length; i++) {
    if (categoryFilter.options[i].dataset.slug === preset || categoryFilter.options[i].value === preset) {
      categoryFilter.selectedIndex = i;
      break;
    }
  }
  apply();
}

document.addEventListener('click', function (event) {
  var btn = event.target.closest('.order-btn[data-product]');
  if (btn) console.log('whatsapp order click', btn.dataset.product);
});"#;

/// Generate the complete products listing document.
pub fn generate_products_page_html(data: &StoreData) -> String {
    let settings = &data.settings;
    let resolved = theme::resolve(settings);

    let search_box = if settings.search.enabled {
        r#"<input class="search-input" id="search-box" type="search" placeholder="Search products...">"#
    } else {
        ""
    };

    let mut category_options = String::from(r#"<option value="">All categories</option>"#);
    for category in data.visible_categories() {
        category_options.push_str(&format!(
            r#"<option value="{name}" data-slug="{slug}">{name}</option>"#,
            name = category.name,
            slug = category.slug,
        ));
    }

    let initial_cards: String = data
        .products
        .iter()
        .map(|p| product_card(p, settings))
        .collect();

    let views: Vec<ProductView> = data
        .products
        .iter()
        .map(|p| ProductView::new(p, data))
        .collect();
    let products_json = serde_json::to_string(&views).expect("product view serialization");
    let config_json =
        serde_json::to_string(&listing_config(data)).expect("listing config serialization");

    let body = format!(
        r#"{header}
<main class="container">
  <h1 class="section-heading" style="color:{primary};margin-top:32px;">{title}</h1>
  <div class="listing-toolbar">
    {search_box}
    <select class="filter-select" id="category-filter">{category_options}</select>
    <button class="filter-chip active" data-filter="all">All</button>
    <button class="filter-chip" data-filter="sale">On sale</button>
    <button class="filter-chip" data-filter="featured">Featured</button>
  </div>
  <div class="product-grid" id="product-grid">{initial_cards}</div>
</main>
{footer}"#,
        header = sections::header::render(data, &resolved),
        primary = resolved.primary,
        title = "Products",
        search_box = search_box,
        category_options = category_options,
        initial_cards = initial_cards,
        footer = sections::footer::render(data, &resolved),
    );

    let script = format!(
        "var PRODUCTS = {products_json};\nvar CONFIG = {config_json};\n{LISTING_SCRIPT}"
    );

    document_shell(
        &format!("Products | {}", settings.name),
        &settings.description,
        settings,
        &resolved,
        &body,
        &script,
    )
}
