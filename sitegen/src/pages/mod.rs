//! Page assemblers: complete HTML documents built from the section fragments.

pub mod custom;
pub mod home;
pub mod products;

use store::{Product, StoreData, settings::StoreSettings};

use crate::{css, theme::ResolvedTheme, whatsapp};

/// Wrap a body in the shared document shell.
///
/// Every page embeds the `:root` variable block inline (so it paints with the
/// right palette before the stylesheets arrive) and links the two generated
/// stylesheets.
pub(crate) fn document_shell(
    title: &str,
    description: &str,
    settings: &StoreSettings,
    theme: &ResolvedTheme,
    body: &str,
    script: &str,
) -> String {
    let favicon = if settings.favicon.is_empty() {
        String::new()
    } else {
        format!(
            "\n  <link rel=\"icon\" href=\"{favicon}\">",
            favicon = settings.favicon
        )
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <meta name="description" content="{description}">{favicon}
  <style>
{variables}
  </style>
  <link rel="stylesheet" href="store.css">
  <link rel="stylesheet" href="enhanced.css">
</head>
<body>
{body}
<script>
{script}
</script>
</body>
</html>"#,
        title = title,
        description = description,
        favicon = favicon,
        variables = css::root_variables(theme),
        body = body,
        script = script,
    )
}

/// One product card.
///
/// NOTE: products.html re-renders this same card client-side from a JS
/// template literal (see pages::products::listing_script); changes here must
/// be mirrored there by hand.
pub(crate) fn product_card(product: &Product, settings: &StoreSettings) -> String {
    let badge = if product.is_on_sale {
        match product.discount_percentage {
            Some(pct) => format!(r#"<span class="sale-badge">-{pct}%</span>"#),
            None => r#"<span class="sale-badge">Sale</span>"#.to_string(),
        }
    } else {
        String::new()
    };

    let price_row = match product.original_price {
        Some(original) if original > product.price => format!(
            r#"<div class="price-row"><span class="product-price">{price}</span><span class="original-price">{original:.2}</span></div>"#,
            price = product.display_price(),
        ),
        _ => format!(
            r#"<div class="price-row"><span class="product-price">{price}</span></div>"#,
            price = product.display_price(),
        ),
    };

    let order = match whatsapp::product_link(product, settings) {
        Some(link) => format!(
            r#"<a class="order-btn" data-product="{id}" href="{link}" target="_blank" rel="noopener">Order on WhatsApp</a>"#,
            id = product.id,
        ),
        None => r#"<span class="order-btn disabled">Order on WhatsApp</span>"#.to_string(),
    };

    format!(
        r#"<div class="product-card" id="product-{id}">
  <div class="card-media">{badge}<img class="product-image" src="{image}" alt="{name}" loading="lazy"></div>
  <div class="product-body">
    <h3 class="product-name">{name}</h3>
    <p class="product-description">{description}</p>
    {price_row}
    {order}
  </div>
</div>"#,
        id = product.id,
        badge = badge,
        image = product.image,
        name = product.name,
        description = product.description,
        price_row = price_row,
        order = order,
    )
}

/// A titled strip of product cards (featured / best sellers / on sale).
pub(crate) fn product_strip(
    section_class: &str,
    title: &str,
    subtitle: &str,
    products: &[&Product],
    settings: &StoreSettings,
    theme: &ResolvedTheme,
) -> String {
    if products.is_empty() {
        return String::new();
    }

    let subtitle_html = if subtitle.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="section-subtitle" style="color:{muted};">{subtitle}</p>"#,
            muted = theme.muted,
        )
    };

    let cards: String = products
        .iter()
        .map(|p| product_card(p, settings))
        .collect();

    format!(
        r#"<section class="product-section {section_class}">
  <div class="container">
    <h2 class="section-heading" style="color:{primary};">{title}</h2>
    {subtitle_html}
    <div class="product-grid">{cards}</div>
  </div>
</section>"#,
        primary = theme.primary,
    )
}

/// The "shop by category" strip on the home page.
pub(crate) fn category_strip(data: &StoreData, theme: &ResolvedTheme) -> String {
    let display = &data.settings.category_display;
    if !display.enabled {
        return String::new();
    }

    let categories = data.visible_categories();
    if categories.is_empty() {
        return String::new();
    }

    let list_class = if display.style == "list" {
        "category-list"
    } else {
        "category-grid"
    };

    let mut cards = String::new();
    for category in categories {
        let count = if display.show_product_counts {
            format!(
                r#"<span class="category-count">{} products</span>"#,
                data.product_count_in(&category.name)
            )
        } else {
            String::new()
        };
        cards.push_str(&format!(
            r#"<a class="category-card" href="products.html?category={slug}"><span class="category-name" style="color:{text};">{name}</span>{count}</a>"#,
            slug = category.slug,
            text = theme.text,
            name = category.name,
            count = count,
        ));
    }

    format!(
        r#"<section class="categories" id="categories">
  <div class="container">
    <h2 class="section-heading" style="color:{primary};">{title}</h2>
    <div class="{list_class}">{cards}</div>
  </div>
</section>"#,
        primary = theme.primary,
        title = display.title,
    )
}
