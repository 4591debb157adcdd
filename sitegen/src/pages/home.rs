//! The home page assembler.

use store::{Product, StoreData};

use crate::{
    pages::{category_strip, document_shell, product_strip},
    sections::{self, SectionId},
    theme,
};

/// First `limit` products matching a flag, in aggregate array order.
///
/// The three buckets are independent: a product flagged both featured and on
/// sale appears in both strips.
fn bucket<'a>(
    products: &'a [Product],
    matches: impl Fn(&Product) -> bool,
    limit: usize,
) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p)).take(limit).collect()
}

const HOME_SCRIPT: &str = r##"document.querySelectorAll('a[href^="#"]').forEach(function (link) {
  link.addEventListener('click', function (event) {
    var target = document.querySelector(link.getAttribute('href'));
    if (target) {
      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth' });
    }
  });
});

document.querySelectorAll('.faq-question').forEach(function (button) {
  button.addEventListener('click', function () {
    var answer = document.getElementById('faq-answer-' + button.dataset.faq);
    if (!answer) return;
    answer.hidden = !answer.hidden;
    var marker = button.querySelector('.faq-marker');
    if (marker) marker.textContent = answer.hidden ? '+' : '−';
  });
});

document.querySelectorAll('.order-btn[data-product]').forEach(function (button) {
  button.addEventListener('click', function () {
    console.log('whatsapp order click', button.dataset.product);
  });
});"##;

/// Generate the complete home page document.
pub fn generate_store_html(data: &StoreData) -> String {
    let settings = &data.settings;
    let resolved = theme::resolve(settings);

    let featured = bucket(
        &data.products,
        |p| p.is_featured,
        settings.featured_section.limit,
    );
    let best_sellers = bucket(
        &data.products,
        |p| p.is_best_seller,
        settings.best_sellers_section.limit,
    );
    let on_sale = bucket(
        &data.products,
        |p| p.is_on_sale,
        settings.on_sale_section.limit,
    );

    let mut body = String::new();
    body.push_str(&sections::header::render(data, &resolved));

    for section in settings.sections.iter() {
        let fragment = match SectionId::from_id(section) {
            Some(SectionId::Hero) => sections::hero::render(settings, &resolved),
            Some(SectionId::FeaturedProducts) if settings.featured_section.enabled => {
                product_strip(
                    "featured-products",
                    &settings.featured_section.title,
                    &settings.featured_section.subtitle,
                    &featured,
                    settings,
                    &resolved,
                )
            }
            Some(SectionId::BestSellers) if settings.best_sellers_section.enabled => product_strip(
                "best-sellers",
                &settings.best_sellers_section.title,
                &settings.best_sellers_section.subtitle,
                &best_sellers,
                settings,
                &resolved,
            ),
            Some(SectionId::OnSale) if settings.on_sale_section.enabled => product_strip(
                "on-sale",
                &settings.on_sale_section.title,
                &settings.on_sale_section.subtitle,
                &on_sale,
                settings,
                &resolved,
            ),
            Some(SectionId::Categories) => category_strip(data, &resolved),
            Some(SectionId::About) => sections::about::render(settings, &resolved),
            Some(SectionId::Features) => sections::features::render(settings, &resolved),
            Some(SectionId::Faq) => sections::faq::render(settings, &resolved),
            // disabled product strip or an id from another build
            _ => String::new(),
        };
        if !fragment.is_empty() {
            body.push('\n');
            body.push_str(&fragment);
        }
    }

    body.push('\n');
    body.push_str(&sections::footer::render(data, &resolved));

    document_shell(
        &settings.name,
        &settings.description,
        settings,
        &resolved,
        &body,
        HOME_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_take_first_n_in_array_order() {
        let mut products = Vec::new();
        for (i, featured) in [true, false, true, true, true].iter().enumerate() {
            let mut p = Product::new(format!("P{i}"), 1.0);
            p.id = format!("{i}");
            p.is_featured = *featured;
            products.push(p);
        }

        let picked = bucket(&products, |p| p.is_featured, 2);
        let ids: Vec<&str> = picked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2"]);
    }

    #[test]
    fn buckets_are_independent() {
        let mut p = Product::new("Both".into(), 1.0);
        p.is_featured = true;
        p.is_on_sale = true;
        let products = vec![p];

        assert_eq!(bucket(&products, |p| p.is_featured, 4).len(), 1);
        assert_eq!(bucket(&products, |p| p.is_on_sale, 4).len(), 1);
        assert_eq!(bucket(&products, |p| p.is_best_seller, 4).len(), 0);
    }
}
