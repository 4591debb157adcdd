//! WhatsApp order-message builder and wa.me deep links.

use store::{Product, settings::StoreSettings};

/// Where a product "order" click should lead in the published site.
pub fn product_anchor(product: &Product) -> String {
    format!("products.html#product-{}", product.id)
}

/// Fill the admin-authored message template for one product.
///
/// Substitution is sequential and single-occurrence, and each token is
/// guarded by its include flag.  A token whose flag is off stays in the
/// output verbatim -- the admin sees the literal `{productPrice}` in a test
/// message and knows to either enable the flag or edit the template.
pub fn generate_message(product: &Product, settings: &StoreSettings) -> String {
    let wa = &settings.whatsapp;
    let mut message = wa.message_template.clone();

    if wa.include_product_name {
        message = message.replacen("{productName}", &product.name, 1);
    }
    if wa.include_product_price {
        message = message.replacen("{productPrice}", &product.display_price(), 1);
    }
    if wa.include_product_description {
        message = message.replacen("{productDescription}", &product.description, 1);
    }
    if wa.include_store_name {
        message = message.replacen("{storeName}", &settings.name, 1);
    }
    if wa.include_product_link {
        message = message.replacen("{productLink}", &product_anchor(product), 1);
    }

    message
}

/// Build the wa.me deep link for a product, or None when WhatsApp ordering is
/// disabled or no phone number is configured (the card renders an inert
/// button in that case).
pub fn product_link(product: &Product, settings: &StoreSettings) -> Option<String> {
    let wa = &settings.whatsapp;
    if !wa.enabled || wa.phone_number.is_empty() {
        return None;
    }

    let message = generate_message(product, settings);
    Some(format!(
        "https://wa.me/{}?text={}",
        wa.phone_number,
        urlencoding::encode(&message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> StoreSettings {
        let mut settings = StoreSettings::default();
        settings.name = "Corner Shop".into();
        settings.whatsapp.enabled = true;
        settings.whatsapp.phone_number = "15551234567".into();
        settings
    }

    fn product() -> Product {
        let mut product = Product::new("Mug".into(), 8.5);
        product.id = "1002".into();
        product.description = "Stoneware".into();
        product
    }

    #[test]
    fn substitutes_only_enabled_tokens() {
        let mut settings = settings();
        settings.whatsapp.message_template =
            "{productName} / {productPrice} / {productDescription} / {storeName}".into();
        settings.whatsapp.include_product_price = false;

        let message = generate_message(&product(), &settings);
        // disabled token survives verbatim
        assert_eq!(message, "Mug / {productPrice} / Stoneware / Corner Shop");
    }

    #[test]
    fn substitution_is_single_occurrence() {
        let mut settings = settings();
        settings.whatsapp.message_template = "{productName} and {productName}".into();

        let message = generate_message(&product(), &settings);
        assert_eq!(message, "Mug and {productName}");
    }

    #[test]
    fn link_is_percent_encoded_wa_me() {
        let mut settings = settings();
        settings.whatsapp.message_template = "Hi! I want {productName}".into();

        let link = product_link(&product(), &settings).unwrap();
        assert_eq!(
            link,
            "https://wa.me/15551234567?text=Hi%21%20I%20want%20Mug"
        );
    }

    #[test]
    fn disabled_or_unconfigured_yields_no_link() {
        let mut disabled = settings();
        disabled.whatsapp.enabled = false;
        assert_eq!(product_link(&product(), &disabled), None);

        let mut no_phone = settings();
        no_phone.whatsapp.phone_number = String::new();
        assert_eq!(product_link(&product(), &no_phone), None);
    }
}
