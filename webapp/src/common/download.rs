use anyhow::{Result, anyhow};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer a generated text file (HTML, CSS, JSON backup) as a browser download
/// via a temporary object URL on an invisible anchor.
pub fn download_text_file(filename: &str, mime: &str, contents: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document available"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| anyhow!("blob creation failed: {err:?}"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| anyhow!("object url failed: {err:?}"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| anyhow!("anchor creation failed: {err:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("anchor cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
