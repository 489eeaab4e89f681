use crate::constants::{KEY_ACTIVATED_SELECTOR, SKIP_LINK_CLASS, SKIP_LINK_HREF, SKIP_LINK_TEXT};
use crate::dom;
use martone_core::interaction::is_activation_key;
use wasm_bindgen::JsCast;
use web_sys as web;

fn insert_skip_link(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("anchor cast failed"))?;
    link.set_href(SKIP_LINK_HREF);
    link.set_class_name(SKIP_LINK_CLASS);
    link.set_text_content(Some(SKIP_LINK_TEXT));
    body.prepend_with_node_1(&link).map_err(dom::js_err)?;
    Ok(())
}

/// Enter and Space click focused social links and hero buttons; a skip link
/// leads past the navigation.
pub fn wire_keyboard_access(document: &web::Document) -> anyhow::Result<()> {
    for el in dom::query_all(document, KEY_ACTIVATED_SELECTOR) {
        let target = el.clone();
        dom::add_listener::<web::KeyboardEvent>(&el, "keydown", move |ev| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                target.click();
            }
        });
    }
    insert_skip_link(document)
}
