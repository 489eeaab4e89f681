use crate::constants::{
    ACTIVE_CLASS, ATTR_PLATFORM, EXPANDED_CLASS, SOCIAL_LINK_SELECTOR, SOCIAL_MORE_SELECTOR,
};
use crate::dom;
use martone_core::share::{SharePlatform, SocialSidebar, SHARE_WINDOW_FEATURES, SHARE_WINDOW_NAME};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn open_share(platform: SharePlatform) {
    let Some(window) = web::window() else {
        return;
    };
    let page_url = window.location().href().unwrap_or_default();
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    let url = platform.share_url(&page_url, &title);
    if let Err(e) =
        window.open_with_url_and_target_and_features(&url, SHARE_WINDOW_NAME, SHARE_WINDOW_FEATURES)
    {
        log::warn!("[social] share window blocked: {:?}", e);
    }
}

/// Expandable share sidebar and the share links inside it.
pub fn wire_social_sidebar(document: &web::Document) -> anyhow::Result<()> {
    let links = dom::query_all(document, SOCIAL_LINK_SELECTOR);
    let sidebar = Rc::new(RefCell::new(SocialSidebar::default()));

    for more in dom::query_all(document, SOCIAL_MORE_SELECTOR) {
        let sidebar = sidebar.clone();
        let links = links.clone();
        let button = more.clone();
        dom::add_click_listener(&more, move |_| {
            let expanded = sidebar.borrow_mut().toggle();
            for link in &links {
                _ = link.class_list().toggle_with_force(EXPANDED_CLASS, expanded);
            }
            _ = button.class_list().toggle_with_force(ACTIVE_CLASS, expanded);
        });
    }

    for link in &links {
        let el = link.clone();
        dom::add_click_listener(link, move |ev| {
            ev.prevent_default();
            let tag = el.get_attribute(ATTR_PLATFORM).unwrap_or_default();
            match tag.parse::<SharePlatform>() {
                Ok(platform) => open_share(platform),
                Err(e) => log::warn!("[social] {e}"),
            }
        });
    }
    Ok(())
}
