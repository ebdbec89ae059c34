use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page anchors scroll smoothly, leaving room for the fixed navbar.
pub fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            let Some(target) = doc
                .get_element_by_id(href.trim_start_matches('#'))
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let nav_height = doc
                .query_selector(".navbar")
                .ok()
                .flatten()
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                .map(|n| n.offset_height())
                .unwrap_or(0);
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top((target.offset_top() - nav_height) as f64);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}
