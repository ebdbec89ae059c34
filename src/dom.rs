use crate::constants::MAX_PIXEL_RATIO;
use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`add_click_listener`] but looks the element up with a selector;
/// missing elements are skipped.
#[inline]
pub fn on_click(
    root: &web::Document,
    selector: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Ok(Some(el)) = root.query_selector(selector) {
        add_click_listener(&el, handler);
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn container_viewport(container: &web::Element) -> Viewport {
    Viewport::new(
        container.client_width() as f32,
        container.client_height() as f32,
    )
}

/// Size the canvas to the container; the backing store uses a capped pixel
/// ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let w_px = (viewport.width as f64 * dpr) as u32;
        let h_px = (viewport.height as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    _ = style.set_property("display", "block");
}

#[inline]
pub fn set_display(el: &web::Element, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property("display", value);
    }
}

#[inline]
pub fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}
