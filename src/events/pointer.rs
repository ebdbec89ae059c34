use crate::core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client position normalized against the window, not the canvas.
#[inline]
fn pointer_from_event(window: &web::Window, ev: &web::MouseEvent) -> PointerState {
    let inner_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let inner_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    PointerState::from_client(ev.client_x() as f32, ev.client_y() as f32, inner_w, inner_h)
}

/// Feed window mouse movement into the shared pointer state. The frame loop
/// picks it up on its next tick.
pub fn wire_pointer_parallax(pointer: Rc<RefCell<PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        *pointer.borrow_mut() = pointer_from_event(&wnd, &ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
