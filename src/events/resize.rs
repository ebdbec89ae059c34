use crate::core::CameraRig;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep camera aspect, orbit distance and canvas backing size in step with
/// the container. The surface itself is reconfigured lazily by the renderer.
pub fn wire_container_resize(
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    camera: Rc<RefCell<CameraRig>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::container_viewport(&container);
        camera.borrow_mut().resize(viewport);
        dom::sync_canvas_backing_size(&canvas, viewport);
        log::debug!(
            "[scene] resize {}x{} distance={}",
            viewport.width,
            viewport.height,
            camera.borrow().distance
        );
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}
