#![cfg(target_arch = "wasm32")]
use crate::core::{
    build_scene, Animator, CameraRig, FrameGeometry, PointerState, SceneConfig, ScenePreset,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;

const CONTAINER_ID: &str = "canvas-container";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Some(document) = dom::window_document() {
        init_page(&document);
    }

    spawn_local(async move {
        if let Err(e) = init_background().await {
            log::error!("[scene] init error: {:?}", e);
        }
    });
    Ok(())
}

fn init_page(document: &web::Document) {
    page::terminal::wire_on_load(document);
    page::scroll::wire_smooth_anchors(document);
    let modals = Rc::new(page::modal::wire_modals(document));
    events::wire_escape_closes_modals(modals);
    if let Err(e) = page::reveal::wire_scroll_reveal(document) {
        log::warn!("[page] scroll reveal disabled: {:?}", e);
    }
    log::info!("System Operational");
}

fn preset_for(container: &web::Element) -> ScenePreset {
    match container.get_attribute("data-preset") {
        None => ScenePreset::default(),
        Some(raw) => raw.parse::<ScenePreset>().unwrap_or_else(|e| {
            log::warn!("[scene] {}; using {}", e, ScenePreset::default());
            ScenePreset::default()
        }),
    }
}

async fn init_background() -> anyhow::Result<()> {
    let t0 = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The background is decoration: no container means nothing to do.
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::debug!("[scene] #{} not found, background skipped", CONTAINER_ID);
        return Ok(());
    };
    let viewport = dom::container_viewport(&container);
    let preset = preset_for(&container);
    let config = SceneConfig::for_preset(preset);

    let mut rng = StdRng::from_entropy();
    let Some(scene) = build_scene(config, Some(viewport), &mut rng) else {
        return Ok(());
    };
    log::info!(
        "[scene] preset={} {}x{} particles={} streams={} nodes={}",
        preset,
        viewport.width,
        viewport.height,
        scene.particles.points.len(),
        scene.streams.len(),
        scene.nodes.len()
    );

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas, viewport);

    let camera = Rc::new(RefCell::new(CameraRig::new(viewport, config.parallax)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    if config.parallax {
        events::wire_pointer_parallax(pointer.clone());
    }
    events::wire_container_resize(container.clone(), canvas.clone(), camera.clone());

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        return Ok(());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        pointer,
        animator: Animator::new(),
        geometry: FrameGeometry::new(),
        canvas,
        gpu,
    }));
    log::info!("[scene] ready in {} ms", t0.elapsed().as_millis());
    frame::start_loop(frame_ctx);
    Ok(())
}
