use crate::core::terminal::{schedule, TerminalLine, BOOT_SCRIPT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn append_line(document: &web::Document, output: &web::Element, line: &TerminalLine) {
    if let Ok(Some(old)) = output.query_selector(".t-cursor") {
        old.remove();
    }
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let cl = el.class_list();
    _ = cl.add_1("t-line");
    if let Some(extra) = line.kind.class_name() {
        _ = cl.add_1(extra);
    }
    el.set_text_content(Some(&line.display_text()));
    _ = output.append_child(&el);
    output.set_scroll_top(output.scroll_height());
}

/// Type the boot script into `#terminal-output`, one line per timer.
pub fn run(document: &web::Document) {
    let Some(output) = document.get_element_by_id("terminal-output") else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    output.set_inner_html("");

    let mut rng = StdRng::from_entropy();
    let delays = schedule(BOOT_SCRIPT.len(), &mut rng);
    for (line, delay_ms) in BOOT_SCRIPT.iter().zip(delays) {
        let doc = document.clone();
        let out = output.clone();
        let cb = Closure::once_into_js(move || append_line(&doc, &out, line));
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}

/// Start the transcript once the page has finished loading.
pub fn wire_on_load(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    if doc.ready_state() == "complete" {
        run(&doc);
        return;
    }
    let closure = Closure::once_into_js(move || run(&doc));
    _ = window.add_event_listener_with_callback("load", closure.unchecked_ref());
}
