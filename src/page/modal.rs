use crate::core::carousel::Carousel;
use crate::core::project::{embed_url, ProjectDetails};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const ACTIVE: &str = "active";

fn find<T: JsCast>(document: &web::Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn set_open(document: &web::Document, root: &web::Element, open: bool) {
    let cl = root.class_list();
    _ = if open {
        cl.add_1(ACTIVE)
    } else {
        cl.remove_1(ACTIVE)
    };
    _ = root.set_attribute("aria-hidden", if open { "false" } else { "true" });
    dom::set_body_scroll_locked(document, open);
}

/// True when the click landed on the backdrop itself, not on its content.
fn is_backdrop_click(ev: &web::MouseEvent, root: &web::Element) -> bool {
    ev.target()
        .map(|t| {
            js_sys::Object::is(
                AsRef::<JsValue>::as_ref(&t),
                AsRef::<JsValue>::as_ref(root),
            )
        })
        .unwrap_or(false)
}

/// Project details dialog with optional video embed and image carousel.
pub struct ProjectModal {
    document: web::Document,
    root: web::Element,
    video: Option<web::HtmlIFrameElement>,
    video_container: Option<web::Element>,
    title: Option<web::HtmlElement>,
    description: Option<web::HtmlElement>,
    window_title: Option<web::HtmlElement>,
    image: Option<web::HtmlImageElement>,
    image_container: Option<web::Element>,
    prev_btn: Option<web::Element>,
    next_btn: Option<web::Element>,
    counter: Option<web::HtmlElement>,
    carousel: RefCell<Carousel>,
}

impl ProjectModal {
    pub fn locate(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id("project-modal")?;
        Some(Self {
            document: document.clone(),
            root,
            video: find(document, "#modal-video"),
            video_container: find(document, ".video-container"),
            title: find(document, "#modal-project-title"),
            description: find(document, "#modal-project-desc"),
            window_title: find(document, ".modal-title"),
            image: find(document, "#modal-image"),
            image_container: find(document, ".modal-image-container"),
            prev_btn: find(document, ".carousel-prev"),
            next_btn: find(document, ".carousel-next"),
            counter: find(document, ".image-counter"),
            carousel: RefCell::new(Carousel::default()),
        })
    }

    pub fn is_active(&self) -> bool {
        self.root.class_list().contains(ACTIVE)
    }

    pub fn open(&self, details: ProjectDetails) {
        if let Some(video) = &self.video {
            match &details.video_id {
                Some(id) => {
                    video.set_src(&embed_url(id));
                    if let Some(c) = &self.video_container {
                        dom::set_display(c, "block");
                    }
                }
                None => {
                    video.set_src("");
                    if let Some(c) = &self.video_container {
                        dom::set_display(c, "none");
                    }
                }
            }
        }
        if let Some(t) = &self.title {
            t.set_inner_text(&details.title);
        }
        if let Some(d) = &self.description {
            d.set_inner_text(&details.description);
        }
        if let Some(w) = &self.window_title {
            w.set_inner_text(&details.window_title);
        }

        *self.carousel.borrow_mut() = Carousel::new(details.images);
        self.show_image();

        set_open(&self.document, &self.root, true);
        log::debug!("[page] opened project `{}`", details.title);
    }

    pub fn close(&self) {
        set_open(&self.document, &self.root, false);
        if let Some(video) = &self.video {
            video.set_src("");
        }
        if let Some(img) = &self.image {
            img.set_src("");
        }
        self.carousel.borrow_mut().clear();
    }

    pub fn step(&self, forward: bool) {
        let moved = {
            let mut c = self.carousel.borrow_mut();
            if forward {
                c.next()
            } else {
                c.prev()
            }
        };
        if moved {
            self.show_image();
        }
    }

    fn show_image(&self) {
        let carousel = self.carousel.borrow();
        let Some(src) = carousel.current() else {
            if let Some(img) = &self.image {
                img.set_src("");
            }
            if let Some(c) = &self.image_container {
                dom::set_display(c, "none");
            }
            return;
        };
        if let Some(img) = &self.image {
            img.set_src(src);
        }
        if let Some(c) = &self.image_container {
            dom::set_display(c, "flex");
        }
        let controls = if carousel.has_controls() { "flex" } else { "none" };
        for btn in [&self.prev_btn, &self.next_btn].into_iter().flatten() {
            dom::set_display(btn, controls);
        }
        if let Some(counter) = &self.counter {
            if carousel.has_controls() {
                dom::set_display(counter, "block");
                counter.set_inner_text(&carousel.counter_label());
            } else {
                dom::set_display(counter, "none");
            }
        }
    }
}

fn read_card(card: &web::Element) -> ProjectDetails {
    let heading = card
        .query_selector("h5")
        .ok()
        .flatten()
        .and_then(|h| h.text_content())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    ProjectDetails::from_attrs(
        card.get_attribute("data-video-id"),
        card.get_attribute("data-description"),
        card.get_attribute("data-images"),
        card.get_attribute("data-project-title"),
        card.get_attribute("data-window-title"),
        &heading,
    )
}

pub struct ResumeModal {
    document: web::Document,
    root: web::Element,
}

impl ResumeModal {
    pub fn locate(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id("resume-modal")?;
        Some(Self {
            document: document.clone(),
            root,
        })
    }

    pub fn is_active(&self) -> bool {
        self.root.class_list().contains(ACTIVE)
    }

    pub fn open(&self) {
        set_open(&self.document, &self.root, true);
    }

    pub fn close(&self) {
        set_open(&self.document, &self.root, false);
    }
}

/// Both dialogs, so global handlers (Escape) can reach whichever is open.
#[derive(Default)]
pub struct ModalSet {
    pub project: Option<Rc<ProjectModal>>,
    pub resume: Option<Rc<ResumeModal>>,
}

impl ModalSet {
    pub fn close_active(&self) {
        if let Some(p) = self.project.as_ref().filter(|p| p.is_active()) {
            p.close();
        }
        if let Some(r) = self.resume.as_ref().filter(|r| r.is_active()) {
            r.close();
        }
    }
}

fn wire_project(document: &web::Document, modal: &Rc<ProjectModal>) {
    let cards = dom::query_all(document, ".project-card");
    log::debug!("[page] {} project cards", cards.len());
    for card in cards {
        let m = modal.clone();
        let c = card.clone();
        dom::add_click_listener(&card, move |_| m.open(read_card(&c)));
    }

    if let Ok(Some(close)) = modal.root.query_selector(".modal-close") {
        let m = modal.clone();
        dom::add_click_listener(&close, move |_| m.close());
    }
    if let Some(prev) = &modal.prev_btn {
        let m = modal.clone();
        dom::add_click_listener(prev, move |ev| {
            ev.stop_propagation();
            m.step(false);
        });
    }
    if let Some(next) = &modal.next_btn {
        let m = modal.clone();
        dom::add_click_listener(next, move |ev| {
            ev.stop_propagation();
            m.step(true);
        });
    }
    let m = modal.clone();
    dom::add_click_listener(&modal.root, move |ev| {
        if is_backdrop_click(&ev, &m.root) {
            m.close();
        }
    });
}

fn wire_resume(document: &web::Document, modal: &Rc<ResumeModal>) {
    let m = modal.clone();
    dom::on_click(document, "#resume-btn", move |ev| {
        ev.prevent_default();
        m.open();
    });
    if let Ok(Some(close)) = modal.root.query_selector(".modal-close") {
        let m = modal.clone();
        dom::add_click_listener(&close, move |_| m.close());
    }
    let m = modal.clone();
    dom::add_click_listener(&modal.root, move |ev| {
        if is_backdrop_click(&ev, &m.root) {
            m.close();
        }
    });
}

/// Find both dialogs and attach their click handlers. Absent dialogs are
/// simply left out of the returned set.
pub fn wire_modals(document: &web::Document) -> ModalSet {
    let project = ProjectModal::locate(document).map(Rc::new);
    let resume = ResumeModal::locate(document).map(Rc::new);
    if let Some(p) = &project {
        wire_project(document, p);
    }
    if let Some(r) = &resume {
        wire_resume(document, r);
    }
    ModalSet { project, resume }
}
