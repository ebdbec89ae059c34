// Host-side tests for the page interaction helpers: carousel, terminal
// transcript, project card parsing and preset selection.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod carousel {
        include!("../src/core/carousel.rs");
    }
    pub mod preset {
        include!("../src/core/preset.rs");
    }
    pub mod project {
        include!("../src/core/project.rs");
    }
    pub mod terminal {
        include!("../src/core/terminal.rs");
    }
}

use crate::core::carousel::{parse_image_list, Carousel};
use crate::core::preset::ScenePreset;
use crate::core::project::{default_window_title, embed_url, ProjectDetails};
use crate::core::terminal::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn three_images() -> Carousel {
    Carousel::new(vec!["a.png".into(), "b.png".into(), "c.png".into()])
}

#[test]
fn carousel_wraps_both_ways() {
    let mut c = three_images();
    assert_eq!(c.current(), Some("a.png"));
    assert!(c.prev());
    assert_eq!(c.index(), 2);
    assert_eq!(c.counter_label(), "3 / 3");
    assert!(c.next());
    assert_eq!(c.index(), 0);
    assert!(c.next());
    assert_eq!(c.current(), Some("b.png"));
    assert_eq!(c.counter_label(), "2 / 3");
}

#[test]
fn carousel_without_choice_does_not_move() {
    let mut single = Carousel::new(vec!["only.png".into()]);
    assert!(!single.has_controls());
    assert!(!single.next());
    assert!(!single.prev());
    assert_eq!(single.index(), 0);

    let mut empty = Carousel::default();
    assert!(empty.is_empty());
    assert_eq!(empty.current(), None);
    assert!(!empty.next());
}

#[test]
fn carousel_clear_resets_index() {
    let mut c = three_images();
    c.next();
    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.index(), 0);
}

#[test]
fn image_list_drops_blank_entries() {
    assert_eq!(
        parse_image_list(Some("a.png,b.png,, ,")),
        vec!["a.png".to_string(), "b.png".to_string()]
    );
    assert!(parse_image_list(Some("")).is_empty());
    assert!(parse_image_list(None).is_empty());
}

#[test]
fn window_title_collapses_whitespace_runs() {
    assert_eq!(default_window_title("My Cool  App"), "My_Cool_App.exe");
    assert_eq!(default_window_title("Solo"), "Solo.exe");
    assert_eq!(default_window_title("Tab\tand\nnewline"), "Tab_and_newline.exe");
}

#[test]
fn project_details_fall_back_to_heading() {
    let d = ProjectDetails::from_attrs(
        Some("abc123".into()),
        Some("desc".into()),
        Some("x.png,y.png".into()),
        None,
        None,
        "Test Runner",
    );
    assert_eq!(d.title, "Test Runner");
    assert_eq!(d.window_title, "Test_Runner.exe");
    assert_eq!(d.images.len(), 2);
    assert_eq!(d.video_id.as_deref(), Some("abc123"));
    assert_eq!(
        embed_url("abc123"),
        "https://www.youtube.com/embed/abc123?autoplay=1"
    );
}

#[test]
fn project_details_prefer_explicit_attributes() {
    let d = ProjectDetails::from_attrs(
        Some(String::new()),
        None,
        None,
        Some("Framework".into()),
        Some("fw.sh".into()),
        "Heading",
    );
    assert_eq!(d.title, "Framework");
    assert_eq!(d.window_title, "fw.sh");
    assert_eq!(d.video_id, None);
    assert_eq!(d.description, "");
    assert!(d.images.is_empty());
}

#[test]
fn terminal_lines_render_with_prefixes() {
    let ok = TerminalLine::new("done", LineKind::Success);
    assert_eq!(ok.display_text(), "✓ done");
    assert_eq!(ok.kind.class_name(), Some("t-success"));
    assert_eq!(TerminalLine::new("note", LineKind::Info).display_text(), "i note");
    assert_eq!(TerminalLine::new("bad", LineKind::Error).display_text(), "✗ bad");
    assert_eq!(TerminalLine::new("_", LineKind::Cursor).display_text(), "");
    assert_eq!(TerminalLine::new("> ls", LineKind::Text).display_text(), "> ls");
    assert_eq!(LineKind::Text.class_name(), None);
}

#[test]
fn boot_script_ends_with_cursor() {
    assert_eq!(BOOT_SCRIPT.len(), 8);
    assert_eq!(BOOT_SCRIPT.last().map(|l| l.kind), Some(LineKind::Cursor));
    assert_eq!(
        BOOT_SCRIPT.iter().filter(|l| l.kind == LineKind::Cursor).count(),
        1
    );
}

#[test]
fn schedule_is_increasing_with_bounded_gaps() {
    let mut rng = StdRng::seed_from_u64(21);
    let delays = schedule(BOOT_SCRIPT.len(), &mut rng);
    assert_eq!(delays.len(), BOOT_SCRIPT.len());
    let mut prev = 0;
    for d in delays {
        let gap = d - prev;
        assert!(gap >= LINE_GAP_MIN_MS && gap < LINE_GAP_MIN_MS + LINE_GAP_SPAN_MS);
        prev = d;
    }
}

#[test]
fn preset_parses_case_insensitively() {
    assert_eq!("Drift".parse::<ScenePreset>(), Ok(ScenePreset::Drift));
    assert_eq!(" parallax ".parse::<ScenePreset>(), Ok(ScenePreset::Parallax));
    let err = "neon".parse::<ScenePreset>().unwrap_err();
    assert!(err.to_string().contains("neon"));
    assert_eq!(ScenePreset::default(), ScenePreset::Parallax);
    assert_eq!(ScenePreset::Drift.to_string(), "drift");
}
