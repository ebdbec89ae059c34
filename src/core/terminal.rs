use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Text,
    Success,
    Info,
    Error,
    Cursor,
}

impl LineKind {
    /// Extra CSS class on top of `t-line`.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            LineKind::Text => None,
            LineKind::Success => Some("t-success"),
            LineKind::Info => Some("t-info"),
            LineKind::Error => Some("t-error"),
            LineKind::Cursor => Some("t-cursor"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TerminalLine {
    pub text: &'static str,
    pub kind: LineKind,
}

impl TerminalLine {
    pub const fn new(text: &'static str, kind: LineKind) -> Self {
        Self { text, kind }
    }

    pub fn display_text(&self) -> String {
        match self.kind {
            LineKind::Success => format!("✓ {}", self.text),
            LineKind::Info => format!("i {}", self.text),
            LineKind::Error => format!("✗ {}", self.text),
            LineKind::Cursor => String::new(),
            LineKind::Text => self.text.to_string(),
        }
    }
}

pub const BOOT_SCRIPT: &[TerminalLine] = &[
    TerminalLine::new("> Initializing environment...", LineKind::Text),
    TerminalLine::new("> Loading modules: [Playwright, Python]", LineKind::Text),
    TerminalLine::new(
        "> Executing test suite 'Portfolio_Health_Check'...",
        LineKind::Text,
    ),
    TerminalLine::new("[PASS] Core Systems Operational", LineKind::Success),
    TerminalLine::new("[PASS] UI/UX Rendered Successfully", LineKind::Success),
    TerminalLine::new("[INFO] Automation efficiency at 99.9%", LineKind::Info),
    TerminalLine::new(
        "> Deployment successful. Welcome to my Portfolio!",
        LineKind::Text,
    ),
    TerminalLine::new("_", LineKind::Cursor),
];

pub const LINE_GAP_MIN_MS: u32 = 200;
pub const LINE_GAP_SPAN_MS: u32 = 500;

/// Cumulative reveal times (ms from start), jittered per line.
pub fn schedule(line_count: usize, rng: &mut impl Rng) -> Vec<u32> {
    let mut acc = 0u32;
    (0..line_count)
        .map(|_| {
            acc += LINE_GAP_MIN_MS + rng.gen_range(0..LINE_GAP_SPAN_MS);
            acc
        })
        .collect()
}
