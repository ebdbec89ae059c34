use crate::core::carousel::parse_image_list;

/// Everything the project modal shows, read from a card's data attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetails {
    pub video_id: Option<String>,
    pub description: String,
    pub images: Vec<String>,
    pub title: String,
    pub window_title: String,
}

/// `"My Cool  App"` becomes `"My_Cool_App.exe"`.
pub fn default_window_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len() + 4);
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.push_str(".exe");
    out
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1")
}

impl ProjectDetails {
    /// `heading` is the card's own heading text, used when no explicit title
    /// attribute is present.
    pub fn from_attrs(
        video_id: Option<String>,
        description: Option<String>,
        images: Option<String>,
        project_title: Option<String>,
        window_title: Option<String>,
        heading: &str,
    ) -> Self {
        let title = project_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| heading.to_string());
        let window_title = window_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_window_title(&title));
        Self {
            video_id: video_id.filter(|v| !v.is_empty()),
            description: description.unwrap_or_default(),
            images: parse_image_list(images.as_deref()),
            title,
            window_title,
        }
    }
}
