/// Split a comma-separated image attribute, dropping blank entries.
pub fn parse_image_list(attr: Option<&str>) -> Vec<String> {
    attr.map(|s| {
        s.split(',')
            .filter(|img| !img.trim().is_empty())
            .map(|img| img.to_string())
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.index = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Prev/next buttons and the counter only make sense with 2+ images.
    #[inline]
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Returns false when there is nothing to step through.
    pub fn next(&mut self) -> bool {
        if !self.has_controls() {
            return false;
        }
        self.index = (self.index + 1) % self.images.len();
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.has_controls() {
            return false;
        }
        let n = self.images.len();
        self.index = (self.index + n - 1) % n;
        true
    }
}
