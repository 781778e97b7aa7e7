//! Minimal presentation element used by the DOM-style exercises.

/// Something with a CSS-like `display` property.
pub trait StyleTarget {
    fn display(&self) -> &str;
    fn set_display(&mut self, value: &str);
}

/// Something whose text content can be replaced.
pub trait TextTarget {
    fn text_content(&self) -> &str;
    fn set_text_content(&mut self, value: &str);
}

/// Plain element with an inline `display` style and text content.
///
/// An empty `display` means the default (visible) style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    display: String,
    text: String,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            text: String::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == "none"
    }
}

impl StyleTarget for Element {
    fn display(&self) -> &str {
        &self.display
    }

    fn set_display(&mut self, value: &str) {
        self.display = value.to_string();
    }
}

impl TextTarget for Element {
    fn text_content(&self) -> &str {
        &self.text
    }

    fn set_text_content(&mut self, value: &str) {
        self.text = value.to_string();
    }
}
