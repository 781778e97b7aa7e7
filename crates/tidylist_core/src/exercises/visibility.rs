//! Visibility toggling on a styled element.

use super::element::StyleTarget;

pub const DISPLAY_NONE: &str = "none";
pub const DISPLAY_BLOCK: &str = "block";

/// Hides a visible element and shows a hidden one.
///
/// Writes `display` exactly once per call.
pub fn toggle_visibility<E: StyleTarget + ?Sized>(element: &mut E) {
    let next = if element.display() == DISPLAY_NONE {
        DISPLAY_BLOCK
    } else {
        DISPLAY_NONE
    };
    element.set_display(next);
}

#[cfg(test)]
mod tests {
    use super::toggle_visibility;
    use crate::exercises::element::{Element, StyleTarget};

    /// Wraps an element and records every `display` write.
    struct DisplaySpy {
        inner: Element,
        writes: Vec<String>,
    }

    impl DisplaySpy {
        fn new(inner: Element) -> Self {
            Self {
                inner,
                writes: Vec::new(),
            }
        }
    }

    impl StyleTarget for DisplaySpy {
        fn display(&self) -> &str {
            self.inner.display()
        }

        fn set_display(&mut self, value: &str) {
            self.writes.push(value.to_string());
            self.inner.set_display(value);
        }
    }

    #[test]
    fn default_display_becomes_none() {
        let mut spy = DisplaySpy::new(Element::new());
        toggle_visibility(&mut spy);
        assert_eq!(spy.display(), "none");
        assert_eq!(spy.writes, vec!["none"]);
    }

    #[test]
    fn none_becomes_block() {
        let mut spy = DisplaySpy::new(Element::with_display("none"));
        toggle_visibility(&mut spy);
        assert_eq!(spy.display(), "block");
        assert_eq!(spy.writes, vec!["block"]);
    }

    #[test]
    fn block_becomes_none() {
        let mut spy = DisplaySpy::new(Element::with_display("block"));
        toggle_visibility(&mut spy);
        assert_eq!(spy.display(), "none");
    }

    #[test]
    fn each_toggle_writes_once() {
        let mut spy = DisplaySpy::new(Element::new());
        toggle_visibility(&mut spy);
        toggle_visibility(&mut spy);
        toggle_visibility(&mut spy);
        assert_eq!(spy.writes, vec!["none", "block", "none"]);
        assert!(spy.inner.is_hidden());
    }
}
