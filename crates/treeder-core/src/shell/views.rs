//! Overlay views shown on top of the WebView (fullscreen video and the like).

/// Stack of custom views above the base WebView.
///
/// Show pushes, hide pops the topmost overlay. The base view is not part of
/// the stack, so a stray hide never removes the WebView.
#[derive(Debug)]
pub struct ViewStack<V> {
    overlays: Vec<V>,
}

impl<V> Default for ViewStack<V> {
    fn default() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }
}

impl<V> ViewStack<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, view: V) {
        self.overlays.push(view);
    }

    /// Removes and returns the topmost overlay, if any.
    pub fn hide(&mut self) -> Option<V> {
        self.overlays.pop()
    }

    pub fn top(&self) -> Option<&V> {
        self.overlays.last()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
