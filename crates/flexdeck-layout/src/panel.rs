// ABOUTME: Resizable side panel model.
// ABOUTME: Width drags below the minimum hide the panel instead of shrinking it.

use flexdeck_core::SidebarSettings;

/// Sidebar width and visibility, driven by the same pointer protocol
/// as divider drags but anchored to the window's right edge.
///
/// Unlike a split divider, this is a boundary element: a drag that
/// would shrink it past `min_width` closes the panel and ends the
/// session rather than clamping.
#[derive(Debug)]
pub struct SidePanel {
    visible: bool,
    width: f32,
    min_width: f32,
    max_width: f32,
    resizing: bool,
}

impl SidePanel {
    pub fn new(settings: &SidebarSettings) -> Self {
        Self {
            visible: false,
            width: settings.default_width,
            min_width: settings.min_width,
            max_width: settings.max_width,
            resizing: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Pointer-down on the panel's resize handle.
    pub fn begin_resize(&mut self) {
        self.resizing = true;
    }

    /// Pointer-move anywhere in the window while resizing.
    ///
    /// The panel hangs off the right edge, so its width is the distance
    /// from the pointer to that edge. Below the minimum the panel hides
    /// and the session ends; beyond the maximum the move is ignored.
    pub fn resize(&mut self, window_width: f32, pointer_x: f32) {
        if !self.resizing {
            return;
        }
        let new_width = window_width - pointer_x;
        if new_width < self.min_width {
            self.visible = false;
            self.resizing = false;
            tracing::debug!("Sidebar dragged below {}px, hiding", self.min_width);
            return;
        }
        if new_width <= self.max_width {
            self.width = new_width;
        }
    }

    /// Pointer-up. Idempotent.
    pub fn end_resize(&mut self) {
        self.resizing = false;
    }
}
