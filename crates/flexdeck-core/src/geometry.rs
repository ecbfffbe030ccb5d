// ABOUTME: Geometry primitives shared across crates.
// ABOUTME: Rectangles in host coordinates (pixels or normalized units).

/// Axis-aligned rectangle: origin at top-left, y grows downward.
///
/// Units are whatever the host hands in (pixels, normalized 0..1);
/// the layout engine only ever subdivides, so it never cares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The unit rectangle (normalized coordinates, 0.0 to 1.0).
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}
