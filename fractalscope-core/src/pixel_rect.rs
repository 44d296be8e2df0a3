use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates).
///
/// Used for the zoom-to-rectangle selection while it is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A selection with no width or no height selects nothing.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
