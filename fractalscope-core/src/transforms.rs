//! Viewport transforms driven by pixel-space gestures.
//!
//! Every function takes the current viewport by reference and returns the
//! viewport that should be rendered next. Gesture state (drag origin, selection
//! start) belongs to the caller.

use crate::config::{WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::pixel_rect::PixelRect;
use crate::viewport::{clamp_zoom, Viewport};

pub fn calculate_aspect_ratio(canvas_width: u32, canvas_height: u32) -> f64 {
    canvas_width as f64 / canvas_height.max(1) as f64
}

/// Pan by a pixel delta measured from the start of the drag.
///
/// `origin` must be the viewport captured when the drag began, and `dx`/`dy`
/// the total pointer movement since then. Re-deriving from the origin on every
/// move keeps repeated rounding from drifting the view.
pub fn pan_viewport(origin: &Viewport, dx_pixels: f64, dy_pixels: f64) -> Viewport {
    let new_center_x = origin.center_x - dx_pixels * origin.scale_x();
    let new_center_y = origin.center_y - dy_pixels * origin.scale_y();
    origin.with_center_and_zoom(new_center_x, new_center_y, origin.zoom)
}

/// Zoom by `factor` keeping the plane point under (`pixel_x`, `pixel_y`) fixed.
///
/// The anchor is resolved before the zoom changes. When the requested zoom is
/// clamped, the center is solved for the clamped value so the anchor still
/// holds. A non-finite or non-positive factor leaves the viewport unchanged.
pub fn zoom_viewport_at_point(
    viewport: &Viewport,
    pixel_x: f64,
    pixel_y: f64,
    factor: f64,
) -> Viewport {
    if !factor.is_finite() || factor <= 0.0 {
        return *viewport;
    }

    let (anchor_x, anchor_y) = viewport.pixel_to_plane(pixel_x, pixel_y);
    let new_zoom = clamp_zoom(viewport.zoom * factor);

    // Offsets from the center scale with the visible extent, i.e. with 1/zoom
    let shrink = viewport.zoom / new_zoom;
    let new_center_x = anchor_x - (anchor_x - viewport.center_x) * shrink;
    let new_center_y = anchor_y - (anchor_y - viewport.center_y) * shrink;

    viewport.with_center_and_zoom(new_center_x, new_center_y, new_zoom)
}

/// Zoom so that `rect` fills the canvas.
///
/// `rect` is expected to already match the canvas aspect ratio (see
/// [`constrain_selection`]); the new zoom is derived from its plane-space width
/// and the view is centered on its plane-space midpoint. An empty rectangle is
/// a no-op.
pub fn zoom_viewport_to_rect(viewport: &Viewport, rect: &PixelRect) -> Viewport {
    if rect.is_empty() {
        return *viewport;
    }

    let (x0, y0) = viewport.pixel_to_plane(rect.x as f64, rect.y as f64);
    let (x1, y1) = viewport.pixel_to_plane(
        rect.x as f64 + rect.width as f64,
        rect.y as f64 + rect.height as f64,
    );

    let plane_width = x1 - x0;
    let new_zoom = 2.0 * viewport.base_half_width / plane_width;

    viewport.with_center_and_zoom((x0 + x1) / 2.0, (y0 + y1) / 2.0, new_zoom)
}

/// Recenter on the plane point under a pixel, zoom unchanged.
pub fn center_viewport_at_pixel(viewport: &Viewport, pixel_x: f64, pixel_y: f64) -> Viewport {
    let (re, im) = viewport.pixel_to_plane(pixel_x, pixel_y);
    viewport.with_center_and_zoom(re, im, viewport.zoom)
}

/// Zoom factor for one wheel event: scrolling down zooms out.
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT
    } else {
        WHEEL_ZOOM_IN
    }
}

/// Selection rectangle for a drag from `start` to `current`, forced to the
/// canvas aspect ratio.
///
/// The rectangle is anchored at `start` and extends towards `current`. The
/// side that is short relative to the canvas ratio is grown to match, then the
/// rectangle is shrunk (keeping the ratio) until it fits inside the canvas.
pub fn constrain_selection(
    start: (f64, f64),
    current: (f64, f64),
    canvas_width: u32,
    canvas_height: u32,
) -> PixelRect {
    let canvas_w = canvas_width as f64;
    let canvas_h = canvas_height as f64;
    let ratio = calculate_aspect_ratio(canvas_width, canvas_height);

    let start_x = start.0.clamp(0.0, canvas_w);
    let start_y = start.1.clamp(0.0, canvas_h);
    let dx = current.0 - start_x;
    let dy = current.1 - start_y;

    let mut width = dx.abs();
    let mut height = dy.abs();
    if width < height * ratio {
        width = height * ratio;
    } else {
        height = width / ratio;
    }

    // Room left between the anchor and the canvas edge in the drag direction
    let max_width = if dx >= 0.0 { canvas_w - start_x } else { start_x };
    let max_height = if dy >= 0.0 { canvas_h - start_y } else { start_y };

    if width > max_width {
        width = max_width;
        height = width / ratio;
    }
    if height > max_height {
        height = max_height;
        width = height * ratio;
    }

    let x = if dx >= 0.0 { start_x } else { start_x - width };
    let y = if dy >= 0.0 { start_y } else { start_y - height };

    PixelRect::new(
        whole_pixels(x),
        whole_pixels(y),
        whole_pixels(width),
        whole_pixels(height),
    )
}

/// Floor to whole pixels, tolerating ratio round-off just below an integer.
fn whole_pixels(value: f64) -> u32 {
    (value + 1e-6).floor().max(0.0) as u32
}
