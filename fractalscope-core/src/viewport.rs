use crate::config::{FractalKind, MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};

/// Viewport onto the fractal plane.
///
/// Maps the canvas (`pixel_width` x `pixel_height`) onto a rectangle of the
/// plane centered at (`center_x`, `center_y`):
/// - visible half-width is `base_half_width / zoom`
/// - visible half-height is `base_half_height / zoom`
///
/// The base extents come from the fractal kind's config. Transform functions
/// never mutate a viewport; they return a new one.
///
/// Deserialization goes through the same constructors, so a decoded viewport
/// always has a clamped zoom and non-zero canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ViewportFields")]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub base_half_width: f64,
    pub base_half_height: f64,
}

/// Wire shape of [`Viewport`], before repair.
#[derive(Deserialize)]
struct ViewportFields {
    center_x: f64,
    center_y: f64,
    zoom: f64,
    pixel_width: u32,
    pixel_height: u32,
    base_half_width: f64,
    base_half_height: f64,
}

impl From<ViewportFields> for Viewport {
    fn from(fields: ViewportFields) -> Self {
        let fallback = FractalKind::default().config();
        let extent = |value: f64, default: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        };
        let coordinate = |value: f64| if value.is_finite() { value } else { 0.0 };

        Self {
            base_half_width: extent(fields.base_half_width, fallback.base_half_width),
            base_half_height: extent(fields.base_half_height, fallback.base_half_height),
            ..Self::default()
        }
        .with_canvas_size(fields.pixel_width, fields.pixel_height)
        .with_center_and_zoom(
            coordinate(fields.center_x),
            coordinate(fields.center_y),
            fields.zoom,
        )
    }
}

impl Viewport {
    /// Default view (origin, zoom 1) for `kind` on a canvas of the given size.
    pub fn for_kind(kind: FractalKind, pixel_width: u32, pixel_height: u32) -> Self {
        let config = kind.config();
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            pixel_width: pixel_width.max(1),
            pixel_height: pixel_height.max(1),
            base_half_width: config.base_half_width,
            base_half_height: config.base_half_height,
        }
    }

    /// Same view with `center` and `zoom` replaced. Zoom is clamped to the
    /// representable range.
    pub fn with_center_and_zoom(&self, center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom: clamp_zoom(zoom),
            ..*self
        }
    }

    /// Same center and zoom, rebased onto another kind's extents.
    pub fn with_kind(&self, kind: FractalKind) -> Self {
        let config = kind.config();
        Self {
            base_half_width: config.base_half_width,
            base_half_height: config.base_half_height,
            ..*self
        }
    }

    /// Same center and zoom on a resized canvas.
    pub fn with_canvas_size(&self, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width: pixel_width.max(1),
            pixel_height: pixel_height.max(1),
            ..*self
        }
    }

    /// Back to the origin at zoom 1, keeping canvas size and kind extents.
    pub fn reset(&self) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            ..*self
        }
    }

    pub fn half_width(&self) -> f64 {
        self.base_half_width / self.zoom
    }

    pub fn half_height(&self) -> f64 {
        self.base_half_height / self.zoom
    }

    /// Plane units per pixel along x.
    pub fn scale_x(&self) -> f64 {
        2.0 * self.half_width() / self.pixel_width as f64
    }

    /// Plane units per pixel along y.
    pub fn scale_y(&self) -> f64 {
        2.0 * self.half_height() / self.pixel_height as f64
    }

    /// Convert a pixel position to plane coordinates.
    ///
    /// Pixel (0, 0) is the top-left corner of the visible rectangle; y grows
    /// downwards in both spaces.
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> (f64, f64) {
        let half_width = self.half_width();
        let half_height = self.half_height();
        let x_min = self.center_x - half_width;
        let y_min = self.center_y - half_height;
        (
            x_min + (2.0 * half_width) * px / self.pixel_width as f64,
            y_min + (2.0 * half_height) * py / self.pixel_height as f64,
        )
    }

    /// Exact inverse of [`Viewport::pixel_to_plane`].
    pub fn plane_to_pixel(&self, re: f64, im: f64) -> (f64, f64) {
        let half_width = self.half_width();
        let half_height = self.half_height();
        let x_min = self.center_x - half_width;
        let y_min = self.center_y - half_height;
        (
            (re - x_min) * self.pixel_width as f64 / (2.0 * half_width),
            (im - y_min) * self.pixel_height as f64 / (2.0 * half_height),
        )
    }

    /// Visible plane rectangle as `((x_min, y_min), (x_max, y_max))`.
    pub fn plane_bounds(&self) -> ((f64, f64), (f64, f64)) {
        let half_width = self.half_width();
        let half_height = self.half_height();
        (
            (self.center_x - half_width, self.center_y - half_height),
            (self.center_x + half_width, self.center_y + half_height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let (width, height) = crate::config::DEFAULT_CANVAS_SIZE;
        Self::for_kind(FractalKind::default(), width, height)
    }
}

/// Clamp a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`. NaN maps to 1.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
