//! Two-color gradient used by the custom scheme.

use fractalscope_core::{ColorOptions, ColorParseError, Rgb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Gradient {
    pub fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self { primary, secondary }
    }

    pub fn from_hex(primary: &str, secondary: &str) -> Result<Self, ColorParseError> {
        Ok(Self::new(Rgb::from_hex(primary)?, Rgb::from_hex(secondary)?))
    }

    /// Color at normalized position `t`.
    ///
    /// `t` is warped by `t^warp_exponent`, then each interpolated channel is
    /// scaled by `brightness` and stretched around 128 by `contrast`.
    pub fn color_at(&self, t: f64, options: &ColorOptions) -> Rgb {
        let t = t.clamp(0.0, 1.0).powf(options.warp_exponent);
        let channel = |from: u8, to: u8| {
            let v = from as f64 * (1.0 - t) + to as f64 * t;
            let v = v * options.brightness;
            let v = (v - 128.0) * options.contrast + 128.0;
            v.floor().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            channel(self.primary.r, self.secondary.r),
            channel(self.primary.g, self.secondary.g),
            channel(self.primary.b, self.secondary.b),
        )
    }
}

/// Linear gray ramp: `floor(t * 255)`.
pub fn grayscale(t: f64) -> Rgb {
    Rgb::gray((t.clamp(0.0, 1.0) * 255.0).floor() as u8)
}
