pub mod color_space;
pub mod gradient;

pub use color_space::hsv_to_rgb;
pub use gradient::{grayscale, Gradient};

use crate::pixel_buffer::BACKGROUND;
use fractalscope_core::{
    ColorOptions, ColorScheme, ComputeData, EscapeTimeData, RenderParameters, Rgb,
};

/// Hue used to paint the geometric kinds under the rainbow scheme.
const PAINTED_RAINBOW_HUE: f64 = 120.0;

/// Resolved colorizer for one render pass.
///
/// Custom colors are parsed once up front. When either fails to parse the
/// mapper degrades to the grayscale ramp and logs a warning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMapper {
    Rainbow,
    Grayscale,
    Custom {
        gradient: Gradient,
        options: ColorOptions,
    },
    /// Custom scheme whose colors did not parse.
    GrayscaleFallback,
}

impl ColorMapper {
    pub fn from_params(params: &RenderParameters) -> Self {
        match params.color_scheme {
            ColorScheme::Rainbow => ColorMapper::Rainbow,
            ColorScheme::Grayscale => ColorMapper::Grayscale,
            ColorScheme::Custom => {
                match Gradient::from_hex(&params.primary_color, &params.secondary_color) {
                    Ok(gradient) => ColorMapper::Custom {
                        gradient,
                        options: params.color_options,
                    },
                    Err(e) => {
                        log::warn!(
                            "Custom colors {:?}/{:?} rejected ({}), using grayscale",
                            params.primary_color,
                            params.secondary_color,
                            e
                        );
                        ColorMapper::GrayscaleFallback
                    }
                }
            }
        }
    }

    /// Color of an escape-time result. Points that never escaped are black.
    pub fn escape_color(&self, data: &EscapeTimeData) -> Rgb {
        if !data.escaped {
            return Rgb::BLACK;
        }
        let t = data.normalized();
        match self {
            ColorMapper::Rainbow => hsv_to_rgb(t * 360.0, 1.0, 1.0),
            ColorMapper::Grayscale | ColorMapper::GrayscaleFallback => grayscale(t),
            ColorMapper::Custom { gradient, options } => gradient.color_at(t, options),
        }
    }

    /// Foreground color of the geometric and stochastic kinds.
    pub fn painted_color(&self) -> Rgb {
        match self {
            ColorMapper::Rainbow => hsv_to_rgb(PAINTED_RAINBOW_HUE, 1.0, 1.0),
            ColorMapper::Grayscale | ColorMapper::GrayscaleFallback => Rgb::WHITE,
            ColorMapper::Custom { gradient, .. } => gradient.primary,
        }
    }

    pub fn colorize(&self, data: &ComputeData) -> [u8; 4] {
        match data {
            ComputeData::EscapeTime(d) => self.escape_color(d).to_rgba(),
            ComputeData::Painted(true) => self.painted_color().to_rgba(),
            ComputeData::Painted(false) => BACKGROUND,
        }
    }
}
