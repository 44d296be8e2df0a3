//! Render parameters: the immutable snapshot one render pass consumes.

use crate::config::{FractalKind, DEFAULT_ITERATIONS};
use serde::{Deserialize, Serialize};

/// How classification results are turned into colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Hue sweep over the normalized iteration count.
    #[default]
    Rainbow,
    /// Linear gray ramp over the normalized iteration count.
    Grayscale,
    /// Warped interpolation between the primary and secondary colors.
    Custom,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::Rainbow,
        ColorScheme::Grayscale,
        ColorScheme::Custom,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ColorScheme::Rainbow => "rainbow",
            ColorScheme::Grayscale => "grayscale",
            ColorScheme::Custom => "custom",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.id() == id)
    }
}

/// Tunables of the custom interpolation scheme.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorOptions {
    /// Multiplier applied to each interpolated channel.
    pub brightness: f64,
    /// Contrast around mid-gray: `(v - 128) * contrast + 128`.
    pub contrast: f64,
    /// Exponent applied to the normalized iteration count before interpolation.
    pub warp_exponent: f64,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            brightness: 2.0,
            contrast: 1.5,
            warp_exponent: 0.5,
        }
    }
}

impl ColorOptions {
    /// Plain interpolation: no brightness, contrast, or warp.
    pub fn neutral() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            warp_exponent: 1.0,
        }
    }
}

/// Everything a render pass needs besides the viewport.
///
/// Colors are kept as the hex strings the presentation layer supplied; the
/// colorizer parses them and falls back to grayscale when they are malformed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    pub fractal_kind: FractalKind,
    pub max_iterations: u32,
    pub color_scheme: ColorScheme,
    pub primary_color: String,
    pub secondary_color: String,
    pub julia_constant: (f64, f64),
    #[serde(default)]
    pub color_options: ColorOptions,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            fractal_kind: FractalKind::Mandelbrot,
            max_iterations: DEFAULT_ITERATIONS,
            color_scheme: ColorScheme::Rainbow,
            primary_color: "#ff0000".to_string(),
            secondary_color: "#0000ff".to_string(),
            julia_constant: (-0.7, 0.27),
            color_options: ColorOptions::default(),
        }
    }
}

impl RenderParameters {
    pub fn for_kind(kind: FractalKind) -> Self {
        Self {
            fractal_kind: kind,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_colors(mut self, primary: &str, secondary: &str) -> Self {
        self.primary_color = primary.to_string();
        self.secondary_color = secondary.to_string();
        self
    }

    pub fn with_julia_constant(mut self, re: f64, im: f64) -> Self {
        self.julia_constant = (re, im);
        self
    }

    pub fn with_color_options(mut self, options: ColorOptions) -> Self {
        self.color_options = options;
        self
    }
}
