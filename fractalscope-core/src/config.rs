//! Fractal configuration registry.
//!
//! One static entry per fractal kind, plus the tunables shared by the
//! interaction layer (iteration slider range, zoom limits, canvas sizing).

use serde::{Deserialize, Serialize};

/// Smallest iteration budget the UI offers.
pub const MIN_ITERATIONS: u32 = 10;
/// Largest iteration budget the UI offers.
pub const MAX_ITERATIONS: u32 = 1000;
/// Iteration slider step.
pub const ITERATION_STEP: u32 = 10;
/// Budget used when nothing else is configured.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Lower zoom clamp.
pub const MIN_ZOOM: f64 = 1e-3;
/// Upper zoom clamp. At 800 px across a 2.5 half-width, one pixel here is
/// about 6e-16 plane units, above the f64 spacing (4.4e-16) for |center| < 4.
/// Pixel to plane round trips stay within one pixel in that region; farther
/// out the spacing exceeds a pixel and neighbouring pixels can share a plane
/// point.
pub const MAX_ZOOM: f64 = 1e13;

/// Zoom factor applied per wheel notch towards the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Zoom factor applied per wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Widest canvas the layout will allocate.
pub const MAX_CANVAS_WIDTH: u32 = 1200;
/// Canvas height as a fraction of its width (4:3).
pub const CANVAS_HEIGHT_RATIO: f64 = 0.75;
/// Canvas size before the first layout pass.
pub const DEFAULT_CANVAS_SIZE: (u32, u32) = (800, 600);

/// The closed set of fractals the engine can draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Newton,
    Sierpinski,
    Fern,
}

impl FractalKind {
    pub const ALL: [FractalKind; 6] = [
        FractalKind::Mandelbrot,
        FractalKind::Julia,
        FractalKind::BurningShip,
        FractalKind::Newton,
        FractalKind::Sierpinski,
        FractalKind::Fern,
    ];

    /// Static configuration for this kind.
    pub fn config(self) -> &'static FractalConfig {
        match self {
            FractalKind::Mandelbrot => &MANDELBROT_CONFIG,
            FractalKind::Julia => &JULIA_CONFIG,
            FractalKind::BurningShip => &BURNING_SHIP_CONFIG,
            FractalKind::Newton => &NEWTON_CONFIG,
            FractalKind::Sierpinski => &SIERPINSKI_CONFIG,
            FractalKind::Fern => &FERN_CONFIG,
        }
    }

    pub fn id(self) -> &'static str {
        self.config().id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        get_fractal_config(id).map(|config| config.kind)
    }
}

/// Configuration for a fractal type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    pub kind: FractalKind,
    /// Unique identifier, also used in exported file names
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    /// Half of the visible plane width at zoom 1
    pub base_half_width: f64,
    /// Half of the visible plane height at zoom 1
    pub base_half_height: f64,
}

pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Mandelbrot,
    id: "mandelbrot",
    display_name: "Mandelbrot Set",
    base_half_width: 2.5,
    base_half_height: 1.5,
};

pub static JULIA_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Julia,
    id: "julia",
    display_name: "Julia Set",
    base_half_width: 2.0,
    base_half_height: 1.5,
};

pub static BURNING_SHIP_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::BurningShip,
    id: "burning-ship",
    display_name: "Burning Ship",
    base_half_width: 2.5,
    base_half_height: 1.5,
};

pub static NEWTON_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Newton,
    id: "newton",
    display_name: "Newton (z³ - 1)",
    base_half_width: 2.0,
    base_half_height: 1.5,
};

/// The triangle is framed in pixel space; the extents only size its bounding box.
pub static SIERPINSKI_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Sierpinski,
    id: "sierpinski",
    display_name: "Sierpinski Triangle",
    base_half_width: 2.5,
    base_half_height: 1.5,
};

/// The fern owns a fixed framing; the extents are never used for plane mapping.
pub static FERN_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Fern,
    id: "fern",
    display_name: "Barnsley Fern",
    base_half_width: 2.5,
    base_half_height: 1.5,
};

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    FractalKind::ALL
        .iter()
        .map(|kind| kind.config())
        .find(|config| config.id == id)
}

/// Clamp an iteration budget to the slider range and snap it to the slider step.
pub fn snap_iterations(iterations: u32) -> u32 {
    let clamped = iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    let snapped = (clamped + ITERATION_STEP / 2) / ITERATION_STEP * ITERATION_STEP;
    snapped.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

/// Canvas size for a container of the given width: capped width, 4:3 aspect.
pub fn canvas_size_for_container(container_width: u32) -> (u32, u32) {
    let width = container_width.clamp(1, MAX_CANVAS_WIDTH);
    let height = ((width as f64 * CANVAS_HEIGHT_RATIO).floor() as u32).max(1);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_fractal_config_finds_every_kind() {
        for kind in FractalKind::ALL {
            let config = get_fractal_config(kind.id()).unwrap();
            assert_eq!(config.kind, kind);
        }
    }

    #[test]
    fn get_fractal_config_returns_none_for_unknown() {
        assert!(get_fractal_config("unknown_fractal").is_none());
        assert!(FractalKind::from_id("Mandelbrot").is_none());
    }

    #[test]
    fn base_extents_match_kind() {
        assert_eq!(MANDELBROT_CONFIG.base_half_width, 2.5);
        assert_eq!(MANDELBROT_CONFIG.base_half_height, 1.5);
        assert_eq!(BURNING_SHIP_CONFIG.base_half_width, 2.5);
        assert_eq!(JULIA_CONFIG.base_half_width, 2.0);
        assert_eq!(NEWTON_CONFIG.base_half_width, 2.0);
        assert_eq!(NEWTON_CONFIG.base_half_height, 1.5);
    }

    #[test]
    fn kind_serializes_as_id() {
        let json = serde_json::to_string(&FractalKind::BurningShip).unwrap();
        assert_eq!(json, "\"burning-ship\"");
        let kind: FractalKind = serde_json::from_str("\"fern\"").unwrap();
        assert_eq!(kind, FractalKind::Fern);
    }

    #[test]
    fn snap_iterations_clamps_and_rounds() {
        assert_eq!(snap_iterations(0), 10);
        assert_eq!(snap_iterations(104), 100);
        assert_eq!(snap_iterations(105), 110);
        assert_eq!(snap_iterations(5000), 1000);
    }

    #[test]
    fn canvas_size_keeps_four_to_three() {
        assert_eq!(canvas_size_for_container(800), (800, 600));
        assert_eq!(canvas_size_for_container(2000), (1200, 900));
        assert_eq!(canvas_size_for_container(333), (333, 249));
    }
}
