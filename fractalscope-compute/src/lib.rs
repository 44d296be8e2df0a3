pub mod colorizers;
pub mod computers;
pub mod pixel_buffer;
pub mod random;
pub mod render;
pub mod session;

pub use colorizers::{ColorMapper, Gradient};
pub use computers::{
    BurningShipComputer, JuliaComputer, MandelbrotComputer, NewtonComputer, PointComputer,
};
pub use pixel_buffer::{PixelBuffer, BACKGROUND};
pub use random::{RngSource, ScriptedUniform, UniformSource};
pub use render::{classify_pixel, classify_point, compute_escape_time, render, render_with_source};
pub use session::{FractalSession, Gesture};

// Re-export core types for convenience
pub use fractalscope_core::*;

use wasm_bindgen::prelude::*;

/// Install the browser panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);
    }
}
