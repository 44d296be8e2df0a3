pub mod burning_ship;
pub mod fern;
pub mod julia;
pub mod mandelbrot;
pub mod newton;
pub mod sierpinski;

pub use burning_ship::BurningShipComputer;
pub use fern::{fern_steps, fern_to_pixel, fern_walk, paint_fern, FernWalk};
pub use julia::JuliaComputer;
pub use mandelbrot::MandelbrotComputer;
pub use newton::NewtonComputer;
pub use sierpinski::{paint_sierpinski, sierpinski_depth, Triangle};

use fractalscope_core::EscapeTimeData;

/// Escape radius squared shared by the quadratic iterations.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Per-point classifier for the escape-time kinds.
pub trait PointComputer {
    fn max_iterations(&self) -> u32;

    /// Classify the plane point `(re, im)`.
    fn compute(&self, re: f64, im: f64) -> EscapeTimeData;
}

/// Iterate `z = z^2 + c` from `z0` until `|z|^2` reaches the escape radius
/// or the budget runs out.
pub(crate) fn iterate_quadratic(
    (mut zx, mut zy): (f64, f64),
    (cx, cy): (f64, f64),
    max_iterations: u32,
) -> EscapeTimeData {
    let mut iterations = 0;
    while iterations < max_iterations && zx * zx + zy * zy < ESCAPE_RADIUS_SQ {
        let new_zx = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = new_zx;
        iterations += 1;
    }

    classify_orbit(zx, zy, iterations, max_iterations)
}

/// Terminal state of a quadratic orbit. A point that reaches the escape radius
/// on the last allowed step still counts as escaped.
pub(crate) fn classify_orbit(
    zx: f64,
    zy: f64,
    iterations: u32,
    max_iterations: u32,
) -> EscapeTimeData {
    if zx * zx + zy * zy >= ESCAPE_RADIUS_SQ {
        EscapeTimeData::escaped(iterations, max_iterations)
    } else {
        EscapeTimeData::bounded(max_iterations)
    }
}
