use super::{iterate_quadratic, PointComputer};
use fractalscope_core::EscapeTimeData;

/// `z = z^2 + k` with `z0` the pixel's plane point and `k` fixed per render.
#[derive(Clone, Copy, Debug)]
pub struct JuliaComputer {
    max_iterations: u32,
    constant: (f64, f64),
}

impl JuliaComputer {
    pub fn new(max_iterations: u32, constant: (f64, f64)) -> Self {
        Self {
            max_iterations,
            constant,
        }
    }

    pub fn constant(&self) -> (f64, f64) {
        self.constant
    }
}

impl PointComputer for JuliaComputer {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, re: f64, im: f64) -> EscapeTimeData {
        iterate_quadratic((re, im), self.constant, self.max_iterations)
    }
}
