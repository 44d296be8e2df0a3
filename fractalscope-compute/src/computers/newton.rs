use super::PointComputer;
use fractalscope_core::EscapeTimeData;

/// Step size below which the iteration counts as converged.
pub const NEWTON_TOLERANCE: f64 = 1e-6;

/// Newton's method on `f(z) = z^3 - 1`, started from the pixel's plane point.
///
/// Converging to a root is reported as `Escaped` with the step count so the
/// colorizers shade basins by speed. A vanishing derivative or an exhausted
/// budget is `Bounded`.
#[derive(Clone, Copy, Debug)]
pub struct NewtonComputer {
    max_iterations: u32,
}

impl NewtonComputer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl PointComputer for NewtonComputer {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, re: f64, im: f64) -> EscapeTimeData {
        let mut zx = re;
        let mut zy = im;

        for i in 0..self.max_iterations {
            // z^2 and z^3
            let sq_x = zx * zx - zy * zy;
            let sq_y = 2.0 * zx * zy;
            let cube_x = sq_x * zx - sq_y * zy;
            let cube_y = sq_x * zy + sq_y * zx;

            // f(z) = z^3 - 1, f'(z) = 3z^2
            let (fx, fy) = (cube_x - 1.0, cube_y);
            let (dx, dy) = (3.0 * sq_x, 3.0 * sq_y);

            let denom = dx * dx + dy * dy;
            if denom == 0.0 {
                return EscapeTimeData::bounded(self.max_iterations);
            }

            // f / f'
            let step_x = (fx * dx + fy * dy) / denom;
            let step_y = (fy * dx - fx * dy) / denom;
            zx -= step_x;
            zy -= step_y;

            if step_x * step_x + step_y * step_y < NEWTON_TOLERANCE * NEWTON_TOLERANCE {
                return EscapeTimeData::escaped(i + 1, self.max_iterations);
            }
        }

        EscapeTimeData::bounded(self.max_iterations)
    }
}
