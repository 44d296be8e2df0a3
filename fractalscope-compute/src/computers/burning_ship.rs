use super::{classify_orbit, PointComputer, ESCAPE_RADIUS_SQ};
use fractalscope_core::EscapeTimeData;

/// Mandelbrot recurrence with both components folded to their absolute value
/// before squaring: `z = (|Re z| + i|Im z|)^2 + c`.
#[derive(Clone, Copy, Debug)]
pub struct BurningShipComputer {
    max_iterations: u32,
}

impl BurningShipComputer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl PointComputer for BurningShipComputer {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, cx: f64, cy: f64) -> EscapeTimeData {
        let mut zx = 0.0_f64;
        let mut zy = 0.0_f64;
        let mut iterations = 0;

        while iterations < self.max_iterations && zx * zx + zy * zy < ESCAPE_RADIUS_SQ {
            let (ax, ay) = (zx.abs(), zy.abs());
            zx = ax * ax - ay * ay + cx;
            zy = 2.0 * ax * ay + cy;
            iterations += 1;
        }

        classify_orbit(zx, zy, iterations, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computers::MandelbrotComputer;
    use fractalscope_core::Classification;

    #[test]
    fn origin_is_bounded() {
        assert!(!BurningShipComputer::new(100).compute(0.0, 0.0).escaped);
    }

    #[test]
    fn agrees_with_mandelbrot_on_real_axis() {
        // Squaring a real orbit discards its sign, so the fold is invisible
        let ship = BurningShipComputer::new(100);
        let mandelbrot = MandelbrotComputer::new(100);
        for &re in &[-1.9, -1.0, -0.5, 0.1, 0.3, 0.5] {
            assert_eq!(ship.compute(re, 0.0), mandelbrot.compute(re, 0.0));
        }
    }

    #[test]
    fn differs_from_mandelbrot_off_axis() {
        let ship = BurningShipComputer::new(100);
        let mandelbrot = MandelbrotComputer::new(100);
        let differing = [(-0.5, 0.5), (-1.0, -0.3), (0.2, 0.6), (-1.75, -0.03)]
            .iter()
            .filter(|&&(re, im)| ship.compute(re, im) != mandelbrot.compute(re, im))
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn hull_point_is_bounded_where_mandelbrot_escapes() {
        assert!(!BurningShipComputer::new(100).compute(-1.0, -0.3).escaped);
        assert!(MandelbrotComputer::new(100).compute(-1.0, -0.3).escaped);
    }

    #[test]
    fn escape_on_the_last_allowed_step_counts() {
        for budget in 1..=3 {
            let data = BurningShipComputer::new(budget).compute(2.0, 2.0);
            assert_eq!(
                data.classification(),
                Classification::Escaped { iterations: 1 },
                "budget {budget}"
            );
        }
    }

    #[test]
    fn far_point_escapes_immediately() {
        let data = BurningShipComputer::new(100).compute(3.0, 3.0);
        assert!(data.escaped);
        assert_eq!(data.iterations, 1);
    }
}
