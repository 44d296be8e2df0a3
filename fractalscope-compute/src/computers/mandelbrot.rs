use super::{iterate_quadratic, PointComputer};
use fractalscope_core::EscapeTimeData;

/// `z = z^2 + c` with `z0 = 0` and `c` the pixel's plane point.
#[derive(Clone, Copy, Debug)]
pub struct MandelbrotComputer {
    max_iterations: u32,
}

impl MandelbrotComputer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl PointComputer for MandelbrotComputer {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, re: f64, im: f64) -> EscapeTimeData {
        iterate_quadratic((0.0, 0.0), (re, im), self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalscope_core::Classification;

    #[test]
    fn origin_is_in_the_set() {
        let data = MandelbrotComputer::new(100).compute(0.0, 0.0);
        assert_eq!(data.classification(), Classification::Bounded);
        assert_eq!(data.iterations, 100);
    }

    #[test]
    fn far_point_escapes_after_one_step() {
        // z1 = c = 2+2i, |z1|^2 = 8
        let data = MandelbrotComputer::new(100).compute(2.0, 2.0);
        assert_eq!(
            data.classification(),
            Classification::Escaped { iterations: 1 }
        );
    }

    #[test]
    fn escape_on_the_last_allowed_step_counts() {
        for budget in 1..=3 {
            let data = MandelbrotComputer::new(budget).compute(2.0, 2.0);
            assert_eq!(
                data.classification(),
                Classification::Escaped { iterations: 1 },
                "budget {budget}"
            );
        }
    }

    #[test]
    fn period_two_bulb_is_bounded() {
        let data = MandelbrotComputer::new(500).compute(-1.0, 0.0);
        assert!(!data.escaped);
    }

    #[test]
    fn boundary_point_on_the_real_axis() {
        // c = 0.25 is the cusp; c = 0.26 escapes slowly
        assert!(!MandelbrotComputer::new(200).compute(0.25, 0.0).escaped);
        let data = MandelbrotComputer::new(200).compute(0.26, 0.0);
        assert!(data.escaped);
        assert!(data.iterations > 10);
    }

    #[test]
    fn conjugate_symmetry() {
        let computer = MandelbrotComputer::new(300);
        for &(re, im) in &[(-0.75, 0.1), (0.3, 0.5), (-1.8, 0.02)] {
            assert_eq!(computer.compute(re, im), computer.compute(re, -im));
        }
    }

    #[test]
    fn zero_budget_is_bounded() {
        let data = MandelbrotComputer::new(0).compute(5.0, 5.0);
        assert!(!data.escaped);
        assert_eq!(data.max_iterations, 0);
    }
}
