//! Barnsley fern by the chaos game.
//!
//! Four affine maps are chosen with probabilities 1%, 85%, 7% and 7%. The
//! attractor lies within `x` in `[-2.1820, 2.6558]` and `y` in `[0, 9.9983]`.

use crate::pixel_buffer::PixelBuffer;
use crate::random::UniformSource;

/// Chaos-game steps per unit of the iteration budget.
pub const STEPS_PER_ITERATION: u64 = 1000;

/// Plane units mapped onto the canvas height.
const FRAME_HEIGHT: f64 = 11.0;
/// Plane units of margin below the stem.
const BASELINE: f64 = 0.5;

pub fn fern_steps(max_iterations: u32) -> u64 {
    max_iterations as u64 * STEPS_PER_ITERATION
}

/// One chaos-game step from `(x, y)` given a uniform draw `r` in `[0, 1)`.
pub fn fern_step((x, y): (f64, f64), r: f64) -> (f64, f64) {
    if r < 0.01 {
        // stem
        (0.0, 0.16 * y)
    } else if r < 0.86 {
        // successively smaller leaflets
        (0.85 * x + 0.04 * y, -0.04 * x + 0.85 * y + 1.6)
    } else if r < 0.93 {
        // largest left leaflet
        (0.2 * x - 0.26 * y, 0.23 * x + 0.22 * y + 1.6)
    } else {
        // largest right leaflet
        (-0.15 * x + 0.28 * y, 0.26 * x + 0.24 * y + 0.44)
    }
}

/// Iterator over the points visited by the chaos game, starting from the origin.
///
/// The origin itself is not yielded; each item is the point after one step.
pub struct FernWalk<U> {
    source: U,
    point: (f64, f64),
    remaining: u64,
}

pub fn fern_walk<U: UniformSource>(source: U, steps: u64) -> FernWalk<U> {
    FernWalk {
        source,
        point: (0.0, 0.0),
        remaining: steps,
    }
}

impl<U: UniformSource> Iterator for FernWalk<U> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.point = fern_step(self.point, self.source.next_unit());
        Some(self.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

/// Pixel a fern point lands on, or `None` when it falls off the canvas.
pub fn fern_to_pixel((x, y): (f64, f64), width: u32, height: u32) -> Option<(u32, u32)> {
    let scale = height as f64 / FRAME_HEIGHT;
    let px = (width as f64 / 2.0 + x * scale).floor();
    let py = (height as f64 - (y + BASELINE) * scale).floor();

    let on_canvas = px.is_finite()
        && py.is_finite()
        && px >= 0.0
        && py >= 0.0
        && px < width as f64
        && py < height as f64;
    on_canvas.then_some((px as u32, py as u32))
}

/// Run the chaos game for `fern_steps(max_iterations)` steps and plot every
/// visited point. Returns the number of points that landed on the canvas.
pub fn paint_fern<U: UniformSource>(
    buffer: &mut PixelBuffer,
    max_iterations: u32,
    source: U,
    rgba: [u8; 4],
) -> u64 {
    let (width, height) = (buffer.width(), buffer.height());
    let mut plotted = 0;
    for point in fern_walk(source, fern_steps(max_iterations)) {
        if let Some((px, py)) = fern_to_pixel(point, width, height) {
            buffer.set_pixel(px, py, rgba);
            plotted += 1;
        }
    }
    plotted
}
