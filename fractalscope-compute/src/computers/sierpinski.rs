//! Sierpinski triangle by recursive subdivision, rasterized with a
//! point-in-triangle area test.

use crate::pixel_buffer::PixelBuffer;

/// Subdivision depth cap. Depth grows by one per ten iterations.
pub const MAX_SIERPINSKI_DEPTH: u32 = 10;

/// Slack on the area comparison so pixels on shared edges are filled.
pub const POINT_IN_TRIANGLE_EPSILON: f64 = 0.01;

/// Fraction of the shorter canvas side the outer triangle spans.
const FRAME_FILL: f64 = 0.8;

pub fn sierpinski_depth(max_iterations: u32) -> u32 {
    (max_iterations / 10).min(MAX_SIERPINSKI_DEPTH)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: (f64, f64),
    pub b: (f64, f64),
    pub c: (f64, f64),
}

fn midpoint(p: (f64, f64), q: (f64, f64)) -> (f64, f64) {
    ((p.0 + q.0) / 2.0, (p.1 + q.1) / 2.0)
}

impl Triangle {
    pub fn new(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self { a, b, c }
    }

    /// Apex-up triangle inscribed in the `size` square at `(x, y)`.
    pub fn in_square(x: f64, y: f64, size: f64) -> Self {
        Self::new((x, y + size), (x + size / 2.0, y), (x + size, y + size))
    }

    /// Outer triangle centered on a `width` x `height` canvas.
    pub fn framed(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let size = w.min(h) * FRAME_FILL;
        Self::in_square((w - size) / 2.0, (h - size) / 2.0, size)
    }

    pub fn area(&self) -> f64 {
        area(self.a, self.b, self.c)
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        let parts = area(p, self.b, self.c) + area(self.a, p, self.c) + area(self.a, self.b, p);
        (parts - self.area()).abs() < POINT_IN_TRIANGLE_EPSILON
    }

    /// The three corner triangles left after removing the middle one.
    pub fn subdivide(&self) -> [Triangle; 3] {
        let ab = midpoint(self.a, self.b);
        let bc = midpoint(self.b, self.c);
        let ca = midpoint(self.c, self.a);
        [
            Triangle::new(self.a, ab, ca),
            Triangle::new(ab, self.b, bc),
            Triangle::new(ca, bc, self.c),
        ]
    }

    fn fill(&self, buffer: &mut PixelBuffer, rgba: [u8; 4]) {
        if buffer.width() == 0 || buffer.height() == 0 {
            return;
        }
        let xs = [self.a.0, self.b.0, self.c.0];
        let ys = [self.a.1, self.b.1, self.c.1];
        let max_x = (buffer.width() - 1) as f64;
        let max_y = (buffer.height() - 1) as f64;

        let x0 = xs.iter().copied().fold(f64::INFINITY, f64::min).floor().clamp(0.0, max_x) as u32;
        let x1 = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil().clamp(0.0, max_x) as u32;
        let y0 = ys.iter().copied().fold(f64::INFINITY, f64::min).floor().clamp(0.0, max_y) as u32;
        let y1 = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil().clamp(0.0, max_y) as u32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                if self.contains((px as f64, py as f64)) {
                    buffer.set_pixel(px, py, rgba);
                }
            }
        }
    }
}

fn area(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> f64 {
    ((p.0 * (q.1 - r.1) + q.0 * (r.1 - p.1) + r.0 * (p.1 - q.1)) / 2.0).abs()
}

/// Paint the Sierpinski triangle of the given depth onto `buffer`.
///
/// Only triangle pixels are written; the caller clears the background.
pub fn paint_sierpinski(buffer: &mut PixelBuffer, depth: u32, rgba: [u8; 4]) {
    let outer = Triangle::framed(buffer.width(), buffer.height());
    paint_level(buffer, outer, depth, rgba);
}

fn paint_level(buffer: &mut PixelBuffer, triangle: Triangle, depth: u32, rgba: [u8; 4]) {
    if depth == 0 {
        triangle.fill(buffer, rgba);
        return;
    }
    for child in triangle.subdivide() {
        paint_level(buffer, child, depth - 1, rgba);
    }
}
