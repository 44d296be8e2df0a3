//! Render orchestration: one full pass from viewport and parameters to pixels.

use crate::colorizers::ColorMapper;
use crate::computers::{
    paint_fern, paint_sierpinski, sierpinski_depth, BurningShipComputer, JuliaComputer,
    MandelbrotComputer, NewtonComputer, PointComputer,
};
use crate::pixel_buffer::PixelBuffer;
use crate::random::{RngSource, UniformSource};
use fractalscope_core::{ComputeData, EscapeTimeData, FractalKind, RenderParameters, Viewport};

/// Render one frame, seeding the fern walk from entropy.
pub fn render(viewport: &Viewport, params: &RenderParameters) -> PixelBuffer {
    render_with_source(viewport, params, RngSource::from_entropy())
}

/// Render one frame, drawing fern randomness from `source`.
///
/// The viewport is rebased onto the kind's base extents first, so a viewport
/// left over from another kind keeps its center and zoom but frames the
/// right region. Every pixel of the returned buffer is written.
pub fn render_with_source<U: UniformSource>(
    viewport: &Viewport,
    params: &RenderParameters,
    source: U,
) -> PixelBuffer {
    let viewport = viewport.with_kind(params.fractal_kind);
    let mapper = ColorMapper::from_params(params);
    let n = params.max_iterations;

    let buffer = match params.fractal_kind {
        FractalKind::Mandelbrot => {
            render_escape_time(&viewport, &MandelbrotComputer::new(n), &mapper)
        }
        FractalKind::Julia => render_escape_time(
            &viewport,
            &JuliaComputer::new(n, params.julia_constant),
            &mapper,
        ),
        FractalKind::BurningShip => {
            render_escape_time(&viewport, &BurningShipComputer::new(n), &mapper)
        }
        FractalKind::Newton => render_escape_time(&viewport, &NewtonComputer::new(n), &mapper),
        FractalKind::Sierpinski => {
            let mut buffer = painted_canvas(&viewport, &mapper);
            let ink = mapper.colorize(&ComputeData::Painted(true));
            paint_sierpinski(&mut buffer, sierpinski_depth(n), ink);
            buffer
        }
        FractalKind::Fern => {
            let mut buffer = painted_canvas(&viewport, &mapper);
            let ink = mapper.colorize(&ComputeData::Painted(true));
            let plotted = paint_fern(&mut buffer, n, source, ink);
            log::trace!("fern plotted {plotted} points");
            buffer
        }
    };

    log::debug!(
        "Rendered {} {}x{} at center ({}, {}) zoom {} with {} iterations",
        params.fractal_kind.id(),
        viewport.pixel_width,
        viewport.pixel_height,
        viewport.center_x,
        viewport.center_y,
        viewport.zoom,
        n
    );
    buffer
}

/// Canvas for the geometric kinds, every pixel initially unpainted.
fn painted_canvas(viewport: &Viewport, mapper: &ColorMapper) -> PixelBuffer {
    let unpainted = mapper.colorize(&ComputeData::Painted(false));
    PixelBuffer::filled(viewport.pixel_width, viewport.pixel_height, unpainted)
}

/// Classify every pixel of the viewport in row-major order.
pub fn compute_escape_time<C: PointComputer>(
    viewport: &Viewport,
    computer: &C,
) -> Vec<EscapeTimeData> {
    let (width, height) = (viewport.pixel_width, viewport.pixel_height);
    (0..height)
        .flat_map(|py| {
            (0..width).map(move |px| {
                let (re, im) = viewport.pixel_to_plane(px as f64, py as f64);
                computer.compute(re, im)
            })
        })
        .collect()
}

pub fn render_escape_time<C: PointComputer>(
    viewport: &Viewport,
    computer: &C,
    mapper: &ColorMapper,
) -> PixelBuffer {
    let data = compute_escape_time(viewport, computer);
    let mut buffer = PixelBuffer::new(viewport.pixel_width, viewport.pixel_height);
    for (pixel, d) in buffer.pixels_mut().zip(&data) {
        pixel.copy_from_slice(&mapper.colorize(&ComputeData::EscapeTime(*d)));
    }
    buffer
}

/// Classify a single plane point. `None` for kinds that are not escape-time.
pub fn classify_point(params: &RenderParameters, re: f64, im: f64) -> Option<EscapeTimeData> {
    let n = params.max_iterations;
    match params.fractal_kind {
        FractalKind::Mandelbrot => Some(MandelbrotComputer::new(n).compute(re, im)),
        FractalKind::Julia => Some(JuliaComputer::new(n, params.julia_constant).compute(re, im)),
        FractalKind::BurningShip => Some(BurningShipComputer::new(n).compute(re, im)),
        FractalKind::Newton => Some(NewtonComputer::new(n).compute(re, im)),
        FractalKind::Sierpinski | FractalKind::Fern => None,
    }
}

/// Classify the plane point under pixel `(px, py)` of `viewport`.
pub fn classify_pixel(
    viewport: &Viewport,
    params: &RenderParameters,
    px: u32,
    py: u32,
) -> Option<EscapeTimeData> {
    let (re, im) = viewport
        .with_kind(params.fractal_kind)
        .pixel_to_plane(px as f64, py as f64);
    classify_point(params, re, im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedUniform;
    use fractalscope_core::{Classification, ColorScheme};

    fn viewport(kind: FractalKind, width: u32, height: u32) -> Viewport {
        Viewport::for_kind(kind, width, height)
    }

    #[test]
    fn every_kind_fills_the_whole_buffer() {
        for kind in FractalKind::ALL {
            let params = RenderParameters::for_kind(kind).with_iterations(20);
            let buffer = render_with_source(
                &viewport(kind, 64, 48),
                &params,
                RngSource::seeded(3),
            );
            assert_eq!(buffer.as_bytes().len(), 64 * 48 * 4, "{kind:?}");
            assert!(buffer.pixels().all(|p| p[3] == 255), "{kind:?} left gaps");
        }
    }

    #[test]
    fn compute_escape_time_is_row_major() {
        let vp = viewport(FractalKind::Mandelbrot, 8, 6);
        let computer = MandelbrotComputer::new(50);
        let data = compute_escape_time(&vp, &computer);
        assert_eq!(data.len(), 48);

        let (re, im) = vp.pixel_to_plane(5.0, 2.0);
        assert_eq!(data[2 * 8 + 5], computer.compute(re, im));
    }

    #[test]
    fn viewport_from_another_kind_is_rebased() {
        let params = RenderParameters::for_kind(FractalKind::Julia);
        let stale = viewport(FractalKind::Mandelbrot, 800, 600);
        let data = classify_pixel(&stale, &params, 0, 0);
        // Julia frame is 4 x 3 around the origin
        assert_eq!(
            data.map(|d| d.classification()),
            Some(Classification::Escaped { iterations: 0 })
        );
    }

    #[test]
    fn geometric_kinds_are_not_classified() {
        let params = RenderParameters::for_kind(FractalKind::Fern);
        assert_eq!(classify_point(&params, 0.0, 0.0), None);
    }

    #[test]
    fn empty_canvas_renders_empty_buffer() {
        for kind in FractalKind::ALL {
            let vp = Viewport {
                pixel_width: 0,
                pixel_height: 0,
                ..viewport(kind, 10, 10)
            };
            let buffer = render_with_source(
                &vp,
                &RenderParameters::for_kind(kind),
                ScriptedUniform::new([0.5]),
            );
            assert!(buffer.as_bytes().is_empty());
        }
    }

    #[test]
    fn geometric_kinds_take_colors_from_the_mapper() {
        for kind in [FractalKind::Sierpinski, FractalKind::Fern] {
            let params = RenderParameters::for_kind(kind)
                .with_iterations(500)
                .with_color_scheme(ColorScheme::Custom)
                .with_colors("#123456", "#abcdef");
            let mapper = ColorMapper::from_params(&params);
            let ink = mapper.colorize(&ComputeData::Painted(true));
            let unpainted = mapper.colorize(&ComputeData::Painted(false));

            let buffer = render_with_source(
                &viewport(kind, 200, 150),
                &params,
                RngSource::seeded(11),
            );
            assert!(buffer.count_matching(ink) > 0, "{kind:?}");
            assert_eq!(
                buffer.count_matching(ink) + buffer.count_matching(unpainted),
                200 * 150,
                "{kind:?}"
            );
        }
    }

    #[test]
    fn grayscale_mandelbrot_interior_is_black() {
        let params = RenderParameters::default().with_color_scheme(ColorScheme::Grayscale);
        let buffer = render_with_source(
            &viewport(FractalKind::Mandelbrot, 80, 60),
            &params,
            ScriptedUniform::new([0.5]),
        );
        // pixel (40, 30) maps to (0, 0)
        assert_eq!(buffer.pixel(40, 30), Some([0, 0, 0, 255]));
    }
}
