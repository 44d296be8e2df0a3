//! End-to-end render passes on the reference 800x600 canvas.

use fractalscope_compute::{
    classify_pixel, render_with_source, Classification, ColorScheme, FractalKind, PixelBuffer,
    RenderParameters, RngSource, ScriptedUniform, Viewport,
};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

fn reference_viewport(kind: FractalKind) -> Viewport {
    Viewport::for_kind(kind, 800, 600)
}

fn render_kind(params: &RenderParameters) -> PixelBuffer {
    render_with_source(
        &reference_viewport(params.fractal_kind),
        params,
        RngSource::seeded(1234),
    )
}

// ============================================================================
// Escape-time fixtures
// ============================================================================

#[test]
fn mandelbrot_center_pixel_is_bounded_and_black() {
    let params = RenderParameters::default();
    let viewport = reference_viewport(FractalKind::Mandelbrot);

    let data = classify_pixel(&viewport, &params, 400, 300).unwrap();
    assert_eq!(data.classification(), Classification::Bounded);

    let buffer = render_kind(&params);
    assert_eq!(buffer.pixel(400, 300), Some(BLACK));
}

#[test]
fn julia_corner_pixel_fixture() {
    let params = RenderParameters::for_kind(FractalKind::Julia);
    let viewport = reference_viewport(FractalKind::Julia);

    assert_eq!(viewport.pixel_to_plane(0.0, 0.0), (-2.0, -1.5));
    let data = classify_pixel(&viewport, &params, 0, 0).unwrap();
    assert_eq!(
        data.classification(),
        Classification::Escaped { iterations: 0 }
    );

    assert_eq!(render_kind(&params).pixel(0, 0), Some([255, 0, 0, 255]));

    let custom = params.clone().with_color_scheme(ColorScheme::Custom);
    assert_eq!(render_kind(&custom).pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn julia_corner_with_malformed_colors_falls_back_to_grayscale() {
    let params = RenderParameters::for_kind(FractalKind::Julia)
        .with_color_scheme(ColorScheme::Custom)
        .with_colors("#12345", "#0000ff");
    // grayscale of t = 0
    assert_eq!(render_kind(&params).pixel(0, 0), Some(BLACK));
}

#[test]
fn newton_center_has_no_derivative_and_renders_black() {
    let params = RenderParameters::for_kind(FractalKind::Newton);
    let data = classify_pixel(&reference_viewport(FractalKind::Newton), &params, 400, 300);
    assert_eq!(data.map(|d| d.escaped), Some(false));
    assert_eq!(render_kind(&params).pixel(400, 300), Some(BLACK));
}

#[test]
fn burning_ship_and_mandelbrot_disagree_off_axis() {
    // pixel (240, 240) maps to about (-1.0, -0.3)
    let ship = render_kind(&RenderParameters::for_kind(FractalKind::BurningShip));
    let mandelbrot = render_kind(&RenderParameters::default());
    assert_eq!(ship.pixel(240, 240), Some(BLACK));
    assert_ne!(mandelbrot.pixel(240, 240), Some(BLACK));
}

// ============================================================================
// Whole-buffer properties
// ============================================================================

#[test]
fn buffers_are_rgba_sized_and_opaque_for_every_kind() {
    for kind in FractalKind::ALL {
        let params = RenderParameters::for_kind(kind).with_iterations(30);
        let buffer = render_kind(&params);
        assert_eq!(buffer.as_bytes().len(), 800 * 600 * 4);
        assert!(buffer.pixels().all(|p| p[3] == 255), "{kind:?}");
    }
}

#[test]
fn renders_are_pure_functions_of_their_inputs() {
    for kind in FractalKind::ALL {
        let params = RenderParameters::for_kind(kind).with_iterations(30);
        assert_eq!(render_kind(&params), render_kind(&params), "{kind:?}");
    }
}

#[test]
fn stale_viewport_from_another_kind_renders_like_a_fresh_one() {
    let params = RenderParameters::for_kind(FractalKind::Julia).with_iterations(40);
    let stale = reference_viewport(FractalKind::Mandelbrot);
    let fresh = reference_viewport(FractalKind::Julia);
    let source = ScriptedUniform::new([0.5]);
    assert_eq!(
        render_with_source(&stale, &params, source.clone()),
        render_with_source(&fresh, &params, source)
    );
}

// ============================================================================
// Geometric kinds
// ============================================================================

#[test]
fn sierpinski_paints_apex_and_leaves_center_hole() {
    let buffer = render_kind(&RenderParameters::for_kind(FractalKind::Sierpinski));
    assert_eq!(buffer.pixel(400, 60), Some(GREEN));
    assert_eq!(buffer.pixel(400, 420), Some(BLACK));
    assert_eq!(buffer.pixel(0, 0), Some(BLACK));
}

#[test]
fn sierpinski_coverage_shrinks_as_iterations_grow() {
    let counts: Vec<usize> = [0, 10, 20, 30, 40]
        .iter()
        .map(|&n| {
            let params = RenderParameters::for_kind(FractalKind::Sierpinski).with_iterations(n);
            render_kind(&params).count_matching(GREEN)
        })
        .collect();
    assert!(counts.windows(2).all(|w| w[1] < w[0]), "{counts:?}");
}

#[test]
fn fern_draws_a_visible_figure_in_the_primary_color() {
    let params = RenderParameters::for_kind(FractalKind::Fern)
        .with_color_scheme(ColorScheme::Custom)
        .with_colors("#33cc66", "#000000");
    let buffer = render_kind(&params);

    let ink = [0x33, 0xcc, 0x66, 255];
    let painted = buffer.count_matching(ink);
    assert!(painted > 5_000, "only {painted} pixels painted");
    assert_eq!(painted + buffer.count_matching(BLACK), 800 * 600);
}

#[test]
fn fern_is_reproducible_for_a_fixed_seed() {
    let params = RenderParameters::for_kind(FractalKind::Fern).with_iterations(50);
    let viewport = reference_viewport(FractalKind::Fern);
    let a = render_with_source(&viewport, &params, RngSource::seeded(77));
    let b = render_with_source(&viewport, &params, RngSource::seeded(77));
    assert_eq!(a, b);
}
