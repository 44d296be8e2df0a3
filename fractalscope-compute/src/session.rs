//! Interactive session: the state a presentation layer threads between renders.
//!
//! Holds the current [`Viewport`] and [`RenderParameters`] and turns pointer,
//! wheel and control events into new values of both. The session never draws;
//! the caller asks for a [`PixelBuffer`] after each change.

use crate::pixel_buffer::PixelBuffer;
use crate::random::UniformSource;
use crate::render::{render, render_with_source};
use fractalscope_core::{
    canvas_size_for_container, center_viewport_at_pixel, clamp_zoom, constrain_selection,
    export_file_name, pan_viewport, snap_iterations, wheel_zoom_factor, zoom_viewport_at_point,
    zoom_viewport_to_rect, ColorScheme, ExportFormat, FractalError, FractalKind, PersistedState,
    PixelRect, RenderParameters, Viewport,
};
use wasm_bindgen::prelude::*;

/// Pointer travel (in pixels) below which a press-release counts as a click.
pub const CLICK_SLOP: f64 = 2.0;

/// Gesture in progress between pointer down and pointer up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Drag to pan. `origin` is the viewport when the drag began.
    Pan {
        origin: Viewport,
        start: (f64, f64),
        current: (f64, f64),
    },
    /// Drag out a rectangle to zoom into.
    Select {
        start: (f64, f64),
        current: (f64, f64),
    },
}

impl Gesture {
    fn travel(&self) -> f64 {
        let (start, current) = match *self {
            Gesture::Pan { start, current, .. } | Gesture::Select { start, current } => {
                (start, current)
            }
        };
        (current.0 - start.0).hypot(current.1 - start.1)
    }
}

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct FractalSession {
    viewport: Viewport,
    params: RenderParameters,
    gesture: Option<Gesture>,
}

impl Default for FractalSession {
    fn default() -> Self {
        Self::with_params(Viewport::default(), RenderParameters::default())
    }
}

impl FractalSession {
    pub fn with_params(viewport: Viewport, params: RenderParameters) -> Self {
        Self {
            viewport: viewport.with_kind(params.fractal_kind),
            params,
            gesture: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Switch fractal kind by id. Center and zoom carry over.
    pub fn set_fractal_kind(&mut self, id: &str) -> Result<(), FractalError> {
        let kind =
            FractalKind::from_id(id).ok_or_else(|| FractalError::UnknownFractalKind(id.into()))?;
        self.params.fractal_kind = kind;
        self.viewport = self.viewport.with_kind(kind);
        self.rebase_pan();
        Ok(())
    }

    pub fn set_color_scheme(&mut self, id: &str) -> Result<(), FractalError> {
        let scheme =
            ColorScheme::from_id(id).ok_or_else(|| FractalError::UnknownColorScheme(id.into()))?;
        self.params.color_scheme = scheme;
        Ok(())
    }

    /// Aspect-constrained selection rectangle while a select gesture is active.
    pub fn selection(&self) -> Option<PixelRect> {
        match self.gesture? {
            Gesture::Select { start, current } => Some(constrain_selection(
                start,
                current,
                self.viewport.pixel_width,
                self.viewport.pixel_height,
            )),
            Gesture::Pan { .. } => None,
        }
    }

    pub fn render_buffer(&self) -> PixelBuffer {
        render(&self.viewport, &self.params)
    }

    pub fn render_buffer_with_source<U: UniformSource>(&self, source: U) -> PixelBuffer {
        render_with_source(&self.viewport, &self.params, source)
    }

    pub fn to_json(&self) -> Result<String, FractalError> {
        PersistedState::new(self.viewport, self.params.clone()).to_json()
    }

    /// Restore kind, parameters, center and zoom from saved JSON. The current
    /// canvas size is kept.
    pub fn restore_json(&mut self, json: &str) -> Result<(), FractalError> {
        let state = PersistedState::from_json(json)?;
        self.viewport = state
            .viewport
            .with_canvas_size(self.viewport.pixel_width, self.viewport.pixel_height);
        self.params = state.params;
        self.gesture = None;
        Ok(())
    }

    pub fn export_name(&self, format: &str, timestamp_ms: u64) -> Result<String, FractalError> {
        let format = ExportFormat::from_id(format)?;
        Ok(export_file_name(
            self.params.fractal_kind,
            format,
            timestamp_ms,
        ))
    }

    fn apply_zoom(&mut self, next: Viewport, requested_zoom: f64) {
        if clamp_zoom(requested_zoom) != requested_zoom {
            log::warn!(
                "Zoom {} clamped to {} at precision limit",
                requested_zoom,
                next.zoom
            );
        }
        self.viewport = next;
        self.rebase_pan();
    }

    /// Re-derive an active pan's origin from the current viewport, so the next
    /// pointer move continues from what is on screen.
    fn rebase_pan(&mut self) {
        if let Some(Gesture::Pan {
            origin,
            start,
            current,
        }) = &mut self.gesture
        {
            *origin = pan_viewport(&self.viewport, start.0 - current.0, start.1 - current.1);
        }
    }
}

#[wasm_bindgen]
impl FractalSession {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> FractalSession {
        let params = RenderParameters::default();
        let viewport = Viewport::for_kind(params.fractal_kind, width, height);
        Self::with_params(viewport, params)
    }

    pub fn width(&self) -> u32 {
        self.viewport.pixel_width
    }

    pub fn height(&self) -> u32 {
        self.viewport.pixel_height
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn center_x(&self) -> f64 {
        self.viewport.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.viewport.center_y
    }

    pub fn iterations(&self) -> u32 {
        self.params.max_iterations
    }

    pub fn fractal_kind(&self) -> String {
        self.params.fractal_kind.id().to_string()
    }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.viewport = self.viewport.with_canvas_size(width, height);
        self.gesture = None;
    }

    /// Size the canvas for a container of `container_width` CSS pixels.
    pub fn fit_to_container(&mut self, container_width: u32) {
        let (width, height) = canvas_size_for_container(container_width);
        self.set_canvas_size(width, height);
    }

    /// Set the iteration budget, clamped and snapped to the slider range.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.params.max_iterations = snap_iterations(iterations);
    }

    /// Stored verbatim; malformed colors are handled at render time.
    pub fn set_primary_color(&mut self, hex: &str) {
        self.params.primary_color = hex.to_string();
    }

    pub fn set_secondary_color(&mut self, hex: &str) {
        self.params.secondary_color = hex.to_string();
    }

    pub fn set_julia_constant(&mut self, re: f64, im: f64) {
        self.params.julia_constant = (re, im);
    }

    /// Begin a gesture: a selection when `select` is set, otherwise a pan.
    pub fn pointer_down(&mut self, x: f64, y: f64, select: bool) {
        self.gesture = Some(if select {
            Gesture::Select {
                start: (x, y),
                current: (x, y),
            }
        } else {
            Gesture::Pan {
                origin: self.viewport,
                start: (x, y),
                current: (x, y),
            }
        });
    }

    /// Track the pointer. Pans apply live; selections only update the rectangle.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match &mut self.gesture {
            Some(Gesture::Pan {
                origin,
                start,
                current,
            }) => {
                *current = (x, y);
                self.viewport = pan_viewport(origin, x - start.0, y - start.1);
            }
            Some(Gesture::Select { current, .. }) => *current = (x, y),
            None => {}
        }
    }

    /// Finish the gesture.
    ///
    /// A press without drag recenters on the pointer. A selection zooms to the
    /// constrained rectangle; an empty one is ignored.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.pointer_move(x, y);
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        match gesture {
            Gesture::Pan { origin, start, .. } if gesture.travel() < CLICK_SLOP => {
                self.viewport = center_viewport_at_pixel(&origin, start.0, start.1);
            }
            Gesture::Pan { .. } => {}
            Gesture::Select { start, current } => {
                let rect = constrain_selection(
                    start,
                    current,
                    self.viewport.pixel_width,
                    self.viewport.pixel_height,
                );
                if rect.is_empty() {
                    return;
                }
                let requested =
                    self.viewport.zoom * self.viewport.pixel_width as f64 / rect.width as f64;
                let next = zoom_viewport_to_rect(&self.viewport, &rect);
                self.apply_zoom(next, requested);
            }
        }
    }

    /// Abandon the current gesture. A pan in progress snaps back.
    pub fn cancel_gesture(&mut self) {
        if let Some(Gesture::Pan { origin, .. }) = self.gesture.take() {
            self.viewport = origin;
        }
    }

    /// One wheel notch at pixel `(x, y)`.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) {
        let factor = wheel_zoom_factor(delta_y);
        let requested = self.viewport.zoom * factor;
        let next = zoom_viewport_at_point(&self.viewport, x, y, factor);
        self.apply_zoom(next, requested);
    }

    /// Back to the origin at zoom 1.
    pub fn reset(&mut self) {
        self.viewport = self.viewport.reset();
        self.gesture = None;
    }

    /// RGBA8 pixels of the current view, row-major.
    pub fn render(&self) -> Vec<u8> {
        self.render_buffer().into_bytes()
    }
}

/// JavaScript wrappers for the fallible operations.
#[wasm_bindgen]
impl FractalSession {
    #[wasm_bindgen(js_name = setFractalKind)]
    pub fn js_set_fractal_kind(&mut self, id: &str) -> Result<(), JsValue> {
        self.set_fractal_kind(id).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setColorScheme)]
    pub fn js_set_color_scheme(&mut self, id: &str) -> Result<(), JsValue> {
        self.set_color_scheme(id).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = saveState)]
    pub fn js_save_state(&self) -> Result<String, JsValue> {
        self.to_json().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = restoreState)]
    pub fn js_restore_state(&mut self, json: &str) -> Result<(), JsValue> {
        self.restore_json(json).map_err(to_js_error)
    }

    /// `timestamp_ms` is `Date.now()`.
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn js_export_file_name(&self, format: &str, timestamp_ms: f64) -> Result<String, JsValue> {
        self.export_name(format, timestamp_ms.max(0.0) as u64)
            .map_err(to_js_error)
    }

    /// Selection rectangle as `[x, y, width, height]`, empty when not selecting.
    #[wasm_bindgen(js_name = selectionRect)]
    pub fn js_selection_rect(&self) -> Vec<u32> {
        self.selection()
            .map(|r| vec![r.x, r.y, r.width, r.height])
            .unwrap_or_default()
    }
}

fn to_js_error(e: FractalError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
