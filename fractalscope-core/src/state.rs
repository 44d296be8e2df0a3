//! Serializable snapshot of the interactive state, for persisting between sessions.

use crate::error::FractalError;
use crate::render_params::RenderParameters;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

pub const STATE_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub viewport: Viewport,
    pub params: RenderParameters,
}

impl PersistedState {
    pub fn new(viewport: Viewport, params: RenderParameters) -> Self {
        Self {
            version: STATE_VERSION,
            viewport,
            params,
        }
    }

    pub fn to_json(&self) -> Result<String, FractalError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a saved state. The viewport is re-validated (zoom clamped, canvas
    /// at least 1x1, extents matching the saved kind) since the JSON may have
    /// been edited by hand.
    pub fn from_json(json: &str) -> Result<Self, FractalError> {
        let state: PersistedState = serde_json::from_str(json)?;
        if state.version != STATE_VERSION {
            return Err(FractalError::UnsupportedStateVersion(state.version));
        }

        let saved = state.viewport;
        let viewport = saved
            .with_kind(state.params.fractal_kind)
            .with_canvas_size(saved.pixel_width, saved.pixel_height)
            .with_center_and_zoom(saved.center_x, saved.center_y, saved.zoom);

        Ok(Self { viewport, ..state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FractalKind, MIN_ZOOM};

    #[test]
    fn json_roundtrip_preserves_state() {
        let viewport = Viewport::for_kind(FractalKind::Julia, 800, 600)
            .with_center_and_zoom(0.12, -0.34, 42.0);
        let params = RenderParameters::for_kind(FractalKind::Julia).with_iterations(420);
        let original = PersistedState::new(viewport, params);

        let json = original.to_json().unwrap();
        let restored = PersistedState::from_json(&json).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let result = PersistedState::from_json("{not json");
        assert!(matches!(result, Err(FractalError::InvalidState(_))));
    }

    #[test]
    fn from_json_rejects_other_versions() {
        let mut state = PersistedState::new(Viewport::default(), RenderParameters::default());
        state.version = 99;
        let json = serde_json::to_string(&state).unwrap();

        let result = PersistedState::from_json(&json);
        assert!(matches!(result, Err(FractalError::UnsupportedStateVersion(99))));
    }

    #[test]
    fn from_json_repairs_degenerate_viewport() {
        let mut state = PersistedState::new(Viewport::default(), RenderParameters::default());
        state.viewport.zoom = 0.0;
        state.viewport.pixel_width = 0;
        state.viewport.base_half_width = 17.0;
        let json = serde_json::to_string(&state).unwrap();

        let restored = PersistedState::from_json(&json).unwrap();
        assert_eq!(restored.viewport.zoom, MIN_ZOOM);
        assert_eq!(restored.viewport.pixel_width, 1);
        assert_eq!(restored.viewport.base_half_width, 2.5);
    }
}
