pub mod color;
pub mod compute_data;
pub mod config;
pub mod error;
pub mod export;
pub mod pixel_rect;
pub mod render_params;
pub mod state;
pub mod transforms;
pub mod viewport;

pub use color::{ColorParseError, Rgb};
pub use compute_data::{Classification, ComputeData, EscapeTimeData};
pub use config::{
    canvas_size_for_container, get_fractal_config, snap_iterations, FractalConfig, FractalKind,
};
pub use error::FractalError;
pub use export::{export_file_name, ExportFormat};
pub use pixel_rect::PixelRect;
pub use render_params::{ColorOptions, ColorScheme, RenderParameters};
pub use state::PersistedState;
pub use transforms::{
    calculate_aspect_ratio, center_viewport_at_pixel, constrain_selection, pan_viewport,
    wheel_zoom_factor, zoom_viewport_at_point, zoom_viewport_to_rect,
};
pub use viewport::{clamp_zoom, Viewport};
