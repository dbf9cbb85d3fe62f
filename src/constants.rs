//! Shared constants for the exploration core.
//!
//! This module centralizes zoom limits, interaction rates, and marker
//! presentation values so they stay consistent between the viewport math,
//! the interaction controller, and the render model.

/// Zoom constants.
pub mod zoom {
    /// Factor applied by the zoom in/out controls
    pub const STEP_FACTOR: f32 = 1.5;
    /// Maximum zoom level
    pub const MAX: f32 = 10.0;
    /// Minimum zoom level (also guards the screen-to-image division)
    pub const MIN: f32 = 0.5;
    /// Scale delta per unit of wheel scroll (sign-flipped: wheel down zooms out)
    pub const WHEEL_RATE: f32 = 0.001;
    /// Zoom applied when re-centering on a coordinate hint
    pub const INSPECT: f32 = 3.0;
}

/// Viewer surface constants.
pub mod viewer {
    /// Default surface width before the host reports a real size
    pub const DEFAULT_WIDTH: f32 = 800.0;
    /// Default surface height before the host reports a real size
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}

/// Marker presentation constants.
pub mod marker {
    /// Marker radius in screen pixels; markers keep this size at every zoom
    pub const RADIUS: f32 = 8.0;
}
