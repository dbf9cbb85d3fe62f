//! Pan/zoom viewport mathematics.
//!
//! This module contains the affine view transform over the displayed image
//! and its coordinate conversions, extracted for testability. The mapping is
//! `screen = image * scale + (x, y)`: scale from the image's top-left
//! origin, then translate.

use serde::{Deserialize, Serialize};

use crate::constants::zoom;

/// Represents the pan/zoom view transform.
///
/// `scale` is the image-to-screen zoom factor and is always kept within
/// [`zoom::MIN`]..=[`zoom::MAX`]; `(x, y)` is the screen-space offset of the
/// image's top-left corner and is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Viewport {
    /// Create a new viewport with the given zoom and offset.
    ///
    /// The scale is clamped into the valid range.
    pub fn new(scale: f32, x: f32, y: f32) -> Self {
        Self {
            scale: clamp_scale(scale, 1.0),
            x,
            y,
        }
    }

    /// Create an identity viewport (scale=1, no offset).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Convert a screen-space point to image-space coordinates.
    ///
    /// Exact inverse of [`Self::image_to_screen`]. The division is safe
    /// because the scale never drops below [`zoom::MIN`].
    pub fn screen_to_image(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.x) / self.scale,
            (screen_y - self.y) / self.scale,
        )
    }

    /// Convert an image-space point to screen-space coordinates.
    pub fn image_to_screen(&self, image_x: f32, image_y: f32) -> (f32, f32) {
        (
            image_x * self.scale + self.x,
            image_y * self.scale + self.y,
        )
    }

    /// Calculate zoom-to-cursor transformation.
    ///
    /// Keeps the image-space point under the cursor fixed while zooming:
    /// after rescaling, the offset is recomputed so that point is still
    /// under the same screen position. `delta` is a relative scale change
    /// (`new = scale + delta * scale`), clamped into the valid range; a
    /// non-finite delta leaves the viewport unchanged.
    pub fn zoom_at(&self, cursor_x: f32, cursor_y: f32, delta: f32) -> Viewport {
        let new_scale = clamp_scale(self.scale + delta * self.scale, self.scale);
        self.rescale_about(new_scale, cursor_x, cursor_y)
    }

    /// Apply a pan delta to the viewport. Panning is unbounded.
    pub fn pan_by(&self, dx: f32, dy: f32) -> Viewport {
        Viewport {
            scale: self.scale,
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Replace the pan offset, keeping the zoom (1:1 drag tracking).
    pub fn pan_to(&self, x: f32, y: f32) -> Viewport {
        Viewport {
            scale: self.scale,
            x,
            y,
        }
    }

    /// Zoom in by the step factor, anchored at the given screen point
    /// (usually the viewer center), clamped to the maximum zoom.
    pub fn zoom_in_step(&self, anchor_x: f32, anchor_y: f32) -> Viewport {
        let new_scale = clamp_scale(self.scale * zoom::STEP_FACTOR, self.scale);
        self.rescale_about(new_scale, anchor_x, anchor_y)
    }

    /// Zoom out by the step factor, anchored at the given screen point,
    /// clamped to the minimum zoom.
    pub fn zoom_out_step(&self, anchor_x: f32, anchor_y: f32) -> Viewport {
        let new_scale = clamp_scale(self.scale / zoom::STEP_FACTOR, self.scale);
        self.rescale_about(new_scale, anchor_x, anchor_y)
    }

    /// Return a copy with the scale clamped into the valid range.
    pub fn clamped(&self) -> Viewport {
        Viewport {
            scale: clamp_scale(self.scale, 1.0),
            x: self.x,
            y: self.y,
        }
    }

    /// Change the scale while keeping the image point under `(ax, ay)`
    /// fixed on screen.
    fn rescale_about(&self, new_scale: f32, ax: f32, ay: f32) -> Viewport {
        let ratio = new_scale / self.scale;
        Viewport {
            scale: new_scale,
            x: ax - (ax - self.x) * ratio,
            y: ay - (ay - self.y) * ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

/// Clamp a scale into the valid zoom range, falling back to `current`
/// when the candidate is not finite.
fn clamp_scale(candidate: f32, current: f32) -> f32 {
    if candidate.is_finite() {
        candidate.clamp(zoom::MIN, zoom::MAX)
    } else {
        current
    }
}
