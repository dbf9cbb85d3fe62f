//! Message types for the exploration session.
//!
//! All state mutations are represented as messages in the Elm architecture
//! style: the interaction controller and the surrounding shell produce
//! messages, and [`crate::session::ExploreSession::update`] applies them.

use crate::viewport::Viewport;

/// Top-level session message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Viewport pan/zoom changes
    Viewer(ViewerMessage),
    /// Annotation draft and store changes
    Annotation(AnnotationMessage),
    /// Dataset selection, overlays, and collaborator results
    Session(SessionMessage),
}

/// Viewport pan/zoom messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerMessage {
    /// Wheel zoom anchored at the cursor position
    ZoomAtCursor {
        cursor_x: f32,
        cursor_y: f32,
        /// Relative scale change (`new = scale + delta * scale`)
        delta: f32,
    },
    /// Zoom-in control, anchored at the viewer center
    ZoomInStep,
    /// Zoom-out control, anchored at the viewer center
    ZoomOutStep,
    /// Absolute pan position from an active drag (1:1 pointer tracking)
    PanTo { x: f32, y: f32 },
    /// Relative pan offset
    PanBy { dx: f32, dy: f32 },
    /// Reset to the identity view
    ResetView,
    /// Replace the whole viewport (go-to-coordinates control)
    SetViewport(Viewport),
}

/// Annotation draft and store messages.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationMessage {
    /// Open a draft at image-space coordinates, discarding any prior draft
    OpenDraft { x: f32, y: f32 },
    /// Draft label field changed
    LabelChanged(String),
    /// Draft description field changed
    DescriptionChanged(String),
    /// Commit the open draft; rejected (draft stays open) if the label is empty
    SaveDraft,
    /// Discard the open draft without saving
    CancelDraft,
}

/// Dataset, overlay, and collaborator messages.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMessage {
    /// Select a dataset image by timeline index
    SelectImage(usize),
    /// Toggle a data overlay
    SetOverlay { id: String, visible: bool },
    /// Host viewer surface was resized
    SurfaceResized { width: f32, height: f32 },
    /// Re-center the view on an image-space coordinate (AI hint or
    /// go-to-coordinates control)
    RecenterOn { x: f32, y: f32 },
}
