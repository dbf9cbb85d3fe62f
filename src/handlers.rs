//! Message handlers for the exploration session.
//!
//! Each handler processes one message category, keeping the session's
//! update function small and organized.

use crate::message::{AnnotationMessage, ViewerMessage};
use crate::model::{AnnotationDraft, AnnotationStore};
use crate::viewport::Viewport;

/// Handle viewport pan/zoom messages.
///
/// `surface` is the current viewer surface size; step zooms anchor at its
/// center.
pub fn handle_viewer(msg: ViewerMessage, viewport: &mut Viewport, surface: (f32, f32)) {
    let center = (surface.0 / 2.0, surface.1 / 2.0);
    match msg {
        ViewerMessage::ZoomAtCursor {
            cursor_x,
            cursor_y,
            delta,
        } => {
            *viewport = viewport.zoom_at(cursor_x, cursor_y, delta);
            log::debug!(
                "Zoom-at-cursor: {:.2}x at ({:.1}, {:.1})",
                viewport.scale,
                cursor_x,
                cursor_y
            );
        }
        ViewerMessage::ZoomInStep => {
            *viewport = viewport.zoom_in_step(center.0, center.1);
            log::debug!("Zoom in: {:.2}x", viewport.scale);
        }
        ViewerMessage::ZoomOutStep => {
            *viewport = viewport.zoom_out_step(center.0, center.1);
            log::debug!("Zoom out: {:.2}x", viewport.scale);
        }
        ViewerMessage::PanTo { x, y } => {
            *viewport = viewport.pan_to(x, y);
        }
        ViewerMessage::PanBy { dx, dy } => {
            *viewport = viewport.pan_by(dx, dy);
        }
        ViewerMessage::ResetView => {
            *viewport = Viewport::identity();
            log::debug!("View reset");
        }
        ViewerMessage::SetViewport(new_viewport) => {
            *viewport = new_viewport.clamped();
            log::debug!(
                "Viewport set: {:.2}x at ({:.1}, {:.1})",
                viewport.scale,
                viewport.x,
                viewport.y
            );
        }
    }
}

/// Handle annotation draft and store messages.
pub fn handle_annotation(
    msg: AnnotationMessage,
    store: &mut AnnotationStore,
    draft: &mut Option<AnnotationDraft>,
    status: &mut Option<String>,
) {
    match msg {
        AnnotationMessage::OpenDraft { x, y } => {
            if draft.is_some() {
                log::debug!("Replacing open draft");
            }
            *draft = Some(AnnotationDraft::at(x, y));
            log::debug!("Draft opened at image ({:.1}, {:.1})", x, y);
        }
        AnnotationMessage::LabelChanged(label) => {
            if let Some(draft) = draft {
                draft.label = label;
            }
        }
        AnnotationMessage::DescriptionChanged(description) => {
            if let Some(draft) = draft {
                draft.description = description;
            }
        }
        AnnotationMessage::SaveDraft => {
            let Some(pending) = draft.as_ref() else {
                return;
            };
            if !pending.can_save() {
                // Rejected locally; the draft stays open.
                log::warn!("Save rejected: label is empty");
                *status = Some("Label can't be empty".to_string());
                return;
            }
            let created = store.add(
                pending.x,
                pending.y,
                pending.label.clone(),
                pending.description.clone(),
            );
            log::info!(
                "Created feature {} '{}' at ({:.1}, {:.1})",
                created.id,
                created.label,
                created.x,
                created.y
            );
            *status = Some(format!("Saved feature '{}'", created.label));
            *draft = None;
        }
        AnnotationMessage::CancelDraft => {
            if draft.take().is_some() {
                log::debug!("Draft cancelled");
            }
        }
    }
}
