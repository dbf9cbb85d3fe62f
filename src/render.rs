//! Derived render model for the viewer surface.
//!
//! A pure derivation of what to draw, recomputed whenever viewport,
//! annotations, overlays, or the pending draft change. The rendering
//! collaborator consumes this; no drawing happens here.

use crate::constants::marker;
use crate::session::ExploreSession;

/// Affine transform for the image layer.
///
/// Translation is outer, scale is inner from the image's own top-left
/// origin: `screen = image * scale + translate`. This matches the viewport
/// conversions exactly, so markers positioned via
/// [`crate::viewport::Viewport::image_to_screen`] line up with the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

/// The image layer to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    /// Where to fetch the pixels from.
    pub url: String,
    /// Intrinsic pixel width.
    pub width: u32,
    /// Intrinsic pixel height.
    pub height: u32,
    /// View transform to apply to the layer.
    pub transform: ImageTransform,
}

/// Marker kind: a saved annotation or the open draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Committed annotation
    Saved,
    /// Pending draft, drawn visually distinct
    Draft,
}

/// A fixed-size point marker positioned in screen space.
///
/// The position scales with zoom (it tracks image content) but the radius
/// does not; markers stay the same size at every zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Annotation id; `None` for the draft marker.
    pub id: Option<String>,
    /// Marker label (may be empty for an untitled draft).
    pub label: String,
    /// Screen-space X position under the current view.
    pub screen_x: f32,
    /// Screen-space Y position under the current view.
    pub screen_y: f32,
    /// Fixed radius in screen pixels.
    pub radius: f32,
    pub kind: MarkerKind,
    /// Whether the marker shows an open edit form. Only the draft marker
    /// is ever in edit mode.
    pub editing: bool,
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub image: ImageLayer,
    /// Ids of visible overlay tints, in deterministic order.
    pub overlays: Vec<String>,
    /// Saved markers in insertion order, then the draft marker last.
    pub markers: Vec<Marker>,
}

impl RenderModel {
    /// Derive the render model from the current session state.
    pub fn derive(session: &ExploreSession) -> Self {
        let viewport = session.viewport();
        let image = session.selected_image();

        let mut markers: Vec<Marker> = session
            .annotations()
            .iter()
            .map(|a| {
                let (screen_x, screen_y) = viewport.image_to_screen(a.x, a.y);
                Marker {
                    id: Some(a.id.clone()),
                    label: a.label.clone(),
                    screen_x,
                    screen_y,
                    radius: marker::RADIUS,
                    kind: MarkerKind::Saved,
                    editing: false,
                }
            })
            .collect();

        if let Some(draft) = session.draft() {
            let (screen_x, screen_y) = viewport.image_to_screen(draft.x, draft.y);
            markers.push(Marker {
                id: None,
                label: draft.label.clone(),
                screen_x,
                screen_y,
                radius: marker::RADIUS,
                kind: MarkerKind::Draft,
                editing: true,
            });
        }

        Self {
            image: ImageLayer {
                url: image.image_url.clone(),
                width: image.width,
                height: image.height,
                transform: ImageTransform {
                    translate_x: viewport.x,
                    translate_y: viewport.y,
                    scale: viewport.scale,
                },
            },
            overlays: session.overlays().visible_ids().map(String::from).collect(),
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AnnotationMessage, Message, SessionMessage};
    use crate::model::Dataset;
    use crate::viewport::Viewport;

    fn test_session() -> ExploreSession {
        let dataset = Dataset::from_json(
            r#"{
                "images": [
                    {
                        "id": "vm-001",
                        "description": "Valles Marineris canyon system",
                        "imageUrl": "https://example.org/vm-001.jpg",
                        "width": 4096,
                        "height": 2048
                    }
                ]
            }"#,
        )
        .unwrap();
        ExploreSession::new(dataset).unwrap()
    }

    #[test]
    fn test_image_layer_matches_viewport() {
        let mut session = test_session();
        session.set_viewport(Viewport::new(2.0, -50.0, 30.0));

        let model = RenderModel::derive(&session);
        assert_eq!(model.image.url, "https://example.org/vm-001.jpg");
        assert_eq!((model.image.width, model.image.height), (4096, 2048));
        assert_eq!(model.image.transform.scale, 2.0);
        assert_eq!(model.image.transform.translate_x, -50.0);
        assert_eq!(model.image.transform.translate_y, 30.0);
    }

    #[test]
    fn test_marker_positions_track_the_view() {
        let mut session = test_session();
        session.set_viewport(Viewport::new(2.0, 10.0, 20.0));
        session.add_annotation(70.0, 90.0, "Crater", "");

        let model = RenderModel::derive(&session);
        assert_eq!(model.markers.len(), 1);
        let m = &model.markers[0];
        // image (70, 90) at scale 2 with offset (10, 20) -> screen (150, 200)
        assert_eq!((m.screen_x, m.screen_y), (150.0, 200.0));
        assert_eq!(m.kind, MarkerKind::Saved);
        assert!(!m.editing);
    }

    #[test]
    fn test_marker_size_is_zoom_independent() {
        let mut session = test_session();
        session.add_annotation(10.0, 10.0, "a", "");

        session.set_viewport(Viewport::new(1.0, 0.0, 0.0));
        let at_1x = RenderModel::derive(&session).markers[0].radius;
        session.set_viewport(Viewport::new(8.0, 0.0, 0.0));
        let at_8x = RenderModel::derive(&session).markers[0].radius;

        assert_eq!(at_1x, at_8x);
    }

    #[test]
    fn test_draft_marker_is_last_and_only_editor() {
        let mut session = test_session();
        session.add_annotation(1.0, 1.0, "saved", "");
        session.update(Message::Annotation(AnnotationMessage::OpenDraft {
            x: 5.0,
            y: 5.0,
        }));

        let model = RenderModel::derive(&session);
        assert_eq!(model.markers.len(), 2);
        let editing: Vec<_> = model.markers.iter().filter(|m| m.editing).collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].kind, MarkerKind::Draft);
        assert!(editing[0].id.is_none());
        assert_eq!(model.markers.last().unwrap().kind, MarkerKind::Draft);
    }

    #[test]
    fn test_only_visible_overlays_are_listed() {
        let mut session = test_session();
        let model = RenderModel::derive(&session);
        assert!(model.overlays.is_empty());

        session.update(Message::Session(SessionMessage::SetOverlay {
            id: "infrared".to_string(),
            visible: true,
        }));
        session.update(Message::Session(SessionMessage::SetOverlay {
            id: "altimeter".to_string(),
            visible: true,
        }));

        let model = RenderModel::derive(&session);
        assert_eq!(model.overlays, vec!["altimeter", "infrared"]);
    }
}
