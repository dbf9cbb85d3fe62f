//! Exploration session state and update loop.
//!
//! [`ExploreSession`] is the single owner of all mutable viewer state:
//! selected image, viewport, annotations, pending draft, overlay toggles,
//! and the status message channel. Everything runs synchronously on one
//! logical thread; each message is applied to completion before the next.

use crate::constants::{viewer, zoom};
use crate::error::ExploreError;
use crate::handlers;
use crate::interaction::{InteractionController, PointerEvent};
use crate::message::{Message, SessionMessage};
use crate::model::{Annotation, AnnotationDraft, AnnotationStore, Dataset, DatasetImage, OverlaySet};
use crate::viewport::Viewport;

/// A single image-exploration session over one dataset.
#[derive(Debug, Clone)]
pub struct ExploreSession {
    dataset: Dataset,
    selected: usize,
    viewport: Viewport,
    annotations: AnnotationStore,
    draft: Option<AnnotationDraft>,
    overlays: OverlaySet,
    controller: InteractionController,
    surface: (f32, f32),
    status: Option<String>,
}

impl ExploreSession {
    /// Start a session on the first image of the dataset.
    pub fn new(dataset: Dataset) -> Result<Self, ExploreError> {
        if dataset.is_empty() {
            return Err(ExploreError::EmptyDataset);
        }
        log::info!(
            "Session started: {} images, viewing '{}'",
            dataset.len(),
            dataset.images[0].description
        );
        Ok(Self {
            dataset,
            selected: 0,
            viewport: Viewport::identity(),
            annotations: AnnotationStore::new(),
            draft: None,
            overlays: OverlaySet::new(),
            controller: InteractionController::new(),
            surface: (viewer::DEFAULT_WIDTH, viewer::DEFAULT_HEIGHT),
            status: None,
        })
    }

    /// Apply one message. Runs to completion; never blocks.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Viewer(msg) => {
                handlers::handle_viewer(msg, &mut self.viewport, self.surface);
            }
            Message::Annotation(msg) => {
                handlers::handle_annotation(
                    msg,
                    &mut self.annotations,
                    &mut self.draft,
                    &mut self.status,
                );
            }
            Message::Session(msg) => self.handle_session(msg),
        }
    }

    /// Feed a raw pointer event through the interaction controller and
    /// apply whatever message it produces.
    pub fn pointer(&mut self, event: PointerEvent) {
        if let Some(message) = self.controller.handle(event, &self.viewport) {
            self.update(message);
        }
    }

    fn handle_session(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::SelectImage(index) => self.select_image(index),
            SessionMessage::SetOverlay { id, visible } => {
                log::debug!("Overlay '{}' -> {}", id, visible);
                self.overlays.set(id, visible);
            }
            SessionMessage::SurfaceResized { width, height } => {
                self.surface = (width, height);
            }
            SessionMessage::RecenterOn { x, y } => self.recenter_on(x, y),
        }
    }

    /// Explicit image-change transition.
    ///
    /// Switching the selected image discards the open draft, clears all
    /// annotations, and resets the viewport. This is a hard invariant, not
    /// best-effort cleanup. Out-of-range indices are rejected unchanged.
    pub fn select_image(&mut self, index: usize) {
        let Some(image) = self.dataset.get(index) else {
            log::warn!(
                "Ignoring selection of image {} (dataset has {})",
                index,
                self.dataset.len()
            );
            return;
        };
        log::info!("Switched to image {} '{}'", image.id, image.description);
        self.status = Some(format!("Viewing {}", image.description));
        self.selected = index;
        self.draft = None;
        self.annotations.clear();
        self.viewport = Viewport::identity();
    }

    /// Re-center the view on an image-space point at inspection zoom.
    ///
    /// Used for AI coordinate hints and the go-to-coordinates control. The
    /// point lands at the center of the viewer surface.
    pub fn recenter_on(&mut self, image_x: f32, image_y: f32) {
        let scale = zoom::INSPECT;
        let (cx, cy) = (self.surface.0 / 2.0, self.surface.1 / 2.0);
        self.viewport = Viewport::new(scale, cx - image_x * scale, cy - image_y * scale);
        log::debug!(
            "Re-centered on image ({:.1}, {:.1}) at {:.1}x",
            image_x,
            image_y,
            scale
        );
    }

    /// Current view transform.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the view transform (scale is clamped).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport.clamped();
    }

    /// Convert a screen-space point to image space under the current view.
    pub fn screen_to_image(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        self.viewport.screen_to_image(screen_x, screen_y)
    }

    /// Convert an image-space point to screen space under the current view.
    pub fn image_to_screen(&self, image_x: f32, image_y: f32) -> (f32, f32) {
        self.viewport.image_to_screen(image_x, image_y)
    }

    /// Annotations on the selected image, in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        self.annotations.list()
    }

    /// Add an annotation directly (label already validated by the caller).
    pub fn add_annotation(
        &mut self,
        x: f32,
        y: f32,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> &Annotation {
        self.annotations.add(x, y, label, description)
    }

    /// Remove all annotations on the selected image.
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    /// The open annotation draft, if any.
    pub fn draft(&self) -> Option<&AnnotationDraft> {
        self.draft.as_ref()
    }

    /// Toggle a data overlay.
    pub fn set_overlay(&mut self, id: impl Into<String>, visible: bool) {
        self.overlays.set(id, visible);
    }

    /// Current overlay toggles.
    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    /// The dataset being explored.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Timeline index of the selected image.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected image descriptor.
    pub fn selected_image(&self) -> &DatasetImage {
        // Invariant: `selected` is always a valid index.
        &self.dataset.images[self.selected]
    }

    /// Viewer surface size as last reported by the host.
    pub fn surface_size(&self) -> (f32, f32) {
        self.surface
    }

    /// Whether a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.controller.is_panning()
    }

    /// Last user-visible status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Post a user-visible notification (e.g. a collaborator failure).
    /// Viewer state is never touched by this.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Take and clear the status message.
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{Modifiers, PointerButton};
    use crate::message::{AnnotationMessage, ViewerMessage};

    fn test_dataset() -> Dataset {
        Dataset::from_json(
            r#"{
                "images": [
                    {
                        "id": "vm-001",
                        "description": "Valles Marineris canyon system",
                        "imageUrl": "https://example.org/vm-001.jpg",
                        "width": 4096,
                        "height": 2048
                    },
                    {
                        "id": "om-002",
                        "description": "Olympus Mons caldera",
                        "imageUrl": "https://example.org/om-002.jpg",
                        "width": 2048,
                        "height": 2048
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn test_session() -> ExploreSession {
        ExploreSession::new(test_dataset()).unwrap()
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(matches!(
            ExploreSession::new(Dataset::default()),
            Err(ExploreError::EmptyDataset)
        ));
    }

    #[test]
    fn test_starts_on_first_image_with_identity_view() {
        let session = test_session();
        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.selected_image().id, "vm-001");
        assert_eq!(session.viewport(), Viewport::identity());
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn test_image_switch_clears_everything_but_overlays() {
        let mut session = test_session();
        session.set_overlay("infrared", true);
        session.add_annotation(10.0, 10.0, "Crater", "");
        session.update(Message::Annotation(AnnotationMessage::OpenDraft {
            x: 1.0,
            y: 2.0,
        }));
        session.update(Message::Viewer(ViewerMessage::ZoomAtCursor {
            cursor_x: 100.0,
            cursor_y: 100.0,
            delta: 0.5,
        }));

        session.update(Message::Session(SessionMessage::SelectImage(1)));

        assert_eq!(session.selected_index(), 1);
        assert!(session.annotations().is_empty());
        assert!(session.draft().is_none());
        assert_eq!(session.viewport(), Viewport::identity());
        // Overlay toggles survive image switches.
        assert!(session.overlays().is_visible("infrared"));
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut session = test_session();
        session.add_annotation(1.0, 1.0, "keep", "");

        session.update(Message::Session(SessionMessage::SelectImage(99)));

        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.annotations().len(), 1);
    }

    #[test]
    fn test_double_click_save_flow() {
        let mut session = test_session();
        session.set_viewport(Viewport::new(2.0, 10.0, 20.0));

        session.pointer(PointerEvent::DoubleClick { x: 150.0, y: 200.0 });
        let draft = session.draft().unwrap();
        assert_eq!((draft.x, draft.y), (70.0, 90.0));

        session.update(Message::Annotation(AnnotationMessage::LabelChanged(
            "Crater".to_string(),
        )));
        session.update(Message::Annotation(AnnotationMessage::SaveDraft));

        assert!(session.draft().is_none());
        assert_eq!(session.annotations().len(), 1);
        let saved = &session.annotations()[0];
        assert_eq!((saved.x, saved.y), (70.0, 90.0));
        assert_eq!(saved.label, "Crater");
        assert!(!saved.id.is_empty());
    }

    #[test]
    fn test_empty_label_save_is_rejected_with_status() {
        let mut session = test_session();
        session.pointer(PointerEvent::DoubleClick { x: 50.0, y: 50.0 });
        session.update(Message::Annotation(AnnotationMessage::SaveDraft));

        assert!(session.draft().is_some());
        assert!(session.annotations().is_empty());
        assert!(session.take_status().is_some());
    }

    #[test]
    fn test_pan_drag_through_pointer_events() {
        let mut session = test_session();
        session.pointer(PointerEvent::Pressed {
            button: PointerButton::Primary,
            x: 100.0,
            y: 100.0,
            modifiers: Modifiers::NONE,
        });
        session.pointer(PointerEvent::Moved { x: 140.0, y: 70.0 });

        let v = session.viewport();
        assert_eq!((v.x, v.y), (40.0, -30.0));
        assert_eq!(v.scale, 1.0);

        session.pointer(PointerEvent::Released {
            button: PointerButton::Primary,
            x: 140.0,
            y: 70.0,
        });
        assert!(!session.is_panning());
    }

    #[test]
    fn test_add_annotation_scenario() {
        let mut session = test_session();
        session.add_annotation(70.0, 90.0, "Crater", "large impact crater");

        let list = session.annotations();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].label, "Crater");
        assert_eq!(list[0].description, "large impact crater");
        assert!(!list[0].id.is_empty());
    }

    #[test]
    fn test_recenter_places_point_at_surface_center() {
        let mut session = test_session();
        session.update(Message::Session(SessionMessage::SurfaceResized {
            width: 1000.0,
            height: 500.0,
        }));
        session.update(Message::Session(SessionMessage::RecenterOn {
            x: 1024.0,
            y: 2048.0,
        }));

        let (sx, sy) = session.image_to_screen(1024.0, 2048.0);
        assert!((sx - 500.0).abs() < 0.001);
        assert!((sy - 250.0).abs() < 0.001);
        assert_eq!(session.viewport().scale, zoom::INSPECT);
    }

    #[test]
    fn test_set_status_leaves_viewer_state_unchanged() {
        let mut session = test_session();
        session.set_viewport(Viewport::new(2.0, 5.0, 5.0));
        session.add_annotation(1.0, 1.0, "keep", "");

        session.set_status("AI search failed");

        assert_eq!(session.viewport(), Viewport::new(2.0, 5.0, 5.0));
        assert_eq!(session.annotations().len(), 1);
        assert_eq!(session.status(), Some("AI search failed"));
    }
}
