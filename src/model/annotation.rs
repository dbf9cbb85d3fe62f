//! Labeled feature annotations anchored in image space.
//!
//! Annotations are point markers the user places on the displayed image.
//! Their coordinates are in image space (unscaled pixels), so they track
//! image content under any pan/zoom transform. The collection is scoped to
//! exactly one image at a time and is cleared as a whole when the selected
//! image changes.

use serde::{Deserialize, Serialize};

/// A user-created point of interest.
///
/// Immutable once created; removed only when the whole collection is
/// cleared on an image switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Opaque unique identifier.
    pub id: String,
    /// Image-space X coordinate (unscaled pixels).
    pub x: f32,
    /// Image-space Y coordinate (unscaled pixels).
    pub y: f32,
    /// Short feature label.
    pub label: String,
    /// Longer free-text description.
    pub description: String,
}

/// Append-only annotation collection scoped to the selected image.
///
/// Insertion order is preserved (it doubles as display z-order) and ids are
/// never reused, even across [`AnnotationStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    next_id: u64,
}

impl AnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new annotation and return it.
    ///
    /// Label validation is the caller's responsibility; the interaction
    /// layer rejects empty labels before this is invoked.
    pub fn add(
        &mut self,
        x: f32,
        y: f32,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> &Annotation {
        self.next_id += 1;
        let annotation = Annotation {
            id: format!("feature-{}", self.next_id),
            x,
            y,
            label: label.into(),
            description: description.into(),
        };
        self.annotations.push(annotation);
        // Safe: pushed just above
        self.annotations.last().unwrap()
    }

    /// Read-only view of all annotations in insertion order.
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Look up an annotation by id.
    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Remove all annotations. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Serialize all annotations to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.annotations)
    }
}

/// Transient state for an annotation being authored.
///
/// At most one draft exists at a time. It is created by a double-click,
/// lives until Save or Cancel, and is never persisted when discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationDraft {
    /// Image-space X coordinate of the pending marker.
    pub x: f32,
    /// Image-space Y coordinate of the pending marker.
    pub y: f32,
    /// Unsaved label field.
    pub label: String,
    /// Unsaved description field.
    pub description: String,
}

impl AnnotationDraft {
    /// Open a fresh draft at the given image-space position.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            label: String::new(),
            description: String::new(),
        }
    }

    /// A draft may only be committed with a non-empty label.
    pub fn can_save(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_created_annotation() {
        let mut store = AnnotationStore::new();
        let a = store.add(70.0, 90.0, "Crater", "large impact crater");

        assert!(!a.id.is_empty());
        assert_eq!(a.x, 70.0);
        assert_eq!(a.y, 90.0);
        assert_eq!(a.label, "Crater");
        assert_eq!(a.description, "large impact crater");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = AnnotationStore::new();
        for i in 0..20 {
            store.add(i as f32, 0.0, "f", "");
        }
        let mut ids: Vec<_> = store.list().iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut store = AnnotationStore::new();
        let first = store.add(0.0, 0.0, "a", "").id.clone();
        store.clear();
        assert!(store.is_empty());
        let second = store.add(0.0, 0.0, "b", "").id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut store = AnnotationStore::new();
        store.add(1.0, 0.0, "first", "");
        store.add(2.0, 0.0, "second", "");
        store.add(3.0, 0.0, "third", "");

        let labels: Vec<_> = store.list().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = AnnotationStore::new();
        let id = store.add(5.0, 6.0, "ridge", "").id.clone();
        assert_eq!(store.get(&id).map(|a| a.label.as_str()), Some("ridge"));
        assert!(store.get("feature-999").is_none());
    }

    #[test]
    fn test_to_json_round_trips() {
        let mut store = AnnotationStore::new();
        store.add(1.5, 2.5, "dune field", "wind-carved");
        let json = store.to_json().unwrap();
        let parsed: Vec<Annotation> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store.list());
    }

    #[test]
    fn test_draft_requires_non_empty_label() {
        let mut draft = AnnotationDraft::at(10.0, 20.0);
        assert!(!draft.can_save());
        draft.label = "   ".to_string();
        assert!(!draft.can_save());
        draft.label = "Crater".to_string();
        assert!(draft.can_save());
    }
}
