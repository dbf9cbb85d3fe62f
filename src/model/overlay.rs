//! Data overlay visibility toggles.

use std::collections::BTreeMap;

/// A selectable data overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayer {
    /// Stable identifier used in the toggle set and render model.
    pub id: &'static str,
    /// Display name for the layers panel.
    pub name: &'static str,
}

/// Overlay layers offered out of the box.
pub const STOCK_LAYERS: &[OverlayLayer] = &[
    OverlayLayer {
        id: "altimeter",
        name: "Laser Altimeter Data",
    },
    OverlayLayer {
        id: "infrared",
        name: "Infrared Overlay",
    },
];

/// Overlay id -> visibility mapping.
///
/// Independent of the selected image and viewport; toggles survive image
/// switches. A `BTreeMap` keeps iteration order deterministic so derived
/// render models are snapshot-stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySet {
    visibility: BTreeMap<String, bool>,
}

impl OverlaySet {
    /// Create a toggle set with all stock layers hidden.
    pub fn new() -> Self {
        let mut visibility = BTreeMap::new();
        for layer in STOCK_LAYERS {
            visibility.insert(layer.id.to_string(), false);
        }
        Self { visibility }
    }

    /// Set the visibility of an overlay. Unknown ids are added.
    pub fn set(&mut self, id: impl Into<String>, visible: bool) {
        self.visibility.insert(id.into(), visible);
    }

    /// Whether an overlay is currently visible. Unknown ids are hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility.get(id).copied().unwrap_or(false)
    }

    /// Ids of all visible overlays, in deterministic (sorted) order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.visibility
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
    }
}

impl Default for OverlaySet {
    fn default() -> Self {
        Self::new()
    }
}
