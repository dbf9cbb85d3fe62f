//! Domain data models: annotations, dataset references, overlay toggles.

mod annotation;
mod dataset;
mod overlay;

pub use annotation::{Annotation, AnnotationDraft, AnnotationStore};
pub use dataset::{Dataset, DatasetImage};
pub use overlay::{OverlayLayer, OverlaySet, STOCK_LAYERS};
