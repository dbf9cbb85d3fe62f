//! Planetscope - planetary imagery exploration core.
//!
//! Headless pan/zoom, annotation, and overlay state for an interactive
//! image explorer. The crate owns the viewport transform, the annotation
//! store, the pointer interaction state machine, and the derived render
//! model; windowing, pixel rendering, image fetching, and AI inference are
//! collaborators behind thin seams.

pub mod ai;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod interaction;
pub mod message;
pub mod model;
pub mod render;
pub mod session;
pub mod viewport;

pub use error::ExploreError;
pub use session::ExploreSession;
pub use viewport::Viewport;
