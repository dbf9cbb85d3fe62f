//! Pointer and wheel event interpretation.
//!
//! Translates raw pointer input from the host shell into session messages,
//! disambiguating drag-pan from double-click-to-annotate with an explicit
//! state machine.

use crate::constants::zoom;
use crate::message::{AnnotationMessage, Message, ViewerMessage};
use crate::viewport::Viewport;

/// Mouse button that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary (usually left) button; the only one that pans
    Primary,
    /// Secondary (usually right) button; ignored
    Secondary,
    /// Middle button; ignored
    Middle,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
    };

    /// Modifier-held presses are reserved for future alternate gestures and
    /// must not start a pan.
    fn reserved(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Raw pointer/wheel events fed in by the host shell.
///
/// Positions are in screen space, relative to the viewer surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed
    Pressed {
        button: PointerButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },
    /// The pointer moved
    Moved { x: f32, y: f32 },
    /// A button was released
    Released { button: PointerButton, x: f32, y: f32 },
    /// The pointer left the viewer surface
    Left,
    /// Wheel scrolled; positive `delta` scrolls down (zooms out)
    Wheel { delta: f32, x: f32, y: f32 },
    /// A double-click resolved
    DoubleClick { x: f32, y: f32 },
}

/// Pan gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PanState {
    Idle,
    /// Anchor is `pointer - viewport offset` at gesture start, so each move
    /// maps to an absolute pan position.
    Panning { anchor_x: f32, anchor_y: f32 },
}

/// Interprets raw pointer events against the current viewport.
///
/// Wheel zoom is handled independently of the pan state machine; a
/// double-click that resolves while a pan gesture is in progress is
/// discarded, since a drag-release can itself register as a click.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: PanState,
}

impl InteractionController {
    /// Create a controller in the idle state.
    pub fn new() -> Self {
        Self {
            state: PanState::Idle,
        }
    }

    /// Whether a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, PanState::Panning { .. })
    }

    /// Feed one raw event; returns the message the session should apply.
    pub fn handle(&mut self, event: PointerEvent, viewport: &Viewport) -> Option<Message> {
        match event {
            PointerEvent::Pressed {
                button: PointerButton::Primary,
                x,
                y,
                modifiers,
            } => {
                if modifiers.reserved() {
                    log::debug!("Modifier-held press ignored (reserved gesture)");
                    return None;
                }
                self.state = PanState::Panning {
                    anchor_x: x - viewport.x,
                    anchor_y: y - viewport.y,
                };
                log::debug!("Pan started at ({:.1}, {:.1})", x, y);
                None
            }
            PointerEvent::Pressed { .. } => None,
            PointerEvent::Moved { x, y } => match self.state {
                PanState::Panning { anchor_x, anchor_y } => Some(Message::Viewer(
                    ViewerMessage::PanTo {
                        x: x - anchor_x,
                        y: y - anchor_y,
                    },
                )),
                PanState::Idle => None,
            },
            PointerEvent::Released {
                button: PointerButton::Primary,
                ..
            }
            | PointerEvent::Left => {
                if self.is_panning() {
                    self.state = PanState::Idle;
                    log::debug!("Pan ended");
                }
                None
            }
            PointerEvent::Released { .. } => None,
            PointerEvent::Wheel { delta, x, y } => Some(Message::Viewer(
                ViewerMessage::ZoomAtCursor {
                    cursor_x: x,
                    cursor_y: y,
                    delta: -delta * zoom::WHEEL_RATE,
                },
            )),
            PointerEvent::DoubleClick { x, y } => {
                if self.is_panning() {
                    log::debug!("Double-click discarded during pan");
                    return None;
                }
                let (image_x, image_y) = viewport.screen_to_image(x, y);
                Some(Message::Annotation(AnnotationMessage::OpenDraft {
                    x: image_x,
                    y: image_y,
                }))
            }
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
