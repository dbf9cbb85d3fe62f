//! Scripted demo driving the exploration core from the command line.
//!
//! Loads a dataset (path argument, or a built-in sample) and replays a
//! short interaction sequence, logging each state change. Useful for
//! eyeballing the session behavior without a rendering shell.

use planetscope::interaction::{Modifiers, PointerButton, PointerEvent};
use planetscope::message::{AnnotationMessage, Message, SessionMessage};
use planetscope::model::Dataset;
use planetscope::render::RenderModel;
use planetscope::ExploreSession;

const SAMPLE_DATASET: &str = r#"{
    "images": [
        {
            "id": "vm-001",
            "description": "Valles Marineris canyon system",
            "imageUrl": "https://example.org/tiles/vm-001.jpg",
            "imageHint": "canyon system",
            "width": 4096,
            "height": 2048
        },
        {
            "id": "om-002",
            "description": "Olympus Mons caldera",
            "imageUrl": "https://example.org/tiles/om-002.jpg",
            "imageHint": "shield volcano caldera",
            "width": 2048,
            "height": 2048
        }
    ]
}"#;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    if let Err(e) = run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), planetscope::ExploreError> {
    let dataset = match std::env::args().nth(1) {
        Some(path) => Dataset::from_file(path)?,
        None => Dataset::from_json(SAMPLE_DATASET)?,
    };

    let mut session = ExploreSession::new(dataset)?;
    session.update(Message::Session(SessionMessage::SurfaceResized {
        width: 1280.0,
        height: 720.0,
    }));

    // Wheel-zoom in twice at a fixed cursor position.
    session.pointer(PointerEvent::Wheel {
        delta: -120.0,
        x: 400.0,
        y: 300.0,
    });
    session.pointer(PointerEvent::Wheel {
        delta: -120.0,
        x: 400.0,
        y: 300.0,
    });

    // Drag-pan a little.
    session.pointer(PointerEvent::Pressed {
        button: PointerButton::Primary,
        x: 400.0,
        y: 300.0,
        modifiers: Modifiers::NONE,
    });
    session.pointer(PointerEvent::Moved { x: 340.0, y: 330.0 });
    session.pointer(PointerEvent::Released {
        button: PointerButton::Primary,
        x: 340.0,
        y: 330.0,
    });

    // Annotate via double-click, then save.
    session.pointer(PointerEvent::DoubleClick { x: 500.0, y: 260.0 });
    session.update(Message::Annotation(AnnotationMessage::LabelChanged(
        "Landslide scar".to_string(),
    )));
    session.update(Message::Annotation(AnnotationMessage::DescriptionChanged(
        "possible mass-wasting deposit on the canyon wall".to_string(),
    )));
    session.update(Message::Annotation(AnnotationMessage::SaveDraft));

    session.update(Message::Session(SessionMessage::SetOverlay {
        id: "infrared".to_string(),
        visible: true,
    }));

    let model = RenderModel::derive(&session);
    log::info!(
        "Frame: image '{}' at {:.2}x, {} overlay(s), {} marker(s)",
        model.image.url,
        model.image.transform.scale,
        model.overlays.len(),
        model.markers.len()
    );

    // Switching images drops annotations and resets the view.
    session.update(Message::Session(SessionMessage::SelectImage(1)));
    let model = RenderModel::derive(&session);
    log::info!(
        "After switch: image '{}' at {:.2}x, {} marker(s), overlays still {:?}",
        model.image.url,
        model.image.transform.scale,
        model.markers.len(),
        model.overlays
    );

    Ok(())
}
