use crate::activity::ActivityOptions;
use crate::config::Config;
use crate::input::{FocusTarget, InputEvent, KeyEvent};
use crate::participant::Roster;
use crate::ptt::PushToTalk;
use crate::session::SessionEngine;
use crate::shortcuts::{ShortcutAction, ShortcutRouter};
use crate::whiteboard::{AnnotationDraft, AnnotationTool, Point};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Run a scripted demo session against the interaction engine.
///
/// Stands in for the real meeting UI: builds the engine from config and the
/// mock roster, drives the breakout and whiteboard operations a host would,
/// feeds a mock input-event stream through the engine, and prints the
/// resulting session snapshot.
pub async fn run_demo() -> Result<()> {
    info!("Starting Huddle session engine");

    let config = Config::load()?;
    let roster = Roster::sample();
    info!("Loaded mock roster with {} participants", roster.len());

    let activity = ActivityOptions::new(config.activity.timeout())
        .with_on_idle(|| info!("Session idle, hiding controls"))
        .with_on_active(|| info!("Session active again"));

    let mut ptt = PushToTalk::new(config.ptt.key.clone())
        .with_on_activate(|| info!("Push-to-talk engaged, transmitting"))
        .with_on_deactivate(|| info!("Push-to-talk released, muted"));
    if config.ptt.start_enabled {
        ptt.enable_mode();
    }

    let mut shortcuts = ShortcutRouter::new();
    for action in ShortcutAction::ALL {
        shortcuts.bind(action, move || {
            info!("Shortcut action: {}", action.as_str());
        });
    }

    let mut engine = SessionEngine::new(roster, activity, ptt, shortcuts);
    engine.ptt_mut().enable_mode();

    // Breakout and whiteboard interactions arrive as host operations, not
    // raw input events.
    let design = engine.breakout_mut().create_room("Design");
    let research = engine.breakout_mut().create_room("Research");
    engine.breakout_mut().assign("p-noah", Some(design))?;
    engine.breakout_mut().assign("p-lena", Some(research))?;
    engine.breakout_mut().assign("p-omar", Some(design))?;

    engine.whiteboard_mut().add_annotation(
        AnnotationDraft::new(AnnotationTool::Pen)
            .with_color("#ff5252")
            .with_points(vec![Point::new(120.0, 80.0), Point::new(180.0, 140.0)]),
    );
    engine
        .whiteboard_mut()
        .add_annotation(AnnotationDraft::new(AnnotationTool::Text).with_text("Agenda"));
    engine.whiteboard_mut().undo();

    let (tx, mut rx) = mpsc::channel::<InputEvent>(16);
    tokio::spawn(async move {
        for event in demo_script() {
            if tx.send(event).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(40)).await;
        }
    });

    while let Some(event) = rx.recv().await {
        engine.handle_event(event).await;
    }

    let snapshot = engine.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    engine.shutdown();
    info!("Session torn down");
    Ok(())
}

/// Mock input-event stream, in place of a live browser event source.
fn demo_script() -> Vec<InputEvent> {
    vec![
        InputEvent::PointerMove,
        InputEvent::KeyDown(KeyEvent::new("m")),
        InputEvent::KeyDown(KeyEvent::new("v")),
        InputEvent::KeyDown(KeyEvent::new(" ")),
        InputEvent::KeyUp(KeyEvent::new(" ")),
        // Typed into the chat box: the router must stay quiet.
        InputEvent::KeyDown(KeyEvent::new("m").with_target(FocusTarget::TextInput)),
        InputEvent::Scroll,
        InputEvent::KeyDown(KeyEvent::new("Escape").with_ctrl()),
    ]
}
