//! Integration tests driving the composed session engine the way a host
//! UI would: breakout operations, whiteboard edits, and a raw input-event
//! stream covering shortcuts, push-to-talk, and idle detection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use huddle::activity::ActivityOptions;
use huddle::input::{FocusTarget, InputEvent, KeyEvent};
use huddle::participant::Roster;
use huddle::ptt::PushToTalk;
use huddle::session::SessionEngine;
use huddle::shortcuts::{ShortcutAction, ShortcutRouter};
use huddle::whiteboard::{AnnotationDraft, AnnotationTool, Point};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn keyboard_stream_drives_shortcuts_and_ptt() {
    let (mutes, on_mute) = counter();
    let (end_calls, on_end_call) = counter();
    let (activations, on_activate) = counter();
    let (deactivations, on_deactivate) = counter();

    let shortcuts = ShortcutRouter::new()
        .on(ShortcutAction::ToggleMute, on_mute)
        .on(ShortcutAction::EndCall, on_end_call);
    let ptt = PushToTalk::default()
        .with_on_activate(on_activate)
        .with_on_deactivate(on_deactivate);

    let mut engine = SessionEngine::new(
        Roster::sample(),
        ActivityOptions::default(),
        ptt,
        shortcuts,
    );
    engine.ptt_mut().enable_mode();

    let script = [
        InputEvent::KeyDown(KeyEvent::new("m")),
        // Typed into the chat box: must not toggle mute.
        InputEvent::KeyDown(KeyEvent::new("m").with_target(FocusTarget::TextInput)),
        InputEvent::KeyDown(KeyEvent::new(" ")),
        // Key-repeat of the held key.
        InputEvent::KeyDown(KeyEvent::new(" ")),
        InputEvent::KeyUp(KeyEvent::new(" ")),
        // Escape without a modifier does not end the call.
        InputEvent::KeyDown(KeyEvent::new("Escape")),
        InputEvent::KeyDown(KeyEvent::new("Escape").with_ctrl()),
    ];
    for event in script {
        engine.handle_event(event).await;
    }

    assert_eq!(mutes.load(Ordering::SeqCst), 1);
    assert_eq!(end_calls.load(Ordering::SeqCst), 1);
    assert_eq!(activations.load(Ordering::SeqCst), 1);
    assert_eq!(deactivations.load(Ordering::SeqCst), 1);
    assert!(!engine.ptt().pressed());

    engine.shutdown();
}

#[tokio::test]
async fn breakout_moves_show_up_in_snapshot() {
    let mut engine = SessionEngine::new(
        Roster::sample(),
        ActivityOptions::default(),
        PushToTalk::default(),
        ShortcutRouter::new(),
    );

    let room_a = engine.breakout_mut().create_room("Room A");
    let room_b = engine.breakout_mut().create_room("Room B");
    engine.breakout_mut().assign("p-noah", Some(room_a)).unwrap();
    engine.breakout_mut().assign("p-noah", Some(room_b)).unwrap();

    let snapshot = engine.snapshot().await;
    let a = snapshot.rooms.iter().find(|r| r.id == room_a).unwrap();
    let b = snapshot.rooms.iter().find(|r| r.id == room_b).unwrap();
    assert!(a.participant_ids.is_empty());
    assert_eq!(b.participant_ids, ["p-noah"]);
    assert_eq!(engine.breakout().assignment("p-noah"), Some(room_b));

    // Everyone assignable except Noah is still unassigned, in roster order.
    let unassigned: Vec<&str> = snapshot.unassigned.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(unassigned, ["p-ava", "p-lena", "p-omar"]);

    engine.shutdown();
}

#[tokio::test]
async fn whiteboard_undo_walks_back_through_edits() {
    let mut engine = SessionEngine::new(
        Roster::sample(),
        ActivityOptions::default(),
        PushToTalk::default(),
        ShortcutRouter::new(),
    );

    engine.whiteboard_mut().add_annotation(
        AnnotationDraft::new(AnnotationTool::Pen).with_points(vec![Point::new(10.0, 10.0)]),
    );
    engine
        .whiteboard_mut()
        .add_annotation(AnnotationDraft::new(AnnotationTool::Text).with_text("Agenda"));
    engine.whiteboard_mut().clear();

    assert!(engine.snapshot().await.annotations.is_empty());

    assert!(engine.whiteboard_mut().undo());
    assert_eq!(engine.snapshot().await.annotations.len(), 2);

    assert!(engine.whiteboard_mut().undo());
    assert!(engine.whiteboard_mut().undo());
    assert!(!engine.whiteboard_mut().undo());
    assert!(engine.snapshot().await.annotations.is_empty());

    engine.shutdown();
}

#[tokio::test(start_paused = true)]
async fn input_stream_keeps_session_from_idling() {
    let (idles, on_idle) = counter();
    let (actives, on_active) = counter();

    let mut engine = SessionEngine::new(
        Roster::sample(),
        ActivityOptions::new(Duration::from_millis(4000))
            .with_on_idle(on_idle)
            .with_on_active(on_active),
        PushToTalk::default(),
        ShortcutRouter::new(),
    );

    for _ in 0..3 {
        tokio::time::sleep(Duration::from_millis(2000)).await;
        engine.handle_event(InputEvent::PointerMove).await;
    }
    assert!(!engine.snapshot().await.idle);
    assert_eq!(idles.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(engine.snapshot().await.idle);
    assert_eq!(idles.load(Ordering::SeqCst), 1);

    // A key release is not an activity signal.
    engine.handle_event(InputEvent::KeyUp(KeyEvent::new("a"))).await;
    assert!(engine.snapshot().await.idle);
    assert_eq!(actives.load(Ordering::SeqCst), 0);

    engine.handle_event(InputEvent::Scroll).await;
    assert!(!engine.snapshot().await.idle);
    assert_eq!(actives.load(Ordering::SeqCst), 1);

    engine.shutdown();
}
