use tracing::debug;

use crate::activity::{ActivityMonitor, ActivityOptions};
use crate::breakout::BreakoutAssigner;
use crate::input::InputEvent;
use crate::participant::Roster;
use crate::ptt::PushToTalk;
use crate::session::SessionSnapshot;
use crate::shortcuts::ShortcutRouter;
use crate::whiteboard::WhiteboardHistory;

/// One session view's interaction state.
///
/// The five machines are independent; this engine only fans host events out
/// to them and exposes their state for rendering. Breakout and whiteboard
/// operations are invoked directly by the host rather than through input
/// events.
pub struct SessionEngine {
    breakout: BreakoutAssigner,
    whiteboard: WhiteboardHistory,
    activity: ActivityMonitor,
    ptt: PushToTalk,
    shortcuts: ShortcutRouter,
}

impl SessionEngine {
    pub fn new(
        roster: Roster,
        activity: ActivityOptions,
        ptt: PushToTalk,
        shortcuts: ShortcutRouter,
    ) -> Self {
        Self {
            breakout: BreakoutAssigner::new(roster),
            whiteboard: WhiteboardHistory::new(),
            activity: ActivityMonitor::spawn(activity),
            ptt,
            shortcuts,
        }
    }

    /// Route one host input event through the interaction machines.
    ///
    /// Push-to-talk and the shortcut router observe key presses
    /// independently, like separate listeners on the host event source.
    pub async fn handle_event(&mut self, event: InputEvent) {
        debug!("Routing input event: {:?}", event);
        if event.is_activity_signal() {
            self.activity.record_activity().await;
        }
        match event {
            InputEvent::KeyDown(key) => {
                self.ptt.handle_key_down(&key);
                self.shortcuts.dispatch(&key);
            }
            InputEvent::KeyUp(key) => {
                self.ptt.handle_key_up(&key);
            }
            InputEvent::PointerMove
            | InputEvent::PointerDown
            | InputEvent::TouchStart
            | InputEvent::Scroll => {}
        }
    }

    pub fn breakout(&self) -> &BreakoutAssigner {
        &self.breakout
    }

    pub fn breakout_mut(&mut self) -> &mut BreakoutAssigner {
        &mut self.breakout
    }

    pub fn whiteboard(&self) -> &WhiteboardHistory {
        &self.whiteboard
    }

    pub fn whiteboard_mut(&mut self) -> &mut WhiteboardHistory {
        &mut self.whiteboard
    }

    pub fn activity(&self) -> &ActivityMonitor {
        &self.activity
    }

    pub fn ptt(&self) -> &PushToTalk {
        &self.ptt
    }

    pub fn ptt_mut(&mut self) -> &mut PushToTalk {
        &mut self.ptt
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutRouter {
        &mut self.shortcuts
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rooms: self.breakout.rooms().to_vec(),
            unassigned: self
                .breakout
                .unassigned_participants()
                .into_iter()
                .cloned()
                .collect(),
            annotations: self.whiteboard.annotations().to_vec(),
            idle: self.activity.is_idle().await,
            ptt_pressed: self.ptt.pressed(),
            ptt_mode_enabled: self.ptt.mode_enabled(),
        }
    }

    /// Tear down background work owned by this session view.
    pub fn shutdown(&self) {
        self.activity.shutdown();
    }
}
