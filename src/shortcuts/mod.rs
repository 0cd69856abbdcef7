//! Keyboard shortcut routing.
//!
//! Maps single keystrokes to session actions. Suppressed entirely while a
//! text input, text area, or content-editable element holds focus.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::input::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    ToggleMute,
    ToggleVideo,
    ToggleScreenShare,
    ToggleRaiseHand,
    ToggleAssistant,
    ToggleRecording,
    ToggleChat,
    ToggleParticipants,
    EndCall,
}

impl ShortcutAction {
    pub const ALL: [ShortcutAction; 9] = [
        ShortcutAction::ToggleMute,
        ShortcutAction::ToggleVideo,
        ShortcutAction::ToggleScreenShare,
        ShortcutAction::ToggleRaiseHand,
        ShortcutAction::ToggleAssistant,
        ShortcutAction::ToggleRecording,
        ShortcutAction::ToggleChat,
        ShortcutAction::ToggleParticipants,
        ShortcutAction::EndCall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleMute => "toggle_mute",
            Self::ToggleVideo => "toggle_video",
            Self::ToggleScreenShare => "toggle_screen_share",
            Self::ToggleRaiseHand => "toggle_raise_hand",
            Self::ToggleAssistant => "toggle_assistant",
            Self::ToggleRecording => "toggle_recording",
            Self::ToggleChat => "toggle_chat",
            Self::ToggleParticipants => "toggle_participants",
            Self::EndCall => "end_call",
        }
    }

    /// Key that triggers the action, for help surfaces.
    pub fn key_hint(&self) -> &'static str {
        match self {
            Self::ToggleMute => "m",
            Self::ToggleVideo => "v",
            Self::ToggleScreenShare => "s",
            Self::ToggleRaiseHand => "h",
            Self::ToggleAssistant => "a",
            Self::ToggleRecording => "r",
            Self::ToggleChat => "c",
            Self::ToggleParticipants => "p",
            Self::EndCall => "ctrl/cmd+esc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ToggleMute => "Toggle microphone",
            Self::ToggleVideo => "Toggle camera",
            Self::ToggleScreenShare => "Toggle screen share",
            Self::ToggleRaiseHand => "Raise or lower hand",
            Self::ToggleAssistant => "Toggle AI assistant",
            Self::ToggleRecording => "Toggle recording",
            Self::ToggleChat => "Toggle chat panel",
            Self::ToggleParticipants => "Toggle participants panel",
            Self::EndCall => "End the call",
        }
    }
}

pub type ShortcutHandler = Box<dyn FnMut() + Send>;

/// Stateless keystroke dispatcher. Unbound actions are silent no-ops.
#[derive(Default)]
pub struct ShortcutRouter {
    handlers: HashMap<ShortcutAction, ShortcutHandler>,
}

impl ShortcutRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, action: ShortcutAction, handler: impl FnMut() + Send + 'static) {
        self.handlers.insert(action, Box::new(handler));
    }

    pub fn on(mut self, action: ShortcutAction, handler: impl FnMut() + Send + 'static) -> Self {
        self.bind(action, handler);
        self
    }

    /// Match a key press against the shortcut map without dispatching.
    pub fn resolve(event: &KeyEvent) -> Option<ShortcutAction> {
        if event.target.is_editable() {
            return None;
        }
        if event.key == "Escape" && (event.meta || event.ctrl) {
            return Some(ShortcutAction::EndCall);
        }
        match event.key.to_lowercase().as_str() {
            "m" => Some(ShortcutAction::ToggleMute),
            "v" => Some(ShortcutAction::ToggleVideo),
            "s" => Some(ShortcutAction::ToggleScreenShare),
            "h" => Some(ShortcutAction::ToggleRaiseHand),
            "a" => Some(ShortcutAction::ToggleAssistant),
            "r" => Some(ShortcutAction::ToggleRecording),
            "c" => Some(ShortcutAction::ToggleChat),
            "p" => Some(ShortcutAction::ToggleParticipants),
            _ => None,
        }
    }

    /// Dispatch a key press. On a match the bound handler (if any) runs and
    /// the action is returned so the host can suppress the default.
    pub fn dispatch(&mut self, event: &KeyEvent) -> Option<ShortcutAction> {
        let action = Self::resolve(event)?;
        debug!("Shortcut matched: {}", action.as_str());
        if let Some(handler) = self.handlers.get_mut(&action) {
            handler();
        }
        Some(action)
    }
}
