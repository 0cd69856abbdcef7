//! Push-to-talk key-state machine.
//!
//! Edge-triggered press/release on a single configured key, gated by the
//! external capture gate (e.g. microphone permission) and the user's
//! push-to-talk mode flag. A latch makes key-repeat idempotent.

use tracing::debug;

use crate::input::KeyEvent;

/// The space key, as reported by the host event source.
pub const DEFAULT_KEY: &str = " ";

pub type PttCallback = Box<dyn FnMut() + Send>;

pub struct PushToTalk {
    key: String,
    /// External gate, e.g. microphone permission.
    enabled: bool,
    mode_enabled: bool,
    pressed: bool,
    /// Key-repeat latch: set while the physical key is held.
    held: bool,
    on_activate: Option<PttCallback>,
    on_deactivate: Option<PttCallback>,
}

impl Default for PushToTalk {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl PushToTalk {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            enabled: true,
            mode_enabled: false,
            pressed: false,
            held: false,
            on_activate: None,
            on_deactivate: None,
        }
    }

    pub fn with_on_activate(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    pub fn with_on_deactivate(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_deactivate = Some(Box::new(callback));
        self
    }

    fn active(&self) -> bool {
        self.enabled && self.mode_enabled
    }

    /// Handle a key press. Returns true when the event was consumed and the
    /// host should suppress the default action.
    ///
    /// Key-repeat presses for a held key stay suppressed but never re-fire
    /// `on_activate`.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.active() || event.target.is_text_entry() || event.key != self.key {
            return false;
        }
        if !self.held {
            self.held = true;
            self.pressed = true;
            debug!("Push-to-talk engaged");
            if let Some(callback) = &mut self.on_activate {
                callback();
            }
        }
        true
    }

    /// Handle a key release. Returns true when the event was consumed.
    pub fn handle_key_up(&mut self, event: &KeyEvent) -> bool {
        if !self.active() || event.target.is_text_entry() || event.key != self.key {
            return false;
        }
        if !self.held {
            return false;
        }
        self.held = false;
        self.pressed = false;
        debug!("Push-to-talk released");
        if let Some(callback) = &mut self.on_deactivate {
            callback();
        }
        true
    }

    pub fn enable_mode(&mut self) {
        self.mode_enabled = true;
    }

    /// Disable push-to-talk mode. Resets the pressed state and latch
    /// directly, without firing `on_deactivate`: a mode switch is not a
    /// release.
    pub fn disable_mode(&mut self) {
        self.release_quietly();
        self.mode_enabled = false;
    }

    pub fn toggle_mode(&mut self) -> bool {
        if self.mode_enabled {
            self.disable_mode();
        } else {
            self.enable_mode();
        }
        self.mode_enabled
    }

    /// Set the external capture gate. Dropping the gate mid-press resets
    /// the same way as disabling the mode.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.release_quietly();
        }
        self.enabled = enabled;
    }

    fn release_quietly(&mut self) {
        self.pressed = false;
        self.held = false;
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn mode_enabled(&self) -> bool {
        self.mode_enabled
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FocusTarget;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let counter = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&counter);
        (counter, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn space_down() -> KeyEvent {
        KeyEvent::new(" ")
    }

    #[test]
    fn test_press_release_cycle() {
        let (activations, on_activate) = counted();
        let (deactivations, on_deactivate) = counted();
        let mut ptt = PushToTalk::default()
            .with_on_activate(on_activate)
            .with_on_deactivate(on_deactivate);
        ptt.enable_mode();

        assert!(ptt.handle_key_down(&space_down()));
        assert!(ptt.pressed());
        assert_eq!(activations.load(Ordering::SeqCst), 1);

        assert!(ptt.handle_key_up(&space_down()));
        assert!(!ptt.pressed());
        assert_eq!(deactivations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_key_repeat_does_not_refire() {
        let (activations, on_activate) = counted();
        let mut ptt = PushToTalk::default().with_on_activate(on_activate);
        ptt.enable_mode();

        assert!(ptt.handle_key_down(&space_down()));
        // Key-repeat while held: still consumed, no second activation.
        assert!(ptt.handle_key_down(&space_down()));
        assert!(ptt.handle_key_down(&space_down()));

        assert!(ptt.pressed());
        assert_eq!(activations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inert_without_mode() {
        let (activations, on_activate) = counted();
        let mut ptt = PushToTalk::default().with_on_activate(on_activate);

        assert!(!ptt.handle_key_down(&space_down()));
        assert!(!ptt.pressed());
        assert_eq!(activations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_inert_without_external_gate() {
        let mut ptt = PushToTalk::default();
        ptt.enable_mode();
        ptt.set_enabled(false);

        assert!(!ptt.handle_key_down(&space_down()));
        assert!(!ptt.pressed());
    }

    #[test]
    fn test_ignores_text_entry_targets() {
        let mut ptt = PushToTalk::default();
        ptt.enable_mode();

        let in_chat = KeyEvent::new(" ").with_target(FocusTarget::TextInput);
        assert!(!ptt.handle_key_down(&in_chat));
        assert!(!ptt.pressed());

        let in_notes = KeyEvent::new(" ").with_target(FocusTarget::TextArea);
        assert!(!ptt.handle_key_down(&in_notes));
        assert!(!ptt.pressed());
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut ptt = PushToTalk::default();
        ptt.enable_mode();
        assert!(!ptt.handle_key_down(&KeyEvent::new("m")));
        assert!(!ptt.pressed());
    }

    #[test]
    fn test_disable_mid_press_resets_without_deactivate() {
        let (deactivations, on_deactivate) = counted();
        let mut ptt = PushToTalk::default().with_on_deactivate(on_deactivate);
        ptt.enable_mode();

        ptt.handle_key_down(&space_down());
        assert!(ptt.pressed());

        ptt.disable_mode();
        assert!(!ptt.pressed());
        assert_eq!(deactivations.load(Ordering::SeqCst), 0);

        // The release for the stale press is not consumed either.
        assert!(!ptt.handle_key_up(&space_down()));
        assert_eq!(deactivations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_gate_drop_mid_press_resets_quietly() {
        let (deactivations, on_deactivate) = counted();
        let mut ptt = PushToTalk::default().with_on_deactivate(on_deactivate);
        ptt.enable_mode();

        ptt.handle_key_down(&space_down());
        ptt.set_enabled(false);

        assert!(!ptt.pressed());
        assert_eq!(deactivations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_toggle_mode() {
        let mut ptt = PushToTalk::default();
        assert!(ptt.toggle_mode());
        assert!(ptt.mode_enabled());
        assert!(!ptt.toggle_mode());
        assert!(!ptt.mode_enabled());
    }

    #[test]
    fn test_custom_key() {
        let mut ptt = PushToTalk::new("t");
        ptt.enable_mode();
        assert!(!ptt.handle_key_down(&space_down()));
        assert!(ptt.handle_key_down(&KeyEvent::new("t")));
        assert!(ptt.pressed());
    }
}
