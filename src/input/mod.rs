use serde::{Deserialize, Serialize};

/// Focus context of a keyboard event, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    #[default]
    Page,
    TextInput,
    TextArea,
    ContentEditable,
}

impl FocusTarget {
    /// Plain text entry fields (inputs and text areas).
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }

    /// Anything that consumes typed characters, including content-editable
    /// regions.
    pub fn is_editable(&self) -> bool {
        self.is_text_entry() || matches!(self, Self::ContentEditable)
    }
}

/// A single keyboard event from the host event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub target: FocusTarget,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: FocusTarget::Page,
            meta: false,
            ctrl: false,
        }
    }

    pub fn with_target(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// Raw input events the host delivers to the session engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    PointerMove,
    PointerDown,
    TouchStart,
    Scroll,
}

impl InputEvent {
    /// Whether this event counts as user activity for idle detection.
    /// Key releases do not.
    pub fn is_activity_signal(&self) -> bool {
        !matches!(self, Self::KeyUp(_))
    }
}
