use serde::Serialize;

use crate::breakout::BreakoutRoom;
use crate::participant::Participant;
use crate::whiteboard::Annotation;

/// Renderable view of the session interaction state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub rooms: Vec<BreakoutRoom>,
    pub unassigned: Vec<Participant>,
    pub annotations: Vec<Annotation>,
    pub idle: bool,
    pub ptt_pressed: bool,
    pub ptt_mode_enabled: bool,
}
