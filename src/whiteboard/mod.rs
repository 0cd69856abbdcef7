//! Whiteboard annotation history.
//!
//! An append-only annotation log with linear undo: every mutation commits a
//! full snapshot of the visible annotation set, and a cursor walks the
//! snapshot list backwards. Committing after an undo discards the undone
//! tail first, so there is no redo across an edit.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationTool {
    Select,
    Pen,
    Eraser,
    Rectangle,
    Circle,
    Line,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single drawable element. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: Uuid,
    pub tool: AnnotationTool,
    pub color: String,
    pub stroke_width: f32,
    pub points: Vec<Point>,
    pub text: Option<String>,
}

/// Annotation fields before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationDraft {
    pub tool: AnnotationTool,
    pub color: String,
    pub stroke_width: f32,
    pub points: Vec<Point>,
    pub text: Option<String>,
}

impl AnnotationDraft {
    pub fn new(tool: AnnotationTool) -> Self {
        Self {
            tool,
            color: "#ffffff".to_string(),
            stroke_width: 2.0,
            points: Vec::new(),
            text: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

pub struct WhiteboardHistory {
    snapshots: Vec<Vec<Annotation>>,
    cursor: usize,
}

impl Default for WhiteboardHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl WhiteboardHistory {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
        }
    }

    /// The currently visible annotation set.
    pub fn annotations(&self) -> &[Annotation] {
        &self.snapshots[self.cursor]
    }

    /// Append an annotation and commit a new snapshot. Returns the stored
    /// annotation with its assigned id.
    pub fn add_annotation(&mut self, draft: AnnotationDraft) -> Annotation {
        let annotation = Annotation {
            id: Uuid::new_v4(),
            tool: draft.tool,
            color: draft.color,
            stroke_width: draft.stroke_width,
            points: draft.points,
            text: draft.text,
        };
        let mut next = self.snapshots[self.cursor].clone();
        next.push(annotation.clone());
        self.commit(next);
        debug!(
            "Committed annotation {:?}, {} visible",
            annotation.tool,
            self.annotations().len()
        );
        annotation
    }

    /// Step back one snapshot. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!("Undo to snapshot {}", self.cursor);
        true
    }

    /// Commit an empty annotation set. Undoable like any other edit.
    pub fn clear(&mut self) {
        self.commit(Vec::new());
        debug!("Cleared whiteboard");
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    // Undone snapshots beyond the cursor are discarded before the new one
    // is appended.
    fn commit(&mut self, annotations: Vec<Annotation>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(annotations);
        self.cursor = self.snapshots.len() - 1;
    }
}
