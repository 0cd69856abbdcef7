//! Breakout room assignment.
//!
//! Maintains the set of breakout rooms for a session and a one-room-or-none
//! assignment of participants to them. Room membership and the assignment
//! index are kept bidirectionally consistent across every mutation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::participant::{Participant, Roster};

pub type RoomId = Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("participant {0} is not in the assignable roster")]
    ParticipantNotFound(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakoutRoom {
    pub id: RoomId,
    pub name: String,
    pub participant_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub struct BreakoutAssigner {
    roster: Roster,
    rooms: Vec<BreakoutRoom>,
    assignments: HashMap<String, RoomId>,
}

impl BreakoutAssigner {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            rooms: Vec::new(),
            assignments: HashMap::new(),
        }
    }

    /// Create an empty room. Ids are unique within the session.
    pub fn create_room(&mut self, name: impl Into<String>) -> RoomId {
        let room = BreakoutRoom {
            id: Uuid::new_v4(),
            name: name.into(),
            participant_ids: Vec::new(),
            created_at: Utc::now(),
        };
        let id = room.id;
        info!("Created breakout room '{}' ({})", room.name, id);
        self.rooms.push(room);
        id
    }

    /// Delete a room and unassign all of its members. Unknown ids are
    /// ignored.
    pub fn delete_room(&mut self, id: RoomId) {
        let Some(pos) = self.rooms.iter().position(|r| r.id == id) else {
            debug!("Ignoring delete of unknown room {}", id);
            return;
        };
        let room = self.rooms.remove(pos);
        for participant_id in &room.participant_ids {
            self.assignments.remove(participant_id);
        }
        info!(
            "Deleted breakout room '{}', unassigned {} participants",
            room.name,
            room.participant_ids.len()
        );
    }

    /// Move a participant into a room, or out of all rooms with `None`.
    ///
    /// A participant is in at most one room: assigning detaches them from
    /// their current room first. Assigning to an unknown room is ignored.
    pub fn assign(&mut self, participant_id: &str, room_id: Option<RoomId>) -> Result<(), AssignError> {
        if !self.roster.contains_assignable(participant_id) {
            return Err(AssignError::ParticipantNotFound(participant_id.to_string()));
        }

        let Some(target) = room_id else {
            self.detach(participant_id);
            debug!("Unassigned participant {}", participant_id);
            return Ok(());
        };

        let Some(pos) = self.rooms.iter().position(|r| r.id == target) else {
            debug!("Ignoring assignment to unknown room {}", target);
            return Ok(());
        };

        self.detach(participant_id);
        self.rooms[pos].participant_ids.push(participant_id.to_string());
        self.assignments.insert(participant_id.to_string(), target);
        debug!(
            "Assigned participant {} to room '{}'",
            participant_id, self.rooms[pos].name
        );
        Ok(())
    }

    fn detach(&mut self, participant_id: &str) {
        if self.assignments.remove(participant_id).is_none() {
            return;
        }
        for room in &mut self.rooms {
            room.participant_ids.retain(|id| id != participant_id);
        }
    }

    pub fn rooms(&self) -> &[BreakoutRoom] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&BreakoutRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Room the participant is currently assigned to, if any.
    pub fn assignment(&self, participant_id: &str) -> Option<RoomId> {
        self.assignments.get(participant_id).copied()
    }

    /// Assignable participants not currently in any room, in roster order.
    pub fn unassigned_participants(&self) -> Vec<&Participant> {
        self.roster
            .assignable()
            .filter(|p| !self.assignments.contains_key(&p.id))
            .collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
