use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Host,
    Member,
    /// AI participants. Never eligible for breakout assignment.
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: ParticipantRole,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn is_assignable(&self) -> bool {
        self.role != ParticipantRole::Assistant
    }
}

/// Read-only participant directory for the session.
///
/// Supplied by the host; the engine never adds or removes participants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Participants eligible for breakout assignment, in directory order.
    pub fn assignable(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_assignable())
    }

    pub fn contains_assignable(&self, id: &str) -> bool {
        self.assignable().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Mock directory used by the demo service and tests. The product has
    /// no live meeting directory wired up.
    pub fn sample() -> Self {
        Self::new(vec![
            Participant::new("p-ava", "Ava Chen", ParticipantRole::Host),
            Participant::new("p-noah", "Noah Patel", ParticipantRole::Member),
            Participant::new("p-lena", "Lena Fischer", ParticipantRole::Member),
            Participant::new("p-omar", "Omar Haddad", ParticipantRole::Member),
            Participant::new("p-scribe", "Scribe", ParticipantRole::Assistant),
        ])
    }
}
