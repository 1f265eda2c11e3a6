use std::fmt;

use indexmap::IndexMap;

use crate::events::EventId;

/// Competing pool of a group, consumed from the back
pub type GroupPool = Vec<String>;

/// Group label -> competing pool, in discovery order
pub type EventGroups = IndexMap<String, GroupPool>;

/// Duty a competitor can be given for a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Judge,
    Scrambler,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Judge => "judge",
            Role::Scrambler => "scrambler",
        }
    }
}

/// Non-fatal outcome of a run, reported to the operator
#[derive(Debug, Clone, PartialEq)]
pub enum StaffingWarning {
    Understaffed {
        event: EventId,
        group: String,
        role: Role,
        assigned: usize,
        wanted: usize,
    },
    NoJudgingAssignment {
        competitor: String,
    },
}

impl fmt::Display for StaffingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffingWarning::Understaffed { event, group, role, assigned, wanted } => write!(
                f,
                "cannot assign enough {}(s) for {}, {} ({}/{}). Consider manual Delegate assignments.",
                role.as_str(),
                event,
                group,
                assigned,
                wanted
            ),
            StaffingWarning::NoJudgingAssignment { competitor } => write!(
                f,
                "{} has 0 judging assignments. Consider a manual assignment.",
                competitor
            ),
        }
    }
}

/// competitor -> event -> assigned group, pre-populated with empty slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentMap {
    slots: IndexMap<String, IndexMap<EventId, Option<String>>>,
}

impl AssignmentMap {
    /// Adds an empty slot for (competitor, event); keeps an existing slot untouched
    pub fn add_slot(&mut self, competitor: &str, event: EventId) {
        self.slots
            .entry(competitor.to_string())
            .or_default()
            .entry(event)
            .or_insert(None);
    }

    pub fn has_slot(&self, competitor: &str, event: EventId) -> bool {
        self.slots
            .get(competitor)
            .map(|events| events.contains_key(&event))
            .unwrap_or(false)
    }

    pub fn get(&self, competitor: &str, event: EventId) -> Option<&str> {
        self.slots
            .get(competitor)
            .and_then(|events| events.get(&event))
            .and_then(|slot| slot.as_deref())
    }

    /// Fills the slot; returns false when the competitor has no slot for the event
    pub fn assign(&mut self, competitor: &str, event: EventId, group: &str) -> bool {
        match self.slots.get_mut(competitor).and_then(|events| events.get_mut(&event)) {
            Some(slot) => {
                *slot = Some(group.to_string());
                true
            }
            None => false,
        }
    }

    /// Number of non-empty slots held by a competitor across all events
    pub fn count_assigned(&self, competitor: &str) -> usize {
        self.slots
            .get(competitor)
            .map(|events| events.values().filter(|slot| slot.is_some()).count())
            .unwrap_or(0)
    }

    pub fn competitors(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Competitors holding the given group for an event
    pub fn holders(&self, event: EventId, group: &str) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|(_, events)| events.get(&event).and_then(|s| s.as_deref()) == Some(group))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn total_assigned(&self) -> usize {
        self.slots
            .values()
            .flat_map(|events| events.values())
            .filter(|slot| slot.is_some())
            .count()
    }
}
