use std::collections::HashSet;

use log::debug;

use crate::events::EventId;
use super::types::{AssignmentMap, EventGroups, Role};

/// Who may take a role, checked against the map being filled
pub struct Eligibility<'a> {
    pub role: Role,
    pub delegates: &'a HashSet<String>,
    pub approved_scramblers: &'a HashSet<String>,
    pub max_scramble_assignments: usize,
    /// Assignments of the other role, to keep one duty per competitor per event
    pub other_role: &'a AssignmentMap,
}

impl<'a> Eligibility<'a> {
    pub fn admits(&self, candidate: &str, event: EventId, assignments: &AssignmentMap) -> bool {
        if self.delegates.contains(candidate) {
            return false;
        }
        if assignments.get(candidate, event).is_some()
            || self.other_role.get(candidate, event).is_some()
        {
            return false;
        }
        match self.role {
            Role::Judge => true,
            Role::Scrambler => {
                self.approved_scramblers.contains(candidate)
                    && assignments.count_assigned(candidate) < self.max_scramble_assignments
            }
        }
    }
}

/// Pops one candidate per group in `candidate_groups` until one is eligible,
/// then assigns them to `group`. Returns the assigned competitor.
///
/// Rejected candidates are not put back: a competitor pulled from a pool is
/// considered once for this event and then dropped from that pool.
pub fn try_fill(
    group: &str,
    candidate_groups: &[String],
    pools: &mut EventGroups,
    assignments: &mut AssignmentMap,
    event: EventId,
    eligibility: &Eligibility<'_>,
) -> Option<String> {
    for other_group in candidate_groups {
        let candidate = match pools.get_mut(other_group).and_then(|pool| pool.pop()) {
            Some(candidate) => candidate,
            None => continue,
        };

        if eligibility.admits(&candidate, event, assignments)
            && assignments.assign(&candidate, event, group)
        {
            return Some(candidate);
        }
        debug!(
            "{} {}: {} from {} rejected as {}",
            event,
            group,
            candidate,
            other_group,
            eligibility.role.as_str()
        );
    }
    None
}
