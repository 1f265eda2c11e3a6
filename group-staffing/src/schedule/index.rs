use std::collections::HashMap;

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::events::EventId;
use crate::parser::CompetitorRow;
use super::types::{AssignmentMap, EventGroups};

/// In-memory view of the competing schedule used by the assignment pass
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    /// Competitor names in schedule order
    pub competitors: Vec<String>,
    /// event -> group -> competing pool; only events with at least one group
    pub competing: IndexMap<EventId, EventGroups>,
    /// competitor -> event -> own competing group
    pub competing_groups: HashMap<String, HashMap<EventId, String>>,
    pub judging: AssignmentMap,
    pub scrambling: AssignmentMap,
}

impl ScheduleIndex {
    /// Builds the index and shuffles every competing pool once
    pub fn build<R: Rng + ?Sized>(rows: &[CompetitorRow], rng: &mut R) -> Self {
        let mut index = Self::from_rows(rows);
        index.shuffle_pools(rng);
        index
    }

    /// Builds the index keeping pools in schedule order
    pub fn from_rows(rows: &[CompetitorRow]) -> Self {
        let mut index = Self::default();

        for row in rows {
            index.competitors.push(row.name.clone());
            for (&event, group) in &row.groups {
                index.judging.add_slot(&row.name, event);
                index.scrambling.add_slot(&row.name, event);

                if group.is_empty() {
                    continue;
                }
                index
                    .competing
                    .entry(event)
                    .or_default()
                    .entry(group.clone())
                    .or_default()
                    .push(row.name.clone());
                index
                    .competing_groups
                    .entry(row.name.clone())
                    .or_default()
                    .insert(event, group.clone());
            }
        }

        index
    }

    pub fn shuffle_pools<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for groups in self.competing.values_mut() {
            for pool in groups.values_mut() {
                pool.shuffle(rng);
            }
        }
    }

    /// Events that have at least one group, in discovery order
    pub fn events(&self) -> Vec<EventId> {
        self.competing.keys().copied().collect()
    }
}
