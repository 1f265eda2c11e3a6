use std::collections::HashSet;

use log::{info, warn};

use crate::config::StaffingConfig;
use super::experienced::{ExperiencedPool, PoolCursor};
use super::index::ScheduleIndex;
use super::selector::{try_fill, Eligibility};
use super::slot_utils::classify_groups;
use super::types::{Role, StaffingWarning};

/// Assigns scramblers, then judges, to every group of every event.
///
/// Judges come from the pools of non-concurrent groups first and from the
/// experienced pool once those run dry. A group that can't be fully staffed
/// yields a warning; the pass always runs to the end.
pub fn assign_scramblers_and_judges(
    index: &mut ScheduleIndex,
    config: &StaffingConfig,
    delegates: &HashSet<String>,
    experienced: &mut ExperiencedPool,
) -> Vec<StaffingWarning> {
    let ScheduleIndex {
        competing,
        competing_groups,
        judging,
        scrambling,
        ..
    } = index;
    let mut warnings = Vec::new();

    for (&event, groups) in competing.iter_mut() {
        let group_names: Vec<String> = groups.keys().cloned().collect();

        for group in &group_names {
            let (non_concurrent, concurrent) = classify_groups(group, &group_names);

            // Scramblers: stop at the first miss
            let mut scramblers_assigned = 0;
            {
                let rule = Eligibility {
                    role: Role::Scrambler,
                    delegates,
                    approved_scramblers: &config.scramblers,
                    max_scramble_assignments: config.max_scramble_assignments_per_competitor,
                    other_role: judging,
                };
                while scramblers_assigned < config.scramblers_per_group {
                    if try_fill(group, &non_concurrent, groups, scrambling, event, &rule).is_some() {
                        scramblers_assigned += 1;
                    } else {
                        let warning = StaffingWarning::Understaffed {
                            event,
                            group: group.clone(),
                            role: Role::Scrambler,
                            assigned: scramblers_assigned,
                            wanted: config.scramblers_per_group,
                        };
                        warn!("{}", warning);
                        warnings.push(warning);
                        break;
                    }
                }
            }

            // Judges: other groups' pools, then experienced competitors
            let mut judges_assigned = 0;
            let mut from_pools = true;
            let mut cursor = PoolCursor::default();
            while judges_assigned < config.judges_per_group {
                if from_pools {
                    let rule = Eligibility {
                        role: Role::Judge,
                        delegates,
                        approved_scramblers: &config.scramblers,
                        max_scramble_assignments: config.max_scramble_assignments_per_competitor,
                        other_role: scrambling,
                    };
                    if try_fill(group, &non_concurrent, groups, judging, event, &rule).is_some() {
                        judges_assigned += 1;
                        continue;
                    }
                    from_pools = false;
                }

                let drawn = experienced.draw(&mut cursor, |name| {
                    let busy = competing_groups
                        .get(name)
                        .and_then(|events| events.get(&event))
                        .map(|own| own == group || concurrent.contains(own))
                        .unwrap_or(false);
                    !busy
                        && judging.has_slot(name, event)
                        && judging.get(name, event).is_none()
                        && scrambling.get(name, event).is_none()
                });

                match drawn {
                    Some(name) => {
                        info!("{} {}: experienced competitor {} judges", event, group, name);
                        judging.assign(&name, event, group);
                        judges_assigned += 1;
                    }
                    None => {
                        let warning = StaffingWarning::Understaffed {
                            event,
                            group: group.clone(),
                            role: Role::Judge,
                            assigned: judges_assigned,
                            wanted: config.judges_per_group,
                        };
                        warn!("{}", warning);
                        warnings.push(warning);
                        break;
                    }
                }
            }
        }
    }

    warnings
}
