//! Verification of an assignment set against the competing schedule.

use std::collections::HashMap;
use std::fmt;

use crate::events::EventId;
use crate::parser::CompetitorRow;
use crate::schedule::slot_number;

/// A competitor whose competing, judging and scrambling slots collide
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub name: String,
    pub event: EventId,
    pub compete: String,
    pub judge: String,
    pub scramble: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tcompete: {}\tjudge: {}\tscramble: {}",
            self.name, self.event, self.compete, self.judge, self.scramble
        )
    }
}

fn slot_or(rows: &HashMap<&str, &CompetitorRow>, name: &str, event: EventId, missing: &str) -> String {
    rows.get(name)
        .and_then(|row| row.group(event))
        .map(slot_number)
        .filter(|slot| !slot.is_empty())
        .unwrap_or(missing)
        .to_string()
}

/// Compares slot numbers of every competitor's competing, judging and
/// scrambling groups, event by event
pub fn find_conflicts(
    schedule: &[CompetitorRow],
    judging: &[CompetitorRow],
    scrambling: &[CompetitorRow],
) -> Vec<Conflict> {
    let judging: HashMap<&str, &CompetitorRow> = judging.iter().map(|r| (r.name.as_str(), r)).collect();
    let scrambling: HashMap<&str, &CompetitorRow> = scrambling.iter().map(|r| (r.name.as_str(), r)).collect();

    let mut conflicts = Vec::new();
    for row in schedule {
        for &event in row.groups.keys() {
            let compete = row
                .group(event)
                .map(slot_number)
                .filter(|slot| !slot.is_empty())
                .unwrap_or("not competing")
                .to_string();
            let judge = slot_or(&judging, &row.name, event, "not judging");
            let scramble = slot_or(&scrambling, &row.name, event, "not scrambling");

            if compete == judge || judge == scramble || compete == scramble {
                conflicts.push(Conflict {
                    name: row.name.clone(),
                    event,
                    compete,
                    judge,
                    scramble,
                });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, groups: &[(EventId, &str)]) -> CompetitorRow {
        CompetitorRow {
            name: name.to_string(),
            groups: groups.iter().map(|(e, g)| (*e, g.to_string())).collect(),
        }
    }

    #[test]
    fn test_clean_assignments() {
        let schedule = vec![
            row("Ada", &[(EventId::Cube3, "Red 1"), (EventId::Cube2, "")]),
            row("Alan", &[(EventId::Cube3, "Red 2"), (EventId::Cube2, "Blue 1")]),
        ];
        let judging = vec![row("Ada", &[(EventId::Cube3, "Blue 2"), (EventId::Cube2, "Blue 1")])];
        let scrambling = vec![row("Alan", &[(EventId::Cube3, "Red 1"), (EventId::Cube2, "")])];
        assert!(find_conflicts(&schedule, &judging, &scrambling).is_empty());
    }

    #[test]
    fn test_judging_a_concurrent_group() {
        let schedule = vec![row("Ada", &[(EventId::Cube3, "Red 1")])];
        let judging = vec![row("Ada", &[(EventId::Cube3, "Blue 1")])];
        let conflicts = find_conflicts(&schedule, &judging, &[]);
        assert_eq!(
            conflicts,
            vec![Conflict {
                name: "Ada".to_string(),
                event: EventId::Cube3,
                compete: "1".to_string(),
                judge: "1".to_string(),
                scramble: "not scrambling".to_string(),
            }]
        );
        assert_eq!(conflicts[0].to_string(), "Ada\t333\tcompete: 1\tjudge: 1\tscramble: not scrambling");
    }

    #[test]
    fn test_scrambling_while_competing() {
        let schedule = vec![row("Ada", &[(EventId::Skewb, "Green 3")])];
        let scrambling = vec![row("Ada", &[(EventId::Skewb, "Red 3")])];
        assert_eq!(find_conflicts(&schedule, &[], &scrambling).len(), 1);
    }

    #[test]
    fn test_judging_and_scrambling_same_slot() {
        let schedule = vec![row("Ada", &[(EventId::Cube3, "")])];
        let judging = vec![row("Ada", &[(EventId::Cube3, "Red 2")])];
        let scrambling = vec![row("Ada", &[(EventId::Cube3, "Blue 2")])];
        let conflicts = find_conflicts(&schedule, &judging, &scrambling);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].compete, "not competing");
    }
}
