use std::collections::HashSet;
use std::path::Path;

use csv::Writer;

use crate::error::StaffingError;
use crate::events::EventId;
use crate::schedule::{AssignmentMap, ScheduleIndex, StaffingWarning};

/// Rows for every competitor holding at least one assignment:
/// name followed by one cell per event ("" when unassigned)
pub fn assignment_rows(assignments: &AssignmentMap, events: &[EventId]) -> Vec<Vec<String>> {
    assignments
        .competitors()
        .filter(|name| assignments.count_assigned(name) > 0)
        .map(|name| {
            let mut row = vec![name.to_string()];
            row.extend(
                events
                    .iter()
                    .map(|&event| assignments.get(name, event).unwrap_or("").to_string()),
            );
            row
        })
        .collect()
}

/// Writes an assignment table with header `name,<event>...`
pub fn write_assignments<P: AsRef<Path>>(
    path: P,
    events: &[EventId],
    assignments: &AssignmentMap,
) -> Result<(), StaffingError> {
    let mut writer = Writer::from_path(path)?;

    let mut header = vec!["name".to_string()];
    header.extend(events.iter().map(|e| e.to_string()));
    writer.write_record(&header)?;

    for row in assignment_rows(assignments, events) {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Non-delegates left without a single judging duty
pub fn missing_judges(judging: &AssignmentMap, delegates: &HashSet<String>) -> Vec<StaffingWarning> {
    judging
        .competitors()
        .filter(|name| judging.count_assigned(name) == 0 && !delegates.contains(*name))
        .map(|name| StaffingWarning::NoJudgingAssignment {
            competitor: name.to_string(),
        })
        .collect()
}

/// Prints who judges and scrambles each group
pub fn print_staffing_summary(index: &ScheduleIndex) {
    println!("\n=== Staffing Summary ===");
    println!("Total judging assignments: {}", index.judging.total_assigned());
    println!("Total scrambling assignments: {}", index.scrambling.total_assigned());

    for (event, groups) in &index.competing {
        println!("\n{}:", event);
        for group in groups.keys() {
            let judges = index.judging.holders(*event, group);
            let scramblers = index.scrambling.holders(*event, group);
            println!(
                "  {} -> judges ({}): {} | scramblers ({}): {}",
                group,
                judges.len(),
                if judges.is_empty() { "[NONE]".to_string() } else { judges.join(", ") },
                scramblers.len(),
                if scramblers.is_empty() { "[NONE]".to_string() } else { scramblers.join(", ") },
            );
        }
    }
}

/// Prints warnings collected during a run
pub fn print_warnings(warnings: &[StaffingWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n⚠️  Warnings ({}):", warnings.len());
    for warning in warnings {
        println!("  - {}", warning);
    }
}
