use csv::Reader;
use indexmap::IndexMap;
use log::warn;
use std::io;
use std::path::Path;

use crate::error::StaffingError;
use crate::events::EventId;

/// One competitor's row: event -> group label ("" when not taking part)
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorRow {
    pub name: String,
    pub groups: IndexMap<EventId, String>,
}

impl CompetitorRow {
    /// Group label for an event, `None` when the cell is empty or absent
    pub fn group(&self, event: EventId) -> Option<&str> {
        self.groups
            .get(&event)
            .map(String::as_str)
            .filter(|g| !g.is_empty())
    }
}

/// Loads a schedule (or an assignment file, same layout) from a CSV file
pub fn load_schedule<P: AsRef<Path>>(csv_path: P) -> Result<Vec<CompetitorRow>, StaffingError> {
    let csv_path = csv_path.as_ref();
    let reader = Reader::from_path(csv_path)?;
    read_schedule(reader, csv_path)
}

/// Reads schedule rows from any CSV source
///
/// Columns that aren't `name` or an event id are ignored. A repeated name
/// replaces the earlier row but keeps its position.
pub fn read_schedule<R: io::Read>(
    mut reader: Reader<R>,
    source: &Path,
) -> Result<Vec<CompetitorRow>, StaffingError> {
    let headers = reader.headers()?.clone();

    let name_col = headers
        .iter()
        .position(|h| h.trim() == "name")
        .ok_or_else(|| StaffingError::MissingNameColumn(source.to_path_buf()))?;
    let event_cols: Vec<(usize, EventId)> = headers
        .iter()
        .enumerate()
        .filter_map(|(col, h)| h.trim().parse::<EventId>().ok().map(|event| (col, event)))
        .collect();

    let mut rows: IndexMap<String, CompetitorRow> = IndexMap::new();

    for result in reader.records() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let groups = event_cols
            .iter()
            .map(|&(col, event)| (event, record.get(col).unwrap_or("").trim().to_string()))
            .collect();

        let row = CompetitorRow { name: name.clone(), groups };
        if rows.insert(name.clone(), row).is_some() {
            warn!("{} appears more than once in {}, keeping the last row", name, source.display());
        }
    }

    Ok(rows.into_values().collect())
}
