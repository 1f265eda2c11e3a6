use std::path::PathBuf;
use thiserror::Error;

use crate::checker::Conflict;

#[derive(Error, Debug)]
pub enum StaffingError {
    #[error("--input is not a CSV file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("--competition is not a WCIF competition ID: {0}")]
    InvalidCompetitionId(String),

    #[error("{} has no `name` column", .0.display())]
    MissingNameColumn(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid competition data: {0}")]
    CompetitionData(#[from] serde_json::Error),

    #[error("failed to fetch competition data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("{count} assignment conflict(s), first: {first}")]
    Conflicts { count: usize, first: Conflict },
}
