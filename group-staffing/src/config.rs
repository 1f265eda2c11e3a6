//! Staffing configuration loaded from `config.json`.

use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::StaffingError;

/// Quotas and eligibility knobs for one assignment run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffingConfig {
    /// Judges wanted for every group
    pub judges_per_group: usize,
    /// Scramblers wanted for every group
    pub scramblers_per_group: usize,
    /// Upper bound on scrambling duties per competitor, across all events
    pub max_scramble_assignments_per_competitor: usize,
    /// Competitors approved to scramble
    pub scramblers: HashSet<String>,
    /// Competitors registered on or before this year form the fallback judge pool
    pub experienced_competitor_starting_year: u32,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            judges_per_group: 0,
            scramblers_per_group: 0,
            max_scramble_assignments_per_competitor: 1,
            scramblers: HashSet::new(),
            experienced_competitor_starting_year: 2020,
        }
    }
}

impl StaffingConfig {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, StaffingError> {
        serde_json::from_str(json).map_err(|source| StaffingError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config file at `path`.
    ///
    /// When `required` is false a missing file falls back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, StaffingError> {
        let path = path.as_ref();
        if !required && !path.exists() {
            info!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = StaffingConfig::from_json("{}", Path::new("config.json")).unwrap();
        assert_eq!(config, StaffingConfig::default());
        assert_eq!(config.max_scramble_assignments_per_competitor, 1);
        assert_eq!(config.experienced_competitor_starting_year, 2020);
    }

    #[test]
    fn test_reads_camel_case_keys() {
        let json = r#"{
            "judgesPerGroup": 4,
            "scramblersPerGroup": 2,
            "maxScrambleAssignmentsPerCompetitor": 3,
            "scramblers": ["Ada Lovelace", "Alan Turing"],
            "experiencedCompetitorStartingYear": 2015
        }"#;
        let config = StaffingConfig::from_json(json, Path::new("config.json")).unwrap();
        assert_eq!(config.judges_per_group, 4);
        assert_eq!(config.scramblers_per_group, 2);
        assert_eq!(config.max_scramble_assignments_per_competitor, 3);
        assert!(config.scramblers.contains("Alan Turing"));
        assert_eq!(config.experienced_competitor_starting_year, 2015);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = StaffingConfig::from_json("{\"judgesPerGroup\": \"two\"}", Path::new("c.json"))
            .unwrap_err();
        assert!(matches!(err, StaffingError::Config { .. }));
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(StaffingConfig::load(&path, false).unwrap(), StaffingConfig::default());
        assert!(StaffingConfig::load(&path, true).is_err());
    }

    #[test]
    fn test_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{{\"judgesPerGroup\": 2}}").unwrap();
        let config = StaffingConfig::load(&path, true).unwrap();
        assert_eq!(config.judges_per_group, 2);
    }
}
