//! Competition data from the public WCIF: delegates and registration years.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::StaffingError;

const WCIF_URL: &str = "https://www.worldcubeassociation.org/api/v0/competitions";

static COMPETITION_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"20[0-9]{2}$").expect("competition id pattern"));

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wcif {
    pub persons: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub wca_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Person {
    pub fn is_delegate(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role == "delegate" || role == "trainee-delegate")
    }

    /// Year encoded in the first four characters of the WCA ID
    pub fn registration_year(&self) -> Option<u32> {
        self.wca_id.as_deref()?.get(0..4)?.parse().ok()
    }
}

/// Strips a trailing local-name suffix: "Yu Da-Hyun (유다현)" -> "Yu Da-Hyun"
pub fn normalize_name(name: &str) -> &str {
    let name = name.trim();
    match name.strip_suffix(')').and_then(|rest| rest.rsplit_once(" (")) {
        Some((base, _)) => base.trim(),
        None => name,
    }
}

/// What the assignment pass needs from the competition
#[derive(Debug, Clone, Default)]
pub struct CompetitionData {
    pub delegates: HashSet<String>,
    pub registration_years: HashMap<String, u32>,
}

impl CompetitionData {
    /// Every person is recorded under both the full WCIF name and the name
    /// without its local-name suffix, so either spelling in the schedule matches.
    pub fn from_wcif(wcif: &Wcif) -> Self {
        let mut data = Self::default();
        for person in &wcif.persons {
            let full = person.name.trim();
            let names = [full, normalize_name(full)];
            for name in names {
                if person.is_delegate() {
                    data.delegates.insert(name.to_string());
                }
                if let Some(year) = person.registration_year() {
                    data.registration_years.insert(name.to_string(), year);
                }
            }
        }
        data
    }

    pub fn is_delegate(&self, name: &str) -> bool {
        self.delegates.contains(name)
    }

    /// Registered on or before `starting_year`, and not a delegate
    pub fn is_experienced(&self, name: &str, starting_year: u32) -> bool {
        !self.is_delegate(name)
            && self
                .registration_years
                .get(name)
                .map(|&year| year <= starting_year)
                .unwrap_or(false)
    }
}

/// Competition IDs end with the year, e.g. "PickeringC2023"
pub fn validate_competition_id(id: &str) -> Result<(), StaffingError> {
    if COMPETITION_ID.is_match(id) {
        Ok(())
    } else {
        Err(StaffingError::InvalidCompetitionId(id.to_string()))
    }
}

pub fn validate_input_path(path: &Path) -> Result<(), StaffingError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        Ok(())
    } else {
        Err(StaffingError::NotCsv(path.to_path_buf()))
    }
}

pub async fn fetch_competition(competition_id: &str) -> Result<CompetitionData, StaffingError> {
    let url = format!("{}/{}/wcif/public", WCIF_URL, competition_id);
    info!("Fetching competition data from {}", url);
    let wcif: Wcif = reqwest::get(&url).await?.error_for_status()?.json().await?;
    Ok(CompetitionData::from_wcif(&wcif))
}

/// Reads a WCIF document saved to disk
pub fn load_competition<P: AsRef<Path>>(path: P) -> Result<CompetitionData, StaffingError> {
    let json = std::fs::read_to_string(path)?;
    let wcif: Wcif = serde_json::from_str(&json)?;
    Ok(CompetitionData::from_wcif(&wcif))
}
