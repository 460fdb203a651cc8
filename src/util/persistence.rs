use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::lead::LeadRecord;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "UpliftCalculator";
const APP_NAME: &str = "UpliftCalculator";

/// Overrides the platform data directory, mostly for kiosks and tests.
pub const DATA_DIR_ENV: &str = "UPLIFT_DATA_DIR";
pub const LEAD_FILE: &str = "lead.json";
const REPORTS_DIR: &str = "reports";

pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn load_lead() -> Option<LeadRecord> {
    load_lead_from(&data_dir()?)
}

pub fn save_lead(lead: &LeadRecord) -> Result<PathBuf, PersistSaveError> {
    let dir = data_dir().ok_or(PersistSaveError::StorageUnavailable)?;
    save_lead_to(&dir, lead)
}

/// Missing or unreadable records read as `None`.
pub fn load_lead_from(dir: &Path) -> Option<LeadRecord> {
    let path = dir.join(LEAD_FILE);
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(lead) => Some(lead),
        Err(err) => {
            log::warn!("Ignoring malformed lead record at {}: {err}", path.display());
            None
        }
    }
}

/// Writes the single lead record. Last write wins.
pub fn save_lead_to(dir: &Path, lead: &LeadRecord) -> Result<PathBuf, PersistSaveError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LEAD_FILE);
    let json = serde_json::to_string_pretty(lead)?;
    fs::write(&path, json)?;
    log::info!("Saved lead record {} to {}", lead.id, path.display());
    Ok(path)
}

pub fn export_report(file_stem: &str, contents: &str) -> Result<PathBuf, PersistSaveError> {
    let dir = data_dir().ok_or(PersistSaveError::StorageUnavailable)?;
    export_report_to(&dir, file_stem, contents)
}

pub fn export_report_to(
    dir: &Path,
    file_stem: &str,
    contents: &str,
) -> Result<PathBuf, PersistSaveError> {
    let reports = dir.join(REPORTS_DIR);
    fs::create_dir_all(&reports)?;
    let path = reports.join(format!("{}.txt", sanitize_file_stem(file_stem)));
    fs::write(&path, contents)?;
    log::info!("Exported report to {}", path.display());
    Ok(path)
}

fn sanitize_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        "uplift-report".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
