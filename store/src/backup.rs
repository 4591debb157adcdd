//! Backup export/import of the whole aggregate.

use serde_json;
use thiserror::Error;

use crate::{StoreData, StoreSettings};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid backup file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize the aggregate for download.
pub fn export_json(data: &StoreData) -> String {
    // StoreData is plain data all the way down; serialization cannot fail
    serde_json::to_string_pretty(data).expect("StoreData serialization")
}

/// Parse a backup file back into the aggregate.
///
/// Unknown fields are ignored and missing ones defaulted by the settings
/// normalization pass, so older backups import cleanly.
pub fn import_json(raw: &str) -> Result<StoreData, ImportError> {
    Ok(serde_json::from_str(raw)?)
}

/// Download filename for a backup, derived from the store name.
pub fn filename(settings: &StoreSettings) -> String {
    format!("{}_backup.json", settings.name)
}
