//! JSON seed strategy.
//!
//! Reads a file holding a JSON array of employee objects. Objects may omit
//! `id` and `status`; any supplied `id` is dropped so the records are always
//! inserted fresh.

use crate::entities::EmployeeRecord;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Reads `path` as a JSON array of employees.
///
/// Best effort: a missing file, unreadable file or malformed JSON is logged
/// and produces an empty list.
pub fn load_json(path: &Path) -> Vec<EmployeeRecord> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Unable to create employees from {:?}: {}", path, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<EmployeeRecord>>(&contents) {
        Ok(records) => {
            info!("Read {} employee records from {:?}", records.len(), path);
            records
                .into_iter()
                .map(|record| EmployeeRecord { id: None, ..record })
                .collect()
        }
        Err(e) => {
            warn!("Unable to create employees from {:?}: {}", path, e);
            Vec::new()
        }
    }
}
