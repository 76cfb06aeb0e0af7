//! CSV fare data files.
//!
//! Each mode has its own file in the data directory (see
//! [`Mode::file_name`]), one fare per row:
//!
//! ```text
//! origin,destination,category,cost,timing
//! Chennai,Madurai,Volvo AC,260,22:00
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{FareRecord, FareTime, Mode, Place};

use super::error::FareDataError;
use super::store::FareTables;

/// One CSV row.
#[derive(Debug, Serialize, Deserialize)]
struct FareRow {
    origin: String,
    destination: String,
    category: String,
    #[serde(with = "rust_decimal::serde::str")]
    cost: Decimal,
    timing: String,
}

impl FareRow {
    fn from_record(record: &FareRecord) -> Self {
        Self {
            origin: record.origin().to_string(),
            destination: record.destination().to_string(),
            category: record.category().to_string(),
            cost: record.cost(),
            timing: record.timing().to_string(),
        }
    }

    fn into_record(self, mode: Mode) -> Result<FareRecord, String> {
        let origin = Place::parse(&self.origin).map_err(|e| format!("origin: {e}"))?;
        let destination =
            Place::parse(&self.destination).map_err(|e| format!("destination: {e}"))?;
        let timing = FareTime::parse_hhmm(self.timing.trim()).map_err(|e| e.to_string())?;
        FareRecord::new(mode, origin, destination, self.category, self.cost, timing)
            .map_err(|e| e.to_string())
    }
}

/// Path of a mode's fare file inside `dir`.
pub fn table_path(dir: &Path, mode: Mode) -> PathBuf {
    dir.join(mode.file_name())
}

/// Whether both fare files exist.
pub fn tables_exist(dir: &Path) -> bool {
    Mode::ALL.iter().all(|m| table_path(dir, *m).is_file())
}

/// Load both fare files from `dir`.
pub fn load_tables(dir: &Path) -> Result<FareTables, FareDataError> {
    let mut tables = FareTables::new();
    for mode in Mode::ALL {
        for record in load_table(dir, mode)? {
            tables.insert(record);
        }
    }
    let counts = tables.counts();
    info!(
        dir = %dir.display(),
        bus = counts.bus,
        train = counts.train,
        "loaded fare tables"
    );
    Ok(tables)
}

/// Load one mode's fare file.
pub fn load_table(dir: &Path, mode: Mode) -> Result<Vec<FareRecord>, FareDataError> {
    let path = table_path(dir, mode);
    let mut reader = csv::Reader::from_path(&path).map_err(|source| FareDataError::Csv {
        path: path.clone(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<FareRow>() {
        let row = row.map_err(|source| FareDataError::Csv {
            path: path.clone(),
            source,
        })?;
        let record = row.into_record(mode);
        let record = record.map_err(|message| FareDataError::InvalidRow {
            path: path.clone(),
            // header is line 1
            line: records.len() as u64 + 2,
            message,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Write both fare tables into `dir`, replacing any existing files.
///
/// Creates `dir` if it does not exist.
pub fn save_tables(dir: &Path, tables: &FareTables) -> Result<(), FareDataError> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| FareDataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    for mode in Mode::ALL {
        let path = table_path(dir, mode);
        let mut writer = csv::Writer::from_path(&path).map_err(|source| FareDataError::Csv {
            path: path.clone(),
            source,
        })?;
        for record in tables.table(mode).rows() {
            writer
                .serialize(FareRow::from_record(record))
                .map_err(|source| FareDataError::Csv {
                    path: path.clone(),
                    source,
                })?;
        }
        writer.flush().map_err(|source| FareDataError::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Delete both fare files if present.
pub fn clear_tables(dir: &Path) -> Result<(), FareDataError> {
    for mode in Mode::ALL {
        let path = table_path(dir, mode);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|source| FareDataError::Io {
                path: path.clone(),
                source,
            })?;
        }
    }
    Ok(())
}
