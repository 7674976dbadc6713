use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::ForecastRecord;

pub const DEFAULT_FOLDER: &str = "data";
pub const DEFAULT_FILE: &str = "default.csv";

const HEADER: &str = "date,time,temp_c,place";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Forecast record has no hourly points to store")]
    NoHourlyPoints,

    #[error("Hourly timestamp '{0}' is not in 'YYYY-MM-DD HH:MM' format")]
    BadTimestamp(String),

    #[error("Failed to create data folder '{0}'")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to write forecast table '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error(
        "No stored forecast at '{0}'.\n\
         Hint: run with --update_place <PLACE> first."
    )]
    MissingFile(PathBuf),

    #[error("Failed to read forecast table '{0}'")]
    Read(PathBuf, #[source] PolarsError),
}

/// CSV-backed store for one day of hourly forecast data.
///
/// Owns path resolution (folder + file name) and folder creation. Every
/// write replaces the whole file; there is no append, locking, or
/// partial-write protection.
#[derive(Debug, Clone)]
pub struct CsvStore {
    folder: PathBuf,
    file: String,
}

impl Default for CsvStore {
    fn default() -> Self {
        Self::new(DEFAULT_FOLDER, DEFAULT_FILE)
    }
}

impl CsvStore {
    pub fn new(folder: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            file: file.into(),
        }
    }

    /// Full path of the backing CSV file.
    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file)
    }

    /// Write `record`'s hourly points, replacing any previous content.
    ///
    /// Each timestamp is split into separate `date` and `time` columns; the
    /// place name is denormalized onto every row, matching the source format.
    pub fn write(&self, record: &ForecastRecord) -> Result<(), StoreError> {
        if record.hourly_points.is_empty() {
            return Err(StoreError::NoHourlyPoints);
        }

        let mut contents = String::from(HEADER);
        contents.push('\n');
        for point in &record.hourly_points {
            let (date, time) = split_timestamp(&point.time)?;
            // Debug float formatting keeps the trailing ".0" on whole degrees.
            let row = format!("{date},{time},{:?},{}\n", point.temp_c, record.place_name);
            debug!("{}", row.trim_end());
            contents.push_str(&row);
        }

        fs::create_dir_all(&self.folder)
            .map_err(|e| StoreError::CreateDir(self.folder.clone(), e))?;

        let path = self.path();
        fs::write(&path, contents).map_err(|e| StoreError::Write(path.clone(), e))?;

        info!(
            "Stored {} hourly points to {}",
            record.hourly_points.len(),
            path.display()
        );
        Ok(())
    }

    /// Load the stored table into a `DataFrame`.
    ///
    /// `temp_c` is coerced to `Float64`; the other columns stay strings. Row
    /// order is preserved as stored. No schema validation beyond that.
    pub fn read(&self) -> Result<DataFrame, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Err(StoreError::MissingFile(path));
        }

        let schema = Schema::from_iter([
            ("date".into(), DataType::String),
            ("time".into(), DataType::String),
            ("temp_c".into(), DataType::Float64),
            ("place".into(), DataType::String),
        ]);

        CsvReadOptions::default()
            .with_has_header(true)
            .with_schema_overwrite(Some(SchemaRef::new(schema)))
            .try_into_reader_with_file_path(Some(path.clone()))
            .map_err(|e| StoreError::Read(path.clone(), e))?
            .finish()
            .map_err(|e| StoreError::Read(path, e))
    }
}

/// Split a provider timestamp into its date and time columns.
fn split_timestamp(timestamp: &str) -> Result<(String, String), StoreError> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| StoreError::BadTimestamp(timestamp.to_string()))?;

    Ok((
        parsed.format("%Y-%m-%d").to_string(),
        parsed.format("%H:%M").to_string(),
    ))
}
