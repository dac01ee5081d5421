//! Turns collected records into a Polars frame and persists it as CSV.

use crate::types::record::FeatureRecord;
use polars::df;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to assemble the output frame")]
    Frame(#[from] PolarsError),

    #[error("Failed to create output file '{0}'")]
    CreateFile(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing CSV file '{0}'")]
    CsvWrite(PathBuf, #[source] PolarsError),
}

/// Builds the output frame, one row per record, columns in persisted order.
///
/// Missing numeric values stay `f64::NAN` so every row keeps the full
/// schema.
pub fn records_to_frame(records: &[FeatureRecord]) -> Result<DataFrame, SinkError> {
    let soil_types: Vec<&str> = records.iter().map(|r| r.soil_type.as_str()).collect();
    let frame = df!(
        "Temperature" => records.iter().map(|r| r.temperature).collect::<Vec<f64>>(),
        "Humidity" => records.iter().map(|r| r.humidity).collect::<Vec<f64>>(),
        "Moisture" => records.iter().map(|r| r.moisture).collect::<Vec<f64>>(),
        "Soil Type" => soil_types,
        "Nitrogen" => records.iter().map(|r| r.nitrogen).collect::<Vec<f64>>(),
        "Phosphorus" => records.iter().map(|r| r.phosphorus).collect::<Vec<f64>>(),
        "Potassium" => records.iter().map(|r| r.potassium).collect::<Vec<f64>>(),
        "Latitude" => records.iter().map(|r| r.latitude).collect::<Vec<f64>>(),
        "Longitude" => records.iter().map(|r| r.longitude).collect::<Vec<f64>>()
    )?;
    Ok(frame)
}

/// Writes the frame to `path` as headered CSV. `NaN` values are written as
/// the literal text `NaN`.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<(), SinkError> {
    let file = std::fs::File::create(path)
        .map_err(|e| SinkError::CreateFile(path.to_path_buf(), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)
        .map_err(|e| SinkError::CsvWrite(path.to_path_buf(), e))?;
    Ok(())
}
