//! This module provides the main entry point for collecting agronomic
//! features. It supports sampling a single coordinate or sweeping a whole
//! lattice of points, folding forecast weather and soil composition into
//! one flat record per point.

use crate::error::CropGridError;
use crate::features::fetcher::{FeatureFetcher, OPEN_METEO_BASE, SOILGRIDS_BASE};
use crate::grid::{GridSpec, LatLon};
use crate::types::record::FeatureRecord;
use crate::upstream::client::{UpstreamClient, DEFAULT_TIMEOUT};
use bon::bon;
use log::info;
use std::time::Duration;

/// Pause between consecutive grid points when the caller does not pick one.
/// Both upstream APIs are free services with request-rate limits.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// The client for collecting per-point agronomic features.
///
/// A `CropGrid` owns one HTTP client and the base URLs of the two upstream
/// services. Sampling never fails: unreachable services degrade the
/// affected columns to their missing-value sentinels instead.
///
/// # Examples
///
/// ```no_run
/// # use cropgrid::{CropGrid, CropGridError, LatLon};
/// # async fn run() -> Result<(), CropGridError> {
/// let client = CropGrid::builder().build()?;
/// let record = client.sample_point(LatLon(36.75, 3.06)).await;
/// println!("soil near Algiers: {}", record.soil_type);
/// # Ok(())
/// # }
/// ```
pub struct CropGrid {
    fetcher: FeatureFetcher,
}

#[bon]
impl CropGrid {
    /// Creates a new `CropGrid` client.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to
    ///   [`DEFAULT_TIMEOUT`].
    /// * `.weather_base(String)`: Optional. Base URL of the forecast API.
    ///   Defaults to [`OPEN_METEO_BASE`].
    /// * `.soil_base(String)`: Optional. Base URL of the soil API.
    ///   Defaults to [`SOILGRIDS_BASE`].
    ///
    /// # Errors
    ///
    /// Returns [`CropGridError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cropgrid::{CropGrid, CropGridError};
    /// # use std::time::Duration;
    /// # fn run() -> Result<(), CropGridError> {
    /// let client = CropGrid::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn new(
        timeout: Option<Duration>,
        weather_base: Option<String>,
        soil_base: Option<String>,
    ) -> Result<Self, CropGridError> {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let upstream = UpstreamClient::new(timeout).map_err(CropGridError::ClientBuild)?;
        Ok(CropGrid {
            fetcher: FeatureFetcher::new(
                upstream,
                weather_base.unwrap_or_else(|| OPEN_METEO_BASE.to_string()),
                soil_base.unwrap_or_else(|| SOILGRIDS_BASE.to_string()),
            ),
        })
    }

    /// Collects the feature record for a single coordinate.
    ///
    /// Never fails; see [`FeatureRecord`] for how missing upstream data is
    /// represented.
    pub async fn sample_point(&self, point: LatLon) -> FeatureRecord {
        self.fetcher.fetch_point(point).await
    }

    /// Sweeps a sampling lattice and collects one record per point, in
    /// row-major lattice order.
    ///
    /// Points are fetched one at a time with a pause between consecutive
    /// points. There is no pause after the final point.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.spec(GridSpec)`: Optional. The lattice to sweep. Defaults to
    ///   [`GridSpec::default`], the 8x8 Northern Algeria grid.
    /// * `.delay(Duration)`: Optional. Pause between consecutive points.
    ///   Defaults to [`DEFAULT_DELAY`].
    ///
    /// # Returns
    ///
    /// One [`FeatureRecord`] per lattice point. The result always has
    /// exactly `spec.len()` entries.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use cropgrid::{CropGrid, CropGridError, GridSpec};
    /// # use std::time::Duration;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), CropGridError> {
    /// let client = CropGrid::builder().build()?;
    ///
    /// let records = client
    ///     .sample_grid()
    ///     .spec(GridSpec::default())
    ///     .delay(Duration::from_secs(1))
    ///     .call()
    ///     .await;
    ///
    /// assert_eq!(records.len(), 64);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn sample_grid(
        &self,
        spec: Option<GridSpec>,
        delay: Option<Duration>,
    ) -> Vec<FeatureRecord> {
        let spec = spec.unwrap_or_default();
        let delay = delay.unwrap_or(DEFAULT_DELAY);

        let points = spec.lattice();
        let total = points.len();
        let mut records = Vec::with_capacity(total);
        for (index, point) in points.into_iter().enumerate() {
            info!(
                "({}/{}) Sampling point {:.2}, {:.2}",
                index + 1,
                total,
                point.0,
                point.1
            );
            records.push(self.fetcher.fetch_point(point).await);
            if index + 1 < total {
                tokio::time::sleep(delay).await;
            }
        }
        records
    }
}
