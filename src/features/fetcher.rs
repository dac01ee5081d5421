//! Per-point feature collection: build the two upstream queries, fetch
//! both payloads, and fold whatever came back into a [`FeatureRecord`].

use crate::features::derive::{
    derive_soil_type, nan_mean, MOISTURE_PLACEHOLDER, PHOSPHORUS_PER_NITROGEN, POTASSIUM_PER_CEC,
};
use crate::grid::LatLon;
use crate::types::record::FeatureRecord;
use crate::types::soil::{SoilResponse, SoilSample};
use crate::types::weather::WeatherResponse;
use crate::upstream::client::UpstreamClient;

/// Production base URL of the Open-Meteo forecast API.
pub const OPEN_METEO_BASE: &str = "https://api.open-meteo.com";

/// Production base URL of the ISRIC SoilGrids REST API.
pub const SOILGRIDS_BASE: &str = "https://rest.isric.org";

/// Fetches and aggregates the feature set for single points.
pub struct FeatureFetcher {
    upstream: UpstreamClient,
    weather_base: String,
    soil_base: String,
}

impl FeatureFetcher {
    pub fn new(
        upstream: UpstreamClient,
        weather_base: impl Into<String>,
        soil_base: impl Into<String>,
    ) -> Self {
        FeatureFetcher {
            upstream,
            weather_base: weather_base.into(),
            soil_base: soil_base.into(),
        }
    }

    /// Seven-day daily forecast query for one point.
    pub(crate) fn weather_url(&self, point: LatLon) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}\
             &daily=temperature_2m_max,temperature_2m_min,relative_humidity_2m_max\
             &forecast_days=7&timezone=auto",
            self.weather_base, point.0, point.1
        )
    }

    /// Topsoil property query for one point, one depth band, mean values.
    pub(crate) fn soil_url(&self, point: LatLon) -> String {
        format!(
            "{}/soilgrids/v2.0/properties/query?lat={}&lon={}\
             &property=nitrogen&property=clay&property=sand&property=cec\
             &depth=15-30cm&value=mean",
            self.soil_base, point.0, point.1
        )
    }

    /// Collects the full feature record for one point.
    ///
    /// Never fails: each upstream response that cannot be obtained is
    /// absorbed and the affected columns degrade to their sentinels.
    pub async fn fetch_point(&self, point: LatLon) -> FeatureRecord {
        let weather: Option<WeatherResponse> =
            self.upstream.fetch_json(&self.weather_url(point)).await;
        let soil: Option<SoilResponse> = self.upstream.fetch_json(&self.soil_url(point)).await;
        aggregate_features(point, weather, soil)
    }
}

/// Folds the (possibly absent) upstream payloads for `point` into a flat
/// record.
///
/// Weather and soil degrade independently: losing one source never affects
/// columns derived from the other, and the coordinates are always present.
pub fn aggregate_features(
    point: LatLon,
    weather: Option<WeatherResponse>,
    soil: Option<SoilResponse>,
) -> FeatureRecord {
    let daily = weather.and_then(|w| w.daily);
    let temperature = daily
        .as_ref()
        .map_or(f64::NAN, |d| nan_mean(&d.temperature_2m_max));
    let humidity = daily
        .as_ref()
        .map_or(f64::NAN, |d| nan_mean(&d.relative_humidity_2m_max));

    let sample = soil
        .map(|s| SoilSample::from_response(&s))
        .unwrap_or_default();
    let soil_type = derive_soil_type(sample.clay, sample.sand);
    let phosphorus = sample.nitrogen.map(|n| n * PHOSPHORUS_PER_NITROGEN);
    let potassium = sample.cec.map(|c| c * POTASSIUM_PER_CEC);

    FeatureRecord {
        temperature,
        humidity,
        moisture: MOISTURE_PLACEHOLDER,
        soil_type,
        nitrogen: sample.nitrogen.unwrap_or(f64::NAN),
        phosphorus: phosphorus.unwrap_or(f64::NAN),
        potassium: potassium.unwrap_or(f64::NAN),
        latitude: point.0,
        longitude: point.1,
    }
}
