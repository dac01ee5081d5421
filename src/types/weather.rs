//! Serde models for the Open-Meteo forecast payload.
//!
//! Decoding is forgiving: a malformed series, or a non-numeric entry inside
//! one, must not sink the surrounding response. Bad series decode as empty
//! vectors and bad entries as `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top level of the forecast response. Everything outside `daily` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherResponse {
    pub daily: Option<DailySeries>,
}

/// The `daily` block: one aligned series per requested variable.
///
/// Entries are `None` where the upstream reported `null` or something
/// non-numeric; an absent or malformed series is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    #[serde(default, deserialize_with = "lenient_series")]
    pub temperature_2m_max: Vec<Option<f64>>, // celsius
    #[serde(default, deserialize_with = "lenient_series")]
    pub temperature_2m_min: Vec<Option<f64>>, // celsius
    #[serde(default, deserialize_with = "lenient_series")]
    pub relative_humidity_2m_max: Vec<Option<f64>>, // percent
}

fn lenient_series<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(entries.iter().map(Value::as_f64).collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_regular_forecast() -> Result<(), serde_json::Error> {
        let payload = json!({
            "latitude": 34.0,
            "daily": {
                "time": ["2025-06-01", "2025-06-02"],
                "temperature_2m_max": [30.0, 32],
                "temperature_2m_min": [18.5, 19.0],
                "relative_humidity_2m_max": [42.0, null]
            }
        });
        let response: WeatherResponse = serde_json::from_value(payload)?;
        let daily = response.daily.unwrap();
        assert_eq!(daily.temperature_2m_max, vec![Some(30.0), Some(32.0)]);
        assert_eq!(daily.relative_humidity_2m_max, vec![Some(42.0), None]);
        Ok(())
    }

    #[test]
    fn missing_daily_block_is_none() -> Result<(), serde_json::Error> {
        let response: WeatherResponse = serde_json::from_value(json!({"latitude": 34.0}))?;
        assert!(response.daily.is_none());
        Ok(())
    }

    #[test]
    fn missing_series_is_empty() -> Result<(), serde_json::Error> {
        let payload = json!({"daily": {"temperature_2m_max": [30.0]}});
        let response: WeatherResponse = serde_json::from_value(payload)?;
        let daily = response.daily.unwrap();
        assert_eq!(daily.temperature_2m_max, vec![Some(30.0)]);
        assert!(daily.relative_humidity_2m_max.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_series_degrades_to_empty() -> Result<(), serde_json::Error> {
        let payload = json!({
            "daily": {
                "temperature_2m_max": "not a series",
                "relative_humidity_2m_max": [41.0, "n/a", 43.0]
            }
        });
        let response: WeatherResponse = serde_json::from_value(payload)?;
        let daily = response.daily.unwrap();
        assert!(daily.temperature_2m_max.is_empty());
        assert_eq!(
            daily.relative_humidity_2m_max,
            vec![Some(41.0), None, Some(43.0)]
        );
        Ok(())
    }
}
