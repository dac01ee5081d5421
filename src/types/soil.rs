//! Serde models for the SoilGrids property-query payload.
//!
//! Layer decoding is forgiving: a structurally broken layer element is
//! dropped rather than failing the whole response, so one bad layer cannot
//! take its siblings down with it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top level of the SoilGrids response. Everything outside `properties` is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoilResponse {
    #[serde(default)]
    pub properties: SoilProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoilProperties {
    #[serde(default, deserialize_with = "lenient_layers")]
    pub layers: Vec<SoilLayer>,
}

/// One soil property layer, e.g. `clay` or `nitrogen`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoilLayer {
    pub name: String,
    #[serde(default)]
    pub depths: Vec<SoilDepth>,
}

impl SoilLayer {
    /// Mean value of the first reported depth band, when present.
    pub fn top_depth_mean(&self) -> Option<f64> {
        self.depths.first().and_then(|depth| depth.values.mean)
    }
}

/// A depth band inside a layer. Only one is requested per query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoilDepth {
    #[serde(default)]
    pub values: DepthValues,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DepthValues {
    pub mean: Option<f64>,
}

fn lenient_layers<'de, D>(deserializer: D) -> Result<Vec<SoilLayer>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// The four property values one soil query can yield, pulled out of the
/// layer list by name.
///
/// When the same property appears more than once, the last occurrence wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoilSample {
    pub nitrogen: Option<f64>, // cg/kg
    pub clay: Option<f64>,     // % of fine earth
    pub sand: Option<f64>,     // % of fine earth
    pub cec: Option<f64>,      // cmol(c)/kg
}

impl SoilSample {
    /// Extracts the known properties from a decoded response. Layers with an
    /// unrecognized name or without a usable mean are skipped.
    pub fn from_response(response: &SoilResponse) -> Self {
        let mut sample = Self::default();
        for layer in &response.properties.layers {
            let Some(value) = layer.top_depth_mean() else {
                continue;
            };
            match layer.name.as_str() {
                "nitrogen" => sample.nitrogen = Some(value),
                "clay" => sample.clay = Some(value),
                "sand" => sample.sand = Some(value),
                "cec" => sample.cec = Some(value),
                _ => {}
            }
        }
        sample
    }
}
