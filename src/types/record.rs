//! The flat per-point feature row produced by the pipeline.

use std::fmt;

/// Soil texture classes derived from clay and sand percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    /// Clay fraction above 40%.
    Clayey,
    /// Sand fraction above 70%.
    Sandy,
    /// Clay fraction between 20% and 40% inclusive.
    Loamy,
    /// Composition known but matching none of the other classes. Common for
    /// the iron-rich soils of the Maghreb.
    Red,
    /// Neither clay nor sand composition was available.
    Unknown,
}

impl SoilType {
    /// The label used in persisted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clayey => "Clayey",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Unknown => "Unknown",
        }
    }
}

/// Formats a `SoilType` using its output label.
///
/// # Examples
///
/// ```
/// use cropgrid::SoilType;
///
/// assert_eq!(format!("{}", SoilType::Clayey), "Clayey");
/// assert_eq!(SoilType::Unknown.to_string(), "Unknown");
/// ```
impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fully aggregated sample for a single grid point.
///
/// Numeric fields use `f64::NAN` as the missing-value sentinel so that a
/// record always carries every column, however degraded the upstream
/// responses were. Use [`f64::is_nan`] to test for absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    /// Mean daily maximum temperature over the forecast window, in celsius.
    pub temperature: f64,
    /// Mean daily maximum relative humidity over the forecast window, in percent.
    pub humidity: f64,
    /// Volumetric soil moisture. Currently a fixed placeholder value, kept so
    /// the output schema stays stable for downstream consumers.
    pub moisture: f64,
    /// Texture class derived from the clay and sand fractions.
    pub soil_type: SoilType,
    /// Topsoil nitrogen content as reported upstream.
    pub nitrogen: f64,
    /// Phosphorus estimate, scaled from nitrogen.
    pub phosphorus: f64,
    /// Potassium estimate, scaled from cation exchange capacity.
    pub potassium: f64,
    /// Latitude of the sampled point, in decimal degrees.
    pub latitude: f64,
    /// Longitude of the sampled point, in decimal degrees.
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_labels_match_output_schema() {
        let labels: Vec<&str> = [
            SoilType::Clayey,
            SoilType::Sandy,
            SoilType::Loamy,
            SoilType::Red,
            SoilType::Unknown,
        ]
        .iter()
        .map(SoilType::as_str)
        .collect();
        assert_eq!(labels, vec!["Clayey", "Sandy", "Loamy", "Red", "Unknown"]);
    }
}
