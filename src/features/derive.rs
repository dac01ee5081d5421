//! Pure derivations from raw upstream values to feature columns.

use crate::types::record::SoilType;

/// Volumetric moisture written to every record. No upstream source carries
/// this yet; the column is kept so the output schema stays stable.
pub const MOISTURE_PLACEHOLDER: f64 = 0.2;

/// Phosphorus is estimated as a fixed fraction of the nitrogen reading.
pub const PHOSPHORUS_PER_NITROGEN: f64 = 0.4;

/// Potassium is estimated as a fixed fraction of cation exchange capacity.
pub const POTASSIUM_PER_CEC: f64 = 0.5;

/// Mean over the present entries of a series.
///
/// Missing entries are ignored rather than counted; a series with no
/// present entries (including an empty one) yields `f64::NAN`.
///
/// # Examples
///
/// ```
/// use cropgrid::nan_mean;
///
/// assert_eq!(nan_mean(&[Some(20.0), None, Some(24.0)]), 22.0);
/// assert!(nan_mean(&[None, None]).is_nan());
/// assert!(nan_mean(&[]).is_nan());
/// ```
pub fn nan_mean(series: &[Option<f64>]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in series.iter().flatten() {
        sum += value;
        count += 1;
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Classifies soil texture from clay and sand percentages.
///
/// The checks run in order and the first match wins:
///
/// 1. both fractions missing yields [`SoilType::Unknown`];
/// 2. clay above 40% yields [`SoilType::Clayey`];
/// 3. sand above 70% yields [`SoilType::Sandy`];
/// 4. clay between 20% and 40% inclusive yields [`SoilType::Loamy`];
/// 5. anything else yields [`SoilType::Red`].
///
/// A missing fraction fails every threshold it appears in, so a point with
/// only `sand = 80` still classifies as [`SoilType::Sandy`].
///
/// # Examples
///
/// ```
/// use cropgrid::{derive_soil_type, SoilType};
///
/// assert_eq!(derive_soil_type(Some(45.0), Some(30.0)), SoilType::Clayey);
/// assert_eq!(derive_soil_type(None, Some(80.0)), SoilType::Sandy);
/// assert_eq!(derive_soil_type(None, None), SoilType::Unknown);
/// ```
pub fn derive_soil_type(clay: Option<f64>, sand: Option<f64>) -> SoilType {
    if clay.is_none() && sand.is_none() {
        SoilType::Unknown
    } else if clay.is_some_and(|c| c > 40.0) {
        SoilType::Clayey
    } else if sand.is_some_and(|s| s > 70.0) {
        SoilType::Sandy
    } else if clay.is_some_and(|c| (20.0..=40.0).contains(&c)) {
        SoilType::Loamy
    } else {
        SoilType::Red
    }
}
