//! Sampling lattices over geographic bounding boxes.

/// A geographic coordinate: `(latitude, longitude)` in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Rectangular region from which grid points are drawn. Both edges are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_start: f64,
    pub lat_stop: f64,
    pub lon_start: f64,
    pub lon_stop: f64,
}

/// The agricultural belt of Northern Algeria, from the Atlantic-facing
/// west to the Tunisian border.
pub const NORTHERN_ALGERIA: BoundingBox = BoundingBox {
    lat_start: 32.0,
    lat_stop: 37.5,
    lon_start: -8.7,
    lon_stop: 12.0,
};

/// A regular lattice of sampling points: a bounding box plus the number of
/// evenly spaced steps along each axis.
///
/// The default covers [`NORTHERN_ALGERIA`] with an 8x8 lattice.
///
/// # Example
///
/// ```
/// use cropgrid::GridSpec;
///
/// let points = GridSpec::default().lattice();
/// assert_eq!(points.len(), 64);
/// assert_eq!(points[0].0, 32.0);
/// assert_eq!(points[63].1, 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub bounds: BoundingBox,
    pub lat_steps: usize,
    pub lon_steps: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            bounds: NORTHERN_ALGERIA,
            lat_steps: 8,
            lon_steps: 8,
        }
    }
}

impl GridSpec {
    /// Number of points the lattice yields.
    pub fn len(&self) -> usize {
        self.lat_steps * self.lon_steps
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the lattice in row-major order: the latitude axis is
    /// the outer loop, so all longitudes of the first latitude come first.
    pub fn lattice(&self) -> Vec<LatLon> {
        let lats = linspace(self.bounds.lat_start, self.bounds.lat_stop, self.lat_steps);
        let lons = linspace(self.bounds.lon_start, self.bounds.lon_stop, self.lon_steps);
        let mut points = Vec::with_capacity(lats.len() * lons.len());
        for &lat in &lats {
            for &lon in &lons {
                points.push(LatLon(lat, lon));
            }
        }
        points
    }
}

/// `num` evenly spaced values from `start` to `stop`, endpoints included.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            // Accumulated rounding must not move the final edge off `stop`.
            values[num - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_spans_both_endpoints() {
        let values = linspace(32.0, 37.5, 8);
        assert_eq!(values.len(), 8);
        assert_eq!(values[0], 32.0);
        assert_eq!(values[7], 37.5);
        let spacing = values[1] - values[0];
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - spacing).abs() < 1e-9);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn lattice_is_row_major() {
        let spec = GridSpec {
            bounds: BoundingBox {
                lat_start: 0.0,
                lat_stop: 1.0,
                lon_start: 10.0,
                lon_stop: 11.0,
            },
            lat_steps: 2,
            lon_steps: 2,
        };
        let points = spec.lattice();
        assert_eq!(
            points,
            vec![
                LatLon(0.0, 10.0),
                LatLon(0.0, 11.0),
                LatLon(1.0, 10.0),
                LatLon(1.0, 11.0),
            ]
        );
    }

    #[test]
    fn default_spec_covers_northern_algeria() {
        let spec = GridSpec::default();
        assert_eq!(spec.len(), 64);
        let points = spec.lattice();
        assert_eq!(points.first(), Some(&LatLon(32.0, -8.7)));
        assert_eq!(points.last(), Some(&LatLon(37.5, 12.0)));
    }
}
