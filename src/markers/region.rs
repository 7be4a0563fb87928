use serde::{Deserialize, Serialize};

/// Visible map area: center plus latitude/longitude span
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewportRegion {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub latitude_delta: f64,

    #[serde(default)]
    pub longitude_delta: f64,
}

impl ViewportRegion {
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Center usable for proximity ranking. A region with a zero, negative or
    /// non-finite span (or a non-finite center) has none.
    pub fn ranking_center(&self) -> Option<(f64, f64)> {
        let finite = [
            self.latitude,
            self.longitude,
            self.latitude_delta,
            self.longitude_delta,
        ]
        .iter()
        .all(|v| v.is_finite());

        if finite && self.latitude_delta > 0.0 && self.longitude_delta > 0.0 {
            Some((self.latitude, self.longitude))
        } else {
            None
        }
    }
}

/// Planar distance in degrees; no geodesic correction
pub fn planar_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_center_requires_span() {
        assert_eq!(
            ViewportRegion::new(-12.0, -76.9, 0.01, 0.01).ranking_center(),
            Some((-12.0, -76.9))
        );
        assert_eq!(ViewportRegion::new(-12.0, -76.9, 0.0, 0.01).ranking_center(), None);
        assert_eq!(
            ViewportRegion::new(-12.0, -76.9, f64::NAN, 0.01).ranking_center(),
            None
        );
        assert_eq!(ViewportRegion::default().ranking_center(), None);
    }

    #[test]
    fn test_missing_deltas_deserialize_as_zero() {
        let region: ViewportRegion =
            serde_json::from_str(r#"{"latitude": -12.04, "longitude": -76.95}"#).unwrap();
        assert_eq!(region.latitude_delta, 0.0);
        assert_eq!(region.ranking_center(), None);
    }

    #[test]
    fn test_planar_distance() {
        assert_eq!(planar_distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    }
}
