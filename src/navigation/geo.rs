const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (lat, lng) points
pub fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let d_lat = (to.0 - from.0).to_radians();
    let d_lng = (to.1 - from.1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.0.to_radians().cos() * to.0.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial bearing in degrees clockwise from north, in [0, 360)
pub fn bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    let lat1 = from.0.to_radians();
    let lat2 = to.0.to_radians();
    let d_lng = (to.1 - from.1).to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

pub fn compass_point(bearing: f64) -> &'static str {
    const POINTS: [&str; 8] = [
        "north",
        "north-east",
        "east",
        "south-east",
        "south",
        "south-west",
        "west",
        "north-west",
    ];
    let sector = ((bearing.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    POINTS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_one_degree_latitude() {
        let d = haversine_m((0.0, 0.0), (1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "got {}", d);
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_m((-12.044, -76.9527), (-12.044, -76.9527)), 0.0);
    }

    #[test]
    fn test_bearing_and_compass() {
        let origin = (-12.0440, -76.9527);
        assert_eq!(compass_point(bearing_deg(origin, (-12.0430, -76.9527))), "north");
        assert_eq!(compass_point(bearing_deg(origin, (-12.0440, -76.9517))), "east");
        assert_eq!(compass_point(bearing_deg(origin, (-12.0450, -76.9537))), "south-west");
        assert_eq!(compass_point(359.0), "north");
    }
}
