//! Geographic coordinates projected onto the locality sphere
//!
//! Latitude/longitude pairs are mapped onto a fixed-radius sphere and rounded
//! to integer coordinates so the matching engine only ever sees fixed-point
//! values. Callers run this once when building a targeting vector or profile.

use crate::profile::LocationPoint;

/// Radius of the locality sphere; also the bound on each location coordinate
pub const SPHERE_RADIUS: i64 = 100;

/// Project a latitude/longitude pair (in degrees) onto the locality sphere
pub fn lat_lon_to_cartesian(lat_deg: f64, lon_deg: f64) -> LocationPoint {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let r = SPHERE_RADIUS as f64;

    LocationPoint {
        x: (r * lat.cos() * lon.cos()).round() as i64,
        y: (r * lat.cos() * lon.sin()).round() as i64,
        z: (r * lat.sin()).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_prime_meridian() {
        let p = lat_lon_to_cartesian(0.0, 0.0);
        assert_eq!(p, LocationPoint { x: 100, y: 0, z: 0 });
    }

    #[test]
    fn test_north_pole() {
        let p = lat_lon_to_cartesian(90.0, 0.0);
        assert_eq!(p, LocationPoint { x: 0, y: 0, z: 100 });
    }

    #[test]
    fn test_equator_90_east() {
        let p = lat_lon_to_cartesian(0.0, 90.0);
        assert_eq!(p, LocationPoint { x: 0, y: 100, z: 0 });
    }

    #[test]
    fn test_projection_stays_within_bounds() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(15) {
                let p = lat_lon_to_cartesian(f64::from(lat), f64::from(lon));
                assert!(p.x.abs() <= SPHERE_RADIUS);
                assert!(p.y.abs() <= SPHERE_RADIUS);
                assert!(p.z.abs() <= SPHERE_RADIUS);
            }
        }
    }
}
