//! Plain-data contracts supplied by the tracking subsystem: satellite
//! look-angle snapshots, precomputed passes, and observer locations.

use crate::pass::LookAngle;
use chrono::{DateTime, Utc};

/// Current look-angle state of one tracked object, refreshed externally.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub name: String,
    pub catalog_number: u32,
    pub azimuth: f64,
    pub elevation: f64,
    pub selected: bool,
    pub displaying: bool,
}

/// An externally computed trajectory with its rise and set times.
#[derive(Clone, Debug)]
pub struct PassData {
    pub pass: Vec<LookAngle>,
    pub rise_time: DateTime<Utc>,
    pub set_time: DateTime<Utc>,
}

/// A ground observer. Latitude/longitude in degrees.
#[derive(Clone, Debug)]
pub struct Observer {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

/// Great-circle initial bearing from one observer toward another,
/// degrees clockwise from north in `[0, 360)`.
pub fn initial_bearing_deg(from: &Observer, to: &Observer) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(lat: f64, lon: f64) -> Observer {
        Observer {
            lat,
            lon,
            name: String::new(),
        }
    }

    #[test]
    fn cardinal_bearings_on_equator() {
        let home = obs(0.0, 0.0);
        assert!((initial_bearing_deg(&home, &obs(10.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&home, &obs(0.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&home, &obs(-10.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_bearing_deg(&home, &obs(0.0, -10.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn london_to_paris_roughly_southeast() {
        let london = obs(51.5074, -0.1278);
        let paris = obs(48.8566, 2.3522);
        let b = initial_bearing_deg(&london, &paris);
        assert!(b > 140.0 && b < 160.0, "bearing {}", b);
    }
}
