//! Polar plot geometry and look-angle projection.
//!
//! Maps azimuth/elevation look angles onto the 2D sky plot and back.
//! The radius is linear in elevation angle (not its sine), which spreads
//! out the crowded low-elevation band near the rim.

use std::f64::consts::PI;

/// Truncate toward zero after adding 0.5. For the non-negative
/// magnitudes used here this is round-half-up.
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5) as i32
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn rounded(&self) -> (i32, i32) {
        (round_half_up(self.x), round_half_up(self.y))
    }
}

/// Pixel center and radius of the current plot frame. Derived once per
/// layout change and passed read-only into every projection call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlotGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PlotGeometry {
    /// Derive the plot frame from an available drawing area, leaving
    /// `margin` pixels free on the limiting side.
    pub fn from_area(width: f64, height: f64, margin: f64) -> Self {
        let size = width.min(height) - 2.0 * margin;
        Self {
            center_x: round_half_up(width / 2.0) as f64,
            center_y: round_half_up(height / 2.0) as f64,
            radius: round_half_up(size / 2.0).max(1) as f64,
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            radius: self.radius,
        }
    }
}

/// Project a look angle onto the plot. Azimuth 0° is north (straight up),
/// increasing clockwise; elevation 0° lands on the rim, 90° on the center.
///
/// Elevations below the horizon have no point on the plot and yield `None`.
pub fn azel_to_xy(az_deg: f64, el_deg: f64, geom: &PlotGeometry) -> Option<PixelPoint> {
    if el_deg < 0.0 {
        return None;
    }
    let az = az_deg.to_radians();
    let el = el_deg.to_radians();

    let r = geom.radius - (2.0 * geom.radius * el) / PI;

    Some(PixelPoint {
        x: geom.center_x + r * az.sin(),
        y: geom.center_y - r * az.cos(),
    })
}

/// Inverse projection, used for pointer feedback. Returns `(azimuth, elevation)`
/// in degrees, or `None` when the point lies outside the meaningful plot area.
pub fn xy_to_azel(x: f64, y: f64, geom: &PlotGeometry) -> Option<(f64, f64)> {
    let dx = x - geom.center_x;
    let dy = geom.center_y - y;
    let dist = (dx * dx + dy * dy).sqrt();

    let mut el = 90.0 * (geom.radius - dist) / geom.radius;
    if el < 0.0 && el > -1e-9 {
        // rounding in the forward projection can push a rim point a few
        // ulps outside the radius; snap it back to the horizon
        el = 0.0;
    }
    let mut az = dx.atan2(dy).to_degrees();
    if az < 0.0 {
        az += 360.0;
    }

    if el < 0.0 || az < 0.0 {
        None
    } else {
        Some((az, el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOM: PlotGeometry = PlotGeometry {
        center_x: 500.0,
        center_y: 300.0,
        radius: 240.0,
    };

    fn az_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn round_trip_within_one_degree() {
        for az in (0..360).step_by(15) {
            // azimuth is undefined at the zenith, stop short of 90°
            for el in (0..=85).step_by(5) {
                let p = azel_to_xy(az as f64, el as f64, &GEOM).unwrap();
                let (az2, el2) = xy_to_azel(p.x, p.y, &GEOM).unwrap();
                assert!(az_diff(az2, az as f64) <= 1.0, "az {} -> {}", az, az2);
                assert!((el2 - el as f64).abs() <= 1.0, "el {} -> {}", el, el2);
            }
        }
    }

    #[test]
    fn rejects_below_horizon() {
        assert_eq!(azel_to_xy(120.0, -0.001, &GEOM), None);
        assert_eq!(azel_to_xy(0.0, -45.0, &GEOM), None);
    }

    #[test]
    fn zenith_maps_to_center() {
        for az in [0.0, 90.0, 222.0] {
            let p = azel_to_xy(az, 90.0, &GEOM).unwrap();
            assert!((p.x - GEOM.center_x).abs() < 1e-9);
            assert!((p.y - GEOM.center_y).abs() < 1e-9);
        }
    }

    #[test]
    fn north_horizon_maps_to_top_of_rim() {
        let p = azel_to_xy(0.0, 0.0, &GEOM).unwrap();
        assert!((p.x - GEOM.center_x).abs() < 1e-9);
        assert!((p.y - (GEOM.center_y - GEOM.radius)).abs() < 1e-9);
    }

    #[test]
    fn east_is_clockwise_from_north() {
        let p = azel_to_xy(90.0, 0.0, &GEOM).unwrap();
        assert!((p.x - (GEOM.center_x + GEOM.radius)).abs() < 1e-9);
        assert!((p.y - GEOM.center_y).abs() < 1e-9);
    }

    #[test]
    fn pointer_outside_rim_is_invalid() {
        let outside = GEOM.center_x + GEOM.radius + 10.0;
        assert_eq!(xy_to_azel(outside, GEOM.center_y, &GEOM), None);
    }

    #[test]
    fn pointer_at_center_is_zenith() {
        let (az, el) = xy_to_azel(GEOM.center_x, GEOM.center_y, &GEOM).unwrap();
        assert_eq!(az, 0.0);
        assert_eq!(el, 90.0);
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn geometry_from_area() {
        let g = PlotGeometry::from_area(1000.0, 600.0, 40.0);
        assert_eq!(g.center_x, 500.0);
        assert_eq!(g.center_y, 300.0);
        assert_eq!(g.radius, 260.0);
    }
}
