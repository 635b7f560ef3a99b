//! Demo scenario: synthetic satellites and passes so the plot runs without
//! an orbit propagator feeding it.

use crate::pass::LookAngle;
use crate::track::{Observer, PassData, Satellite};
use crate::App;
use chrono::{DateTime, Duration, Utc};

/// Smooth synthetic pass: elevation follows a sine bump from -10° up to
/// `max_el` and back, azimuth sweeps linearly between the given bearings.
pub(crate) fn synth_pass(
    start_az: f64,
    end_az: f64,
    max_el: f64,
    start: DateTime<Utc>,
    duration_secs: i64,
    steps: usize,
) -> Vec<LookAngle> {
    (0..=steps)
        .map(|i| {
            let f = i as f64 / steps as f64;
            let elevation = -10.0 + (max_el + 10.0) * (std::f64::consts::PI * f).sin();
            let azimuth = (start_az + (end_az - start_az) * f).rem_euclid(360.0);
            LookAngle {
                azimuth,
                elevation,
                time: start + Duration::seconds((duration_secs as f64 * f) as i64),
            }
        })
        .collect()
}

/// Rise/set times of a synthetic pass against a threshold, for the pass
/// metadata an external predictor would normally supply.
fn threshold_crossings(
    pass: &[LookAngle],
    threshold_deg: f64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let rise = pass
        .iter()
        .find(|s| s.elevation >= threshold_deg)
        .map(|s| s.time);
    let set = pass
        .iter()
        .rev()
        .find(|s| s.elevation >= threshold_deg)
        .map(|s| s.time);
    let fallback = pass.first().map(|s| s.time).unwrap_or_else(Utc::now);
    (rise.unwrap_or(fallback), set.unwrap_or(fallback))
}

impl App {
    pub(crate) fn setup_demo(&mut self) {
        let now = Utc::now();
        let threshold = self.settings.visibility_threshold_deg;

        self.home = Observer {
            lat: 52.2053,
            lon: 0.1218,
            name: "Home".to_string(),
        };
        self.mutual = Observer {
            lat: 48.8566,
            lon: 2.3522,
            name: "Paris".to_string(),
        };

        self.satellites.clear();
        self.passes.clear();

        // mid-pass, currently overhead
        let iss = synth_pass(215.0, 70.0, 78.0, now - Duration::seconds(300), 600, 60);
        let live = iss[30];
        self.add_demo_sat("ISS (ZARYA)", 25544, live.azimuth, live.elevation, true, iss, threshold);

        // upcoming pass, still below the threshold
        let noaa = synth_pass(350.0, 160.0, 42.0, now + Duration::seconds(900), 780, 60);
        self.add_demo_sat("NOAA 19", 33591, 12.0, 4.0, true, noaa, threshold);

        // low pass, currently below the horizon
        let fox = synth_pass(120.0, 200.0, 24.0, now + Duration::seconds(2400), 540, 45);
        self.add_demo_sat("AO-91", 43017, 230.0, -12.0, true, fox, threshold);

        // tracked but hidden from the plot
        let meteor = synth_pass(20.0, 140.0, 55.0, now + Duration::seconds(4000), 700, 60);
        self.add_demo_sat("METEOR-M2", 40069, 310.0, -30.0, false, meteor, threshold);

        self.satellites[0].selected = true;
        log::info!("demo scenario loaded: {} satellites", self.satellites.len());
    }

    fn add_demo_sat(
        &mut self,
        name: &str,
        catalog_number: u32,
        azimuth: f64,
        elevation: f64,
        displaying: bool,
        pass: Vec<LookAngle>,
        threshold_deg: f64,
    ) {
        let (rise_time, set_time) = threshold_crossings(&pass, threshold_deg);
        self.passes.insert(
            catalog_number,
            PassData {
                pass,
                rise_time,
                set_time,
            },
        );
        self.satellites.push(Satellite {
            name: name.to_string(),
            catalog_number,
            azimuth,
            elevation,
            selected: false,
            displaying,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_pass_is_unimodal_and_time_ordered() {
        let pass = synth_pass(200.0, 340.0, 60.0, Utc::now(), 600, 50);
        assert_eq!(pass.len(), 51);
        assert!(pass.windows(2).all(|w| w[0].time <= w[1].time));

        let peak = pass
            .iter()
            .map(|s| s.elevation)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - 60.0).abs() < 1.0);
        assert!(pass.first().unwrap().elevation < 0.0);
        assert!(pass.last().unwrap().elevation < 0.0);
    }

    #[test]
    fn crossings_bracket_the_visible_stretch() {
        let pass = synth_pass(0.0, 180.0, 45.0, Utc::now(), 600, 60);
        let (rise, set) = threshold_crossings(&pass, 10.0);
        assert!(rise < set);
    }
}
