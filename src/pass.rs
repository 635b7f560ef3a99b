//! Pass segmentation: walks an ordered trajectory of look-angle samples and
//! splits it into pre-visible, visible, and post-visible polylines with the
//! rise, set, and peak-elevation samples needed for annotation.

use crate::polar::{azel_to_xy, PixelPoint, PlotGeometry};
use chrono::{DateTime, Utc};

/// One look-angle sample of a pass. Azimuth in `[0, 360)` degrees,
/// elevation in `(-90, 90]` degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LookAngle {
    pub azimuth: f64,
    pub elevation: f64,
    pub time: DateTime<Utc>,
}

/// Scan phase. Transitions:
///
/// - `BeforeRise` → `Visible` on the first sample at or above the threshold
///   (rise recorded, boundary point shared with the pre-visible polyline)
/// - `Visible` → `AfterSet` on the first sample back below the threshold
///   (set recorded, post-visible polyline seeded with the last visible point)
/// - once past `BeforeRise`, a sample below the horizon stops the scan:
///   only the first visible excursion is segmented.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    BeforeRise,
    Visible,
    AfterSet,
}

/// Output of one segmentation call. Built fresh per invocation.
#[derive(Clone, Debug, Default)]
pub struct SegmentResult {
    pub pre_visible: Vec<PixelPoint>,
    pub visible: Vec<PixelPoint>,
    pub post_visible: Vec<PixelPoint>,
    pub rise: Option<LookAngle>,
    pub set: Option<LookAngle>,
    pub peak: Option<LookAngle>,
    pub peak_predecessor: Option<LookAngle>,
}

impl SegmentResult {
    /// An empty visible polyline is the signal "not currently visible".
    pub fn has_visible(&self) -> bool {
        !self.visible.is_empty()
    }
}

/// Segment a pass against a visibility threshold.
///
/// Single left-to-right scan, no backtracking. Samples below the horizon
/// before rise are skipped (they have no projection); samples between the
/// horizon and the threshold build the pre- and post-visible context lines.
/// The peak is tracked across the whole scanned prefix with a
/// strictly-greater comparison, so the earliest of equal-elevation samples
/// wins. An empty pass yields the empty result; sample ordering is the
/// caller's contract and is not validated.
pub fn segment_pass(pass: &[LookAngle], threshold_deg: f64, geom: &PlotGeometry) -> SegmentResult {
    let mut out = SegmentResult::default();
    let mut phase = Phase::BeforeRise;
    let mut prev: Option<LookAngle> = None;

    for sample in pass {
        if sample.elevation >= threshold_deg {
            if let Some(pos) = azel_to_xy(sample.azimuth, sample.elevation, geom) {
                if out.visible.is_empty() {
                    // share the rise point so the pre and visible lines join
                    out.pre_visible.push(pos);
                    out.rise = Some(*sample);
                    phase = Phase::Visible;
                }
                out.visible.push(pos);
            }
        } else {
            match phase {
                Phase::BeforeRise => {
                    if let Some(pos) = azel_to_xy(sample.azimuth, sample.elevation, geom) {
                        out.pre_visible.push(pos);
                    }
                }
                Phase::Visible | Phase::AfterSet => {
                    if phase == Phase::Visible {
                        out.set = Some(*sample);
                        phase = Phase::AfterSet;
                    }
                    if let Some(pos) = azel_to_xy(sample.azimuth, sample.elevation, geom) {
                        if out.post_visible.is_empty() {
                            if let Some(last) = out.visible.last() {
                                out.post_visible.push(*last);
                            }
                        }
                        out.post_visible.push(pos);
                    }
                }
            }
        }

        match out.peak {
            Some(p) if sample.elevation <= p.elevation => {}
            _ => {
                out.peak = Some(*sample);
                out.peak_predecessor = prev;
            }
        }

        if phase != Phase::BeforeRise && sample.elevation < 0.0 {
            break;
        }
        prev = Some(*sample);
    }

    out
}
