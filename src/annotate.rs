//! Draw directives for the polar plot: direction arrows, markers, and
//! labels derived from a segmented pass. The engine only emits directive
//! data; `drawing` turns it into painter calls.

use crate::config::PolarColors;
use crate::pass::SegmentResult;
use crate::polar::{azel_to_xy, PixelPoint, PlotGeometry};
use eframe::egui;
use std::f64::consts::FRAC_PI_6;

pub const ARROW_HEAD_LEN: f64 = 10.0;
pub const LABEL_OFFSET: f64 = 5.0;
pub const PEAK_MARKER_RADIUS: f64 = 2.0;
pub const OBSERVER_MARKER_RADIUS: f64 = 5.0;
pub const SAT_ICON_SIZE: f64 = 16.0;

/// One drawing instruction for the rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Polyline {
        points: Vec<PixelPoint>,
        color: egui::Color32,
        width: f32,
    },
    Circle {
        center: PixelPoint,
        radius: f64,
        color: egui::Color32,
        filled: bool,
    },
    Text {
        pos: PixelPoint,
        text: String,
        color: egui::Color32,
        size: f32,
        strong: bool,
    },
    Image {
        center: PixelPoint,
        icon: String,
        size: f64,
    },
}

/// Travel-direction arrow along a track segment. The head is two short
/// strokes at ±30° off the shaft, fixed length regardless of shaft length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionArrow {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub color: egui::Color32,
}

impl DirectionArrow {
    /// Arrow along the last two points of a polyline.
    pub fn from_segment(points: &[PixelPoint], color: egui::Color32) -> Option<Self> {
        let n = points.len();
        if n < 2 {
            return None;
        }
        Some(Self {
            from: points[n - 2],
            to: points[n - 1],
            color,
        })
    }

    /// The two head stroke endpoints, trailing behind the tip.
    pub fn head(&self) -> [PixelPoint; 2] {
        let angle = (self.to.y - self.from.y).atan2(self.to.x - self.from.x);
        let barb = |a: f64| PixelPoint {
            x: self.to.x - ARROW_HEAD_LEN * a.cos(),
            y: self.to.y - ARROW_HEAD_LEN * a.sin(),
        };
        [barb(angle - FRAC_PI_6), barb(angle + FRAC_PI_6)]
    }

    /// Shaft and head as one polyline directive, retracing through the tip.
    pub fn to_directive(&self) -> Directive {
        let [h1, h2] = self.head();
        Directive::Polyline {
            points: vec![self.from, self.to, h1, self.to, h2],
            color: self.color,
            width: 1.0,
        }
    }
}

/// Build the draw directives for one segmented pass.
///
/// `rise_label`/`set_label` are caller-formatted timestamps, opaque here.
/// `currently_visible` suppresses the name-at-peak label when the satellite
/// already has a live marker on the plot.
pub fn annotate_pass(
    seg: &SegmentResult,
    name: &str,
    rise_label: Option<&str>,
    set_label: Option<&str>,
    currently_visible: bool,
    geom: &PlotGeometry,
    colors: &PolarColors,
) -> Vec<Directive> {
    let mut out = Vec::new();

    if !seg.pre_visible.is_empty() {
        out.push(Directive::Polyline {
            points: seg.pre_visible.clone(),
            color: colors.pre_track,
            width: 1.0,
        });
    }
    if !seg.visible.is_empty() {
        out.push(Directive::Polyline {
            points: seg.visible.clone(),
            color: colors.visible_track,
            width: 2.0,
        });
    }
    if !seg.post_visible.is_empty() {
        out.push(Directive::Polyline {
            points: seg.post_visible.clone(),
            color: colors.post_track,
            width: 1.0,
        });
    }

    if seg.rise.is_some() {
        if let Some(arrow) = DirectionArrow::from_segment(&seg.pre_visible, colors.pre_track) {
            out.push(arrow.to_directive());
        }
    }
    if seg.post_visible.len() >= 2 {
        let arrow = DirectionArrow {
            from: seg.post_visible[0],
            to: seg.post_visible[1],
            color: colors.visible_track,
        };
        out.push(arrow.to_directive());
    }

    let peak_pos = seg
        .peak
        .and_then(|p| azel_to_xy(p.azimuth, p.elevation, geom));

    if let Some(pred) = seg.peak_predecessor {
        let pred_pos = azel_to_xy(pred.azimuth, pred.elevation, geom);
        if let (Some(from), Some(to)) = (pred_pos, peak_pos) {
            out.push(
                DirectionArrow {
                    from,
                    to,
                    color: colors.visible_track,
                }
                .to_directive(),
            );
        }
    }

    if let (Some(peak), Some(pos)) = (seg.peak, peak_pos) {
        if peak.elevation > 0.0 {
            out.push(Directive::Circle {
                center: pos,
                radius: PEAK_MARKER_RADIUS,
                color: colors.marker,
                filled: true,
            });
        }
    }

    if let (Some(label), Some(pos)) = (rise_label, seg.visible.first()) {
        out.push(Directive::Text {
            pos: PixelPoint {
                x: pos.x + LABEL_OFFSET,
                y: pos.y + LABEL_OFFSET,
            },
            text: format!("AoS: {}", label),
            color: colors.label,
            size: 8.0,
            strong: false,
        });
    }
    if let (Some(label), Some(pos)) = (set_label, seg.post_visible.first()) {
        out.push(Directive::Text {
            pos: PixelPoint {
                x: pos.x + LABEL_OFFSET,
                y: pos.y + LABEL_OFFSET,
            },
            text: format!("LoS: {}", label),
            color: colors.label,
            size: 8.0,
            strong: false,
        });
    }

    if !currently_visible && seg.rise.is_some() {
        if let Some(pos) = peak_pos {
            out.push(Directive::Text {
                pos: PixelPoint {
                    x: pos.x + LABEL_OFFSET,
                    y: pos.y + LABEL_OFFSET,
                },
                text: name.to_string(),
                color: colors.label,
                size: 8.0,
                strong: false,
            });
        }
    }

    out
}

/// Icon and name label for a satellite currently above the horizon.
pub fn satellite_marker(
    name: &str,
    az_deg: f64,
    el_deg: f64,
    selected: bool,
    geom: &PlotGeometry,
    colors: &PolarColors,
) -> Vec<Directive> {
    let Some(pos) = azel_to_xy(az_deg, el_deg, geom) else {
        return Vec::new();
    };
    vec![
        Directive::Text {
            pos: PixelPoint {
                x: pos.x - SAT_ICON_SIZE / 2.0,
                y: pos.y - 20.0,
            },
            text: name.to_string(),
            color: colors.label,
            size: 10.0,
            strong: selected,
        },
        Directive::Image {
            center: pos,
            icon: "satellite".to_string(),
            size: SAT_ICON_SIZE,
        },
    ]
}

/// Rim marker for a second observer at the given bearing from the home
/// observer, drawn at elevation 0.
pub fn observer_marker(
    bearing_deg: f64,
    name: &str,
    geom: &PlotGeometry,
    colors: &PolarColors,
) -> Vec<Directive> {
    let Some(pos) = azel_to_xy(bearing_deg, 0.0, geom) else {
        return Vec::new();
    };
    vec![
        Directive::Circle {
            center: pos,
            radius: OBSERVER_MARKER_RADIUS,
            color: colors.marker,
            filled: false,
        },
        Directive::Text {
            pos,
            text: name.to_string(),
            color: colors.label,
            size: 10.0,
            strong: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{segment_pass, LookAngle};
    use chrono::{TimeZone, Utc};

    const GEOM: PlotGeometry = PlotGeometry {
        center_x: 500.0,
        center_y: 300.0,
        radius: 240.0,
    };

    fn la(az: f64, el: f64, secs: i64) -> LookAngle {
        LookAngle {
            azimuth: az,
            elevation: el,
            time: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        }
    }

    #[test]
    fn arrow_needs_two_points() {
        let p = PixelPoint { x: 1.0, y: 2.0 };
        assert!(DirectionArrow::from_segment(&[], egui::Color32::RED).is_none());
        assert!(DirectionArrow::from_segment(&[p], egui::Color32::RED).is_none());
        assert!(DirectionArrow::from_segment(&[p, p], egui::Color32::RED).is_some());
    }

    #[test]
    fn arrow_head_geometry_on_horizontal_shaft() {
        // pointing due +x: barbs trail behind the tip, symmetric about y
        let arrow = DirectionArrow {
            from: PixelPoint { x: 0.0, y: 0.0 },
            to: PixelPoint { x: 100.0, y: 0.0 },
            color: egui::Color32::RED,
        };
        let [h1, h2] = arrow.head();
        let expected_x = 100.0 - ARROW_HEAD_LEN * FRAC_PI_6.cos();
        let expected_y = ARROW_HEAD_LEN * FRAC_PI_6.sin();
        assert!((h1.x - expected_x).abs() < 1e-9);
        assert!((h2.x - expected_x).abs() < 1e-9);
        assert!((h1.y + expected_y).abs() < 1e-9);
        assert!((h2.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn arrow_directive_retraces_tip() {
        let arrow = DirectionArrow {
            from: PixelPoint { x: 0.0, y: 0.0 },
            to: PixelPoint { x: 10.0, y: 10.0 },
            color: egui::Color32::GREEN,
        };
        let Directive::Polyline { points, .. } = arrow.to_directive() else {
            panic!("expected polyline");
        };
        assert_eq!(points.len(), 5);
        assert_eq!(points[1], arrow.to);
        assert_eq!(points[3], arrow.to);
    }

    #[test]
    fn full_pass_annotation() {
        let pass: Vec<LookAngle> = [2.0, 8.0, 20.0, 45.0, 20.0, 8.0, 2.0]
            .iter()
            .enumerate()
            .map(|(i, &el)| la(40.0 + 12.0 * i as f64, el, 30 * i as i64))
            .collect();
        let seg = segment_pass(&pass, 10.0, &GEOM);
        let colors = PolarColors::default();
        let out = annotate_pass(
            &seg,
            "DEMO-1",
            Some("01/02 10:30:00"),
            Some("01/02 10:36:00"),
            false,
            &GEOM,
            &colors,
        );

        let polylines = out
            .iter()
            .filter(|d| matches!(d, Directive::Polyline { .. }))
            .count();
        // pre/visible/post tracks plus start, set, and peak arrows
        assert_eq!(polylines, 6);

        let texts: Vec<&Directive> = out
            .iter()
            .filter(|d| matches!(d, Directive::Text { .. }))
            .collect();
        // AoS, LoS, and name-at-peak
        assert_eq!(texts.len(), 3);

        // peak above the horizon gets its marker
        assert!(out
            .iter()
            .any(|d| matches!(d, Directive::Circle { filled: true, .. })));
    }

    #[test]
    fn no_peak_marker_below_horizon() {
        let pass = vec![la(10.0, -30.0, 0), la(20.0, -12.0, 30), la(30.0, -25.0, 60)];
        let seg = segment_pass(&pass, 10.0, &GEOM);
        let colors = PolarColors::default();
        let out = annotate_pass(&seg, "DEMO-2", None, None, false, &GEOM, &colors);
        assert!(!out
            .iter()
            .any(|d| matches!(d, Directive::Circle { .. })));
    }

    #[test]
    fn marker_skipped_below_horizon() {
        let colors = PolarColors::default();
        assert!(satellite_marker("X", 120.0, -5.0, false, &GEOM, &colors).is_empty());
        assert_eq!(
            satellite_marker("X", 120.0, 5.0, false, &GEOM, &colors).len(),
            2
        );
    }

    #[test]
    fn observer_marker_sits_on_rim() {
        let colors = PolarColors::default();
        let out = observer_marker(90.0, "remote", &GEOM, &colors);
        let Directive::Circle { center, .. } = &out[0] else {
            panic!("expected circle");
        };
        assert!((center.x - (GEOM.center_x + GEOM.radius)).abs() < 1e-9);
        assert!((center.y - GEOM.center_y).abs() < 1e-9);
    }
}
