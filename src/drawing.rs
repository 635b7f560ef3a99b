//! egui rendering of the polar plot: background grid, directive playback,
//! and the mouse-position readout. Everything here consumes engine output;
//! no plot geometry is computed in this module.

use crate::annotate::Directive;
use crate::config::PolarColors;
use crate::polar::{round_half_up, PixelPoint, PlotGeometry};
use eframe::egui;
use std::collections::HashMap;

pub fn to_pos2(p: PixelPoint) -> egui::Pos2 {
    let (x, y) = p.rounded();
    egui::pos2(x as f32, y as f32)
}

fn center(geom: &PlotGeometry) -> egui::Pos2 {
    egui::pos2(geom.center_x as f32, geom.center_y as f32)
}

/// Bordered plot circle, elevation rings every 15° with degree labels,
/// azimuth tick marks every 5° with alternating lengths, diameter lines,
/// and the cardinal labels.
pub fn draw_background(
    painter: &egui::Painter,
    geom: &PlotGeometry,
    margin: f64,
    colors: &PolarColors,
) {
    let c = center(geom);
    let radius = geom.radius as f32;
    let half_margin = round_half_up(margin / 2.0) as f32;

    painter.circle(
        c,
        radius + half_margin,
        colors.background,
        egui::Stroke::new(10.0, colors.border),
    );
    painter.circle_filled(c, radius, colors.sky);

    for i in (15..90).step_by(15) {
        let r = round_half_up(geom.radius * f64::from(i) / 90.0) as f32;
        painter.circle_stroke(c, r, egui::Stroke::new(1.0, colors.grid));
    }

    let label_font = egui::FontId::proportional(10.0);
    for i in (15..90).step_by(15) {
        let r = round_half_up(geom.radius * f64::from(i) / 90.0) as f32;
        let text = format!("{}°", 90 - i);
        for x in [c.x - r - 7.0, c.x + r - 7.0] {
            painter.text(
                egui::pos2(x, c.y + 5.0),
                egui::Align2::LEFT_TOP,
                &text,
                label_font.clone(),
                colors.degree_labels,
            );
        }
    }

    // 5° ticks around the rim, every other one longer
    let mut long = false;
    for i in (0..360).step_by(5) {
        let rad = f64::from(i).to_radians();
        let len = if long { 10.0 } else { 15.0 };
        long = !long;
        let outer = geom.radius + 15.0;
        let inner = outer - len;
        let a = egui::pos2(
            round_half_up(geom.center_x + inner * rad.cos()) as f32,
            round_half_up(geom.center_y + inner * rad.sin()) as f32,
        );
        let b = egui::pos2(
            round_half_up(geom.center_x + outer * rad.cos()) as f32,
            round_half_up(geom.center_y + outer * rad.sin()) as f32,
        );
        painter.line_segment([a, b], egui::Stroke::new(1.0, colors.grid));
    }

    let reach = radius + half_margin - 5.0;
    painter.line_segment(
        [egui::pos2(c.x - reach, c.y), egui::pos2(c.x + reach, c.y)],
        egui::Stroke::new(1.0, colors.grid),
    );
    painter.line_segment(
        [egui::pos2(c.x, c.y - reach), egui::pos2(c.x, c.y + reach)],
        egui::Stroke::new(1.0, colors.grid),
    );

    let cardinal_font = egui::FontId::proportional(15.0);
    let cardinal_reach = radius + half_margin + 8.0;
    for (label, pos) in [
        ("N", egui::pos2(c.x, c.y - cardinal_reach)),
        ("E", egui::pos2(c.x + cardinal_reach, c.y)),
        ("S", egui::pos2(c.x, c.y + cardinal_reach)),
        ("W", egui::pos2(c.x - cardinal_reach, c.y)),
    ] {
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            label,
            cardinal_font.clone(),
            colors.text,
        );
    }
}

/// Replay engine directives onto the painter. Image directives fall back
/// to a plain dot when no texture is registered for their icon id.
pub fn draw_directives(
    painter: &egui::Painter,
    directives: &[Directive],
    icons: &HashMap<String, egui::TextureHandle>,
) {
    for directive in directives {
        match directive {
            Directive::Polyline {
                points,
                color,
                width,
            } => {
                let pts: Vec<egui::Pos2> = points.iter().map(|p| to_pos2(*p)).collect();
                painter.add(egui::Shape::line(pts, egui::Stroke::new(*width, *color)));
            }
            Directive::Circle {
                center,
                radius,
                color,
                filled,
            } => {
                let pos = to_pos2(*center);
                if *filled {
                    painter.circle_filled(pos, *radius as f32, *color);
                } else {
                    painter.circle_stroke(pos, *radius as f32, egui::Stroke::new(1.0, *color));
                }
            }
            Directive::Text {
                pos,
                text,
                color,
                size,
                strong,
            } => {
                let color = if *strong { egui::Color32::WHITE } else { *color };
                painter.text(
                    to_pos2(*pos),
                    egui::Align2::LEFT_TOP,
                    text,
                    egui::FontId::proportional(*size),
                    color,
                );
            }
            Directive::Image { center, icon, size } => {
                let pos = to_pos2(*center);
                let half = (*size / 2.0) as f32;
                if let Some(tex) = icons.get(icon) {
                    let rect = egui::Rect::from_center_size(pos, egui::vec2(half * 2.0, half * 2.0));
                    painter.image(
                        tex.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                } else {
                    painter.circle_filled(pos, half / 2.0, egui::Color32::LIGHT_GRAY);
                }
            }
        }
    }
}

/// Pointer feedback block in the top-left corner. Shows N/A when the
/// pointer has no valid look angle.
pub fn draw_mouse_readout(
    painter: &egui::Painter,
    anchor: egui::Pos2,
    look: Option<(f64, f64)>,
    colors: &PolarColors,
) {
    let font = egui::FontId::proportional(14.0);
    let (az, el) = match look {
        Some((az, el)) => (format!("{:.0}", az), format!("{:.0}", el)),
        None => ("N/A".to_string(), "N/A".to_string()),
    };
    for (dy, line) in [
        (0.0, "Mouse Position".to_string()),
        (25.0, format!("Azimuth: {}", az)),
        (45.0, format!("Elevation: {}", el)),
    ] {
        painter.text(
            egui::pos2(anchor.x, anchor.y + dy),
            egui::Align2::LEFT_TOP,
            line,
            font.clone(),
            colors.text,
        );
    }
}

/// Tiny generated satellite glyph: a body with a solar panel on each side.
pub fn satellite_icon_image() -> egui::ColorImage {
    const N: usize = 16;
    let body = egui::Color32::from_rgb(200, 200, 210);
    let panel = egui::Color32::from_rgb(60, 90, 200);
    let mut pixels = vec![egui::Color32::TRANSPARENT; N * N];
    for y in 6..10 {
        for x in 6..10 {
            pixels[y * N + x] = body;
        }
    }
    for y in 7..9 {
        for x in (0..5).chain(11..16) {
            pixels[y * N + x] = panel;
        }
    }
    egui::ColorImage {
        size: [N, N],
        pixels,
        source_size: egui::Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_points_round_half_up() {
        let p = PixelPoint { x: 10.5, y: 3.4 };
        assert_eq!(to_pos2(p), egui::pos2(11.0, 3.0));
    }

    #[test]
    fn icon_is_16_square() {
        let img = satellite_icon_image();
        assert_eq!(img.size, [16, 16]);
        assert_eq!(img.pixels.len(), 256);
        // panels reach the edges, corners stay clear
        assert_eq!(img.pixels[0], egui::Color32::TRANSPARENT);
        assert_ne!(img.pixels[7 * 16], egui::Color32::TRANSPARENT);
    }
}
