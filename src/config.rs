//! View settings and color palette for the polar plot.

use eframe::egui;

/// Colors for the plot background, grid, and pass tracks. Replaced
/// wholesale when a theme changes.
#[derive(Clone, Copy, PartialEq)]
pub struct PolarColors {
    pub background: egui::Color32,
    pub border: egui::Color32,
    pub grid: egui::Color32,
    pub sky: egui::Color32,
    pub text: egui::Color32,
    pub degree_labels: egui::Color32,
    pub pre_track: egui::Color32,
    pub visible_track: egui::Color32,
    pub post_track: egui::Color32,
    pub marker: egui::Color32,
    pub label: egui::Color32,
}

impl Default for PolarColors {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(10, 12, 20),
            border: egui::Color32::from_rgb(60, 70, 90),
            grid: egui::Color32::from_rgb(70, 80, 95),
            sky: egui::Color32::from_rgb(18, 26, 44),
            text: egui::Color32::from_rgb(220, 220, 220),
            degree_labels: egui::Color32::from_rgb(140, 150, 165),
            pre_track: egui::Color32::from_rgb(200, 60, 50),
            visible_track: egui::Color32::from_rgb(60, 180, 80),
            post_track: egui::Color32::from_rgb(200, 60, 50),
            marker: egui::Color32::from_rgb(220, 50, 50),
            label: egui::Color32::from_rgb(238, 238, 238),
        }
    }
}

/// Per-view options. The visibility threshold is the elevation above which
/// a sample counts as visible; it is not fixed at the horizon.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub visibility_threshold_deg: f64,
    pub margin: f64,
    pub show_mouse_readout: bool,
    pub show_mutual_observer: bool,
    pub show_elevation_profile: bool,
}

impl ViewSettings {
    pub fn new() -> Self {
        Self {
            visibility_threshold_deg: 10.0,
            margin: 40.0,
            show_mouse_readout: true,
            show_mutual_observer: false,
            show_elevation_profile: true,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new()
    }
}
