//! Polar sky plot for satellite tracking. Plots tracked objects and their
//! passes on an azimuth/elevation chart with rise/set/peak annotations.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::HashMap;

mod annotate;
mod config;
mod demo;
mod drawing;
mod pass;
mod polar;
mod time;
mod track;

use crate::annotate::{annotate_pass, observer_marker, satellite_marker};
use crate::config::{PolarColors, ViewSettings};
use crate::pass::segment_pass;
use crate::polar::{xy_to_azel, PlotGeometry};
use crate::time::short_datetime;
use crate::track::{initial_bearing_deg, Observer, PassData, Satellite};

pub(crate) struct App {
    pub(crate) settings: ViewSettings,
    pub(crate) colors: PolarColors,
    pub(crate) satellites: Vec<Satellite>,
    pub(crate) passes: HashMap<u32, PassData>,
    pub(crate) home: Observer,
    pub(crate) mutual: Observer,
    icons: HashMap<String, egui::TextureHandle>,
}

impl Default for App {
    fn default() -> Self {
        let mut app = Self {
            settings: ViewSettings::new(),
            colors: PolarColors::default(),
            satellites: Vec::new(),
            passes: HashMap::new(),
            home: Observer {
                lat: 0.0,
                lon: 0.0,
                name: "Home".to_string(),
            },
            mutual: Observer {
                lat: 0.0,
                lon: 0.0,
                name: "Mutual".to_string(),
            },
            icons: HashMap::new(),
        };
        app.setup_demo();
        app
    }
}

impl App {
    fn selected_satellite(&self) -> Option<&Satellite> {
        self.satellites.iter().find(|s| s.selected)
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Visibility threshold:");
            ui.add(
                egui::Slider::new(&mut self.settings.visibility_threshold_deg, 0.0..=30.0)
                    .suffix("°"),
            );
            ui.separator();

            let mut selected = self.satellites.iter().position(|s| s.selected);
            egui::ComboBox::from_label("Satellite")
                .selected_text(
                    selected
                        .map(|i| self.satellites[i].name.clone())
                        .unwrap_or_else(|| "None".to_string()),
                )
                .show_ui(ui, |ui| {
                    for (i, sat) in self.satellites.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(i), &sat.name);
                    }
                });
            for (i, sat) in self.satellites.iter_mut().enumerate() {
                sat.selected = selected == Some(i);
            }

            ui.separator();
            ui.checkbox(&mut self.settings.show_mutual_observer, "Mutual observer");
            ui.checkbox(&mut self.settings.show_elevation_profile, "Profile");
            ui.checkbox(&mut self.settings.show_mouse_readout, "Mouse position");
        });
        ui.horizontal(|ui| {
            ui.label("Displaying:");
            for sat in &mut self.satellites {
                ui.checkbox(&mut sat.displaying, &sat.name);
            }
        });
    }

    fn show_elevation_profile(&self, ui: &mut egui::Ui) {
        let Some(sat) = self.selected_satellite() else {
            ui.label("No satellite selected");
            return;
        };
        let Some(data) = self.passes.get(&sat.catalog_number) else {
            ui.label("No upcoming pass");
            return;
        };

        ui.label(egui::RichText::new(format!("Next pass: {}", sat.name)).strong());
        ui.label(format!("AoS {}", short_datetime(data.rise_time)));
        ui.label(format!("LoS {}", short_datetime(data.set_time)));

        let t0 = match data.pass.first() {
            Some(s) => s.time,
            None => return,
        };
        let points: PlotPoints = data
            .pass
            .iter()
            .map(|s| {
                [
                    (s.time - t0).num_seconds() as f64 / 60.0,
                    s.elevation,
                ]
            })
            .collect();
        let minutes = data
            .pass
            .last()
            .map(|s| (s.time - t0).num_seconds() as f64 / 60.0)
            .unwrap_or(0.0);
        let threshold = self.settings.visibility_threshold_deg;

        Plot::new("elevation_profile")
            .height(220.0)
            .include_y(-15.0)
            .include_y(90.0)
            .show_axes([true, true])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("elevation", points)
                        .color(self.colors.visible_track)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(
                        "threshold",
                        PlotPoints::new(vec![[0.0, threshold], [minutes, threshold]]),
                    )
                    .color(self.colors.pre_track)
                    .width(0.5),
                );
                plot_ui.line(
                    Line::new(
                        "horizon",
                        PlotPoints::new(vec![[0.0, 0.0], [minutes, 0.0]]),
                    )
                    .color(egui::Color32::DARK_GRAY)
                    .width(0.5),
                );
            });
    }

    fn show_polar_view(&mut self, ui: &mut egui::Ui) {
        if !self.icons.contains_key("satellite") {
            let tex = ui.ctx().load_texture(
                "satellite",
                drawing::satellite_icon_image(),
                egui::TextureOptions::NEAREST,
            );
            self.icons.insert("satellite".to_string(), tex);
        }

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        let geom = PlotGeometry::from_area(
            f64::from(rect.width()),
            f64::from(rect.height()),
            self.settings.margin,
        )
        .offset(f64::from(rect.min.x), f64::from(rect.min.y));

        drawing::draw_background(&painter, &geom, self.settings.margin, &self.colors);

        if self.settings.show_mutual_observer {
            let bearing = initial_bearing_deg(&self.home, &self.mutual);
            let directives = observer_marker(bearing, &self.mutual.name, &geom, &self.colors);
            drawing::draw_directives(&painter, &directives, &self.icons);
        }

        let threshold = self.settings.visibility_threshold_deg;
        for sat in &self.satellites {
            if !sat.displaying {
                continue;
            }

            if sat.selected {
                if let Some(data) = self.passes.get(&sat.catalog_number) {
                    let seg = segment_pass(&data.pass, threshold, &geom);
                    if seg.has_visible() || !seg.pre_visible.is_empty() {
                        let rise_label = short_datetime(data.rise_time);
                        let set_label = short_datetime(data.set_time);
                        let directives = annotate_pass(
                            &seg,
                            &sat.name,
                            Some(&rise_label),
                            Some(&set_label),
                            sat.elevation >= threshold,
                            &geom,
                            &self.colors,
                        );
                        drawing::draw_directives(&painter, &directives, &self.icons);
                    }
                }
            }

            if sat.elevation > threshold {
                let directives = satellite_marker(
                    &sat.name,
                    sat.azimuth,
                    sat.elevation,
                    sat.selected,
                    &geom,
                    &self.colors,
                );
                drawing::draw_directives(&painter, &directives, &self.icons);
            }
        }

        if self.settings.show_mouse_readout {
            let look = response
                .hover_pos()
                .and_then(|p| xy_to_azel(f64::from(p.x), f64::from(p.y), &geom));
            drawing::draw_mouse_readout(
                &painter,
                rect.min + egui::vec2(10.0, 5.0),
                look,
                &self.colors,
            );
        }
    }

    fn next_event_line(&self) -> String {
        let Some(sat) = self.selected_satellite() else {
            return "No satellite selected".to_string();
        };
        let Some(data) = self.passes.get(&sat.catalog_number) else {
            return format!("{}: no upcoming pass", sat.name);
        };
        if sat.elevation >= self.settings.visibility_threshold_deg {
            format!(
                "{} — Next Event: LoS at {}",
                sat.name,
                short_datetime(data.set_time)
            )
        } else {
            format!(
                "{} — Next Event: AoS at {}",
                sat.name,
                short_datetime(data.rise_time)
            )
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        egui::TopBottomPanel::bottom("info").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.next_event_line());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "skyplot {} {}",
                        env!("CARGO_PKG_VERSION"),
                        env!("GIT_HASH")
                    ));
                });
            });
        });

        if self.settings.show_elevation_profile {
            egui::SidePanel::right("profile")
                .default_width(280.0)
                .show(ctx, |ui| {
                    self.show_elevation_profile(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_polar_view(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting skyplot");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sky Plot",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
