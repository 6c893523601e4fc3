// ui.rs - egui front end for the sandbox

use eframe::egui;
use egui::{Color32, Key, Rect, Sense, TextureOptions, pos2};
use grid_display::Surface;
use std::time::Instant;

use crate::app::SandboxApp;
use crate::playback::SPEED_RANGE;
use crate::settings::ModeKind;
use conway::PATTERNS;

impl eframe::App for SandboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(Instant::now());
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway Sandbox");

            match self.mode_kind() {
                ModeKind::Life => self.life_controls(ui),
                ModeKind::Editor => self.editor_controls(ui),
            }

            ui.separator();
            self.view_controls(ui);
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.draw_grid(ui));

            ui.separator();
            let (m, n) = self.grid().dimensions();
            let total = m * n;
            let live = self.grid().iter().filter(|(_, alive)| **alive).count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Dead cells: {}", total - live));
                if total > 0 {
                    ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
                }
            });
        });

        if self.playback.is_running() {
            ctx.request_repaint();
        }
    }
}

impl SandboxApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let pressed = |key| ctx.input(|i| i.key_pressed(key));
        match self.mode_kind() {
            ModeKind::Life => {
                if pressed(Key::ArrowLeft) {
                    self.step_back();
                }
                if pressed(Key::ArrowRight) {
                    self.step_forward();
                }
                if pressed(Key::ArrowUp) {
                    self.reset();
                }
                if pressed(Key::Space) {
                    self.toggle_playback(Instant::now());
                }
                if pressed(Key::ArrowDown) {
                    self.edit_current();
                }
            }
            ModeKind::Editor => {
                if pressed(Key::ArrowRight) {
                    self.run_editor();
                }
            }
        }
    }

    fn life_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.playback.is_running() { "⏸ Stop" } else { "▶ Start" };
            if ui.button(label).clicked() {
                self.toggle_playback(Instant::now());
            }
            if ui.button("⏮ Back").clicked() {
                self.step_back();
            }
            if ui.button("⏭ Forward").clicked() {
                self.step_forward();
            }
            if ui.button("⏹ Reset").clicked() {
                self.reset();
            }
            if ui.button("🎲 New random").clicked() {
                self.new_random();
            }
            if ui.button("✏ Edit").clicked() {
                self.edit_current();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = self.playback.speed();
            if ui
                .add(egui::Slider::new(&mut speed, SPEED_RANGE).suffix(" gen/sec"))
                .changed()
            {
                self.set_speed(speed);
            }

            ui.separator();

            if let Some(history) = self.history() {
                let (position, known) = (history.position(), history.len());
                let population = history.current().population();
                let mut target = position;
                // One past the last known generation computes it on demand.
                let scrub = ui.add(egui::Slider::new(&mut target, 0..=known).text("generation"));
                if scrub.changed() && target != position {
                    self.go_to(target);
                }
                ui.label(format!("of {} computed, population {}", known, population));
            }
        });
    }

    fn editor_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("▶ Run").clicked() {
                self.run_editor();
            }
            if ui.button("⏹ Clear").clicked() {
                self.clear_editor();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                self.apply_pattern(self.selected_pattern);
            }

            ui.separator();

            ui.label("Size:");
            ui.add(egui::DragValue::new(&mut self.resize_to.0).clamp_range(1..=500));
            ui.label("x");
            ui.add(egui::DragValue::new(&mut self.resize_to.1).clamp_range(1..=500));
            if ui.button("Resize").clicked() {
                let (m, n) = self.resize_to;
                self.resize_editor(m, n);
            }
        });
        ui.label("Click or drag on the grid to paint cells. Press → to run.");
    }

    fn view_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut grid_lines = self.view.grid_lines();
            if ui.checkbox(&mut grid_lines, "Gridlines").changed() {
                self.set_grid_lines(grid_lines);
            }
            let mut invert = self.colorizer.invert;
            if ui.checkbox(&mut invert, "Invert colors").changed() {
                self.set_invert(invert);
            }

            ui.separator();

            let mut zoom = self.zoom;
            if ui
                .add(egui::Slider::new(&mut zoom, 0.25..=4.0).text("zoom"))
                .changed()
            {
                self.set_zoom(zoom);
            }
        });
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        if self.dirty || self.texture.is_none() {
            let image = self.view.surface().to_color_image();
            if let Some(texture) = self.texture.as_mut() {
                texture.set(image, TextureOptions::NEAREST);
            } else {
                self.texture = Some(ui.ctx().load_texture("grid", image, TextureOptions::NEAREST));
            }
            self.dirty = false;
        }

        let size = self.view.surface().size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        self.view.surface_mut().set_offset(response.rect.min);

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), response.rect, uv, Color32::WHITE);
        }

        match self.mode_kind() {
            ModeKind::Editor => {
                let pressed = response
                    .is_pointer_button_down_on()
                    .then(|| response.interact_pointer_pos())
                    .flatten();
                self.pointer(pressed);
            }
            ModeKind::Life => {
                if response.clicked() {
                    self.toggle_playback(Instant::now());
                }
            }
        }
    }
}
