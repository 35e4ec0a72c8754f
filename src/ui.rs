// src/ui.rs

use egui;

pub fn build_ui(ctx: &egui::Context, vertex_count: usize, min_length: f32) {
    egui::Window::new("Koch Snowflake")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label("Recursive curve subdivision demo");
                ui.separator();
                ui.label(format!("Perimeter vertices: {vertex_count}"));
                ui.label(format!("Stopping threshold: {min_length} px"));
            });
        });
}
