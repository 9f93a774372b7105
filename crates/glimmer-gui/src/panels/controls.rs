use glimmer_core::consts::{BRIGHTNESS_RANGE, CONTRAST_RANGE, OPACITY_RANGE};

use crate::app::GlimmerApp;
use crate::panels::menu_bar::{open_file, save_file};

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut GlimmerApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                if adjust_section(ui, app) {
                    app.recompute(ctx);
                }
                ui.separator();
                actions_section(ui, ctx, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut GlimmerApp) {
    super::section_header(ui, "File", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        open_file(app);
    }

    if let Some(ref path) = app.ui_state.file_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }
    if let Some(source) = app.session.source() {
        ui.small(format!("{}x{}, RGBA 8-bit", source.width(), source.height()));
    }
}

/// Returns `true` when any parameter changed.
fn adjust_section(ui: &mut egui::Ui, app: &mut GlimmerApp) -> bool {
    let status = app.ui_state.last_render_ms.map(|ms| format!("{ms:.1} ms"));
    super::section_header(ui, "Adjustments", status.as_deref());
    ui.add_space(4.0);

    let mut params = app.session.params();
    let mut changed = false;

    ui.label(format!("Brightness: {}", params.brightness));
    changed |= ui
        .add(egui::Slider::new(&mut params.brightness, BRIGHTNESS_RANGE).show_value(false))
        .changed();

    ui.label(format!("Contrast: {}", params.contrast));
    changed |= ui
        .add(egui::Slider::new(&mut params.contrast, CONTRAST_RANGE).show_value(false))
        .changed();

    ui.label(format!("Opacity: {:.2}", params.opacity));
    changed |= ui
        .add(
            egui::Slider::new(&mut params.opacity, OPACITY_RANGE)
                .step_by(0.01)
                .show_value(false),
        )
        .changed();

    if changed {
        app.session.set_params(params);
    }
    changed
}

fn actions_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut GlimmerApp) {
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            app.reset(ctx);
        }
        let can_save = app.session.has_image();
        if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
            save_file(app);
        }
    });
}
