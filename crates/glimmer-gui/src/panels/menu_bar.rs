use glimmer_core::config::AdjustConfig;
use glimmer_core::consts::DEFAULT_EXPORT_FILENAME;

use crate::app::GlimmerApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut GlimmerApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    save_file(app);
                }

                ui.separator();

                if ui.button("Import Preset...").clicked() {
                    ui.close();
                    import_preset(app);
                }

                if ui.button("Export Preset...").clicked() {
                    ui.close();
                    export_preset(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset").clicked() {
                    ui.close();
                    app.reset(ctx);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &mut GlimmerApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

pub(crate) fn save_file(app: &mut GlimmerApp) {
    let buffer = match app.session.current() {
        Ok(buffer) => buffer.clone(),
        Err(e) => {
            app.ui_state.add_log(format!("Nothing to save: {e}"));
            return;
        }
    };

    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("TIFF", &["tiff", "tif"])
            .add_filter("BMP", &["bmp"])
            .set_file_name(DEFAULT_EXPORT_FILENAME)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage { path, buffer });
        }
    });
}

fn import_preset(app: &mut GlimmerApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ImportPreset { path });
        }
    });
}

fn export_preset(app: &mut GlimmerApp) {
    let config = AdjustConfig {
        input: app.ui_state.file_path.clone(),
        params: app.session.params(),
        ..AdjustConfig::default()
    };

    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("glimmer_preset.toml")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportPreset { path, config });
        }
    });
}
