use std::sync::mpsc;
use std::time::Instant;

use glimmer_core::error::GlimmerError;
use glimmer_core::session::Session;

use crate::convert::buffer_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewportState};
use crate::worker;

pub struct GlimmerApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl GlimmerApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            session: Session::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    buffer,
                    elapsed,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}) in {}",
                        path.display(),
                        buffer.width(),
                        buffer.height(),
                        format_duration(elapsed)
                    ));
                    self.ui_state.file_path = Some(path);
                    self.viewport.fit_pending = true;
                    if let Err(e) = self.session.load(buffer) {
                        self.ui_state
                            .add_log(format!("ERROR: {e}. Showing the unadjusted image."));
                    }
                    self.refresh_texture(ctx);
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::PresetImported { config } => {
                    let params = config.params.clamped();
                    if params != config.params {
                        self.ui_state.add_log(format!(
                            "Preset values out of range were clamped ({} -> {params})",
                            config.params
                        ));
                    }
                    self.ui_state
                        .add_log(format!("Preset imported ({params})"));
                    self.session.set_params(params);
                    if self.session.has_image() {
                        self.recompute(ctx);
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Re-render the output from the source with the current parameters and
    /// redraw. The displayed image is left alone on failure.
    pub fn recompute(&mut self, ctx: &egui::Context) {
        let start = Instant::now();
        match self.session.apply().map(|_| ()) {
            Ok(()) => {
                self.ui_state.last_render_ms = Some(start.elapsed().as_secs_f32() * 1000.0);
                self.refresh_texture(ctx);
            }
            Err(GlimmerError::NoImageLoaded) => {
                self.ui_state
                    .add_log("Image data not found. Load an image first.".into());
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Restore identity brightness, contrast and opacity.
    pub fn reset(&mut self, ctx: &egui::Context) {
        match self.session.reset() {
            Ok(()) => {
                self.ui_state.add_log("Adjustments reset".into());
                if self.session.has_image() {
                    self.refresh_texture(ctx);
                }
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Upload whatever an export would write, so the viewport and Save agree.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Ok(buffer) = self.session.current() else {
            return;
        };
        let image = buffer_to_color_image(buffer);
        let size = image.size;

        match self.viewport.texture.as_mut() {
            Some(texture) if texture.size() == size => {
                texture.set(image, egui::TextureOptions::NEAREST);
            }
            _ => {
                self.viewport.texture = Some(ctx.load_texture(
                    "viewport",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
        self.viewport.image_size = Some(size);
    }
}

impl eframe::App for GlimmerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Glimmer")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Glimmer");
                        ui.label("Brightness, contrast and opacity");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
