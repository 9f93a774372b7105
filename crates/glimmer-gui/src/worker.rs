use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use glimmer_core::buffer::PixelBuffer;
use glimmer_core::config::AdjustConfig;
use glimmer_core::io::image_io::{load_image, save_image};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("glimmer-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, err: anyhow::Error) {
    tracing::error!("{err:#}");
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: format!("{err:#}"),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => {
                let start = Instant::now();
                match load(&path) {
                    Ok(buffer) => send(
                        &tx,
                        &ctx,
                        WorkerResult::ImageLoaded {
                            path,
                            buffer,
                            elapsed: start.elapsed(),
                        },
                    ),
                    Err(e) => send_error(&tx, &ctx, e),
                }
            }
            WorkerCommand::SaveImage { path, buffer } => match save(&path, &buffer) {
                Ok(()) => send(&tx, &ctx, WorkerResult::ImageSaved { path }),
                Err(e) => send_error(&tx, &ctx, e),
            },
            WorkerCommand::ImportPreset { path } => match import_preset(&path) {
                Ok(config) => send(&tx, &ctx, WorkerResult::PresetImported { config }),
                Err(e) => send_error(&tx, &ctx, e),
            },
            WorkerCommand::ExportPreset { path, config } => {
                match config
                    .save(&path)
                    .with_context(|| format!("Failed to write preset {}", path.display()))
                {
                    Ok(()) => send_log(&tx, &ctx, format!("Preset saved: {}", path.display())),
                    Err(e) => send_error(&tx, &ctx, e),
                }
            }
        }
    }
}

fn load(path: &Path) -> Result<PixelBuffer> {
    load_image(path).with_context(|| format!("Failed to load image {}", path.display()))
}

fn save(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    save_image(buffer, path).with_context(|| format!("Failed to save {}", path.display()))
}

fn import_preset(path: &Path) -> Result<AdjustConfig> {
    AdjustConfig::load(path).with_context(|| format!("Failed to read preset {}", path.display()))
}
