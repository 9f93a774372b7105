use std::path::PathBuf;
use std::time::Duration;

use glimmer_core::buffer::PixelBuffer;
use glimmer_core::config::AdjustConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file into a fresh source buffer.
    LoadImage { path: PathBuf },

    /// Encode and write the given buffer to disk.
    SaveImage { path: PathBuf, buffer: PixelBuffer },

    /// Read a preset TOML file.
    ImportPreset { path: PathBuf },

    /// Write a preset TOML file.
    ExportPreset { path: PathBuf, config: AdjustConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        buffer: PixelBuffer,
        elapsed: Duration,
    },
    ImageSaved {
        path: PathBuf,
    },
    PresetImported {
        config: AdjustConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
