use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlimmerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Invalid contrast {contrast}: contrast factor denominator is zero")]
    InvalidParameter { contrast: i32 },

    #[error("Channel value is not a number: {value}")]
    InvalidValue { value: f64 },

    #[error("Pixel buffer length {len} is not a multiple of 4")]
    InvalidBufferLength { len: usize },

    #[error("Invalid image dimensions: {width}x{height} for {len} samples")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GlimmerError>;
