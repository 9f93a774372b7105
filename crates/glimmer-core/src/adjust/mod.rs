pub mod params;
pub mod transform;

pub use params::AdjustParams;
pub use transform::{clamp8, contrast_factor, transform, transform_samples};
