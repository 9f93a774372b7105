pub mod adjust;
pub mod buffer;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod session;
