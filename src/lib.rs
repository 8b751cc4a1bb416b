pub mod config;
pub mod convert;
pub mod params;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
