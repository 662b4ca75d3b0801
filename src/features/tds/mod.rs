//! TDS (tax deducted at source) settings.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
