//! Currency reference data, both domestic and international.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
