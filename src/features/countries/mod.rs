//! International country reference data.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
