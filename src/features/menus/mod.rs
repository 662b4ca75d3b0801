//! Customer-facing app/web menu records (not the console's own sidebar).

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
