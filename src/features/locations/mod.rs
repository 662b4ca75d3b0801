//! Service locations, served as a paginated collection.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
