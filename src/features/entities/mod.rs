//! Billing entity types (who gets invoiced how).

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
