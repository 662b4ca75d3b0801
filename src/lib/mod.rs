//! Shared frontend utilities: API access, configuration, error taxonomy,
//! response envelopes, theme constants, and build metadata.
//!
//! Every network call in the console goes through the helpers in [`api`] so
//! timeouts, cookie handling, and error sanitization stay uniform. The
//! back-office REST API wraps payloads in `{ "data": ... }` envelopes and
//! paginated lists in `{ "data": { "list": [...], "pagination": { "total" } } }`;
//! the [`envelope`] module owns those shapes so feature clients never unwrap
//! them by hand. Configuration values are public deployment knobs, never
//! secrets.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod envelope;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_resource, get_data, get_optional_json, get_page, get_text_from_url, post_empty,
    post_json, post_json_response, put_json,
};
pub(crate) use errors::AppError;
