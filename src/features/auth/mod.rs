//! Cookie-session authentication: hydration on mount, login/logout calls,
//! and the route guard. The navigation shell only ever asks "is a user
//! present"; authorization is the backend's job. Never log credentials or
//! session payloads.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
