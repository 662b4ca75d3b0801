//! Domain-level frontend features. Navigation (modules + nav) is the
//! structural core; the remaining features are one-per-resource API clients
//! and payload types consumed by the CRUD routes. Types stay
//! target-independent so payload shapes are testable natively; network
//! clients only exist on wasm.

pub(crate) mod auth;
pub(crate) mod countries;
pub(crate) mod currencies;
pub(crate) mod entities;
pub(crate) mod gst;
pub(crate) mod locations;
pub(crate) mod menus;
pub(crate) mod modules;
pub(crate) mod nav;
pub(crate) mod professionals;
pub(crate) mod reviews;
pub(crate) mod tds;
