//! Organization modules: the ordered set of top-level contexts (Organization,
//! Harivara, E-Puja, ...) that scope which sidebar sections are visible, plus
//! the single selected module. The registry itself is plain data; the
//! reactive context wraps it for the header and sidebar.

#[cfg(target_arch = "wasm32")]
pub(crate) mod context;
pub(crate) mod registry;
