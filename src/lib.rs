//! Workspace facade: re-exports [`devicedb_core`] so the demos can use a
//! single crate name.
pub use devicedb_core::*;
