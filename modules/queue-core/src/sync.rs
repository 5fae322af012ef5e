//! Shared-ownership helpers used across the queue internals.

mod arc_shared;

pub use arc_shared::ArcShared;
