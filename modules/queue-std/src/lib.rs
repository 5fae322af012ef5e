//! Tokio integration for the penstock queue.
//!
//! The core primitive lives in `penstock-queue-core-rs` and assumes no
//! executor. This crate adds the piping surface: wiring one queue into
//! another through a detached forwarding task that runs until the source
//! closes.

pub mod pipe;

pub use penstock_queue_core_rs::queue::{AsyncQueue, ClosedFuture, GetFuture, QueueClosed};
pub use pipe::{PipeError, QueuePipeExt};
