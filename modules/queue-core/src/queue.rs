//! Unbounded asynchronous FIFO queue with poison-on-close delivery.

mod async_queue;
mod closed_future;
mod closed_signal;
mod get_future;
mod pending_node;
mod queue_closed;
mod queue_state;

pub use async_queue::AsyncQueue;
pub use closed_future::ClosedFuture;
pub use get_future::GetFuture;
pub use queue_closed::QueueClosed;
