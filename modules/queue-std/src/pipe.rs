//! Forwarding of every value from one queue into another.

mod pipe_error;
mod queue_pipe_ext;

pub use pipe_error::PipeError;
pub use queue_pipe_ext::QueuePipeExt;
