use penstock_queue_core_rs::queue::AsyncQueue;

use super::pipe_error::PipeError;

#[cfg(test)]
mod tests;

/// Piping extensions wiring one queue into another.
///
/// Forwarding runs on a detached Tokio task, so both methods must be
/// called from within a runtime. The task stops at the first failed
/// `get` on the source; the failure is not propagated and the receiving
/// queue is left open, which keeps fan-in possible: several sources may
/// pipe into one destination, and one of them closing never terminates
/// the others' forwarding.
pub trait QueuePipeExt<T, E> {
  /// Forwards every value produced by `source` into this queue until
  /// `source` closes.
  ///
  /// Returns `&self` so attachments can be chained.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::SelfPipe`] when `source` is this queue; no
  /// forwarding is registered in that case.
  fn pipe_from(&self, source: &AsyncQueue<T, E>) -> Result<&Self, PipeError>;

  /// Forwards every value produced by this queue into `destination`
  /// until this queue closes.
  ///
  /// Returns `&self` so attachments can be chained.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::SelfPipe`] when `destination` is this queue;
  /// no forwarding is registered in that case.
  fn pipe_to(&self, destination: &AsyncQueue<T, E>) -> Result<&Self, PipeError>;
}

impl<T, E> QueuePipeExt<T, E> for AsyncQueue<T, E>
where
  T: Send + 'static,
  E: Clone + Send + 'static,
{
  fn pipe_from(&self, source: &AsyncQueue<T, E>) -> Result<&Self, PipeError> {
    if self.ptr_eq(source) {
      return Err(PipeError::SelfPipe);
    }
    spawn_forwarding(source.clone(), self.clone());
    Ok(self)
  }

  fn pipe_to(&self, destination: &AsyncQueue<T, E>) -> Result<&Self, PipeError> {
    if self.ptr_eq(destination) {
      return Err(PipeError::SelfPipe);
    }
    spawn_forwarding(self.clone(), destination.clone());
    Ok(self)
  }
}

/// Drives the private forwarding loop on a detached task.
///
/// Values buffered in the source before its close still occupy chain
/// positions ahead of the poison state and are forwarded; values put
/// after the close are dropped at the source and never observed here.
fn spawn_forwarding<T, E>(source: AsyncQueue<T, E>, destination: AsyncQueue<T, E>)
where
  T: Send + 'static,
  E: Clone + Send + 'static, {
  tokio::spawn(async move {
    loop {
      match source.get().await {
        | Ok(value) => destination.put(value),
        | Err(_) => break,
      }
    }
  });
}
