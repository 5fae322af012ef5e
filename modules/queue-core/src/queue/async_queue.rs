//! The queue component coordinating producers and consumers.

use core::fmt;

use spin::Mutex;

use super::{
  closed_future::ClosedFuture, closed_signal::ClosedSignal, get_future::GetFuture, pending_node::PendingNode,
  queue_closed::QueueClosed, queue_state::QueueState,
};
use crate::sync::ArcShared;


/// Unbounded asynchronous FIFO queue with poison-on-close delivery.
///
/// Producers append values with [`put`](Self::put), which never blocks
/// and never fails. Consumers claim positions with [`get`](Self::get),
/// which resolves through a future once the corresponding value exists.
/// Closing the queue marks a terminal poison state: buffered values stay
/// readable, and once they are drained every further `get` fails with
/// the close error. The [`closed`](Self::closed) signal resolves with
/// that error the moment the queue closes.
///
/// The buffer is unbounded. A producer that outruns its consumer grows
/// memory without limit; callers needing backpressure must layer it on
/// top of the queue.
///
/// Handles are cheap to clone and share one underlying chain.
pub struct AsyncQueue<T, E = QueueClosed> {
  state:  ArcShared<Mutex<QueueState<T, E>>>,
  signal: ArcShared<ClosedSignal<E>>,
}

impl<T, E> AsyncQueue<T, E> {
  /// Creates an empty open queue.
  #[must_use]
  pub fn new() -> Self {
    Self { state: ArcShared::new(Mutex::new(QueueState::new())), signal: ArcShared::new(ClosedSignal::new()) }
  }

  /// Appends a value to the tail of the queue.
  ///
  /// When a `get` is already waiting, the value resolves the oldest
  /// waiting position directly. Once the queue is closed the value is
  /// silently dropped.
  pub fn put(&self, value: T) {
    let mut state = self.state.lock();
    if state.closed.is_some() {
      return;
    }

    match state.pending.pop_front() {
      | Some(node) => {
        drop(state);
        // The node may belong to a dropped future; the position stays
        // consumed either way. Waking happens outside the state lock.
        let _ = node.complete(Ok(value));
      },
      | None => state.items.push_back(value),
    }
  }

  /// Returns a future resolving to the next value in FIFO order.
  ///
  /// The position is claimed before this method returns, so concurrent
  /// callers never observe the same value, regardless of the order their
  /// futures are polled in. A buffered value resolves the future
  /// immediately; otherwise it suspends until a matching `put`, or fails
  /// with the close error once the queue is closed and drained. Dropping
  /// the future does not release the claimed position.
  pub fn get(&self) -> GetFuture<T, E>
  where
    E: Clone, {
    let mut state = self.state.lock();

    if let Some(value) = state.items.pop_front() {
      return GetFuture::ready(Ok(value));
    }
    if let Some(error) = state.closed.clone() {
      return GetFuture::ready(Err(error));
    }

    let node = ArcShared::new(PendingNode::new());
    state.pending.push_back(node.clone());
    GetFuture::waiting(node)
  }

  /// Closes the queue with the provided error.
  ///
  /// Idempotent: only the first close takes effect, and later calls
  /// return the same signal unchanged. Every `get` currently waiting
  /// fails with a clone of `error`, values buffered before the close
  /// stay readable, and the [`closed`](Self::closed) signal resolves
  /// immediately rather than when a consumer first reaches the poison
  /// state.
  pub fn close_with(&self, error: E) -> ClosedFuture<E>
  where
    E: Clone, {
    let drained = {
      let mut state = self.state.lock();
      if state.closed.is_some() {
        return self.closed();
      }
      state.closed = Some(error.clone());
      core::mem::take(&mut state.pending)
    };

    for node in drained {
      let _ = node.complete(Err(error.clone()));
    }
    self.signal.resolve(error);
    self.closed()
  }

  /// Closes the queue with the default error.
  pub fn close(&self) -> ClosedFuture<E>
  where
    E: Clone + Default, {
    self.close_with(E::default())
  }

  /// Returns the one-shot signal resolving to the close error.
  #[must_use]
  pub fn closed(&self) -> ClosedFuture<E> {
    ClosedFuture::new(self.signal.clone())
  }

  /// Number of buffered values not yet claimed by a `get`.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.lock().items.len()
  }

  /// Indicates whether no buffered values remain.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state.lock().closed.is_some()
  }

  /// Returns whether two handles share the same underlying queue.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    ArcShared::ptr_eq(&self.state, &other.state)
  }
}

impl<T, E> Default for AsyncQueue<T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> Clone for AsyncQueue<T, E> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone(), signal: self.signal.clone() }
  }
}

impl<T, E> fmt::Debug for AsyncQueue<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.lock();
    f.debug_struct("AsyncQueue")
      .field("items", &state.items.len())
      .field("pending", &state.pending.len())
      .field("closed", &state.closed.is_some())
      .finish()
  }
}
