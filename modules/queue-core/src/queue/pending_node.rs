use core::task::{Context, Poll, Waker};

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;


const STATE_PENDING: u8 = 0;
const STATE_COMPLETED: u8 = 1;

/// A chain position claimed by a `get` call before its value exists.
///
/// Completes at most once, with either the produced value or the close
/// error. There is deliberately no cancellation: a claimed position is
/// never returned to the queue, so a value routed to a node whose
/// observing future was dropped is dropped together with the node.
#[derive(Debug)]
pub(crate) struct PendingNode<T, E> {
  state:  AtomicU8,
  waker:  Mutex<Option<Waker>>,
  result: Mutex<Option<Result<T, E>>>,
}

impl<T, E> PendingNode<T, E> {
  /// Creates a new unresolved node.
  pub(crate) const fn new() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), waker: Mutex::new(None), result: Mutex::new(None) }
  }

  /// Completes the node with the provided result.
  pub(crate) fn complete(&self, value: Result<T, E>) -> bool {
    let mut result_guard = self.result.lock();
    if self.state.compare_exchange(STATE_PENDING, STATE_COMPLETED, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return false;
    }

    *result_guard = Some(value);
    drop(result_guard);

    if let Some(waker) = self.waker.lock().take() {
      waker.wake();
    }

    true
  }

  /// Polls the node for completion.
  pub(crate) fn poll(&self, cx: &mut Context<'_>) -> Poll<()> {
    if self.state.load(Ordering::Acquire) == STATE_COMPLETED {
      return Poll::Ready(());
    }

    *self.waker.lock() = Some(cx.waker().clone());

    if self.state.load(Ordering::Acquire) == STATE_COMPLETED { Poll::Ready(()) } else { Poll::Pending }
  }

  /// Takes the completion result if available.
  pub(crate) fn take_result(&self) -> Option<Result<T, E>> {
    self.result.lock().take()
  }
}
