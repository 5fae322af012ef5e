use alloc::vec::Vec;
use core::task::{Context, Poll, Waker};

use portable_atomic::{AtomicBool, Ordering};
use spin::Mutex;

#[cfg(test)]
mod tests;

/// One-shot, multi-observer cell resolved with the close error.
///
/// Unlike a waiter node, which is observed by exactly one future, the
/// closed signal broadcasts a single resolution to every subscriber,
/// past and future.
#[derive(Debug)]
pub(crate) struct ClosedSignal<E> {
  resolved: AtomicBool,
  error:    Mutex<Option<E>>,
  wakers:   Mutex<Vec<Waker>>,
}

impl<E> ClosedSignal<E> {
  /// Creates an unresolved signal.
  pub(crate) const fn new() -> Self {
    Self { resolved: AtomicBool::new(false), error: Mutex::new(None), wakers: Mutex::new(Vec::new()) }
  }

  /// Stores the error and wakes every registered observer.
  ///
  /// Only the first resolution takes effect; later calls are ignored.
  pub(crate) fn resolve(&self, error: E) -> bool {
    {
      let mut error_guard = self.error.lock();
      if self.resolved.load(Ordering::Acquire) {
        return false;
      }
      *error_guard = Some(error);
      self.resolved.store(true, Ordering::Release);
    }

    let wakers = core::mem::take(&mut *self.wakers.lock());
    for waker in wakers {
      waker.wake();
    }

    true
  }

  /// Polls for resolution, registering the caller's waker while pending.
  pub(crate) fn poll(&self, cx: &mut Context<'_>) -> Poll<E>
  where
    E: Clone, {
    if let Some(error) = self.peek() {
      return Poll::Ready(error);
    }

    {
      let mut wakers = self.wakers.lock();
      if !wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
        wakers.push(cx.waker().clone());
      }
    }

    match self.peek() {
      | Some(error) => Poll::Ready(error),
      | None => Poll::Pending,
    }
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    if self.resolved.load(Ordering::Acquire) { self.error.lock().clone() } else { None }
  }
}
