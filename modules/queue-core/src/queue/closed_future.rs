use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::closed_signal::ClosedSignal;
use crate::sync::ArcShared;

/// One-shot future resolving to the error a queue was closed with.
///
/// Every subscriber observes the same resolution: the error passed to
/// the first effective `close`. Instances are cheap to clone and may be
/// obtained before or after the queue closes.
#[must_use = "futures do nothing unless polled"]
pub struct ClosedFuture<E> {
  signal: ArcShared<ClosedSignal<E>>,
}

impl<E> ClosedFuture<E> {
  pub(crate) fn new(signal: ArcShared<ClosedSignal<E>>) -> Self {
    Self { signal }
  }
}

impl<E> Unpin for ClosedFuture<E> {}

impl<E: Clone> Future for ClosedFuture<E> {
  type Output = E;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    self.get_mut().signal.poll(cx)
  }
}

impl<E> Clone for ClosedFuture<E> {
  fn clone(&self) -> Self {
    Self { signal: self.signal.clone() }
  }
}
