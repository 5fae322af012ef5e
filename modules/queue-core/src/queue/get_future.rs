use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::pending_node::PendingNode;
use crate::sync::ArcShared;

enum GetFutureInner<T, E> {
  Ready(Option<Result<T, E>>),
  Waiting(ArcShared<PendingNode<T, E>>),
}

/// Future returned by [`AsyncQueue::get`](super::AsyncQueue::get).
///
/// The chain position is claimed when `get` is called, not when this
/// future is first polled. Dropping the future does not release the
/// position; the value delivered to it is discarded.
#[must_use = "futures do nothing unless polled"]
pub struct GetFuture<T, E> {
  inner: GetFutureInner<T, E>,
}

impl<T, E> GetFuture<T, E> {
  pub(crate) fn ready(result: Result<T, E>) -> Self {
    Self { inner: GetFutureInner::Ready(Some(result)) }
  }

  pub(crate) fn waiting(node: ArcShared<PendingNode<T, E>>) -> Self {
    Self { inner: GetFutureInner::Waiting(node) }
  }
}

impl<T, E> Unpin for GetFuture<T, E> {}

impl<T, E> Future for GetFuture<T, E> {
  type Output = Result<T, E>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();

    match &mut this.inner {
      | GetFutureInner::Ready(result) => Poll::Ready(result.take().expect("future polled after completion")),
      | GetFutureInner::Waiting(node) => match node.poll(cx) {
        | Poll::Ready(()) => Poll::Ready(node.take_result().expect("completed node must hold a result")),
        | Poll::Pending => Poll::Pending,
      },
    }
  }
}
