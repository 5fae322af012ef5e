use alloc::collections::VecDeque;

use super::pending_node::PendingNode;
use crate::sync::ArcShared;

/// Mutable queue record guarded by the owning queue's mutex.
///
/// `items` holds produced values no `get` has claimed yet; `pending`
/// holds positions claimed by `get` calls still waiting for a value.
/// Invariant: at most one of the two is non-empty at any time, and the
/// order of each equals the order of the calls that populated it.
#[derive(Debug)]
pub(crate) struct QueueState<T, E> {
  pub(super) items:   VecDeque<T>,
  pub(super) pending: VecDeque<ArcShared<PendingNode<T, E>>>,
  pub(super) closed:  Option<E>,
}

impl<T, E> QueueState<T, E> {
  /// Creates the state of an empty open queue.
  pub(crate) const fn new() -> Self {
    Self { items: VecDeque::new(), pending: VecDeque::new(), closed: None }
  }
}
