use alloc::sync::Arc;
use core::{fmt, ops::Deref};


/// Shared wrapper backed by [`alloc::sync::Arc`].
///
/// Keeps the rest of the crate independent from the concrete shared
/// pointer and carries the pointer-identity comparison the piping layer
/// relies on to detect self-piping.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Returns whether two handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&**self, f)
  }
}
