use core::fmt;

/// Default error delivered by a queue closed without an explicit reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueClosed;

impl fmt::Display for QueueClosed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "can't get value from closed queue")
  }
}
