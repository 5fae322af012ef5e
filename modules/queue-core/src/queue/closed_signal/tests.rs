use core::{
  ptr,
  task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

use super::ClosedSignal;

fn raw_waker() -> RawWaker {
  fn clone(_: *const ()) -> RawWaker {
    raw_waker()
  }
  fn wake(_: *const ()) {}
  fn wake_by_ref(_: *const ()) {}
  fn drop(_: *const ()) {}
  static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);
  RawWaker::new(ptr::null(), &VTABLE)
}

fn noop_waker() -> Waker {
  unsafe { Waker::from_raw(raw_waker()) }
}

#[test]
fn resolution_reaches_every_observer() {
  let signal: ClosedSignal<&str> = ClosedSignal::new();

  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);

  assert!(matches!(signal.poll(&mut context), Poll::Pending));
  assert!(signal.resolve("done"));

  assert_eq!(signal.poll(&mut context), Poll::Ready("done"));
  assert_eq!(signal.poll(&mut context), Poll::Ready("done"));
}

#[test]
fn first_resolution_wins() {
  let signal: ClosedSignal<&str> = ClosedSignal::new();

  assert!(signal.resolve("first"));
  assert!(!signal.resolve("second"));

  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);
  assert_eq!(signal.poll(&mut context), Poll::Ready("first"));
}

#[test]
fn late_observers_resolve_immediately() {
  let signal: ClosedSignal<u8> = ClosedSignal::new();
  assert!(signal.resolve(3));

  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);
  assert_eq!(signal.poll(&mut context), Poll::Ready(3));
}
