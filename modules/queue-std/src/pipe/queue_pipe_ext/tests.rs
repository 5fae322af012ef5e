use penstock_queue_core_rs::queue::AsyncQueue;

use crate::pipe::{PipeError, QueuePipeExt};

#[tokio::test]
async fn pipe_to_forwards_values_in_order() {
  let source: AsyncQueue<u32> = AsyncQueue::new();
  let sink = AsyncQueue::new();

  source.pipe_to(&sink).expect("distinct queues");

  source.put(1);
  source.put(2);
  source.put(3);

  assert_eq!(sink.get().await, Ok(1));
  assert_eq!(sink.get().await, Ok(2));
  assert_eq!(sink.get().await, Ok(3));
}

#[tokio::test]
async fn pipe_from_mirrors_pipe_to() {
  let source: AsyncQueue<&str> = AsyncQueue::new();
  let sink = AsyncQueue::new();

  sink.pipe_from(&source).expect("distinct queues");

  source.put("through");

  assert_eq!(sink.get().await, Ok("through"));
}

#[tokio::test]
async fn self_pipe_is_rejected_synchronously() {
  let queue: AsyncQueue<u32> = AsyncQueue::new();

  assert_eq!(queue.pipe_from(&queue).unwrap_err(), PipeError::SelfPipe);
  assert_eq!(queue.pipe_to(&queue).unwrap_err(), PipeError::SelfPipe);

  // No forwarding loop was registered: the value stays where it was put.
  queue.put(5);
  assert_eq!(queue.get().await, Ok(5));
}

#[tokio::test]
async fn values_put_after_source_close_are_never_forwarded() {
  let source: AsyncQueue<u32> = AsyncQueue::new();
  let sink = AsyncQueue::new();

  source.pipe_to(&sink).expect("distinct queues");

  source.put(1);
  let _ = source.close();
  source.put(2);

  assert_eq!(sink.get().await, Ok(1));

  // The post-close value was dropped at the source, so the sink stays
  // open and empty until someone else feeds it.
  assert!(!sink.is_closed());
  assert!(sink.is_empty());

  sink.put(9);
  assert_eq!(sink.get().await, Ok(9));
}

#[tokio::test]
async fn source_close_leaves_the_destination_open() {
  let source: AsyncQueue<u32, &str> = AsyncQueue::new();
  let sink = AsyncQueue::new();

  source.pipe_to(&sink).expect("distinct queues");

  let _ = source.close_with("upstream done");
  assert_eq!(source.closed().await, "upstream done");

  assert!(!sink.is_closed());
}

#[tokio::test]
async fn chained_attachments_return_the_receiver() {
  let sink: AsyncQueue<u32> = AsyncQueue::new();
  let left = AsyncQueue::new();
  let right = AsyncQueue::new();

  sink.pipe_from(&left).and_then(|sink| sink.pipe_from(&right)).expect("distinct queues");

  left.put(1);
  right.put(2);

  let mut received = [sink.get().await.expect("value"), sink.get().await.expect("value")];
  received.sort_unstable();
  assert_eq!(received, [1, 2]);
}
