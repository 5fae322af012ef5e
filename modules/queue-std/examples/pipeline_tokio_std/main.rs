use penstock_queue_std_rs::{AsyncQueue, QueuePipeExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
  let intake: AsyncQueue<u32> = AsyncQueue::new();
  let outlet = AsyncQueue::new();

  intake.pipe_to(&outlet).expect("pipe intake into outlet");

  let producer = {
    let intake = intake.clone();
    tokio::spawn(async move {
      for value in 1..=5 {
        intake.put(value * 10);
      }
      let _ = intake.close();
    })
  };

  while let Ok(value) = outlet.get().await {
    println!("received: {value}");
    if value == 50 {
      break;
    }
  }

  producer.await.expect("producer task");
  println!("intake closed: {}", intake.is_closed());
}
