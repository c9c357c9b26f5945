#[cfg(test)]
mod tests {
    use future_out::{make_awaitable_future, Error, Promise};
    use std::thread;

    #[test]
    fn test_delivery_from_another_thread() {
        let promise = Promise::new();
        let mut future = promise.get_future();

        let producer = thread::spawn(move || {
            promise.set_value(String::from("🍓")).unwrap();
        });
        // The join is the external synchronization: after it, the delivery
        // happened-before our read.
        producer.join().expect("The producer thread has panicked");

        assert_eq!(future.get(), Ok(String::from("🍓")));
    }

    #[test]
    fn test_concurrent_consumers_one_winner() {
        let promise = Promise::new();
        let mut first = promise.get_future();
        let mut second = promise.get_future();
        promise.set_value(String::from("🍓")).unwrap();

        let task1 = thread::spawn(move || first.get());
        let task2 = thread::spawn(move || second.get());
        let one = task1.join().expect("The task1 thread has panicked");
        let two = task2.join().expect("The task2 thread has panicked");

        match (one, two) {
            (Ok(value), Err(err)) | (Err(err), Ok(value)) => {
                assert_eq!(value, "🍓");
                assert_eq!(err, Error::ValueNotSet);
            }
            other => panic!("expected exactly one winner, got {:?}", other),
        }
    }

    #[test]
    fn test_awaitable_future_resolved_on_another_thread() {
        let mut future = make_awaitable_future(async { 6 * 7 });

        let consumer = thread::spawn(move || future.get());

        assert_eq!(
            consumer.join().expect("The consumer thread has panicked"),
            Ok(42)
        );
    }
}
