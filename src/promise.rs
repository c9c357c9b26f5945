use std::sync::Arc;

use crate::future::Future;
use crate::value_core::ValueCore;
use crate::Error;

/// The producer side: hands out futures and later delivers one value to all
/// of them through a shared [`ValueCore`].
///
/// Delivery does not wake anyone. A consumer calling [`Future::get`] before
/// [`set_value`](Promise::set_value) fails with [`Error::ValueNotSet`];
/// order the two externally if you need the value to be there.
///
/// # Examples
///
/// ```
/// use future_out::Promise;
/// use std::thread;
///
/// let promise = Promise::new();
/// let mut future = promise.get_future();
/// let producer = thread::spawn(move || promise.set_value(7).unwrap());
/// producer.join().expect("The producer thread has panicked");
/// assert_eq!(future.get().unwrap(), 7);
/// ```
#[derive(Debug)]
pub struct Promise<T> {
    core: Arc<ValueCore<T>>,
}

impl<T: Send + 'static> Promise<T> {
    pub fn new() -> Self {
        Self {
            core: Arc::new(ValueCore::new()),
        }
    }

    /// Delivers the value. One-shot: a second delivery fails with
    /// [`Error::AlreadySet`] instead of silently overwriting.
    pub fn set_value(&self, value: T) -> Result<(), Error> {
        self.core.set_value(value)
    }

    /// Derives a future reading from this promise's slot. May be called any
    /// number of times, but the slot holds one value: among all derived
    /// futures the first `get` after delivery wins, and the rest see
    /// [`Error::ValueNotSet`].
    ///
    /// The slot is shared, so the futures stay usable after the promise
    /// itself is dropped.
    pub fn get_future(&self) -> Future<T> {
        Future::from_core(self.core.clone())
    }
}

impl<T: Send + 'static> Default for Promise<T> {
    fn default() -> Self {
        Self::new()
    }
}
