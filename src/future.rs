use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::awaitable_core::AwaitableCore;
use crate::{Core, Error};

/// The consumer handle. Holds either a ready value or a shared core that
/// will produce one; the caller never sees which.
///
/// A future is consumed by a single successful [`get`](Future::get). A
/// default-constructed future holds neither value nor core and always fails
/// with [`Error::IncompleteFuture`].
pub struct Future<T> {
    value: Option<T>,
    core: Option<Arc<dyn Core<T>>>,
}

impl<T> Future<T> {
    pub(crate) fn from_value(value: T) -> Self {
        Self {
            value: Some(value),
            core: None,
        }
    }

    pub(crate) fn from_core(core: Arc<dyn Core<T>>) -> Self {
        Self {
            value: None,
            core: Some(core),
        }
    }

    /// Produces the value, or fails.
    ///
    /// A directly-held value is moved out, after which the future is spent
    /// and further calls fail with [`Error::IncompleteFuture`]. Otherwise
    /// the backing core decides: a promise-backed future fails with
    /// [`Error::ValueNotSet`] until the producer delivers (and again once
    /// someone has taken the value), an awaitable-backed future runs its
    /// awaitable to completion on this thread.
    pub fn get(&mut self) -> Result<T, Error> {
        if let Some(value) = self.value.take() {
            return Ok(value);
        }
        match &self.core {
            Some(core) => core.get(),
            None => Err(Error::IncompleteFuture),
        }
    }
}

impl<T> Default for Future<T> {
    /// The incomplete future: no value, no core, every `get` fails.
    fn default() -> Self {
        Self {
            value: None,
            core: None,
        }
    }
}

impl<T: Debug> Debug for Future<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.core) {
            (Some(value), _) => f.debug_tuple("Future::Ready").field(value).finish(),
            (None, Some(_)) => f.write_str("Future::Pending"),
            (None, None) => f.write_str("Future::Incomplete"),
        }
    }
}

/// Wraps an already-known value into a ready future.
///
/// # Examples
///
/// ```
/// use future_out::make_future;
///
/// let mut future = make_future("ready");
/// assert_eq!(future.get().unwrap(), "ready");
/// assert!(future.get().is_err());
/// ```
pub fn make_future<T>(value: T) -> Future<T> {
    Future::from_value(value)
}

/// Wraps an awaitable into a future, no promise involved. The awaitable is
/// driven to completion on whichever thread first calls `get`.
///
/// # Examples
///
/// ```
/// use future_out::make_awaitable_future;
///
/// let mut future = make_awaitable_future(async { 1 + 2 });
/// assert_eq!(future.get().unwrap(), 3);
/// ```
pub fn make_awaitable_future<A>(awaitable: A) -> Future<A::Output>
where
    A: std::future::Future + Send + 'static,
    A::Output: Send,
{
    Future::from_core(Arc::new(AwaitableCore::new(awaitable)))
}

#[cfg(test)]
mod tests {
    use super::{make_awaitable_future, make_future, Future};
    use crate::Error;

    #[test]
    fn test_ready_future_yields_exactly_once() {
        let mut future = make_future(String::from("🍓"));
        assert_eq!(future.get(), Ok(String::from("🍓")));
        assert_eq!(future.get(), Err(Error::IncompleteFuture));
    }

    #[test]
    fn test_default_future_is_incomplete() {
        let mut future: Future<i32> = Future::default();
        assert_eq!(future.get(), Err(Error::IncompleteFuture));
        assert_eq!(future.get(), Err(Error::IncompleteFuture));
    }

    #[test]
    fn test_awaitable_future_yields_exactly_once() {
        let mut future = make_awaitable_future(async { 42 });
        assert_eq!(future.get(), Ok(42));
        assert_eq!(future.get(), Err(Error::AwaitableConsumed));
    }

    #[test]
    fn test_awaitable_future_from_composed_awaitables() {
        // The adapter assumes nothing about the awaitable's structure, so an
        // awaitable built out of smaller ones works the same.
        let composed = futures::future::join(futures::future::ready(40), async { 2 });
        let mut future = make_awaitable_future(async {
            let (a, b) = composed.await;
            a + b
        });
        assert_eq!(future.get(), Ok(42));
    }

    #[test]
    fn test_debug_states() {
        assert_eq!(format!("{:?}", make_future(1)), "Future::Ready(1)");
        assert_eq!(
            format!("{:?}", make_awaitable_future(async { 1 })),
            "Future::Pending"
        );
        assert_eq!(format!("{:?}", Future::<i32>::default()), "Future::Incomplete");
    }
}
