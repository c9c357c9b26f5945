use std::sync::Mutex;

use futures::executor::block_on;

use crate::{Core, Error};

/// Wraps an arbitrary awaitable into a core, no promise involved.
///
/// `get` pumps the awaitable to completion on the calling thread with
/// [`block_on`]; no extra threads are spawned and no external scheduler is
/// needed. The awaitable is moved out of the slot on the first call, so the
/// core is single-use.
pub struct AwaitableCore<A> {
    awaitable: Mutex<Option<A>>,
}

impl<A> AwaitableCore<A>
where
    A: std::future::Future,
{
    pub fn new(awaitable: A) -> Self {
        Self {
            awaitable: Mutex::new(Some(awaitable)),
        }
    }
}

impl<A> Core<A::Output> for AwaitableCore<A>
where
    A: std::future::Future + Send,
    A::Output: Send,
{
    /// Blocks for however long the awaitable takes. Whatever the awaitable
    /// resolves to is returned unchanged, including `Result` values; a
    /// panicking awaitable panics through this call.
    fn get(&self) -> Result<A::Output, Error> {
        let awaitable = self
            .awaitable
            .lock()
            .unwrap()
            .take()
            .ok_or(Error::AwaitableConsumed)?;
        Ok(block_on(awaitable))
    }
}
