//! One-shot futures with a pluggable production strategy.
//!
//! A [`Future`] hands out a single value that may not exist yet. The value
//! can come from three places: it was known up front ([`make_future`]), a
//! producer delivers it later through a paired [`Promise`], or it is the
//! result of driving an awaitable to completion on the calling thread
//! ([`make_awaitable_future`]). The consumer calls [`Future::get`] and never
//! learns which strategy backed it.
//!
//! `get` never waits. Reading a promise-backed future before the producer
//! has called [`Promise::set_value`] fails with [`Error::ValueNotSet`]
//! instead of blocking, so cross-thread ordering (join, channel signal, ...)
//! is the caller's business.

use thiserror::Error;

pub mod awaitable_core;
pub mod future;
pub mod promise;
pub mod value_core;

pub use crate::awaitable_core::AwaitableCore;
pub use crate::future::{make_awaitable_future, make_future, Future};
pub use crate::promise::Promise;
pub use crate::value_core::ValueCore;

/// Backing storage of a [`Future`]: a single blocking `get` that yields the
/// value or fails.
///
/// Cores are shared between a [`Promise`] and every future derived from it,
/// so `get` takes `&self`; each implementation guards its own
/// single-consumption behind interior mutability. The trait is public so
/// further production strategies can be plugged in from outside.
pub trait Core<T>: Send + Sync {
    fn get(&self) -> Result<T, Error>;
}

/// Everything `get` or `set_value` can fail with. Nothing is retried or
/// logged internally; every variant surfaces straight to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The producer has not delivered yet, or another consumer already took
    /// the value. `get` does not wait for the producer.
    #[error("value not set on promise")]
    ValueNotSet,
    /// The future holds neither a ready value nor a backing core.
    #[error("incomplete future")]
    IncompleteFuture,
    /// The promise has already delivered its one value.
    #[error("value already set on promise")]
    AlreadySet,
    /// The wrapped awaitable was already driven to completion once.
    #[error("awaitable already consumed")]
    AwaitableConsumed,
}
