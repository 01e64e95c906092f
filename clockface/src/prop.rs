//! Shared callable handles used to wire a clock face to its host.
//!
//! ## Usage
//!
//! The host hands the controller a [`Callback`] that reads the current time
//! and a [`CallbackWith`] that receives [`ClockEvent`](crate::ClockEvent)s.
//! Both compare by identity so a controller can be rebuilt without deep
//! closure comparisons.

use std::{fmt, sync::Arc};

/// Accessor handle for `Fn() -> R`, compared by identity.
pub struct Callback<R = ()> {
    handler: Arc<dyn Fn() -> R + Send + Sync>,
}

impl<R> Callback<R> {
    /// Wraps a closure that produces a value each time it is read.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Reads a fresh value from the wrapped closure.
    pub fn call(&self) -> R {
        (self.handler)()
    }
}

impl<R> Clone for Callback<R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<R> PartialEq for Callback<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<R> Eq for Callback<R> {}

impl<R> fmt::Debug for Callback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl<R, F> From<F> for Callback<R>
where
    F: Fn() -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

/// Sink handle for `Fn(T) -> R`, compared by identity like [`Callback`].
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Wraps a closure that consumes each delivered value.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Delivers `value` to the wrapped closure.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}
