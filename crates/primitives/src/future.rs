//! Async future aliases.

use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed future that is not required to be Send.
///
/// Used for completion signals from inline editing engines, which live on
/// the UI thread and are not `Send`.
pub type BoxFutureLocal<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
