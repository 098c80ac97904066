//! Panic-capturing adapters around synchronous and asynchronous computations.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;

use crate::error::CaughtError;
use crate::outcome::{Caught, Outcome};

/// Run `f` exactly once, in the caller's context, and capture its outcome.
///
/// A normal return becomes [`Outcome::Ok`]. An unwinding panic is captured
/// and normalized through [`CaughtError::from_panic`] into [`Outcome::Err`];
/// the call itself never panics. Side effects of `f` before the panic are
/// the caller's responsibility. Builds with `panic = "abort"` never unwind,
/// so there is nothing to capture there.
pub fn try_sync<T, F>(f: F) -> Caught<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            tracing::trace!("captured panic from synchronous computation");
            Outcome::Err(CaughtError::from_panic(payload))
        }
    }
}

/// Await `op` until it settles and capture its outcome.
///
/// Suspends exactly once, on `op` itself. Fulfillment becomes
/// [`Outcome::Ok`]; a panic raised while polling is captured and normalized
/// the same way as in [`try_sync`]. The returned future always completes
/// with an outcome, never panics. Cancellation and timeouts stay with the
/// caller, this layer owns neither.
pub async fn try_async<T, F>(op: F) -> Caught<T>
where
    F: Future<Output = T>,
{
    match AssertUnwindSafe(op).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            tracing::trace!("captured panic from asynchronous operation");
            Outcome::Err(CaughtError::from_panic(payload))
        }
    }
}
