//! Boundary between fallible collaborators and Outcome.
//!
//! Every adapter here converts the single completion of an operation into
//! an Outcome exactly once. None of them retries, cancels or times out.

use crate::outcome::Outcome;
use anyhow::anyhow;
use log::{debug, warn};
use std::{
    any::Any,
    fmt::Debug,
    future::Future,
    panic::{self, UnwindSafe},
};

/// Settles already completed result.
pub fn settle<T, E>(result: Result<T, E>) -> Outcome<T, E>
where
    E: Debug,
{
    if let Err(ref e) = result {
        debug!("settle - operation failed: {:?}", e);
    }
    Outcome::from(result)
}

/// Runs fallible operation and settles its result.
pub fn settle_with<T, E, O>(op: O) -> Outcome<T, E>
where
    E: Debug,
    O: FnOnce() -> Result<T, E>,
{
    settle(op())
}

/// Awaits fallible future and settles its output.
///
/// Does not depend on any runtime, the future is polled by whatever
/// executor polls the returned one.
pub async fn settle_future<T, E, F>(fut: F) -> Outcome<T, E>
where
    E: Debug,
    F: Future<Output = Result<T, E>>,
{
    settle(fut.await)
}

/// Drives fallible future to completion on the current thread and settles
/// its output. Blocks until the future resolves.
pub fn block_on_settled<T, E, F>(fut: F) -> Outcome<T, E>
where
    E: Debug,
    F: Future<Output = Result<T, E>>,
{
    futures_executor::block_on(settle_future(fut))
}

/// Runs operation that may panic, turning the panic into a Failure.
///
/// The panic hook still runs, so the panic message gets printed as usual.
///
/// ```rust
/// use outcome_core::settle::catch;
///
/// let caught = catch(|| -> i32 { panic!("division by zero") });
/// assert!(caught.is_failure());
/// ```
pub fn catch<T, O>(op: O) -> Outcome<T, anyhow::Error>
where
    O: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(op) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            let message = panic_message(&*payload);
            warn!("catch - operation panicked: {}", message);
            Outcome::Failure(anyhow!("operation panicked: {}", message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("<non-string panic payload>")
    }
}
