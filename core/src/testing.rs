//! Collaborators used by demos and tests: a call-counting stub and a mock
//! asynchronous delay.

use anyhow::{anyhow, Context};
use futures_channel::oneshot;
use log::debug;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// Counts how many times tracked functions were invoked.
///
/// Clones share the same counter.
#[derive(Debug, Default, Clone)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `op` so that every invocation bumps the counter.
    pub fn track<A, R, O>(&self, op: O) -> impl FnOnce(A) -> R
    where
        O: FnOnce(A) -> R,
    {
        let calls = self.calls.clone();
        move |arg| {
            calls.fetch_add(1, Ordering::SeqCst);
            op(arg)
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Mock asynchronous operation that resolves to a value, or fails, after
/// a delay.
///
/// ```rust
/// use outcome_core::{settle::block_on_settled, testing::MockDelay};
/// use std::time::Duration;
///
/// let settled = block_on_settled(
///     MockDelay::resolve(5)
///         .after(Duration::from_millis(1))
///         .fail_with("timed out")
///         .run(),
/// );
/// assert!(settled.is_failure());
/// ```
#[derive(Debug)]
pub struct MockDelay<T> {
    value: T,
    after: Duration,

    /// Message of the error the delay fails with, if any.
    fail_with: Option<String>,
}

impl<T> MockDelay<T>
where
    T: Send + 'static,
{
    pub fn resolve(value: T) -> Self {
        Self {
            value,
            after: Duration::ZERO,
            fail_with: None,
        }
    }

    pub fn after(mut self, after: Duration) -> Self {
        self.after = after;
        self
    }

    pub fn fail_with<M: ToString>(mut self, message: M) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Sleeps on a helper thread, so it works under any executor.
    pub async fn run(self) -> anyhow::Result<T> {
        let (tx, rx) = oneshot::channel();
        let Self {
            value,
            after,
            fail_with,
        } = self;

        thread::spawn(move || {
            thread::sleep(after);
            let result = match fail_with {
                Some(message) => Err(anyhow!(message)),
                None => Ok(value),
            };
            debug!("MockDelay::run - resolving after {:?}", after);
            // Receiver may be gone if the future was dropped.
            let _ = tx.send(result);
        });

        rx.await.context("mock delay thread dropped its sender")?
    }
}
