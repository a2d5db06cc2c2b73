// src/services/rate_limiter.rs
//
// Rate limiter - collapses a burst of calls into one deferred execution
//
// CRITICAL RULES:
// - At most one pending invocation per limiter (clones share it)
// - Every call cancels the pending one and reschedules with its own args
// - The action never runs inline, not even with a zero delay
// - Errors and panics from the action are not observed here

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

/// The single deferred call a limiter may hold
struct PendingInvocation {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct Slot {
    generation: u64,
    pending: Option<PendingInvocation>,
}

struct Inner<A> {
    action: Action<A>,
    delay: Duration,
    runtime: Handle,
    slot: Mutex<Slot>,
}

impl<A> Inner<A> {
    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Last-call-wins wrapper around an action taking `A`.
///
/// Use a tuple for multi-argument actions and `()` for none. Cloning yields a
/// handle to the same limiter; call [`RateLimiter::create`] again for an
/// independent one.
pub struct RateLimiter<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for RateLimiter<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> RateLimiter<A>
where
    A: Send + 'static,
{
    /// Wrap `action` so it runs `delay` after the last call of a burst.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime. See [`RateLimiter::try_create`].
    pub fn create<F>(action: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_runtime(Handle::current(), action, delay)
    }

    /// Like [`RateLimiter::create`], but reports a missing runtime as an error
    pub fn try_create<F>(action: F, delay: Duration) -> AppResult<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::Other(format!("Rate limiter needs a tokio runtime: {}", e)))?;
        Ok(Self::with_runtime(runtime, action, delay))
    }

    /// Schedule deferred calls on an explicit runtime
    pub fn with_runtime<F>(runtime: Handle, action: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                action: Arc::new(action),
                delay,
                runtime,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Trigger the limiter. Supersedes any call still waiting.
    pub fn call(&self, args: A) {
        let mut slot = self.inner.slot();

        if let Some(previous) = slot.pending.take() {
            trace!("superseding pending invocation {}", previous.generation);
            previous.handle.abort();
        }

        slot.generation += 1;
        let generation = slot.generation;
        let inner = Arc::clone(&self.inner);

        // The slot lock is held until the handle is stored, so the task can
        // never observe a slot without its own entry.
        let handle = self.inner.runtime.spawn(async move {
            tokio::time::sleep(inner.delay).await;

            {
                let mut slot = inner.slot();
                match slot.pending.as_ref() {
                    Some(p) if p.generation == generation => {
                        slot.pending = None;
                    }
                    // Superseded after the timer elapsed but before abort landed
                    _ => return,
                }
            }

            // Lock released: the action may call back into this limiter
            (inner.action)(args);
        });

        slot.pending = Some(PendingInvocation { generation, handle });
    }

    /// True while a deferred call is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.inner.slot().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}
