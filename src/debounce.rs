//! Debounce - collapse bursts of calls into one trailing call.
//!
//! Each call cancels the call still waiting from before and schedules a new
//! one `timeout` later, so only the last call of a burst reaches `f`.
//!
//! Timers are local tasks: calls must happen inside a tokio
//! [`LocalSet`](tokio::task::LocalSet), the same thread that owns the cells
//! and the client. The wrapped callback may therefore capture `Rc` state
//! such as a [`Batcher`](crate::client::Batcher).
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use wave_bond::debounce::debounce;
//!
//! let batcher = client.batcher().clone();
//! let search = debounce(Duration::from_millis(300), move |query: String| {
//!     batcher.set_arg("q", query);
//!     batcher.push();
//! });
//!
//! search.call("w".into());
//! search.call("wa".into());
//! search.call("wave".into()); // only this one is pushed, 300ms from now
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;

struct Shared<A> {
    timeout: Duration,
    f: Rc<dyn Fn(A)>,
    pending: RefCell<Option<JoinHandle<()>>>,
}

/// A wrapped callback. Clones share the same timer.
pub struct Debounced<A> {
    shared: Rc<Shared<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<A: 'static> Debounced<A> {
    /// Schedule `f(arg)`, superseding any call still waiting.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio `LocalSet`.
    pub fn call(&self, arg: A) {
        let mut pending = self.shared.pending.borrow_mut();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let f = self.shared.f.clone();
        let timeout = self.shared.timeout;
        *pending = Some(tokio::task::spawn_local(async move {
            tokio::time::sleep(timeout).await;
            f(arg);
        }));
        tracing::trace!(?timeout, "debounced call scheduled");
    }

    /// Drop the waiting call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.shared.pending.borrow_mut().take() {
            previous.abort();
        }
    }

    /// True while a call is waiting for its timeout.
    pub fn is_pending(&self) -> bool {
        self.shared
            .pending
            .borrow()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn timeout(&self) -> Duration {
        self.shared.timeout
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("timeout", &self.shared.timeout)
            .finish()
    }
}

/// Wrap `f` so that calls less than `timeout` apart collapse into one.
///
/// The returned wrapper must be called inside a tokio `LocalSet`.
pub fn debounce<A, F>(timeout: Duration, f: F) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        shared: Rc::new(Shared {
            timeout,
            f: Rc::new(f),
            pending: RefCell::new(None),
        }),
    }
}
