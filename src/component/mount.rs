//! Mount API - Drives a component through its lifecycle.
//!
//! A stand-in for the host framework's reconciler: it renders once and calls
//! `did_mount`, collects re-render requests from the component's
//! [`Updater`], and turns them into renders on [`Mounted::tick`].
//!
//! # Example
//!
//! ```ignore
//! use wave_bond::component::{bond, mount};
//!
//! let counter = bond(|start: i32| Counter { count: cell(start) });
//! let mut mounted = mount(|updater| counter(0, updater));
//!
//! mounted.component().model().count.set(1);
//! while mounted.tick() {}
//!
//! mounted.unmount();
//! ```

use std::cell::Cell;
use std::rc::Rc;

use super::{Component, Updater};

// =============================================================================
// Render Queue
// =============================================================================

/// Re-render requests shared between the host and the component's updater.
#[derive(Clone, Default)]
struct RenderQueue {
    /// Requests not yet turned into a render.
    pending: Rc<Cell<usize>>,
    /// Requests accepted since mount.
    total: Rc<Cell<usize>>,
    /// Cleared on unmount; later requests are ignored.
    live: Rc<Cell<bool>>,
}

impl RenderQueue {
    fn updater(&self) -> Updater {
        let queue = self.clone();
        Updater::new(move || {
            if !queue.live.get() {
                return;
            }
            queue.pending.set(queue.pending.get() + 1);
            queue.total.set(queue.total.get() + 1);
        })
    }
}

// =============================================================================
// Mounted Component
// =============================================================================

/// A component attached to the host.
///
/// Dropping a still-mounted component unmounts it.
pub struct Mounted<C: Component> {
    component: C,
    queue: RenderQueue,
    output: C::Output,
    renders: usize,
}

/// Construct a component with a fresh [`Updater`], render it, then call
/// `did_mount`.
pub fn mount<C, F>(factory: F) -> Mounted<C>
where
    C: Component,
    F: FnOnce(Updater) -> C,
{
    let queue = RenderQueue::default();
    queue.live.set(true);

    let mut component = factory(queue.updater());
    let output = component.render();
    component.did_mount();

    Mounted {
        component,
        queue,
        output,
        renders: 1,
    }
}

impl<C: Component> Mounted<C> {
    /// Process pending re-render requests.
    ///
    /// Requests made since the last tick are coalesced into one render.
    /// Returns `true` if a render happened.
    pub fn tick(&mut self) -> bool {
        if !self.is_mounted() || self.queue.pending.get() == 0 {
            return false;
        }
        self.queue.pending.set(0);
        self.render_and_update();
        true
    }

    /// Re-render because the parent re-rendered.
    pub fn rerender(&mut self) {
        if self.is_mounted() {
            self.render_and_update();
        }
    }

    /// Call `will_unmount`. Further requests and ticks do nothing.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.queue.live.set(false);
        self.queue.pending.set(0);
        self.component.will_unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.queue.live.get()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// Output of the most recent render.
    pub fn output(&self) -> &C::Output {
        &self.output
    }

    /// Renders performed, including the initial one.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Re-render requests accepted while mounted.
    pub fn requests(&self) -> usize {
        self.queue.total.get()
    }

    /// Requests waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.queue.pending.get()
    }

    fn render_and_update(&mut self) {
        self.output = self.component.render();
        self.renders += 1;
        self.component.did_update();
    }
}

impl<C: Component> Drop for Mounted<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================
