//! The cell primitive and its listener registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{signal, untrack, Signal};

use super::Subscription;

// =============================================================================
// Listener Registry
// =============================================================================

type Listener<T> = Rc<dyn Fn(&T)>;

struct Listeners<T> {
    entries: Vec<(usize, Listener<T>)>,
    next_id: usize,
}

impl<T> Listeners<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn insert(&mut self, listener: Listener<T>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: usize) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn contains(&self, id: usize) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

struct Inner<T> {
    value: Signal<T>,
    listeners: RefCell<Listeners<T>>,
}

// =============================================================================
// Cell
// =============================================================================

/// A single mutable value with change notification.
///
/// Cloning a `Cell` clones the handle; all clones share the value and the
/// listener set.
pub struct Cell<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Cell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: signal(initial),
                listeners: RefCell::new(Listeners::new()),
            }),
        }
    }

    /// Current value. Tracked: an effect that calls this re-runs when
    /// the cell changes.
    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    /// Current value, without registering a dependency.
    pub fn peek(&self) -> T {
        untrack(|| self.inner.value.get())
    }

    /// Replace the value and notify listeners.
    ///
    /// Writing a value equal to the current one is a no-op. The comparison
    /// does not track, so writing from inside an effect does not make the
    /// effect depend on this cell.
    pub fn set(&self, value: T) {
        if untrack(|| self.inner.value.with(|current| *current == value)) {
            return;
        }
        self.inner.value.set(value.clone());
        self.notify(&value);
    }

    /// Replace the value and notify listeners even if it equals the
    /// current one.
    ///
    /// For values that stand for a fresh occurrence, like the latest
    /// server message, where two equal payloads are still two events.
    pub fn emit(&self, value: T) {
        self.inner.value.set(value.clone());
        self.notify(&value);
    }

    /// Replace the value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.peek());
        self.set(next);
    }

    /// Register a listener, called with the new value after every change.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self
            .inner
            .listeners
            .borrow_mut()
            .insert(Rc::new(listener));
        tracing::trace!(listener = id, "cell subscribed");

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().remove(id);
                tracing::trace!(listener = id, "cell unsubscribed");
            }
        })
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().entries.len()
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners can subscribe/dispose while being notified.
        let snapshot: Vec<(usize, Listener<T>)> = self
            .inner
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in snapshot {
            if self.inner.listeners.borrow().contains(id) {
                listener(value);
            }
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.peek())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Create a cell holding `initial`.
pub fn cell<T: Clone + PartialEq + 'static>(initial: T) -> Cell<T> {
    Cell::new(initial)
}

/// Subscribe `listener` to `cell`.
pub fn on<T: Clone + PartialEq + 'static>(
    cell: &Cell<T>,
    listener: impl Fn(&T) + 'static,
) -> Subscription {
    cell.subscribe(listener)
}

// =============================================================================
// Reactive Capability
// =============================================================================

/// Anything a component can watch for changes.
///
/// This is the typed replacement for asking "is this field a cell?" at
/// runtime: a model hands its cells to the binding adapter as `&dyn Reactive`.
pub trait Reactive {
    /// Call `notify` after every change until the subscription is released.
    fn watch(&self, notify: Rc<dyn Fn()>) -> Subscription;
}

impl<T: Clone + PartialEq + 'static> Reactive for Cell<T> {
    fn watch(&self, notify: Rc<dyn Fn()>) -> Subscription {
        self.subscribe(move |_| notify())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_notifies_listeners() {
        let count = cell(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let _sub = on(&count, move |n| seen_clone.borrow_mut().push(*n));

        count.set(1);
        count.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_equal_value_is_noop() {
        let name = cell("a".to_string());
        let calls = Rc::new(std::cell::Cell::new(0));
        let calls_clone = calls.clone();

        let _sub = on(&name, move |_| calls_clone.set(calls_clone.get() + 1));

        name.set("a".to_string());
        assert_eq!(calls.get(), 0);

        name.set("b".to_string());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_emit_notifies_on_equal_value() {
        let last = cell(Some(1));
        let calls = Rc::new(std::cell::Cell::new(0));
        let calls_clone = calls.clone();

        let _sub = on(&last, move |_| calls_clone.set(calls_clone.get() + 1));

        last.emit(Some(1));
        last.emit(Some(1));
        assert_eq!(calls.get(), 2);
        assert_eq!(last.get(), Some(1));
    }

    #[test]
    fn test_dispose_stops_notifications() {
        let count = cell(0);
        let calls = Rc::new(std::cell::Cell::new(0));
        let calls_clone = calls.clone();

        let sub = on(&count, move |_| calls_clone.set(calls_clone.get() + 1));
        assert_eq!(count.listener_count(), 1);

        sub.dispose();
        assert_eq!(count.listener_count(), 0);

        count.set(5);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_update_uses_current_value() {
        let count = cell(10);
        count.update(|n| n + 5);
        assert_eq!(count.get(), 15);
    }

    #[test]
    fn test_listener_can_dispose_another_during_notify() {
        let count = cell(0);
        let calls = Rc::new(std::cell::Cell::new(0));

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let victim_clone = victim.clone();
        let _killer = on(&count, move |_| {
            victim_clone.borrow_mut().take();
        });

        let calls_clone = calls.clone();
        *victim.borrow_mut() = Some(on(&count, move |_| calls_clone.set(calls_clone.get() + 1)));

        count.set(1);
        assert_eq!(calls.get(), 0);
        assert_eq!(count.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outliving_cell() {
        let count = cell(0);
        let sub = on(&count, |_| {});
        drop(count);
        sub.dispose();
    }

    #[test]
    fn test_reactive_watch() {
        let flag = cell(false);
        let calls = Rc::new(std::cell::Cell::new(0));
        let calls_clone = calls.clone();

        let reactive: &dyn Reactive = &flag;
        let sub = reactive.watch(Rc::new(move || calls_clone.set(calls_clone.get() + 1)));

        flag.set(true);
        assert_eq!(calls.get(), 1);

        drop(sub);
        flag.set(false);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_effect_reading_get_reruns_on_set() {
        let count = cell(1);
        let runs = Rc::new(std::cell::Cell::new(0));
        let seen = Rc::new(std::cell::Cell::new(0));

        let (c, r, s) = (count.clone(), runs.clone(), seen.clone());
        let _stop = spark_signals::effect(move || {
            r.set(r.get() + 1);
            s.set(c.get());
        });
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 1);
        assert_eq!(seen.get(), 1);

        count.set(7);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 2);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_write_inside_effect_does_not_track_target() {
        let source = cell(1);
        let mirror = cell(0);
        let runs = Rc::new(std::cell::Cell::new(0));

        let (src, dst, r) = (source.clone(), mirror.clone(), runs.clone());
        let _stop = spark_signals::effect(move || {
            r.set(r.get() + 1);
            dst.set(src.get() + 1);
        });
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 1);
        assert_eq!(mirror.peek(), 2);

        source.set(5);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 2);
        assert_eq!(mirror.peek(), 6);

        // An outside write to the mirror must not re-run the effect and
        // overwrite it.
        mirror.set(100);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 2);
        assert_eq!(mirror.peek(), 100);
    }

    #[test]
    fn test_update_inside_effect_does_not_track_target() {
        let trigger = cell(0);
        let total = cell(0);
        let runs = Rc::new(std::cell::Cell::new(0));

        let (t, acc, r) = (trigger.clone(), total.clone(), runs.clone());
        let _stop = spark_signals::effect(move || {
            r.set(r.get() + 1);
            let step = t.get();
            acc.update(|n| n + step);
        });
        spark_signals::flush_sync();

        trigger.set(3);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 2);
        assert_eq!(total.peek(), 3);

        total.set(50);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 2);
        assert_eq!(total.peek(), 50);
    }

    #[test]
    fn test_peek_does_not_track() {
        let count = cell(1);
        let runs = Rc::new(std::cell::Cell::new(0));

        let (c, r) = (count.clone(), runs.clone());
        let _stop = spark_signals::effect(move || {
            r.set(r.get() + 1);
            let _ = c.peek();
        });
        spark_signals::flush_sync();

        count.set(2);
        spark_signals::flush_sync();
        assert_eq!(runs.get(), 1);
    }
}
