//! Binding adapter - wraps a [`Model`] in a [`Component`].
//!
//! On construction the adapter scans the model's fields once and subscribes
//! to every reactive one. Each change notification requests exactly one
//! re-render. On unmount the model's `dispose` runs first, then every
//! subscription is released exactly once.

use std::mem;
use std::rc::Rc;

use crate::reactive::Subscription;

use super::{Component, Model, Updater};

pub struct Bond<M: Model> {
    model: M,
    subscriptions: Vec<Subscription>,
    unmounted: bool,
}

impl<M: Model> Bond<M> {
    /// Bind `model`, routing its cell notifications to `updater`.
    pub fn new(model: M, updater: Updater) -> Self {
        let subscriptions = {
            let fields = model.fields();
            let subscriptions: Vec<Subscription> = fields
                .reactive()
                .map(|(name, cell)| {
                    tracing::trace!(field = name, "binding reactive field");
                    let updater = updater.clone();
                    cell.watch(Rc::new(move || updater.request_render()))
                })
                .collect();
            subscriptions
        };

        Self {
            model,
            subscriptions,
            unmounted: false,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Live subscriptions held by this adapter.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl<M: Model> Component for Bond<M> {
    type Output = M::Output;

    fn render(&self) -> M::Output {
        self.model.render()
    }

    fn did_mount(&mut self) {
        self.model.init();
    }

    fn did_update(&mut self) {
        self.model.update();
    }

    fn will_unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;

        self.model.dispose();
        for subscription in mem::take(&mut self.subscriptions) {
            subscription.dispose();
        }
    }
}

/// Turn a model constructor into a component constructor.
///
/// The returned function builds the model once from `props` and binds it.
///
/// ```ignore
/// let counter = bond(|start: i32| Counter { count: cell(start) });
/// let mounted = mount(|updater| counter(0, updater));
/// ```
pub fn bond<P, M, F>(ctor: F) -> impl Fn(P, Updater) -> Bond<M>
where
    M: Model,
    F: Fn(P) -> M,
{
    move |props, updater| Bond::new(ctor(props), updater)
}
