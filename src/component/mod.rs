//! Components
//!
//! The boundary between models and the UI framework that renders them.
//!
//! - [`Component`] - Lifecycle contract the framework drives
//! - [`Updater`] - The "please re-render me" trigger handed to a component
//! - [`Model`] / [`Fields`] - Plain stateful objects and their reactive fields
//! - [`bond`] - Adapter turning a model constructor into a component
//! - [`mount`] - Minimal host that drives the lifecycle
//!
//! # Data Flow
//!
//! ```text
//! Cell::set → Subscription listener → Updater::request_render → Mounted::tick → render + did_update
//! ```

mod bond;
mod model;
mod mount;

use std::fmt;
use std::rc::Rc;

pub use bond::{bond, Bond};
pub use model::{is_reserved, Field, FieldKind, Fields, Model, RESERVED};
pub use mount::{mount, Mounted};

// =============================================================================
// Framework Contract
// =============================================================================

/// Lifecycle hooks a host invokes on a component.
///
/// Order: `render`, `did_mount`, then any number of (`render`, `did_update`)
/// pairs, then `will_unmount` once.
pub trait Component {
    type Output;

    fn render(&self) -> Self::Output;

    fn did_mount(&mut self) {}

    fn did_update(&mut self) {}

    fn will_unmount(&mut self) {}
}

/// Re-render trigger owned by one mounted component.
///
/// Calling [`request_render`](Self::request_render) is the equivalent of an
/// empty state update: it carries no data, the next render reads live values.
#[derive(Clone)]
pub struct Updater {
    request: Rc<dyn Fn()>,
}

impl Updater {
    pub fn new(request: impl Fn() + 'static) -> Self {
        Self {
            request: Rc::new(request),
        }
    }

    /// Updater that drops every request. Useful for static rendering.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn request_render(&self) {
        (self.request)();
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Updater")
    }
}
