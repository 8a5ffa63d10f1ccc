//! Model capability trait and reactive field registration.

use crate::reactive::Reactive;

/// Names that are lifecycle hooks, never reactive fields.
pub const RESERVED: [&str; 4] = ["render", "init", "update", "dispose"];

/// True for the four lifecycle names.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// A plain stateful object bound to a component by [`bond`](super::bond).
///
/// Only `render` is required. The other hooks default to no-ops.
pub trait Model: 'static {
    type Output;

    fn render(&self) -> Self::Output;

    /// The model's fields. Cells registered here drive re-renders.
    ///
    /// Read once, when the adapter is constructed.
    fn fields(&self) -> Fields<'_> {
        Fields::new()
    }

    /// Runs once, after the first render.
    fn init(&mut self) {}

    /// Runs after every re-render.
    fn update(&mut self) {}

    /// Runs first on unmount, before subscriptions are released.
    fn dispose(&mut self) {}
}

/// What a field holds.
pub enum FieldKind<'a> {
    Reactive(&'a dyn Reactive),
    Plain,
}

pub struct Field<'a> {
    pub name: &'static str,
    pub kind: FieldKind<'a>,
}

impl Field<'_> {
    pub fn is_reactive(&self) -> bool {
        matches!(self.kind, FieldKind::Reactive(_))
    }
}

/// Ordered list of a model's fields.
///
/// ```ignore
/// fn fields(&self) -> Fields<'_> {
///     Fields::new().cell("count", &self.count).plain("label")
/// }
/// ```
#[derive(Default)]
pub struct Fields<'a> {
    entries: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reactive field.
    pub fn cell(mut self, name: &'static str, cell: &'a dyn Reactive) -> Self {
        self.entries.push(Field {
            name,
            kind: FieldKind::Reactive(cell),
        });
        self
    }

    /// Register a plain field.
    pub fn plain(mut self, name: &'static str) -> Self {
        self.entries.push(Field {
            name,
            kind: FieldKind::Plain,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field<'a>> {
        self.entries.iter()
    }

    /// Reactive fields the adapter subscribes to: cells under non-reserved names.
    pub fn reactive(&self) -> impl Iterator<Item = (&'static str, &'a dyn Reactive)> + '_ {
        self.entries.iter().filter_map(|field| match field.kind {
            FieldKind::Reactive(cell) if !is_reserved(field.name) => Some((field.name, cell)),
            _ => None,
        })
    }
}
