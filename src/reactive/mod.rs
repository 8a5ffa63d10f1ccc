//! Reactive Cells
//!
//! A [`Cell`] holds one value and notifies its listeners whenever the value
//! is replaced. Storage is a spark-signals [`Signal`](spark_signals::Signal),
//! so reads through [`Cell::get`] also participate in `effect`/`derived`
//! dependency tracking.
//!
//! # API
//!
//! - `cell(initial)` - Create a cell
//! - `on(&cell, listener)` - Subscribe, returning a [`Subscription`]
//! - `Subscription::dispose()` - Release the listener
//! - [`Reactive`] - Type-erased "this value is a cell" capability
//!
//! # Example
//!
//! ```ignore
//! use wave_bond::reactive::{cell, on};
//!
//! let count = cell(0);
//! let sub = on(&count, |n| println!("count = {n}"));
//! count.set(1); // prints "count = 1"
//! sub.dispose();
//! count.set(2); // silent
//! ```

mod cell;
mod subscription;

pub use cell::{cell, on, Cell, Reactive};
pub use subscription::Subscription;
