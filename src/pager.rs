//! Pager protocol - the host side of the indicator
//!
//! A pager presents one page at a time and reports its scroll progress to
//! listeners. The indicator never owns a pager: it subscribes to its events
//! and reads the current item back when the scroll state changes.
//!
//! # Contents
//!
//! - [`Pager`] - What the indicator needs from a pager
//! - [`PageEvent`] / [`ScrollState`] - The event stream
//! - [`PageChangeEmitter`] / [`Subscription`] - Single-threaded event fan-out
//! - [`SwipePager`] - A framework-free horizontal pager model

mod events;
pub mod swipe;

pub use events::{PageChangeEmitter, PageEvent, ScrollState, Subscription, UnknownScrollState};
pub use swipe::SwipePager;

/// A paginated control that can drive an indicator
pub trait Pager {
    /// Index of the page the pager currently considers selected
    fn current_item(&self) -> usize;

    /// Number of pages provided by the adapter, `None` when no adapter is attached
    fn item_count(&self) -> Option<usize>;

    /// Register a new listener. Dropping the returned handle unregisters it.
    fn subscribe(&mut self) -> Subscription;
}
