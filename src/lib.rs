//! Stick indicator - a stretchy page indicator for swipeable pagers
//!
//! The highlight follows the pager's scroll progress, stretching towards the
//! next dot while a page is dragged and catching up while it settles.
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use stick_indicator::indicator::{IndicatorConfig, StickIndicator};
//! use stick_indicator::pager::SwipePager;
//!
//! let pager = Rc::new(RefCell::new(SwipePager::new(3)));
//! let mut indicator = StickIndicator::new(IndicatorConfig::default());
//! indicator.bind(&pager).expect("pager has an adapter");
//!
//! pager.borrow_mut().begin_drag();
//! pager.borrow_mut().drag_by(0.4);
//! if indicator.process_events() {
//!     // repaint
//! }
//! ```

pub mod indicator;
pub mod pager;
pub mod ui;

pub use indicator::{BindError, IndicatorConfig, StickIndicator};
pub use pager::{PageEvent, Pager, ScrollState, SwipePager};
