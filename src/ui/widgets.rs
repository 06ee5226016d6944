//! Reusable UI widgets - interactive pieces without demo logic
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs
//! - **Widgets** (this module): Custom `Widget` implementations

pub mod page_strip;

pub use page_strip::{DragEvent, PageStrip, page_strip};
