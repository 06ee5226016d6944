//! iced adapter for the indicator
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs (the indicator itself)
//! - **Widgets** (`widgets`): Custom widgets (the draggable page strip)
//! - **Theme** (`theme`): Colors and styles

pub mod primitives;
pub mod theme;
pub mod widgets;
