//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No demo logic**: Primitives must not import from the demo application
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own rendering
//!
//! # Contents
//!
//! - [`IndicatorCanvas`] - Stick indicator drawn on a Canvas

pub mod indicator_canvas;

pub use indicator_canvas::{IndicatorCanvas, round_rect_path, view_indicator};
