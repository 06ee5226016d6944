//! Motion model of the active segment
//!
//! The segment has a trailing edge that follows the scroll offset slowly and a
//! leading edge that runs ahead of it, so it stretches towards the next dot and
//! shrinks back once it arrives. When the pager starts settling, the trailing
//! edge curve is re-based on where the drag left it so the hand-over does not
//! jump.

use super::layout::Layout;
use crate::pager::{PageEvent, ScrollState};

/// Leading edge speed while dragging or idle
const OFFSET_MULTIPLIER_DRAG: f32 = 1.2;
/// Leading edge speed while settling
const OFFSET_MULTIPLIER_SETTLING: f32 = 1.4;
/// Trailing edge speed while dragging or idle
const OFFSET_MULTIPLIER_NORMAL: f32 = 0.30;

/// Largest page offset below 1.0
const MAX_PAGE_OFFSET: f32 = 1.0 - f32::EPSILON;

/// Linear map of `value` from `[a1, a2]` onto `[b1, b2]`.
/// A collapsed source range maps everything onto `b2`.
fn map_value(value: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    let span = a2 - a1;
    if span.abs() < f32::EPSILON {
        return b2;
    }
    b1 + (value - a1) * (b2 - b1) / span
}

/// Edge offsets derived from the motion state, in units of one dot step
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Offsets {
    /// Moving towards a higher index (or at rest)
    pub(crate) is_forward: bool,
    /// Progress towards the destination page
    pub(crate) relative: f32,
    /// Trailing edge offset
    pub(crate) normal: f32,
    /// Leading edge offset
    pub(crate) larger: f32,
}

/// Horizontal extent of the active segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub left: f32,
    pub right: f32,
}

impl Segment {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Everything the indicator knows about the pager's motion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Page on the left edge of the pager viewport
    pub drag_page: usize,
    /// How far the next page is pulled in, in `[0, 1)`
    pub page_offset: f32,
    /// Page selected when the current gesture started or the last scroll ended
    pub selected_page: usize,
    pub state: ScrollState,
    current_normal_offset: f32,
    current_relative_offset: f32,
    settle_anchor_offset: f32,
    settle_anchor_normal: f32,
}

impl MotionState {
    /// Idle on `page`
    pub fn at_rest(page: usize) -> Self {
        Self {
            drag_page: page,
            selected_page: page,
            ..Self::default()
        }
    }

    /// State after `event`
    pub fn apply(mut self, event: &PageEvent) -> Self {
        match *event {
            PageEvent::Scrolled {
                position, offset, ..
            } => {
                self.drag_page = position;
                self.page_offset = if offset.is_finite() {
                    offset.clamp(0.0, MAX_PAGE_OFFSET)
                } else {
                    0.0
                };
                let offsets = self.offsets();
                self.current_relative_offset = offsets.relative;
                self.current_normal_offset = offsets.normal;
            }
            PageEvent::Selected(_) => {}
            PageEvent::ScrollStateChanged {
                state,
                current_item,
            } => {
                match state {
                    ScrollState::Idle | ScrollState::Dragging => {
                        self.selected_page = current_item;
                        self.current_normal_offset = 0.0;
                        self.current_relative_offset = 0.0;
                    }
                    ScrollState::Settling => {
                        self.settle_anchor_normal = self.current_normal_offset;
                        self.settle_anchor_offset = self.current_relative_offset;
                    }
                }
                self.state = state;
            }
        }
        self
    }

    /// Derive the edge offsets for the current state
    pub(crate) fn offsets(&self) -> Offsets {
        let is_forward = (self.selected_page as i64 - self.drag_page as i64) < 1;
        let relative = if is_forward {
            self.page_offset
        } else {
            1.0 - self.page_offset
        };

        let settling = self.state == ScrollState::Settling;
        let normal = if settling {
            map_value(
                relative,
                self.settle_anchor_offset,
                1.0,
                self.settle_anchor_normal,
                1.0,
            )
            .max(0.0)
        } else {
            relative * OFFSET_MULTIPLIER_NORMAL
        };

        let multiplier = if settling {
            OFFSET_MULTIPLIER_SETTLING
        } else {
            OFFSET_MULTIPLIER_DRAG
        };
        let larger = (relative * multiplier).min(1.0);

        Offsets {
            is_forward,
            relative,
            normal,
            larger,
        }
    }

    /// Horizontal extent of the active segment over `layout`
    pub fn segment(&self, layout: &Layout<'_>, measured_width: f32) -> Segment {
        let offsets = self.offsets();
        let anchor_page = if offsets.is_forward {
            self.drag_page
        } else {
            self.selected_page
        };
        let center = layout.dot_center(anchor_page, measured_width);
        let half = layout.dot_width() / 2.0;

        let normal = layout.step() * offsets.normal;
        let large = layout.step() * offsets.larger;

        if offsets.is_forward {
            Segment {
                left: center - half + normal,
                right: center + half + large,
            }
        } else {
            Segment {
                left: center - half - large,
                right: center + half - normal,
            }
        }
    }

    /// Trailing edge offset recorded at the last scroll event
    pub fn current_normal_offset(&self) -> f32 {
        self.current_normal_offset
    }

    /// `(relative offset, normal offset)` captured when settling began
    pub fn settle_anchor(&self) -> (f32, f32) {
        (self.settle_anchor_offset, self.settle_anchor_normal)
    }
}
