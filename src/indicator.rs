//! Stick indicator - a row of dots with a stretchy highlight
//!
//! The indicator binds to a [`Pager`], follows its scroll events and paints
//! through any [`Surface`]. It is plain state with no UI framework behind it;
//! `crate::ui` adapts it to iced.
//!
//! # Contents
//!
//! - [`IndicatorConfig`] - Style (dot size, gap, radii, colors, alignment)
//! - [`Layout`] - Dot row geometry
//! - [`MotionState`] - Scroll state machine and active segment derivation
//! - [`Surface`] - Drawing seam

mod config;
mod layout;
mod motion;
mod render;

pub use config::{Alignment, ConfigError, IndicatorColor, IndicatorConfig, Insets};
pub use layout::{Layout, SizeConstraint, resolve_size};
pub use motion::{MotionState, Segment};
pub use render::{RoundRect, Surface};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use iced::Size;

use crate::pager::{PageEvent, Pager, Subscription};

/// Errors raised when binding to a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// The pager has no adapter, so there is nothing to count
    NoAdapter,
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NoAdapter => write!(f, "Pager doesn't have an adapter instance"),
        }
    }
}

impl std::error::Error for BindError {}

/// Link to the pager the indicator follows
struct PagerBinding {
    pager: Weak<RefCell<dyn Pager>>,
    /// Dropping this unsubscribes from the pager
    subscription: Subscription,
    point_count: usize,
}

impl std::fmt::Debug for PagerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerBinding")
            .field("alive", &(self.pager.strong_count() > 0))
            .field("point_count", &self.point_count)
            .finish()
    }
}

/// Page indicator state
#[derive(Debug)]
pub struct StickIndicator {
    config: IndicatorConfig,
    binding: Option<PagerBinding>,
    motion: MotionState,
    measured: Size,
}

impl Default for StickIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl StickIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            binding: None,
            motion: MotionState::default(),
            measured: Size::ZERO,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Replace the style
    pub fn set_config(&mut self, config: IndicatorConfig) {
        self.config = config;
    }

    /// Number of dots, as counted when the pager was bound
    pub fn point_count(&self) -> usize {
        self.binding.as_ref().map_or(0, |binding| binding.point_count)
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout::new(&self.config, self.point_count())
    }

    /// Follow `pager`, releasing the previously bound one first.
    ///
    /// Binding the pager that is already bound does nothing. A pager without
    /// an adapter is rejected and the current binding is kept.
    pub fn bind<P: Pager + 'static>(&mut self, pager: &Rc<RefCell<P>>) -> Result<(), BindError> {
        let already_bound = self
            .binding
            .as_ref()
            .is_some_and(|binding| std::ptr::addr_eq(binding.pager.as_ptr(), Rc::as_ptr(pager)));
        if already_bound {
            return Ok(());
        }

        let mut guard = pager.borrow_mut();
        let Some(point_count) = guard.item_count() else {
            tracing::warn!("Refusing to bind indicator: pager has no adapter");
            return Err(BindError::NoAdapter);
        };

        if self.binding.take().is_some() {
            tracing::debug!("Released previous pager subscription");
        }

        let subscription = guard.subscribe();
        let current_item = guard.current_item();
        drop(guard);

        let shared: Rc<RefCell<dyn Pager>> = pager.clone();
        self.binding = Some(PagerBinding {
            pager: Rc::downgrade(&shared),
            subscription,
            point_count,
        });
        self.motion = MotionState::at_rest(current_item);

        tracing::debug!(
            "Indicator bound to pager with {} pages, current page {}",
            point_count,
            current_item
        );
        Ok(())
    }

    /// Stop following the pager and forget all motion state
    pub fn detach(&mut self) {
        if self.binding.take().is_some() {
            tracing::debug!("Indicator detached from pager");
        }
        self.motion = MotionState::default();
    }

    /// Handle every event the pager queued since the last call.
    /// Returns true when a repaint is needed.
    pub fn process_events(&mut self) -> bool {
        let events = match &self.binding {
            Some(binding) => binding.subscription.drain(),
            None => return false,
        };

        let mut repaint = false;
        for event in &events {
            repaint |= self.handle_event(event);
        }
        repaint
    }

    /// Apply a single pager event. Returns true when a repaint is needed.
    pub fn handle_event(&mut self, event: &PageEvent) -> bool {
        if let PageEvent::ScrollStateChanged {
            state,
            current_item,
        } = event
        {
            tracing::debug!(
                "Pager scroll state changed to {:?} on page {}",
                state,
                current_item
            );
        }

        self.motion = self.motion.apply(event);
        matches!(event, PageEvent::Scrolled { .. })
    }

    /// Resolve the desired size against the parent's constraints and
    /// remember it for [`Self::render`]
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Size {
        let layout = self.layout();
        let size = Size::new(
            resolve_size(layout.desired_width(), width),
            resolve_size(layout.desired_height(), height),
        );
        self.measured = size;
        size
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Extent of the highlight, `None` when there is nothing to highlight
    pub fn active_segment(&self, measured_width: f32) -> Option<Segment> {
        let binding = self.binding.as_ref()?;
        let pager = binding.pager.upgrade()?;
        let live_count = pager.try_borrow().ok()?.item_count()?;
        if live_count == 0 || binding.point_count == 0 {
            return None;
        }
        Some(self.motion.segment(&self.layout(), measured_width))
    }

    /// Paint using the size from the last [`Self::measure`]
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.render_within(surface, self.measured.width);
    }

    /// Paint into an area `width` wide
    pub fn render_within<S: Surface + ?Sized>(&self, surface: &mut S, width: f32) {
        let layout = self.layout();
        render::draw(
            surface,
            &self.config,
            &layout,
            width,
            self.active_segment(width),
        );
    }
}
