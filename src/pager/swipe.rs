//! Horizontal swipe pager model
//!
//! Tracks the scroll position of a row of pages in page units, follows drags,
//! picks a target page on release and eases towards it on every frame tick.
//! Events are emitted in the same order a platform view pager reports them:
//!
//! ```text
//! Dragging -> Scrolled* -> Selected -> Settling -> Scrolled* -> Idle
//! ```

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use super::{PageChangeEmitter, PageEvent, Pager, ScrollState, Subscription};

/// Settle animation duration
const SETTLE_DURATION: Duration = Duration::from_millis(280);

/// Release velocity (pages per second) above which a drag counts as a fling
const MIN_FLING_VELOCITY: f32 = 1.5;

/// Truncation applied to the page offset on release when moving forward.
/// Moving backward uses `1.0 - FORWARD_TRUNCATOR`.
const FORWARD_TRUNCATOR: f32 = 0.4;

fn settle_easing() -> Easing {
    Easing::EASE_OUT.with_duration(SETTLE_DURATION)
}

#[derive(Debug)]
struct Settle {
    animation: Animated<f32>,
}

/// A swipeable pager
#[derive(Debug)]
pub struct SwipePager {
    /// Page count provided by the adapter, `None` without an adapter
    page_count: Option<usize>,
    current_item: usize,
    /// Scroll position in pages (1.5 = halfway between page 1 and page 2)
    scroll: f32,
    /// Width of one page, used to report pixel offsets
    page_width: f32,
    state: ScrollState,
    settle: Option<Settle>,
    emitter: PageChangeEmitter,
}

impl SwipePager {
    /// Create a pager with an adapter providing `page_count` pages
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count: Some(page_count),
            ..Self::without_adapter()
        }
    }

    /// Create a pager with no adapter attached
    pub fn without_adapter() -> Self {
        Self {
            page_count: None,
            current_item: 0,
            scroll: 0.0,
            page_width: 0.0,
            state: ScrollState::Idle,
            settle: None,
            emitter: PageChangeEmitter::new(),
        }
    }

    /// Attach, replace or remove the adapter
    pub fn set_adapter(&mut self, page_count: Option<usize>) {
        self.page_count = page_count;
        self.settle = None;
        let last = self.last_index();
        if self.current_item > last {
            self.current_item = last;
        }
        self.scroll = self.current_item as f32;
        self.set_state(ScrollState::Idle);
    }

    /// Width of one page in pixels
    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = width.max(0.0);
    }

    /// Scroll position in pages
    pub fn scroll_position(&self) -> f32 {
        self.scroll
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }

    /// Start following a drag. Interrupts a running settle animation.
    pub fn begin_drag(&mut self) {
        if self.page_count.unwrap_or(0) == 0 {
            return;
        }
        self.settle = None;
        self.set_state(ScrollState::Dragging);
    }

    /// Move by `delta` pages; positive values move towards higher indices
    pub fn drag_by(&mut self, delta: f32) {
        if self.state != ScrollState::Dragging {
            return;
        }
        let scroll = (self.scroll + delta).clamp(0.0, self.last_index() as f32);
        if scroll != self.scroll {
            self.scroll = scroll;
            self.emit_scrolled();
        }
    }

    /// Release the drag with a velocity in pages per second (positive = forward)
    pub fn end_drag(&mut self, velocity: f32) {
        if self.state != ScrollState::Dragging {
            return;
        }
        let target = self.target_page(velocity);
        tracing::debug!(
            "Drag released at {:.3} (velocity {:.2}), settling on page {}",
            self.scroll,
            velocity,
            target
        );
        self.move_to(target, true);
    }

    /// Select a page, animating towards it when `smooth` is set
    pub fn set_current_item(&mut self, index: usize, smooth: bool) {
        if self.page_count.unwrap_or(0) == 0 {
            return;
        }
        let target = index.min(self.last_index());
        self.move_to(target, smooth);
    }

    /// Advance the settle animation. Returns true while it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (value, finished) = match self.settle.as_mut() {
            Some(settle) => {
                settle.animation.tick(now);
                (*settle.animation.value(), !settle.animation.is_animating())
            }
            None => return false,
        };

        if finished {
            self.settle = None;
            self.scroll = self.current_item as f32;
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
            false
        } else {
            self.scroll = value.clamp(0.0, self.last_index() as f32);
            self.emit_scrolled();
            true
        }
    }

    /// Page picked on release: flings go one page in the fling direction,
    /// otherwise the offset is rounded with a bias towards the current item.
    fn target_page(&self, velocity: f32) -> usize {
        let position = self.scroll.floor();
        let offset = self.scroll - position;
        let position = position as usize;

        let target = if velocity.abs() > MIN_FLING_VELOCITY {
            if velocity > 0.0 { position + 1 } else { position }
        } else {
            let truncator = if position >= self.current_item {
                FORWARD_TRUNCATOR
            } else {
                1.0 - FORWARD_TRUNCATOR
            };
            position + (offset + truncator) as usize
        };

        target.min(self.last_index())
    }

    fn move_to(&mut self, target: usize, smooth: bool) {
        if target != self.current_item {
            self.current_item = target;
            self.emitter.emit(PageEvent::Selected(target));
        }

        let destination = target as f32;
        if !smooth || (self.scroll - destination).abs() < f32::EPSILON {
            self.settle = None;
            if self.scroll != destination {
                self.scroll = destination;
                self.emit_scrolled();
            }
            self.set_state(ScrollState::Idle);
            return;
        }

        let mut animation = Animated::transition(self.scroll, settle_easing());
        animation.update(destination.into());
        self.settle = Some(Settle { animation });
        self.set_state(ScrollState::Settling);
    }

    fn emit_scrolled(&mut self) {
        let position = self.scroll.floor();
        let offset = self.scroll - position;
        self.emitter.emit(PageEvent::Scrolled {
            position: position as usize,
            offset,
            offset_pixels: (offset * self.page_width).round() as i32,
        });
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state != state {
            self.state = state;
            self.emitter.emit(PageEvent::ScrollStateChanged {
                state,
                current_item: self.current_item,
            });
        }
    }

    fn last_index(&self) -> usize {
        self.page_count.unwrap_or(0).saturating_sub(1)
    }
}

impl Pager for SwipePager {
    fn current_item(&self) -> usize {
        self.current_item
    }

    fn item_count(&self) -> Option<usize> {
        self.page_count
    }

    fn subscribe(&mut self) -> Subscription {
        self.emitter.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(pager: &mut SwipePager) {
        let mut now = Instant::now();
        for _ in 0..10 {
            now += Duration::from_secs(1);
            if !pager.tick(now) {
                return;
            }
        }
        panic!("settle animation did not finish");
    }

    fn states(events: &[PageEvent]) -> Vec<ScrollState> {
        events
            .iter()
            .filter_map(|event| match event {
                PageEvent::ScrollStateChanged { state, .. } => Some(*state),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_drag_past_half_selects_next_page() {
        let mut pager = SwipePager::new(3);
        let sub = pager.subscribe();

        pager.begin_drag();
        pager.drag_by(0.3);
        pager.drag_by(0.4);
        pager.end_drag(0.0);
        assert_eq!(pager.current_item(), 1);
        assert_eq!(pager.state(), ScrollState::Settling);

        settle(&mut pager);
        assert_eq!(pager.state(), ScrollState::Idle);
        assert_eq!(pager.scroll_position(), 1.0);

        let events = sub.drain();
        assert_eq!(
            states(&events),
            vec![
                ScrollState::Dragging,
                ScrollState::Settling,
                ScrollState::Idle
            ]
        );
        let selected = events
            .iter()
            .position(|e| *e == PageEvent::Selected(1))
            .expect("page selected");
        let settling = events
            .iter()
            .position(|e| {
                matches!(
                    e,
                    PageEvent::ScrollStateChanged {
                        state: ScrollState::Settling,
                        ..
                    }
                )
            })
            .expect("settling");
        assert!(selected < settling, "Selected must precede Settling");
        assert!(matches!(
            events[events.len() - 2],
            PageEvent::Scrolled {
                position: 1,
                offset,
                ..
            } if offset == 0.0
        ));
    }

    #[test]
    fn test_state_changes_carry_item_at_emission() {
        let mut pager = SwipePager::new(3);
        let sub = pager.subscribe();

        pager.begin_drag();
        pager.drag_by(0.7);
        pager.end_drag(0.0);
        settle(&mut pager);

        let changes: Vec<(ScrollState, usize)> = sub
            .drain()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::ScrollStateChanged {
                    state,
                    current_item,
                } => Some((state, current_item)),
                _ => None,
            })
            .collect();
        assert_eq!(
            changes,
            vec![
                (ScrollState::Dragging, 0),
                (ScrollState::Settling, 1),
                (ScrollState::Idle, 1)
            ]
        );
    }

    #[test]
    fn test_short_drag_settles_back() {
        let mut pager = SwipePager::new(3);
        let sub = pager.subscribe();

        pager.begin_drag();
        pager.drag_by(0.3);
        pager.end_drag(0.0);
        assert_eq!(pager.current_item(), 0);
        settle(&mut pager);

        let events = sub.drain();
        assert!(!events.iter().any(|e| matches!(e, PageEvent::Selected(_))));
        assert_eq!(pager.scroll_position(), 0.0);
    }

    #[test]
    fn test_backward_drag_truncation() {
        let mut pager = SwipePager::new(3);
        pager.set_current_item(1, false);

        pager.begin_drag();
        pager.drag_by(-0.5);
        pager.end_drag(0.0);
        assert_eq!(pager.current_item(), 1, "Half a page back is not enough");
        settle(&mut pager);

        pager.begin_drag();
        pager.drag_by(-0.7);
        pager.end_drag(0.0);
        assert_eq!(pager.current_item(), 0);
    }

    #[test]
    fn test_fling_moves_one_page() {
        let mut pager = SwipePager::new(3);
        pager.begin_drag();
        pager.drag_by(0.1);
        pager.end_drag(4.0);
        assert_eq!(pager.current_item(), 1);
    }

    #[test]
    fn test_drag_clamps_to_edges() {
        let mut pager = SwipePager::new(2);
        pager.begin_drag();
        pager.drag_by(-0.5);
        assert_eq!(pager.scroll_position(), 0.0);
        pager.drag_by(5.0);
        assert_eq!(pager.scroll_position(), 1.0);
    }

    #[test]
    fn test_jump_without_animation() {
        let mut pager = SwipePager::new(3);
        pager.set_page_width(200.0);
        let sub = pager.subscribe();

        pager.set_current_item(2, false);
        assert_eq!(pager.state(), ScrollState::Idle);
        assert_eq!(
            sub.drain(),
            vec![
                PageEvent::Selected(2),
                PageEvent::Scrolled {
                    position: 2,
                    offset: 0.0,
                    offset_pixels: 0
                }
            ]
        );
    }

    #[test]
    fn test_no_adapter_ignores_input() {
        let mut pager = SwipePager::without_adapter();
        let sub = pager.subscribe();

        pager.begin_drag();
        pager.drag_by(0.5);
        pager.end_drag(0.0);

        assert_eq!(pager.item_count(), None);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_offset_pixels_follow_page_width() {
        let mut pager = SwipePager::new(3);
        pager.set_page_width(400.0);
        let sub = pager.subscribe();

        pager.begin_drag();
        pager.drag_by(0.25);

        let events = sub.drain();
        assert_eq!(
            events.last(),
            Some(&PageEvent::Scrolled {
                position: 0,
                offset: 0.25,
                offset_pixels: 100
            })
        );
    }
}
