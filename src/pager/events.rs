//! Page change events and their delivery
//!
//! Events are queued into a per-listener mailbox instead of being dispatched
//! through callbacks, so a listener can read the pager back while handling them
//! without re-entering a borrow the pager still holds.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Scroll state of a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// At rest on a page
    #[default]
    Idle,
    /// Following the user's finger or pointer
    Dragging,
    /// Animating towards a final position after a release or a programmatic jump
    Settling,
}

/// Error returned when converting an unknown integer scroll state code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownScrollState(pub i32);

impl std::fmt::Display for UnknownScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown scroll state code: {}", self.0)
    }
}

impl std::error::Error for UnknownScrollState {}

impl TryFrom<i32> for ScrollState {
    type Error = UnknownScrollState;

    /// Conventional pager codes: 0 idle, 1 dragging, 2 settling
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ScrollState::Idle),
            1 => Ok(ScrollState::Dragging),
            2 => Ok(ScrollState::Settling),
            other => Err(UnknownScrollState(other)),
        }
    }
}

/// An event reported by a pager to its listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Scroll progress: `position` is the page on the left edge of the viewport,
    /// `offset` how far (0..1) the next page has been pulled in.
    Scrolled {
        position: usize,
        offset: f32,
        offset_pixels: i32,
    },
    /// A new page became the selected one
    Selected(usize),
    /// The scroll state changed. `current_item` is the pager's current item
    /// at the moment of the change.
    ScrollStateChanged {
        state: ScrollState,
        current_item: usize,
    },
}

type Mailbox = RefCell<VecDeque<PageEvent>>;

/// Fans events out to every live subscription
#[derive(Debug, Default)]
pub struct PageChangeEmitter {
    listeners: Vec<Weak<Mailbox>>,
}

impl PageChangeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self) -> Subscription {
        let mailbox = Rc::new(RefCell::new(VecDeque::new()));
        self.listeners.push(Rc::downgrade(&mailbox));
        Subscription { mailbox }
    }

    /// Queue an event for every listener, forgetting the ones that were dropped
    pub fn emit(&mut self, event: PageEvent) {
        self.listeners.retain(|listener| match listener.upgrade() {
            Some(mailbox) => {
                mailbox.borrow_mut().push_back(event);
                true
            }
            None => false,
        });
    }

    /// Number of listeners still subscribed
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.strong_count() > 0)
            .count()
    }
}

/// A registered listener. Unsubscribes when dropped.
#[derive(Debug)]
pub struct Subscription {
    mailbox: Rc<Mailbox>,
}

impl Subscription {
    /// Take every event queued since the last call, oldest first
    pub fn drain(&self) -> Vec<PageEvent> {
        self.mailbox.borrow_mut().drain(..).collect()
    }
}
