//! Application messages

use iced::Size;
use iced::time::Instant;
use stick_indicator::ui::widgets::DragEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Pager ============
    /// Drag gesture on the page strip
    Drag(DragEvent),
    /// Go to the previous page with a settle animation
    PreviousPage,
    /// Go to the next page with a settle animation
    NextPage,

    // ============ Window ============
    /// Animation frame while the pager settles
    AnimationTick(Instant),
    /// Window was resized
    WindowResized(Size),
}
