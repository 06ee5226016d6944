//! Page strip widget
//!
//! Draws a horizontal row of full-size pages shifted by a scroll position and
//! turns pointer drags into page-unit deltas. It holds no pager state itself:
//! the owner feeds the scroll position in and applies the published drags.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::time::{Duration, Instant};
use iced::{Background, Color, Element, Length, Rectangle, Size, Theme};

/// Weight of the newest sample in the release velocity estimate
const VELOCITY_SMOOTHING: f32 = 0.6;

/// Holding still this long before releasing cancels the fling
const VELOCITY_TIMEOUT: Duration = Duration::from_millis(100);

/// Drag gesture reported by the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer pressed on the strip
    Started,
    /// Pointer moved by `delta` pages (positive = towards later pages)
    Moved { delta: f32 },
    /// Pointer released, `velocity` in pages per second
    Released { velocity: f32 },
}

/// A horizontally scrolling strip of pages
pub struct PageStrip<'a, Message> {
    pages: &'a [Color],
    scroll: f32,
    on_drag: Box<dyn Fn(DragEvent) -> Message + 'a>,
    width: Length,
    height: Length,
}

impl<'a, Message> PageStrip<'a, Message> {
    /// Creates a strip showing `pages` scrolled to `scroll` (in pages)
    pub fn new<F>(pages: &'a [Color], scroll: f32, on_drag: F) -> Self
    where
        F: Fn(DragEvent) -> Message + 'a,
    {
        Self {
            pages,
            scroll,
            on_drag: Box::new(on_drag),
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// State for the page strip
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    is_dragging: bool,
    last_x: f32,
    last_move: Option<Instant>,
    velocity: f32,
}

impl State {
    fn press(&mut self, x: f32, now: Instant) {
        self.is_dragging = true;
        self.last_x = x;
        self.last_move = Some(now);
        self.velocity = 0.0;
    }

    /// Record a move to `x` that covered `delta` pages
    fn track(&mut self, x: f32, delta: f32, now: Instant) {
        if let Some(last) = self.last_move {
            let elapsed = now.duration_since(last).as_secs_f32();
            if elapsed > 0.0 {
                self.velocity = VELOCITY_SMOOTHING * (delta / elapsed)
                    + (1.0 - VELOCITY_SMOOTHING) * self.velocity;
            }
        }
        self.last_x = x;
        self.last_move = Some(now);
    }

    /// End the drag, returning the release velocity in pages per second
    fn release(&mut self, now: Instant) -> f32 {
        self.is_dragging = false;
        match self.last_move {
            Some(last) if now.duration_since(last) <= VELOCITY_TIMEOUT => self.velocity,
            _ => 0.0,
        }
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for PageStrip<'a, Message>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits
            .width(self.width)
            .height(self.height)
            .resolve(self.width, self.height, Size::ZERO);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.press(position.x, Instant::now());
                    shell.publish((self.on_drag)(DragEvent::Started));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.is_dragging && bounds.width > 0.0 {
                    let delta = (state.last_x - position.x) / bounds.width;
                    state.track(position.x, delta, Instant::now());
                    shell.publish((self.on_drag)(DragEvent::Moved { delta }));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    let velocity = state.release(Instant::now());
                    shell.publish((self.on_drag)(DragEvent::Released { velocity }));
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            for (index, color) in self.pages.iter().enumerate() {
                let x = bounds.x + (index as f32 - self.scroll) * bounds.width;
                if x + bounds.width <= bounds.x || x >= bounds.x + bounds.width {
                    continue;
                }
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: Rectangle {
                            x,
                            y: bounds.y,
                            width: bounds.width,
                            height: bounds.height,
                        },
                        ..Default::default()
                    },
                    Background::Color(*color),
                );
            }
        });
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<PageStrip<'a, Message>> for Element<'a, Message, Theme>
where
    Message: Clone + 'a,
{
    fn from(strip: PageStrip<'a, Message>) -> Self {
        Element::new(strip)
    }
}

/// Creates a new page strip
pub fn page_strip<'a, Message>(
    pages: &'a [Color],
    scroll: f32,
    on_drag: impl Fn(DragEvent) -> Message + 'a,
) -> PageStrip<'a, Message> {
    PageStrip::new(pages, scroll, on_drag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_release_keeps_velocity() {
        let start = Instant::now();
        let mut state = State::default();
        state.press(300.0, start);
        state.track(240.0, 0.2, start + Duration::from_millis(50));

        let velocity = state.release(start + Duration::from_millis(60));
        assert!((velocity - 2.4).abs() < 1e-3);
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_pause_before_release_cancels_fling() {
        let start = Instant::now();
        let mut state = State::default();
        state.press(300.0, start);
        state.track(240.0, 0.2, start + Duration::from_millis(50));

        let velocity = state.release(start + Duration::from_millis(400));
        assert_eq!(velocity, 0.0);
    }
}
