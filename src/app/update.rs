//! Message update handlers

use iced::Task;
use stick_indicator::indicator::SizeConstraint;
use stick_indicator::pager::Pager;
use stick_indicator::ui::widgets::DragEvent;

use super::{App, Message};

impl App {
    /// Handle a message, then let the indicator catch up with the pager
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self
            .handle_pager(&message)
            .or_else(|| self.handle_window(&message))
            .unwrap_or_else(Task::none);

        if self.indicator.process_events() {
            tracing::trace!(
                "Indicator repaint at scroll {:.3}",
                self.pager.borrow().scroll_position()
            );
        }
        task
    }

    fn handle_pager(&mut self, message: &Message) -> Option<Task<Message>> {
        let mut pager = self.pager.borrow_mut();
        match message {
            Message::Drag(DragEvent::Started) => pager.begin_drag(),
            Message::Drag(DragEvent::Moved { delta }) => pager.drag_by(*delta),
            Message::Drag(DragEvent::Released { velocity }) => pager.end_drag(*velocity),
            Message::PreviousPage => {
                let target = pager.current_item().saturating_sub(1);
                pager.set_current_item(target, true);
            }
            Message::NextPage => {
                let target = pager.current_item() + 1;
                pager.set_current_item(target, true);
            }
            Message::AnimationTick(now) => {
                pager.tick(*now);
            }
            _ => return None,
        }
        Some(Task::none())
    }

    fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.pager.borrow_mut().set_page_width(size.width);
                self.indicator.measure(
                    SizeConstraint::Exactly(size.width),
                    SizeConstraint::Unspecified,
                );
                Some(Task::none())
            }
            _ => None,
        }
    }
}
