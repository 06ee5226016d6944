//! Application view rendering

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};
use stick_indicator::pager::Pager;
use stick_indicator::ui::primitives::view_indicator;
use stick_indicator::ui::{theme, widgets};

use super::App;
use super::message::Message;

impl App {
    /// Build the view: page strip on top, indicator and navigation below
    pub fn view(&self) -> Element<'_, Message> {
        let (scroll, current, count) = {
            let pager = self.pager.borrow();
            (
                pager.scroll_position(),
                pager.current_item(),
                pager.item_count().unwrap_or(0),
            )
        };

        let strip = widgets::page_strip(&self.pages, scroll, Message::Drag)
            .width(Fill)
            .height(Fill);

        let indicator = container(view_indicator(&self.indicator)).padding([20, 0]);

        let previous = button(text("Previous").size(14))
            .padding([8, 16])
            .style(theme::nav_button)
            .on_press_maybe((current > 0).then_some(Message::PreviousPage));
        let next = button(text("Next").size(14))
            .padding([8, 16])
            .style(theme::nav_button)
            .on_press_maybe((current + 1 < count).then_some(Message::NextPage));

        let navigation = row![previous, Space::new().width(Fill), next]
            .align_y(Alignment::Center)
            .padding([0, 16]);

        let content = column![strip, indicator, navigation].padding(iced::Padding {
            bottom: 16.0,
            ..Default::default()
        });

        container(content)
            .width(Fill)
            .height(Fill)
            .style(|theme| container::Style {
                background: Some(theme::background(theme).into()),
                ..Default::default()
            })
            .into()
    }
}
