//! Main application module

mod message;
mod update;
mod view;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use iced::{Color, Task, Theme};
use stick_indicator::indicator::{IndicatorConfig, SizeConstraint, StickIndicator};
use stick_indicator::pager::{Pager, SwipePager};
use stick_indicator::ui::theme;

pub use message::Message;

/// Initial window width
pub const WINDOW_WIDTH: f32 = 480.0;
/// Initial window height
pub const WINDOW_HEIGHT: f32 = 640.0;

/// Demo application state
pub struct App {
    /// Shared with the indicator, which only keeps a weak reference
    pager: Rc<RefCell<SwipePager>>,
    indicator: StickIndicator,
    /// Background of each page
    pages: Vec<Color>,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config = match style_from_args() {
            Ok(Some(config)) => config,
            Ok(None) => IndicatorConfig::load(),
            Err(e) => {
                tracing::warn!("{:#}, using the saved style", e);
                IndicatorConfig::load()
            }
        };

        let pages = vec![theme::PAGE_BLUE, theme::PAGE_YELLOW, theme::PAGE_GREEN];
        let pager = Rc::new(RefCell::new(SwipePager::new(pages.len())));
        pager.borrow_mut().set_page_width(WINDOW_WIDTH);

        let mut indicator = StickIndicator::new(config);
        if let Err(e) = indicator.bind(&pager) {
            tracing::error!("Failed to bind indicator: {}", e);
        }
        indicator.measure(
            SizeConstraint::Exactly(WINDOW_WIDTH),
            SizeConstraint::Unspecified,
        );

        let app = Self {
            pager,
            indicator,
            pages,
        };
        (app, Task::none())
    }

    /// Window title with the current page
    pub fn title(&self) -> String {
        let pager = self.pager.borrow();
        format!(
            "Stick Indicator - Page {} of {}",
            pager.current_item() + 1,
            pager.item_count().unwrap_or(0)
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Frame ticks while the pager settles, and window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let animation_sub = if self.pager.borrow().is_settling() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, resize_sub])
    }
}

/// Style file given as the first command line argument, if any
fn style_from_args() -> anyhow::Result<Option<IndicatorConfig>> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return Ok(None);
    };
    let config = IndicatorConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load indicator style from {}", path.display()))?;
    tracing::info!("Loaded indicator style from {}", path.display());
    Ok(Some(config))
}
