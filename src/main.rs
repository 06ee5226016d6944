//! Stick indicator demo - three colored pages in a swipeable pager
//! with the indicator underneath
//!
//! Usage: `stick-indicator-demo [STYLE.json]`

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(app::WINDOW_WIDTH, app::WINDOW_HEIGHT))
        .antialiasing(true)
        .run()
}
