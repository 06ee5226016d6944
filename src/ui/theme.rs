//! Theme for the demo application
//! Supports both dark and light modes

use iced::color;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Page backgrounds, one per demo page
pub const PAGE_BLUE: Color = color!(0x3f51b5);
pub const PAGE_YELLOW: Color = color!(0xffc107);
pub const PAGE_GREEN: Color = color!(0x4caf50);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Pill-shaped page navigation button
pub fn nav_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.15))),
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.3))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.45))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: Color {
                a: 0.4,
                ..base.text_color
            },
            ..base
        },
        _ => base,
    }
}
