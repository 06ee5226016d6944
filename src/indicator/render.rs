//! Drawing the dot row onto a surface

use super::config::{IndicatorColor, IndicatorConfig};
use super::layout::Layout;
use super::motion::Segment;

/// A rectangle with elliptical corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl RoundRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Something the indicator can paint on
pub trait Surface {
    fn fill_round_rect(&mut self, rect: RoundRect, color: IndicatorColor);
}

/// Paint every inactive dot, then the active segment on top of them
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    config: &IndicatorConfig,
    layout: &Layout<'_>,
    measured_width: f32,
    active: Option<Segment>,
) {
    let top = config.padding.top;
    let bottom = top + config.dot_height;
    let half = config.dot_width / 2.0;

    for index in 0..layout.point_count() {
        let center = layout.dot_center(index, measured_width);
        surface.fill_round_rect(
            RoundRect {
                left: center - half,
                top,
                right: center + half,
                bottom,
                radius_x: config.radius_x,
                radius_y: config.radius_y,
            },
            config.inactive_color,
        );
    }

    if let Some(segment) = active {
        surface.fill_round_rect(
            RoundRect {
                left: segment.left,
                top,
                right: segment.right,
                bottom,
                radius_x: config.radius_x,
                radius_y: config.radius_y,
            },
            config.active_color,
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Surface that records every call
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub calls: Vec<(RoundRect, IndicatorColor)>,
    }

    impl Surface for Recorder {
        fn fill_round_rect(&mut self, rect: RoundRect, color: IndicatorColor) {
            self.calls.push((rect, color));
        }
    }

    #[test]
    fn test_inactive_dots_then_active() {
        let config = IndicatorConfig::default().radius(2.0, 1.0);
        let layout = Layout::new(&config, 3);
        let mut recorder = Recorder::default();
        let active = Segment {
            left: 65.0,
            right: 85.0,
        };

        draw(&mut recorder, &config, &layout, 200.0, Some(active));

        assert_eq!(recorder.calls.len(), 4);
        for (rect, color) in &recorder.calls[..3] {
            assert_eq!(*color, config.inactive_color);
            assert_eq!(rect.width(), 20.0);
            assert_eq!(rect.height(), 4.0);
            assert_eq!((rect.radius_x, rect.radius_y), (2.0, 1.0));
        }
        let (rect, color) = recorder.calls[3];
        assert_eq!(color, config.active_color);
        assert_eq!((rect.left, rect.right), (65.0, 85.0));
    }

    #[test]
    fn test_dots_sit_below_top_padding() {
        let config = IndicatorConfig::default().padding(crate::indicator::Insets::all(6.0));
        let layout = Layout::new(&config, 1);
        let mut recorder = Recorder::default();

        draw(&mut recorder, &config, &layout, 100.0, None);

        let (rect, _) = recorder.calls[0];
        assert_eq!(rect.top, 6.0);
        assert_eq!(rect.bottom, 10.0);
    }

    #[test]
    fn test_nothing_to_draw() {
        let config = IndicatorConfig::default();
        let layout = Layout::new(&config, 0);
        let mut recorder = Recorder::default();

        draw(&mut recorder, &config, &layout, 100.0, None);
        assert!(recorder.calls.is_empty());
    }
}
