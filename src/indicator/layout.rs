//! Dot row geometry
//!
//! Pure arithmetic over the style and the number of dots. Nothing here knows
//! about pagers or drawing.

use super::config::{Alignment, IndicatorConfig};

/// Size constraint handed down by the parent layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeConstraint {
    /// The parent imposes this exact size
    Exactly(f32),
    /// Any size up to this limit
    AtMost(f32),
    /// No constraint
    #[default]
    Unspecified,
}

/// Pick a size honoring the constraint, preferring `desired`
pub fn resolve_size(desired: f32, constraint: SizeConstraint) -> f32 {
    match constraint {
        SizeConstraint::Exactly(size) => size,
        SizeConstraint::AtMost(limit) => desired.min(limit),
        SizeConstraint::Unspecified => desired,
    }
}

/// Geometry of a row of `point_count` dots
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    config: &'a IndicatorConfig,
    point_count: usize,
}

impl<'a> Layout<'a> {
    pub fn new(config: &'a IndicatorConfig, point_count: usize) -> Self {
        Self {
            config,
            point_count,
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn dot_width(&self) -> f32 {
        self.config.dot_width
    }

    pub fn desired_width(&self) -> f32 {
        self.config.padding.horizontal() + self.all_dots_width()
    }

    pub fn desired_height(&self) -> f32 {
        self.config.padding.vertical() + self.config.dot_height
    }

    /// Width of the dots and the gaps between them
    pub fn all_dots_width(&self) -> f32 {
        let count = self.point_count as f32;
        let gaps = self.point_count.saturating_sub(1) as f32;
        self.config.dot_width * count + self.config.gap_interval * gaps
    }

    /// Left edge of the row for the given alignment
    pub fn started_x(&self, measured_width: f32) -> f32 {
        match self.config.alignment {
            Alignment::Start => self.config.padding.left,
            Alignment::End => measured_width - self.config.padding.right - self.all_dots_width(),
            Alignment::Center => measured_width / 2.0 - self.all_dots_width() / 2.0,
        }
    }

    /// Horizontal distance between two neighbouring dot centers
    pub fn step(&self) -> f32 {
        self.config.dot_width + self.config.gap_interval
    }

    /// Center x of the dot at `index`
    ///
    /// The first center sits one full dot width after `started_x`; the
    /// renderer spans half a dot width on each side of it.
    pub fn dot_center(&self, index: usize, measured_width: f32) -> f32 {
        self.started_x(measured_width) + self.config.dot_width + self.step() * index as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::config::Insets;

    fn padded() -> IndicatorConfig {
        IndicatorConfig::default()
            .dot_size(20.0, 4.0)
            .interval(15.0)
            .padding(Insets {
                left: 3.0,
                top: 2.0,
                right: 5.0,
                bottom: 1.0,
            })
    }

    #[test]
    fn test_desired_width() {
        let config = padded();
        for count in 0..6usize {
            let expected = 8.0 + 20.0 * count as f32 + 15.0 * count.saturating_sub(1) as f32;
            for alignment in [Alignment::Start, Alignment::Center, Alignment::End] {
                let config = config.clone().alignment(alignment);
                assert_eq!(Layout::new(&config, count).desired_width(), expected);
            }
        }
    }

    #[test]
    fn test_no_dots_is_padding_only() {
        let config = padded();
        let layout = Layout::new(&config, 0);
        assert_eq!(layout.desired_width(), 8.0);
        assert_eq!(layout.all_dots_width(), 0.0);
    }

    #[test]
    fn test_desired_height() {
        let config = padded();
        assert_eq!(Layout::new(&config, 3).desired_height(), 7.0);
    }

    #[test]
    fn test_spacing_independent_of_alignment() {
        for alignment in [Alignment::Start, Alignment::Center, Alignment::End] {
            let config = padded().alignment(alignment);
            let layout = Layout::new(&config, 5);
            for i in 0..4 {
                let gap = layout.dot_center(i + 1, 300.0) - layout.dot_center(i, 300.0);
                assert!((gap - 35.0).abs() < 1e-4, "{alignment}: {gap}");
            }
        }
    }

    #[test]
    fn test_centered_three_dots() {
        let config = IndicatorConfig::default().dot_size(20.0, 4.0).interval(15.0);
        let layout = Layout::new(&config, 3);

        assert_eq!(layout.all_dots_width(), 90.0);
        assert_eq!(layout.started_x(200.0), 55.0);
        assert_eq!(layout.dot_center(0, 200.0), 75.0);
        assert_eq!(layout.dot_center(1, 200.0), 110.0);
        assert_eq!(layout.dot_center(2, 200.0), 145.0);
    }

    #[test]
    fn test_start_and_end_alignment() {
        let config = padded().alignment(Alignment::Start);
        assert_eq!(Layout::new(&config, 3).started_x(200.0), 3.0);

        let config = padded().alignment(Alignment::End);
        assert_eq!(Layout::new(&config, 3).started_x(200.0), 200.0 - 5.0 - 90.0);
    }

    #[test]
    fn test_resolve_size() {
        assert_eq!(resolve_size(90.0, SizeConstraint::Unspecified), 90.0);
        assert_eq!(resolve_size(90.0, SizeConstraint::AtMost(60.0)), 60.0);
        assert_eq!(resolve_size(90.0, SizeConstraint::AtMost(120.0)), 90.0);
        assert_eq!(resolve_size(90.0, SizeConstraint::Exactly(200.0)), 200.0);
    }
}
