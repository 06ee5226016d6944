//! Stick indicator primitive
//!
//! Paints a [`StickIndicator`] through iced's Canvas.
//!
//! # Design
//!
//! The indicator only knows the [`Surface`] trait; this module implements it
//! on a canvas frame and builds the rounded rectangles with elliptical corners.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Element, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::indicator::{IndicatorColor, RoundRect, StickIndicator, Surface};

/// Control point distance for approximating a quarter ellipse with a cubic Bézier
const KAPPA: f32 = 0.552_284_8;

/// Canvas program drawing an indicator
#[derive(Debug, Clone, Copy)]
pub struct IndicatorCanvas<'a> {
    indicator: &'a StickIndicator,
}

impl<'a> IndicatorCanvas<'a> {
    pub fn new(indicator: &'a StickIndicator) -> Self {
        Self { indicator }
    }
}

/// Adapts a canvas frame to the indicator's drawing seam
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn fill_round_rect(&mut self, rect: RoundRect, color: IndicatorColor) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        self.frame.fill(&round_rect_path(&rect), iced::Color::from(color));
    }
}

/// Path of a rectangle with `radius_x` × `radius_y` corners.
/// Radii are limited to half the rectangle's size.
pub fn round_rect_path(rect: &RoundRect) -> Path {
    let (left, top, right, bottom) = (rect.left, rect.top, rect.right, rect.bottom);
    let rx = rect.radius_x.min(rect.width() / 2.0).max(0.0);
    let ry = rect.radius_y.min(rect.height() / 2.0).max(0.0);

    if rx == 0.0 || ry == 0.0 {
        return Path::rectangle(
            Point::new(left, top),
            Size::new(rect.width(), rect.height()),
        );
    }

    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    Path::new(|builder| {
        builder.move_to(Point::new(left + rx, top));
        builder.line_to(Point::new(right - rx, top));
        builder.bezier_curve_to(
            Point::new(right - rx + kx, top),
            Point::new(right, top + ry - ky),
            Point::new(right, top + ry),
        );
        builder.line_to(Point::new(right, bottom - ry));
        builder.bezier_curve_to(
            Point::new(right, bottom - ry + ky),
            Point::new(right - rx + kx, bottom),
            Point::new(right - rx, bottom),
        );
        builder.line_to(Point::new(left + rx, bottom));
        builder.bezier_curve_to(
            Point::new(left + rx - kx, bottom),
            Point::new(left, bottom - ry + ky),
            Point::new(left, bottom - ry),
        );
        builder.line_to(Point::new(left, top + ry));
        builder.bezier_curve_to(
            Point::new(left, top + ry - ky),
            Point::new(left + rx - kx, top),
            Point::new(left + rx, top),
        );
        builder.close();
    })
}

impl<Message> Program<Message> for IndicatorCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let mut surface = FrameSurface { frame: &mut frame };
        self.indicator.render_within(&mut surface, bounds.width);
        vec![frame.into_geometry()]
    }
}

/// Create an indicator element sized by its last measure
/// (or by its desired size if it was never measured)
pub fn view_indicator<'a, Message: 'a>(indicator: &'a StickIndicator) -> Element<'a, Message> {
    let measured = indicator.measured_size();
    let size = if measured.width > 0.0 && measured.height > 0.0 {
        measured
    } else {
        let layout = indicator.layout();
        Size::new(layout.desired_width(), layout.desired_height())
    };

    Canvas::new(IndicatorCanvas::new(indicator))
        .width(size.width)
        .height(size.height)
        .into()
}
