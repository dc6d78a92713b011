//! Paint sources for fill and stroke operations.

use crate::color::Color;
use crate::geometry::{Point, Transform};

/// The active source a fill or stroke is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A single RGBA color.
    Solid(Color),
    /// A linear gradient between two points.
    Linear(LinearGradient),
}

impl Paint {
    /// Returns the solid color, if this paint is one.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Linear(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A single color stop along a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    offset: f64,
    color: Color,
}

impl GradientStop {
    /// Returns the stop offset in `[0, 1]` along the gradient axis.
    pub fn offset(self) -> f64 {
        self.offset
    }

    /// Returns the stop color.
    pub fn color(self) -> Color {
        self.color
    }
}

/// A linear gradient between two points in canvas space.
///
/// The points are interpreted in user space when the gradient is handed to
/// [`Canvas::set_source_gradient`](super::Canvas::set_source_gradient),
/// which transforms them through the current transform.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    start: Point,
    end: Point,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Creates a gradient along the axis from `(x1, y1)` to `(x2, y2)` with
    /// no stops.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            stops: Vec::new(),
        }
    }

    /// Adds a color stop, returning the gradient for chaining.
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }

    /// Returns the start point of the gradient axis.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point of the gradient axis.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the color stops in insertion order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Returns this gradient with its axis mapped through `transform`.
    pub(super) fn transformed(&self, transform: Transform) -> Self {
        Self {
            start: transform.apply(self.start),
            end: transform.apply(self.end),
            stops: self.stops.clone(),
        }
    }
}
