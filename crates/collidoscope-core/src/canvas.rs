//! The imperative 2D drawing context.
//!
//! [`Canvas`] follows the cairo drawing model: a current transform with a
//! save/restore stack, a current path, a current paint, and a line width.
//! Path points are pushed through the current transform as they are
//! appended, so the recorded geometry is already in device space. Fill and
//! stroke calls append a [`DrawOp`] to a display list instead of writing
//! SVG directly; serialization happens once, at export time.
//!
//! Each figure owns its canvas exclusively for the duration of one render
//! (`&mut` through the call chain), and nothing is shared across figures.

mod paint;
mod path;

pub use paint::{GradientStop, LinearGradient, Paint};
pub use path::{Path, PathCmd};

use std::f64::consts::{FRAC_PI_2, TAU};

use log::warn;

use crate::color::Color;
use crate::geometry::{Point, Size, Transform};

/// A recorded drawing operation with device-space geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill the path's interior with the paint.
    Fill { path: Path, paint: Paint },
    /// Stroke the path's outline at the given device-space width.
    Stroke { path: Path, paint: Paint, width: f64 },
    /// Render text at a device-space position.
    Text {
        position: Point,
        size: f64,
        content: String,
        paint: Paint,
    },
}

/// Graphics state covered by save/restore.
#[derive(Debug, Clone)]
struct GState {
    transform: Transform,
    line_width: f64,
    paint: Paint,
}

impl Default for GState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            line_width: 2.0,
            paint: Paint::Solid(Color::default()),
        }
    }
}

/// A mutable drawing surface for one figure.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    state: GState,
    stack: Vec<GState>,
    path: Path,
    current: Option<Point>,
    subpath_start: Option<Point>,
    ops: Vec<DrawOp>,
}

impl Canvas {
    /// Creates an empty canvas of the given surface size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            state: GState::default(),
            stack: Vec::new(),
            path: Path::new(),
            current: None,
            subpath_start: None,
            ops: Vec::new(),
        }
    }

    /// Returns the surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the current transform.
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// Returns the current user-space line width.
    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Returns the recorded drawing operations, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    // --- graphics state ---

    /// Pushes the current graphics state (transform, line width, paint).
    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pops the most recently saved graphics state.
    ///
    /// A restore without a matching save is logged and ignored.
    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => warn!("restore without matching save"),
        }
    }

    /// Runs `f` inside a save/restore bracket.
    ///
    /// The graphics state active before the call is restored afterwards no
    /// matter what `f` does to it, so transform-mutating drawing code leaves
    /// the canvas transform unchanged on return.
    pub fn with_save<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let result = f(self);
        self.restore();
        result
    }

    /// Translates the current transform by `(tx, ty)`.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.state.transform = Transform::translation(tx, ty).then(self.state.transform);
    }

    /// Scales the current transform by `(sx, sy)`.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = Transform::scaling(sx, sy).then(self.state.transform);
    }

    /// Rotates the current transform by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        self.state.transform = Transform::rotation(theta).then(self.state.transform);
    }

    /// Sets the line width, in user-space units.
    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    /// Sets the paint to a solid color.
    pub fn set_source(&mut self, color: Color) {
        self.state.paint = Paint::Solid(color);
    }

    /// Sets the paint to a linear gradient.
    ///
    /// The gradient axis is given in user space and is captured through the
    /// current transform now, matching how cairo snapshots pattern
    /// coordinates when the source is set.
    pub fn set_source_gradient(&mut self, gradient: LinearGradient) {
        self.state.paint = Paint::Linear(gradient.transformed(self.state.transform));
    }

    // --- path construction ---

    /// Starts a new subpath at `(x, y)` in user space.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let device = self.state.transform.apply(Point::new(x, y));
        self.path.push(PathCmd::MoveTo(device));
        self.current = Some(device);
        self.subpath_start = Some(device);
    }

    /// Appends a straight segment to `(x, y)` in user space.
    pub fn line_to(&mut self, x: f64, y: f64) {
        let device = self.state.transform.apply(Point::new(x, y));
        if self.current.is_none() {
            // No current point: degrade to a move, as there is nothing to
            // draw a segment from.
            warn!("line_to without a current point");
            self.path.push(PathCmd::MoveTo(device));
            self.subpath_start = Some(device);
        } else {
            self.path.push(PathCmd::LineTo(device));
        }
        self.current = Some(device);
    }

    /// Appends a straight segment displaced by `(dx, dy)` in user space.
    pub fn rel_line_to(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.current else {
            warn!("rel_line_to without a current point");
            return;
        };
        let device = current.add(self.state.transform.apply_distance(Point::new(dx, dy)));
        self.path.push(PathCmd::LineTo(device));
        self.current = Some(device);
    }

    /// Appends an axis-aligned rectangle as a closed subpath.
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.rel_line_to(width, 0.0);
        self.rel_line_to(0.0, height);
        self.rel_line_to(-width, 0.0);
        self.close_path();
    }

    /// Appends a circular arc swept in the direction of increasing angles
    /// (clockwise on a y-down canvas).
    ///
    /// `a2` is normalized upwards by full turns until it is not less than
    /// `a1`. If the path already has a current point, a straight segment
    /// connects it to the arc's start point.
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, mut a2: f64) {
        while a2 < a1 {
            a2 += TAU;
        }
        self.arc_segments(cx, cy, radius, a1, a2);
    }

    /// Appends a circular arc swept in the direction of decreasing angles.
    ///
    /// `a2` is normalized downwards by full turns until it is not greater
    /// than `a1`.
    pub fn arc_negative(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, mut a2: f64) {
        while a2 > a1 {
            a2 -= TAU;
        }
        self.arc_segments(cx, cy, radius, a1, a2);
    }

    /// Closes the current subpath, returning to its starting point.
    pub fn close_path(&mut self) {
        self.path.push(PathCmd::Close);
        self.current = self.subpath_start;
    }

    // --- drawing ---

    /// Fills the current path and clears it.
    pub fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let path = std::mem::take(&mut self.path);
        self.ops.push(DrawOp::Fill {
            path,
            paint: self.state.paint.clone(),
        });
        self.current = None;
        self.subpath_start = None;
    }

    /// Fills the current path, keeping it for a subsequent stroke.
    pub fn fill_preserve(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Fill {
            path: self.path.clone(),
            paint: self.state.paint.clone(),
        });
    }

    /// Strokes the current path and clears it.
    ///
    /// The recorded width is the user-space line width scaled by the
    /// current transform's conformal factor, so zoomed figures stroke
    /// proportionally thicker.
    pub fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let path = std::mem::take(&mut self.path);
        self.ops.push(DrawOp::Stroke {
            path,
            paint: self.state.paint.clone(),
            width: self.state.line_width * self.state.transform.conformal_scale(),
        });
        self.current = None;
        self.subpath_start = None;
    }

    /// Renders text with its anchor at `(x, y)` in user space, filled with
    /// the current paint.
    pub fn text(&mut self, x: f64, y: f64, size: f64, content: &str) {
        self.ops.push(DrawOp::Text {
            position: self.state.transform.apply(Point::new(x, y)),
            size: size * self.state.transform.conformal_scale(),
            content: content.to_string(),
            paint: self.state.paint.clone(),
        });
    }

    /// Flattens an arc sweep into cubic Bézier segments of at most a
    /// quarter turn each, transforming control points into device space.
    fn arc_segments(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, a2: f64) {
        let start = Point::new(cx + radius * a1.cos(), cy + radius * a1.sin());
        if self.current.is_some() {
            self.line_to(start.x(), start.y());
        } else {
            self.move_to(start.x(), start.y());
        }

        let sweep = a2 - a1;
        if sweep == 0.0 {
            return;
        }
        let segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
        let step = sweep / segments as f64;
        // Control-point distance for a cubic approximation of a circular
        // arc of angle `step`.
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let mut t0 = a1;
        for _ in 0..segments {
            let t1 = t0 + step;
            let p0 = Point::new(cx + radius * t0.cos(), cy + radius * t0.sin());
            let p3 = Point::new(cx + radius * t1.cos(), cy + radius * t1.sin());
            let c1 = Point::new(p0.x() - radius * k * t0.sin(), p0.y() + radius * k * t0.cos());
            let c2 = Point::new(p3.x() + radius * k * t1.sin(), p3.y() - radius * k * t1.cos());

            let transform = self.state.transform;
            let device_p3 = transform.apply(p3);
            self.path.push(PathCmd::CurveTo(
                transform.apply(c1),
                transform.apply(c2),
                device_p3,
            ));
            self.current = Some(device_p3);
            t0 = t1;
        }
    }
}
