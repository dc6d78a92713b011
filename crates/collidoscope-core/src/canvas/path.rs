//! Recorded path geometry in device space.

use svg::node::element::path::Data;

use crate::geometry::Point;

/// A single path command with device-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier segment (two control points, then the endpoint).
    CurveTo(Point, Point, Point),
    /// Closes the current subpath back to its starting point.
    Close,
}

/// An immutable-once-recorded sequence of path commands.
///
/// The canvas builds a `Path` while the caller issues drawing calls, then
/// hands it to a [`DrawOp`](super::DrawOp) on fill or stroke. Coordinates
/// are already in device space; serializing to SVG needs no further
/// transformation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }

    /// Returns the recorded commands.
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Returns `true` if no commands have been recorded.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Returns `true` if the path contains a closed subpath.
    pub fn is_closed(&self) -> bool {
        self.cmds.iter().any(|cmd| matches!(cmd, PathCmd::Close))
    }

    /// Converts the recorded commands into SVG path data.
    pub fn to_svg_data(&self) -> Data {
        let mut data = Data::new();
        for cmd in &self.cmds {
            data = match *cmd {
                PathCmd::MoveTo(p) => data.move_to((p.x(), p.y())),
                PathCmd::LineTo(p) => data.line_to((p.x(), p.y())),
                PathCmd::CurveTo(c1, c2, p) => {
                    data.cubic_curve_to((c1.x(), c1.y(), c2.x(), c2.y(), p.x(), p.y()))
                }
                PathCmd::Close => data.close(),
            };
        }
        data
    }
}
