//! The figure drawing toolkit.
//!
//! Stateless primitives for the collision-resolution figures: rectangle
//! outlines for the player and the ground, the capsule (stadium) shape,
//! directed arrows, X markers, and chain-shape edge segments with their
//! perpendicular normal arrows. Each primitive takes the canvas plus
//! geometric parameters, appends fill/stroke operations, and leaves the
//! canvas transform unchanged on return.
//!
//! There is no failure mode here: these are plain drawing calls against a
//! valid canvas, with no bounds checking or recovery.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Point;

/// Stroke width shared by all figure primitives, in user-space units.
pub const LINE_WIDTH: f64 = 3.0;

/// Length of the filled triangular arrowhead, measured along the shaft.
pub const ARROWHEAD_LEN: f64 = 10.0;

const PLAYER_WIDTH: f64 = 60.0;
const PLAYER_HEIGHT: f64 = 130.0;
const GROUND_SIDE: f64 = 100.0;
const CAPSULE_RADIUS: f64 = PLAYER_WIDTH / 2.0;
const EDGE_NORMAL_LEN: f64 = 25.0;

/// Fills and strokes a rectangle outline at `(x, y)` (top-left corner).
///
/// The rectangle is inset by the line width so the stroke sits inside the
/// nominal `width` x `height` bounding box. The interior fills at a quarter
/// of `alpha`; the border strokes at `alpha`. Both draws share one path.
pub fn panel(canvas: &mut Canvas, x: f64, y: f64, width: f64, height: f64, color: Color, alpha: f32) {
    canvas.set_line_width(LINE_WIDTH);
    canvas.set_source(color.scale_alpha(0.25 * alpha));
    canvas.rectangle(x, y, width - LINE_WIDTH, height - LINE_WIDTH);
    canvas.fill_preserve();
    canvas.set_source(color.scale_alpha(alpha));
    canvas.stroke();
}

/// Draws the player rectangle (60x130), anchored at its bottom-center.
pub fn player(canvas: &mut Canvas, x: f64, y: f64, color: Color, alpha: f32) {
    panel(
        canvas,
        x - PLAYER_WIDTH / 2.0,
        y - PLAYER_HEIGHT,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        color,
        alpha,
    );
}

/// Draws a ground tile (100x100), anchored at its top-left corner.
pub fn ground(canvas: &mut Canvas, x: f64, y: f64, color: Color, alpha: f32) {
    panel(canvas, x, y, GROUND_SIDE, GROUND_SIDE, color, alpha);
}

/// Draws a capsule (stadium shape) matching the player's footprint,
/// anchored at its bottom-center.
///
/// The path is two semicircular caps of radius 30 joined by straight
/// vertical segments of length `height - 2 * radius`, traced bottom arc
/// first (swept negative from π to 0), closed, filled at a quarter
/// opacity, then stroked.
pub fn capsule(canvas: &mut Canvas, x: f64, y: f64, color: Color) {
    let r = CAPSULE_RADIUS;
    let h = PLAYER_HEIGHT - 2.0 * r;

    canvas.set_line_width(LINE_WIDTH);
    canvas.with_save(|c| {
        c.translate(x, y - r);
        c.arc_negative(0.0, 0.0, r, std::f64::consts::PI, 0.0);
        c.rel_line_to(0.0, -h);
        c.arc_negative(0.0, -h, r, 0.0, std::f64::consts::PI);
        c.close_path();
        c.set_source(color.scale_alpha(0.25));
        c.fill_preserve();
        c.set_source(color);
        c.stroke();
    });
}

/// Draws an arrow from `(x, y)` along `theta` (radians) with total length
/// `len`.
///
/// The straight shaft covers `len - ARROWHEAD_LEN`; the filled triangular
/// head has its tip at `(x + len*cos(theta), y + len*sin(theta))` and its
/// back corners offset `(-ARROWHEAD_LEN, ±ARROWHEAD_LEN/2)` in the rotated
/// frame, so the head points in the direction of travel for any angle.
/// Shaft and head each run inside their own save/restore bracket.
pub fn arrow(canvas: &mut Canvas, x: f64, y: f64, theta: f64, len: f64, color: Color) {
    canvas.set_line_width(LINE_WIDTH);
    canvas.set_source(color);

    canvas.with_save(|c| {
        c.move_to(x, y);
        c.rotate(theta);
        c.rel_line_to(len - ARROWHEAD_LEN, 0.0);
        c.stroke();
    });

    canvas.with_save(|c| {
        let tip = Point::new(x, y).add(Point::from_polar(theta, len));
        c.move_to(tip.x(), tip.y());
        c.rotate(theta);
        c.rel_line_to(-ARROWHEAD_LEN, -ARROWHEAD_LEN / 2.0);
        c.rel_line_to(0.0, ARROWHEAD_LEN);
        c.close_path();
        c.fill();
    });
}

/// Draws an X marker centered at `(x, y)` with half-size `s`.
///
/// Uses whatever line width is currently set; the solution figure thins it
/// deliberately before calling.
pub fn cross(canvas: &mut Canvas, x: f64, y: f64, s: f64, color: Color) {
    canvas.set_source(color);
    canvas.move_to(x - s, y - s);
    canvas.rel_line_to(s * 2.0, s * 2.0);
    canvas.stroke();
    canvas.move_to(x - s, y + s);
    canvas.rel_line_to(s * 2.0, -s * 2.0);
    canvas.stroke();
}

/// Draws one link of a chain shape: the edge segment from `(x, y)` along
/// `(dx, dy)`, a smaller arrow at the segment's midpoint pointing along the
/// edge normal (the edge direction rotated -90°), and solid dots marking
/// the shared vertices at both endpoints.
///
/// `alpha` applies uniformly to the edge stroke and the vertex dots; the
/// highlight arrow gets 70% of it.
pub fn edge_ground(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    color: Color,
    highlight: Color,
    alpha: f32,
) {
    canvas.set_line_width(LINE_WIDTH);
    canvas.set_source(color.scale_alpha(alpha));
    canvas.move_to(x, y);
    canvas.rel_line_to(dx, dy);
    canvas.stroke();

    arrow(
        canvas,
        x + dx / 2.0,
        y + dy / 2.0,
        (-dx).atan2(dy),
        EDGE_NORMAL_LEN,
        highlight.scale_alpha(0.7 * alpha),
    );

    canvas.set_source(highlight.scale_alpha(alpha));
    canvas.arc(x, y, LINE_WIDTH / 2.0, 0.0, std::f64::consts::TAU);
    canvas.arc(x + dx, y + dy, LINE_WIDTH / 2.0, 0.0, std::f64::consts::TAU);
    canvas.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, PathCmd};
    use crate::geometry::Size;
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn canvas() -> Canvas {
        Canvas::new(Size::new(300.0, 250.0))
    }

    fn pink() -> Color {
        Color::rgb(1.0, 0.5, 0.5)
    }

    fn first_point(cmd: &PathCmd) -> Point {
        match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p,
            PathCmd::CurveTo(_, _, p) => p,
            PathCmd::Close => panic!("close has no point"),
        }
    }

    #[test]
    fn test_arrow_shaft_and_head_scenario() {
        // arrow(ctx, 0, 0, 0, 50, red): shaft (0,0)->(40,0), tip (50,0),
        // back corners (40,-5) and (40,5).
        let mut c = canvas();
        arrow(&mut c, 0.0, 0.0, 0.0, 50.0, Color::rgb(1.0, 0.0, 0.0));

        let [DrawOp::Stroke { path: shaft, .. }, DrawOp::Fill { path: head, .. }] = c.ops() else {
            panic!("expected stroke then fill, got {:?}", c.ops());
        };

        assert_eq!(shaft.cmds()[0], PathCmd::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(shaft.cmds()[1], PathCmd::LineTo(Point::new(40.0, 0.0)));

        assert_eq!(head.cmds()[0], PathCmd::MoveTo(Point::new(50.0, 0.0)));
        assert_eq!(head.cmds()[1], PathCmd::LineTo(Point::new(40.0, -5.0)));
        assert_eq!(head.cmds()[2], PathCmd::LineTo(Point::new(40.0, 5.0)));
        assert!(head.is_closed());
    }

    #[test]
    fn test_arrow_head_triangle_nondegenerate_rotated() {
        let mut c = canvas();
        let theta = 0.6;
        arrow(&mut c, 10.0, 20.0, theta, 30.0, Color::rgb(1.0, 1.0, 0.0));

        let DrawOp::Fill { path: head, .. } = &c.ops()[1] else {
            panic!("expected head fill");
        };
        let tip = first_point(&head.cmds()[0]);
        let back1 = first_point(&head.cmds()[1]);
        let back2 = first_point(&head.cmds()[2]);

        assert_approx_eq!(f64, tip.x(), 10.0 + 30.0 * theta.cos(), epsilon = 1e-9);
        assert_approx_eq!(f64, tip.y(), 20.0 + 30.0 * theta.sin(), epsilon = 1e-9);

        // Twice the signed triangle area; zero would mean degenerate
        let area2 = (back1.x() - tip.x()) * (back2.y() - tip.y())
            - (back2.x() - tip.x()) * (back1.y() - tip.y());
        assert_approx_eq!(f64, area2.abs(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_arrow_leaves_transform_unchanged() {
        let mut c = canvas();
        c.translate(10.0, 10.0);
        c.scale(2.0, 2.0);
        let before = c.transform();
        arrow(&mut c, 0.0, 0.0, 1.2, 25.0, Color::rgb(1.0, 1.0, 0.0));
        assert_eq!(c.transform(), before);
    }

    #[test]
    fn test_panel_fills_before_stroke_with_inset() {
        let mut c = canvas();
        ground(&mut c, 50.0, 150.0, Color::rgb(0.0, 0.7, 0.0), 1.0);

        let [DrawOp::Fill { path: fill, paint }, DrawOp::Stroke { path: stroke, .. }] = c.ops()
        else {
            panic!("expected fill then stroke, got {:?}", c.ops());
        };
        // Shared path: identical geometry for both draws
        assert_eq!(fill, stroke);

        // Nominal 100 minus the line width
        let corner = first_point(&fill.cmds()[0]);
        let opposite = first_point(&fill.cmds()[2]);
        assert_approx_eq!(f64, opposite.x() - corner.x(), 100.0 - LINE_WIDTH);
        assert_approx_eq!(f64, opposite.y() - corner.y(), 100.0 - LINE_WIDTH);

        // Fill opacity is a quarter of the stroke's
        let fill_alpha = paint.as_solid().expect("solid fill").alpha();
        assert_approx_eq!(f32, fill_alpha, 0.25);
    }

    #[test]
    fn test_player_anchored_at_bottom_center() {
        let mut c = canvas();
        player(&mut c, 110.0, 150.0, pink(), 0.7);

        let DrawOp::Fill { path, paint } = &c.ops()[0] else {
            panic!("expected fill");
        };
        let corner = first_point(&path.cmds()[0]);
        assert_eq!(corner, Point::new(110.0 - 30.0, 150.0 - 130.0));
        assert_approx_eq!(f32, paint.as_solid().expect("solid").alpha(), 0.25 * 0.7);
    }

    #[test]
    fn test_capsule_scenario() {
        // capsule(ctx, 0, 0): closed path, two semicircles (two Bézier
        // segments each), two straight segments of length 70.
        let mut c = canvas();
        let before = c.transform();
        capsule(&mut c, 0.0, 0.0, pink());
        assert_eq!(c.transform(), before);

        let [DrawOp::Fill { path: fill, .. }, DrawOp::Stroke { path: stroke, .. }] = c.ops()
        else {
            panic!("expected fill then stroke, got {:?}", c.ops());
        };
        assert_eq!(fill, stroke);
        assert!(fill.is_closed());

        let curves = fill
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, PathCmd::CurveTo(..)))
            .count();
        assert_eq!(curves, 4);

        // The explicit straight segment: from the bottom arc's end up the
        // right side, length height - 2*radius = 70, vertical.
        let mut prev: Option<Point> = None;
        let mut straights = Vec::new();
        for cmd in fill.cmds() {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::CurveTo(_, _, p) => prev = Some(p),
                PathCmd::LineTo(p) => {
                    if let Some(from) = prev {
                        let d = p.sub(from);
                        if d.hypot() > 1e-6 {
                            straights.push(d);
                        }
                    }
                    prev = Some(p);
                }
                PathCmd::Close => {}
            }
        }
        assert_eq!(straights.len(), 1);
        assert_approx_eq!(f64, straights[0].hypot(), 70.0, epsilon = 1e-9);
        assert_approx_eq!(f64, straights[0].x(), 0.0, epsilon = 1e-9);

        // The closing segment mirrors it on the left side: the last curve
        // endpoint sits 70 above the path start.
        let start = first_point(&fill.cmds()[0]);
        let last_curve_end = fill
            .cmds()
            .iter()
            .rev()
            .find_map(|cmd| match *cmd {
                PathCmd::CurveTo(_, _, p) => Some(p),
                _ => None,
            })
            .expect("capsule has curves");
        assert_approx_eq!(f64, last_curve_end.x(), start.x(), epsilon = 1e-9);
        assert_approx_eq!(f64, start.y() - last_curve_end.y(), 70.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cross_two_diagonals() {
        let mut c = canvas();
        c.set_line_width(LINE_WIDTH);
        cross(&mut c, 160.0, 85.0, 10.0, Color::rgb(1.0, 0.0, 0.0));

        assert_eq!(c.ops().len(), 2);
        let DrawOp::Stroke { path, width, .. } = &c.ops()[0] else {
            panic!("expected stroke");
        };
        assert_eq!(path.cmds()[0], PathCmd::MoveTo(Point::new(150.0, 75.0)));
        assert_eq!(path.cmds()[1], PathCmd::LineTo(Point::new(170.0, 95.0)));
        // Uses the caller's line width rather than setting its own
        assert_approx_eq!(f64, *width, LINE_WIDTH);
    }

    #[test]
    fn test_edge_ground_normal_is_perpendicular() {
        let mut c = canvas();
        let (dx, dy) = (50.0, -50.0);
        edge_ground(
            &mut c,
            50.0,
            100.0,
            dx,
            dy,
            Color::rgb(0.0, 0.7, 0.0),
            Color::rgb(0.7, 1.0, 0.0),
            1.0,
        );

        // Ops: edge stroke, arrow shaft stroke, arrow head fill, dots fill
        assert_eq!(c.ops().len(), 4);

        // The midpoint arrow's shaft runs perpendicular to the edge
        let DrawOp::Stroke { path: shaft, .. } = &c.ops()[1] else {
            panic!("expected arrow shaft stroke");
        };
        let from = first_point(&shaft.cmds()[0]);
        let to = first_point(&shaft.cmds()[1]);
        let edge = Point::new(dx, dy);
        assert_approx_eq!(f64, edge.dot(to.sub(from)), 0.0, epsilon = 1e-9);

        // And starts at the segment midpoint
        assert_approx_eq!(f64, from.x(), 75.0);
        assert_approx_eq!(f64, from.y(), 75.0);
    }

    #[test]
    fn test_edge_ground_dots_at_endpoints() {
        let mut c = canvas();
        edge_ground(
            &mut c,
            10.0,
            100.0,
            40.0,
            0.0,
            Color::rgb(0.0, 0.7, 0.0),
            Color::rgb(0.7, 1.0, 0.0),
            0.15,
        );

        let DrawOp::Fill { path: dots, paint } = c.ops().last().expect("dots fill") else {
            panic!("expected dots fill");
        };
        // Two full circles: eight Bézier segments
        let curves = dots
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, PathCmd::CurveTo(..)))
            .count();
        assert_eq!(curves, 8);

        // First circle starts at (x + r, y) with r = half the line width
        let start = first_point(&dots.cmds()[0]);
        assert_approx_eq!(f64, start.x(), 10.0 + LINE_WIDTH / 2.0);
        assert_approx_eq!(f64, start.y(), 100.0, epsilon = 1e-9);

        // Dot opacity follows the edge alpha, not the 70% arrow treatment
        assert_approx_eq!(f32, paint.as_solid().expect("solid").alpha(), 0.15);
    }

    #[test]
    fn test_edge_ground_highlight_at_70_percent() {
        let mut c = canvas();
        edge_ground(
            &mut c,
            0.0,
            0.0,
            100.0,
            0.0,
            Color::rgb(0.0, 0.7, 0.0),
            Color::rgb(0.7, 1.0, 0.0),
            0.5,
        );

        let DrawOp::Stroke { paint, .. } = &c.ops()[1] else {
            panic!("expected arrow shaft stroke");
        };
        assert_approx_eq!(f32, paint.as_solid().expect("solid").alpha(), 0.35);
    }

    #[test]
    fn test_primitives_leave_transform_unchanged() {
        let mut c = canvas();
        c.translate(150.0, 125.0);
        c.scale(3.0, 3.0);
        c.translate(-150.0, -125.0);
        let before = c.transform();

        player(&mut c, 100.0, 150.0, pink(), 1.0);
        ground(&mut c, 50.0, 150.0, Color::rgb(0.0, 0.7, 0.0), 1.0);
        capsule(&mut c, 140.0, 150.0, pink());
        arrow(&mut c, 110.0, 85.0, -FRAC_PI_2, 25.0, Color::rgb(1.0, 1.0, 0.0));
        cross(&mut c, 160.0, 85.0, 10.0, Color::rgb(1.0, 0.0, 0.0));
        edge_ground(
            &mut c,
            10.0,
            100.0,
            40.0,
            0.0,
            Color::rgb(0.0, 0.7, 0.0),
            Color::rgb(0.7, 1.0, 0.0),
            1.0,
        );

        assert_eq!(c.transform(), before);
    }

    proptest! {
        #[test]
        fn prop_arrow_tip_matches_polar_endpoint(
            x in -200.0..200.0f64,
            y in -200.0..200.0f64,
            theta in -6.3..6.3f64,
            len in 10.0..120.0f64,
        ) {
            let mut c = canvas();
            arrow(&mut c, x, y, theta, len, Color::rgb(1.0, 1.0, 0.0));

            let DrawOp::Fill { path: head, .. } = &c.ops()[1] else {
                panic!("expected head fill");
            };
            let tip = first_point(&head.cmds()[0]);
            prop_assert!((tip.x() - (x + len * theta.cos())).abs() < 1e-9);
            prop_assert!((tip.y() - (y + len * theta.sin())).abs() < 1e-9);

            // Back corners are ARROWHEAD_LEN behind the tip along the shaft
            let back1 = first_point(&head.cmds()[1]);
            let back2 = first_point(&head.cmds()[2]);
            let mid = back1.midpoint(back2);
            prop_assert!((tip.distance(mid) - ARROWHEAD_LEN).abs() < 1e-9);
            prop_assert!((back1.distance(back2) - ARROWHEAD_LEN).abs() < 1e-9);
        }

        #[test]
        fn prop_edge_normal_perpendicular(
            dx in -120.0..120.0f64,
            dy in -120.0..120.0f64,
        ) {
            prop_assume!(dx.hypot(dy) > 1.0);

            let mut c = canvas();
            edge_ground(
                &mut c,
                20.0,
                20.0,
                dx,
                dy,
                Color::rgb(0.0, 0.7, 0.0),
                Color::rgb(0.7, 1.0, 0.0),
                1.0,
            );

            let DrawOp::Stroke { path: shaft, .. } = &c.ops()[1] else {
                panic!("expected arrow shaft stroke");
            };
            let dir = first_point(&shaft.cmds()[1]).sub(first_point(&shaft.cmds()[0]));
            let edge = Point::new(dx, dy);
            // Normalize before comparing: lengths differ, the angle must not
            let cos = edge.dot(dir) / (edge.hypot() * dir.hypot());
            prop_assert!(cos.abs() < 1e-9);
        }
    }
}
