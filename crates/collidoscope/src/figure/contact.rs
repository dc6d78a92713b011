//! Contact-area close-ups: the flat strip and the vertical strip where
//! the player touches the ground, marked with a thin line and end dots.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph::{self, LINE_WIDTH};

use super::{Palette, zoom_about_center};

const W: f64 = 150.0;
const H: f64 = 150.0;

/// A thin marked segment with a dot at each end, half the usual stroke
/// width so it reads as an annotation rather than geometry.
fn contact_strip(canvas: &mut Canvas, x1: f64, y1: f64, x2: f64, y2: f64, palette: &Palette) {
    canvas.set_source(palette.arrow);
    canvas.set_line_width(LINE_WIDTH / 2.0);
    canvas.move_to(x1, y1);
    canvas.line_to(x2, y2);
    canvas.stroke();

    canvas.arc(x1, y1, LINE_WIDTH / 2.0, 0.0, std::f64::consts::TAU);
    canvas.arc(x2, y2, LINE_WIDTH / 2.0, 0.0, std::f64::consts::TAU);
    canvas.fill();
}

/// The horizontal contact strip where the player rests on the ground,
/// next to the seam with the faded neighbor tile.
pub(super) fn contact_area(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 2.0);

    glyph::ground(canvas, -25.0, 75.0, palette.ground, 0.2);
    glyph::ground(canvas, 75.0, 75.0, palette.ground, 1.0);
    glyph::player(canvas, 65.0, 85.0, palette.player, 1.0);
    glyph::arrow(
        canvas,
        83.0,
        78.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow,
    );

    contact_strip(canvas, 73.5, 78.0, 93.0, 78.0, palette);
}

/// The vertical contact strip of a sideways push against the tile wall.
pub(super) fn contact_area_2(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 2.0);

    glyph::ground(canvas, -30.0, 75.0, palette.ground, 0.2);
    glyph::ground(canvas, 70.0, 75.0, palette.ground, 1.0);
    glyph::player(canvas, 50.0, 90.0, palette.player, 1.0);
    glyph::arrow(canvas, 73.0, 81.0, std::f64::consts::PI, 25.0, palette.arrow);

    contact_strip(canvas, 73.0, 75.0, 73.0, 87.0, palette);
}
