//! The closing figure: speculative contact stopping the player before the
//! corner, with the rejected snag crossed out.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph::{self, LINE_WIDTH};

use super::{Palette, zoom_about_center};

const W: f64 = 300.0;
const H: f64 = 300.0;

/// The corner scene again, resolved by a horizontal sweep: the player's
/// motion arrow carries it past the seam, and the sideways push that
/// caused the snag is marked invalid.
pub(super) fn solution(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 2.0);

    glyph::ground(canvas, 50.0, 150.0, palette.ground, 0.2);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);
    glyph::player(canvas, 130.0, 175.0, palette.player, 1.0);

    glyph::arrow(canvas, 130.0, 150.0 - 130.0 / 2.0, 0.0, 50.0, palette.marker);
    glyph::arrow(
        canvas,
        153.0,
        160.0,
        (-180.0_f64).to_radians(),
        25.0,
        palette.arrow,
    );
    glyph::arrow(
        canvas,
        125.0,
        162.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow_dim.with_alpha(0.15),
    );

    canvas.set_line_width(LINE_WIDTH * 0.5);
    glyph::cross(canvas, 145.0, 160.0, 5.0, palette.marker);
}
