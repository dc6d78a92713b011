//! Corner-catch figures: the player snagging on an interior tile corner,
//! and shapes that avoid it.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph::{self, LINE_WIDTH};

use super::{Palette, zoom_about_center};

const W: f64 = 300.0;
const H: f64 = 250.0;

/// The player dropping onto the seam, pushed out upward by the right tile.
pub(super) fn corner_1(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 150.0, palette.ground, 0.2);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);
    glyph::player(canvas, 145.0, 160.0, palette.player, 1.0);
    glyph::arrow(
        canvas,
        160.0,
        153.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow,
    );
    glyph::arrow(
        canvas,
        133.0,
        153.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow_dim.with_alpha(0.15),
    );
}

/// Deeper into the corner: the minimal push is now sideways, snagging the
/// player on the interior edge.
pub(super) fn corner_2(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 150.0, palette.ground, 0.2);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);
    glyph::player(canvas, 130.0, 175.0, palette.player, 1.0);
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
}

/// A player box with a clipped bottom-right corner sliding over the seam.
pub(super) fn clipped_corner(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 3.0);

    glyph::ground(canvas, 50.0, 150.0, palette.ground, 0.2);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);

    // Player outline with the corner cut off, drawn as a one-off path
    canvas.set_line_width(LINE_WIDTH);
    canvas.move_to(60.0, 150.0);
    canvas.rel_line_to(80.0, 0.0);
    canvas.rel_line_to(20.0, -5.0);
    canvas.rel_line_to(0.0, -95.0);
    canvas.rel_line_to(-100.0, 0.0);
    canvas.close_path();
    canvas.set_source(palette.player.scale_alpha(0.25));
    canvas.fill_preserve();
    canvas.set_source(palette.player);
    canvas.stroke();

    glyph::arrow(
        canvas,
        150.0,
        150.0 - 4.0,
        (-20.0_f64).atan2(-5.0),
        25.0,
        palette.arrow,
    );
    glyph::arrow(
        canvas,
        110.0,
        150.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow_dim.with_alpha(0.1),
    );
}

/// The capsule shape gliding over the same seam.
pub(super) fn clipped_corner_2(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 3.0);

    glyph::ground(canvas, 50.0, 150.0, palette.ground, 0.2);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);

    glyph::capsule(canvas, 140.0, 150.0, palette.player);

    glyph::arrow(
        canvas,
        150.0,
        150.0 - 4.0,
        (-20.0_f64).atan2(-8.0),
        25.0,
        palette.arrow,
    );
    glyph::arrow(
        canvas,
        140.0,
        150.0,
        (-90.0_f64).to_radians(),
        25.0,
        palette.arrow_dim.with_alpha(0.1),
    );
}
