//! Figures illustrating the ghost-collision problem.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph;

use super::Palette;

/// A player moving right across two ground tiles, shown as a fading motion
/// trail, catching on the seam between the tiles.
pub(super) fn ghost_collision_1(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 150.0, palette.ground, 1.0);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);

    glyph::player(canvas, 80.0, 150.0, palette.player, 0.05);
    glyph::player(canvas, 90.0, 150.0, palette.player, 0.1);
    glyph::player(canvas, 100.0, 150.0, palette.player, 0.2);
    glyph::player(canvas, 110.0, 150.0, palette.player, 0.7);

    glyph::arrow(canvas, 110.0, 150.0 - 130.0 / 2.0, 0.0, 50.0, palette.marker);
}

/// The player stopped dead at the tile seam, with nothing visibly in the
/// way.
pub(super) fn ghost_collision_2(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 150.0, palette.ground, 1.0);
    glyph::ground(canvas, 150.0, 150.0, palette.ground, 1.0);
    glyph::player(canvas, 120.0, 150.0, palette.player, 1.0);

    glyph::cross(canvas, 160.0, 150.0 - 130.0 / 2.0, 10.0, palette.marker);

    canvas.set_source(palette.text);
    canvas.text(150.0, 30.0, 40.0, "?");
}
