//! Close-ups of penetration resolution pushing the player out of the
//! ground.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph;

use super::{Palette, zoom_about_center};

const W: f64 = 250.0;
const H: f64 = 250.0;

/// Deep overlap: the player sunk 10 units into the ground, resolved
/// straight up.
pub(super) fn resolve_1(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 3.0);

    glyph::ground(canvas, W / 2.0 - 50.0, H / 2.0, palette.ground, 1.0);
    glyph::player(canvas, W / 2.0, H / 2.0 + 10.0, palette.player, 1.0);
    glyph::arrow(
        canvas,
        W / 2.0,
        H / 2.0 + 3.0,
        (-90.0_f64).to_radians(),
        30.0,
        palette.arrow,
    );
}

/// Shallow overlap: the same resolution with the player barely inside.
pub(super) fn resolve_2(canvas: &mut Canvas, palette: &Palette) {
    zoom_about_center(canvas, W, H, 3.0);

    glyph::ground(canvas, W / 2.0 - 50.0, H / 2.0, palette.ground, 1.0);
    glyph::player(canvas, W / 2.0, H / 2.0 + 1.0, palette.player, 1.0);
    glyph::arrow(
        canvas,
        W / 2.0,
        H / 2.0,
        (-90.0_f64).to_radians(),
        30.0,
        palette.arrow,
    );
}
