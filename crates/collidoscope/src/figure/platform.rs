//! One-way platform figures: the sensor volume above a ledge and the
//! fading collision zone under a pass-through platform.

use collidoscope_core::canvas::{Canvas, LinearGradient};
use collidoscope_core::glyph::{self, LINE_WIDTH};

use super::Palette;

/// A ledge with a sensor region floating beside it, its entry and exit
/// directions marked by a pair of opposed arrows.
pub(super) fn platform(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 25.0, palette.ground, 1.0);

    // Sensor region, drawn like a panel but narrower than a tile
    canvas.set_line_width(LINE_WIDTH);
    canvas.set_source(palette.sensor.scale_alpha(0.25));
    canvas.rectangle(150.0, 25.0, 100.0 - LINE_WIDTH, 40.0 - LINE_WIDTH);
    canvas.fill_preserve();
    canvas.set_source(palette.sensor);
    canvas.stroke();

    glyph::arrow(canvas, 200.0, 25.0 + 40.0 / 2.0, 0.0, 25.0, palette.sensor);
    glyph::arrow(
        canvas,
        200.0,
        45.0,
        std::f64::consts::PI,
        25.0,
        palette.sensor,
    );
}

/// A platform whose collision only acts from above, shown as a gradient
/// fading downward from the platform's top edge.
pub(super) fn platform_2(canvas: &mut Canvas, palette: &Palette) {
    glyph::ground(canvas, 50.0, 150.0, palette.ground, 1.0);
    glyph::player(canvas, 120.0, 150.0, palette.player, 1.0);

    let c = palette.platform;

    // Interior fades out entirely over the top 30 units
    canvas.set_line_width(LINE_WIDTH);
    canvas.set_source_gradient(
        LinearGradient::new(150.0, 150.0, 150.0, 180.0)
            .with_stop(0.0, c.with_alpha(0.25))
            .with_stop(1.0, c.with_alpha(0.0)),
    );
    canvas.rectangle(150.0, 150.0, 200.0 - LINE_WIDTH, 40.0 - LINE_WIDTH);
    canvas.fill_preserve();

    // Border fades with the same geometry from full opacity
    canvas.set_source_gradient(
        LinearGradient::new(150.0, 150.0, 150.0, 180.0)
            .with_stop(0.0, c.with_alpha(1.0))
            .with_stop(1.0, c.with_alpha(0.0)),
    );
    canvas.stroke();
}
