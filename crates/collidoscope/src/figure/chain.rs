//! The chain-shape figure: a terrain outline built from connected edges
//! with one-sided collision normals.

use collidoscope_core::canvas::Canvas;
use collidoscope_core::glyph;

use super::Palette;

/// A chain of ground edges with their normals, the faded ends being
/// ghost vertices that only inform adjacency.
pub(super) fn chain_shape(canvas: &mut Canvas, palette: &Palette) {
    let (g, h) = (palette.ground, palette.highlight);
    glyph::edge_ground(canvas, 10.0, 100.0, 40.0, 0.0, g, h, 0.15);
    glyph::edge_ground(canvas, 50.0, 100.0, 50.0, -50.0, g, h, 1.0);
    glyph::edge_ground(canvas, 100.0, 50.0, 100.0, 0.0, g, h, 1.0);
    glyph::edge_ground(canvas, 200.0, 50.0, 0.0, 50.0, g, h, 1.0);
    glyph::edge_ground(canvas, 200.0, 100.0, 40.0, 40.0, g, h, 0.15);
}
