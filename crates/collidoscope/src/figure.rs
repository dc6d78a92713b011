//! The fixed set of collision-resolution figures.
//!
//! Each figure is an independent composition: it owns its canvas for the
//! duration of one render, issues toolkit calls with literal coordinates,
//! and hands the finished canvas to the exporter. Figures are grouped by
//! the blog-post section they illustrate.

mod chain;
mod contact;
mod corner;
mod ghost;
mod platform;
mod resolve;
mod solution;

use indexmap::IndexMap;

use collidoscope_core::canvas::Canvas;
use collidoscope_core::color::Color;
use collidoscope_core::geometry::Size;

/// The recurring colors of the figure set.
///
/// Defaults are the colors of the original illustrations; any entry can be
/// overridden from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Player rectangle and capsule (pink).
    pub player: Color,
    /// Ground tiles and chain edges (green).
    pub ground: Color,
    /// Velocity and resolution arrows (yellow).
    pub arrow: Color,
    /// Ghosted secondary arrows (dim yellow, used with low alpha).
    pub arrow_dim: Color,
    /// Collision markers: crosses and emphasis arrows (red).
    pub marker: Color,
    /// Edge normals and vertex dots (yellow-green).
    pub highlight: Color,
    /// Sensor rectangle in the platform figure (magenta).
    pub sensor: Color,
    /// One-way platform gradient (cyan).
    pub platform: Color,
    /// Annotation text (white).
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: Color::rgb(1.0, 0.5, 0.5),
            ground: Color::rgb(0.0, 0.7, 0.0),
            arrow: Color::rgb(1.0, 1.0, 0.0),
            arrow_dim: Color::rgb(0.8, 0.8, 0.2),
            marker: Color::rgb(1.0, 0.0, 0.0),
            highlight: Color::rgb(0.7, 1.0, 0.0),
            sensor: Color::rgb(1.0, 0.2, 1.0),
            platform: Color::rgb(0.0, 0.8, 1.0),
            text: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// One renderable figure: a name, a surface size, and a composition.
#[derive(Debug, Clone, Copy)]
pub struct Figure {
    name: &'static str,
    width: f64,
    height: f64,
    render: fn(&mut Canvas, &Palette),
}

impl Figure {
    /// Returns the figure's name (also its output file stem).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the figure's surface size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Renders the figure onto a fresh canvas.
    pub fn render(&self, palette: &Palette) -> Canvas {
        let mut canvas = Canvas::new(self.size());
        (self.render)(&mut canvas, palette);
        canvas
    }
}

/// The registry of figures, in blog-post order.
#[derive(Debug, Default)]
pub struct FigureSet {
    figures: IndexMap<&'static str, Figure>,
}

impl FigureSet {
    /// Builds the standard figure set of the collision-resolution post.
    pub fn standard() -> Self {
        let mut set = Self::default();
        set.register("ghostcollision1", 300.0, 250.0, ghost::ghost_collision_1);
        set.register("ghostcollision2", 300.0, 250.0, ghost::ghost_collision_2);
        set.register("resolve1", 250.0, 250.0, resolve::resolve_1);
        set.register("resolve2", 250.0, 250.0, resolve::resolve_2);
        set.register("corner1", 300.0, 250.0, corner::corner_1);
        set.register("corner2", 300.0, 250.0, corner::corner_2);
        set.register("clippedcorner", 300.0, 250.0, corner::clipped_corner);
        set.register("clippedcorner2", 300.0, 250.0, corner::clipped_corner_2);
        set.register("chainshape", 250.0, 150.0, chain::chain_shape);
        set.register("platform", 250.0, 150.0, platform::platform);
        set.register("platform2", 300.0, 250.0, platform::platform_2);
        set.register("contactarea", 150.0, 150.0, contact::contact_area);
        set.register("contactarea2", 150.0, 150.0, contact::contact_area_2);
        set.register("solution", 300.0, 300.0, solution::solution);
        set
    }

    fn register(&mut self, name: &'static str, width: f64, height: f64, render: fn(&mut Canvas, &Palette)) {
        self.figures.insert(
            name,
            Figure {
                name,
                width,
                height,
                render,
            },
        );
    }

    /// Looks up a figure by name.
    pub fn get(&self, name: &str) -> Option<&Figure> {
        self.figures.get(name)
    }

    /// Returns the figure names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.figures.keys().copied()
    }

    /// Iterates over the figures in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Figure> + '_ {
        self.figures.values()
    }

    /// Returns the number of registered figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Returns `true` if no figures are registered.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

/// Zooms the canvas by `factor` about the center of a `width` x `height`
/// surface, the way the close-up figures magnify their content.
fn zoom_about_center(canvas: &mut Canvas, width: f64, height: f64, factor: f64) {
    canvas.translate(width / 2.0, height / 2.0);
    canvas.scale(factor, factor);
    canvas.translate(-width / 2.0, -height / 2.0);
}
