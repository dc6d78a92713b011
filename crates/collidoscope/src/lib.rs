//! Rendering of the collision-resolution figure set.
//!
//! The library ties the drawing toolkit in `collidoscope-core` to the
//! fixed figure catalogue of the ghost-collisions post: [`FigureRenderer`]
//! resolves figure names, renders each figure onto its own canvas, and
//! exports the result as SVG.

pub mod config;
mod error;
pub mod export;
pub mod figure;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub use collidoscope_core::{canvas, color, geometry, glyph};

pub use config::AppConfig;
pub use error::CollidoscopeError;
pub use figure::{Figure, FigureSet, Palette};

/// Renders figures from the standard set with a configured palette.
pub struct FigureRenderer {
    palette: Palette,
    figures: FigureSet,
}

impl FigureRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            palette: config.palette(),
            figures: FigureSet::standard(),
        }
    }

    /// Returns the figure catalogue.
    pub fn figures(&self) -> &FigureSet {
        &self.figures
    }

    /// Renders one figure to its display list.
    ///
    /// # Errors
    ///
    /// Returns [`CollidoscopeError::UnknownFigure`] if `name` is not in the
    /// catalogue.
    pub fn render(&self, name: &str) -> Result<canvas::Canvas, CollidoscopeError> {
        let figure = self
            .figures
            .get(name)
            .ok_or_else(|| CollidoscopeError::UnknownFigure(name.to_string()))?;
        debug!(figure = figure.name(); "Rendering figure");
        Ok(figure.render(&self.palette))
    }

    /// Renders one figure and serializes it to an SVG string.
    pub fn render_svg(&self, name: &str) -> Result<String, CollidoscopeError> {
        let canvas = self.render(name)?;
        Ok(export::svg::document(&canvas).to_string())
    }

    /// Renders the named figures (all of them when `names` is empty) into
    /// `dir`, one `<name>.svg` per figure.
    ///
    /// The directory is created if missing. Returns the written paths in
    /// render order.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown figure name or I/O error; files already
    /// written stay on disk.
    pub fn render_to_dir(
        &self,
        names: &[String],
        dir: &Path,
    ) -> Result<Vec<PathBuf>, CollidoscopeError> {
        let names: Vec<&str> = if names.is_empty() {
            self.figures.names().collect()
        } else {
            // Resolve every name up front so a typo fails before any file
            // is written.
            for name in names {
                if self.figures.get(name).is_none() {
                    return Err(CollidoscopeError::UnknownFigure(name.clone()));
                }
            }
            names.iter().map(String::as_str).collect()
        };

        fs::create_dir_all(dir)?;
        info!(dir:display = dir.display(), count = names.len(); "Rendering figures");

        let mut written = Vec::with_capacity(names.len());
        for name in names {
            let canvas = self.render(name)?;
            let path = dir.join(format!("{name}.svg"));
            export::Svg::new(&path).export(&canvas)?;
            written.push(path);
        }

        Ok(written)
    }
}
