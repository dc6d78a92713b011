//! SVG export backend.
//!
//! Converts a canvas display list into an [`svg::Document`]: one `<path>`
//! per fill or stroke operation, `<text>` for annotations, and a `<defs>`
//! block holding a `<linearGradient>` for every gradient paint. Gradient
//! coordinates are emitted in user space (`gradientUnits="userSpaceOnUse"`)
//! since the canvas already resolved them to device coordinates.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info};
use svg::Document;
use svg::node::element;

use collidoscope_core::canvas::{Canvas, DrawOp, LinearGradient, Paint};

/// Writes rendered canvases to SVG files.
pub struct Svg {
    file_name: PathBuf,
}

impl Svg {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Renders the canvas and writes the document to this exporter's file.
    pub fn export(&self, canvas: &Canvas) -> Result<(), std::io::Error> {
        let doc = document(canvas);
        self.write_document(&doc)
    }

    fn write_document(&self, doc: &Document) -> Result<(), std::io::Error> {
        info!(file_name:display = self.file_name.display(); "Creating SVG file");
        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name:display = self.file_name.display(), err:err; "Failed to create SVG file");
                return Err(err);
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name:display = self.file_name.display(), err:err; "Failed to write SVG content");
            return Err(err);
        }

        Ok(())
    }

    /// The destination path.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }
}

/// Builds an SVG document from a canvas display list.
pub fn document(canvas: &Canvas) -> Document {
    let size = canvas.size();
    let mut doc = Document::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("viewBox", (0.0, 0.0, size.width(), size.height()));

    let mut gradients = Vec::new();

    for op in canvas.ops() {
        match op {
            DrawOp::Fill { path, paint } => {
                let mut node = element::Path::new()
                    .set("d", path.to_svg_data())
                    .set("stroke", "none");
                node = set_paint_attrs(node, paint, "fill", &mut gradients);
                doc = doc.add(node);
            }
            DrawOp::Stroke { path, paint, width } => {
                let mut node = element::Path::new()
                    .set("d", path.to_svg_data())
                    .set("fill", "none")
                    .set("stroke-width", *width);
                node = set_paint_attrs(node, paint, "stroke", &mut gradients);
                doc = doc.add(node);
            }
            DrawOp::Text {
                position,
                size,
                content,
                paint,
            } => {
                let mut node = element::Text::new(content.clone())
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("font-size", *size)
                    .set("font-family", "sans-serif");
                node = set_paint_attrs(node, paint, "fill", &mut gradients);
                doc = doc.add(node);
            }
        }
    }

    if !gradients.is_empty() {
        let mut defs = element::Definitions::new();
        for gradient in gradients {
            defs = defs.add(gradient);
        }
        doc = doc.add(defs);
    }

    doc
}

/// Sets `fill`/`stroke` plus the matching opacity attribute for a paint,
/// registering a gradient definition when needed.
fn set_paint_attrs<T: svg::Node>(
    mut node: T,
    paint: &Paint,
    attr: &str,
    gradients: &mut Vec<element::LinearGradient>,
) -> T {
    match paint {
        Paint::Solid(color) => {
            node.assign(attr, color);
            if color.alpha() < 1.0 {
                node.assign(format!("{attr}-opacity"), f64::from(color.alpha()));
            }
        }
        Paint::Linear(gradient) => {
            let id = format!("grad{}", gradients.len());
            gradients.push(gradient_element(&id, gradient));
            node.assign(attr, format!("url(#{id})"));
        }
    }
    node
}

fn gradient_element(id: &str, gradient: &LinearGradient) -> element::LinearGradient {
    let mut node = element::LinearGradient::new()
        .set("id", id)
        .set("gradientUnits", "userSpaceOnUse")
        .set("x1", gradient.start().x())
        .set("y1", gradient.start().y())
        .set("x2", gradient.end().x())
        .set("y2", gradient.end().y());

    for stop in gradient.stops() {
        node = node.add(
            element::Stop::new()
                .set("offset", stop.offset())
                .set("stop-color", stop.color().to_hex())
                .set("stop-opacity", f64::from(stop.color().alpha())),
        );
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use collidoscope_core::color::Color;
    use collidoscope_core::geometry::Size;

    fn canvas() -> Canvas {
        Canvas::new(Size::new(300.0, 250.0))
    }

    #[test]
    fn test_document_dimensions_and_viewbox() {
        let c = canvas();
        let rendered = document(&c).to_string();
        assert!(rendered.contains(r#"width="300""#));
        assert!(rendered.contains(r#"height="250""#));
        assert!(rendered.contains(r#"viewBox="0 0 300 250""#));
    }

    #[test]
    fn test_fill_and_stroke_attributes() {
        let mut c = canvas();
        c.set_source(Color::rgba(1.0, 0.5, 0.5, 0.25));
        c.rectangle(10.0, 10.0, 50.0, 50.0);
        c.fill_preserve();
        c.set_source(Color::rgb(1.0, 0.5, 0.5));
        c.set_line_width(3.0);
        c.stroke();

        let rendered = document(&c).to_string();
        // Fill: interior color at quarter opacity, no stroke
        assert!(rendered.contains(r##"fill="#ff8080""##));
        assert!(rendered.contains(r#"fill-opacity="0.25""#));
        // Stroke: outline only, width carried through
        assert!(rendered.contains(r#"fill="none""#));
        assert!(rendered.contains(r##"stroke="#ff8080""##));
        assert!(rendered.contains(r#"stroke-width="3""#));
        // Opaque stroke emits no opacity attribute
        assert!(!rendered.contains("stroke-opacity"));
    }

    #[test]
    fn test_gradient_paint_emits_defs() {
        let mut c = canvas();
        c.set_source_gradient(
            LinearGradient::new(150.0, 150.0, 150.0, 180.0)
                .with_stop(0.0, Color::rgba(0.0, 0.8, 1.0, 0.25))
                .with_stop(1.0, Color::rgba(0.0, 0.8, 1.0, 0.0)),
        );
        c.rectangle(150.0, 150.0, 197.0, 37.0);
        c.fill();

        let rendered = document(&c).to_string();
        assert!(rendered.contains(r#"fill="url(#grad0)""#));
        assert!(rendered.contains(r#"id="grad0""#));
        assert!(rendered.contains(r#"gradientUnits="userSpaceOnUse""#));
        assert!(rendered.contains(r##"stop-color="#00ccff""##));
        assert!(rendered.contains(r#"stop-opacity="0.25""#));
        assert!(rendered.contains(r#"stop-opacity="0""#));
    }

    #[test]
    fn test_distinct_gradients_get_distinct_ids() {
        let mut c = canvas();
        for _ in 0..2 {
            c.set_source_gradient(
                LinearGradient::new(0.0, 0.0, 0.0, 30.0)
                    .with_stop(0.0, Color::rgb(0.0, 0.8, 1.0))
                    .with_stop(1.0, Color::rgba(0.0, 0.8, 1.0, 0.0)),
            );
            c.rectangle(0.0, 0.0, 10.0, 10.0);
            c.fill();
        }

        let rendered = document(&c).to_string();
        assert!(rendered.contains("grad0"));
        assert!(rendered.contains("grad1"));
    }

    #[test]
    fn test_text_element() {
        let mut c = canvas();
        c.set_source(Color::rgb(1.0, 1.0, 1.0));
        c.text(150.0, 30.0, 40.0, "?");

        let rendered = document(&c).to_string();
        assert!(rendered.contains("<text"));
        assert!(rendered.contains(r#"x="150""#));
        assert!(rendered.contains(r#"y="30""#));
        assert!(rendered.contains(r#"font-size="40""#));
        assert!(rendered.contains(">?</text>"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("figure.svg");

        let mut c = canvas();
        c.set_source(Color::rgb(0.0, 0.7, 0.0));
        c.rectangle(50.0, 150.0, 97.0, 97.0);
        c.set_line_width(3.0);
        c.stroke();

        Svg::new(&path).export(&c).expect("write svg");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.starts_with("<svg"));
        assert!(contents.contains("stroke=\"#00b300\""));
    }
}
