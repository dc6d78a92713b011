//! Export of rendered canvases to output files.
//!
//! The canvas records device-space drawing operations; this module turns
//! them into serialized documents on disk. SVG is the only backend.

pub mod svg;

pub use svg::Svg;
