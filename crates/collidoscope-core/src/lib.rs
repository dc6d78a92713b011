//! Collidoscope Core Types and Definitions
//!
//! This crate provides the foundational drawing types for the collidoscope
//! figure renderer. It includes:
//!
//! - **Colors**: Normalized RGBA colors with CSS color-string support ([`color::Color`])
//! - **Geometry**: Points, sizes, and affine transforms ([`geometry`] module)
//! - **Canvas**: The imperative 2D drawing context ([`canvas::Canvas`])
//! - **Glyphs**: The figure drawing toolkit ([`glyph`] module)

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod glyph;
