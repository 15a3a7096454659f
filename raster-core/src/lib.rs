//! Pixel formats, surfaces and a software rasterizer.
//!
//! This crate is the shared foundation used by the `tga-codec` and
//! `wavefront` crates: a closed set of [`PixelFormat`]s, the [`Surface`]
//! pixel buffer they describe, and a small set of drawing primitives
//! (pixels, rectangles, lines, triangles) that write directly into a
//! surface's backing bytes.

mod color;
mod error;
mod geometry;
mod pixel_format;
mod raster;
mod surface;

pub use color::Color;
pub use error::SurfaceError;
pub use geometry::Point;
pub use pixel_format::{Origin, PixelFormat};
pub use raster::{fill_line, fill_pixel, fill_rect, fill_triangle, stroke_triangle};
pub use surface::{Surface, SurfaceView};
