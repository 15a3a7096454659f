//! A Wavefront OBJ (v3.0 subset) parser and a flat orthographic renderer.
//!
//! Only `v` (vertex) and `f` (triangular face) directives are read; every
//! other directive is skipped. [`create_model_from_wavefront_obj`] converts
//! a parsed document into a [`Model`], and [`render_model`] draws it into a
//! [`raster_core::Surface`] with [`raster_core::stroke_triangle`] or
//! [`raster_core::fill_triangle`].

mod error;
mod face;
mod model;
mod obj;
mod parser;
mod tokenizer;
mod version;

pub use error::WavefrontError;
pub use face::{Face, FaceCorner};
pub use model::{create_model_from_wavefront_obj, render_model, Model};
pub use obj::{load_file, parse_str, WavefrontObj};
pub use version::WavefrontVersion;
