//! SVG renderer for curve segment sets
//!
//! This module turns the segments produced by a curve source into a
//! standalone SVG document of polylines sharing one stroke style.

pub mod config;
pub mod format;
pub mod svg;

pub use config::{RenderOptions, STEP_FACTOR};
pub use format::format_number;
pub use svg::{render_segments, render_svg};
