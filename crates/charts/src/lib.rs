//! # FundWise Charts
//!
//! Turns ordered percentage shares into donut-chart arcs.
//!
//! This is a pure logic crate: `layout_donut` only computes arc lengths, offsets
//! and palette keys. Drawing them (SVG markup, legends) is done by the
//! `presentation` crate.
//!
//! ## Public API
//!
//! - `layout_donut` / `DonutLayout`: cumulative-offset arc layout anchored at 12 o'clock.
//! - `color_key_for` / `stroke_color`: the fixed allocation palette.
//! - `ChartError`: invalid radius or slice percent.

pub mod donut;
pub mod error;
pub mod palette;

pub use donut::{circumference, layout_donut, DonutLayout, ANCHOR_ROTATION_DEG};
pub use error::ChartError;
pub use palette::{color_key_for, stroke_color};
