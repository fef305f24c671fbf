//! Single-month date-grid engine.
//!
//! This crate provides:
//! - `grid`: pure month arithmetic and week-grid generation
//! - `class_names`: the per-element style-class table with caller overrides
//! - `picker`: the `DayPicker` RSX component that renders one month

pub mod class_names;
pub mod grid;
pub mod picker;

pub use class_names::{GridClassNames, GridClassOverrides};
pub use grid::{month_caption, month_grid, month_start, next_month, prev_month};
pub use picker::DayPicker;
